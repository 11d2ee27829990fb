//! mindscreen-engine
//!
//! Certainty Factor inference. Pure computation with no I/O and no shared state.
//! Takes a snapshot of expert rules and one submission's answers and
//! produces the best-supported diagnosis with every per-disease score.

pub mod cf;
pub mod error;
pub mod infer;
pub mod scale;
pub mod validation;

pub use error::{InferenceError, RuleBaseViolation};
pub use infer::infer;
