//! mindscreen-rules
//!
//! The rule store: symptom catalog, expert CF rules, and disease/treatment
//! reference data. Hands the inference engine an immutable snapshot of the
//! active rules.

pub mod document;
pub mod error;
pub mod store;

pub use store::RuleStore;
