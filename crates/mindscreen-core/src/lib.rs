//! mindscreen-core
//!
//! Pure domain types for depression screening: the symptom catalog, CF rules,
//! answers, and screening results. No I/O; this is the shared vocabulary of
//! the Mindscreen system.

pub mod confidence;
pub mod error;
pub mod models;
