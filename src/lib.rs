//! studylog - Daily study log tracker
//!
//! Records per-day study amounts for physics, chemistry, maths and mock exams,
//! keeps them in a single JSON slot, and renders totals plus a chart after
//! every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::StudyLogError;
