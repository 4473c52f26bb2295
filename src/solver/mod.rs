//! Solving machinery
//!
//! Candidate tracking, entropy evaluation and budget-bounded guess
//! selection.

pub mod candidates;
pub mod entropy;
pub mod selector;

pub use candidates::{CandidateState, InconsistentFeedback};
pub use entropy::{GuessMetrics, calculate_entropy, calculate_metrics};
pub use selector::{Selection, select_guess};
