//! Playing games
//!
//! The judge boundary and the turn orchestrator that drives a game
//! against it.

pub mod judge;
pub mod orchestrator;

pub use judge::{Judge, JudgeError, Simulator};
pub use orchestrator::{GameError, GameOutcome, GameReport, Orchestrator, TurnRecord};
