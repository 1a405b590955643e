//! Game flow module
//!
//! Owns the round protocol. Pure and UI-agnostic:
//! - Phase transitions only through explicit actions
//! - Randomness injected by the caller
//! - No rendering or platform dependencies

pub mod action;
pub mod state;
pub mod view;

pub use action::{Action, Session};
pub use state::{GameState, Phase, RoundRecord};
pub use view::{Control, PhaseView};
