//! Turn rules for Whisker Woods.
//!
//! Generates the forest, resolves the cat's actions against the hunger and
//! energy economy, runs the berry-matching encounters, and tracks levels up
//! to the final challenge. [`Game`] ties it all into a playable session.

pub mod action;
pub mod config;
pub mod economy;
pub mod encounter;
pub mod error;
pub mod event;
pub mod game;
pub mod generate;
pub mod progression;
pub mod rules;

pub use action::{Action, ActionOutcome, Rejection, resolve_action};
pub use config::GameConfig;
pub use economy::{Charge, Consciousness, HungerWarning};
pub use encounter::{Encounter, Feeding, Reward, validate_berry};
pub use error::{MechError, MechResult};
pub use event::GameEvent;
pub use game::{Game, GameStatus};
pub use progression::{LevelReport, update_level};
pub use rules::{BoostRules, Rules};
