//! Error types for the mechanics engine.

use ww_core::CoreError;

/// Errors that can occur while running the game rules.
///
/// Player rule violations (walking off the board, climbing off a trunk)
/// are not errors; they come back as [`crate::action::Rejection`]s.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A world-model error: impossible board, malformed entity, bad input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Action text named no known action kind.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// An action kind that needs a payload was given none.
    #[error("{0} needs a target")]
    MissingPayload(&'static str),

    /// A berry was offered while no animal is waiting.
    #[error("no encounter in progress")]
    NoEncounter,

    /// An action was attempted while an animal is still waiting for berries.
    #[error("an animal is waiting for your help")]
    EncounterInProgress,

    /// The game already ended.
    #[error("the game is over")]
    GameOver,

    /// The rules configuration is malformed or impossible.
    #[error("invalid rules: {0}")]
    InvalidRules(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
