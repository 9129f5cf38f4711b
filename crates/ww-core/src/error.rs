use crate::board::Bounds;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the world model.
///
/// These indicate configuration or programming mistakes (impossible board
/// requests, malformed entities, unparseable input), never a player's rule
/// violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A board was requested with `min > max` on some axis.
    #[error("invalid range: x {min_x}..={max_x}, y {min_y}..={max_y}")]
    InvalidRange {
        /// Lower x bound.
        min_x: i32,
        /// Upper x bound.
        max_x: i32,
        /// Lower y bound.
        min_y: i32,
        /// Upper y bound.
        max_y: i32,
    },

    /// More tiles were requested for population than the board can offer.
    #[error("insufficient space: requested {requested} tiles, {available} available")]
    InsufficientSpace {
        /// Number of tiles requested.
        requested: usize,
        /// Number of empty, non-origin tiles on the board.
        available: usize,
    },

    /// An entity of the wrong kind was passed where an item was expected.
    #[error("invalid entity type: expected {expected}, got {actual}")]
    InvalidEntityType {
        /// The kind the operation needed.
        expected: &'static str,
        /// The kind that was supplied.
        actual: &'static str,
    },

    /// Item text could not be resolved to a known item.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Direction text was not one of W, A, S, D.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

impl CoreError {
    pub(crate) fn invalid_range(bounds: Bounds) -> Self {
        Self::InvalidRange {
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
        }
    }
}
