//! Common types for the engine: error codes and shot outcomes.

/// Outcome of a shot chosen by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub x: usize,
    pub y: usize,
    /// `true` when the shot landed on a ship segment.
    pub hit: bool,
}

/// Errors returned by board and game operations.
///
/// Success is carried by `Result::Ok`; each variant maps onto a stable
/// numeric code through [`EngineError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// Generic failure (retry caps exhausted, no target left).
    Failed,
    /// Piece name is not part of the catalog.
    PieceTypeInvalid,
    /// Piece has already been placed on this board.
    NoPieceAvailable,
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Target cell was already shot at.
    AlreadyShoot,
    /// Operation is not legal in the current game phase.
    NotInGameState,
}

impl EngineError {
    /// Numeric code of the error. `0` is reserved for success.
    pub fn code(&self) -> u8 {
        match self {
            EngineError::Failed => 1,
            EngineError::PieceTypeInvalid => 2,
            EngineError::NoPieceAvailable => 3,
            EngineError::OutOfBounds => 4,
            EngineError::AlreadyShoot => 5,
            EngineError::NotInGameState => 6,
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Failed => write!(f, "Operation failed"),
            EngineError::PieceTypeInvalid => write!(f, "Piece type is not in the catalog"),
            EngineError::NoPieceAvailable => write!(f, "Piece is no longer available"),
            EngineError::OutOfBounds => write!(f, "Coordinate is out of bounds"),
            EngineError::AlreadyShoot => write!(f, "Cell has already been shot"),
            EngineError::NotInGameState => write!(f, "Not in the required game state"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
