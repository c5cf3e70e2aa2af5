use crate::piece::PieceType;

pub const BOARD_SIZE: usize = 8;
pub const NUM_PIECES: usize = 5;

/// Full catalog in canonical order; a reset board offers pieces in this order.
pub const PIECES: [PieceType; NUM_PIECES] = [
    PieceType::Destroyer,
    PieceType::Cruiser,
    PieceType::Submarine,
    PieceType::Battleship,
    PieceType::Carrier,
];

/// Total number of piece segments in a full fleet.
pub const TOTAL_PIECE_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Upper bound on random placement draws for one board.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Random draws per grid cell before the computer falls back to picking
/// among the remaining unshot cells directly.
pub const SHOT_DRAWS_PER_CELL: usize = 16;

#[cfg(feature = "std")]
pub const SEED_ENV: &str = "BATTLESHIP_SEED";

/// Construction parameters for a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            seed: 0,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Default configuration seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        use rand::Rng;
        Self::with_seed(rand::rng().random())
    }

    /// Seed taken from `BATTLESHIP_SEED`, or entropy when unset or invalid.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        match std::env::var(SEED_ENV).ok().and_then(|s| s.parse().ok()) {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }
}
