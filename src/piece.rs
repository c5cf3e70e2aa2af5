//! Piece catalog and placement orientation.

use core::fmt;
use core::str::FromStr;

use crate::common::EngineError;

/// Orientation of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse `"horizontal"`/`"h"` or `"vertical"`/`"v"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Type of piece in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    Destroyer,
    Cruiser,
    Submarine,
    Battleship,
    Carrier,
}

impl PieceType {
    /// Number of contiguous cells the piece occupies.
    pub const fn length(&self) -> usize {
        match self {
            PieceType::Destroyer => 2,
            PieceType::Cruiser => 3,
            PieceType::Submarine => 3,
            PieceType::Battleship => 4,
            PieceType::Carrier => 5,
        }
    }

    /// Catalog name of the piece.
    pub const fn name(&self) -> &'static str {
        match self {
            PieceType::Destroyer => "Destroyer",
            PieceType::Cruiser => "Cruiser",
            PieceType::Submarine => "Submarine",
            PieceType::Battleship => "Battleship",
            PieceType::Carrier => "Carrier",
        }
    }

    /// Index of the placement coordinate within the piece's span.
    pub const fn pivot(&self) -> usize {
        self.length().div_ceil(2) - 1
    }
}

impl FromStr for PieceType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::PIECES
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or(EngineError::PieceTypeInvalid)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_names() {
        assert_eq!("Carrier".parse::<PieceType>(), Ok(PieceType::Carrier));
        assert_eq!("Submarine".parse::<PieceType>(), Ok(PieceType::Submarine));
        assert_eq!(
            "carrier".parse::<PieceType>(),
            Err(EngineError::PieceTypeInvalid)
        );
        assert_eq!("".parse::<PieceType>(), Err(EngineError::PieceTypeInvalid));
    }

    #[test]
    fn pivot_is_ceil_half_minus_one() {
        assert_eq!(PieceType::Destroyer.pivot(), 0);
        assert_eq!(PieceType::Cruiser.pivot(), 1);
        assert_eq!(PieceType::Battleship.pivot(), 1);
        assert_eq!(PieceType::Carrier.pivot(), 2);
    }

    #[test]
    fn orientation_aliases() {
        assert_eq!(Orientation::parse("h"), Some(Orientation::Horizontal));
        assert_eq!(Orientation::parse("horizontal"), Some(Orientation::Horizontal));
        assert_eq!(Orientation::parse("v"), Some(Orientation::Vertical));
        assert_eq!(Orientation::parse("vertical"), Some(Orientation::Vertical));
        assert_eq!(Orientation::parse("H"), None);
        assert_eq!(Orientation::parse("diagonal"), None);
    }
}
