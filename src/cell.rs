/// What a single grid cell currently shows.
///
/// Shot outcomes overwrite segment states, so a `Hit` no longer tells which
/// segment kind used to be there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    PieceMiddleHorizontal,
    PieceMiddleVertical,
    PieceLeft,
    PieceRight,
    PieceTop,
    PieceBottom,
    Miss,
    Hit,
}

impl CellState {
    /// `true` for the six unhit segment states.
    pub fn is_occupied(&self) -> bool {
        matches!(
            self,
            CellState::PieceMiddleHorizontal
                | CellState::PieceMiddleVertical
                | CellState::PieceLeft
                | CellState::PieceRight
                | CellState::PieceTop
                | CellState::PieceBottom
        )
    }

    /// `true` once a shot has landed here.
    pub fn is_shot(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

#[cfg(test)]
mod tests {
    use super::CellState::*;

    #[test]
    fn occupied_and_shot_are_disjoint() {
        let all = [
            Empty,
            PieceMiddleHorizontal,
            PieceMiddleVertical,
            PieceLeft,
            PieceRight,
            PieceTop,
            PieceBottom,
            Miss,
            Hit,
        ];
        assert_eq!(all.iter().filter(|c| c.is_occupied()).count(), 6);
        assert_eq!(all.iter().filter(|c| c.is_shot()).count(), 2);
        assert!(all.iter().all(|c| !(c.is_occupied() && c.is_shot())));
        assert!(!Empty.is_occupied() && !Empty.is_shot());
    }
}
