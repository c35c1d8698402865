use crate::Cell;

/// The error type for [`Board::calculate()`](crate::Board::calculate), i.e. for placing a single card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OccupiedCell { cell: Cell },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OccupiedCell { cell } => {
                write!(f, "Card was placed on cell {}, which is already occupied", cell)
            }
        }
    }
}
