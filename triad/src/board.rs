mod cell;
mod error;

pub use cell::*;
pub use error::*;

use crate::{Card, Player, Side};

/// How a placed card meets the card next to it in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    /// Row offset of the neighbor.
    pub di: i8,
    /// Column offset of the neighbor.
    pub dj: i8,
    /// The side of the placed card that faces the neighbor.
    pub placed_side: Side,
    /// The side of the neighbor that faces back.
    pub neighbor_side: Side,
}

/// Up, right, down, left.
pub const DIRECTIONS: [Direction; 4] = [
    Direction {
        di: -1,
        dj: 0,
        placed_side: Side::Top,
        neighbor_side: Side::Bottom,
    },
    Direction {
        di: 0,
        dj: 1,
        placed_side: Side::Right,
        neighbor_side: Side::Left,
    },
    Direction {
        di: 1,
        dj: 0,
        placed_side: Side::Bottom,
        neighbor_side: Side::Top,
    },
    Direction {
        di: 0,
        dj: -1,
        placed_side: Side::Left,
        neighbor_side: Side::Right,
    },
];

/// An occupied cell: the card lying there and the player who currently owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub owner: Player,
    pub card: Card,
}

/// The 3×3 playing grid.
///
/// Cards are only ever added to the board. Once a card is placed, the only
/// thing that can change about its cell is the owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// Row-major, indexed by [`Cell::index()`].
    cells: [Option<Slot>; NUM_CELLS],
}

/// The effects of placing one card, computed but not yet applied.
pub struct PlacementCalculation<'a> {
    /// Ties the calculation to the board it was computed on
    board: &'a Board,
    card: &'a Card,
    pub cell: Cell,
    pub owner: Player,
    /// The opponent cells that change owner.
    pub captured: CellSet,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<&Slot> {
        self.cells[cell.index()].as_ref()
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == NUM_CELLS
    }

    /// Number of cells currently owned by `player`.
    pub fn count_owned(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|slot| slot.owner == player)
            .count()
    }

    /// The empty cells, in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.is_empty(cell))
    }

    /// The occupied cells, in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Slot)> + '_ {
        Cell::all().filter_map(|cell| self.get(cell).map(|slot| (cell, slot)))
    }

    /// Calculate placing a card and return the effects that this would have.
    ///
    /// This is the core function of this type. It checks whether the target
    /// cell is free, and determines which neighboring cells would be captured:
    /// a neighbor is captured when it is owned by the opponent of `owner` and
    /// the placed card's facing side is strictly greater than the neighbor's
    /// facing side. All four comparisons are made against the board as it is
    /// now, so captures never chain.
    ///
    /// The returned struct has a method to actually apply these changes to the
    /// board, and get a new board.
    ///
    /// This function does not validate that the card is in anyone's hand, or
    /// that it is `owner`'s turn.
    pub fn calculate<'a>(
        &'a self,
        cell: Cell,
        card: &'a Card,
        owner: Player,
    ) -> Result<PlacementCalculation<'a>, IllegalPlacement> {
        if !self.is_empty(cell) {
            return Err(IllegalPlacement::OccupiedCell { cell });
        }

        let mut captured = CellSet::new();
        for direction in &DIRECTIONS {
            let Some(neighbor_cell) = cell.offset(direction.di, direction.dj) else {
                continue;
            };
            let Some(neighbor) = self.get(neighbor_cell) else {
                continue;
            };
            if neighbor.owner == owner {
                continue;
            }
            if card.value(direction.placed_side) > neighbor.card.value(direction.neighbor_side) {
                captured = captured.insert(neighbor_cell);
            }
        }

        Ok(PlacementCalculation {
            board: self,
            card,
            cell,
            owner,
            captured,
        })
    }

    /// Places `card` for `owner` and returns the resulting board together
    /// with the cells that were captured.
    ///
    /// `self` is left untouched, also when the cell is occupied.
    pub fn place_card(
        &self,
        cell: Cell,
        card: &Card,
        owner: Player,
    ) -> Result<(Board, CellSet), IllegalPlacement> {
        let calculation = self.calculate(cell, card, owner)?;
        let captured = calculation.captured;
        Ok((calculation.execute(), captured))
    }
}

impl<'a> PlacementCalculation<'a> {
    /// Apply the computed changes from placing the card.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        board.cells[self.cell.index()] = Some(Slot {
            owner: self.owner,
            card: self.card.clone(),
        });
        for cell in self.captured {
            if let Some(slot) = &mut board.cells[cell.index()] {
                slot.owner = self.owner;
            }
        }
        board
    }
}
