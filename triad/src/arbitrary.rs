use quickcheck::{Arbitrary, Gen};

use crate::{Board, Card, Cell, Player, NUM_CELLS};

/// A board in some reachable position, plus a card to place on it.
#[derive(Clone, Debug)]
pub struct PlaceCardInput {
    pub board: Board,
    pub cell: Cell,
    pub card: Card,
    pub owner: Player,
}

/// A board in some reachable position, plus a hand to choose from.
#[derive(Clone, Debug)]
pub struct HandInput {
    pub board: Board,
    // Card ids are unique within the hand
    pub hand: Vec<Card>,
    pub owner: Player,
}

/// Side values are kept small so that ties come up often.
fn arbitrary_card(g: &mut Gen, id: String) -> Card {
    let mut values = [0u32; 4];
    for value in values.iter_mut() {
        *value = u32::from(u8::arbitrary(g) % 10);
    }
    Card {
        id: crate::CardId(id),
        name: String::from("Arbitrary"),
        values,
    }
}

/// Builds a board by placing cards one at a time, so captures have happened
/// the same way they would in a game.
fn arbitrary_board(g: &mut Gen) -> Board {
    let num_cards = usize::arbitrary(g) % (NUM_CELLS + 1);
    let mut board = Board::new();
    for n in 0..num_cards {
        let empty: Vec<Cell> = board.empty_cells().collect();
        let cell = *g.choose(&empty).unwrap();
        let card = arbitrary_card(g, format!("p{}", n));
        board = board.place_card(cell, &card, Player::arbitrary(g)).unwrap().0;
    }
    board
}

impl Arbitrary for PlaceCardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            board: arbitrary_board(g),
            cell: Cell::arbitrary(g),
            card: arbitrary_card(g, String::from("new")),
            owner: Player::arbitrary(g),
        }
    }
}

impl Arbitrary for HandInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let hand_size = usize::arbitrary(g) % 6;
        Self {
            board: arbitrary_board(g),
            hand: (0..hand_size)
                .map(|n| arbitrary_card(g, format!("h{}", n)))
                .collect(),
            owner: Player::arbitrary(g),
        }
    }
}

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        Cell::from_index(usize::arbitrary(g) % NUM_CELLS)
    }
}

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Player::ALL).unwrap()
    }
}
