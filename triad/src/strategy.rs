use crate::{Board, Card, CardId, Cell, Player};

/// Specifies which card to play, and where.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub card_id: CardId,
    pub cell: Cell,
}

/// Picks moves for one seat.
pub trait Strategy {
    /// Chooses a card from `hand` and an empty cell of `board` for `owner`.
    ///
    /// Returns `None` only if there is no such pair, i.e. the hand is empty
    /// or the board is full.
    fn choose_move(&mut self, board: &Board, hand: &[Card], owner: Player) -> Option<Move>;
}

/// How many cells `owner` would capture by placing `card` on `cell`.
///
/// Nothing is placed. An occupied `cell` gives `None`, which compares lower
/// than any legal gain:
///
/// ```
/// # use triad::{simulate_gain, Board, Card, Cell, Player};
/// let card = Card::new("x", "X", [5, 5, 5, 5]);
/// let board = Board::new();
/// assert_eq!(simulate_gain(&board, Cell::from_index(4), &card, Player::Ai), Some(0));
/// let (board, _) = board.place_card(Cell::from_index(4), &card, Player::Human).unwrap();
/// assert_eq!(simulate_gain(&board, Cell::from_index(4), &card, Player::Ai), None);
/// assert!(None < Some(0));
/// ```
pub fn simulate_gain(board: &Board, cell: Cell, card: &Card, owner: Player) -> Option<u32> {
    board
        .calculate(cell, card, owner)
        .ok()
        .map(|calculation| calculation.captured.len())
}

/// The greedy one-ply choice: the (card, cell) pair that captures the most
/// cells right now.
///
/// Cards are tried in hand order, and for each card the empty cells in
/// ascending index order. On a tie, the first pair found wins, so the result
/// only depends on `board`, `hand` and `owner`.
pub fn choose_move(board: &Board, hand: &[Card], owner: Player) -> Option<Move> {
    let mut best_gain: Option<u32> = None;
    let mut best: Option<(usize, Cell)> = None;
    for (card_idx, card) in hand.iter().enumerate() {
        for cell in board.empty_cells() {
            let gain = simulate_gain(board, cell, card, owner);
            if gain > best_gain {
                best_gain = gain;
                best = Some((card_idx, cell));
            }
        }
    }
    best.map(|(card_idx, cell)| Move {
        card_id: hand[card_idx].id.clone(),
        cell,
    })
}

/// The opponent: always plays [`choose_move()`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn choose_move(&mut self, board: &Board, hand: &[Card], owner: Player) -> Option<Move> {
        choose_move(board, hand, owner)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{HandInput, PlaceCardInput};

    quickcheck! {
        fn gain_matches_placement(input: PlaceCardInput) -> bool {
            let PlaceCardInput { board, cell, card, owner } = input;
            let gain = simulate_gain(&board, cell, &card, owner);
            match board.place_card(cell, &card, owner) {
                Ok((_, captured)) => gain == Some(captured.len()),
                Err(_) => gain.is_none(),
            }
        }

        fn greedy_move_is_deterministic(input: HandInput) -> bool {
            let HandInput { board, hand, owner } = input;
            choose_move(&board, &hand, owner) == choose_move(&board, &hand, owner)
        }

        fn greedy_move_is_first_maximum(input: HandInput) -> bool {
            let HandInput { board, hand, owner } = input;
            let chosen = choose_move(&board, &hand, owner);
            if hand.is_empty() || board.is_full() {
                return chosen.is_none();
            }
            let Some(Move { card_id, cell }) = chosen else {
                return false;
            };
            let card_idx = hand.iter().position(|card| card.id == card_id).unwrap();
            let chosen_gain = simulate_gain(&board, cell, &hand[card_idx], owner);
            // Nothing beats the choice, and nothing earlier ties it
            hand.iter().enumerate().all(|(idx, card)| {
                board.empty_cells().all(|c| {
                    let gain = simulate_gain(&board, c, card, owner);
                    let earlier = (idx, c) < (card_idx, cell);
                    gain < chosen_gain || (gain == chosen_gain && !earlier)
                })
            })
        }
    }

    #[test]
    fn prefers_most_captures() {
        let weak = Card::new("w", "Weak", [1, 1, 1, 1]);
        let mut board = Board::new();
        for index in [0, 2] {
            board = board
                .place_card(Cell::from_index(index), &weak, Player::Human)
                .unwrap()
                .0;
        }
        let hand = vec![
            Card::new("b1", "Blunt", [1, 1, 1, 1]),
            Card::new("b2", "Sharp", [5, 5, 5, 5]),
        ];
        // Cell 1 sits between both human cards
        assert_eq!(
            choose_move(&board, &hand, Player::Ai),
            Some(Move {
                card_id: CardId::from("b2"),
                cell: Cell::from_index(1)
            })
        );
        assert_eq!(
            simulate_gain(&board, Cell::from_index(1), &hand[1], Player::Ai),
            Some(2)
        );
    }

    #[test]
    fn ties_go_to_first_card_and_lowest_cell() {
        let board = Board::new();
        let hand = vec![
            Card::new("b1", "Sprite", [4, 4, 5, 3]),
            Card::new("b2", "Knight", [7, 3, 2, 6]),
        ];
        assert_eq!(
            Greedy.choose_move(&board, &hand, Player::Ai),
            Some(Move {
                card_id: CardId::from("b1"),
                cell: Cell::from_index(0)
            })
        );
    }

    #[test]
    fn refuses_without_cards() {
        assert_eq!(choose_move(&Board::new(), &[], Player::Ai), None);
    }
}
