use crate::{CardId, IllegalPlacement, Player};

#[derive(Clone, Debug, PartialEq, Eq)]
/// The error type for one move. A rejected move leaves the game untouched.
pub enum IllegalMove {
    GameOver,
    WrongTurn {
        expected: Player,
    },
    CardNotInHand {
        card_id: CardId,
    },
    IllegalPlacement {
        card_id: CardId,
        err: IllegalPlacement,
    },
    /// The player to move has no card left, or the board has no empty cell.
    NoLegalMove,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::IllegalPlacement { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "The game is already over"),
            IllegalMove::WrongTurn { expected } => {
                write!(f, "It is not this player's turn, {} is to move", expected)
            }
            IllegalMove::CardNotInHand { card_id } => {
                write!(f, "Tried to play card {}, which is not in the player's hand", card_id)
            }
            IllegalMove::IllegalPlacement { card_id, err } => {
                write!(f, "Error placing card {}: {}", card_id, err)
            }
            IllegalMove::NoLegalMove => write!(f, "There is no card or no empty cell to play"),
        }
    }
}

/// The error type for [`Decks::validate()`](crate::Decks::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    WrongSize { player: Player, len: usize },
    DuplicateCardId { card_id: CardId },
}

impl std::error::Error for DeckError {}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::WrongSize { player, len } => write!(
                f,
                "The deck of {} has {} cards instead of {}",
                player,
                len,
                crate::HAND_SIZE
            ),
            DeckError::DuplicateCardId { card_id } => {
                write!(f, "Card id {} is used more than once", card_id)
            }
        }
    }
}
