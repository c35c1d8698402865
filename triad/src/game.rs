use std::cmp::Ordering;

use crate::{
    Board, Card, CardId, Cell, CellSet, DeckError, Decks, Greedy, IllegalMove, Move, Player,
    Strategy,
};

/// Number of cells owned by each player.
///
/// Always computed from the board, see [`GameState::score()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub human: usize,
    pub ai: usize,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You {} : {} AI", self.human, self.ai)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Draw,
    Win(Player),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win(Player::Human) => write!(f, "You win"),
            Outcome::Win(Player::Ai) => write!(f, "AI wins"),
        }
    }
}

/// What the presentation layer should tell the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    YourTurn,
    OpponentThinking,
    Finished(Outcome),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::YourTurn => write!(f, "Your turn"),
            Status::OpponentThinking => write!(f, "AI thinking…"),
            Status::Finished(outcome) => write!(f, "{}", outcome),
        }
    }
}

/// Summarizes a move that was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub card: Card,
    pub cell: Cell,
    pub captured: CellSet,
}

/// The complete state of one game.
///
/// All mutation goes through [`GameState::play()`] and [`GameState::reset()`].
/// A rejected move leaves every field as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    decks: Decks,
    board: Board,
    /// Indexed by `Player as usize`.
    hands: [Vec<Card>; 2],
    turn: Player,
    game_over: bool,
}

impl GameState {
    /// Starts a game with the starter decks.
    pub fn new_game() -> Self {
        Self::with_decks(Decks::starter())
    }

    /// Starts a game with custom decks.
    pub fn new(decks: Decks) -> Result<Self, DeckError> {
        decks.validate()?;
        Ok(Self::with_decks(decks))
    }

    fn with_decks(decks: Decks) -> Self {
        let hands = [decks.human.clone(), decks.ai.clone()];
        Self {
            decks,
            board: Board::new(),
            hands,
            turn: Player::Human,
            game_over: false,
        }
    }

    /// Puts every field back to its starting value: empty board, full hands,
    /// human to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.hands = [self.decks.human.clone(), self.decks.ai.clone()];
        self.turn = Player::Human;
        self.game_over = false;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player as usize]
    }

    /// The player to move. Does not change any more once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> Score {
        Score {
            human: self.board.count_owned(Player::Human),
            ai: self.board.count_owned(Player::Ai),
        }
    }

    /// `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        let Score { human, ai } = self.score();
        Some(match human.cmp(&ai) {
            Ordering::Less => Outcome::Win(Player::Ai),
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::Win(Player::Human),
        })
    }

    pub fn status(&self) -> Status {
        match (self.outcome(), self.turn) {
            (Some(outcome), _) => Status::Finished(outcome),
            (None, Player::Human) => Status::YourTurn,
            (None, Player::Ai) => Status::OpponentThinking,
        }
    }

    /// Plays a card from the human's hand.
    pub fn apply_human_move(
        &mut self,
        card_id: &CardId,
        cell: Cell,
    ) -> Result<Placement, IllegalMove> {
        self.play(Player::Human, card_id, cell)
    }

    /// Lets the greedy opponent pick and play its move.
    pub fn apply_opponent_move(&mut self) -> Result<Placement, IllegalMove> {
        self.apply_computed_move(Player::Ai, &mut Greedy)
    }

    /// Asks `strategy` for a move on behalf of `player` and plays it.
    ///
    /// The strategy only sees the board and `player`'s hand, and is not
    /// consulted at all if `player` may not move right now.
    pub fn apply_computed_move<S: Strategy + ?Sized>(
        &mut self,
        player: Player,
        strategy: &mut S,
    ) -> Result<Placement, IllegalMove> {
        self.check_may_move(player)?;
        let Move { card_id, cell } = strategy
            .choose_move(&self.board, self.hand(player), player)
            .ok_or(IllegalMove::NoLegalMove)?;
        self.play(player, &card_id, cell)
    }

    /// Removes the card from `player`'s hand, places it, and advances the turn.
    ///
    /// Everything is validated before anything changes, so the card leaves
    /// the hand if and only if it lands on the board.
    pub fn play(
        &mut self,
        player: Player,
        card_id: &CardId,
        cell: Cell,
    ) -> Result<Placement, IllegalMove> {
        self.check_may_move(player)?;
        let hand = &self.hands[player as usize];
        let card_idx = hand
            .iter()
            .position(|card| &card.id == card_id)
            .ok_or_else(|| IllegalMove::CardNotInHand {
                card_id: card_id.clone(),
            })?;
        let calculation = self
            .board
            .calculate(cell, &hand[card_idx], player)
            .map_err(|err| IllegalMove::IllegalPlacement {
                card_id: card_id.clone(),
                err,
            })?;
        let captured = calculation.captured;
        let board = calculation.execute();

        self.board = board;
        let card = self.hands[player as usize].remove(card_idx);
        if self.board.is_full() {
            self.game_over = true;
        } else {
            self.turn = player.opponent();
        }

        Ok(Placement {
            player,
            card,
            cell,
            captured,
        })
    }

    fn check_may_move(&self, player: Player) -> Result<(), IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        if player != self.turn {
            return Err(IllegalMove::WrongTurn {
                expected: self.turn,
            });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
