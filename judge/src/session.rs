use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use triad::{CardId, Cell, DeckError, Decks, GameState, Greedy, IllegalMove, Placement, Player, Strategy};

/// How long the opponent pretends to think before its move is applied.
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(250);

/// A scheduled opponent move.
///
/// This is the handle for the pacing timer. It only fires if it is still the
/// session's current pending move: a reset, or a newer schedule, makes it stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingOpponentMove {
    due: Instant,
    generation: u64,
}

impl PendingOpponentMove {
    /// The game this move was scheduled in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Hosts one game against a computer opponent, including the pause before
/// the opponent's move.
///
/// The engine itself knows nothing about time. The session schedules the
/// opponent's move when it becomes the opponent's turn, and applies it when
/// polled after the delay has elapsed. Callers pass in the current time.
pub struct Session<S = Greedy> {
    state: GameState,
    opponent: S,
    delay: Duration,
    /// Bumped on every new game.
    generation: u64,
    pending: Option<PendingOpponentMove>,
}

impl Session<Greedy> {
    /// A session against the greedy opponent.
    pub fn new(decks: Decks, delay: Duration) -> Result<Self, DeckError> {
        Self::with_opponent(decks, delay, Greedy)
    }
}

impl<S: Strategy> Session<S> {
    pub fn with_opponent(decks: Decks, delay: Duration, opponent: S) -> Result<Self, DeckError> {
        Ok(Self {
            state: GameState::new(decks)?,
            opponent,
            delay,
            generation: 0,
            pending: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts over. A pending opponent move of the previous game is dropped
    /// and will never be applied.
    pub fn new_game(&mut self) {
        self.state.reset();
        self.generation += 1;
        if let Some(stale) = self.pending.take() {
            debug!(
                generation = stale.generation,
                "Cancelled pending opponent move"
            );
        }
        info!(generation = self.generation, "New game");
    }

    /// Plays the human's move and, if the opponent is to move next,
    /// schedules its reply.
    pub fn human_move(
        &mut self,
        card_id: &CardId,
        cell: Cell,
        now: Instant,
    ) -> Result<Placement, IllegalMove> {
        let placement = self.state.apply_human_move(card_id, cell)?;
        info!(
            card = %placement.card.id,
            cell = %placement.cell,
            captured = placement.captured.len(),
            "Human move"
        );
        self.schedule_opponent(now);
        Ok(placement)
    }

    fn schedule_opponent(&mut self, now: Instant) {
        self.pending = (!self.state.is_game_over() && self.state.turn() == Player::Ai).then(|| {
            PendingOpponentMove {
                due: now + self.delay,
                generation: self.generation,
            }
        });
    }

    /// The currently scheduled opponent move, if any.
    pub fn pending(&self) -> Option<PendingOpponentMove> {
        self.pending
    }

    /// When the caller should poll next.
    pub fn opponent_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Applies the pending opponent move if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Placement> {
        let pending = self.pending?;
        self.fire(pending, now)
    }

    /// Applies the opponent move scheduled by `pending`, if it is due and
    /// still current.
    ///
    /// A handle from before a reset, or one that already fired, does nothing.
    pub fn fire(&mut self, pending: PendingOpponentMove, now: Instant) -> Option<Placement> {
        if self.pending != Some(pending) || pending.generation != self.generation {
            debug!(
                generation = pending.generation,
                current_generation = self.generation,
                "Ignoring stale opponent move"
            );
            return None;
        }
        if now < pending.due {
            return None;
        }
        self.pending = None;

        match self.state.apply_computed_move(Player::Ai, &mut self.opponent) {
            Ok(placement) => {
                info!(
                    card = %placement.card.id,
                    cell = %placement.cell,
                    captured = placement.captured.len(),
                    "Opponent move"
                );
                if let Some(outcome) = self.state.outcome() {
                    info!(%outcome, score = %self.state.score(), "Game over");
                }
                Some(placement)
            }
            Err(err) => {
                warn!(%err, "Opponent could not move");
                None
            }
        }
    }
}
