use anyhow::Context;
use tracing::{debug, trace};
use triad::{visualize_board, GameState, Outcome, Player, Strategy};

/// Tally of a series of games, from the point of view of the two seats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    /// Indexed by `Player as usize`.
    pub wins: [usize; 2],
    pub draws: usize,
}

impl MatchScore {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(player) => self.wins[player as usize] += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }
}

/// Plays one game from the start, with each seat driven by a strategy.
///
/// `state` is reset first, so the decks it was created with are reused.
/// Returns an error if a strategy produces an illegal move.
pub fn play_game(
    state: &mut GameState,
    human: &mut dyn Strategy,
    ai: &mut dyn Strategy,
) -> anyhow::Result<Outcome> {
    state.reset();
    while !state.is_game_over() {
        let player = state.turn();
        let strategy: &mut dyn Strategy = match player {
            Player::Human => &mut *human,
            Player::Ai => &mut *ai,
        };
        let placement = state
            .apply_computed_move(player, strategy)
            .with_context(|| format!("Illegal move by {}", player))?;
        trace!(
            %player,
            card = %placement.card.id,
            cell = %placement.cell,
            captured = placement.captured.len()
        );
    }
    trace!("Final board:\n{}", visualize_board(state.board()));
    state.outcome().context("Game ended without an outcome")
}

/// Plays `num_games` games and tallies the outcomes.
pub fn play_matchup(
    state: &mut GameState,
    human: &mut dyn Strategy,
    ai: &mut dyn Strategy,
    num_games: usize,
) -> anyhow::Result<MatchScore> {
    let mut match_score = MatchScore::default();
    for game_idx in 0..num_games {
        let outcome = play_game(state, human, ai)?;
        debug!(game_idx, %outcome, score = %state.score());
        match_score.record(outcome);
    }
    Ok(match_score)
}
