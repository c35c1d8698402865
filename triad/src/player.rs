use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    #[serde(rename = "HUMAN")]
    Human,
    #[serde(rename = "AI")]
    Ai,
}

impl Player {
    /// Both players, in seating order. The human always moves first.
    pub const ALL: [Player; 2] = [Player::Human, Player::Ai];

    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Single-letter tag, used when drawing the board.
    pub fn tag(self) -> char {
        match self {
            Player::Human => 'H',
            Player::Ai => 'A',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn serializes_as_upper_case_tags() {
        assert_eq!(serde_json::to_string(&Player::Human).unwrap(), "\"HUMAN\"");
        assert_eq!(serde_json::to_string(&Player::Ai).unwrap(), "\"AI\"");
        assert_eq!(
            serde_json::from_str::<Player>("\"AI\"").unwrap(),
            Player::Ai
        );
    }
}
