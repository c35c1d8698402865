use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{DeckError, Player};

/// Number of cards each player starts with.
pub const HAND_SIZE: usize = 5;

/// The unique identifier of a [card](Card), e.g. `"a1"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        CardId(String::from(id))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the four edges of a [card](Card).
///
/// The discriminant is the position of the side in [`Card::values`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// A playing card with a strength value on each of its four sides.
///
/// Cards are never modified after creation. Placing a card on the board
/// and capturing it only changes who owns the board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Side values in the order top, right, bottom, left.
    pub values: [u32; 4],
}

impl Card {
    pub fn new(id: &str, name: &str, values: [u32; 4]) -> Self {
        Self {
            id: CardId::from(id),
            name: String::from(name),
            values,
        }
    }

    /// The strength of the given side.
    pub fn value(&self, side: Side) -> u32 {
        self.values[side as usize]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [top, right, bottom, left] = self.values;
        write!(
            f,
            "{} {} T:{} R:{} B:{} L:{}",
            self.id, self.name, top, right, bottom, left
        )
    }
}

static HUMAN_STARTER_DECK: [(&str, &str, [u32; 4]); HAND_SIZE] = [
    ("a1", "Wolf", [3, 6, 2, 5]),
    ("a2", "Golem", [7, 2, 7, 1]),
    ("a3", "Sylph", [5, 5, 3, 2]),
    ("a4", "Drake", [6, 4, 5, 3]),
    ("a5", "Imp", [2, 7, 4, 4]),
];

static AI_STARTER_DECK: [(&str, &str, [u32; 4]); HAND_SIZE] = [
    ("b1", "Sprite", [4, 4, 5, 3]),
    ("b2", "Knight", [7, 3, 2, 6]),
    ("b3", "Ooze", [3, 6, 3, 4]),
    ("b4", "Myrmidon", [5, 5, 6, 2]),
    ("b5", "Mandragora", [2, 6, 5, 5]),
];

/// The starting cards of both players.
///
/// A new game deals every card of a player's deck into that player's hand,
/// in deck order. Decks can be deserialized from JSON:
///
/// ```
/// # use triad::{Decks, Player};
/// let decks = Decks::starter();
/// let json = serde_json::to_string(&decks).unwrap();
/// let parsed: Decks = serde_json::from_str(&json).unwrap();
/// assert_eq!(parsed.deck(Player::Ai)[0].name, "Sprite");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decks {
    pub human: Vec<Card>,
    pub ai: Vec<Card>,
}

impl Decks {
    /// The fixed starter set.
    pub fn starter() -> Self {
        let build = |deck: &[(&str, &str, [u32; 4])]| {
            deck.iter()
                .map(|&(id, name, values)| Card::new(id, name, values))
                .collect()
        };
        Self {
            human: build(&HUMAN_STARTER_DECK),
            ai: build(&AI_STARTER_DECK),
        }
    }

    pub fn deck(&self, player: Player) -> &[Card] {
        match player {
            Player::Human => &self.human,
            Player::Ai => &self.ai,
        }
    }

    /// Checks that both decks hold exactly [`HAND_SIZE`] cards and that no
    /// card id is used twice, across both decks.
    pub fn validate(&self) -> Result<(), DeckError> {
        let mut seen = BTreeSet::new();
        for player in Player::ALL {
            let deck = self.deck(player);
            if deck.len() != HAND_SIZE {
                return Err(DeckError::WrongSize {
                    player,
                    len: deck.len(),
                });
            }
            for card in deck {
                if !seen.insert(&card.id) {
                    return Err(DeckError::DuplicateCardId {
                        card_id: card.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Decks {
    fn default() -> Self {
        Self::starter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_decks_are_valid() {
        let decks = Decks::starter();
        assert_eq!(decks.validate(), Ok(()));
        assert_eq!(decks.human[1], Card::new("a2", "Golem", [7, 2, 7, 1]));
        assert_eq!(decks.ai[4].id, CardId::from("b5"));
    }

    #[test]
    fn side_values_follow_top_right_bottom_left() {
        let imp = Card::new("a5", "Imp", [2, 7, 4, 4]);
        assert_eq!(imp.value(Side::Top), 2);
        assert_eq!(imp.value(Side::Right), 7);
        assert_eq!(imp.value(Side::Bottom), 4);
        assert_eq!(imp.value(Side::Left), 4);
    }

    #[test]
    fn short_deck_is_rejected() {
        let mut decks = Decks::starter();
        decks.ai.pop();
        assert_eq!(
            decks.validate(),
            Err(DeckError::WrongSize {
                player: Player::Ai,
                len: 4
            })
        );
    }

    #[test]
    fn duplicate_ids_across_decks_are_rejected() {
        let mut decks = Decks::starter();
        decks.ai[2].id = CardId::from("a3");
        assert_eq!(
            decks.validate(),
            Err(DeckError::DuplicateCardId {
                card_id: CardId::from("a3")
            })
        );
    }

    #[test]
    fn decks_load_from_json() {
        let json = r#"{
            "human": [
                {"id": "h1", "name": "One", "values": [1, 2, 3, 4]},
                {"id": "h2", "name": "Two", "values": [1, 2, 3, 4]},
                {"id": "h3", "name": "Three", "values": [1, 2, 3, 4]},
                {"id": "h4", "name": "Four", "values": [1, 2, 3, 4]},
                {"id": "h5", "name": "Five", "values": [10, 20, 30, 40]}
            ],
            "ai": [
                {"id": "c1", "name": "One", "values": [4, 3, 2, 1]},
                {"id": "c2", "name": "Two", "values": [4, 3, 2, 1]},
                {"id": "c3", "name": "Three", "values": [4, 3, 2, 1]},
                {"id": "c4", "name": "Four", "values": [4, 3, 2, 1]},
                {"id": "c5", "name": "Five", "values": [4, 3, 2, 1]}
            ]
        }"#;
        let decks: Decks = serde_json::from_str(json).unwrap();
        assert_eq!(decks.validate(), Ok(()));
        assert_eq!(decks.human[4].value(Side::Left), 40);
    }
}
