use std::str::FromStr;

use triad::{CardId, Cell, CellFromStrErr};

/// A line typed by the human in interactive mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `<card-id> <cell>`, e.g. `a1 4` or `a1 1,1`.
    Place { card_id: CardId, cell: Cell },
    /// `new`
    NewGame,
    /// `quit`
    Quit,
}

/// The error type for the [`FromStr`] instance of [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandFromStrErr {
    Empty,
    MissingCell,
    TooManyWords,
    InvalidCell(CellFromStrErr),
}

impl std::error::Error for CommandFromStrErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandFromStrErr::InvalidCell(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandFromStrErr::Empty => write!(f, "Type '<card-id> <cell>', 'new' or 'quit'"),
            CommandFromStrErr::MissingCell => write!(f, "Which cell should the card go to?"),
            CommandFromStrErr::TooManyWords => {
                write!(f, "Expected a card id and a cell, like 'a1 4' or 'a1 1,1'")
            }
            CommandFromStrErr::InvalidCell(err) => write!(f, "Invalid cell: {}", err),
        }
    }
}

impl FromStr for Command {
    type Err = CommandFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let first = words.next().ok_or(CommandFromStrErr::Empty)?;
        let rest: Vec<&str> = words.collect();
        // A row,col pair may be typed with spaces, e.g. `1, 2`
        if rest.len() > 1 && !rest.iter().any(|word| word.contains(',')) {
            return Err(CommandFromStrErr::TooManyWords);
        }
        match (first, rest.is_empty()) {
            ("quit" | "q", true) => Ok(Command::Quit),
            ("new", true) => Ok(Command::NewGame),
            (_, true) => Err(CommandFromStrErr::MissingCell),
            (card_id, false) => Ok(Command::Place {
                card_id: CardId::from(card_id),
                cell: rest
                    .concat()
                    .parse()
                    .map_err(CommandFromStrErr::InvalidCell)?,
            }),
        }
    }
}
