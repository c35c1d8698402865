mod command;
mod decks;
mod game;
mod session;
mod strategies;
pub use command::*;
pub use decks::*;
pub use game::*;
pub use session::*;
pub use strategies::*;
