pub mod board;
pub mod coretypes;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod movelist;
pub mod perft;
pub mod search;

pub use board::Board;
pub use game::Game;
pub use search::{SearchEngine, SearchResult};
