pub mod analysis;
pub mod battlelog;
pub mod deck;
pub mod error;
pub mod extract;
pub mod model;
pub mod names;
pub mod session;
pub mod xlsx;

pub use analysis::{analyze, default_min_games, filter_min_games};
pub use battlelog::{parse_and_dedup, read_battle_log_files};
pub use deck::{canonicalize, deck_cards, decks_of, opponent_cards};
pub use error::{Result, StatsError};
pub use extract::extract_cards;
pub use model::*;
pub use names::{CardNameLookup, NameMap, RawNames};
pub use session::{MinGames, Session};
