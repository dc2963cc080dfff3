pub mod card;
pub mod record;
pub mod side;
pub mod stats;

pub use card::{
    base_name, compare_deck_cards, compare_names, evolved_name, is_evolved_name, EVO_PREFIX,
};
pub use record::{BattleRecord, Outcome};
pub use side::{Side, MAX_SLOTS};
pub use stats::{compare_card_stats, sort_card_stats, win_rate, AnalysisResult, CardStats, OVERALL};
