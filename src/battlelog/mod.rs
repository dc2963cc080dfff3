pub mod reader;
pub mod writer;

pub use reader::{
    dedup_records, parse_and_dedup, read_battle_log, read_battle_log_file, read_battle_log_files,
};
pub use writer::{write_card_stats_csv, write_card_stats_csv_file};
