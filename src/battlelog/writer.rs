use crate::error::Result;
use crate::model::CardStats;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct CardStatsRow<'a> {
    card: &'a str,
    name: &'a str,
    win_rate: u32,
    wins: u32,
    losses: u32,
    games: u32,
}

impl<'a> From<&'a CardStats> for CardStatsRow<'a> {
    fn from(stats: &'a CardStats) -> Self {
        CardStatsRow {
            card: &stats.card_name,
            name: &stats.display_name,
            win_rate: stats.win_rate,
            wins: stats.win_count,
            losses: stats.loss_count(),
            games: stats.total_games,
        }
    }
}

/// Write per-card statistics as CSV, one row per card in the order given
pub fn write_card_stats_csv<W: Write>(rows: &[CardStats], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for stats in rows {
        writer.serialize(CardStatsRow::from(stats))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_card_stats_csv_file(rows: &[CardStats], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_card_stats_csv(rows, file)
}
