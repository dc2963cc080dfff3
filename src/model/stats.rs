use super::card::compare_names;
use crate::names::CardNameLookup;
use serde::Serialize;
use std::cmp::Ordering;

/// Card name used for the synthetic all-battles row
pub const OVERALL: &str = "Overall";

/// Win rate as a whole percentage, halves rounded up; 0 when there are no games
pub fn win_rate(wins: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let wins = u64::from(wins.min(total));
    let total = u64::from(total);
    ((wins * 200 + total) / (total * 2)) as u32
}

/// Win/loss tally for one opponent card (or the overall row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStats {
    /// Raw card identity, used as the grouping key
    pub card_name: String,
    /// Name shown to the user; equals `card_name` until a lookup is applied
    pub display_name: String,
    pub win_rate: u32,
    pub win_count: u32,
    pub total_games: u32,
}

impl CardStats {
    pub fn new(card_name: impl Into<String>, win_count: u32, total_games: u32) -> Self {
        let card_name = card_name.into();
        CardStats {
            display_name: card_name.clone(),
            card_name,
            win_rate: win_rate(win_count, total_games),
            win_count,
            total_games,
        }
    }

    pub fn loss_count(&self) -> u32 {
        self.total_games - self.win_count
    }

    pub fn has_games(&self) -> bool {
        self.total_games > 0
    }

    /// Win rate formatted for display, `-` when there are no games
    pub fn win_rate_label(&self) -> String {
        if self.has_games() {
            format!("{}%", self.win_rate)
        } else {
            "-".to_string()
        }
    }
}

/// Default presentation order: win rate desc, games desc, then name
pub fn compare_card_stats(a: &CardStats, b: &CardStats) -> Ordering {
    b.win_rate
        .cmp(&a.win_rate)
        .then_with(|| b.total_games.cmp(&a.total_games))
        .then_with(|| compare_names(&a.card_name, &b.card_name))
}

pub fn sort_card_stats(rows: &mut [CardStats]) {
    rows.sort_by(compare_card_stats);
}

/// Output of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub overall: CardStats,
    /// One row per opponent card, in order of first appearance
    pub card_stats: Vec<CardStats>,
}

impl AnalysisResult {
    pub fn empty() -> Self {
        AnalysisResult {
            overall: CardStats::new(OVERALL, 0, 0),
            card_stats: Vec::new(),
        }
    }

    pub fn sorted(mut self) -> Self {
        sort_card_stats(&mut self.card_stats);
        self
    }

    /// Fill in display names; `card_name` keys are left untouched
    pub fn with_display_names<L: CardNameLookup + ?Sized>(mut self, names: &L) -> Self {
        for row in &mut self.card_stats {
            row.display_name = names.display_name(&row.card_name);
        }
        self
    }

    pub fn find(&self, card_name: &str) -> Option<&CardStats> {
        self.card_stats.iter().find(|s| s.card_name == card_name)
    }

    /// Largest per-card game count, at least 1
    pub fn max_card_games(&self) -> u32 {
        self.card_stats
            .iter()
            .map(|s| s.total_games)
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate_rounding() {
        assert_eq!(win_rate(0, 0), 0);
        assert_eq!(win_rate(1, 1), 100);
        assert_eq!(win_rate(0, 3), 0);
        assert_eq!(win_rate(1, 3), 33);
        assert_eq!(win_rate(2, 3), 67);
        assert_eq!(win_rate(1, 8), 13); // 12.5 rounds up
        assert_eq!(win_rate(1, 200), 1); // 0.5 rounds up
        assert_eq!(win_rate(199, 200), 100); // 99.5 rounds up
    }

    #[test]
    fn test_card_stats_counts() {
        let stats = CardStats::new("Hog Rider", 3, 5);
        assert_eq!(stats.display_name, "Hog Rider");
        assert_eq!(stats.win_rate, 60);
        assert_eq!(stats.loss_count(), 2);
        assert_eq!(stats.win_rate_label(), "60%");
        assert_eq!(CardStats::new(OVERALL, 0, 0).win_rate_label(), "-");
    }

    #[test]
    fn test_default_order() {
        let mut rows = vec![
            CardStats::new("Zap", 1, 2),
            CardStats::new("Arrows", 1, 2),
            CardStats::new("Log", 2, 4),
            CardStats::new("Fireball", 3, 3),
        ];
        sort_card_stats(&mut rows);
        let names: Vec<&str> = rows.iter().map(|s| s.card_name.as_str()).collect();
        assert_eq!(names, vec!["Fireball", "Log", "Arrows", "Zap"]);
    }

    #[test]
    fn test_display_names_keep_keys() {
        struct Upper;
        impl CardNameLookup for Upper {
            fn display_name(&self, card_name: &str) -> String {
                card_name.to_uppercase()
            }
        }

        let result = AnalysisResult {
            overall: CardStats::new(OVERALL, 1, 1),
            card_stats: vec![CardStats::new("Zap", 1, 1)],
        }
        .with_display_names(&Upper);
        assert_eq!(result.card_stats[0].card_name, "Zap");
        assert_eq!(result.card_stats[0].display_name, "ZAP");
        assert_eq!(result.overall.display_name, OVERALL);
    }

    #[test]
    fn test_max_card_games() {
        assert_eq!(AnalysisResult::empty().max_card_games(), 1);
        let result = AnalysisResult {
            overall: CardStats::new(OVERALL, 2, 4),
            card_stats: vec![CardStats::new("A", 1, 3), CardStats::new("B", 0, 1)],
        };
        assert_eq!(result.max_card_games(), 3);
        assert_eq!(result.find("B").map(|s| s.total_games), Some(1));
        assert!(result.find("C").is_none());
    }
}
