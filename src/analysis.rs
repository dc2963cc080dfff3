//! Win/loss statistics for one deck, broken down by opponent card.

use crate::deck::deck_of;
use crate::extract::extract_cards;
use crate::model::{AnalysisResult, BattleRecord, CardStats, Outcome, Side, OVERALL};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    total: u32,
}

impl Tally {
    fn add(&mut self, outcome: Outcome) {
        self.total += 1;
        if outcome.is_win() {
            self.wins += 1;
        }
    }
}

/// Whether the opponent side of a battle used every card in `filter_cards`
fn has_all_cards<S: AsRef<str>>(opponent: &[String], filter_cards: &[S]) -> bool {
    filter_cards
        .iter()
        .all(|wanted| opponent.iter().any(|card| card == wanted.as_ref()))
}

/// Analyze the battles played with `deck_id`.
///
/// Battles are kept when the team deck identity equals `deck_id` and the
/// opponent used every card in `filter_cards`. Draws are left out of every
/// count. Each remaining battle adds one game to each distinct opponent
/// card it contains, except cards in the filter set. Per-card rows come
/// back in order of first appearance; see [`AnalysisResult::sorted`].
pub fn analyze<S: AsRef<str>>(
    records: &[BattleRecord],
    deck_id: &str,
    filter_cards: &[S],
    include_evolution: bool,
) -> AnalysisResult {
    let filter_set: HashSet<&str> = filter_cards.iter().map(|c| c.as_ref()).collect();

    let mut overall = Tally::default();
    let mut card_order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut draws = 0;

    for record in records {
        if deck_of(record).as_deref() != Some(deck_id) {
            continue;
        }

        let opponent = extract_cards(record, Side::Opponent, include_evolution);
        if !has_all_cards(&opponent, filter_cards) {
            continue;
        }

        let outcome = record.outcome();
        if outcome.is_draw() {
            draws += 1;
            continue;
        }
        overall.add(outcome);

        let mut counted = HashSet::new();
        for card in opponent {
            if filter_set.contains(card.as_str()) || !counted.insert(card.clone()) {
                continue;
            }
            if !tallies.contains_key(&card) {
                card_order.push(card.clone());
            }
            tallies.entry(card).or_default().add(outcome);
        }
    }

    log::debug!(
        "Deck '{}': {} decisive battles, {} draws excluded, {} opponent cards",
        deck_id,
        overall.total,
        draws,
        card_order.len()
    );

    let card_stats = card_order
        .into_iter()
        .map(|card| {
            let tally = &tallies[&card];
            CardStats::new(card, tally.wins, tally.total)
        })
        .collect();

    AnalysisResult {
        overall: CardStats::new(OVERALL, overall.wins, overall.total),
        card_stats,
    }
}

/// Default minimum-games threshold for a table with `row_count` card rows
pub fn default_min_games(row_count: usize) -> u32 {
    match row_count {
        n if n > 90 => 7,
        n if n > 70 => 6,
        n if n > 50 => 5,
        n if n > 30 => 4,
        _ => 3,
    }
}

/// Rows with at least `min_games` games
pub fn filter_min_games(rows: &[CardStats], min_games: u32) -> Vec<CardStats> {
    rows.iter()
        .filter(|row| row.total_games >= min_games)
        .cloned()
        .collect()
}
