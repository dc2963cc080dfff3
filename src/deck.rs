//! Deck identities and card enumeration across a set of battles.

use crate::extract::extract_cards;
use crate::model::{compare_deck_cards, BattleRecord, Side, MAX_SLOTS};
use std::collections::HashSet;

/// Separator between card names in a deck identity
pub const DECK_SEPARATOR: &str = ",";

/// Stable identity string for a list of evolution-aware card names.
///
/// Evolved cards sort first, then by name. Repeated names are kept.
pub fn canonicalize<S: AsRef<str>>(cards: &[S]) -> String {
    let mut sorted: Vec<&str> = cards.iter().map(|c| c.as_ref()).collect();
    sorted.sort_by(|a, b| compare_deck_cards(a, b));
    sorted.join(DECK_SEPARATOR)
}

/// Deck identity of the team side of a battle, `None` when no cards were recorded
pub fn deck_of(record: &BattleRecord) -> Option<String> {
    let cards = extract_cards(record, Side::Team, true);
    if cards.is_empty() {
        None
    } else {
        Some(canonicalize(&cards))
    }
}

/// Every distinct deck the team side played, in order of first appearance
pub fn decks_of(records: &[BattleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(deck_of)
        .filter(|deck| seen.insert(deck.clone()))
        .collect()
}

/// Number of battles played with each deck, in `decks_of` order
pub fn deck_usage(records: &[BattleRecord]) -> Vec<(String, usize)> {
    let mut usage: Vec<(String, usize)> = Vec::new();
    for deck in records.iter().filter_map(deck_of) {
        match usage.iter_mut().find(|(id, _)| *id == deck) {
            Some((_, count)) => *count += 1,
            None => usage.push((deck, 1)),
        }
    }
    usage
}

/// Card names making up a deck identity
pub fn deck_cards(deck_id: &str) -> Vec<&str> {
    deck_id
        .split(DECK_SEPARATOR)
        .filter(|name| !name.is_empty())
        .take(MAX_SLOTS)
        .collect()
}

/// Sorted set of every opponent card seen across all battles
pub fn opponent_cards(records: &[BattleRecord], include_evolution: bool) -> Vec<String> {
    let mut cards: Vec<String> = records
        .iter()
        .flat_map(|record| extract_cards(record, Side::Opponent, include_evolution))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    cards.sort_by(|a, b| compare_deck_cards(a, b));
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battle(team: &[&str], evolved_slots: &[usize], opponent: &[&str]) -> BattleRecord {
        let mut record = BattleRecord::new();
        for (i, name) in team.iter().enumerate() {
            record = record.with_field(Side::Team.card_name_field(i), *name);
        }
        for i in evolved_slots {
            record = record.with_field(Side::Team.evolution_field(*i), "1");
        }
        for (i, name) in opponent.iter().enumerate() {
            record = record.with_field(Side::Opponent.card_name_field(i), *name);
        }
        record
    }

    #[test]
    fn test_canonicalize_is_order_independent() {
        let a = canonicalize(&["Zap", "Evo Bats", "Knight", "Archers"]);
        let b = canonicalize(&["Knight", "Archers", "Zap", "Evo Bats"]);
        assert_eq!(a, b);
        assert_eq!(a, "Evo Bats,Archers,Knight,Zap");
    }

    #[test]
    fn test_canonicalize_keeps_repeats() {
        assert_eq!(canonicalize(&["Zap", "Knight", "Zap"]), "Knight,Zap,Zap");
        assert_eq!(canonicalize::<&str>(&[]), "");
    }

    #[test]
    fn test_decks_of_first_appearance_order() {
        let records = vec![
            battle(&["B", "A"], &[], &["X"]),
            battle(&[], &[], &["Y"]),
            battle(&["C", "D"], &[], &[]),
            battle(&["A", "B"], &[], &["Z"]),
        ];
        assert_eq!(decks_of(&records), vec!["A,B", "C,D"]);
        assert_eq!(
            deck_usage(&records),
            vec![("A,B".to_string(), 2), ("C,D".to_string(), 1)]
        );
    }

    #[test]
    fn test_evolved_deck_is_distinct() {
        let records = vec![battle(&["A", "B"], &[0], &[]), battle(&["A", "B"], &[], &[])];
        assert_eq!(decks_of(&records), vec!["Evo A,B", "A,B"]);
    }

    #[test]
    fn test_deck_cards_round_trip() {
        assert_eq!(deck_cards("Evo Bats,Archers,Knight"), vec!["Evo Bats", "Archers", "Knight"]);
        assert!(deck_cards("").is_empty());
    }

    #[test]
    fn test_opponent_cards_sorted_and_unique() {
        let mut evolved = battle(&["A"], &[], &["Bats", "Giant"]);
        evolved = evolved.with_field(Side::Opponent.evolution_field(0), "1");
        let records = vec![evolved, battle(&["A"], &[], &["Zap", "Giant"])];

        assert_eq!(opponent_cards(&records, true), vec!["Evo Bats", "Giant", "Zap"]);
        assert_eq!(opponent_cards(&records, false), vec!["Bats", "Giant", "Zap"]);
    }
}
