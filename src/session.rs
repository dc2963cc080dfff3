//! State for one analysis session: the loaded battles and what the user
//! currently has selected.

use crate::analysis::{analyze, default_min_games, filter_min_games};
use crate::battlelog::read_battle_log_files;
use crate::deck::{decks_of, opponent_cards};
use crate::error::{Result, StatsError};
use crate::model::{sort_card_stats, AnalysisResult, BattleRecord, CardStats};
use std::path::Path;

/// Minimum number of games a card row needs before it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinGames {
    /// Show every row
    Off,
    /// Threshold follows the number of rows in the current analysis
    #[default]
    Auto,
    Fixed(u32),
}

impl MinGames {
    /// Threshold to apply to `result`, `None` when filtering is off
    pub fn threshold(&self, result: &AnalysisResult) -> Option<u32> {
        match self {
            MinGames::Off => None,
            MinGames::Auto => Some(default_min_games(result.card_stats.len())),
            MinGames::Fixed(n) => Some(*n),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<BattleRecord>,
    decks: Vec<String>,
    selected_deck: Option<String>,
    filter_cards: Vec<String>,
    include_evolution: bool,
    min_games: MinGames,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            decks: Vec::new(),
            selected_deck: None,
            filter_cards: Vec::new(),
            include_evolution: true,
            min_games: MinGames::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded battles; the first deck found becomes selected
    pub fn load(&mut self, records: Vec<BattleRecord>) {
        self.decks = decks_of(&records);
        self.selected_deck = self.decks.first().cloned();
        self.filter_cards = Vec::new();
        self.records = records;
        log::info!(
            "Session loaded {} battles with {} decks",
            self.records.len(),
            self.decks.len()
        );
    }

    /// Read, merge, and load CSV files. On failure the session is unchanged.
    pub fn load_files<P: AsRef<Path> + Sync>(&mut self, paths: &[P]) -> Result<()> {
        let records = read_battle_log_files(paths)?;
        self.load(records);
        Ok(())
    }

    /// Drop all loaded data and selections
    pub fn reset(&mut self) {
        let min_games = self.min_games;
        let include_evolution = self.include_evolution;
        *self = Session {
            include_evolution,
            min_games,
            ..Session::default()
        };
    }

    pub fn records(&self) -> &[BattleRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn decks(&self) -> &[String] {
        &self.decks
    }

    pub fn selected_deck(&self) -> Option<&str> {
        self.selected_deck.as_deref()
    }

    pub fn filter_cards(&self) -> &[String] {
        &self.filter_cards
    }

    pub fn include_evolution(&self) -> bool {
        self.include_evolution
    }

    pub fn min_games(&self) -> MinGames {
        self.min_games
    }

    /// Select a deck by identity; clears the opponent-card filter
    pub fn select_deck(&mut self, deck_id: &str) -> Result<()> {
        if !self.decks.iter().any(|d| d == deck_id) {
            return Err(StatsError::UnknownDeck(deck_id.to_string()));
        }
        self.selected_deck = Some(deck_id.to_string());
        self.filter_cards = Vec::new();
        Ok(())
    }

    pub fn set_filter_cards(&mut self, cards: Vec<String>) {
        self.filter_cards = cards;
    }

    /// Switch evolution-aware opponent names on or off; clears the filter,
    /// since filter names depend on this setting
    pub fn set_include_evolution(&mut self, include: bool) {
        if include != self.include_evolution {
            self.include_evolution = include;
            self.filter_cards = Vec::new();
        }
    }

    pub fn set_min_games(&mut self, min_games: MinGames) {
        self.min_games = min_games;
    }

    /// Candidates for the opponent-card filter
    pub fn opponent_cards(&self) -> Vec<String> {
        opponent_cards(&self.records, self.include_evolution)
    }

    /// Statistics for the current selection, `None` when no deck is selected
    pub fn analysis(&self) -> Option<AnalysisResult> {
        let deck = self.selected_deck.as_deref()?;
        Some(analyze(
            &self.records,
            deck,
            self.filter_cards.as_slice(),
            self.include_evolution,
        ))
    }

    /// Card rows that pass the min-games threshold, in default order
    pub fn visible_card_stats(&self, result: &AnalysisResult) -> Vec<CardStats> {
        let mut rows = match self.min_games.threshold(result) {
            Some(min) => filter_min_games(&result.card_stats, min),
            None => result.card_stats.clone(),
        };
        sort_card_stats(&mut rows);
        rows
    }
}
