use super::side::Side;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    // Leading integer, optionally signed; trailing text is ignored
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

/// Result of a battle from the team side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// One row of an exported battle log.
///
/// Fields are kept as raw strings keyed by their (trimmed) header name.
/// Equality and hashing cover every field, which is what deduplication
/// relies on. Unknown fields are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BattleRecord {
    fields: BTreeMap<String, String>,
}

impl BattleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw value of a field, if the row has it
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|s| s.as_str())
    }

    /// Value of a field with surrounding whitespace removed, `None` when absent or blank
    pub fn get_non_empty(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every field is blank
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Card name in a slot as exported, `None` when the field is absent or empty
    pub fn card_name(&self, side: Side, slot: usize) -> Option<&str> {
        self.get(&side.card_name_field(slot)).filter(|s| !s.is_empty())
    }

    /// Whether the card in a slot was played in its evolved form.
    ///
    /// Blank values and numeric zero count as not evolved.
    pub fn is_evolved(&self, side: Side, slot: usize) -> bool {
        match self.get_non_empty(&side.evolution_field(slot)) {
            Some(level) => !matches!(level.parse::<f64>(), Ok(v) if v == 0.0),
            None => false,
        }
    }

    /// Crown count for a side; absent or non-numeric values count as 0
    pub fn crowns(&self, side: Side) -> i64 {
        let field = side.crowns_field();
        let Some(raw) = self.get_non_empty(&field) else {
            return 0;
        };

        let parsed = LEADING_INT
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok());

        match parsed {
            Some(crowns) => crowns,
            None => {
                log::warn!("Non-numeric {} value '{}', counting as 0", field, raw);
                0
            }
        }
    }

    /// Win, loss, or draw for the team side
    pub fn outcome(&self) -> Outcome {
        let team = self.crowns(Side::Team);
        let opponent = self.crowns(Side::Opponent);
        if team > opponent {
            Outcome::Win
        } else if team < opponent {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BattleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        BattleRecord {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
