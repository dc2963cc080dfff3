/// Maximum number of card slots recorded per side
pub const MAX_SLOTS: usize = 8;

/// Which player's view of a battle a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Team,
    Opponent,
}

impl Side {
    /// Field prefix used by the log exporter
    pub fn prefix(&self) -> &'static str {
        match self {
            Side::Team => "team",
            Side::Opponent => "opponent",
        }
    }

    /// Field holding the card name in the given slot, e.g. `team_0_cards_3_name`
    pub fn card_name_field(&self, slot: usize) -> String {
        format!("{}_0_cards_{}_name", self.prefix(), slot)
    }

    /// Field holding the evolution level of the card in the given slot
    pub fn evolution_field(&self, slot: usize) -> String {
        format!("{}_0_cards_{}_evolutionLevel", self.prefix(), slot)
    }

    /// Field holding the side's crown count
    pub fn crowns_field(&self) -> String {
        format!("{}_0_crowns", self.prefix())
    }
}
