//! Card lists from the positional slot fields of a battle record.

use crate::model::{evolved_name, BattleRecord, Side, MAX_SLOTS};

/// Ordered card names for one side of a battle.
///
/// Slots are read from index 0 and extraction stops at the first empty
/// slot, so a gap hides every card after it. With `include_evolution`,
/// evolved cards get the `Evo ` prefix; otherwise base names are used.
pub fn extract_cards(record: &BattleRecord, side: Side, include_evolution: bool) -> Vec<String> {
    let mut cards = Vec::with_capacity(MAX_SLOTS);

    for slot in 0..MAX_SLOTS {
        let Some(name) = record.card_name(side, slot) else {
            break;
        };

        if include_evolution && record.is_evolved(side, slot) {
            cards.push(evolved_name(name));
        } else {
            cards.push(name.to_string());
        }
    }

    cards
}
