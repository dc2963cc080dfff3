use std::cmp::Ordering;

/// Prefix marking the evolved variant of a card
pub const EVO_PREFIX: &str = "Evo ";

/// Name used for the evolved variant of `name`
pub fn evolved_name(name: &str) -> String {
    format!("{}{}", EVO_PREFIX, name)
}

pub fn is_evolved_name(name: &str) -> bool {
    name.starts_with(EVO_PREFIX)
}

/// Card name with any evolution prefix removed
pub fn base_name(name: &str) -> &str {
    name.strip_prefix(EVO_PREFIX).unwrap_or(name)
}

/// Dictionary-style comparison: case-insensitive first, then exact text.
///
/// The second step makes this a total order, so names differing only in
/// case still sort deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Ordering of cards within a deck: evolved cards first, then by name
pub fn compare_deck_cards(a: &str, b: &str) -> Ordering {
    match (is_evolved_name(a), is_evolved_name(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a, b),
    }
}
