//! Human-readable rendering of card records.

use crate::types::CardRecord;

/// Placeholder printed for any field the catalog did not send.
pub const UNKNOWN: &str = "Unknown";

/// Line closing every rendered card.
pub const SEPARATOR: &str = "------------------------------------------";

/// Render one card as a multi-line block. Ends with `SEPARATOR` and no
/// trailing newline.
pub fn render_card(card: &CardRecord) -> String {
    format!(
        "Card Name: {}\nType: {}\nMana Cost: {}\nSet: {}\nSet Name: {}\nText: {}\n{SEPARATOR}",
        or_unknown(&card.name),
        or_unknown(&card.card_type),
        or_unknown(&card.mana_cost),
        or_unknown(&card.card_set),
        or_unknown(&card.set_name),
        or_unknown(&card.text),
    )
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}
