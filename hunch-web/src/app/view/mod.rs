//! Track screens: play state, handlers and copy for each deployment track.

pub mod canary;
pub mod stable;

use hunch_game::Session;

use crate::components::guess_chips::ChipItem;

/// Pluralization suffix for "guess".
pub(crate) const fn plural_es(count: u8) -> &'static str {
    if count == 1 { "" } else { "es" }
}

/// Chip data for every guess in play order.
pub(crate) fn chip_items(session: &Session) -> Vec<ChipItem> {
    session
        .history()
        .iter()
        .map(|&value| ChipItem {
            value,
            warmth: session.warmth_of(value),
        })
        .collect()
}
