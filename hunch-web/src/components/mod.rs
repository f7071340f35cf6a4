//! Presentation pieces shared by the stable and canary pages.

pub mod guess_chips;
pub mod hint_panel;
pub mod progress_bar;
pub mod stats_panel;
