use log::Level;

use crate::state::Theme;

/// Theme shown on first paint. Not persisted across reloads.
pub const DEFAULT_THEME: Theme = Theme::Dark;

/// One full loop of the client marquee.
pub const MARQUEE_DURATION_SECS: u32 = 20;

/// Page id used when the fragment is empty at mount.
pub const HOME_PAGE_ID: &str = "home";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
