use log::Level;

/// Vertical offset past which the navigation bar switches to its frosted background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Inset applied to the viewport before a section counts as visible.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const DEFAULT_ICON_SIZE: u32 = 24;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
