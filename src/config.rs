use log::Level;

/// Vertical page offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Marquee auto-scroll velocity in CSS px per animation frame.
pub const MARQUEE_SPEED: f64 = 0.6;

/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const REVEAL_VISIBLE_CLASS: &str = "reveal-visible";

/// Only devices matching this pause the marquee on hover.
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// Leading marquee images that load eagerly; the rest load lazily.
pub const EAGER_IMAGE_COUNT: usize = 4;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
