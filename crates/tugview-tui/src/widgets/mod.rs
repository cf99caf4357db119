mod indicator;
mod pull_view;
mod status_bar;

pub use indicator::{arc_glyph, spinner_glyph, IndicatorWidget, SPINNER_FRAMES};
pub use pull_view::PullViewWidget;
pub use status_bar::StatusBarWidget;
