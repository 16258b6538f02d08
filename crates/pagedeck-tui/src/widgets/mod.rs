mod carousel;
mod dot_indicator;
mod help;
mod status_bar;

pub use carousel::CarouselWidget;
pub use dot_indicator::DotIndicatorWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
