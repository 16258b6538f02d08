pub mod config;
pub mod deck;
pub mod error;
pub mod state;

pub use config::{
    AppConfig, DisplayMode, DotSize, EasingType, IndicatorConfig, TransitionConfig,
};
pub use deck::Page;
pub use error::{Error, Result};
pub use state::{PageChange, PageState, SubscriberId};
