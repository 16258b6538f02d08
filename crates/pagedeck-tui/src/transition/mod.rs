//! Page-slide transition system
//!
//! Animates the horizontal slide between the outgoing and incoming page when
//! the current index changes, with configurable easing and duration.
//!
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Duration helpers on the core config type
//! - `animation` - The `SlideAnimator` controller

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::{SlideAnimator, SlideFrame};
pub use config::TransitionConfigExt;
pub use easing::EasingTypeExt;
