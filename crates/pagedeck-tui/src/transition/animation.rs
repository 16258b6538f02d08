//! Slide animation controller
//!
//! Combines easing functions and timing utilities to manage the page-slide
//! animation that runs when the current page changes.

use std::time::{Duration, Instant};

use super::config::{TransitionConfig, TransitionConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress};

/// Active slide state
#[derive(Debug, Clone)]
struct ActiveSlide {
    /// Animation start time
    start: Instant,
    /// Index of the outgoing page
    from: usize,
    /// Index of the incoming page
    to: usize,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// One frame of an in-flight slide
///
/// `progress` is already eased; the widget turns it into a column offset for
/// the current render width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    /// Index of the outgoing page
    pub from: usize,
    /// Index of the incoming page
    pub to: usize,
    /// Eased progress in [0, 1]
    pub progress: f64,
}

/// Page-slide animation controller
///
/// Call [`start`](Self::start) when the page index changes, then
/// [`update`](Self::update) each frame: `Some(frame)` means the slide is
/// still in flight, `None` means the incoming page is at rest.
#[derive(Debug, Clone, Default)]
pub struct SlideAnimator {
    /// Current active slide (if any)
    slide: Option<ActiveSlide>,
    /// Configuration
    config: TransitionConfig,
}

impl SlideAnimator {
    /// Create a new animator with configuration
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            slide: None,
            config,
        }
    }

    /// Update configuration
    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Check if a slide is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Check if the event loop should run at animation frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.slide.is_some()
    }

    /// Begin a slide from one page index to another
    ///
    /// With transitions disabled (or `from == to`) this is a no-op and the
    /// next `update` reports the page at rest. A slide started while another
    /// is in flight replaces it.
    pub fn start(&mut self, from: usize, to: usize) {
        if !self.config.is_animated() || from == to {
            self.slide = None;
            return;
        }
        self.slide = Some(ActiveSlide {
            start: Instant::now(),
            from,
            to,
            duration: self.config.slide_duration(),
            easing: self.config.easing,
        });
    }

    /// Cancel any in-flight slide
    pub fn cancel(&mut self) {
        self.slide = None;
    }

    /// Advance the animation and get the current frame
    ///
    /// Returns `None` once the slide has finished (or none is running).
    pub fn update(&mut self) -> Option<SlideFrame> {
        let slide = self.slide.as_ref()?;

        if is_complete(slide.start, slide.duration) {
            self.slide = None;
            return None;
        }

        let t = progress(slide.start, slide.duration);
        Some(SlideFrame {
            from: slide.from,
            to: slide.to,
            progress: slide.easing.apply(t),
        })
    }
}
