use std::cell::RefCell;
use std::rc::Rc;

use pagedeck_core::{AppConfig, DisplayMode, Page, PageState, Result};
use tracing::debug;

use crate::theme::Theme;
use crate::transition::{SlideAnimator, SlideFrame};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Runtime theme
    pub theme: Theme,
    /// Page cursor over the loaded deck
    pub state: PageState<Page>,
    /// Slide animator, shared with the page-change subscription
    animator: Rc<RefCell<SlideAnimator>>,
    /// Frame of the in-flight slide, refreshed once per loop iteration
    pub slide: Option<SlideFrame>,
    /// Current application mode
    pub mode: Mode,
    /// Runtime indicator toggle (on top of the configured display mode)
    pub indicator_enabled: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme, pages: Vec<Page>) -> Result<Self> {
        let mut state = PageState::new(pages)?;

        let animator = Rc::new(RefCell::new(SlideAnimator::new(config.transition.clone())));

        // The render layer reacts to index changes through the subscription:
        // kick off the slide animation and log the move.
        let animated = config.indicator.animated;
        let sink = Rc::clone(&animator);
        state.subscribe(move |change| {
            debug!("Page change: {} -> {}", change.from, change.to);
            if animated {
                sink.borrow_mut().start(change.from, change.to);
            }
        });

        Ok(Self {
            config,
            theme,
            state,
            animator,
            slide: None,
            mode: Mode::Normal,
            indicator_enabled: true,
            status_message: None,
            should_quit: false,
            pending_key: None,
        })
    }

    /// Show the next page (no-op on the last page)
    pub fn next_page(&mut self) {
        self.state.show_next_page();
    }

    /// Show the previous page (no-op on the first page)
    pub fn previous_page(&mut self) {
        self.state.show_previous_page();
    }

    /// Jump to the first page
    pub fn first_page(&mut self) {
        self.state.set_index(0);
    }

    /// Jump to the last page
    pub fn last_page(&mut self) {
        self.state.set_index(self.state.page_count() as isize - 1);
    }

    /// Jump to a page by index; out-of-range values clamp
    pub fn go_to_page(&mut self, index: usize) {
        self.state.set_index(index as isize);
    }

    /// Flip the runtime indicator toggle
    pub fn toggle_indicator(&mut self) {
        self.indicator_enabled = !self.indicator_enabled;
        let status = if self.indicator_enabled {
            "Indicator on"
        } else {
            "Indicator off"
        };
        self.set_status(status);
    }

    /// Whether the dot indicator should be drawn right now
    pub fn indicator_visible(&self) -> bool {
        if !self.indicator_enabled {
            return false;
        }
        match self.config.indicator.display_mode {
            DisplayMode::Always => true,
            DisplayMode::Auto => self.state.page_count() > 1,
            DisplayMode::Never => false,
        }
    }

    /// Advance the slide animation; called once per loop iteration
    pub fn update_transition(&mut self) {
        self.slide = self.animator.borrow_mut().update();
    }

    /// Whether the event loop should poll at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.animator.borrow().needs_update()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
