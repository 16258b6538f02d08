//! Duration helpers for the transition configuration

use std::time::Duration;

// Re-export config types from core
pub use pagedeck_core::{EasingType, TransitionConfig};

/// Extension trait for TransitionConfig with utility methods
pub trait TransitionConfigExt {
    /// Get slide duration as Duration
    fn slide_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if slide transitions are effectively enabled
    fn is_animated(&self) -> bool;
}

impl TransitionConfigExt for TransitionConfig {
    #[inline]
    fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransitionConfig::default();
        assert!(config.enabled);
        assert_eq!(config.duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn test_slide_duration() {
        let config = TransitionConfig {
            duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.slide_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_is_animated() {
        let mut config = TransitionConfig::default();
        assert!(config.is_animated());

        config.enabled = false;
        assert!(!config.is_animated());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_animated());
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = TransitionConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }
}
