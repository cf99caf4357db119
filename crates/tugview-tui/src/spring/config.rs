//! Configuration utilities for the spring-back animation.

use std::time::Duration;

// Re-export config types from core
pub use tugview_core::{EasingType, SpringConfig};

/// Extension trait for SpringConfig with utility methods
pub trait SpringConfigExt {
    /// Get spring-back duration as Duration
    fn duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn tick_duration(&self) -> Duration;

    /// Check if the spring-back is effectively animated
    fn is_smooth(&self) -> bool;
}

impl SpringConfigExt for SpringConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let config = SpringConfig {
            duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = SpringConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = SpringConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_duration(), Duration::from_millis(16));
    }
}
