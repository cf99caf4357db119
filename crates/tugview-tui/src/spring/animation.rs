//! Spring-back animation controller.
//!
//! Owns the pull offset for the host: a drag pins it, a release animates it
//! back to rest. The main interface for the spring module.

use std::time::{Duration, Instant};

use super::config::{SpringConfig, SpringConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active spring-back state
#[derive(Debug, Clone)]
struct ActiveSpring {
    /// Animation start time
    start: Instant,
    /// Offset at release
    from: f64,
    /// Rest offset
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Drives the pull offset between drag updates and the post-release
/// spring-back.
///
/// Call `hold()` while a drag is in progress, `release()` when the button
/// comes up, then `update()` each frame to get the current offset.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    /// Current active spring-back (if any)
    animation: Option<ActiveSpring>,
    /// Configuration
    config: SpringConfig,
    /// Current pull offset in layout units (always up-to-date)
    current_offset: f64,
}

impl Default for SpringAnimator {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl SpringAnimator {
    /// Create a new spring animator with configuration
    pub fn new(config: SpringConfig) -> Self {
        Self {
            animation: None,
            config,
            current_offset: 0.0,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Update configuration
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Check if a spring-back is currently running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while the host should render at the animation frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the current pull offset
    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Pin the offset to a drag position, cancelling any spring-back.
    /// Negative offsets (dragging above the grab point) clamp to rest.
    pub fn hold(&mut self, offset: f64) {
        self.animation = None;
        self.current_offset = offset.max(0.0);
    }

    /// Start the spring-back from the current offset to rest
    pub fn release(&mut self) {
        self.settle_to(0.0);
    }

    /// Animate from the current offset to a target offset.
    ///
    /// With smooth animation disabled this snaps immediately. Retargeting
    /// while a spring-back is running restarts from the current
    /// interpolated offset, so chained releases stay continuous.
    pub fn settle_to(&mut self, target: f64) {
        if !self.config.is_smooth() {
            self.current_offset = target;
            self.animation = None;
            return;
        }

        let from = self.current_offset;

        // Already at rest, nothing to animate
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveSpring {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the spring-back and return the current offset.
    ///
    /// Call this once per frame; between `hold()` calls or after the
    /// animation settles it simply returns the latest offset.
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_offset = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_offset = lerp(anim.from, anim.to, eased_t);
            }
        }

        self.current_offset
    }

    /// Cancel any active spring-back and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Reset to rest
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_settle_when_disabled() {
        let config = SpringConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut spring = SpringAnimator::new(config);

        spring.hold(140.0);
        spring.release();
        assert_eq!(spring.update(), 0.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_release_starts_animation() {
        let config = SpringConfig {
            smooth_enabled: true,
            duration_ms: 200,
            ..Default::default()
        };
        let mut spring = SpringAnimator::new(config);

        spring.hold(140.0);
        spring.release();
        assert!(spring.is_animating());
        assert!(spring.needs_update());
    }

    #[test]
    fn test_hold_pins_offset_and_cancels_spring() {
        let mut spring = SpringAnimator::default();
        spring.hold(50.0);
        spring.release();
        assert!(spring.is_animating());

        // Grabbing again mid-flight pins to the new drag position
        spring.hold(80.0);
        assert!(!spring.is_animating());
        assert_eq!(spring.update(), 80.0);
    }

    #[test]
    fn test_hold_clamps_negative_offset() {
        let mut spring = SpringAnimator::default();
        spring.hold(-12.0);
        assert_eq!(spring.current_offset(), 0.0);
    }

    #[test]
    fn test_release_at_rest_is_noop() {
        let mut spring = SpringAnimator::default();
        spring.release();
        assert!(!spring.is_animating());
        assert_eq!(spring.update(), 0.0);
    }

    #[test]
    fn test_spring_settles_at_rest() {
        let config = SpringConfig {
            smooth_enabled: true,
            duration_ms: 1,
            ..Default::default()
        };
        let mut spring = SpringAnimator::new(config);

        spring.hold(140.0);
        spring.release();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(spring.update(), 0.0);
        assert!(!spring.is_animating());
    }
}
