//! Spring-back animation for the pull gesture.
//!
//! While the mouse button is held, the pull offset is pinned to the drag.
//! On release the offset animates back to rest with a configurable easing
//! curve; the interpolated offsets flow through the ordinary
//! measurement-update path, so the release produces the upward threshold
//! crossing the refresh controller watches for.
//!
//! # Usage
//!
//! ```ignore
//! use tugview_tui::spring::{SpringAnimator, SpringConfigExt};
//!
//! let mut spring = SpringAnimator::new(config.ui.spring.clone());
//!
//! // Drag pins the offset, release starts the animation
//! spring.hold(140.0);
//! spring.release();
//!
//! // In the main loop, advance each frame and feed the offset onward
//! let offset = spring.update();
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

// Re-exports for convenient access
pub use animation::SpringAnimator;
pub use config::SpringConfigExt;
pub use easing::EasingTypeExt;

pub use tugview_core::{EasingType, SpringConfig};
