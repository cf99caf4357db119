//! Pull-to-refresh state machine.
//!
//! The controller consumes region measurements, compares the derived scroll
//! offset against a fixed threshold and decides when the caller-supplied
//! refresh callback fires. Pulling past the threshold arms the refresh;
//! the callback fires exactly once when the offset crosses back below the
//! threshold on the way up (the user released and the view is springing
//! back). All updates are strictly sequential; one call per measurement
//! event.

use std::fmt;

use crate::config::PullConfig;
use crate::measure::RegionMap;
use crate::{Error, Result};

/// Rotation stays at zero until the pull covers this fraction of the
/// threshold, then sweeps 0..180 over the remainder
const ROTATION_START: f64 = 0.6;

/// Render-facing snapshot of the controller state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullState {
    /// Current scroll offset in layout units
    pub offset: f64,
    /// Indicator rotation, 0..=180 degrees
    pub rotation_degrees: f64,
    /// True between arming (pull past threshold) and firing (release)
    pub refreshing: bool,
    /// Content-inset freeze flag; exposed for hosts, cleared while idle
    pub frozen: bool,
}

pub struct RefreshController {
    threshold: f64,
    previous_offset: f64,
    offset: f64,
    frozen: bool,
    refreshing: bool,
    rotation_degrees: f64,
    on_refresh: Box<dyn FnMut()>,
}

impl fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshController")
            .field("threshold", &self.threshold)
            .field("previous_offset", &self.previous_offset)
            .field("offset", &self.offset)
            .field("refreshing", &self.refreshing)
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl RefreshController {
    /// Create a controller from config. Fails on a non-positive threshold.
    pub fn new<F>(config: &PullConfig, on_refresh: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
            previous_offset: 0.0,
            offset: 0.0,
            frozen: false,
            refreshing: false,
            rotation_degrees: 0.0,
            on_refresh: Box::new(on_refresh),
        })
    }

    /// Create a controller with an explicit threshold
    pub fn with_threshold<F>(threshold: f64, on_refresh: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        if threshold <= 0.0 {
            return Err(Error::Config(format!(
                "threshold must be positive, got {threshold}"
            )));
        }
        Self::new(&PullConfig { threshold }, on_refresh)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn state(&self) -> PullState {
        PullState {
            offset: self.offset,
            rotation_degrees: self.rotation_degrees,
            refreshing: self.refreshing,
            frozen: self.frozen,
        }
    }

    /// Process one measurement update.
    ///
    /// Recomputes the offset from the region map, derives the indicator
    /// rotation, runs the threshold transitions and stores the offset for
    /// the next cycle. The refresh callback is invoked from inside this
    /// call, at most once, and is not awaited.
    pub fn update(&mut self, regions: &RegionMap) -> PullState {
        let offset = regions.scroll_offset();
        self.offset = offset;

        self.rotation_degrees = rotation(offset, self.threshold);

        // Crossing the threshold on the way down arms the refresh
        if !self.refreshing && offset > self.threshold && self.previous_offset <= self.threshold {
            self.refreshing = true;
            tracing::debug!("Pull armed at offset {:.1} (threshold {})", offset, self.threshold);
        }

        if self.refreshing {
            // Crossing back on the way up fires the callback once
            if self.previous_offset > self.threshold && offset <= self.threshold {
                tracing::debug!("Release crossed threshold at offset {:.1}, firing refresh", offset);
                (self.on_refresh)();
                self.refreshing = false;
            }
        } else {
            self.frozen = false;
        }

        self.previous_offset = offset;
        self.state()
    }
}

/// Indicator rotation for a pull offset.
///
/// Zero until the offset reaches 60% of the threshold, then a linear sweep
/// to 180 degrees over the remaining 40% of the pull distance, so the user
/// only gets rotation feedback near the trigger point.
pub fn rotation(offset: f64, threshold: f64) -> f64 {
    let start = threshold * ROTATION_START;
    if offset < start {
        return 0.0;
    }
    let span = threshold - start;
    let v = (offset - start).clamp(0.0, span);
    180.0 * (v / span)
}
