//! Region geometry aggregation.
//!
//! Two producers report their bounds independently: the moving region (the
//! scrollable content, whose top follows the user's pull) and the fixed
//! region (the stationary viewport used as the zero reference). Reports are
//! collected into a map keyed by [`RegionKind`]; a region that has not
//! reported yet reads as the zero rect, so the consumer never has to care
//! about delivery order.

use std::collections::HashMap;

/// Which of the two tracked regions a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Scrollable content; its top moves with the pull
    Moving,
    /// Stationary viewport; the zero reference for the offset
    Fixed,
}

/// Axis-aligned rectangle in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Vertical position of the top edge
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }
}

/// Keyed store of the latest bounds reported per region
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    regions: HashMap<RegionKind, Bounds>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement, replacing any earlier report for the same region
    pub fn record(&mut self, kind: RegionKind, bounds: Bounds) {
        self.regions.insert(kind, bounds);
    }

    /// Latest bounds for a region; zero rect if it never reported
    pub fn bounds(&self, kind: RegionKind) -> Bounds {
        self.regions.get(&kind).copied().unwrap_or(Bounds::ZERO)
    }

    /// Relative scroll offset: how far the moving region's top sits below
    /// the fixed region's top
    pub fn scroll_offset(&self) -> f64 {
        self.bounds(RegionKind::Moving).top() - self.bounds(RegionKind::Fixed).top()
    }

    /// Drop all recorded measurements
    pub fn clear(&mut self) {
        self.regions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_regions_default_to_zero_rect() {
        let map = RegionMap::new();
        assert_eq!(map.bounds(RegionKind::Moving), Bounds::ZERO);
        assert_eq!(map.bounds(RegionKind::Fixed), Bounds::ZERO);
        assert_eq!(map.scroll_offset(), 0.0);
    }

    #[test]
    fn test_offset_from_both_regions() {
        let mut map = RegionMap::new();
        map.record(RegionKind::Moving, Bounds::new(0.0, 42.0, 80.0, 200.0));
        map.record(RegionKind::Fixed, Bounds::new(0.0, 10.0, 80.0, 24.0));
        assert_eq!(map.scroll_offset(), 32.0);
    }

    #[test]
    fn test_one_missing_region_degrades_gracefully() {
        let mut map = RegionMap::new();
        map.record(RegionKind::Moving, Bounds::new(0.0, 15.0, 80.0, 200.0));
        // Fixed never reported; treated as the zero rect
        assert_eq!(map.scroll_offset(), 15.0);
    }

    #[test]
    fn test_record_overwrites_previous_report() {
        let mut map = RegionMap::new();
        map.record(RegionKind::Moving, Bounds::new(0.0, 5.0, 80.0, 200.0));
        map.record(RegionKind::Moving, Bounds::new(0.0, 9.0, 80.0, 200.0));
        assert_eq!(map.bounds(RegionKind::Moving).top(), 9.0);
    }

    #[test]
    fn test_clear() {
        let mut map = RegionMap::new();
        map.record(RegionKind::Fixed, Bounds::new(0.0, 3.0, 80.0, 24.0));
        map.clear();
        assert_eq!(map.bounds(RegionKind::Fixed), Bounds::ZERO);
    }
}
