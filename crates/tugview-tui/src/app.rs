use std::sync::Arc;

use chrono::{DateTime, Local};

use tugview_core::{
    AppConfig, Bounds, PullState, RefreshController, RegionKind, RegionMap, Result,
};

use crate::spring::SpringAnimator;
use crate::theme::Theme;
use crate::widgets::SPINNER_FRAMES;

/// One row of demo content; a refresh prepends fresh entries
pub struct Entry {
    pub title: String,
    pub fetched_at: DateTime<Local>,
    /// Set on the newest batch, cleared by the next refresh
    pub fresh: bool,
}

/// An in-progress mouse drag
pub struct DragState {
    /// Row where the button went down; the pull distance is measured from here
    pub origin_row: u16,
}

/// Application state for the demo TUI
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    controller: RefreshController,
    regions: RegionMap,
    /// Latest controller snapshot, refreshed every measurement cycle
    pub pull: PullState,
    pub spring: SpringAnimator,
    pub drag: Option<DragState>,
    pub entries: Vec<Entry>,
    pub selected: usize,
    pub spinner_frame: usize,
    /// Host-side flag while the spawned refresh task runs
    pub is_refreshing: bool,
    pub status_message: Option<String>,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    /// Terminal size, reported into the region map as the fixed viewport
    pub viewport: (u16, u16),
    entry_seq: usize,
}

impl App {
    pub fn new<F>(config: Arc<AppConfig>, theme: Theme, on_refresh: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let controller = RefreshController::new(&config.pull, on_refresh)?;
        let spring = SpringAnimator::new(config.ui.spring.clone());
        let pull = controller.state();
        let entries = Self::seed_entries();
        let entry_seq = entries.len();

        Ok(Self {
            config,
            theme,
            controller,
            regions: RegionMap::new(),
            pull,
            spring,
            drag: None,
            entries,
            selected: 0,
            spinner_frame: 0,
            is_refreshing: false,
            status_message: None,
            pending_key: None,
            should_quit: false,
            viewport: (0, 0),
            entry_seq,
        })
    }

    fn seed_entries() -> Vec<Entry> {
        let now = Local::now();
        let mut entries: Vec<Entry> = vec![Entry {
            title: "Drag down with the mouse and let go to refresh".to_string(),
            fetched_at: now,
            fresh: false,
        }];
        entries.extend((1..=8).map(|i| Entry {
            title: format!("Sample entry {}", i),
            fetched_at: now,
            fresh: false,
        }));
        entries
    }

    pub fn controller_threshold(&self) -> f64 {
        self.controller.threshold()
    }

    // --- Pull gesture -----------------------------------------------------

    /// Left button pressed; remember the grab row and stop any spring-back
    pub fn begin_drag(&mut self, row: u16) {
        self.drag = Some(DragState { origin_row: row });
        self.spring.cancel();
    }

    /// Drag moved; pin the pull offset to the distance below the grab row
    pub fn drag_to(&mut self, row: u16) {
        if let Some(drag) = &self.drag {
            let rows = row.saturating_sub(drag.origin_row) as f64;
            self.spring.hold(rows * self.config.ui.units_per_row);
        }
    }

    /// Button released; the view springs back toward rest
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.spring.release();
        }
    }

    /// One measurement-update cycle.
    ///
    /// Advances the spring, republishes both region bounds into the keyed
    /// map and steps the controller. The refresh callback, if the release
    /// crossed the threshold this cycle, fires from inside the controller.
    pub fn update_pull(&mut self) {
        let offset = self.spring.update();
        let (width, height) = self.viewport;

        self.regions.record(
            RegionKind::Fixed,
            Bounds::new(0.0, 0.0, width as f64, height as f64),
        );
        self.regions.record(
            RegionKind::Moving,
            Bounds::new(0.0, offset, width as f64, height as f64),
        );

        self.pull = self.controller.update(&self.regions);
    }

    /// Current pull offset expressed in terminal rows
    pub fn pull_rows(&self) -> u16 {
        let rows = self.pull.offset / self.config.ui.units_per_row;
        rows.round().max(0.0) as u16
    }

    /// True while the main loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.spring.needs_update()
    }

    // --- Refresh lifecycle ------------------------------------------------

    pub fn begin_refresh(&mut self) {
        self.is_refreshing = true;
        self.set_status("Refreshing...");
    }

    pub fn finish_refresh(&mut self, new_count: u32) {
        self.is_refreshing = false;
        tracing::debug!("Prepending {} fresh entries", new_count);

        for entry in &mut self.entries {
            entry.fresh = false;
        }
        for _ in 0..new_count {
            self.entry_seq += 1;
            self.entries.insert(
                0,
                Entry {
                    title: format!("Fetched entry {}", self.entry_seq),
                    fetched_at: Local::now(),
                    fresh: true,
                },
            );
        }
        // Keep the selection on the entry it pointed at before the prepend
        self.selected = (self.selected + new_count as usize).min(self.entries.len().saturating_sub(1));

        if new_count > 0 {
            self.set_status(format!("Refreshed: {} new entries", new_count));
        } else {
            self.set_status("Refreshed: no new entries");
        }
    }

    pub fn fail_refresh(&mut self, error: String) {
        self.is_refreshing = false;
        self.set_status(format!("Refresh failed: {}", error));
    }

    // --- Navigation -------------------------------------------------------

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    // --- Misc -------------------------------------------------------------

    /// Advance the spinner while anything is loading
    pub fn tick_spinner(&mut self) {
        if self.is_refreshing || self.pull.refreshing {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn snapping_app() -> (App, Rc<Cell<u32>>) {
        // Disable the smooth spring so a release settles in one cycle
        let mut config = AppConfig::default();
        config.ui.spring.smooth_enabled = false;
        let fired = Rc::new(Cell::new(0));
        let fired_cb = Rc::clone(&fired);
        let mut app = App::new(Arc::new(config), Theme::default(), move || {
            fired_cb.set(fired_cb.get() + 1);
        })
        .unwrap();
        app.viewport = (80, 24);
        (app, fired)
    }

    #[test]
    fn test_drag_past_threshold_then_release_fires() {
        let (mut app, fired) = snapping_app();

        // Grab at row 2, drag to row 14: 12 rows * 10 units = 120 > 110
        app.begin_drag(2);
        app.drag_to(14);
        app.update_pull();
        assert!(app.pull.refreshing);
        assert_eq!(fired.get(), 0);

        // Release snaps to rest, crossing the threshold upward
        app.end_drag();
        app.update_pull();
        assert_eq!(fired.get(), 1);
        assert!(!app.pull.refreshing);
        assert_eq!(app.pull.offset, 0.0);
    }

    #[test]
    fn test_short_drag_never_fires() {
        let (mut app, fired) = snapping_app();

        app.begin_drag(2);
        app.drag_to(7); // 50 units, below threshold
        app.update_pull();
        assert!(!app.pull.refreshing);

        app.end_drag();
        app.update_pull();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_second_cycle_fires_again() {
        let (mut app, fired) = snapping_app();

        for _ in 0..2 {
            app.begin_drag(0);
            app.drag_to(13);
            app.update_pull();
            app.end_drag();
            app.update_pull();
        }
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_pull_rows_scales_by_units_per_row() {
        let (mut app, _fired) = snapping_app();
        app.begin_drag(0);
        app.drag_to(5);
        app.update_pull();
        assert_eq!(app.pull_rows(), 5);
    }

    #[test]
    fn test_drag_upward_clamps_to_rest() {
        let (mut app, _fired) = snapping_app();
        app.begin_drag(10);
        app.drag_to(4); // above the grab row
        app.update_pull();
        assert_eq!(app.pull.offset, 0.0);
        assert_eq!(app.pull_rows(), 0);
    }

    #[test]
    fn test_finish_refresh_prepends_fresh_entries() {
        let (mut app, _fired) = snapping_app();
        let before = app.entries.len();
        app.selected = 2;

        app.begin_refresh();
        assert!(app.is_refreshing);
        app.finish_refresh(3);

        assert!(!app.is_refreshing);
        assert_eq!(app.entries.len(), before + 3);
        assert!(app.entries[..3].iter().all(|e| e.fresh));
        assert!(app.entries[3..].iter().all(|e| !e.fresh));
        // Selection still points at the same entry
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_navigation_bounds() {
        let (mut app, _fired) = snapping_app();
        app.move_up();
        assert_eq!(app.selected, 0);
        app.jump_to_bottom();
        assert_eq!(app.selected, app.entries.len() - 1);
        app.move_down();
        assert_eq!(app.selected, app.entries.len() - 1);
        app.jump_to_top();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_spinner_only_ticks_while_loading() {
        let (mut app, _fired) = snapping_app();
        app.tick_spinner();
        assert_eq!(app.spinner_frame, 0);

        app.begin_refresh();
        app.tick_spinner();
        assert_eq!(app.spinner_frame, 1);
    }
}
