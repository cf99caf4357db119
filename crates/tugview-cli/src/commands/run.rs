use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use tugview_core::AppConfig;
use tugview_tui::{
    app::App,
    event::{AppEvent, EventHandler, RefreshResult},
    input::{handle_key_event, handle_mouse_event, Action},
    widgets::{PullViewWidget, StatusBarWidget},
    Theme,
};

/// Simulated fetch latency for the demo refresh
const FETCH_DELAY_MS: u64 = 800;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Tugview")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel for refresh lifecycle events. The controller callback only
    // posts Started; the fetch itself runs on a spawned task and reports
    // back over the same channel.
    let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel::<RefreshResult>();

    let callback_tx = refresh_tx.clone();
    let mut app = App::new(config.clone(), Theme::default(), move || {
        let _ = callback_tx.send(RefreshResult::Started);
    })?;

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.spring.animation_fps);

    // Track if we need high frame rate for the spring-back
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process refresh lifecycle events (non-blocking)
        while let Ok(result) = refresh_rx.try_recv() {
            handle_refresh_result(&mut app, result, &refresh_tx);
        }

        // One measurement-update cycle per frame; the refresh callback
        // fires from inside this call when a release crosses the threshold
        app.update_pull();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();
            app.viewport = (size.width, size.height);

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            PullViewWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        // Handle events (use faster tick rate while the spring is in flight)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &refresh_tx);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    handle_action(&mut app, action, &refresh_tx);
                }
                AppEvent::Resize(w, h) => {
                    app.viewport = (w, h);
                }
                AppEvent::Tick => {
                    // Tick spinner animation for loading indicator
                    app.tick_spinner();
                }
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action, refresh_tx: &mpsc::UnboundedSender<RefreshResult>) {
    // Clear pending key on any action except the gg sequence
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::Refresh => {
            // Manual refresh takes the same path as a completed pull
            if app.is_refreshing {
                app.set_status("Refresh already in progress...");
            } else {
                let _ = refresh_tx.send(RefreshResult::Started);
            }
        }
        Action::PullGrab(row) => app.begin_drag(row),
        Action::PullDrag(row) => app.drag_to(row),
        Action::PullRelease => app.end_drag(),
        Action::None => {}
    }
}

/// Handle one refresh lifecycle event
fn handle_refresh_result(
    app: &mut App,
    result: RefreshResult,
    refresh_tx: &mpsc::UnboundedSender<RefreshResult>,
) {
    match result {
        RefreshResult::Started => {
            // A pull can land while a refresh is already in flight; the
            // running fetch covers it
            if app.is_refreshing {
                return;
            }
            app.begin_refresh();
            spawn_fetch(refresh_tx.clone());
        }
        RefreshResult::Success { new_count } => {
            tracing::info!("Refresh finished with {} new entries", new_count);
            app.finish_refresh(new_count);
        }
        RefreshResult::Failure { error } => {
            tracing::warn!("Refresh failed: {}", error);
            app.fail_refresh(error);
        }
    }
}

/// Spawn the simulated fetch as a background task
fn spawn_fetch(tx: mpsc::UnboundedSender<RefreshResult>) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(FETCH_DELAY_MS)).await;
        // Vary the batch size a little without pulling in a RNG
        let new_count = 1 + chrono::Local::now().timestamp_subsec_millis() % 3;
        let _ = tx.send(RefreshResult::Success { new_count });
    });
}
