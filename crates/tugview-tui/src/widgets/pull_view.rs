use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::widgets::IndicatorWidget;

pub struct PullViewWidget;

impl PullViewWidget {
    /// Render the pull zone and the entry list it pushes down.
    ///
    /// The pull offset (layout units) maps to terminal rows; the indicator
    /// zone grows with the pull and the content shifts below it, mirroring
    /// the moving/fixed region split the controller measures.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        // Keep at least one row of content visible however far the pull goes
        let mut inset = app.pull_rows().min(area.height.saturating_sub(1));

        // After the spring settles the offset is zero, but an in-flight
        // refresh still deserves its spinner row
        if inset == 0 && app.is_refreshing && area.height > 1 {
            inset = 1;
        }

        if inset > 0 {
            let indicator_area = Rect::new(area.x, area.y, area.width, inset);
            IndicatorWidget::render(
                frame,
                indicator_area,
                &app.pull,
                app.is_refreshing,
                app.spinner_frame,
                &app.theme,
            );
        }

        let content_area = Rect::new(
            area.x,
            area.y + inset,
            area.width,
            area.height - inset,
        );
        Self::render_entries(frame, content_area, app);
    }

    fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" Entries ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg0));

        let items: Vec<ListItem> = app
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.fresh { "●" } else { " " };
                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(app.theme.yellow)),
                    Span::raw(" "),
                    Span::styled(&entry.title, Style::default().fg(app.theme.fg0)),
                    Span::raw("  "),
                    Span::styled(
                        entry.fetched_at.format("%H:%M:%S").to_string(),
                        Style::default().fg(app.theme.grey1),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(app.theme.fg1)
                    .bg(app.theme.selection),
            );

        let mut state = ListState::default().with_selected(Some(app.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
