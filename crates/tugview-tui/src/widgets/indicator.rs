use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use tugview_core::PullState;

use crate::theme::Theme;

/// Braille spinner shown while a refresh is in flight
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Arc ramp swept as the indicator rotation grows from 0 to 180 degrees
const ARC_RAMP: [&str; 8] = ["◌", "◜", "◠", "◝", "◞", "◡", "◟", "◯"];

pub struct IndicatorWidget;

impl IndicatorWidget {
    /// Render the loading symbol into the pull zone above the content.
    ///
    /// `loading` is the host's in-flight flag; the controller only reports
    /// the armed state, continuous spin is this layer's concern.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &PullState,
        loading: bool,
        spinner_frame: usize,
        theme: &Theme,
    ) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (glyph, style) = if loading {
            (
                spinner_glyph(spinner_frame),
                Style::default().fg(theme.purple),
            )
        } else if state.refreshing {
            (
                arc_glyph(state.rotation_degrees),
                Style::default()
                    .fg(theme.purple)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                arc_glyph(state.rotation_degrees),
                Style::default().fg(theme.purple),
            )
        };

        // Symbol sits on the bottom row of the pull zone, just above the
        // content it pushes down
        let symbol_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let symbol = Paragraph::new(Line::from(Span::styled(glyph, style)))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg1));

        // Fill the rest of the zone with the pull background
        let backdrop = Paragraph::new("").style(Style::default().bg(theme.bg1));
        frame.render_widget(backdrop, area);
        frame.render_widget(symbol, symbol_area);

        // With enough room, show what a release will do
        if area.height >= 3 && !loading {
            let hint = if state.refreshing {
                "release to refresh"
            } else {
                "pull to refresh"
            };
            let hint_area = Rect::new(area.x, area.y + area.height - 3, area.width, 1);
            let hint_line = Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.grey1),
            )))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg1));
            frame.render_widget(hint_line, hint_area);
        }
    }
}

/// Map a rotation angle (0..=180 degrees) onto the arc ramp
pub fn arc_glyph(rotation_degrees: f64) -> &'static str {
    let t = (rotation_degrees / 180.0).clamp(0.0, 1.0);
    let idx = (t * (ARC_RAMP.len() - 1) as f64).round() as usize;
    ARC_RAMP[idx]
}

/// Current spinner frame, wrapping over the frame table
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_glyph_boundaries() {
        assert_eq!(arc_glyph(0.0), ARC_RAMP[0]);
        assert_eq!(arc_glyph(180.0), ARC_RAMP[ARC_RAMP.len() - 1]);
        // Out-of-range values clamp instead of panicking
        assert_eq!(arc_glyph(-20.0), ARC_RAMP[0]);
        assert_eq!(arc_glyph(400.0), ARC_RAMP[ARC_RAMP.len() - 1]);
    }

    #[test]
    fn test_arc_glyph_monotonic_index() {
        let mut prev = 0;
        for deg in 0..=180 {
            let glyph = arc_glyph(deg as f64);
            let idx = ARC_RAMP.iter().position(|g| *g == glyph).unwrap();
            assert!(idx >= prev, "ramp index decreased at {deg} degrees");
            prev = idx;
        }
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_glyph(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_glyph(SPINNER_FRAMES.len()), SPINNER_FRAMES[0]);
        assert_eq!(spinner_glyph(SPINNER_FRAMES.len() + 3), SPINNER_FRAMES[3]);
    }
}
