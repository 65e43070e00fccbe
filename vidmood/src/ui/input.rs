//! URL input panel renderer.
//!
//! Shows the multi-line URL buffer. In Insert mode with this panel focused
//! the hardware cursor is placed at the edit position via
//! `frame.set_cursor_position`, which is the only way to get a blinking
//! cursor inside a ratatui widget.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::app::{AppState, Mode, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the URL input panel and, in Insert mode, the hardware cursor.
pub fn render_input(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let is_focused = state.focus == PanelFocus::Input;
    let title = if state.mode == Mode::Insert {
        " URLs (one per line) [editing] "
    } else {
        " URLs (one per line) "
    };
    let block = panel_block(title, is_focused, theme);
    let inner = inner_rect(area);
    frame.render_widget(block, area);

    let (cursor_row, cursor_col) = state.input.cursor();

    // Keep the cursor line visible inside the 3-row inner area.
    let visible = inner.height.max(1) as usize;
    let scroll = cursor_row.saturating_sub(visible - 1) as u16;

    let lines: Vec<Line> = if state.input.lines().iter().all(|l| l.is_empty()) {
        vec![Line::styled(
            "Press 'i' and paste YouTube URLs, one per line.",
            Style::default().fg(theme.text_dim),
        )]
    } else {
        state.input.lines().iter().map(|l| Line::raw(l.as_str())).collect()
    };

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    if state.mode == Mode::Insert && is_focused {
        // Column arithmetic assumes width-1 characters; URLs are ASCII in
        // practice so wide glyphs only displace the visual cursor.
        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (cursor_row as u16).saturating_sub(scroll);
        frame.set_cursor_position(Position { x, y });
    }
}
