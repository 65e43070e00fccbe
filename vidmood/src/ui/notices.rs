//! Notice log renderer.
//!
//! Renders the bottom panel with one line per notice, colored by severity.
//! The view follows the newest notice by default; `notices_offset_up`
//! counts rows scrolled up from the bottom, so new notices do not yank the
//! view while the user is reading history unless they are already at the
//! bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, NoticeLevel, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the notice log panel.
pub fn render_notices(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let is_focused = state.focus == PanelFocus::Notices;
    let title = format!(" Notices ({}) ", state.notices.len());
    let block = panel_block(&title, is_focused, theme);
    let inner = inner_rect(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = state
        .notices
        .iter()
        .map(|notice| {
            let (glyph, color) = match notice.level {
                NoticeLevel::Info => ("i ", theme.notice_info),
                NoticeLevel::Warning => ("! ", theme.notice_warning),
                NoticeLevel::Error => ("x ", theme.notice_error),
                NoticeLevel::Success => ("+ ", theme.notice_success),
            };
            Line::from(vec![
                Span::styled(glyph, Style::default().fg(color)),
                Span::styled(notice.text.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    // Bottom-following scroll: offset_up == 0 pins the newest notice to the
    // last visible row.
    let total = lines.len() as u16;
    let max_scroll = total.saturating_sub(inner.height.max(1));
    let offset_up = state.notices_offset_up.min(max_scroll);
    let scroll = max_scroll - offset_up;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
