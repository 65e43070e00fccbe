//! Videos panel renderer.
//!
//! Lists every URL from the most recent fetch with a status badge:
//!
//! - `[!]`     the URL did not contain a recognisable video identifier
//! - `[x]`     collection failed partway (kept comments still count)
//! - `[-]  0`  collection succeeded but the video has no comments
//! - `[+]  n`  collection succeeded with `n` comments
//!
//! Selecting a row drives which video the results and summary panels show.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use vidmood_core::types::UrlResult;

use crate::app::{AppState, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the videos panel: one row per fetched URL with a status badge.
pub fn render_videos(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let is_focused = state.focus == PanelFocus::Videos;
    let count = state.report.as_ref().map(|r| r.entries.len()).unwrap_or(0);
    let title = format!(" Videos ({count}) ");
    let block = panel_block(&title, is_focused, theme);

    let Some(report) = &state.report else {
        let inner = inner_rect(area);
        frame.render_widget(block, area);
        let placeholder = if state.fetching {
            "Fetching..."
        } else {
            "No videos yet. Press 'f' to fetch."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(placeholder, Style::default().fg(theme.text_dim))),
            inner,
        );
        return;
    };

    let items: Vec<ListItem> = report
        .entries
        .iter()
        .map(|entry| {
            let (badge, badge_style, url_style) = match &entry.result {
                UrlResult::Invalid => (
                    "[!]     ".to_owned(),
                    Style::default().fg(theme.notice_warning),
                    Style::default().fg(theme.text_dim),
                ),
                UrlResult::Fetched(outcome) if outcome.error.is_some() => (
                    format!("[x] {:>3} ", outcome.comments.len()),
                    Style::default().fg(theme.notice_error),
                    Style::default(),
                ),
                UrlResult::Fetched(outcome) if outcome.comments.is_empty() => (
                    "[-]   0 ".to_owned(),
                    Style::default().fg(theme.notice_warning),
                    Style::default(),
                ),
                UrlResult::Fetched(outcome) => (
                    format!("[+] {:>3} ", outcome.comments.len()),
                    Style::default().fg(theme.notice_success),
                    Style::default(),
                ),
            };
            ListItem::new(Line::from(vec![
                Span::styled(badge, badge_style),
                Span::styled(entry.url.clone(), url_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut state.videos_state);
}
