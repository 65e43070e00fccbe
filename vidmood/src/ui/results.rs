//! Results panel renderer.
//!
//! The centre panel has three display states for the selected video:
//!
//! 1. After analyze: a sentiment table (score, label, comment) with
//!    label-colored rows and a selectable highlight.
//! 2. After fetch but before analyze: a plain scrollable preview of the
//!    raw comment text.
//! 3. Otherwise: a placeholder describing the f / a workflow.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Row, Table, Wrap},
};

use vidmood_core::types::{SentimentLabel, UrlResult};

use crate::app::{AppState, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the results panel for the currently selected video.
pub fn render_results(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let is_focused = state.focus == PanelFocus::Results;

    // Materialise owned rows first; rendering the stateful table needs
    // `&mut state.results_table_state` and must not overlap the borrow of
    // `state.analyses`.
    let table_rows: Option<Vec<Row<'static>>> = state.selected_analysis().map(|analysis| {
        analysis
            .records
            .iter()
            .map(|record| {
                let color = match record.label {
                    SentimentLabel::Positive => theme.label_positive,
                    SentimentLabel::Negative => theme.label_negative,
                    SentimentLabel::Neutral => theme.label_neutral,
                };
                Row::new(vec![
                    format!("{:+.2}", record.score),
                    record.label.to_string(),
                    record.text.clone(),
                ])
                .style(Style::default().fg(color))
            })
            .collect()
    });

    if let Some(rows) = table_rows {
        let title = format!(" Sentiment ({}) ", rows.len());
        let block = panel_block(&title, is_focused, theme);
        let header = Row::new(vec!["Score", "Label", "Comment"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table = Table::new(
            rows,
            [Constraint::Length(6), Constraint::Length(8), Constraint::Fill(1)],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, area, &mut state.results_table_state);
        return;
    }

    // No analysis yet: show raw comments for the selected fetched video.
    let preview: Option<Vec<Line>> = state.selected_report_entry().and_then(|entry| {
        match &entry.result {
            UrlResult::Fetched(outcome) if !outcome.comments.is_empty() => Some(
                outcome
                    .comments
                    .iter()
                    .map(|c| Line::raw(format!("- {c}")))
                    .collect(),
            ),
            _ => None,
        }
    });

    match preview {
        Some(lines) => {
            let title = format!(" Comments ({}) ", lines.len());
            let block = panel_block(&title, is_focused, theme);
            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((state.preview_scroll, 0)),
                area,
            );
        }
        None => {
            let block = panel_block(" Results ", is_focused, theme);
            let inner = inner_rect(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::styled(
                        "Press 'f' to fetch comments,",
                        Style::default().fg(theme.text_dim),
                    ),
                    Line::styled(
                        "then 'a' to analyze sentiment.",
                        Style::default().fg(theme.text_dim),
                    ),
                ]),
                inner,
            );
        }
    }
}
