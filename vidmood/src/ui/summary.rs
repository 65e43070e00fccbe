//! Summary panel renderer.
//!
//! Shows aggregate figures for the selected analyzed video: a bar chart of
//! positive / negative / neutral counts, the mean compound score, and the
//! overall label derived from that mean.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use vidmood_core::types::SentimentLabel;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the summary panel for the currently selected analyzed video.
///
/// The summary panel is never focused, so its border always uses the
/// inactive style.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block(" Summary ", false, theme);
    let inner = inner_rect(area);
    frame.render_widget(block, area);

    let Some(analysis) = state.selected_analysis() else {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No analysis yet.",
                Style::default().fg(theme.text_dim),
            )),
            inner,
        );
        return;
    };

    let summary = &analysis.summary;
    let [chart_area, text_area] =
        inner.layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]));

    let bars = [
        Bar::default()
            .label(Line::from("Pos"))
            .value(summary.positive as u64)
            .style(Style::default().fg(theme.label_positive)),
        Bar::default()
            .label(Line::from("Neg"))
            .value(summary.negative as u64)
            .style(Style::default().fg(theme.label_negative)),
        Bar::default()
            .label(Line::from("Neu"))
            .value(summary.neutral as u64)
            .style(Style::default().fg(theme.label_neutral)),
    ];
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2);
    frame.render_widget(chart, chart_area);

    let overall_color = match summary.overall {
        SentimentLabel::Positive => theme.label_positive,
        SentimentLabel::Negative => theme.label_negative,
        SentimentLabel::Neutral => theme.label_neutral,
    };
    let text = vec![
        Line::from(format!("Comments: {}", analysis.records.len())),
        Line::from(format!("Mean score: {:+.3}", summary.mean_score)),
        Line::from(vec![
            Span::raw("Overall: "),
            Span::styled(
                summary.overall.to_string(),
                Style::default().fg(overall_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), text_area);
}
