//! Responsive layout engine for vidmood.
//!
//! Pure layout arithmetic, no mutable application state. Called inside
//! `terminal.draw()` on every render so every frame reflects the current
//! terminal size.
//!
//! # Panel geometry
//!
//! Vertical: a 5-row URL input panel on top, the main area filling the
//! remaining height, a 6-row notice log, and a 1-row status bar.
//!
//! The main area splits horizontally into videos / results / summary. At
//! `>= 100` columns all three are visible; below that the side panels
//! collapse and the results panel fills the full width.
//!
//! `Spacing::Overlap(1)` combined with `Block::merge_borders(MergeStrategy::Fuzzy)`
//! makes adjacent panel borders share a single column and merge their
//! junction box-drawing characters automatically.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect, Spacing},
    style::{Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{AppState, Mode, SPINNER_FRAMES};
use crate::theme::Theme;

/// Returns `[input, videos, results, summary, notices, status_bar]` rects
/// for the current frame.
///
/// Called inside `terminal.draw()` on every render. The returned rects are
/// valid only for the current draw closure.
///
/// | Terminal width | Main area layout |
/// |----------------|------------------|
/// | `< 100` cols   | Videos and summary collapsed; results full width |
/// | `>= 100` cols  | 30% videos, 42% results, 28% summary |
pub fn compute_layout(frame: &Frame) -> [Rect; 6] {
    let term_width = frame.area().width;

    let [input_area, main_area, notices_area, status_bar] =
        frame.area().layout(&Layout::vertical([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(1),
        ]));

    let horizontal = if term_width >= 100 {
        Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Percentage(42),
            Constraint::Percentage(28),
        ])
        .spacing(Spacing::Overlap(1))
    } else {
        Layout::horizontal([
            Constraint::Length(0),
            Constraint::Fill(1),
            Constraint::Length(0),
        ])
        .spacing(Spacing::Overlap(1))
    };

    let [videos, results, summary] = main_area.layout(&horizontal);

    [input_area, videos, results, summary, notices_area, status_bar]
}

/// Returns the inner `Rect` of a panel after removing the 1-cell border.
///
/// Used to cache viewport heights in `AppState` before panels are rendered,
/// so that half-page and full-page scroll distances are available at
/// keypress time.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds a bordered `Block` for a panel.
///
/// `BorderType::Thick` for the focused panel, `Plain` otherwise.
/// `MergeStrategy::Fuzzy` is required because `Exact` produces incorrect
/// junctions when mixing `Thick` and `Plain` borders.
pub fn panel_block<'a>(title: &'a str, is_focused: bool, theme: &'a Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border_inactive)
    };
    let border_type = if is_focused { BorderType::Thick } else { BorderType::Plain };

    Block::bordered()
        .title(title)
        .border_type(border_type)
        .border_style(border_style)
        .merge_borders(MergeStrategy::Fuzzy)
}

/// Renders the 1-row status bar at the bottom of the terminal.
///
/// Always shows a mode indicator (`NORMAL` or `INSERT`), a spinner while a
/// fetch is in flight, and the key hints. `HelpOverlay` and `ConfirmQuit`
/// display `NORMAL` because the underlying mode is Normal; the overlay is a
/// transient visual layer, not a mode change.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (mode_text, mode_fg) = match state.mode {
        Mode::Insert => (" INSERT ", theme.status_mode_insert),
        Mode::Normal | Mode::ConfirmQuit | Mode::HelpOverlay => {
            (" NORMAL ", theme.status_mode_normal)
        }
    };

    let mut spans = vec![Span::styled(
        mode_text,
        Style::default().fg(mode_fg).add_modifier(Modifier::BOLD),
    )];

    if state.fetching {
        let frame_glyph = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!(" {frame_glyph} fetching "),
            Style::default().fg(theme.status_fetching),
        ));
    }

    spans.push(Span::raw("  f fetch  a analyze  i edit urls  Tab focus  ? help  q quit"));

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
