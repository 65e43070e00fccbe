//! UI rendering module for vidmood.
//!
//! Module root for `ui/`. Re-exports `render()` as the single entry point
//! called by the event loop's `terminal.draw()` closure.
//!
//! Layout arithmetic lives in `layout.rs`; each panel has its own renderer
//! module. Key and mouse dispatch lives in `keybindings.rs`.

mod layout;
pub mod help;
pub mod input;
pub mod keybindings;
pub mod notices;
pub mod results;
pub mod summary;
pub mod videos;

use ratatui::{
    Frame,
    layout::Constraint,
    style::Style,
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, inner_rect, render_status_bar};

/// Renders one complete frame: input, videos, results, summary, notices,
/// status bar, and any modal overlay.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`;
/// this is the only place `terminal.draw()` content is produced.
///
/// Viewport heights and panel rects are written back into `state` so that
/// scroll distances and click-to-focus hit testing triggered by the *next*
/// input event are computed against the geometry actually on screen. The
/// one-frame lag is imperceptible in practice.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [input_area, videos, results, summary, notices_area, status_bar] = compute_layout(frame);

    state.videos_viewport_height = inner_rect(videos).height;
    state.results_viewport_height = inner_rect(results).height;
    state.notices_viewport_height = inner_rect(notices_area).height;
    state.panel_rects = [input_area, videos, results, notices_area];

    input::render_input(frame, input_area, state, theme);

    // Side panels are collapsed to zero width on narrow terminals.
    if videos.width > 0 {
        videos::render_videos(frame, videos, state, theme);
    }
    results::render_results(frame, results, state, theme);
    if summary.width > 0 {
        summary::render_summary(frame, summary, state, theme);
    }

    notices::render_notices(frame, notices_area, state, theme);
    render_status_bar(frame, status_bar, state, theme);

    // Overlays sit above all panels; Clear erases the background inside
    // each renderer.
    match state.mode {
        Mode::HelpOverlay => help::render_help_overlay(frame, theme, state.help_scroll),
        Mode::ConfirmQuit => render_confirm_quit(frame, theme),
        Mode::Normal | Mode::Insert => {}
    }
}

/// Renders the quit-confirmation modal shown while a fetch is in flight.
fn render_confirm_quit(frame: &mut Frame, theme: &Theme) {
    let area = frame
        .area()
        .centered(Constraint::Length(44), Constraint::Length(5));

    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_style(Style::default().fg(theme.notice_warning));

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("A fetch is still running."),
            Line::from(""),
            Line::from("Quit anyway?  y / n"),
        ])
        .block(block)
        .centered(),
        area,
    );
}
