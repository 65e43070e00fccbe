//! Help overlay renderer.
//!
//! Draws a centred modal box over the panel layout using ratatui's `Clear`
//! widget to erase the background first. The overlay is rendered inside the
//! same `terminal.draw()` closure as the panels, after them, so it sits on
//! top without a second draw call.

use ratatui::{
    Frame,
    layout::Constraint,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal.
///
/// Skipped entirely when the terminal is narrower than 60 columns to avoid
/// a zero-height `Rect`.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 60 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));

    // Erase the background behind the modal before drawing content.
    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help (j/k scroll, ? or Esc to dismiss) ")
        .border_style(ratatui::style::Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

/// All keybinding descriptions grouped by section.
fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Workflow"),
        Line::from("  i             Edit the URL list (Insert mode)"),
        Line::from("  f             Fetch comments for every URL"),
        Line::from("  a             Analyze sentiment of fetched comments"),
        Line::from(""),
        Line::from("Insert mode"),
        Line::from("  Esc           Back to Normal mode"),
        Line::from("  Enter         New line"),
        Line::from("  Arrows        Move the cursor"),
        Line::from(""),
        Line::from("Navigation"),
        Line::from("  j / k         Scroll down / up one line"),
        Line::from("  g / G         Jump to top / bottom"),
        Line::from("  Ctrl-d / u    Scroll half page down / up"),
        Line::from("  Ctrl-f / b    Scroll full page down / up"),
        Line::from("  H / L / Tab   Move panel focus"),
        Line::from(""),
        Line::from("Panels"),
        Line::from("  Videos        One row per URL; selection drives the"),
        Line::from("                results and summary panels"),
        Line::from("  Results       Raw comments after fetch, sentiment"),
        Line::from("                table after analyze"),
        Line::from("  Notices       Progress and error log"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?             Open / close this help overlay"),
        Line::from("  q / Esc       Quit (confirms while a fetch runs)"),
    ])
}
