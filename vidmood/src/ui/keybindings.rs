//! Keybinding dispatcher.
//!
//! Translates raw crossterm `KeyEvent`s into `AppState` mutations and
//! returns a `KeyAction` telling the event loop what to do next. The
//! dispatcher branches first on `state.mode` so that HelpOverlay,
//! ConfirmQuit, Insert, and Normal all have isolated handler functions.
//!
//! The fetch and analyze actions are returned to the event loop rather than
//! executed here, because fetch needs the worker channel and analyze needs
//! the scorer, and neither belongs in the key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{AppState, Mode, PanelFocus};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue the event loop normally.
    Continue,
    /// Exit cleanly.
    Quit,
    /// Start a comment fetch for the URLs in the input buffer.
    Fetch,
    /// Run sentiment analysis over the cached comments.
    Analyze,
}

/// Dispatches a key event to the handler matching the current mode.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::ConfirmQuit => handle_confirm_quit(key, state),
        Mode::Normal => handle_normal(key, state),
        Mode::Insert => handle_insert(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    // Scroll keys first (j/k/g/G/Ctrl-d/u/f/b); plain f falls through to
    // the fetch action below.
    if let Some(action) = handle_scroll_key(key, state) {
        return action;
    }

    match key.code {
        // Panel focus
        KeyCode::Char('H') => {
            state.focus = state.focus.prev();
            KeyAction::Continue
        }
        KeyCode::Char('L') | KeyCode::Tab => {
            state.focus = state.focus.next();
            KeyAction::Continue
        }

        // Enter Insert mode; focus follows so the cursor is visible.
        KeyCode::Char('i') => {
            state.focus = PanelFocus::Input;
            state.mode = Mode::Insert;
            KeyAction::Continue
        }
        KeyCode::Enter if state.focus == PanelFocus::Input => {
            state.mode = Mode::Insert;
            KeyAction::Continue
        }

        // The two workflow actions.
        KeyCode::Char('f') => KeyAction::Fetch,
        KeyCode::Char('a') => KeyAction::Analyze,

        // Help overlay
        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }

        // Quit, with confirmation while a fetch is in flight.
        KeyCode::Char('q') | KeyCode::Esc => {
            if state.fetching {
                state.mode = Mode::ConfirmQuit;
                KeyAction::Continue
            } else {
                KeyAction::Quit
            }
        }

        _ => KeyAction::Continue,
    }
}

/// Handles scroll-related keys in Normal mode: j / k / g / G and Ctrl
/// combos. Returns `Some` when the key was consumed.
fn handle_scroll_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('j') => {
            state.scroll_down(1);
            Some(KeyAction::Continue)
        }
        KeyCode::Char('k') => {
            state.scroll_up(1);
            Some(KeyAction::Continue)
        }
        KeyCode::Char('g') => {
            state.scroll_top();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('G') => {
            state.scroll_bottom();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('d') if ctrl => {
            state.half_page_down();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('u') if ctrl => {
            state.half_page_up();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('f') if ctrl => {
            state.full_page_down();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('b') if ctrl => {
            state.full_page_up();
            Some(KeyAction::Continue)
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Insert mode
// ---------------------------------------------------------------------------

/// Handles a key event while editing the URL buffer.
fn handle_insert(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Esc => state.mode = Mode::Normal,
        KeyCode::Enter => state.input.insert_newline(),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Up => state.input.move_up(),
        KeyCode::Down => state.input.move_down(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert_char(c);
        }
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') => state.help_scroll = state.help_scroll.saturating_add(1),
        KeyCode::Char('k') => state.help_scroll = state.help_scroll.saturating_sub(1),
        KeyCode::Char('g') => state.help_scroll = 0,
        KeyCode::Char('G') => state.help_scroll = u16::MAX,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.mode = Mode::Normal,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// ConfirmQuit mode
// ---------------------------------------------------------------------------

/// `y` confirms the quit while a fetch is running; `n` / `Esc` cancels.
fn handle_confirm_quit(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.mode = Mode::Normal;
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Handles a mouse event: click-to-focus and scroll-wheel.
///
/// Left click on a panel focuses it. Scroll wheel moves the focused panel
/// by 3 lines, or the help overlay when it is open.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_click(mouse.column, mouse.row, state)
        }
        MouseEventKind::ScrollUp => {
            if state.mode == Mode::HelpOverlay {
                state.help_scroll = state.help_scroll.saturating_sub(3);
            } else {
                state.scroll_up(3);
            }
            KeyAction::Continue
        }
        MouseEventKind::ScrollDown => {
            if state.mode == Mode::HelpOverlay {
                state.help_scroll = state.help_scroll.saturating_add(3);
            } else {
                state.scroll_down(3);
            }
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

/// Sets panel focus from the clicked position using the rects cached during
/// the last render. Collapsed panels (zero width) cannot receive focus.
fn handle_mouse_click(col: u16, row: u16, state: &mut AppState) -> KeyAction {
    let pos = Position { x: col, y: row };
    let [input, videos, results, notices] = state.panel_rects;

    if input.contains(pos) {
        state.focus = PanelFocus::Input;
    } else if videos.width > 0 && videos.contains(pos) {
        state.focus = PanelFocus::Videos;
    } else if results.contains(pos) {
        state.focus = PanelFocus::Results;
    } else if notices.contains(pos) {
        state.focus = PanelFocus::Notices;
    }

    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn normal_mode_dispatches_workflow_actions() {
        let mut state = AppState::default();
        assert_eq!(handle_key(key(KeyCode::Char('f')), &mut state), KeyAction::Fetch);
        assert_eq!(handle_key(key(KeyCode::Char('a')), &mut state), KeyAction::Analyze);
    }

    #[test]
    fn ctrl_f_scrolls_instead_of_fetching() {
        let mut state = AppState { focus: PanelFocus::Results, ..AppState::default() };
        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_f, &mut state), KeyAction::Continue);
    }

    #[test]
    fn insert_mode_round_trip() {
        let mut state = AppState::default();
        handle_key(key(KeyCode::Char('i')), &mut state);
        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.focus, PanelFocus::Input);

        handle_key(key(KeyCode::Char('h')), &mut state);
        handle_key(key(KeyCode::Char('i')), &mut state);
        assert_eq!(state.input.text(), "hi");

        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn quit_confirms_while_fetching() {
        let mut state = AppState { fetching: true, ..AppState::default() };
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::ConfirmQuit);

        assert_eq!(handle_key(key(KeyCode::Char('n')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);

        handle_key(key(KeyCode::Char('q')), &mut state);
        assert_eq!(handle_key(key(KeyCode::Char('y')), &mut state), KeyAction::Quit);
    }

    #[test]
    fn quit_is_immediate_when_idle() {
        let mut state = AppState::default();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Quit);
    }

    #[test]
    fn tab_cycles_focus_through_all_panels() {
        let mut state = AppState::default();
        let start = state.focus;
        for _ in 0..4 {
            handle_key(key(KeyCode::Tab), &mut state);
        }
        assert_eq!(state.focus, start);
    }

    #[test]
    fn help_overlay_opens_and_dismisses() {
        let mut state = AppState::default();
        handle_key(key(KeyCode::Char('?')), &mut state);
        assert_eq!(state.mode, Mode::HelpOverlay);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.help_scroll, 1);
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.mode, Mode::Normal);
    }
}
