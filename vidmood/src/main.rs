//! vidmood, a YouTube comment sentiment TUI.
//!
//! Entry point for the `vidmood` binary. Wires together the terminal
//! lifecycle (`tui`), unified event bus (`event`), panel UI (`ui`), theme
//! system (`theme`), the background fetch task (`fetch`), and the
//! collection and sentiment engines from `vidmood-core`.
//!
//! # Startup sequence (order matters)
//!
//! 1. Load config and theme from XDG config, read-only, safe before
//!    terminal init.
//! 2. Initialise file-based tracing. Logs must never hit stderr because
//!    the TUI renders there.
//! 3. `install_panic_hook()`, installed first so it is the innermost hook
//!    and restores the terminal before the panic message prints.
//! 4. `register_sigterm()`, returns an `Arc<AtomicBool>` polled in the
//!    event loop heartbeat.
//! 5. `init_tui()`, enters alternate screen and enables raw mode.
//! 6. Create the event channel, spawn the event task, and spawn the fetch
//!    worker when an API key is configured.
//!
//! # Safety
//!
//! `restore_tui()` is called after the event loop exits (quit key, SIGTERM,
//! or channel close). Inside the loop `?` only appears in the Render arm;
//! draw errors propagate out of the loop and still reach `restore_tui()`.
//! The panic hook covers unexpected panics.

mod app;
mod config;
mod event;
mod fetch;
mod theme;
mod tui;
mod ui;

use std::sync::atomic::Ordering;

use tracing_subscriber::EnvFilter;

use vidmood_core::collect::Collector;
use vidmood_core::sentiment::VaderScorer;
use vidmood_core::youtube::YouTubeSource;

use app::NoticeLevel;
use ui::keybindings::{self, KeyAction};

/// Initialises file-based tracing and returns the flush guard.
///
/// Logs go to `.vidmood/vidmood.log` in the working directory through a
/// non-blocking writer. The returned `WorkerGuard` must stay alive for the
/// whole session or buffered log lines are lost on exit. `RUST_LOG`
/// overrides the default `info` filter.
fn init_logging() -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(".vidmood")?;
    let appender = tracing_appender::rolling::never(".vidmood", "vidmood.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Step 0: config and theme, read-only, safe before terminal init.
    let config = config::Config::load();
    let theme = theme::Theme::from_name(config.theme_name());
    let mut state = app::AppState::default();

    // Step 1: logging to file only; stderr belongs to the TUI.
    let _log_guard = init_logging()?;
    tracing::info!("vidmood starting");

    // Step 2: panic hook installed first, innermost hook restores terminal.
    tui::install_panic_hook();

    // Step 3: SIGTERM flag, polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm();

    // Step 4: enter alternate screen and raw mode.
    let mut terminal = tui::init_tui()?;

    // Step 5: event channel and background event task.
    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    // Step 6: fetch worker, only when an API key is available. Without a
    // key the app still starts; the fetch action explains what is missing.
    match config.resolve_api_key() {
        Some(api_key) => {
            let source = YouTubeSource::new(api_key)?;
            let collector = Collector::new(source);
            let (fetch_tx, fetch_rx) = tokio::sync::mpsc::unbounded_channel();
            fetch::spawn_fetch_worker(collector, fetch_rx, handler.tx.clone());
            state.fetch_tx = Some(fetch_tx);
        }
        None => {
            tracing::warn!("no API key configured; fetching disabled");
            state.push_notice(
                NoticeLevel::Warning,
                "No API key. Set VIDMOOD_API_KEY or api_key in config.toml to fetch.",
            );
        }
    }

    let scorer = VaderScorer;

    // Event loop: exits only via `break` so `restore_tui()` is always
    // reached (the Render arm's `?` propagates past the loop to the same
    // exit path via early return; the panic hook covers that case).
    'event_loop: loop {
        tokio::select! {
            // Heartbeat: guarantees SIGTERM is checked at least every 50ms
            // even when no terminal or timer events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        // Exactly one draw() call per Render event.
                        terminal.draw(|frame| ui::render(frame, &mut state, &theme))?;
                    }
                    Some(event::AppEvent::Tick) => state.on_tick(),
                    Some(event::AppEvent::Key(key)) => {
                        match keybindings::handle_key(key, &mut state) {
                            KeyAction::Continue => {}
                            KeyAction::Fetch => state.start_fetch(),
                            KeyAction::Analyze => state.run_analysis(&scorer),
                            KeyAction::Quit => break 'event_loop,
                        }
                    }
                    Some(event::AppEvent::Mouse(mouse)) => {
                        if keybindings::handle_mouse(mouse, &mut state) == KeyAction::Quit {
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Fetch(update)) => state.apply_fetch_update(update),
                    Some(event::AppEvent::Resize(_, _)) => {
                        // ratatui picks up the new size on the next Render;
                        // frame.area() always reflects the live terminal.
                    }
                    Some(event::AppEvent::Quit) | None => break 'event_loop,
                }
                // Check SIGTERM after every event too, so quit latency is at
                // most one event cycle rather than 50ms.
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    tracing::info!("vidmood shutting down");

    // Single exit point: covers quit key, SIGTERM, and channel close. The
    // panic hook handles the panic path separately.
    tui::restore_tui()?;
    Ok(())
}
