//! Central application state for vidmood.
//!
//! This module owns all mutable UI state: the current mode, which panel
//! has focus, the URL input buffer, the session comment store (the most
//! recent fetch report), analysis results, notices, and per-panel scroll
//! state. No ratatui rendering logic lives here; `app.rs` is pure state
//! read by the render module and mutated by the keybinding dispatcher and
//! the fetch-update handler.
//!
//! Store contract: the fetch report is overwritten wholesale by each
//! completed fetch and is read-only during analyze. Analysis results are
//! cleared whenever a new report arrives, since they describe the previous
//! store.

use ratatui::layout::Rect;
use ratatui::widgets::{ListState, TableState};
use tokio::sync::mpsc::UnboundedSender;

use vidmood_core::collect::CollectProgress;
use vidmood_core::extract::extract_video_ids;
use vidmood_core::sentiment::{classify, summarize, PolarityScorer};
use vidmood_core::types::{FetchReport, SentimentRecord, SentimentSummary};

use crate::fetch::{FetchRequest, FetchUpdate};

/// Spinner frames for the fetch-in-flight indicator, advanced on Tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Editor mode controlling which keybinding set is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal vim-style navigation mode (default).
    #[default]
    Normal,
    /// Text insertion mode for URL editing.
    Insert,
    /// Full-screen help overlay is shown above all panels.
    HelpOverlay,
    /// Quit-confirmation dialog shown while a fetch is in flight.
    ConfirmQuit,
}

/// Which panel currently has keyboard focus.
///
/// Navigation cycles Input -> Videos -> Results -> Notices via `next()`
/// and in reverse via `prev()`. The summary panel only mirrors the
/// selected video and is never focused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Top panel holding the newline-separated URL list.
    #[default]
    Input,
    /// Left panel listing each input URL with its fetch status.
    Videos,
    /// Centre panel showing comments or the sentiment table.
    Results,
    /// Bottom panel with the notice log.
    Notices,
}

impl PanelFocus {
    /// Returns the panel that precedes `self` in the cycle (wraps around).
    pub fn prev(self) -> Self {
        match self {
            PanelFocus::Input => PanelFocus::Notices,
            PanelFocus::Videos => PanelFocus::Input,
            PanelFocus::Results => PanelFocus::Videos,
            PanelFocus::Notices => PanelFocus::Results,
        }
    }

    /// Returns the panel that follows `self` in the cycle (wraps around).
    pub fn next(self) -> Self {
        match self {
            PanelFocus::Input => PanelFocus::Videos,
            PanelFocus::Videos => PanelFocus::Results,
            PanelFocus::Results => PanelFocus::Notices,
            PanelFocus::Notices => PanelFocus::Input,
        }
    }
}

/// Severity of one notice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// One line in the notice log.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Severity, controls the color and prefix glyph.
    pub level: NoticeLevel,
    /// Display text.
    pub text: String,
}

/// Classified comments plus aggregate figures for one video URL.
#[derive(Debug)]
pub struct VideoAnalysis {
    /// The input URL these results belong to.
    pub url: String,
    /// One record per comment, in collection order.
    pub records: Vec<SentimentRecord>,
    /// Per-label counts, mean score, and overall label.
    pub summary: SentimentSummary,
}

/// Multi-line text editor state for the URL input panel.
///
/// The column is a character index, not a byte index, so cursor movement
/// and editing stay safe on multi-byte input.
#[derive(Debug)]
pub struct InputState {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self { lines: vec![String::new()], row: 0, col: 0 }
    }
}

impl InputState {
    /// The buffer as display lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, column-in-chars).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The full buffer joined with newlines, as fed to extraction.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map(|(i, _)| i).unwrap_or(line.len())
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    /// Splits the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = Self::byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&removed);
        }
    }

    /// Moves the cursor one position left, wrapping to the previous line.
    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    /// Moves the cursor one position right, wrapping to the next line.
    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Moves the cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Moves the cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }
}

/// All mutable UI state passed through every render cycle.
pub struct AppState {
    /// Current editor mode governing which keybindings are active.
    pub mode: Mode,
    /// Which panel currently receives keyboard scroll/navigation events.
    pub focus: PanelFocus,

    /// URL input buffer (top panel).
    pub input: InputState,

    /// Stateful list widget backing the videos panel.
    pub videos_state: ListState,
    /// Stateful table widget backing the sentiment table.
    pub results_table_state: TableState,
    /// Scroll offset for the raw-comment preview (before analysis).
    pub preview_scroll: u16,
    /// Rows scrolled up from the bottom of the notice log; 0 follows the
    /// newest notice.
    pub notices_offset_up: u16,
    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,

    /// Inner heights cached after each render, for page-scroll distances.
    pub videos_viewport_height: u16,
    /// Inner height of the results panel after borders.
    pub results_viewport_height: u16,
    /// Inner height of the notices panel after borders.
    pub notices_viewport_height: u16,
    /// Outer rects of [input, videos, results, notices], cached each render
    /// for mouse click-to-focus hit testing.
    pub panel_rects: [Rect; 4],

    /// Notice log, newest last.
    pub notices: Vec<Notice>,

    /// The session comment store: the most recent fetch report. Overwritten
    /// wholesale on fetch completion; read-only during analyze.
    pub report: Option<FetchReport>,
    /// Analysis results, one entry per analyzed video. Cleared when a new
    /// report arrives.
    pub analyses: Vec<VideoAnalysis>,

    /// True while the background task is collecting (shows the spinner).
    pub fetching: bool,
    /// Current spinner frame index, advanced on Tick while fetching.
    pub spinner_frame: usize,
    /// Sender into the background fetch task; `None` when no API key is
    /// configured.
    pub fetch_tx: Option<UnboundedSender<FetchRequest>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            focus: PanelFocus::default(),
            input: InputState::default(),
            videos_state: ListState::default(),
            results_table_state: TableState::default(),
            preview_scroll: 0,
            notices_offset_up: 0,
            help_scroll: 0,
            videos_viewport_height: 0,
            results_viewport_height: 0,
            notices_viewport_height: 0,
            panel_rects: [Rect::default(); 4],
            notices: Vec::new(),
            report: None,
            analyses: Vec::new(),
            fetching: false,
            spinner_frame: 0,
            fetch_tx: None,
        }
    }
}

impl AppState {
    /// Appends a notice to the log and snaps the log view to the newest
    /// entry.
    pub fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice { level, text: text.into() });
        self.notices_offset_up = 0;
    }

    /// Advances the fetch spinner. Called on every logic tick.
    pub fn on_tick(&mut self) {
        if self.fetching {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// The report entry currently selected in the videos panel.
    pub fn selected_report_entry(&self) -> Option<&vidmood_core::types::UrlReport> {
        let report = self.report.as_ref()?;
        let index = self.videos_state.selected()?;
        report.entries.get(index)
    }

    /// The analysis for the currently selected video, if analyze has run.
    pub fn selected_analysis(&self) -> Option<&VideoAnalysis> {
        let url = &self.selected_report_entry()?.url;
        self.analyses.iter().find(|a| &a.url == url)
    }

    fn selected_record_count(&self) -> usize {
        self.selected_analysis().map(|a| a.records.len()).unwrap_or(0)
    }

    /// Resets results-panel scroll state; called when the video selection
    /// changes so the table starts at the top of the new video.
    fn reset_results_view(&mut self) {
        self.preview_scroll = 0;
        self.results_table_state.select(None);
    }

    fn table_move(&mut self, delta: i64) {
        let len = self.selected_record_count();
        if len == 0 {
            return;
        }
        let current = self.results_table_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.results_table_state.select(Some(next));
    }

    /// Scrolls the focused panel down by `lines` rows.
    pub fn scroll_down(&mut self, lines: u16) {
        match self.focus {
            PanelFocus::Input => {}
            PanelFocus::Videos => {
                self.videos_state.scroll_down_by(lines);
                self.reset_results_view();
            }
            PanelFocus::Results => {
                if self.selected_record_count() > 0 {
                    self.table_move(lines as i64);
                } else {
                    self.preview_scroll = self.preview_scroll.saturating_add(lines);
                }
            }
            PanelFocus::Notices => {
                self.notices_offset_up = self.notices_offset_up.saturating_sub(lines);
            }
        }
    }

    /// Scrolls the focused panel up by `lines` rows.
    pub fn scroll_up(&mut self, lines: u16) {
        match self.focus {
            PanelFocus::Input => {}
            PanelFocus::Videos => {
                self.videos_state.scroll_up_by(lines);
                self.reset_results_view();
            }
            PanelFocus::Results => {
                if self.selected_record_count() > 0 {
                    self.table_move(-(lines as i64));
                } else {
                    self.preview_scroll = self.preview_scroll.saturating_sub(lines);
                }
            }
            PanelFocus::Notices => {
                let limit = (self.notices.len() as u16)
                    .saturating_sub(self.notices_viewport_height.max(1));
                self.notices_offset_up = self.notices_offset_up.saturating_add(lines).min(limit);
            }
        }
    }

    /// Scrolls the focused panel to the very top.
    pub fn scroll_top(&mut self) {
        match self.focus {
            PanelFocus::Input => {}
            PanelFocus::Videos => {
                self.videos_state.select_first();
                self.reset_results_view();
            }
            PanelFocus::Results => {
                if self.selected_record_count() > 0 {
                    self.results_table_state.select(Some(0));
                } else {
                    self.preview_scroll = 0;
                }
            }
            PanelFocus::Notices => {
                self.notices_offset_up = (self.notices.len() as u16)
                    .saturating_sub(self.notices_viewport_height.max(1));
            }
        }
    }

    /// Scrolls the focused panel to the very bottom.
    pub fn scroll_bottom(&mut self) {
        match self.focus {
            PanelFocus::Input => {}
            PanelFocus::Videos => {
                self.videos_state.select_last();
                self.reset_results_view();
            }
            PanelFocus::Results => {
                let len = self.selected_record_count();
                if len > 0 {
                    self.results_table_state.select(Some(len - 1));
                } else {
                    self.preview_scroll = u16::MAX;
                }
            }
            PanelFocus::Notices => self.notices_offset_up = 0,
        }
    }

    /// Scrolls the focused panel down by half its visible height.
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.focused_viewport_height() / 2).max(1));
    }

    /// Scrolls the focused panel up by half its visible height.
    pub fn half_page_up(&mut self) {
        self.scroll_up((self.focused_viewport_height() / 2).max(1));
    }

    /// Scrolls the focused panel down by its full visible height.
    pub fn full_page_down(&mut self) {
        self.scroll_down(self.focused_viewport_height().max(1));
    }

    /// Scrolls the focused panel up by its full visible height.
    pub fn full_page_up(&mut self) {
        self.scroll_up(self.focused_viewport_height().max(1));
    }

    fn focused_viewport_height(&self) -> u16 {
        match self.focus {
            PanelFocus::Input => 0,
            PanelFocus::Videos => self.videos_viewport_height,
            PanelFocus::Results => self.results_viewport_height,
            PanelFocus::Notices => self.notices_viewport_height,
        }
    }

    /// Handles the fetch action: extracts identifiers from the input
    /// buffer and hands them to the background fetch task.
    ///
    /// Refused with a notice when a fetch is already in flight, when the
    /// input is empty, or when no API key is configured. Invalid URLs are
    /// not filtered here; the collector reports each one individually.
    pub fn start_fetch(&mut self) {
        if self.fetching {
            self.push_notice(NoticeLevel::Warning, "A fetch is already in progress.");
            return;
        }
        let entries = extract_video_ids(&self.input.text());
        if entries.is_empty() {
            self.push_notice(NoticeLevel::Error, "Please provide at least one YouTube URL.");
            return;
        }
        let Some(tx) = &self.fetch_tx else {
            self.push_notice(
                NoticeLevel::Error,
                "No API key configured. Set VIDMOOD_API_KEY or api_key in config.toml.",
            );
            return;
        };
        let count = entries.len();
        if tx.send(FetchRequest::Collect(entries)).is_err() {
            self.push_notice(NoticeLevel::Error, "Fetch worker is not running.");
            return;
        }
        self.fetching = true;
        self.push_notice(
            NoticeLevel::Info,
            format!("Fetching comments for {count} URL(s). This may take some time."),
        );
    }

    /// Handles the analyze action: classifies every cached comment list
    /// and stores per-video results plus aggregates.
    ///
    /// Reads the report without mutating it. Videos with zero comments are
    /// skipped with a warning.
    pub fn run_analysis(&mut self, scorer: &dyn PolarityScorer) {
        let Some(report) = &self.report else {
            self.push_notice(
                NoticeLevel::Warning,
                "No comments available for analysis. Fetch comments first.",
            );
            return;
        };

        let mut analyses = Vec::new();
        let mut skipped = Vec::new();
        for (url, comments) in report.comment_lists() {
            if comments.is_empty() {
                skipped.push(url.to_owned());
                continue;
            }
            let records = classify(scorer, comments);
            let summary = summarize(&records);
            analyses.push(VideoAnalysis { url: url.to_owned(), records, summary });
        }

        let analyzed = analyses.len();
        let total_comments: usize = analyses.iter().map(|a| a.records.len()).sum();
        self.analyses = analyses;
        self.reset_results_view();

        for url in skipped {
            self.push_notice(
                NoticeLevel::Warning,
                format!("No comments available for analysis for video: {url}"),
            );
        }
        if analyzed > 0 {
            self.push_notice(
                NoticeLevel::Success,
                format!("Analyzed {total_comments} comments across {analyzed} video(s)."),
            );
        }
    }

    /// Applies a progress or completion update from the fetch task.
    pub fn apply_fetch_update(&mut self, update: FetchUpdate) {
        match update {
            FetchUpdate::Progress(progress) => self.apply_progress(progress),
            FetchUpdate::Done(report) => {
                // Wholesale overwrite of the session store; stale analyses
                // describe the previous store and are dropped with it.
                self.report = Some(*report);
                self.analyses.clear();
                self.fetching = false;
                self.reset_results_view();
                if self.videos_state.selected().is_none() {
                    self.videos_state.select_first();
                }
                self.push_notice(NoticeLevel::Info, "Fetch complete. Press 'a' to analyze.");
            }
        }
    }

    fn apply_progress(&mut self, progress: CollectProgress) {
        match progress {
            CollectProgress::Started { url } => {
                self.push_notice(NoticeLevel::Info, format!("Fetching comments for video: {url}"));
            }
            CollectProgress::Invalid { url } => {
                self.push_notice(NoticeLevel::Warning, format!("Invalid video URL: {url}"));
            }
            CollectProgress::Finished { url, count: 0 } => {
                self.push_notice(NoticeLevel::Warning, format!("No comments found for video: {url}"));
            }
            CollectProgress::Finished { url, count } => {
                self.push_notice(
                    NoticeLevel::Success,
                    format!("Fetched {count} comments for video: {url}"),
                );
            }
            CollectProgress::Failed { url, reason, count } => {
                self.push_notice(
                    NoticeLevel::Error,
                    format!("Failed to fetch comments for {url}: {reason} ({count} kept)"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vidmood_core::types::{FetchOutcome, UrlReport, UrlResult};

    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn compound(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn report_with(urls: &[(&str, &[&str])]) -> FetchReport {
        FetchReport {
            entries: urls
                .iter()
                .map(|(url, comments)| UrlReport {
                    url: (*url).to_owned(),
                    result: UrlResult::Fetched(FetchOutcome {
                        comments: comments.iter().map(|c| (*c).to_owned()).collect(),
                        error: None,
                    }),
                })
                .collect(),
        }
    }

    #[test]
    fn input_editing_round_trip() {
        let mut input = InputState::default();
        for c in "https://a".chars() {
            input.insert_char(c);
        }
        input.insert_newline();
        for c in "xyz".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "https://a\nxyz");

        input.backspace();
        assert_eq!(input.text(), "https://a\nxy");

        // Backspace at column 0 joins the lines.
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "https://axy");
    }

    #[test]
    fn input_cursor_clamps_across_lines() {
        let mut input = InputState::default();
        for c in "long line".chars() {
            input.insert_char(c);
        }
        input.insert_newline();
        input.insert_char('x');
        input.move_up();
        // Column clamped to the shorter of (old col, line length).
        let (row, col) = input.cursor();
        assert_eq!(row, 0);
        assert!(col <= "long line".chars().count());
        input.move_down();
        assert_eq!(input.cursor().0, 1);
    }

    #[test]
    fn start_fetch_without_worker_reports_missing_key() {
        let mut state = AppState::default();
        for c in "https://youtu.be/abc123".chars() {
            state.input.insert_char(c);
        }
        state.start_fetch();
        assert!(!state.fetching);
        assert!(matches!(state.notices.last().unwrap().level, NoticeLevel::Error));
    }

    #[test]
    fn start_fetch_with_empty_input_is_refused() {
        let mut state = AppState::default();
        state.start_fetch();
        assert!(!state.fetching);
        assert_eq!(state.notices.len(), 1);
    }

    #[test]
    fn start_fetch_sends_all_entries_including_invalid() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut state = AppState { fetch_tx: Some(tx), ..AppState::default() };
        for c in "https://youtu.be/abc123\nnotaurl".chars() {
            if c == '\n' {
                state.input.insert_newline();
            } else {
                state.input.insert_char(c);
            }
        }
        state.start_fetch();
        assert!(state.fetching);

        let FetchRequest::Collect(entries) = rx.try_recv().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].video_id.as_deref(), Some("abc123"));
        assert_eq!(entries[1].video_id, None);
    }

    #[test]
    fn second_fetch_while_running_is_refused() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut state = AppState { fetch_tx: Some(tx), ..AppState::default() };
        for c in "https://youtu.be/abc123".chars() {
            state.input.insert_char(c);
        }
        state.start_fetch();
        state.start_fetch();
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err(), "only one request may be in flight");
    }

    #[test]
    fn report_overwrites_store_and_clears_analyses() {
        let mut state = AppState::default();
        state.apply_fetch_update(FetchUpdate::Done(Box::new(report_with(&[(
            "https://youtu.be/a",
            &["great video"],
        )]))));
        state.run_analysis(&FixedScorer(0.6));
        assert_eq!(state.analyses.len(), 1);

        // A new report replaces the store wholesale and invalidates the
        // previous analysis.
        state.apply_fetch_update(FetchUpdate::Done(Box::new(report_with(&[(
            "https://youtu.be/b",
            &["terrible"],
        )]))));
        assert!(state.analyses.is_empty());
        let report = state.report.as_ref().unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].url, "https://youtu.be/b");
        assert!(!state.fetching);
    }

    #[test]
    fn analysis_reads_store_without_mutating_it() {
        let mut state = AppState::default();
        state.apply_fetch_update(FetchUpdate::Done(Box::new(report_with(&[
            ("https://youtu.be/a", &["one", "two"]),
            ("https://youtu.be/empty", &[]),
        ]))));

        state.run_analysis(&FixedScorer(-0.5));

        // Store untouched.
        let report = state.report.as_ref().unwrap();
        assert_eq!(report.entries.len(), 2);

        // Empty video skipped with a warning; the other fully classified.
        assert_eq!(state.analyses.len(), 1);
        let analysis = &state.analyses[0];
        assert_eq!(analysis.records.len(), 2);
        assert_eq!(analysis.summary.negative, 2);
        assert!(state
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Warning && n.text.contains("empty")));
    }

    #[test]
    fn analyze_without_fetch_warns() {
        let mut state = AppState::default();
        state.run_analysis(&FixedScorer(0.0));
        assert!(matches!(state.notices.last().unwrap().level, NoticeLevel::Warning));
        assert!(state.analyses.is_empty());
    }

    #[test]
    fn progress_updates_become_notices() {
        let mut state = AppState::default();
        state.apply_fetch_update(FetchUpdate::Progress(CollectProgress::Invalid {
            url: "notaurl".to_owned(),
        }));
        state.apply_fetch_update(FetchUpdate::Progress(CollectProgress::Finished {
            url: "u".to_owned(),
            count: 0,
        }));
        state.apply_fetch_update(FetchUpdate::Progress(CollectProgress::Failed {
            url: "u2".to_owned(),
            reason: "quota".to_owned(),
            count: 3,
        }));
        let levels: Vec<NoticeLevel> = state.notices.iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            vec![NoticeLevel::Warning, NoticeLevel::Warning, NoticeLevel::Error]
        );
    }
}
