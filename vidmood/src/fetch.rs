//! Background fetch task.
//!
//! Comment collection does network I/O and must not run on the render
//! path, so it lives in a long-lived tokio task. Communication is via
//! channels only: [`FetchRequest`] in, [`AppEvent::Fetch`] out. The task
//! processes one request at a time, which preserves the strictly
//! sequential, throttled collection order inside `Collector::fetch_many`.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use vidmood_core::collect::{CollectProgress, Collector, CommentSource};
use vidmood_core::types::{FetchReport, UrlEntry};

use crate::event::AppEvent;

/// Commands sent from the main loop to the background fetch task.
#[derive(Debug)]
pub enum FetchRequest {
    /// Collect comments for every entry, sequentially, in input order.
    Collect(Vec<UrlEntry>),
}

/// Updates sent from the background fetch task back to the main loop.
///
/// Carried inside `AppEvent::Fetch`. The report is boxed to keep the event
/// enum small on the channel; a full report can hold thousands of comments.
#[derive(Debug)]
pub enum FetchUpdate {
    /// A per-URL progress notice while collection runs.
    Progress(CollectProgress),
    /// The final report for one fetch action.
    Done(Box<FetchReport>),
}

/// Spawns the long-lived fetch worker task.
///
/// The task loops over incoming requests until the request channel closes.
/// Progress and the final report are forwarded over `event_tx`; send errors
/// are ignored because a dropped receiver means the app is shutting down.
pub fn spawn_fetch_worker<S>(
    collector: Collector<S>,
    mut rx: UnboundedReceiver<FetchRequest>,
    event_tx: UnboundedSender<AppEvent>,
) where
    S: CommentSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        while let Some(FetchRequest::Collect(entries)) = rx.recv().await {
            let progress_tx = event_tx.clone();
            let report = collector
                .fetch_many(&entries, |progress| {
                    let _ = progress_tx.send(AppEvent::Fetch(FetchUpdate::Progress(progress)));
                })
                .await;
            let _ = event_tx.send(AppEvent::Fetch(FetchUpdate::Done(Box::new(report))));
        }
    });
}
