//! gui/update/util.rs
use iced::futures::channel::oneshot;

use crate::core::error::{Result, TagError};

/// Run a blocking metaflac job on a background thread and await the result.
///
/// Keeps the window redrawing while the child process runs.
/// Callers set `busy` first, so only one job exists at a time.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> Result<T> + Send + 'static) -> Result<T>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<Result<T>>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await.unwrap_or(Err(TagError::WorkerLost))
}
