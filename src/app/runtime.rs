use crate::dataset::{self, DatasetSource};
use crate::input::{InputAction, InputService};
use crate::render::LoadResponse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

/// Spawn a blocking thread that collects terminal input and forwards actions onto a channel.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_action(poll_interval) {
                Ok(Some(action)) => {
                    if tx.send(action).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    // No input this tick; continue polling.
                    continue;
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

/// Resolve the dataset on the runtime and deliver the single outcome over a oneshot.
pub fn spawn_load_task(source: Arc<dyn DatasetSource>) -> oneshot::Receiver<LoadResponse> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let description = source.describe();
        let response = match dataset::load(source.as_ref()).await {
            Ok(dataset) => LoadResponse::Loaded {
                source: description,
                dataset: Arc::new(dataset),
            },
            Err(error) => LoadResponse::Failed {
                source: description,
                error,
            },
        };
        // The receiver is gone if the viewer quit before the load finished.
        let _ = tx.send(response);
    });
    rx
}
