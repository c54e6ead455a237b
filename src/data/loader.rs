//! Background dataset loading.
//!
//! File reads run on a worker thread and report back over an mpsc channel.
//! Only the newest request is kept: issuing a new one drops the receiver of
//! the previous request, so a late result from a superseded read is simply
//! discarded.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::data::dataset::Dataset;
use crate::error::{Result, ScatterError};

/// Read and parse a dataset file synchronously.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ScatterError::io(path.to_path_buf(), e))?;
    Dataset::from_json_str(&text)
}

/// Result of a finished load.
#[derive(Debug)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub generation: u64,
    pub result: Result<Dataset>,
}

struct PendingLoad {
    path: PathBuf,
    generation: u64,
    rx: Receiver<Result<Dataset>>,
}

#[derive(Default)]
pub struct DatasetLoader {
    generation: u64,
    pending: Option<PendingLoad>,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start reading `path`, superseding any load still in flight.
    /// Returns the generation number of the new request.
    pub fn request(&mut self, path: PathBuf) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        if let Some(old) = self.pending.take() {
            tracing::debug!(path = %old.path.display(), generation = old.generation, "load superseded");
        }
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        thread::spawn(move || {
            // The receiver is gone when the request was superseded.
            let _ = tx.send(read_dataset(&worker_path));
        });
        tracing::info!(path = %path.display(), generation, "loading dataset");
        self.pending = Some(PendingLoad {
            path,
            generation,
            rx,
        });
        generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Path of the load in flight, if any.
    pub fn pending_path(&self) -> Option<&Path> {
        self.pending.as_ref().map(|p| p.path.as_path())
    }

    /// Non-blocking check for a finished load.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let pending = self.pending.as_ref()?;
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ScatterError::malformed(
                "loader thread exited without a result",
            )),
        };
        let pending = self.pending.take()?;
        Some(LoadOutcome {
            path: pending.path,
            generation: pending.generation,
            result,
        })
    }
}
