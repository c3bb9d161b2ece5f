//! One-shot background CSV loading.
//!
//! The CSV is parsed on a worker thread so the first frames stay responsive;
//! the owning visualisation polls [`AsyncLoad::poll`] once per frame until the
//! result arrives.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use anyhow::{anyhow, Result};

use super::loader::load_csv;
use super::model::Record;

/// Outcome of polling an in-flight load.
pub enum LoadPoll<T> {
    /// Worker still running.
    Pending,
    /// Worker finished (successfully or not). Only reported once.
    Done(Result<Vec<T>>),
}

/// Handle to a CSV load running on a background thread.
pub struct AsyncLoad<T> {
    receiver: Receiver<Result<Vec<T>>>,
    path: PathBuf,
}

impl<T: Record> AsyncLoad<T> {
    /// Start loading `path`. `notify` runs on the worker once the result has
    /// been sent, typically to request a repaint.
    pub fn spawn(path: PathBuf, notify: impl FnOnce() + Send + 'static) -> Self {
        let (sender, receiver) = channel();
        let worker_path = path.clone();

        thread::spawn(move || {
            let result = load_csv::<T>(&worker_path);
            let _ = sender.send(result);
            notify();
        });

        Self { receiver, path }
    }
}

impl<T> AsyncLoad<T> {
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Non-blocking check for the worker's result.
    pub fn poll(&self) -> LoadPoll<T> {
        match self.receiver.try_recv() {
            Ok(result) => LoadPoll::Done(result),
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Err(TryRecvError::Disconnected) => LoadPoll::Done(Err(anyhow!(
                "loader thread for {} exited without a result",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TemperatureRecord;
    use std::sync::mpsc;
    use std::time::Duration;

    fn wait<T>(load: &AsyncLoad<T>) -> Result<Vec<T>> {
        for _ in 0..500 {
            if let LoadPoll::Done(result) = load.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("load did not finish");
    }

    #[test]
    fn loads_file_and_notifies() {
        let dir = std::env::temp_dir().join(format!("vis-gallery-async-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("surface-temperature.csv");
        std::fs::write(&path, "year,temperature\n1990,0.42\n1995,0.43\n").unwrap();

        let (tx, rx) = mpsc::channel();
        let load = AsyncLoad::<TemperatureRecord>::spawn(path.clone(), move || {
            let _ = tx.send(());
        });
        let rows = wait(&load).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(load.path(), path.as_path());
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_reports_error() {
        let load = AsyncLoad::<TemperatureRecord>::spawn(PathBuf::from("/nonexistent/t.csv"), || {});
        assert!(wait(&load).is_err());
    }
}
