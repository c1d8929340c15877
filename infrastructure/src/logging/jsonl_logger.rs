//! JSONL file writer for dispatch events.
//!
//! Each [`DispatchEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use hwhelper_application::ports::dispatch_logger::{DispatchEvent, DispatchLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL dispatch logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`, so concurrent requests never
/// interleave within a line. Appends to an existing file. Flushes on `Drop`.
pub struct JsonlDispatchLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDispatchLogger {
    /// Create a logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create dispatch log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open dispatch log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DispatchLogger for JsonlDispatchLogger {
    fn log(&self, event: DispatchEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert("type".to_string(), event.event_type.into());
                map.insert("timestamp".to_string(), timestamp.into());
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlDispatchLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwhelper_domain::{
        Attempt, AttemptOutcome, Endpoint, ProtocolVariant, Topic, aggregate,
    };
    use std::sync::Arc;
    use std::time::Duration;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn failed_attempt(url: &str) -> Attempt {
        let endpoint = Endpoint::new(url, "hidden-token", ProtocolVariant::Kickoff).unwrap();
        Attempt::new(
            endpoint,
            AttemptOutcome::bad_status(503, "busy"),
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("dispatch.jsonl");
        let logger = JsonlDispatchLogger::new(&path).unwrap();

        let topic = Topic::validate(Some("Chemistry"), Some("What is a mole?")).unwrap();
        let attempt = failed_attempt("https://a.test/kickoff");
        logger.log(DispatchEvent::request_received(&topic));
        logger.log(DispatchEvent::attempt_finished(0, &attempt));
        logger.log(DispatchEvent::dispatch_exhausted(&aggregate(vec![attempt])));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }

        assert_eq!(records[0]["type"], "request_received");
        assert_eq!(records[0]["subject"], "Chemistry");
        assert_eq!(records[1]["type"], "attempt_finished");
        assert_eq!(records[1]["detail"], "Status 503: busy");
        assert_eq!(records[2]["type"], "dispatch_exhausted");
        assert_eq!(records[2]["last_error"], "Status 503: busy");

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("hidden-token"));
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.jsonl");

        for _ in 0..2 {
            let logger = JsonlDispatchLogger::new(&path).unwrap();
            logger.log(DispatchEvent::new("marker", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.jsonl");
        let logger = JsonlDispatchLogger::new(&path).unwrap();

        logger.log(DispatchEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_concurrent_writers_keep_lines_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispatch.jsonl");
        let logger = Arc::new(JsonlDispatchLogger::new(&path).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        logger.log(DispatchEvent::new(
                            "tick",
                            serde_json::json!({ "thread": i, "seq": j }),
                        ));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        drop(logger);

        assert_eq!(read_lines(&path).len(), 200);
    }

    #[test]
    fn test_unwritable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        assert!(JsonlDispatchLogger::new(dir.path()).is_none());
    }
}
