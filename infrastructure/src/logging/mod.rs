//! Logging infrastructure: structured dispatch logging.
//!
//! Provides [`JsonlDispatchLogger`], a JSONL file writer that implements
//! the [`DispatchLogger`](hwhelper_application::DispatchLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDispatchLogger;
