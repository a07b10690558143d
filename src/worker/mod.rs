//! Background worker thread for storage operations.
//!
//! This module implements the worker thread that handles all storage I/O so the
//! plugin UI thread never blocks on the filesystem. It uses Zellij's worker API
//! for cross-thread communication and includes distributed tracing support.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ZshelfWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
