//! Worker thread implementation for storage operations.
//!
//! This module implements the Zellij worker interface, keeping all storage I/O
//! off the plugin rendering thread. The worker owns the storage backend and
//! services load/save requests sent by the plugin, posting typed responses
//! back. It participates in distributed tracing by re-attaching the trace
//! context carried on each message.

use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

use crate::domain::error::{Result, ZshelfError};
use crate::infrastructure::paths;
use crate::storage::{JsonStore, Store};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker thread state for handling storage operations.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread. The storage backend is initialized lazily on
/// first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct ZshelfWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn Store>>,
}

impl ZshelfWorker {
    /// Creates a worker with an initialized JSON storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self> {
        let store: Box<dyn Store> = Box::new(JsonStore::new(paths::data_dir())?);
        Ok(Self { store: Some(store) })
    }

    fn store(&mut self) -> Result<&mut Box<dyn Store>> {
        self.store
            .as_mut()
            .ok_or_else(|| ZshelfError::Worker("store not initialized".to_string()))
    }

    /// Handles the `LoadState` message.
    ///
    /// Loads both persisted values; per the storage contract this cannot fail
    /// once the store exists — missing or corrupt values become defaults.
    fn handle_load_state(&mut self) -> WorkerResponse {
        match self.store() {
            Ok(store) => {
                let search = store.load_search();
                let favorites = store.load_favorites();
                tracing::debug!(
                    search_len = search.len(),
                    favorite_count = favorites.len(),
                    "persisted state loaded"
                );
                WorkerResponse::StateLoaded { search, favorites }
            }
            Err(e) => WorkerResponse::Error {
                message: format!("load state: {e}"),
            },
        }
    }

    /// Handles the `SaveSearch` message.
    fn handle_save_search(&mut self, query: &str) -> WorkerResponse {
        match self.store().and_then(|store| store.save_search(query)) {
            Ok(()) => {
                tracing::debug!(query_len = query.len(), "search text saved");
                WorkerResponse::SearchSaved
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save search text");
                WorkerResponse::Error {
                    message: format!("save search: {e}"),
                }
            }
        }
    }

    /// Handles the `SaveFavorites` message.
    fn handle_save_favorites(&mut self, ids: &[u32]) -> WorkerResponse {
        match self.store().and_then(|store| store.save_favorites(ids)) {
            Ok(()) => {
                tracing::debug!(favorite_count = ids.len(), "favorites saved");
                WorkerResponse::FavoritesSaved
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save favorites");
                WorkerResponse::Error {
                    message: format!("save favorites: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message so worker spans link to their plugin-thread
    /// parents. Returns a guard that must be held for the operation's duration.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::LoadState { trace_context, .. }
            | WorkerMessage::SaveSearch { trace_context, .. }
            | WorkerMessage::SaveFavorites { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadState { .. } => self.handle_load_state(),
            WorkerMessage::SaveSearch { query, .. } => self.handle_save_search(&query),
            WorkerMessage::SaveFavorites { ids, .. } => self.handle_save_favorites(&ids),
        }
    }
}

/// Tracks whether worker tracing has been initialized.
///
/// Tracing is set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZshelfWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// 1. Initializes tracing on first message
    /// 2. Lazily initializes the storage backend if needed
    /// 3. Deserializes the payload and processes the message
    /// 4. Serializes and posts the response back to the plugin thread
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => self.store = worker.store,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to initialize store");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize store: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_with_tempdir(dir: &std::path::Path) -> ZshelfWorker {
        let store: Box<dyn Store> = Box::new(JsonStore::new(dir.to_path_buf()).unwrap());
        ZshelfWorker { store: Some(store) }
    }

    #[test]
    fn load_state_returns_defaults_on_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = worker_with_tempdir(dir.path());

        let response = worker.handle_message(WorkerMessage::LoadState {
            trace_context: None,
        });
        assert_eq!(
            response,
            WorkerResponse::StateLoaded {
                search: String::new(),
                favorites: vec![],
            }
        );
    }

    #[test]
    fn saved_state_is_visible_to_subsequent_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = worker_with_tempdir(dir.path());

        let response = worker.handle_message(WorkerMessage::SaveFavorites {
            ids: vec![2, 3],
            trace_context: None,
        });
        assert_eq!(response, WorkerResponse::FavoritesSaved);

        let response = worker.handle_message(WorkerMessage::SaveSearch {
            query: "berserk".to_string(),
            trace_context: None,
        });
        assert_eq!(response, WorkerResponse::SearchSaved);

        let response = worker.handle_message(WorkerMessage::LoadState {
            trace_context: None,
        });
        assert_eq!(
            response,
            WorkerResponse::StateLoaded {
                search: "berserk".to_string(),
                favorites: vec![2, 3],
            }
        );
    }

    #[test]
    fn uninitialized_store_yields_error_response() {
        let mut worker = ZshelfWorker::default();

        let response = worker.handle_message(WorkerMessage::LoadState {
            trace_context: None,
        });
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
