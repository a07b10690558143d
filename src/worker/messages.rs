//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that handles storage operations. It
//! also implements distributed tracing context propagation across thread
//! boundaries.

use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so spans created
/// in the worker thread stay linked to their parents on the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_state(LoadState {}),
    save_search(SaveSearch { query: String }),
    save_favorites(SaveFavorites { ids: Vec<u32> }),
}

/// Messages sent from the plugin thread to the worker thread.
///
/// Each variant corresponds to one storage operation. All variants carry an
/// optional trace context for distributed tracing support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load both persisted values (search text and favorite ids).
    LoadState {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the current search text.
    SaveSearch {
        /// Search text to store.
        query: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the current favorite-id list.
    SaveFavorites {
        /// Favorite ids in toggle order.
        ids: Vec<u32>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Both persisted values were loaded (with defaults substituted as needed).
    StateLoaded {
        /// Last persisted search text, `""` if absent or corrupt.
        search: String,

        /// Persisted favorite ids, empty if absent or corrupt.
        favorites: Vec<u32>,
    },

    /// The search text was persisted.
    SearchSaved,

    /// The favorite-id list was persisted.
    FavoritesSaved,

    /// A worker operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::SaveFavorites {
            ids: vec![2, 3],
            trace_context: None,
        };

        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn responses_round_trip_through_json() {
        let response = WorkerResponse::StateLoaded {
            search: "miura".to_string(),
            favorites: vec![3],
        };

        let payload = serde_json::to_string(&response).unwrap();
        let decoded: WorkerResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn absent_trace_context_is_omitted_from_payload() {
        let message = WorkerMessage::SaveSearch {
            query: String::new(),
            trace_context: None,
        };

        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
    }
}
