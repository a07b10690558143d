//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type: imperative commands produced by the
//! event handler after processing an event. Actions are the boundary between
//! pure state transitions and effectful operations — in particular, they are
//! the explicit commit hook through which persistence happens. The handler
//! mutates state, then emits a persist action for the changed value; nothing
//! persists as a hidden side effect of rendering or state observation.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by the event handler, executed by the plugin shim after each state
/// transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Carries the load request at startup and the save requests emitted after
    /// every search-text or favorites change.
    PostToWorker(WorkerMessage),
}
