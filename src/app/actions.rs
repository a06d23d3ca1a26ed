//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches Zellij directly. It returns a list of
//! [`Action`]s and the plugin shim in `main.rs` executes them in order.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for the CSV export write, which must not block the render loop.
    PostToWorker(WorkerMessage),
}
