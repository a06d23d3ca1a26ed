//! Zellij plugin entry point for Stok.
//!
//! Everything testable lives in the library. This binary only wires it to the
//! host: Zellij events become reducer [`Event`]s, the returned [`Action`]s are
//! carried out here, and CSV exports are handed to the worker.
//!
//! ```text
//!   key press ──► map_key ──► handle_event ──► render
//!                                  │
//!                     Action::PostToWorker (ExportCsv)
//!                                  ▼
//!                             StokWorker ── writes the file
//!                                  │
//!              CustomMessage("stok", WorkerResponse) ──► handle_event
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::Event as ZellijEvent;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use stok::worker::{StokWorker, WorkerMessage, WorkerResponse};
use stok::{handle_event, map_key, Action, AppState, Config, Event};

register_plugin!(StokPlugin);
register_worker!(StokWorker, stok_worker, STOK_WORKER);

/// Worker name, also used as the custom message name in both directions.
const WORKER_NAME: &str = "stok";

struct StokPlugin {
    app: AppState,
}

impl Default for StokPlugin {
    fn default() -> Self {
        Self {
            app: stok::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for StokPlugin {
    /// Needs `ChangeApplicationState` to hide the pane and `FullHdAccess` so
    /// the worker can write exports under `/host`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        stok::observability::init_tracing(&config);

        let _load = tracing::info_span!("plugin_load").entered();
        tracing::debug!(?config, "configuration parsed");

        self.app = stok::initialize(&config);
        tracing::info!(
            materials = self.app.inventory.catalog.len(),
            theme = %self.app.theme.name,
            "inventory ready"
        );

        request_permission(&[PermissionType::ChangeApplicationState, PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::CustomMessage, EventType::PermissionRequestResult]);
    }

    fn update(&mut self, event: ZellijEvent) -> bool {
        let Some(event) = self.translate(event) else {
            return false;
        };

        let _update = tracing::debug_span!("plugin_update", event = ?event).entered();
        match handle_event(&mut self.app, &event) {
            Ok((should_render, actions)) => {
                actions.iter().for_each(perform);
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "event rejected by reducer");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        stok::ui::render(&self.app, rows, cols);
    }
}

impl StokPlugin {
    /// Turns a host event into a reducer event, or `None` when there is
    /// nothing for the reducer to do.
    fn translate(&self, event: ZellijEvent) -> Option<Event> {
        match event {
            ZellijEvent::Key(key) => map_key(&self.app, &key),
            ZellijEvent::CustomMessage(name, payload) if name == WORKER_NAME => {
                decode_response(&payload).map(Event::WorkerResponse)
            }
            ZellijEvent::CustomMessage(name, _) => {
                tracing::debug!(%name, "custom message for someone else");
                None
            }
            ZellijEvent::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("permissions granted");
                None
            }
            ZellijEvent::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied; export and hiding the pane will fail");
                None
            }
            _ => None,
        }
    }
}

fn decode_response(payload: &str) -> Option<WorkerResponse> {
    serde_json::from_str(payload)
        .map_err(|e| tracing::warn!(error = %e, "undecodable worker response"))
        .ok()
}

#[tracing::instrument(level = "debug")]
fn perform(action: &Action) {
    match action {
        Action::CloseFocus => hide_self(),
        Action::PostToWorker(message) => send_to_worker(message),
    }
}

fn send_to_worker(message: &WorkerMessage) {
    let payload = match serde_json::to_string(message) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "worker message not serializable");
            return;
        }
    };
    tracing::debug!(bytes = payload.len(), "posting to worker");
    post_message_to(PluginMessage {
        worker_name: Some(WORKER_NAME.to_string()),
        name: WORKER_NAME.to_string(),
        payload,
    });
}
