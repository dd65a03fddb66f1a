//! Events surfaced by the engine.

use std::sync::{Arc, Mutex};

use vitrine_common::ViewId;

/// Events emitted by engine views, drained once per main-loop turn.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Navigation has started.
    LoadStarted { id: ViewId, url: String },
    /// The main frame finished loading. Carries the HTTP status code.
    LoadFinished { id: ViewId, http_status: i32 },
    /// The load failed. Carries the engine's error text.
    LoadFailed { id: ViewId, error: String },
    /// Document title changed.
    TitleChanged { id: ViewId, title: String },
    /// The view was closed and its handle dropped.
    Closed { id: ViewId },
}

/// Queue the engine pushes into, possibly from its own threads.
///
/// Clones share the queue; the main loop drains it between pumps.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    inner: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: EngineEvent) {
        self.inner.lock().unwrap().push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&self) -> Vec<EngineEvent> {
        let mut events = self.inner.lock().unwrap();
        std::mem::take(&mut *events)
    }
}
