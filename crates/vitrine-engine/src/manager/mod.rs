//! View lifecycle management.
//!
//! `ViewManager` owns the engine driver and every live [`ViewHandle`],
//! allocates view ids, and fans the per-turn pump out to the views. It is
//! the only place views are created or dropped, which is what makes "no
//! handle outlives its view" hold.

use std::collections::HashMap;

use tracing::{debug, info};

use vitrine_common::{EngineError, ViewId};

use crate::driver::EngineDriver;
use crate::events::{EngineEvent, EventSink};
use crate::frame::SharedFrame;
use crate::settings::{EngineSettings, ViewConfig};

mod handle;

pub use handle::ViewHandle;

/// Owns the engine and all live views.
pub struct ViewManager {
    driver: Box<dyn EngineDriver>,
    views: HashMap<ViewId, ViewHandle>,
    events: EventSink,
    next_id: u32,
    shut_down: bool,
}

impl ViewManager {
    /// Initialize the engine and wrap it. `settings` is handed to the
    /// driver once; there is no global engine state anywhere else.
    pub fn new(
        mut driver: Box<dyn EngineDriver>,
        settings: &EngineSettings,
    ) -> Result<Self, EngineError> {
        driver.initialize(settings)?;
        info!("engine initialized");
        Ok(Self {
            driver,
            views: HashMap::new(),
            events: EventSink::new(),
            next_id: 1,
            shut_down: false,
        })
    }

    /// Create an off-screen view and register it.
    pub fn create_view(&mut self, config: ViewConfig) -> Result<ViewId, EngineError> {
        if self.shut_down {
            return Err(EngineError::ShutDown);
        }
        if config.width == 0 || config.height == 0 {
            return Err(EngineError::CreateView(
                "view dimensions must be non-zero".into(),
            ));
        }
        let id = ViewId(self.next_id);
        self.next_id += 1;

        let frame = SharedFrame::new(config.width, config.height);
        let driver = self
            .driver
            .create_view(id, &config, frame.clone(), self.events.clone())?;
        debug!(%id, url = %config.url, width = config.width, height = config.height, "view created");

        self.views
            .insert(id, ViewHandle::new(id, driver, frame, config.url));
        Ok(id)
    }

    pub fn view(&self, id: ViewId) -> Option<&ViewHandle> {
        self.views.get(&id)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut ViewHandle> {
        self.views.get_mut(&id)
    }

    /// Close a view and drop its handle. Returns whether it existed.
    pub fn close_view(&mut self, id: ViewId) -> bool {
        match self.views.remove(&id) {
            Some(mut handle) => {
                handle.close();
                debug!(%id, "view destroyed");
                self.events.push(EngineEvent::Closed { id });
                true
            }
            None => false,
        }
    }

    /// One turn of engine work: the global message loop, then every view.
    /// Paint callbacks land in the shared frames during this call.
    pub fn pump(&mut self) {
        self.driver.pump();
        for handle in self.views.values_mut() {
            handle.pump();
        }
    }

    /// Drain all pending engine events.
    pub fn drain_events(&self) -> Vec<EngineEvent> {
        self.events.drain()
    }

    pub fn active_views(&self) -> Vec<ViewId> {
        self.views.keys().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.views.len()
    }

    /// Close every view. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for id in self.active_views() {
            self.close_view(id);
        }
    }

    /// Close all views and bring the engine down. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.destroy_all();
        self.driver.shutdown();
        self.shut_down = true;
        info!("engine shut down");
    }
}

impl Drop for ViewManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
