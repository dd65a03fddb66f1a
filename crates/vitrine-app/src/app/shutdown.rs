//! Graceful shutdown: stop the engine, then release the GPU.

use super::core::VitrineApp;

impl VitrineApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Shut the engine down (closes every view, so no paint callbacks
    ///    arrive afterwards)
    /// 2. Release GPU resources (no frame uploads can be in flight by then)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Close all views and stop the engine
        if let Some(ref mut manager) = self.manager {
            manager.shutdown();
        }
        self.manager = None;

        // 2. Release GPU resources
        self.compositor = None;

        self.hovered_view = None;
        self.focused_view = None;
        self.zoom_levels.clear();
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app::VitrineApp;
    use crate::config::VitrineConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = VitrineApp::new(VitrineConfig::default());

        app.shutdown();

        assert!(app.manager.is_none());
        assert!(app.compositor.is_none());
        assert!(app.focused_view.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = VitrineApp::new(VitrineConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.manager.is_none());
        assert!(app.compositor.is_none());
    }
}
