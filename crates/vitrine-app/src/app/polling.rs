//! Engine pump scheduling, event application, and frame presentation.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use vitrine_common::ViewId;
use vitrine_engine::{EngineEvent, ViewHandle};

use super::core::VitrineApp;

impl VitrineApp {
    /// Pump the engine at the configured rate and schedule the next wake-up.
    pub(super) fn pump_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_pump) >= self.pump_interval {
            self.last_pump = now;
            self.pump_engine();
            self.request_redraw();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            self.last_pump + self.pump_interval,
        ));
    }

    /// Run one engine turn and apply the events it produced.
    fn pump_engine(&mut self) {
        let events = match self.manager {
            Some(ref mut manager) => {
                manager.pump();
                manager.drain_events()
            }
            None => Vec::new(),
        };

        for event in events {
            self.handle_engine_event(event);
        }
    }

    fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::LoadStarted { id, url } => {
                tracing::debug!(%id, %url, "load started");
            }
            EngineEvent::LoadFinished { id, http_status } => {
                tracing::info!(%id, http_status, "load finished");
            }
            EngineEvent::LoadFailed { id, error } => {
                tracing::warn!(%id, %error, "load failed");
            }
            EngineEvent::TitleChanged { id, title } => {
                self.with_view(id, |h| h.set_title(title));
                if self.focused_view == Some(id) {
                    self.update_window_title();
                }
            }
            EngineEvent::Closed { id } => {
                if let Some(ref mut compositor) = self.compositor {
                    compositor.remove_view(id);
                }
                if self.hovered_view == Some(id) {
                    self.hovered_view = None;
                }
                if self.focused_view == Some(id) {
                    self.focused_view = None;
                    self.update_window_title();
                }
                self.zoom_levels.remove(&id);
            }
        }
    }

    /// Upload fresh view frames and composite them to the window.
    pub(super) fn render_frame(&mut self) {
        let (Some(compositor), Some(manager)) = (self.compositor.as_mut(), self.manager.as_ref())
        else {
            return;
        };

        for id in manager.active_views() {
            if let Some(handle) = manager.view(id) {
                compositor.upload_frame(id, handle.frame());
            }
        }

        if let Err(e) = compositor.render_frame() {
            tracing::error!("Render error: {e}");
        }
    }

    /// Resize every view's frame to its current share of the window.
    pub(super) fn sync_view_sizes(&mut self) {
        let (Some(compositor), Some(manager)) = (self.compositor.as_ref(), self.manager.as_mut())
        else {
            return;
        };

        for id in manager.active_views() {
            let Some(rect) = compositor.pixel_rect(id) else {
                continue;
            };
            if let Some(handle) = manager.view_mut(id) {
                handle.resize(
                    (rect.width.round() as u32).max(1),
                    (rect.height.round() as u32).max(1),
                );
            }
        }
    }

    /// Run a closure against one view's handle, if it still exists.
    pub(super) fn with_view<R>(
        &mut self,
        id: ViewId,
        f: impl FnOnce(&mut ViewHandle) -> R,
    ) -> Option<R> {
        self.manager.as_mut().and_then(|m| m.view_mut(id)).map(f)
    }

    /// Run a closure against every live view's handle.
    pub(super) fn for_each_view(&mut self, mut f: impl FnMut(&mut ViewHandle)) {
        if let Some(ref mut manager) = self.manager {
            for id in manager.active_views() {
                if let Some(handle) = manager.view_mut(id) {
                    f(handle);
                }
            }
        }
    }

    /// Set the OS window title, naming the focused view's document when
    /// `dynamic_title` is on.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        let base = &self.config.window.title;
        let focused_title = self
            .focused_view
            .and_then(|id| self.manager.as_ref()?.view(id))
            .map(|h| h.current_title().to_string());

        match focused_title {
            Some(title) if self.config.window.dynamic_title && !title.is_empty() => {
                window.set_title(&format!("{title} - {base}"));
            }
            _ => window.set_title(base),
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
