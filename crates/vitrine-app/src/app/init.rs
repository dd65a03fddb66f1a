//! Window creation, compositor initialization, and view setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use vitrine_common::{Color, ViewId};
use vitrine_engine::{EngineSettings, HeadlessEngine, ViewConfig, ViewManager};
use vitrine_render::Compositor;

use crate::config::ViewDecl;

use super::core::VitrineApp;

impl VitrineApp {
    /// Create the window, the GPU compositor, and the engine.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(Compositor::new(window.clone())) {
            Ok(mut compositor) => {
                match Color::from_hex(&self.config.window.background) {
                    Some(color) => compositor.set_clear_color(color),
                    None => tracing::warn!(
                        "background {:?} is not a #rrggbb color, keeping black",
                        self.config.window.background
                    ),
                }
                self.compositor = Some(compositor);
            }
            Err(e) => {
                tracing::error!("Failed to initialize compositor: {e}");
                return false;
            }
        }

        if !self.initialize_engine() {
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and compositor initialized");
        true
    }

    /// Initialize the engine and open the configured views.
    fn initialize_engine(&mut self) -> bool {
        let settings = EngineSettings {
            background_color: Color::from_hex(&self.config.window.background)
                .unwrap_or(EngineSettings::default().background_color),
            remote_debugging_port: self.config.engine.remote_debugging_port,
            cache_path: self.config.engine.cache_path.clone(),
            subprocess_path: None,
        };

        let mut manager = match ViewManager::new(Box::new(HeadlessEngine::new()), &settings) {
            Ok(m) => m,
            Err(e) => {
                tracing::error!("Failed to initialize engine: {e}");
                return false;
            }
        };

        let decls = self.config.views.clone();
        let mut first = None;
        for decl in &decls {
            let id = self.open_view(&mut manager, decl);
            if first.is_none() {
                first = id;
            }
        }

        if let Some(id) = first {
            if let Some(handle) = manager.view_mut(id) {
                handle.set_focus(true);
            }
        } else {
            tracing::warn!("No views opened");
        }

        self.focused_view = first;
        self.manager = Some(manager);
        true
    }

    /// Create one engine view and register it with the compositor. Views
    /// whose viewport the compositor rejects are closed again and skipped.
    fn open_view(&mut self, manager: &mut ViewManager, decl: &ViewDecl) -> Option<ViewId> {
        let compositor = self.compositor.as_mut()?;
        let size = compositor.gpu.size;
        let rect = decl.viewport.to_pixels(size.width, size.height);

        let view_config = ViewConfig {
            url: decl.url.clone(),
            width: (rect.width.round() as u32).max(1),
            height: (rect.height.round() as u32).max(1),
            frame_rate: self.config.engine.frame_rate,
            transparent: self.config.engine.transparent,
            audio_muted: self.config.engine.audio_muted,
            enable_webgl: self.config.engine.enable_webgl,
            autoplay: self.config.engine.autoplay,
        };

        let id = match manager.create_view(view_config) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to create view for {}: {e}", decl.url);
                return None;
            }
        };

        if let Err(e) = compositor.add_view(id, decl.viewport, decl.spin) {
            tracing::warn!("Dropping view for {}: {e}", decl.url);
            manager.close_view(id);
            return None;
        }

        Some(id)
    }
}
