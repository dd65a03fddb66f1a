//! Engine stand-in that needs no browser at all.
//!
//! Paints a per-view test pattern and walks a real navigation history, so
//! the full create/load/resize/input/close path can run in CI and the
//! binary stays usable before a real engine driver is wired up.

use tracing::debug;

use vitrine_common::{EngineError, ViewId};
use vitrine_input::{KeyEvent, MouseButton, MouseEvent};

use crate::driver::{EngineDriver, ViewDriver};
use crate::events::{EngineEvent, EventSink};
use crate::frame::SharedFrame;
use crate::settings::{EngineSettings, ViewConfig};

/// Driver that simulates an off-screen engine.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    initialized: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EngineDriver for HeadlessEngine {
    fn initialize(&mut self, settings: &EngineSettings) -> Result<(), EngineError> {
        if self.initialized {
            return Err(EngineError::Initialize("already initialized".into()));
        }
        self.initialized = true;
        debug!(
            debug_port = ?settings.remote_debugging_port,
            "headless engine initialized"
        );
        Ok(())
    }

    fn create_view(
        &mut self,
        id: ViewId,
        config: &ViewConfig,
        frame: SharedFrame,
        events: EventSink,
    ) -> Result<Box<dyn ViewDriver>, EngineError> {
        if !self.initialized {
            return Err(EngineError::CreateView("engine not initialized".into()));
        }
        let mut view = HeadlessView {
            id,
            frame,
            events,
            history: Vec::new(),
            history_index: 0,
            tint: tint_for(id),
            loading: false,
            dirty: true,
            hidden: false,
        };
        view.history.push(config.url.clone());
        view.begin_load();
        Ok(Box::new(view))
    }

    fn pump(&mut self) {}

    fn shutdown(&mut self) {
        self.initialized = false;
        debug!("headless engine shut down");
    }
}

/// Distinct red channel per view so composited output is tellable apart.
fn tint_for(id: ViewId) -> u8 {
    55 + (id.0.wrapping_mul(53) % 200) as u8
}

struct HeadlessView {
    id: ViewId,
    frame: SharedFrame,
    events: EventSink,
    history: Vec<String>,
    history_index: usize,
    tint: u8,
    loading: bool,
    dirty: bool,
    hidden: bool,
}

impl HeadlessView {
    fn current_url(&self) -> &str {
        &self.history[self.history_index]
    }

    fn begin_load(&mut self) {
        let url = self.current_url().to_string();
        if url.is_empty() {
            self.events.push(EngineEvent::LoadFailed {
                id: self.id,
                error: "invalid url: empty".into(),
            });
            return;
        }
        self.events.push(EngineEvent::LoadStarted { id: self.id, url });
        self.loading = true;
        self.dirty = true;
    }

    /// Gradient over x and y with the per-view tint in the red channel.
    fn repaint(&mut self) {
        let (width, height) = self.frame.view_rect();
        let mut buffer = vec![0u8; width as usize * height as usize * 4];
        for y in 0..height {
            for x in 0..width {
                let i = ((y * width + x) * 4) as usize;
                buffer[i] = (x & 0xff) as u8; // B
                buffer[i + 1] = (y & 0xff) as u8; // G
                buffer[i + 2] = self.tint; // R
                buffer[i + 3] = 0xff; // A
            }
        }
        self.frame.write(&buffer, width, height);
    }
}

impl ViewDriver for HeadlessView {
    fn load_url(&mut self, url: &str) {
        // Navigating discards any forward history
        self.history.truncate(self.history_index + 1);
        self.history.push(url.to_string());
        self.history_index = self.history.len() - 1;
        self.begin_load();
    }

    fn reload(&mut self) {
        self.begin_load();
    }

    fn reload_ignore_cache(&mut self) {
        self.begin_load();
    }

    fn go_back(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.begin_load();
        }
    }

    fn go_forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.begin_load();
        }
    }

    fn set_zoom(&mut self, level: f64) {
        debug!(id = %self.id, level, "zoom set");
    }

    fn was_resized(&mut self) {
        self.dirty = true;
    }

    fn set_focus(&mut self, focused: bool) {
        debug!(id = %self.id, focused, "focus changed");
        self.dirty = true;
    }

    fn was_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        if !hidden {
            // Repaint on the next pump; the frame may be stale
            self.dirty = true;
        }
    }

    fn send_key_event(&mut self, _event: KeyEvent) {
        self.dirty = true;
    }

    fn send_mouse_move(&mut self, _event: MouseEvent, _leave: bool) {}

    fn send_mouse_click(
        &mut self,
        _event: MouseEvent,
        _button: MouseButton,
        _mouse_up: bool,
        _click_count: i32,
    ) {
        self.dirty = true;
    }

    fn send_mouse_wheel(&mut self, _event: MouseEvent, _delta_x: i32, _delta_y: i32) {
        self.dirty = true;
    }

    fn pump(&mut self) {
        if self.loading {
            self.loading = false;
            self.events.push(EngineEvent::LoadFinished {
                id: self.id,
                http_status: 200,
            });
            self.events.push(EngineEvent::TitleChanged {
                id: self.id,
                title: self.current_url().to_string(),
            });
        }
        if self.dirty && !self.hidden {
            self.repaint();
            self.dirty = false;
        }
    }

    fn close(&mut self) {
        debug!(id = %self.id, "view closing");
    }
}
