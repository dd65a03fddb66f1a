use vitrine_common::ViewId;
use vitrine_input::{KeyEvent, MouseButton, MouseEvent};

use crate::driver::ViewDriver;
use crate::frame::SharedFrame;

/// Handle to a managed view. Wraps the engine driver with the frame
/// storage and best-effort URL/title tracking.
pub struct ViewHandle {
    driver: Box<dyn ViewDriver>,
    frame: SharedFrame,
    id: ViewId,
    current_url: String,
    current_title: String,
}

impl ViewHandle {
    pub(super) fn new(
        id: ViewId,
        driver: Box<dyn ViewDriver>,
        frame: SharedFrame,
        url: String,
    ) -> Self {
        Self {
            driver,
            frame,
            id,
            current_url: url,
            current_title: String::new(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The frame this view paints into; the renderer uploads from it.
    pub fn frame(&self) -> &SharedFrame {
        &self.frame
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Update the tracked title, usually from a title-changed event.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) {
        self.current_url = url.to_string();
        self.driver.load_url(url);
    }

    pub fn reload(&mut self) {
        self.driver.reload();
    }

    pub fn reload_ignore_cache(&mut self) {
        self.driver.reload_ignore_cache();
    }

    pub fn go_back(&mut self) {
        self.driver.go_back();
    }

    pub fn go_forward(&mut self) {
        self.driver.go_forward();
    }

    /// Zoom level in the engine's scale, where 0.0 is 100%.
    pub fn set_zoom(&mut self, level: f64) {
        self.driver.set_zoom(level);
    }

    /// Resize the frame and tell the engine. Resizing to the current size
    /// does nothing at all, including no engine notification.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.frame.resize(width, height) {
            self.driver.was_resized();
        }
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.driver.set_focus(focused);
    }

    /// Hidden views stop receiving paints until shown again.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.driver.was_hidden(hidden);
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.driver.send_key_event(event);
    }

    pub fn send_mouse_move(&mut self, event: MouseEvent, leave: bool) {
        self.driver.send_mouse_move(event, leave);
    }

    pub fn send_mouse_click(
        &mut self,
        event: MouseEvent,
        button: MouseButton,
        mouse_up: bool,
        click_count: i32,
    ) {
        self.driver.send_mouse_click(event, button, mouse_up, click_count);
    }

    pub fn send_mouse_wheel(&mut self, event: MouseEvent, delta_x: i32, delta_y: i32) {
        self.driver.send_mouse_wheel(event, delta_x, delta_y);
    }

    pub(super) fn pump(&mut self) {
        self.driver.pump();
    }

    pub(super) fn close(&mut self) {
        self.driver.close();
    }
}
