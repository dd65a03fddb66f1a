//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use vitrine_common::{Rect, ViewId};
use vitrine_input::keys::flags;
use vitrine_input::{
    key_event_sequence, translate_mouse_button, translate_wheel, HostKey, MouseButton, MouseEvent,
};

use crate::host_input;

use super::core::VitrineApp;

impl ApplicationHandler for VitrineApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut compositor) = self.compositor {
                        compositor.resize(size.width, size.height);
                    }
                    self.sync_view_sizes();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.handle_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_mouse_wheel(delta);
            }

            WindowEvent::Focused(focused) => {
                if let Some(id) = self.focused_view {
                    self.with_view(id, |handle| handle.set_focus(focused));
                }
            }

            WindowEvent::Occluded(occluded) => {
                // A fully covered window needs no paints; the engine skips
                // them until the view is shown again.
                self.for_each_view(|handle| handle.set_hidden(occluded));
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.pump_and_schedule(event_loop);
    }
}

impl VitrineApp {
    /// Process a keyboard event: app shortcuts first, then translate and
    /// forward the full key-down/char/key-up sequence to the focused view.
    fn handle_keyboard_input(&mut self, event: winit::event::KeyEvent) {
        let is_press = event.state == ElementState::Pressed;

        let Some(key) = host_input::host_key(event.physical_key) else {
            return;
        };

        // winit reports no lock-key state, so track the toggles here.
        if is_press && !event.repeat {
            match key {
                HostKey::CapsLock => self.caps_lock = !self.caps_lock,
                HostKey::NumLock => self.num_lock = !self.num_lock,
                _ => {}
            }
        }

        if self.handle_shortcut(key, is_press) {
            return;
        }

        let modifiers = host_input::modifiers(self.modifiers, self.caps_lock, self.num_lock);
        let sequence = key_event_sequence(key, modifiers, is_press);
        if let Some(id) = self.focused_view {
            self.with_view(id, |handle| {
                for key_event in sequence {
                    handle.send_key_event(key_event);
                }
            });
        }
    }

    /// App-level shortcuts, checked before keys reach a view. Returns
    /// `true` when the key was consumed.
    fn handle_shortcut(&mut self, key: HostKey, is_press: bool) -> bool {
        if !is_press {
            return false;
        }
        let ctrl = self.modifiers.control_key();
        let alt = self.modifiers.alt_key();
        let shift = self.modifiers.shift_key();
        let Some(id) = self.focused_view else {
            return false;
        };

        match key {
            HostKey::Char('r') if ctrl && shift => {
                self.with_view(id, |h| h.reload_ignore_cache());
                true
            }
            HostKey::Char('r') if ctrl => {
                self.with_view(id, |h| h.reload());
                true
            }
            HostKey::ArrowLeft if alt => {
                self.with_view(id, |h| h.go_back());
                true
            }
            HostKey::ArrowRight if alt => {
                self.with_view(id, |h| h.go_forward());
                true
            }
            HostKey::Char('=') if ctrl => {
                self.adjust_zoom(id, 0.5);
                true
            }
            HostKey::Char('-') if ctrl => {
                self.adjust_zoom(id, -0.5);
                true
            }
            HostKey::Char('0') if ctrl => {
                self.set_zoom(id, 0.0);
                true
            }
            _ => false,
        }
    }

    fn adjust_zoom(&mut self, id: ViewId, delta: f64) {
        let level = self.zoom_levels.get(&id).copied().unwrap_or(0.0) + delta;
        self.set_zoom(id, level);
    }

    fn set_zoom(&mut self, id: ViewId, level: f64) {
        self.zoom_levels.insert(id, level);
        self.with_view(id, |h| h.set_zoom(level));
        tracing::debug!(%id, level, "zoom adjusted");
    }

    /// Track the cursor and route move events to the view under it, with
    /// a leave event to the view the cursor just left.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);

        let hit = self.compositor.as_ref().and_then(|c| c.view_at(x, y));
        let hit_id = hit.as_ref().map(|(id, _)| *id);

        if self.hovered_view != hit_id {
            if let Some(old) = self.hovered_view {
                self.send_mouse_leave(old);
            }
            self.hovered_view = hit_id;
        }

        if let Some((id, rect)) = hit {
            let event = self.mouse_event_in(&rect);
            self.with_view(id, |h| h.send_mouse_move(event, false));
        }
    }

    fn handle_cursor_left(&mut self) {
        if let Some(id) = self.hovered_view.take() {
            self.send_mouse_leave(id);
        }
    }

    fn send_mouse_leave(&mut self, id: ViewId) {
        if let Some(rect) = self.compositor.as_ref().and_then(|c| c.pixel_rect(id)) {
            let event = self.mouse_event_in(&rect);
            self.with_view(id, |h| h.send_mouse_move(event, true));
        }
    }

    /// Route a button press or release to the view under the cursor.
    /// A press also moves keyboard focus there.
    fn handle_mouse_input(&mut self, state: ElementState, button: winit::event::MouseButton) {
        let host_button = host_input::host_mouse_button(button);
        let Some(engine_button) = translate_mouse_button(host_button) else {
            return;
        };

        let (x, y) = self.cursor_pos;
        let Some((id, rect)) = self.compositor.as_ref().and_then(|c| c.view_at(x, y)) else {
            return;
        };

        let mouse_up = state == ElementState::Released;
        let flag = match engine_button {
            MouseButton::Left => flags::LEFT_MOUSE_BUTTON,
            MouseButton::Middle => flags::MIDDLE_MOUSE_BUTTON,
            MouseButton::Right => flags::RIGHT_MOUSE_BUTTON,
        };

        // The engine expects the pressed button's own flag set in both the
        // down and the up event.
        if !mouse_up {
            self.pressed_buttons |= flag;
            self.focus_view(id);
        }

        let event = self.mouse_event_in(&rect);
        self.with_view(id, |h| h.send_mouse_click(event, engine_button, mouse_up, 1));

        if mouse_up {
            self.pressed_buttons &= !flag;
        }
    }

    fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let (x, y) = self.cursor_pos;
        let Some((id, rect)) = self.compositor.as_ref().and_then(|c| c.view_at(x, y)) else {
            return;
        };

        let (dx, dy) = host_input::wheel_pixels(delta, self.config.input.scroll_pixels_per_line);
        let (delta_x, delta_y) = translate_wheel(dx, dy, self.config.input.natural_scrolling);
        let event = self.mouse_event_in(&rect);
        self.with_view(id, |h| h.send_mouse_wheel(event, delta_x, delta_y));
    }

    /// Move keyboard focus to a view, telling both the old and new holder.
    fn focus_view(&mut self, id: ViewId) {
        if self.focused_view == Some(id) {
            return;
        }
        if let Some(old) = self.focused_view {
            self.with_view(old, |h| h.set_focus(false));
        }
        self.with_view(id, |h| h.set_focus(true));
        self.focused_view = Some(id);
        self.update_window_title();
    }

    /// Mouse event positioned relative to a view's pixel rect.
    fn mouse_event_in(&self, rect: &Rect) -> MouseEvent {
        let modifiers = host_input::modifiers(self.modifiers, self.caps_lock, self.num_lock);
        MouseEvent {
            x: (self.cursor_pos.0 - rect.x) as i32,
            y: (self.cursor_pos.1 - rect.y) as i32,
            modifiers: modifiers.to_flags() | self.pressed_buttons,
        }
    }
}
