//! Driver traits over the opaque browser engine.
//!
//! A real engine binding implements these with its FFI layer; the in-tree
//! [`HeadlessEngine`](crate::headless::HeadlessEngine) implements them
//! without one. Command methods mirror the engine ABI and are fire and
//! forget, exactly as the underlying calls are.

use vitrine_common::{EngineError, ViewId};
use vitrine_input::{KeyEvent, MouseButton, MouseEvent};

use crate::events::EventSink;
use crate::frame::SharedFrame;
use crate::settings::{EngineSettings, ViewConfig};

/// Process-wide engine lifecycle.
pub trait EngineDriver {
    /// Bring the engine up. Called exactly once, before any view exists.
    fn initialize(&mut self, settings: &EngineSettings) -> Result<(), EngineError>;

    /// Create one off-screen view.
    ///
    /// The view paints into `frame` and reads its dimensions back as the
    /// view rect; load progress goes to `events`.
    fn create_view(
        &mut self,
        id: ViewId,
        config: &ViewConfig,
        frame: SharedFrame,
        events: EventSink,
    ) -> Result<Box<dyn ViewDriver>, EngineError>;

    /// Perform one unit of engine message-loop work. Called every turn of
    /// the host main loop; paint callbacks fire from inside.
    fn pump(&mut self);

    /// Tear the engine down. No driver call is valid afterwards.
    fn shutdown(&mut self);
}

/// One live off-screen view.
pub trait ViewDriver {
    fn load_url(&mut self, url: &str);
    fn reload(&mut self);
    fn reload_ignore_cache(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);

    /// Zoom level in the engine's scale, where 0.0 is 100%.
    fn set_zoom(&mut self, level: f64);

    /// Notify that the frame dimensions changed; the engine re-queries the
    /// view rect and repaints at the new size.
    fn was_resized(&mut self);

    fn set_focus(&mut self, focused: bool);

    /// Hidden views stop receiving paints until shown again.
    fn was_hidden(&mut self, hidden: bool);

    fn send_key_event(&mut self, event: KeyEvent);
    fn send_mouse_move(&mut self, event: MouseEvent, leave: bool);
    fn send_mouse_click(
        &mut self,
        event: MouseEvent,
        button: MouseButton,
        mouse_up: bool,
        click_count: i32,
    );
    fn send_mouse_wheel(&mut self, event: MouseEvent, delta_x: i32, delta_y: i32);

    /// Give the view a slice of engine time. Engines pumped per view paint
    /// from here; globally pumped engines leave this as the default no-op.
    fn pump(&mut self) {}

    /// Begin closing the view. The engine finishes teardown during
    /// subsequent pumps.
    fn close(&mut self);
}
