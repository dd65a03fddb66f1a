//! Host-to-engine input translation.
//!
//! Converts key symbols, mouse buttons and wheel deltas as reported by the
//! host windowing layer into the event records the browser engine expects:
//! Windows virtual-key codes, character codes, the engine's modifier bitmask
//! and its three-button mouse enumeration. Everything here is pure: no
//! windowing types leak in, and nothing talks to the engine directly.

pub mod events;
pub mod keys;
pub mod sequence;
pub mod translate;

pub use events::{KeyEvent, KeyEventKind, MouseButton, MouseEvent};
pub use keys::{HostKey, HostMouseButton, Modifiers};
pub use sequence::key_event_sequence;
pub use translate::{translate_key, translate_mouse_button, translate_wheel, KeyCodes};
