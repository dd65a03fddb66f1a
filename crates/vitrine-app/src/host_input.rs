//! Mapping from winit input types to the host-side input model.
//!
//! winit's `PhysicalKey` is layout-independent and unshifted, which is the
//! contract [`HostKey`] wants: the translator applies shift itself, so
//! `Digit1` stays '1' here even while shift is held.

use winit::event::{MouseButton as WinitMouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use vitrine_input::{HostKey, HostMouseButton, Modifiers};

/// Map a winit physical key to the host key model. Keys the engine has no
/// use for map to `None` and are dropped.
pub fn host_key(key: PhysicalKey) -> Option<HostKey> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    Some(match code {
        KeyCode::KeyA => HostKey::Char('a'),
        KeyCode::KeyB => HostKey::Char('b'),
        KeyCode::KeyC => HostKey::Char('c'),
        KeyCode::KeyD => HostKey::Char('d'),
        KeyCode::KeyE => HostKey::Char('e'),
        KeyCode::KeyF => HostKey::Char('f'),
        KeyCode::KeyG => HostKey::Char('g'),
        KeyCode::KeyH => HostKey::Char('h'),
        KeyCode::KeyI => HostKey::Char('i'),
        KeyCode::KeyJ => HostKey::Char('j'),
        KeyCode::KeyK => HostKey::Char('k'),
        KeyCode::KeyL => HostKey::Char('l'),
        KeyCode::KeyM => HostKey::Char('m'),
        KeyCode::KeyN => HostKey::Char('n'),
        KeyCode::KeyO => HostKey::Char('o'),
        KeyCode::KeyP => HostKey::Char('p'),
        KeyCode::KeyQ => HostKey::Char('q'),
        KeyCode::KeyR => HostKey::Char('r'),
        KeyCode::KeyS => HostKey::Char('s'),
        KeyCode::KeyT => HostKey::Char('t'),
        KeyCode::KeyU => HostKey::Char('u'),
        KeyCode::KeyV => HostKey::Char('v'),
        KeyCode::KeyW => HostKey::Char('w'),
        KeyCode::KeyX => HostKey::Char('x'),
        KeyCode::KeyY => HostKey::Char('y'),
        KeyCode::KeyZ => HostKey::Char('z'),

        KeyCode::Digit0 => HostKey::Char('0'),
        KeyCode::Digit1 => HostKey::Char('1'),
        KeyCode::Digit2 => HostKey::Char('2'),
        KeyCode::Digit3 => HostKey::Char('3'),
        KeyCode::Digit4 => HostKey::Char('4'),
        KeyCode::Digit5 => HostKey::Char('5'),
        KeyCode::Digit6 => HostKey::Char('6'),
        KeyCode::Digit7 => HostKey::Char('7'),
        KeyCode::Digit8 => HostKey::Char('8'),
        KeyCode::Digit9 => HostKey::Char('9'),

        KeyCode::Space => HostKey::Char(' '),
        KeyCode::Minus => HostKey::Char('-'),
        KeyCode::Equal => HostKey::Char('='),
        KeyCode::BracketLeft => HostKey::Char('['),
        KeyCode::BracketRight => HostKey::Char(']'),
        KeyCode::Backslash => HostKey::Char('\\'),
        KeyCode::Semicolon => HostKey::Char(';'),
        KeyCode::Quote => HostKey::Char('\''),
        KeyCode::Comma => HostKey::Char(','),
        KeyCode::Period => HostKey::Char('.'),
        KeyCode::Slash => HostKey::Char('/'),
        KeyCode::Backquote => HostKey::Char('`'),

        KeyCode::F1 => HostKey::Function(1),
        KeyCode::F2 => HostKey::Function(2),
        KeyCode::F3 => HostKey::Function(3),
        KeyCode::F4 => HostKey::Function(4),
        KeyCode::F5 => HostKey::Function(5),
        KeyCode::F6 => HostKey::Function(6),
        KeyCode::F7 => HostKey::Function(7),
        KeyCode::F8 => HostKey::Function(8),
        KeyCode::F9 => HostKey::Function(9),
        KeyCode::F10 => HostKey::Function(10),
        KeyCode::F11 => HostKey::Function(11),
        KeyCode::F12 => HostKey::Function(12),

        KeyCode::Backspace => HostKey::Backspace,
        KeyCode::Tab => HostKey::Tab,
        KeyCode::Enter | KeyCode::NumpadEnter => HostKey::Enter,
        KeyCode::Escape => HostKey::Escape,
        KeyCode::Pause => HostKey::Pause,
        KeyCode::ScrollLock => HostKey::ScrollLock,
        KeyCode::CapsLock => HostKey::CapsLock,
        KeyCode::NumLock => HostKey::NumLock,
        KeyCode::ArrowLeft => HostKey::ArrowLeft,
        KeyCode::ArrowUp => HostKey::ArrowUp,
        KeyCode::ArrowRight => HostKey::ArrowRight,
        KeyCode::ArrowDown => HostKey::ArrowDown,
        KeyCode::Home => HostKey::Home,
        KeyCode::End => HostKey::End,
        KeyCode::PageUp => HostKey::PageUp,
        KeyCode::PageDown => HostKey::PageDown,
        KeyCode::Insert => HostKey::Insert,
        KeyCode::Delete => HostKey::Delete,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => HostKey::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => HostKey::Control,
        KeyCode::AltLeft | KeyCode::AltRight => HostKey::Alt,
        KeyCode::SuperLeft => HostKey::SuperLeft,
        KeyCode::SuperRight => HostKey::SuperRight,
        KeyCode::ContextMenu => HostKey::ContextMenu,

        KeyCode::Numpad0 => HostKey::Keypad(0),
        KeyCode::Numpad1 => HostKey::Keypad(1),
        KeyCode::Numpad2 => HostKey::Keypad(2),
        KeyCode::Numpad3 => HostKey::Keypad(3),
        KeyCode::Numpad4 => HostKey::Keypad(4),
        KeyCode::Numpad5 => HostKey::Keypad(5),
        KeyCode::Numpad6 => HostKey::Keypad(6),
        KeyCode::Numpad7 => HostKey::Keypad(7),
        KeyCode::Numpad8 => HostKey::Keypad(8),
        KeyCode::Numpad9 => HostKey::Keypad(9),
        KeyCode::NumpadDivide => HostKey::KeypadDivide,
        KeyCode::NumpadMultiply => HostKey::KeypadMultiply,
        KeyCode::NumpadSubtract => HostKey::KeypadSubtract,
        KeyCode::NumpadAdd => HostKey::KeypadAdd,
        KeyCode::NumpadDecimal => HostKey::KeypadDecimal,

        _ => return None,
    })
}

/// Build translator modifier state from winit's modifier bits plus the
/// app-tracked lock states winit does not report.
pub fn modifiers(state: ModifiersState, caps_lock: bool, num_lock: bool) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        caps_lock,
        num_lock,
    }
}

/// Map a winit mouse button to the host button model.
pub fn host_mouse_button(button: WinitMouseButton) -> HostMouseButton {
    match button {
        WinitMouseButton::Left => HostMouseButton::Left,
        WinitMouseButton::Middle => HostMouseButton::Middle,
        WinitMouseButton::Right => HostMouseButton::Right,
        WinitMouseButton::Back => HostMouseButton::Back,
        WinitMouseButton::Forward => HostMouseButton::Forward,
        WinitMouseButton::Other(n) => HostMouseButton::Other(n),
    }
}

/// Convert a winit scroll delta to pixel deltas.
pub fn wheel_pixels(delta: MouseScrollDelta, pixels_per_line: f64) -> (f64, f64) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            (x as f64 * pixels_per_line, y as f64 * pixels_per_line)
        }
        MouseScrollDelta::PixelDelta(pos) => (pos.x, pos.y),
    }
}

// =============================================================================
// Tests
// =============================================================================
