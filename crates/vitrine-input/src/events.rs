//! Event records of the engine's input ABI.

/// Which phase of a key transition an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Raw key-down, delivered by hosts that separate the raw and
    /// translated key-down phases.
    RawKeyDown,
    /// Translated key-down.
    KeyDown,
    /// Key release.
    KeyUp,
    /// Character generated by a key-down.
    Char,
}

/// One key event as the engine consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    /// Bitmask built from [`keys::flags`](crate::keys::flags).
    pub modifiers: u32,
    /// Windows virtual-key code.
    pub windows_key_code: i32,
    /// Platform key code; equal to the virtual-key code in this embedding.
    pub native_key_code: i32,
    /// UTF-16 code unit generated by the key, 0 when the key generates none.
    pub character: u16,
    pub unmodified_character: u16,
}

/// The engine's three-button mouse enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Pointer position and modifier state attached to every mouse event.
///
/// Coordinates are view-local pixels with the origin at the top-left of the
/// view, not of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: i32,
    pub y: i32,
    pub modifiers: u32,
}
