//! Host-side key and modifier representations.
//!
//! [`HostKey`] is the layout-resolved but unshifted key symbol the windowing
//! layer reports ('1' stays '1' while shift is held; shifting to '!' is the
//! translator's job). Keeping this winit-free means the translation tables
//! can be tested without a window.

/// Modifier bit values of the engine's key and mouse event ABI.
pub mod flags {
    pub const CAPS_LOCK_ON: u32 = 1 << 0;
    pub const SHIFT_DOWN: u32 = 1 << 1;
    pub const CONTROL_DOWN: u32 = 1 << 2;
    pub const ALT_DOWN: u32 = 1 << 3;
    pub const LEFT_MOUSE_BUTTON: u32 = 1 << 4;
    pub const MIDDLE_MOUSE_BUTTON: u32 = 1 << 5;
    pub const RIGHT_MOUSE_BUTTON: u32 = 1 << 6;
    pub const COMMAND_DOWN: u32 = 1 << 7;
    pub const NUM_LOCK_ON: u32 = 1 << 8;
    pub const IS_KEY_PAD: u32 = 1 << 9;
    pub const IS_LEFT: u32 = 1 << 10;
    pub const IS_RIGHT: u32 = 1 << 11;
}

/// Modifier key state bundled for translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
}

impl Modifiers {
    /// Letters type uppercase when exactly one of caps-lock and shift is
    /// active.
    pub fn uppercase(&self) -> bool {
        self.caps_lock == !self.shift
    }

    /// Fold a modifier key that is itself going down into the state.
    ///
    /// Hosts report the modifier bits as they were before the press, so a
    /// shift key-down arrives with `shift == false` unless corrected here.
    pub fn including(mut self, key: HostKey) -> Modifiers {
        match key {
            HostKey::Shift => self.shift = true,
            HostKey::Control => self.ctrl = true,
            HostKey::Alt => self.alt = true,
            _ => {}
        }
        self
    }

    /// Encode as the engine's modifier bitmask.
    pub fn to_flags(&self) -> u32 {
        let mut code = 0;
        if self.shift {
            code |= flags::SHIFT_DOWN;
        }
        if self.ctrl {
            code |= flags::CONTROL_DOWN;
        }
        if self.alt {
            code |= flags::ALT_DOWN;
        }
        if self.caps_lock {
            code |= flags::CAPS_LOCK_ON;
        }
        if self.num_lock {
            code |= flags::NUM_LOCK_ON;
        }
        code
    }
}

/// A key symbol as reported by the host windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    /// Printable keys by their unshifted character: letters (lowercase),
    /// digits, punctuation, space.
    Char(char),
    /// Function keys; `Function(1)` is F1. Only F1 through F12 are mapped.
    Function(u8),
    Backspace,
    Tab,
    Enter,
    Escape,
    Pause,
    ScrollLock,
    CapsLock,
    NumLock,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Shift,
    Control,
    Alt,
    SuperLeft,
    SuperRight,
    ContextMenu,
    /// Keypad digits; `Keypad(0)` is KP0. Mapped to their navigation
    /// meanings, matching the engine's expectations when num-lock is off.
    Keypad(u8),
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadDecimal,
    /// Any other key. The raw host keysym value is forwarded as the
    /// virtual-key code unchanged.
    Raw(u32),
}

/// A mouse button as reported by the host windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMouseButton {
    Left,
    Middle,
    Right,
    /// Thumb button (historically X1).
    Back,
    /// Thumb button (historically X2).
    Forward,
    Other(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_shift_xor_caps() {
        let mut m = Modifiers::default();
        assert!(!m.uppercase());

        m.shift = true;
        assert!(m.uppercase());

        m.caps_lock = true;
        assert!(!m.uppercase()); // shift cancels caps-lock

        m.shift = false;
        assert!(m.uppercase());
    }

    #[test]
    fn flags_match_engine_abi() {
        let m = Modifiers {
            shift: true,
            ctrl: true,
            alt: false,
            caps_lock: true,
            num_lock: false,
        };
        assert_eq!(
            m.to_flags(),
            flags::SHIFT_DOWN | flags::CONTROL_DOWN | flags::CAPS_LOCK_ON
        );
    }

    #[test]
    fn flags_empty_for_default() {
        assert_eq!(Modifiers::default().to_flags(), 0);
    }

    #[test]
    fn flags_num_lock() {
        let m = Modifiers {
            num_lock: true,
            ..Modifiers::default()
        };
        assert_eq!(m.to_flags(), flags::NUM_LOCK_ON);
    }

    #[test]
    fn including_folds_modifier_press() {
        let m = Modifiers::default().including(HostKey::Shift);
        assert!(m.shift);

        let m = Modifiers::default().including(HostKey::Control);
        assert!(m.ctrl);

        let m = Modifiers::default().including(HostKey::Alt);
        assert!(m.alt);
    }

    #[test]
    fn including_ignores_ordinary_keys() {
        let m = Modifiers::default().including(HostKey::Char('a'));
        assert_eq!(m, Modifiers::default());
    }
}
