//! Key, mouse-button and wheel translation tables.
//!
//! The virtual-key values are the Windows codes the engine expects for every
//! platform when rendering off-screen. Character codes assume a US layout,
//! which is what the host reports unshifted symbols in.

use tracing::trace;

use crate::events::MouseButton;
use crate::keys::{HostKey, HostMouseButton, Modifiers};

/// Engine codes produced for one host key under a given modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCodes {
    /// Windows virtual-key code.
    pub key_code: i32,
    /// Character the key generates, if it generates one.
    pub char_code: Option<char>,
}

/// Translate an unshifted host key symbol into engine key codes.
///
/// Unmapped keys fall back to forwarding the raw host symbol as the
/// virtual-key code with no character, so the engine still sees a key-down.
pub fn translate_key(key: HostKey, modifiers: Modifiers) -> KeyCodes {
    match key {
        HostKey::Char(c @ 'a'..='z') => alphabet_codes(c, modifiers),
        HostKey::Char(c @ '0'..='9') => number_row_codes(c, modifiers),
        HostKey::Function(n @ 1..=12) => KeyCodes {
            key_code: 111 + n as i32,
            char_code: None,
        },
        other => special_key_codes(other, modifiers),
    }
}

fn alphabet_codes(c: char, modifiers: Modifiers) -> KeyCodes {
    let diff = c as u8 - b'a';
    let base = if modifiers.uppercase() { b'A' } else { b'a' };
    KeyCodes {
        key_code: 65 + diff as i32,
        char_code: Some((base + diff) as char),
    }
}

fn number_row_codes(c: char, modifiers: Modifiers) -> KeyCodes {
    let diff = c as u8 - b'0';
    let char_code = if modifiers.shift {
        match c {
            '1' => '!',
            '2' => '@',
            '3' => '#',
            '4' => '$',
            '5' => '%',
            '6' => '^',
            '7' => '&',
            '8' => '*',
            '9' => '(',
            _ => ')',
        }
    } else {
        c
    };
    KeyCodes {
        key_code: 48 + diff as i32,
        char_code: Some(char_code),
    }
}

fn special_key_codes(key: HostKey, modifiers: Modifiers) -> KeyCodes {
    let (key_code, char_code) = match key {
        // Whitespace and editing
        HostKey::Char(' ') => (32, Some(' ')),
        HostKey::Backspace => (8, None),
        HostKey::Tab => (9, None),
        HostKey::Enter => (13, Some('\r')),
        HostKey::Escape => (27, None),
        HostKey::Delete => (46, Some('\u{7f}')),

        // Navigation
        HostKey::ArrowLeft => (37, None),
        HostKey::ArrowUp => (38, None),
        HostKey::ArrowRight => (39, None),
        HostKey::ArrowDown => (40, None),
        HostKey::Home => (36, None),
        HostKey::End => (35, None),
        HostKey::PageUp => (33, None),
        HostKey::PageDown => (34, None),
        HostKey::Insert => (45, None),

        // Locks and pause
        HostKey::Pause => (19, None),
        HostKey::ScrollLock => (145, None),
        HostKey::CapsLock => (20, None),
        HostKey::NumLock => (144, None),

        // Modifier keys themselves
        HostKey::Shift => (16, None),
        HostKey::Control => (17, None),
        HostKey::Alt => (18, None),
        HostKey::SuperLeft => (91, None),
        HostKey::SuperRight => (92, None),
        HostKey::ContextMenu => (93, None),

        // Keypad operators
        HostKey::KeypadDivide => (111, Some('/')),
        HostKey::KeypadMultiply => (106, Some('*')),
        HostKey::KeypadSubtract => (109, Some('-')),
        HostKey::KeypadAdd => (107, Some('+')),

        // Keypad decimal is layout dependent; without num-lock it acts as
        // delete.
        HostKey::KeypadDecimal if modifiers.num_lock => (110, Some('.')),
        HostKey::KeypadDecimal => (46, None),

        // Keypad digits carry their navigation-cluster codes
        HostKey::Keypad(0) => (45, None),
        HostKey::Keypad(1) => (35, None),
        HostKey::Keypad(2) => (40, None),
        HostKey::Keypad(3) => (34, None),
        HostKey::Keypad(4) => (37, None),
        HostKey::Keypad(5) => (12, None),
        HostKey::Keypad(6) => (39, None),
        HostKey::Keypad(7) => (36, None),
        HostKey::Keypad(8) => (38, None),
        HostKey::Keypad(9) => (33, None),

        // Punctuation, with US-layout shifted pairs
        HostKey::Char(';') => (186, Some(if modifiers.shift { ':' } else { ';' })),
        HostKey::Char('\'') => (222, Some(if modifiers.shift { '"' } else { '\'' })),
        HostKey::Char('=') => (187, Some(if modifiers.shift { '+' } else { '=' })),
        HostKey::Char(',') => (188, Some(if modifiers.shift { '<' } else { ',' })),
        HostKey::Char('-') => (189, Some(if modifiers.shift { '_' } else { '-' })),
        HostKey::Char('.') => (190, Some(if modifiers.shift { '>' } else { '.' })),
        HostKey::Char('/') => (191, Some(if modifiers.shift { '?' } else { '/' })),
        HostKey::Char('`') => (192, Some(if modifiers.shift { '~' } else { '`' })),
        HostKey::Char('[') => (219, Some(if modifiers.shift { '{' } else { '[' })),
        HostKey::Char('\\') => (220, Some(if modifiers.shift { '|' } else { '\\' })),
        HostKey::Char(']') => (221, Some(if modifiers.shift { '}' } else { ']' })),

        // Fallback: forward the raw host symbol as the virtual-key code
        HostKey::Char(c) => (c as i32, None),
        HostKey::Raw(sym) => (sym as i32, None),

        other => {
            trace!(?other, "unmapped host key");
            (0, None)
        }
    };
    KeyCodes {
        key_code,
        char_code,
    }
}

/// Map a host mouse button onto the engine's three-button enumeration.
///
/// The thumb buttons alias onto left and right as the historic embedding
/// did; anything else is dropped.
pub fn translate_mouse_button(button: HostMouseButton) -> Option<MouseButton> {
    match button {
        HostMouseButton::Left | HostMouseButton::Back => Some(MouseButton::Left),
        HostMouseButton::Middle => Some(MouseButton::Middle),
        HostMouseButton::Right | HostMouseButton::Forward => Some(MouseButton::Right),
        HostMouseButton::Other(_) => None,
    }
}

/// Normalize a host wheel delta to the engine's scroll convention.
///
/// Hosts reporting a flipped ("natural") wheel have the vertical axis
/// negated; everyone else has the horizontal axis negated.
pub fn translate_wheel(delta_x: f64, delta_y: f64, flipped: bool) -> (i32, i32) {
    let (dx, dy) = if flipped {
        (delta_x, -delta_y)
    } else {
        (-delta_x, delta_y)
    };
    (dx.round() as i32, dy.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted() -> Modifiers {
        Modifiers {
            shift: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn lowercase_letters() {
        let codes = translate_key(HostKey::Char('a'), Modifiers::default());
        assert_eq!(codes.key_code, 65);
        assert_eq!(codes.char_code, Some('a'));

        let codes = translate_key(HostKey::Char('z'), Modifiers::default());
        assert_eq!(codes.key_code, 90);
        assert_eq!(codes.char_code, Some('z'));
    }

    #[test]
    fn shift_uppercases_letters() {
        let codes = translate_key(HostKey::Char('a'), shifted());
        assert_eq!(codes.key_code, 65); // virtual key unchanged
        assert_eq!(codes.char_code, Some('A'));
    }

    #[test]
    fn caps_lock_uppercases_letters() {
        let mods = Modifiers {
            caps_lock: true,
            ..Modifiers::default()
        };
        let codes = translate_key(HostKey::Char('g'), mods);
        assert_eq!(codes.char_code, Some('G'));
    }

    #[test]
    fn shift_cancels_caps_lock() {
        let mods = Modifiers {
            shift: true,
            caps_lock: true,
            ..Modifiers::default()
        };
        let codes = translate_key(HostKey::Char('g'), mods);
        assert_eq!(codes.char_code, Some('g'));
    }

    #[test]
    fn digits_unshifted() {
        let codes = translate_key(HostKey::Char('1'), Modifiers::default());
        assert_eq!(codes.key_code, 49);
        assert_eq!(codes.char_code, Some('1'));

        let codes = translate_key(HostKey::Char('0'), Modifiers::default());
        assert_eq!(codes.key_code, 48);
        assert_eq!(codes.char_code, Some('0'));
    }

    #[test]
    fn digits_shifted_produce_symbols() {
        let pairs = [
            ('1', '!'),
            ('2', '@'),
            ('3', '#'),
            ('4', '$'),
            ('5', '%'),
            ('6', '^'),
            ('7', '&'),
            ('8', '*'),
            ('9', '('),
            ('0', ')'),
        ];
        for (digit, symbol) in pairs {
            let codes = translate_key(HostKey::Char(digit), shifted());
            assert_eq!(codes.char_code, Some(symbol), "shift+{digit}");
            // virtual key stays the digit's code
            assert_eq!(codes.key_code, 48 + (digit as u8 - b'0') as i32);
        }
    }

    #[test]
    fn function_keys() {
        let codes = translate_key(HostKey::Function(1), Modifiers::default());
        assert_eq!(codes.key_code, 112);
        assert_eq!(codes.char_code, None);

        let codes = translate_key(HostKey::Function(12), Modifiers::default());
        assert_eq!(codes.key_code, 123);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            translate_key(HostKey::Backspace, Modifiers::default()).key_code,
            8
        );
        assert_eq!(translate_key(HostKey::Tab, Modifiers::default()).key_code, 9);
        assert_eq!(
            translate_key(HostKey::Escape, Modifiers::default()).key_code,
            27
        );

        let enter = translate_key(HostKey::Enter, Modifiers::default());
        assert_eq!(enter.key_code, 13);
        assert_eq!(enter.char_code, Some('\r'));

        let space = translate_key(HostKey::Char(' '), Modifiers::default());
        assert_eq!(space.key_code, 32);
        assert_eq!(space.char_code, Some(' '));

        let delete = translate_key(HostKey::Delete, Modifiers::default());
        assert_eq!(delete.key_code, 46);
        assert_eq!(delete.char_code, Some('\u{7f}'));
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(
            translate_key(HostKey::ArrowLeft, Modifiers::default()).key_code,
            37
        );
        assert_eq!(
            translate_key(HostKey::ArrowUp, Modifiers::default()).key_code,
            38
        );
        assert_eq!(
            translate_key(HostKey::ArrowRight, Modifiers::default()).key_code,
            39
        );
        assert_eq!(
            translate_key(HostKey::ArrowDown, Modifiers::default()).key_code,
            40
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(translate_key(HostKey::Home, Modifiers::default()).key_code, 36);
        assert_eq!(translate_key(HostKey::End, Modifiers::default()).key_code, 35);
        assert_eq!(
            translate_key(HostKey::PageUp, Modifiers::default()).key_code,
            33
        );
        assert_eq!(
            translate_key(HostKey::PageDown, Modifiers::default()).key_code,
            34
        );
        assert_eq!(
            translate_key(HostKey::Insert, Modifiers::default()).key_code,
            45
        );
    }

    #[test]
    fn modifier_keys_themselves() {
        assert_eq!(translate_key(HostKey::Shift, Modifiers::default()).key_code, 16);
        assert_eq!(
            translate_key(HostKey::Control, Modifiers::default()).key_code,
            17
        );
        assert_eq!(translate_key(HostKey::Alt, Modifiers::default()).key_code, 18);
        assert_eq!(
            translate_key(HostKey::CapsLock, Modifiers::default()).key_code,
            20
        );
        assert_eq!(
            translate_key(HostKey::NumLock, Modifiers::default()).key_code,
            144
        );
        assert_eq!(
            translate_key(HostKey::ScrollLock, Modifiers::default()).key_code,
            145
        );
        assert_eq!(
            translate_key(HostKey::SuperLeft, Modifiers::default()).key_code,
            91
        );
        assert_eq!(
            translate_key(HostKey::SuperRight, Modifiers::default()).key_code,
            92
        );
        assert_eq!(
            translate_key(HostKey::ContextMenu, Modifiers::default()).key_code,
            93
        );
    }

    #[test]
    fn punctuation_pairs() {
        let pairs = [
            (';', 186, ';', ':'),
            ('\'', 222, '\'', '"'),
            ('=', 187, '=', '+'),
            (',', 188, ',', '<'),
            ('-', 189, '-', '_'),
            ('.', 190, '.', '>'),
            ('/', 191, '/', '?'),
            ('`', 192, '`', '~'),
            ('[', 219, '[', '{'),
            ('\\', 220, '\\', '|'),
            (']', 221, ']', '}'),
        ];
        for (symbol, key_code, plain, with_shift) in pairs {
            let codes = translate_key(HostKey::Char(symbol), Modifiers::default());
            assert_eq!(codes.key_code, key_code, "{symbol}");
            assert_eq!(codes.char_code, Some(plain), "{symbol}");

            let codes = translate_key(HostKey::Char(symbol), shifted());
            assert_eq!(codes.key_code, key_code, "shift+{symbol}");
            assert_eq!(codes.char_code, Some(with_shift), "shift+{symbol}");
        }
    }

    #[test]
    fn keypad_operators() {
        let divide = translate_key(HostKey::KeypadDivide, Modifiers::default());
        assert_eq!((divide.key_code, divide.char_code), (111, Some('/')));

        let multiply = translate_key(HostKey::KeypadMultiply, Modifiers::default());
        assert_eq!((multiply.key_code, multiply.char_code), (106, Some('*')));

        let subtract = translate_key(HostKey::KeypadSubtract, Modifiers::default());
        assert_eq!((subtract.key_code, subtract.char_code), (109, Some('-')));

        let add = translate_key(HostKey::KeypadAdd, Modifiers::default());
        assert_eq!((add.key_code, add.char_code), (107, Some('+')));
    }

    #[test]
    fn keypad_decimal_follows_num_lock() {
        let with_num = Modifiers {
            num_lock: true,
            ..Modifiers::default()
        };
        let codes = translate_key(HostKey::KeypadDecimal, with_num);
        assert_eq!((codes.key_code, codes.char_code), (110, Some('.')));

        let codes = translate_key(HostKey::KeypadDecimal, Modifiers::default());
        assert_eq!((codes.key_code, codes.char_code), (46, None));
    }

    #[test]
    fn keypad_digits_use_navigation_codes() {
        let expected = [45, 35, 40, 34, 37, 12, 39, 36, 38, 33];
        for (digit, key_code) in expected.iter().enumerate() {
            let codes = translate_key(HostKey::Keypad(digit as u8), Modifiers::default());
            assert_eq!(codes.key_code, *key_code, "keypad {digit}");
            assert_eq!(codes.char_code, None);
        }
    }

    #[test]
    fn unmapped_char_falls_back_to_symbol() {
        let codes = translate_key(HostKey::Char('ñ'), Modifiers::default());
        assert_eq!(codes.key_code, 'ñ' as i32);
        assert_eq!(codes.char_code, None);
    }

    #[test]
    fn raw_key_falls_back_to_keysym() {
        let codes = translate_key(HostKey::Raw(1073741925), Modifiers::default());
        assert_eq!(codes.key_code, 1073741925);
        assert_eq!(codes.char_code, None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            translate_mouse_button(HostMouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(
            translate_mouse_button(HostMouseButton::Middle),
            Some(MouseButton::Middle)
        );
        assert_eq!(
            translate_mouse_button(HostMouseButton::Right),
            Some(MouseButton::Right)
        );
    }

    #[test]
    fn thumb_buttons_alias() {
        assert_eq!(
            translate_mouse_button(HostMouseButton::Back),
            Some(MouseButton::Left)
        );
        assert_eq!(
            translate_mouse_button(HostMouseButton::Forward),
            Some(MouseButton::Right)
        );
    }

    #[test]
    fn unknown_buttons_dropped() {
        assert_eq!(translate_mouse_button(HostMouseButton::Other(9)), None);
    }

    #[test]
    fn wheel_negates_horizontal_by_default() {
        assert_eq!(translate_wheel(3.0, 2.0, false), (-3, 2));
    }

    #[test]
    fn wheel_negates_vertical_when_flipped() {
        assert_eq!(translate_wheel(3.0, 2.0, true), (3, -2));
    }

    #[test]
    fn wheel_rounds_fractional_deltas() {
        assert_eq!(translate_wheel(0.0, 1.6, false), (0, 2));
        assert_eq!(translate_wheel(-2.4, 0.0, false), (2, 0));
    }
}
