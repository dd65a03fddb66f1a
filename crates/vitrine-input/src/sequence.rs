//! Key event sequencing.
//!
//! The engine distinguishes key transitions from generated characters. A
//! press is delivered as a key-down followed by a char event when the key
//! generates one; a release is exactly one key-up. Getting this order wrong
//! breaks text entry and keyboard shortcuts inside the page.

use crate::events::{KeyEvent, KeyEventKind};
use crate::keys::{HostKey, Modifiers};
use crate::translate::translate_key;

/// Build the engine event sequence for one host key transition.
///
/// Pressing a modifier key reports itself as held, matching what the page
/// observes on every platform. Key repeat is a press and replays the full
/// press sequence.
pub fn key_event_sequence(key: HostKey, modifiers: Modifiers, is_press: bool) -> Vec<KeyEvent> {
    let modifiers = if is_press {
        modifiers.including(key)
    } else {
        modifiers
    };
    let codes = translate_key(key, modifiers);
    let character = codes.char_code.map(|c| c as u16).unwrap_or(0);
    let base = KeyEvent {
        kind: KeyEventKind::KeyDown,
        modifiers: modifiers.to_flags(),
        windows_key_code: codes.key_code,
        native_key_code: codes.key_code,
        character,
        unmodified_character: character,
    };

    if is_press {
        let mut events = vec![base];
        if codes.char_code.is_some() {
            events.push(KeyEvent {
                kind: KeyEventKind::Char,
                ..base
            });
        }
        events
    } else {
        vec![KeyEvent {
            kind: KeyEventKind::KeyUp,
            ..base
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::flags;

    #[test]
    fn press_of_character_key_emits_down_then_char() {
        let events = key_event_sequence(HostKey::Char('a'), Modifiers::default(), true);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, KeyEventKind::KeyDown);
        assert_eq!(events[1].kind, KeyEventKind::Char);
        assert_eq!(events[1].character, 'a' as u16);
    }

    #[test]
    fn press_of_non_character_key_emits_down_only() {
        let events = key_event_sequence(HostKey::ArrowLeft, Modifiers::default(), true);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, KeyEventKind::KeyDown);
        assert_eq!(events[0].windows_key_code, 37);
        assert_eq!(events[0].character, 0);
    }

    #[test]
    fn release_emits_exactly_one_key_up() {
        let events = key_event_sequence(HostKey::Char('a'), Modifiers::default(), false);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, KeyEventKind::KeyUp);
        assert!(events.iter().all(|e| e.kind != KeyEventKind::Char));
    }

    #[test]
    fn shifted_digit_chars_as_symbol() {
        let mods = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        let events = key_event_sequence(HostKey::Char('1'), mods, true);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].kind, KeyEventKind::Char);
        assert_eq!(events[1].character, '!' as u16);
        assert_eq!(events[1].windows_key_code, 49);
    }

    #[test]
    fn modifier_press_reports_itself_held() {
        let events = key_event_sequence(HostKey::Shift, Modifiers::default(), true);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].windows_key_code, 16);
        assert_ne!(events[0].modifiers & flags::SHIFT_DOWN, 0);
    }

    #[test]
    fn modifier_release_does_not_force_flag() {
        let events = key_event_sequence(HostKey::Shift, Modifiers::default(), false);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, KeyEventKind::KeyUp);
        assert_eq!(events[0].modifiers & flags::SHIFT_DOWN, 0);
    }

    #[test]
    fn events_carry_modifier_flags() {
        let mods = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        let events = key_event_sequence(HostKey::Char('c'), mods, true);
        for event in &events {
            assert_ne!(event.modifiers & flags::CONTROL_DOWN, 0);
        }
    }

    #[test]
    fn native_code_mirrors_virtual_code() {
        let events = key_event_sequence(HostKey::Enter, Modifiers::default(), true);
        for event in &events {
            assert_eq!(event.windows_key_code, event.native_key_code);
        }
    }
}
