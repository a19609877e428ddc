//! Logical key to Windows Virtual Key (VK) code translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! `KEY_TO_VK_TABLE` is a compile-time constant array with one entry per
//! [`InputKey`] variant, indexed by the variant's ordinal.  Position 0 holds
//! the no-op code 0 for `InputKey::Undefined`; every other position holds the
//! VK code the `SendInput` keyboard path expects in `KEYBDINPUT.wVk`.
//!
//! Every mapped code is distinct with one deliberate exception: both
//! `Enter` and `NumPadEnter` produce `VK_RETURN` (0x0D), because the VK
//! space does not distinguish the two without the extended-key scan bit.

use crate::event::{InputKey, KEY_COUNT};

/// Translates a logical key to its Windows VK code.
///
/// Returns 0 for [`InputKey::Undefined`].  Never panics; the table covers
/// every variant of the closed set.
pub fn key_to_vk(key: InputKey) -> u16 {
    KEY_TO_VK_TABLE[key.ordinal()]
}

/// Complete InputKey → VK mapping, indexed by key ordinal.
///
/// Reference: https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes
const KEY_TO_VK_TABLE: [u16; KEY_COUNT] = {
    use InputKey as K;
    let mut t = [0u16; KEY_COUNT];

    // Letters (VK_A=0x41 … VK_Z=0x5A)
    t[K::A as usize] = 0x41;
    t[K::B as usize] = 0x42;
    t[K::C as usize] = 0x43;
    t[K::D as usize] = 0x44;
    t[K::E as usize] = 0x45;
    t[K::F as usize] = 0x46;
    t[K::G as usize] = 0x47;
    t[K::H as usize] = 0x48;
    t[K::I as usize] = 0x49;
    t[K::J as usize] = 0x4A;
    t[K::K as usize] = 0x4B;
    t[K::L as usize] = 0x4C;
    t[K::M as usize] = 0x4D;
    t[K::N as usize] = 0x4E;
    t[K::O as usize] = 0x4F;
    t[K::P as usize] = 0x50;
    t[K::Q as usize] = 0x51;
    t[K::R as usize] = 0x52;
    t[K::S as usize] = 0x53;
    t[K::T as usize] = 0x54;
    t[K::U as usize] = 0x55;
    t[K::V as usize] = 0x56;
    t[K::W as usize] = 0x57;
    t[K::X as usize] = 0x58;
    t[K::Y as usize] = 0x59;
    t[K::Z as usize] = 0x5A;

    // Number bar (VK_0=0x30 … VK_9=0x39)
    t[K::NumBar0 as usize] = 0x30;
    t[K::NumBar1 as usize] = 0x31;
    t[K::NumBar2 as usize] = 0x32;
    t[K::NumBar3 as usize] = 0x33;
    t[K::NumBar4 as usize] = 0x34;
    t[K::NumBar5 as usize] = 0x35;
    t[K::NumBar6 as usize] = 0x36;
    t[K::NumBar7 as usize] = 0x37;
    t[K::NumBar8 as usize] = 0x38;
    t[K::NumBar9 as usize] = 0x39;

    // Numeric keypad (VK_NUMPAD0=0x60 … VK_NUMPAD9=0x69)
    t[K::NumPad0 as usize] = 0x60;
    t[K::NumPad1 as usize] = 0x61;
    t[K::NumPad2 as usize] = 0x62;
    t[K::NumPad3 as usize] = 0x63;
    t[K::NumPad4 as usize] = 0x64;
    t[K::NumPad5 as usize] = 0x65;
    t[K::NumPad6 as usize] = 0x66;
    t[K::NumPad7 as usize] = 0x67;
    t[K::NumPad8 as usize] = 0x68;
    t[K::NumPad9 as usize] = 0x69;

    t[K::NumLock as usize] = 0x90;     // VK_NUMLOCK
    t[K::NumPadSlash as usize] = 0x6F; // VK_DIVIDE
    t[K::NumPadMul as usize] = 0x6A;   // VK_MULTIPLY
    t[K::NumPadAdd as usize] = 0x6B;   // VK_ADD
    t[K::NumPadSub as usize] = 0x6D;   // VK_SUBTRACT
    t[K::NumPadDot as usize] = 0x6E;   // VK_DECIMAL
    t[K::NumPadEnter as usize] = 0x0D; // VK_RETURN (collides with Enter)

    // Modifiers
    t[K::LeftShift as usize] = 0xA0;    // VK_LSHIFT
    t[K::LeftControl as usize] = 0xA2;  // VK_LCONTROL
    t[K::LeftAlt as usize] = 0xA4;      // VK_LMENU
    t[K::LeftSuper as usize] = 0x5B;    // VK_LWIN
    t[K::RightShift as usize] = 0xA1;   // VK_RSHIFT
    t[K::RightControl as usize] = 0xA3; // VK_RCONTROL
    t[K::RightAlt as usize] = 0xA5;     // VK_RMENU
    t[K::RightSuper as usize] = 0x5C;   // VK_RWIN

    // Arrows
    t[K::ArrowUp as usize] = 0x26;    // VK_UP
    t[K::ArrowRight as usize] = 0x27; // VK_RIGHT
    t[K::ArrowDown as usize] = 0x28;  // VK_DOWN
    t[K::ArrowLeft as usize] = 0x25;  // VK_LEFT

    // Navigation and editing
    t[K::Enter as usize] = 0x0D;       // VK_RETURN
    t[K::Backspace as usize] = 0x08;   // VK_BACK
    t[K::Insert as usize] = 0x2D;      // VK_INSERT
    t[K::Home as usize] = 0x24;        // VK_HOME
    t[K::PageUp as usize] = 0x21;      // VK_PRIOR
    t[K::PageDown as usize] = 0x22;    // VK_NEXT
    t[K::Delete as usize] = 0x2E;      // VK_DELETE
    t[K::End as usize] = 0x23;         // VK_END
    t[K::PrintScreen as usize] = 0x2C; // VK_SNAPSHOT
    t[K::ScrollLock as usize] = 0x91;  // VK_SCROLL
    t[K::Pause as usize] = 0x13;       // VK_PAUSE
    t[K::CapsLock as usize] = 0x14;    // VK_CAPITAL
    t[K::Tab as usize] = 0x09;         // VK_TAB
    t[K::Escape as usize] = 0x1B;      // VK_ESCAPE
    t[K::Space as usize] = 0x20;       // VK_SPACE

    // Punctuation (OEM keys, US layout positions)
    t[K::Grave as usize] = 0xC0;        // VK_OEM_3
    t[K::Minus as usize] = 0xBD;        // VK_OEM_MINUS
    t[K::Equal as usize] = 0xBB;        // VK_OEM_PLUS
    t[K::LBracket as usize] = 0xDB;     // VK_OEM_4
    t[K::RBracket as usize] = 0xDD;     // VK_OEM_6
    t[K::Backslash as usize] = 0xDC;    // VK_OEM_5
    t[K::Semicolon as usize] = 0xBA;    // VK_OEM_1
    t[K::Apostrophe as usize] = 0xDE;   // VK_OEM_7
    t[K::Comma as usize] = 0xBC;        // VK_OEM_COMMA
    t[K::Period as usize] = 0xBE;       // VK_OEM_PERIOD
    t[K::ForwardSlash as usize] = 0xBF; // VK_OEM_2

    // Function keys (VK_F1=0x70 … VK_F24=0x87)
    t[K::F1 as usize] = 0x70;
    t[K::F2 as usize] = 0x71;
    t[K::F3 as usize] = 0x72;
    t[K::F4 as usize] = 0x73;
    t[K::F5 as usize] = 0x74;
    t[K::F6 as usize] = 0x75;
    t[K::F7 as usize] = 0x76;
    t[K::F8 as usize] = 0x77;
    t[K::F9 as usize] = 0x78;
    t[K::F10 as usize] = 0x79;
    t[K::F11 as usize] = 0x7A;
    t[K::F12 as usize] = 0x7B;
    t[K::F13 as usize] = 0x7C;
    t[K::F14 as usize] = 0x7D;
    t[K::F15 as usize] = 0x7E;
    t[K::F16 as usize] = 0x7F;
    t[K::F17 as usize] = 0x80;
    t[K::F18 as usize] = 0x81;
    t[K::F19 as usize] = 0x82;
    t[K::F20 as usize] = 0x83;
    t[K::F21 as usize] = 0x84;
    t[K::F22 as usize] = 0x85;
    t[K::F23 as usize] = 0x86;
    t[K::F24 as usize] = 0x87;

    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Well-known VK codes, spot-checked against winuser.h.
    const SPOT_CHECKS: &[(InputKey, u16)] = &[
        (InputKey::A, 0x41),
        (InputKey::Z, 0x5A),
        (InputKey::NumBar0, 0x30),
        (InputKey::NumBar9, 0x39),
        (InputKey::NumPad0, 0x60),
        (InputKey::NumPad9, 0x69),
        (InputKey::Enter, 0x0D),
        (InputKey::Escape, 0x1B),
        (InputKey::Backspace, 0x08),
        (InputKey::Tab, 0x09),
        (InputKey::Space, 0x20),
        (InputKey::LeftShift, 0xA0),
        (InputKey::RightControl, 0xA3),
        (InputKey::LeftSuper, 0x5B),
        (InputKey::ArrowUp, 0x26),
        (InputKey::ArrowLeft, 0x25),
        (InputKey::PageUp, 0x21),
        (InputKey::PageDown, 0x22),
        (InputKey::PrintScreen, 0x2C),
        (InputKey::Grave, 0xC0),
        (InputKey::ForwardSlash, 0xBF),
        (InputKey::F1, 0x70),
        (InputKey::F12, 0x7B),
        (InputKey::F24, 0x87),
    ];

    #[test]
    fn test_spot_checked_keys_map_to_expected_vk_codes() {
        for &(key, vk) in SPOT_CHECKS {
            assert_eq!(key_to_vk(key), vk, "{key:?} should map to 0x{vk:02X}");
        }
    }

    #[test]
    fn test_undefined_maps_to_noop_code() {
        assert_eq!(key_to_vk(InputKey::Undefined), 0);
    }

    #[test]
    fn test_every_defined_key_has_a_nonzero_code() {
        for &key in &InputKey::ALL {
            if key != InputKey::Undefined {
                assert_ne!(key_to_vk(key), 0, "{key:?} has no VK mapping");
            }
        }
    }

    #[test]
    fn test_codes_are_distinct_except_the_return_collision() {
        let mut seen: HashMap<u16, InputKey> = HashMap::new();
        for &key in &InputKey::ALL {
            if key == InputKey::Undefined {
                continue;
            }
            let vk = key_to_vk(key);
            if let Some(prior) = seen.insert(vk, key) {
                // NumPadEnter and Enter share VK_RETURN; nothing else may collide.
                assert_eq!(
                    (prior, key),
                    (InputKey::NumPadEnter, InputKey::Enter),
                    "unexpected VK collision: {prior:?} and {key:?} both map to 0x{vk:02X}"
                );
            }
        }
    }

    #[test]
    fn test_lookup_never_panics_for_any_key() {
        for &key in &InputKey::ALL {
            let _ = key_to_vk(key);
        }
    }
}
