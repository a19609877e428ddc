//! The logical input model: platform-agnostic keys, buttons, and event values.
//!
//! Everything in this module is a plain value type with no OS dependencies.
//! Callers describe the input they want injected in these terms; the
//! [`keymap`](crate::keymap) and [`packet`](crate::packet) modules translate
//! them into native descriptors at the injection boundary.

use serde::{Deserialize, Serialize};

/// Number of [`InputKey`] variants, including [`InputKey::Undefined`].
pub const KEY_COUNT: usize = 116;

/// A logical keyboard key.
///
/// This is a closed set fixed at compile time: callers select from the
/// enumeration, they never construct new key values at runtime.  The numeric
/// discriminant is the key's ordinal position and indexes the native
/// translation table in [`crate::keymap`].
///
/// [`InputKey::Undefined`] is the sentinel for "no key"; it translates to the
/// native no-op code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum InputKey {
    Undefined,
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    // Number bar (the digit row above the letters)
    NumBar0, NumBar1, NumBar2, NumBar3, NumBar4,
    NumBar5, NumBar6, NumBar7, NumBar8, NumBar9,
    // Numeric keypad
    NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
    NumPad5, NumPad6, NumPad7, NumPad8, NumPad9,
    NumLock, NumPadSlash, NumPadMul, NumPadAdd, NumPadSub, NumPadDot, NumPadEnter,
    // Modifiers and arrows
    LeftShift, LeftControl, LeftAlt, LeftSuper,
    RightShift, RightControl, RightAlt, RightSuper,
    ArrowUp, ArrowRight, ArrowDown, ArrowLeft,
    // Navigation and editing
    Enter, Backspace, Insert, Home, PageUp, PageDown, Delete, End,
    PrintScreen, ScrollLock, Pause, CapsLock, Tab, Escape, Space,
    // Punctuation
    Grave, Minus, Equal, LBracket, RBracket, Backslash,
    Semicolon, Apostrophe, Comma, Period, ForwardSlash,
    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
}

impl InputKey {
    /// Every key variant in ordinal order.  Used by tests and benchmarks to
    /// iterate the closed set.
    pub const ALL: [InputKey; KEY_COUNT] = {
        use InputKey::*;
        [
            Undefined,
            A, B, C, D, E, F, G, H, I, J, K, L, M,
            N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            NumBar0, NumBar1, NumBar2, NumBar3, NumBar4,
            NumBar5, NumBar6, NumBar7, NumBar8, NumBar9,
            NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
            NumPad5, NumPad6, NumPad7, NumPad8, NumPad9,
            NumLock, NumPadSlash, NumPadMul, NumPadAdd, NumPadSub, NumPadDot, NumPadEnter,
            LeftShift, LeftControl, LeftAlt, LeftSuper,
            RightShift, RightControl, RightAlt, RightSuper,
            ArrowUp, ArrowRight, ArrowDown, ArrowLeft,
            Enter, Backspace, Insert, Home, PageUp, PageDown, Delete, End,
            PrintScreen, ScrollLock, Pause, CapsLock, Tab, Escape, Space,
            Grave, Minus, Equal, LBracket, RBracket, Backslash,
            Semicolon, Apostrophe, Comma, Period, ForwardSlash,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
        ]
    };

    /// Ordinal position of this key within the enumeration.
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Whether an input transitioned to pressed or to released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputState {
    Press,
    Release,
}

/// A logical mouse button.
///
/// Five slots plus the [`MouseButton::Undefined`] sentinel.  The first three
/// slots carry the conventional names as associated constants, since Rust
/// enums cannot alias variants:
///
/// ```
/// use syninput::event::MouseButton;
/// assert_eq!(MouseButton::LEFT, MouseButton::Button0);
/// assert_eq!(MouseButton::RIGHT, MouseButton::Button1);
/// assert_eq!(MouseButton::MIDDLE, MouseButton::Button2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Undefined,
    Button0,
    Button1,
    Button2,
    Button3,
    Button4,
}

impl MouseButton {
    pub const LEFT: MouseButton = MouseButton::Button0;
    pub const RIGHT: MouseButton = MouseButton::Button1;
    pub const MIDDLE: MouseButton = MouseButton::Button2;
}

/// A keyboard key event: which key, and whether it went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: InputKey,
    pub state: InputState,
}

impl KeyEvent {
    pub const fn new(key: InputKey, state: InputState) -> Self {
        Self { key, state }
    }
}

/// A mouse event: absolute cursor position, wheel notches, and button state.
///
/// `x`/`y` are screen-space coordinates on the virtual desktop.  `scroll`
/// counts wheel notches; positive values mean the wheel rolled forward, away
/// from the user.  `button` is [`MouseButton::Undefined`] for pure
/// move/scroll events, in which case `state` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MouseEvent {
    pub x: i32,
    pub y: i32,
    pub scroll: i8,
    pub button: MouseButton,
    pub state: InputState,
}

impl MouseEvent {
    /// A pure cursor-move event with no wheel or button change.
    pub const fn moved(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            scroll: 0,
            button: MouseButton::Undefined,
            state: InputState::Release,
        }
    }
}

/// An opaque reference to the native window that should receive the injection.
///
/// This is a typed alias over whatever raw handle value the platform uses
/// (an `HWND` on Windows).  The caller owns the underlying native object;
/// the library never creates, retains, or releases it.  It only casts the
/// value back to the native type for the duration of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(isize);

impl TargetHandle {
    /// The null handle.  Never refers to a live window.
    pub const NULL: TargetHandle = TargetHandle(0);

    /// Wraps a raw platform handle value.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw platform handle value.
    pub const fn as_raw(self) -> isize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_table_covers_every_ordinal_exactly_once() {
        for (i, key) in InputKey::ALL.iter().enumerate() {
            assert_eq!(key.ordinal(), i, "{key:?} is out of place in ALL");
        }
        assert_eq!(InputKey::ALL.len(), KEY_COUNT);
    }

    #[test]
    fn test_named_button_aliases_match_first_three_slots() {
        assert_eq!(MouseButton::LEFT, MouseButton::Button0);
        assert_eq!(MouseButton::RIGHT, MouseButton::Button1);
        assert_eq!(MouseButton::MIDDLE, MouseButton::Button2);
    }

    #[test]
    fn test_null_handle_is_null() {
        assert!(TargetHandle::NULL.is_null());
        assert!(!TargetHandle::from_raw(0x1234).is_null());
        assert_eq!(TargetHandle::from_raw(0x1234).as_raw(), 0x1234);
    }
}
