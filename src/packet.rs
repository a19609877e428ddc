//! Native input descriptors and the pure translation that builds them.
//!
//! Packets are a platform-neutral mirror of the native `SendInput` payload
//! (`KEYBDINPUT`/`MOUSEINPUT`) so the whole translation contract can be unit
//! tested on any host.  Backends convert packets to the real native structs
//! at the submission boundary; the flag values below are bit-identical to
//! the `MOUSEEVENTF_*` constants, which the Windows backend asserts.

use crate::event::{InputState, KeyEvent, MouseButton, MouseEvent};
use crate::keymap;

/// Native mouse-event flag bits carried by [`MousePacket::flags`].
pub mod flags {
    /// Cursor moved since the previous event.
    pub const MOVE: u32 = 0x0001;
    pub const LEFT_DOWN: u32 = 0x0002;
    pub const LEFT_UP: u32 = 0x0004;
    pub const RIGHT_DOWN: u32 = 0x0008;
    pub const RIGHT_UP: u32 = 0x0010;
    pub const MIDDLE_DOWN: u32 = 0x0020;
    pub const MIDDLE_UP: u32 = 0x0040;
    /// An extended button went down; which one is in [`super::MousePacket::data`].
    pub const X_DOWN: u32 = 0x0080;
    pub const X_UP: u32 = 0x0100;
    /// Wheel rotated; the signed distance is in [`super::MousePacket::data`].
    pub const WHEEL: u32 = 0x0800;
    /// Coordinates span the whole virtual desktop, not just the primary monitor.
    pub const VIRTUAL_DESK: u32 = 0x4000;
    /// Coordinates are absolute rather than deltas.
    pub const ABSOLUTE: u32 = 0x8000;

    /// One notch of wheel rotation, in native wheel-distance units.
    pub const WHEEL_NOTCH: i32 = 120;

    /// Extended-button identifiers carried in [`super::MousePacket::data`].
    pub const XBUTTON1: i32 = 1;
    pub const XBUTTON2: i32 = 2;
}

/// One native keyboard descriptor.
///
/// Timing and auxiliary native fields are always zero, so only the key code
/// and the up/down direction are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPacket {
    /// Native virtual-key code; 0 is the no-op code.
    pub code: u16,
    /// Set iff the event is a release.
    pub key_up: bool,
}

/// One native mouse descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePacket {
    pub x: i32,
    pub y: i32,
    /// Wheel distance, extended-button identifier, or 0, depending on `flags`.
    pub data: i32,
    /// OR of [`flags`] bits.
    pub flags: u32,
}

impl MousePacket {
    pub const fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}

/// Translates a key event into its single native descriptor.
pub fn build_key_packet(event: KeyEvent) -> KeyPacket {
    KeyPacket {
        code: keymap::native_key_code(event.key),
        key_up: event.state == InputState::Release,
    }
}

/// Translates a mouse event into one or two native descriptors.
///
/// The primary packet always carries the absolute position and is produced
/// for every event.  Wheel, movement, and named-button flags are combined
/// into it, so a call that scrolls, moves, and clicks at once still submits
/// a single multi-flag descriptor the native facility processes atomically.
/// Movement is detected against `last`, the position of the previous event.
///
/// Extended buttons (Button3/Button4) cannot share a descriptor with the
/// wheel because both use the data field, so they produce a secondary
/// packet carrying the extended-button identifier and the X up/down flag.
pub fn build_mouse_packets(
    event: MouseEvent,
    last: (i32, i32),
) -> (MousePacket, Option<MousePacket>) {
    let mut primary = MousePacket {
        x: event.x,
        y: event.y,
        data: event.scroll as i32 * flags::WHEEL_NOTCH,
        flags: flags::ABSOLUTE | flags::VIRTUAL_DESK,
    };

    if event.scroll != 0 {
        primary.flags |= flags::WHEEL;
    }
    if (event.x, event.y) != last {
        primary.flags |= flags::MOVE;
    }

    let pressed = event.state == InputState::Press;
    let secondary = match event.button {
        MouseButton::Button0 => {
            primary.flags |= if pressed { flags::LEFT_DOWN } else { flags::LEFT_UP };
            None
        }
        MouseButton::Button1 => {
            primary.flags |= if pressed { flags::RIGHT_DOWN } else { flags::RIGHT_UP };
            None
        }
        MouseButton::Button2 => {
            primary.flags |= if pressed { flags::MIDDLE_DOWN } else { flags::MIDDLE_UP };
            None
        }
        MouseButton::Button3 | MouseButton::Button4 => Some(MousePacket {
            x: event.x,
            y: event.y,
            data: if event.button == MouseButton::Button3 {
                flags::XBUTTON1
            } else {
                flags::XBUTTON2
            },
            flags: flags::ABSOLUTE
                | flags::VIRTUAL_DESK
                | if pressed { flags::X_DOWN } else { flags::X_UP },
        }),
        MouseButton::Undefined => None,
    };

    (primary, secondary)
}
