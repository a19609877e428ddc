//! Translation from logical keys to native key codes.
//!
//! The mapping is a fixed compile-time table, total over the closed
//! [`InputKey`](crate::event::InputKey) set.  Only the Windows Virtual Key
//! direction exists today; additional platforms add their own table module
//! here and [`native_key_code`] selects it for the host.

pub mod windows_vk;

use crate::event::InputKey;

/// Translates a logical key to the native key code for the host platform.
///
/// Returns the native no-op code 0 for [`InputKey::Undefined`]; every other
/// key yields a platform-valid code.  Lookup is an O(1) array index over the
/// key's ordinal.
pub fn native_key_code(key: InputKey) -> u16 {
    windows_vk::key_to_vk(key)
}
