//! Windows backend: `IsWindow` for target liveness, `SendInput` for
//! submission.
//!
//! `SendInput` synthesizes events into the system input queue, which routes
//! them to whatever window holds the input focus.  The target handle is a
//! liveness precondition only; see the contract note on
//! [`InjectorSession`](crate::session::InjectorSession).

#![cfg(target_os = "windows")]

use tracing::trace;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_KEYUP, MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::IsWindow;

use crate::backend::{BackendError, InputBackend};
use crate::event::TargetHandle;
use crate::packet::{KeyPacket, MousePacket};

/// Windows implementation of [`InputBackend`].
pub struct WindowsBackend;

impl WindowsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBackend for WindowsBackend {
    fn is_target_live(&self, target: TargetHandle) -> bool {
        let hwnd = HWND(target.as_raw() as *mut core::ffi::c_void);
        // SAFETY: IsWindow accepts any handle value, including null and stale ones.
        unsafe { IsWindow(hwnd) }.as_bool()
    }

    fn submit_key(&self, packet: KeyPacket) -> Result<usize, BackendError> {
        let input = INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(packet.code),
                    wScan: 0,
                    dwFlags: if packet.key_up {
                        KEYEVENTF_KEYUP
                    } else {
                        KEYBD_EVENT_FLAGS(0)
                    },
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        send(&[input])
    }

    fn submit_mouse(&self, packets: &[MousePacket]) -> Result<usize, BackendError> {
        let inputs: Vec<INPUT> = packets
            .iter()
            .map(|p| INPUT {
                r#type: INPUT_MOUSE,
                Anonymous: INPUT_0 {
                    mi: MOUSEINPUT {
                        dx: p.x,
                        dy: p.y,
                        mouseData: p.data as u32,
                        dwFlags: MOUSE_EVENT_FLAGS(p.flags),
                        time: 0,
                        dwExtraInfo: 0,
                    },
                },
            })
            .collect();
        send(&inputs)
    }
}

fn send(inputs: &[INPUT]) -> Result<usize, BackendError> {
    // SAFETY: inputs are fully initialized INPUT structures on the stack.
    let delivered = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) } as usize;
    trace!(submitted = inputs.len(), delivered, "SendInput");

    // A zero return with an error code set means the call was blocked
    // entirely (for example by UIPI toward an elevated process).
    if delivered == 0 && !inputs.is_empty() {
        let err = windows::core::Error::from_win32();
        if err.code().is_err() {
            return Err(BackendError::Native(err.to_string()));
        }
    }
    Ok(delivered)
}
