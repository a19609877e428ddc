//! # syninput
//!
//! Synthetic keyboard and mouse input injection toward a target window.
//!
//! Callers describe input in a platform-agnostic model (logical keys, mouse
//! buttons, press/release state, absolute cursor position, wheel notches)
//! and the library translates it into the native input-injection primitives
//! of the host OS.  Injected events are indistinguishable, to listening
//! applications, from genuine hardware input.
//!
//! The crate is layered the same way at every seam:
//!
//! - **`event`** – the logical input model: [`InputKey`], [`MouseButton`],
//!   [`KeyEvent`], [`MouseEvent`], and the opaque [`TargetHandle`].
//!
//! - **`keymap`** – the compile-time table translating logical keys to
//!   native key codes.
//!
//! - **`packet`** – pure construction of native descriptors (flag selection,
//!   wheel scaling, movement detection), testable on any host.
//!
//! - **`backend`** – the [`InputBackend`] capability trait with one concrete
//!   implementation per supported host (Windows today, via `SendInput`) and
//!   a recording mock for tests.
//!
//! - **`session`** – the public surface: an [`InjectorSession`] owns a
//!   backend plus the last-cursor-position state used to detect movement,
//!   one session per input-producing context.
//!
//! # Example
//!
//! ```no_run
//! use syninput::{
//!     backend::native_backend, InjectorSession, InputKey, InputState, KeyEvent, TargetHandle,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = InjectorSession::new(native_backend()?);
//! let target = TargetHandle::from_raw(0x000A_0B2C); // a live native window handle
//!
//! session.inject_keyboard_event(target, KeyEvent::new(InputKey::A, InputState::Press))?;
//! session.inject_keyboard_event(target, KeyEvent::new(InputKey::A, InputState::Release))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Targeting caveat
//!
//! The handle passed to each injection call is validated for liveness, but
//! the native facility delivers events to the system input focus, not to the
//! handle.  See [`InjectorSession`] for the full contract.

pub mod backend;
pub mod event;
pub mod keymap;
pub mod packet;
pub mod session;

pub use backend::{BackendError, InputBackend};
pub use event::{InputKey, InputState, KeyEvent, MouseButton, MouseEvent, TargetHandle};
pub use session::{InjectError, InjectorSession, SessionConfig};
