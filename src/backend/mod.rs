//! Platform backends for the native input-injection facility.
//!
//! [`InputBackend`] is the capability seam between the pure translation
//! layer and the host OS.  Exactly one concrete backend exists per supported
//! host; [`native_backend`] selects it at startup and fails on hosts with no
//! implementation.  [`MockBackend`](mock::MockBackend) compiles everywhere
//! and records calls for tests.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

use thiserror::Error;

use crate::event::TargetHandle;
use crate::packet::{KeyPacket, MousePacket};

/// Failure inside a platform backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("input injection is not supported on this host")]
    Unsupported,
    #[error("native input call failed: {0}")]
    Native(String),
}

/// The native injection capability a platform must provide.
///
/// Submissions are synchronous and unbatched across calls; each `submit_*`
/// call hands the given packets to the OS in one native call and returns the
/// number of events the OS reports as delivered.
pub trait InputBackend {
    /// Whether `target` currently refers to a live native window.  No side
    /// effects.
    fn is_target_live(&self, target: TargetHandle) -> bool;

    /// Submits one keyboard descriptor.  Returns the delivered-event count.
    fn submit_key(&self, packet: KeyPacket) -> Result<usize, BackendError>;

    /// Submits mouse descriptors as one native call.  Returns the
    /// delivered-event count.
    fn submit_mouse(&self, packets: &[MousePacket]) -> Result<usize, BackendError>;
}

// Sessions borrow their backend in tests, so a shared reference forwards.
impl<B: InputBackend + ?Sized> InputBackend for &B {
    fn is_target_live(&self, target: TargetHandle) -> bool {
        (**self).is_target_live(target)
    }

    fn submit_key(&self, packet: KeyPacket) -> Result<usize, BackendError> {
        (**self).submit_key(packet)
    }

    fn submit_mouse(&self, packets: &[MousePacket]) -> Result<usize, BackendError> {
        (**self).submit_mouse(packets)
    }
}

/// Returns the concrete backend for the host OS.
///
/// # Errors
///
/// Returns [`BackendError::Unsupported`] on hosts without an implementation.
#[cfg(target_os = "windows")]
pub fn native_backend() -> Result<windows::WindowsBackend, BackendError> {
    Ok(windows::WindowsBackend::new())
}

/// Returns the concrete backend for the host OS.
///
/// # Errors
///
/// Returns [`BackendError::Unsupported`] on hosts without an implementation.
#[cfg(not(target_os = "windows"))]
pub fn native_backend() -> Result<mock::MockBackend, BackendError> {
    Err(BackendError::Unsupported)
}
