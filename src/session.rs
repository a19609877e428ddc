//! The injector session: the stateful public surface of the library.
//!
//! A session owns a platform backend and the last-cursor-position state used
//! to detect movement between mouse events.  Construct one session per input-
//! producing context; the `&mut self` operations serialize calls within it,
//! and concurrent contexts each get their own session instead of racing a
//! process-wide global.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::backend::{BackendError, InputBackend};
use crate::event::{KeyEvent, MouseEvent, TargetHandle};
use crate::packet::{build_key_packet, build_mouse_packets};

/// Failure of a single injection call.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The target handle does not refer to a live native window.
    #[error("target handle does not refer to a live native window")]
    InvalidTarget,
    /// The native facility accepted fewer events than were submitted.
    /// Raised only under [`SessionConfig::strict_delivery`].
    #[error("native facility delivered {delivered} of {submitted} submitted events")]
    InjectionFailed { submitted: usize, delivered: usize },
    /// The platform backend itself failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Tunables for an [`InjectorSession`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// When true, a native submission that reports fewer delivered events
    /// than were submitted becomes [`InjectError::InjectionFailed`].  When
    /// false (the default), short deliveries are logged at `warn` and the
    /// call still succeeds.
    pub strict_delivery: bool,
}

/// A keyboard/mouse injection session bound to one platform backend.
///
/// # Targeting contract
///
/// The target handle passed to each operation is a **liveness precondition
/// only**.  The native facility synthesizes events into the system input
/// queue, so they reach whatever window currently holds the input focus,
/// which is not necessarily the validated target.  Callers that need the
/// events to land in a specific window must bring that window to the
/// foreground themselves before injecting.
pub struct InjectorSession<B: InputBackend> {
    backend: B,
    config: SessionConfig,
    last_pos: (i32, i32),
}

impl<B: InputBackend> InjectorSession<B> {
    /// Creates a session with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, SessionConfig::default())
    }

    pub fn with_config(backend: B, config: SessionConfig) -> Self {
        Self {
            backend,
            config,
            last_pos: (0, 0),
        }
    }

    /// The position of the most recently injected mouse event.  Starts at
    /// (0, 0); a first event at the origin therefore carries no movement.
    pub fn last_cursor_position(&self) -> (i32, i32) {
        self.last_pos
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Injects one keyboard event.
    ///
    /// Exactly one native descriptor is submitted per call; there is no
    /// retry or batching across calls.  See the [targeting
    /// contract](InjectorSession#targeting-contract).
    ///
    /// # Errors
    ///
    /// [`InjectError::InvalidTarget`] if `target` fails the liveness check;
    /// nothing is submitted and no session state changes.  Backend and
    /// delivery failures as described on [`InjectError`].
    pub fn inject_keyboard_event(
        &mut self,
        target: TargetHandle,
        event: KeyEvent,
    ) -> Result<(), InjectError> {
        if !self.backend.is_target_live(target) {
            debug!(?target, "rejecting key injection: target not live");
            return Err(InjectError::InvalidTarget);
        }

        let packet = build_key_packet(event);
        trace!(code = packet.code, key_up = packet.key_up, "submitting key packet");
        let delivered = self.backend.submit_key(packet)?;
        self.check_delivery(1, delivered)
    }

    /// Injects one mouse event.
    ///
    /// Movement is detected against the session's last cursor position,
    /// which is updated to the event's position on every successful
    /// precondition check.  Named-button, wheel, and movement changes share
    /// one descriptor; extended buttons (Button3/Button4) add a second
    /// descriptor submitted in the same native call.  See the [targeting
    /// contract](InjectorSession#targeting-contract).
    ///
    /// # Errors
    ///
    /// [`InjectError::InvalidTarget`] if `target` fails the liveness check;
    /// nothing is submitted and the last cursor position is not updated.
    /// Backend and delivery failures as described on [`InjectError`].
    pub fn inject_mouse_event(
        &mut self,
        target: TargetHandle,
        event: MouseEvent,
    ) -> Result<(), InjectError> {
        if !self.backend.is_target_live(target) {
            debug!(?target, "rejecting mouse injection: target not live");
            return Err(InjectError::InvalidTarget);
        }

        let (primary, secondary) = build_mouse_packets(event, self.last_pos);
        self.last_pos = (event.x, event.y);

        trace!(
            x = event.x,
            y = event.y,
            flags = primary.flags,
            extended = secondary.is_some(),
            "submitting mouse packets"
        );
        let (submitted, delivered) = match secondary {
            Some(extra) => (2, self.backend.submit_mouse(&[primary, extra])?),
            None => (1, self.backend.submit_mouse(&[primary])?),
        };
        self.check_delivery(submitted, delivered)
    }

    fn check_delivery(&self, submitted: usize, delivered: usize) -> Result<(), InjectError> {
        if delivered < submitted {
            warn!(submitted, delivered, "native facility delivered fewer events than submitted");
            if self.config.strict_delivery {
                return Err(InjectError::InjectionFailed { submitted, delivered });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::event::{InputKey, InputState, MouseButton};

    const TARGET: TargetHandle = TargetHandle::from_raw(0x5150);

    #[test]
    fn test_session_starts_at_origin() {
        let backend = MockBackend::new();
        let session = InjectorSession::new(&backend);
        assert_eq!(session.last_cursor_position(), (0, 0));
    }

    #[test]
    fn test_invalid_target_fails_before_submission_and_state_update() {
        let backend = MockBackend::new();
        let mut session = InjectorSession::new(&backend);

        let key = session.inject_keyboard_event(
            TargetHandle::NULL,
            KeyEvent::new(InputKey::A, InputState::Press),
        );
        let mouse = session.inject_mouse_event(TargetHandle::NULL, MouseEvent::moved(10, 20));

        assert!(matches!(key, Err(InjectError::InvalidTarget)));
        assert!(matches!(mouse, Err(InjectError::InvalidTarget)));
        assert_eq!(backend.submission_count(), 0);
        assert_eq!(session.last_cursor_position(), (0, 0));
    }

    #[test]
    fn test_mouse_injection_updates_last_cursor_position() {
        let backend = MockBackend::new();
        let mut session = InjectorSession::new(&backend);

        session.inject_mouse_event(TARGET, MouseEvent::moved(100, 100)).unwrap();
        assert_eq!(session.last_cursor_position(), (100, 100));
    }

    #[test]
    fn test_short_delivery_is_ignored_by_default() {
        let backend = MockBackend::new();
        backend.report_zero_delivered(true);
        let mut session = InjectorSession::new(&backend);

        session
            .inject_keyboard_event(TARGET, KeyEvent::new(InputKey::A, InputState::Press))
            .unwrap();
    }

    #[test]
    fn test_short_delivery_fails_under_strict_config() {
        let backend = MockBackend::new();
        backend.report_zero_delivered(true);
        let mut session = InjectorSession::with_config(
            &backend,
            SessionConfig { strict_delivery: true },
        );

        let result =
            session.inject_keyboard_event(TARGET, KeyEvent::new(InputKey::A, InputState::Press));
        assert!(matches!(
            result,
            Err(InjectError::InjectionFailed { submitted: 1, delivered: 0 })
        ));
    }

    #[test]
    fn test_backend_failure_propagates() {
        let backend = MockBackend::new();
        backend.fail_submissions(true);
        let mut session = InjectorSession::new(&backend);

        let result =
            session.inject_keyboard_event(TARGET, KeyEvent::new(InputKey::A, InputState::Press));
        assert!(matches!(result, Err(InjectError::Backend(_))));
    }

    #[test]
    fn test_stale_target_rejected_after_window_dies() {
        let backend = MockBackend::new();
        let mut session = InjectorSession::new(&backend);

        session.inject_mouse_event(TARGET, MouseEvent::moved(5, 5)).unwrap();
        backend.kill_target(TARGET);

        let result = session.inject_mouse_event(TARGET, MouseEvent::moved(6, 6));
        assert!(matches!(result, Err(InjectError::InvalidTarget)));
        assert_eq!(session.last_cursor_position(), (5, 5));
    }
}
