//! Mock backend for unit and integration testing.
//!
//! The real backend makes OS calls that require a desktop session and
//! actually press keys on the test machine.  `MockBackend` replaces them
//! with in-memory recording: every submitted packet and liveness query is
//! pushed into a `Mutex<Vec<...>>` so assertions can inspect exactly what
//! was submitted and in what order.
//!
//! Failure injection:
//!
//! - [`MockBackend::kill_target`] makes a specific handle report not-live.
//! - [`MockBackend::report_zero_delivered`] makes submissions claim the OS
//!   delivered nothing, for testing short-delivery handling.
//! - [`MockBackend::fail_submissions`] makes submissions return a native
//!   error outright.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::backend::{BackendError, InputBackend};
use crate::event::TargetHandle;
use crate::packet::{KeyPacket, MousePacket};

/// A backend that records all calls without touching the OS.
///
/// The null handle is never live; every other handle is live unless killed
/// with [`MockBackend::kill_target`].
#[derive(Default)]
pub struct MockBackend {
    /// Every packet passed to `submit_key`, in call order.
    pub key_packets: Mutex<Vec<KeyPacket>>,
    /// Every `submit_mouse` call, each preserved as one batch.
    pub mouse_batches: Mutex<Vec<Vec<MousePacket>>>,
    /// Every handle passed to `is_target_live`, in call order.
    pub liveness_queries: Mutex<Vec<TargetHandle>>,
    dead_targets: Mutex<HashSet<isize>>,
    report_zero: AtomicBool,
    fail: AtomicBool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `target` report not-live from now on.
    pub fn kill_target(&self, target: TargetHandle) {
        self.dead_targets.lock().unwrap().insert(target.as_raw());
    }

    /// When enabled, submissions succeed but claim zero delivered events.
    pub fn report_zero_delivered(&self, enabled: bool) {
        self.report_zero.store(enabled, Ordering::SeqCst);
    }

    /// When enabled, submissions return [`BackendError::Native`].
    pub fn fail_submissions(&self, enabled: bool) {
        self.fail.store(enabled, Ordering::SeqCst);
    }

    /// Total packets submitted across both event categories.
    pub fn submission_count(&self) -> usize {
        let mouse: usize = self.mouse_batches.lock().unwrap().iter().map(Vec::len).sum();
        self.key_packets.lock().unwrap().len() + mouse
    }

    fn delivered(&self, submitted: usize) -> Result<usize, BackendError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(BackendError::Native("mock failure".into()));
        }
        if self.report_zero.load(Ordering::SeqCst) {
            Ok(0)
        } else {
            Ok(submitted)
        }
    }
}

impl InputBackend for MockBackend {
    fn is_target_live(&self, target: TargetHandle) -> bool {
        self.liveness_queries.lock().unwrap().push(target);
        !target.is_null() && !self.dead_targets.lock().unwrap().contains(&target.as_raw())
    }

    fn submit_key(&self, packet: KeyPacket) -> Result<usize, BackendError> {
        let delivered = self.delivered(1)?;
        self.key_packets.lock().unwrap().push(packet);
        Ok(delivered)
    }

    fn submit_mouse(&self, packets: &[MousePacket]) -> Result<usize, BackendError> {
        let delivered = self.delivered(packets.len())?;
        self.mouse_batches.lock().unwrap().push(packets.to_vec());
        Ok(delivered)
    }
}
