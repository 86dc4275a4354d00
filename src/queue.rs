use crate::error::TrellisError;
use crate::update::Update;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Consumes updates drained by [`UpdateQueue::flush`]. Implemented by
/// the renderer-facing applier and by test doubles.
pub trait UpdateApplier {
    fn apply(&self, update: Update) -> Result<(), TrellisError>;
}

/// Sequenced buffer between reconciliation and the renderer. Enqueue is
/// callable from any thread, including while another thread is mid
/// flush; flush itself is single-entry.
pub struct UpdateQueue {
    buffer: Mutex<VecDeque<Update>>,
    flushing: AtomicBool,
}

/// Clears the flushing flag on every exit path, panics included.
struct FlushGuard<'a>(&'a AtomicBool);

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(VecDeque::new()),
            flushing: AtomicBool::new(false),
        }
    }

    /// Appends to the tail of the buffer. Never blocks on a flush in
    /// progress, never fails.
    pub fn enqueue(&self, update: Update) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(update);
    }

    /// Drains the buffer head-first, applying each update exactly once.
    ///
    /// A flush already in progress makes this call an immediate no-op;
    /// that is the re-entrancy guard, not an error. An apply failure
    /// propagates to the caller and leaves the not-yet-applied updates
    /// buffered for a later flush attempt.
    pub fn flush(&self, applier: &dyn UpdateApplier) -> Result<(), TrellisError> {
        if self.flushing.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let _guard = FlushGuard(&self.flushing);

        loop {
            // The lock is released before apply so enqueue from the
            // applier or another thread cannot deadlock.
            let next = self
                .buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();
            match next {
                Some(update) => {
                    if let Err(err) = applier.apply(update.clone()) {
                        // Put the failed update back at the head so a
                        // later flush retries it (at-least-once).
                        self.buffer
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push_front(update);
                        return Err(err);
                    }
                }
                None => break,
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UpdateQueue {
    fn default() -> Self {
        Self::new()
    }
}
