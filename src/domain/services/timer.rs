//! Deferred action timer
//!
//! Single-threaded and cooperative: nothing fires on its own. The owner calls
//! [`DeferredActionTimer::poll`] from its execution context and dispatches
//! whatever came due. Each pending action is keyed by a purpose, so one
//! purpose has at most one pending action.

use std::time::{Duration, Instant};

/// Opaque token for a pending action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<P, A> {
    handle: TimerHandle,
    purpose: P,
    due: Instant,
    action: A,
}

/// Scheduler of single-shot actions keyed by purpose
#[derive(Debug)]
pub struct DeferredActionTimer<P, A> {
    next_handle: u64,
    pending: Vec<Pending<P, A>>,
}

impl<P: Copy + Eq, A> DeferredActionTimer<P, A> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `action` to come due `delay` after `now`.
    ///
    /// A pending action with the same purpose is replaced.
    pub fn schedule(&mut self, purpose: P, action: A, delay: Duration, now: Instant) -> TimerHandle {
        self.cancel_purpose(purpose);

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            purpose,
            due: now + delay,
            action,
        });
        handle
    }

    /// Cancel one pending action. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_purpose(&mut self, purpose: P) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.purpose != purpose);
        self.pending.len() != before
    }

    /// Cancel every pending action whose purpose is in `purposes`
    pub fn cancel_group(&mut self, purposes: &[P]) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !purposes.contains(&p.purpose));
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn is_purpose_pending(&self, purpose: P) -> bool {
        self.pending.iter().any(|p| p.purpose == purpose)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due instant, if anything is pending
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return every action due at `now`, earliest first.
    /// Ties keep scheduling order.
    pub fn poll(&mut self, now: Instant) -> Vec<(P, A)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| (p.purpose, p.action)).collect()
    }
}

impl<P: Copy + Eq, A> Default for DeferredActionTimer<P, A> {
    fn default() -> Self {
        Self::new()
    }
}
