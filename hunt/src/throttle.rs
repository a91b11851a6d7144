//! Time-gated invocation with a guaranteed trailing call.
//!
//! Nothing here reads a clock or arms a timer. Callers pass `now_ms` in and poll
//! [`Throttle::next_deadline`] to know when a deferred call becomes due.

use crate::DEFAULT_THROTTLE_INTERVAL_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending<A> {
    args: A,
    due_ms: u64,
}

/// Decides whether a call runs now or is deferred to the trailing edge.
///
/// - The first call runs immediately.
/// - A call within `interval_ms` of the last realized run is deferred. Deferred calls collapse
///   into a single pending one carrying the most recent arguments, due exactly `interval_ms`
///   after the last realized run.
/// - A call made once the interval has elapsed runs immediately and replaces any overdue
///   pending call.
#[derive(Clone, Debug)]
pub struct Throttle<A = ()> {
    interval_ms: u64,
    last_ran_ms: Option<u64>,
    pending: Option<Pending<A>>,
}

impl<A> Throttle<A> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ran_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Registers a call. Returns the arguments when the call must run right away.
    pub fn call(&mut self, now_ms: u64, args: A) -> Option<A> {
        let due_ms = match self.last_ran_ms {
            None => return Some(self.ran(now_ms, args)),
            Some(last) => last.saturating_add(self.interval_ms),
        };

        if now_ms >= due_ms {
            self.pending = None;
            return Some(self.ran(now_ms, args));
        }

        self.pending = Some(Pending { args, due_ms });
        None
    }

    /// Releases the pending call once its deadline has been reached.
    pub fn tick(&mut self, now_ms: u64) -> Option<A> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.ran(now_ms, pending.args))
    }

    /// Deadline of the pending call, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending call without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn ran(&mut self, now_ms: u64, args: A) -> A {
        self.last_ran_ms = Some(now_ms);
        args
    }
}

impl<A> Default for Throttle<A> {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL_MS)
    }
}

/// A function wrapped in a [`Throttle`].
pub struct Throttled<A, F> {
    gate: Throttle<A>,
    f: F,
}

impl<A, F: FnMut(A)> Throttled<A, F> {
    pub fn new(f: F, interval_ms: u64) -> Self {
        Self {
            gate: Throttle::new(interval_ms),
            f,
        }
    }

    /// Calls through the throttle. Returns `true` when `f` ran synchronously.
    pub fn call(&mut self, now_ms: u64, args: A) -> bool {
        match self.gate.call(now_ms, args) {
            Some(args) => {
                (self.f)(args);
                true
            }
            None => false,
        }
    }

    /// Runs the trailing call if it is due. Returns `true` when `f` ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.gate.tick(now_ms) {
            Some(args) => {
                (self.f)(args);
                true
            }
            None => false,
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.gate.next_deadline()
    }

    pub fn cancel(&mut self) {
        self.gate.cancel();
    }
}

impl<A, F> core::fmt::Debug for Throttled<A, F>
where
    A: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Throttled")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
