//! Transition Animator
//!
//! A page change is a time-bounded, two-step visual swap:
//!
//! 1. immediately: every page loses its `Active`/`Previous` mark and the
//!    outgoing page is marked `Previous`
//! 2. after [`TransitionTiming::mark_active_delay`]: the incoming page is
//!    marked `Active`
//! 3. after [`TransitionTiming::total`]: the transition completes, the
//!    animating flag clears and the surface refreshes its derived UI
//!
//! Rather than free-floating timers, the transition is an explicit value
//! advanced by the owner's `tick(delta)` from the surface's frame loop.
//! The phase sequence (`Started` → `ActiveMarked` → `Complete`) makes the
//! one-transition-in-flight invariant structural: a [`Transition`] exists
//! exactly while `is_animating` is true.
//!
//! The two delays are cosmetic tuning knobs, not part of the correctness
//! contract; the only hard constraint is that the total duration exceeds
//! the mark-active delay, enforced at construction.

use std::time::Duration;

use crate::error::ManifestError;

/// Default delay before the incoming page is marked active.
const DEFAULT_MARK_ACTIVE_DELAY: Duration = Duration::from_millis(50);

/// Default total transition duration, measured from the navigation call.
const DEFAULT_TOTAL: Duration = Duration::from_millis(500);

/// Timing configuration for page transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    mark_active_delay: Duration,
    total: Duration,
}

impl TransitionTiming {
    /// Build a timing config, rejecting a total that does not exceed the
    /// mark-active delay.
    pub fn new(mark_active_delay: Duration, total: Duration) -> Result<Self, ManifestError> {
        if total <= mark_active_delay {
            return Err(ManifestError::InvalidTiming {
                delay_ms: mark_active_delay.as_millis() as u64,
                total_ms: total.as_millis() as u64,
            });
        }
        Ok(Self {
            mark_active_delay,
            total,
        })
    }

    /// Delay before the incoming page is marked active.
    pub fn mark_active_delay(&self) -> Duration {
        self.mark_active_delay
    }

    /// Total transition duration.
    pub fn total(&self) -> Duration {
        self.total
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            mark_active_delay: DEFAULT_MARK_ACTIVE_DELAY,
            total: DEFAULT_TOTAL,
        }
    }
}

/// Phase of an in-flight transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransitionPhase {
    /// Previous page marked, incoming page not yet active
    Started,
    /// Incoming page marked active, transition still running
    ActiveMarked,
    /// Total duration elapsed
    Complete,
}

/// An in-flight page transition.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    from: usize,
    to: usize,
    elapsed: Duration,
}

impl Transition {
    /// Start a transition from `from` to `to` at elapsed zero.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    /// The outgoing page index.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The incoming page index.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Advance the transition clock and report the resulting phase.
    ///
    /// A large delta may cross both boundaries at once; callers observe the
    /// returned phase, not individual crossings, and both the active-mark
    /// and the completion side effects are idempotent.
    pub fn advance(&mut self, delta: Duration, timing: &TransitionTiming) -> TransitionPhase {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.phase(timing)
    }

    /// Current phase for the given timing.
    pub fn phase(&self, timing: &TransitionTiming) -> TransitionPhase {
        if self.elapsed >= timing.total() {
            TransitionPhase::Complete
        } else if self.elapsed >= timing.mark_active_delay() {
            TransitionPhase::ActiveMarked
        } else {
            TransitionPhase::Started
        }
    }
}
