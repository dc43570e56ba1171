//! Timer scheduling
//!
//! Components never hold closures over the document. They schedule a
//! [`Deferred`] value and the scheduler hands it back to the controller when
//! the delay elapses.
//!
//! - [`Scheduler`]: schedule/cancel primitive
//! - [`Debouncer`]: trailing-edge debounce on top of any scheduler
//! - [`ManualScheduler`]: virtual clock, advanced explicitly (tests, native hosts)

use crate::event::Deferred;

/// Handle of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Scheduler {
    /// Run `task` once after `delay_ms`
    fn schedule(&mut self, delay_ms: u32, task: Deferred) -> TimerId;

    /// Drop a pending task. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

// =============================================================================
// DEBOUNCER
// =============================================================================

/// Trailing-edge debounce: each trigger cancels the pending task and
/// reschedules it, so the task runs once the triggers stop for `delay_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn trigger<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, task: Deferred) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
        self.pending = Some(scheduler.schedule(self.delay_ms, task));
    }

    /// Call when the debounced task runs
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

#[derive(Debug, Clone)]
struct PendingTask {
    due_ms: u64,
    id: TimerId,
    task: Deferred,
}

/// Deterministic scheduler driven by a virtual millisecond clock.
///
/// Tasks due at the same instant run in scheduling order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest task due at or before `until_ms`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Deferred> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))?;
        let next = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.task)
    }

    /// Move the clock forward without running anything
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Advance by `ms`, returning every task that came due in order.
    ///
    /// Tasks scheduled by the caller while handling the returned tasks are
    /// not included; use `pop_due` in a loop for that.
    pub fn advance(&mut self, ms: u64) -> Vec<Deferred> {
        let target = self.now_ms + ms;
        let mut due = Vec::new();
        while let Some(task) = self.pop_due(target) {
            due.push(task);
        }
        self.now_ms = target;
        due
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, task: Deferred) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTask {
            due_ms: self.now_ms + u64::from(delay_ms),
            id,
            task,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_orders_by_due_time() {
        let mut s = ManualScheduler::new();
        s.schedule(300, Deferred::LightboxHidden);
        s.schedule(100, Deferred::ForceContentVisible);
        s.schedule(100, Deferred::HeroEntrance);

        let due = s.advance(300);
        assert_eq!(
            due,
            vec![
                Deferred::ForceContentVisible,
                Deferred::HeroEntrance,
                Deferred::LightboxHidden
            ]
        );
        assert_eq!(s.now(), 300);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_manual_scheduler_holds_future_tasks() {
        let mut s = ManualScheduler::new();
        s.schedule(50, Deferred::Parallax);
        assert!(s.advance(49).is_empty());
        assert_eq!(s.advance(1), vec![Deferred::Parallax]);
    }

    #[test]
    fn test_cancel_removes_task() {
        let mut s = ManualScheduler::new();
        let id = s.schedule(10, Deferred::Parallax);
        s.cancel(id);
        assert!(s.advance(100).is_empty());
        // Cancelling again is harmless
        s.cancel(id);
    }

    #[test]
    fn test_debouncer_keeps_only_last_trigger() {
        let mut s = ManualScheduler::new();
        let mut d = Debouncer::new(10);

        d.trigger(&mut s, Deferred::Parallax);
        s.advance(5);
        d.trigger(&mut s, Deferred::Parallax);
        s.advance(5);
        d.trigger(&mut s, Deferred::Parallax);
        assert_eq!(s.pending_count(), 1);

        assert!(s.advance(9).is_empty());
        assert_eq!(s.advance(1), vec![Deferred::Parallax]);
        d.fired();
        assert!(!d.is_pending());
    }
}
