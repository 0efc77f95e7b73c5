//! Deferred task queue driven by an explicit millisecond clock.
//!
//! Nothing here sleeps or spawns. The owner advances time and pulls due tasks
//! one at a time, so each task observes the state left by the previous one.

/// Work that runs some time after it was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// One-second countdown step (self-rescheduling while a round is live).
    TimerTick,
    /// Empty the selection buffer after a resolved pair.
    ClearSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub due_ms: u64,
    /// Scheduling order; breaks ties between tasks due at the same instant.
    pub seq: u64,
    /// Round the task belongs to.
    pub generation: u32,
    pub task: DeferredTask,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Deferred>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time in milliseconds since creation.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `task` to run `after_ms` from now.
    pub fn schedule(&mut self, after_ms: u64, generation: u32, task: DeferredTask) -> Deferred {
        let deferred = Deferred {
            due_ms: self.now_ms.saturating_add(after_ms),
            seq: self.next_seq,
            generation,
            task,
        };
        self.next_seq += 1;
        self.pending.push(deferred);
        deferred
    }

    /// Drop every pending task of this kind. Returns how many were removed.
    pub fn cancel(&mut self, task: DeferredTask) -> usize {
        let before = self.pending.len();
        self.pending.retain(|d| d.task != task);
        before - self.pending.len()
    }

    /// Number of pending tasks of this kind.
    pub fn pending(&self, task: DeferredTask) -> usize {
        self.pending.iter().filter(|d| d.task == task).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|d| d.due_ms).min()
    }

    /// Remove and return the earliest task due at or before `deadline_ms`.
    ///
    /// The clock moves forward to the task's due time so anything it schedules
    /// is relative to when it was meant to run.
    pub fn pop_due_by(&mut self, deadline_ms: u64) -> Option<Deferred> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, d)| d.due_ms <= deadline_ms)
            .min_by_key(|(_, d)| (d.due_ms, d.seq))
            .map(|(i, _)| i)?;

        let deferred = self.pending.swap_remove(idx);
        self.now_ms = self.now_ms.max(deferred.due_ms);
        Some(deferred)
    }

    /// Move the clock forward to `deadline_ms` (never backwards).
    pub fn advance_to(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(1000, 0, DeferredTask::TimerTick);
        s.schedule(500, 0, DeferredTask::ClearSelection);

        assert!(s.pop_due_by(499).is_none());
        let first = s.pop_due_by(2000).unwrap();
        assert_eq!(first.task, DeferredTask::ClearSelection);
        assert_eq!(s.now_ms(), 500);
        let second = s.pop_due_by(2000).unwrap();
        assert_eq!(second.task, DeferredTask::TimerTick);
        assert_eq!(s.now_ms(), 1000);
        assert!(s.pop_due_by(2000).is_none());
    }

    #[test]
    fn ties_break_by_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(500, 7, DeferredTask::ClearSelection);
        s.schedule(500, 7, DeferredTask::TimerTick);

        assert_eq!(s.pop_due_by(500).unwrap().task, DeferredTask::ClearSelection);
        assert_eq!(s.pop_due_by(500).unwrap().task, DeferredTask::TimerTick);
    }

    #[test]
    fn cancel_removes_only_matching_kind() {
        let mut s = Scheduler::new();
        s.schedule(1000, 0, DeferredTask::TimerTick);
        s.schedule(500, 0, DeferredTask::ClearSelection);

        assert_eq!(s.cancel(DeferredTask::TimerTick), 1);
        assert_eq!(s.pending(DeferredTask::TimerTick), 0);
        assert_eq!(s.pending(DeferredTask::ClearSelection), 1);
        assert_eq!(s.next_due_ms(), Some(500));
    }

    #[test]
    fn schedule_is_relative_to_current_time() {
        let mut s = Scheduler::new();
        s.advance_to(2500);
        let d = s.schedule(500, 3, DeferredTask::ClearSelection);
        assert_eq!(d.due_ms, 3000);
        assert_eq!(d.generation, 3);

        s.advance_to(100);
        assert_eq!(s.now_ms(), 2500);
    }
}
