//! Scheduling of timer callbacks.
//!
//! The timer never sleeps or spawns. It asks a [`Scheduler`] to deliver a
//! [`Task`] after a delay and gets it back through
//! [`SessionTimer::fire`](super::SessionTimer::fire). [`TaskQueue`] keeps
//! pending tasks against a virtual clock, so the same queue serves tests
//! (stepped by hand) and the live runtime (stepped by wall-clock time).

use std::collections::BTreeMap;
use std::time::Duration;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Pause between the expiry notification and the switch to the next mode.
pub const SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Identifier of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Work the timer can schedule for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// One second of countdown has elapsed.
    Tick,
    /// The settle delay after an expiry has elapsed.
    Settle,
}

/// Deferred delivery of timer tasks.
pub trait Scheduler {
    /// Schedule `task` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, task: Task) -> TaskId;

    /// Cancel a pending task.
    ///
    /// Returns false if the task already fired or was never scheduled.
    fn cancel(&mut self, id: TaskId) -> bool;
}

/// A task that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTask {
    /// Id returned when the task was scheduled.
    pub id: TaskId,
    /// The task itself.
    pub task: Task,
}

/// Pending tasks ordered by due time against a virtual clock.
#[derive(Debug, Default)]
pub struct TaskQueue {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TaskId), Task>,
}

impl TaskQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Remove the earliest task due at or before `until`.
    ///
    /// The queue clock moves to the task's due time. When nothing is due the
    /// clock moves to `until` (never backwards) and `None` is returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<DueTask> {
        let key = match self.pending.keys().next() {
            Some(&(due, id)) if due <= until => (due, id),
            _ => {
                self.now = self.now.max(until);
                return None;
            }
        };

        let task = self.pending.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(DueTask { id: key.1, task })
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.insert((self.now + delay, id), task);
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let key = self
            .pending
            .keys()
            .find(|(_, pending_id)| *pending_id == id)
            .copied();

        key.is_some_and(|key| self.pending.remove(&key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_pop_in_order() {
        let mut queue = TaskQueue::new();
        let late = queue.schedule(Duration::from_secs(2), Task::Tick);
        let early = queue.schedule(SETTLE_DELAY, Task::Settle);

        assert_eq!(queue.next_due(), Some(SETTLE_DELAY));

        let first = queue.pop_due(Duration::from_secs(5)).unwrap();
        assert_eq!(first.id, early);
        assert_eq!(first.task, Task::Settle);
        assert_eq!(queue.now(), SETTLE_DELAY);

        let second = queue.pop_due(Duration::from_secs(5)).unwrap();
        assert_eq!(second.id, late);
        assert_eq!(queue.now(), Duration::from_secs(2));

        assert!(queue.pop_due(Duration::from_secs(5)).is_none());
        assert_eq!(queue.now(), Duration::from_secs(5));
    }

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut queue = TaskQueue::new();
        queue.schedule(TICK_INTERVAL, Task::Tick);

        assert!(queue.pop_due(Duration::from_millis(999)).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(TICK_INTERVAL).is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut queue = TaskQueue::new();
        queue.pop_due(Duration::from_secs(10));
        queue.schedule(TICK_INTERVAL, Task::Tick);
        assert_eq!(queue.next_due(), Some(Duration::from_secs(11)));
    }

    #[test]
    fn test_cancel() {
        let mut queue = TaskQueue::new();
        let id = queue.schedule(TICK_INTERVAL, Task::Tick);

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(queue.pop_due(Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = TaskQueue::new();
        let a = queue.schedule(TICK_INTERVAL, Task::Tick);
        let b = queue.schedule(TICK_INTERVAL, Task::Tick);
        assert_ne!(a, b);
        assert!(a.get() < b.get());
    }
}
