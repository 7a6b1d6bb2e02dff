//! The session timer state machine.
//!
//! A [`SessionTimer`] owns the countdown state, the configuration, an injected
//! [`Scheduler`] and an injected [`KeyValueStore`]. Every command and every
//! scheduled task runs to completion synchronously; the only deferred work
//! is the single task (next tick or settle continuation) held in the
//! scheduler. Tasks carry ids, and a delivered id that is not the one
//! currently armed is dropped, so a cancelled callback can never touch a
//! newer state.

use std::time::Duration;

use log::{debug, info, warn};

use crate::storage::KeyValueStore;

use super::config::TimerConfig;
use super::mode::Mode;
use super::notify::{Listener, Notification};
use super::record::{TimerRecord, STATE_KEY};
use super::scheduler::{Scheduler, Task, TaskId, TaskQueue, SETTLE_DELAY, TICK_INTERVAL};
use super::state::{SessionState, Snapshot};

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TaskId,
    task: Task,
}

/// Countdown that cycles through work and break sessions.
pub struct SessionTimer<S: Scheduler, K: KeyValueStore> {
    state: SessionState,
    config: TimerConfig,
    scheduler: S,
    store: K,
    listeners: Vec<Box<dyn Listener>>,
    pending: Option<Pending>,
}

impl<S: Scheduler, K: KeyValueStore> SessionTimer<S, K> {
    /// Create a timer, restoring any record found in `store`.
    ///
    /// Without a usable record the timer starts as a stopped Work session
    /// using `default_config`. A restored timer that was running resumes
    /// ticking immediately.
    pub fn new(scheduler: S, store: K, default_config: TimerConfig) -> Self {
        let restored = match store.get(STATE_KEY) {
            Ok(raw) => raw.as_deref().and_then(TimerRecord::parse),
            Err(e) => {
                warn!("Could not read timer record: {e}");
                None
            }
        };

        let (state, config) = restored.map_or_else(
            || {
                let config = default_config.clamped();
                (SessionState::fresh(&config), config)
            },
            TimerRecord::into_parts,
        );

        let mut timer = Self {
            state,
            config,
            scheduler,
            store,
            listeners: Vec::new(),
            pending: None,
        };

        if timer.state.is_running {
            debug!("Resuming restored {} session", timer.state.mode);
            timer.state.is_running = false;
            timer.start();
        }

        timer
    }

    /// Attach a listener, builder style.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Listener + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    /// Attach a listener.
    pub fn add_listener(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start or resume the countdown. No effect while already running.
    ///
    /// A session that hit zero but never switched mode (paused during the
    /// settle delay) switches now, then starts.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        if self.is_settling() {
            debug!("Start ignored: session switch already pending");
            return;
        }

        if self.state.seconds_left == 0 {
            let next = self.state.advance(&self.config);
            debug!("Completed pending switch to {next}");
        }

        info!("Starting {} session", self.state.mode);
        self.state.is_running = true;
        self.arm(TICK_INTERVAL, Task::Tick);
        self.commit();
    }

    /// Stop the countdown and cancel any pending work. Idempotent.
    pub fn pause(&mut self) {
        let had_pending = self.cancel_pending();
        if !self.state.is_running && !had_pending {
            return;
        }

        info!("Pausing {} session", self.state.mode);
        self.state.is_running = false;
        self.commit();
    }

    /// Return to a stopped Work session at full length with no rounds.
    pub fn reset(&mut self) {
        self.cancel_pending();
        info!("Resetting timer");
        self.state = SessionState::fresh(&self.config);
        self.commit();
    }

    /// Switch to the next session immediately and keep running.
    ///
    /// Skipping counts a Work session as a completed round but does not
    /// send an expiry notification.
    pub fn skip(&mut self) {
        self.cancel_pending();
        let from = self.state.mode;
        let next = self.state.advance(&self.config);
        info!("Skipped {from} session, now {next}");

        self.state.is_running = true;
        self.arm(TICK_INTERVAL, Task::Tick);
        self.commit();
    }

    /// Replace the configuration.
    ///
    /// Values below one are clamped. The current session restarts at the new
    /// length for its mode; elapsed progress is discarded. An expired session
    /// still waiting for its mode switch stays at zero, and the switch runs
    /// under the new configuration.
    pub fn set_configuration(&mut self, config: TimerConfig) {
        self.config = config.clamped();
        if !self.switch_owed() {
            self.state.seconds_left = self.config.duration_for(self.state.mode);
        }
        info!(
            "Configuration set to {}/{}/{} minutes, long break every {} rounds",
            self.config.work_minutes,
            self.config.short_break_minutes,
            self.config.long_break_minutes,
            self.config.rounds_before_long_break
        );
        self.commit();
    }

    /// Cancel any pending tick or settle continuation.
    ///
    /// State is left untouched, so a running timer restored later from the
    /// store resumes where it stopped.
    pub fn teardown(&mut self) {
        if self.cancel_pending() {
            debug!("Timer torn down with pending task");
        }
    }

    /// Deliver a scheduled task.
    ///
    /// Tasks that are not the one currently armed are ignored.
    pub fn fire(&mut self, id: TaskId, task: Task) {
        match self.pending {
            Some(pending) if pending.id == id && pending.task == task => {
                self.pending = None;
            }
            _ => {
                debug!("Ignoring stale {task:?} task {}", id.get());
                return;
            }
        }

        match task {
            Task::Tick => self.on_tick(),
            Task::Settle => self.on_settle(),
        }
    }

    fn on_tick(&mut self) {
        if !self.state.is_running {
            return;
        }

        self.state.seconds_left = self.state.seconds_left.saturating_sub(1);
        if self.state.seconds_left > 0 {
            self.arm(TICK_INTERVAL, Task::Tick);
            self.commit();
            return;
        }

        debug!("{} session expired", self.state.mode);
        self.state.is_running = false;
        self.commit();
        self.emit(&Notification::Expired {
            mode: self.state.mode,
            minutes: self.config.minutes_for(self.state.mode),
            rounds_completed: self.state.rounds_completed,
        });
        self.arm(SETTLE_DELAY, Task::Settle);
    }

    fn on_settle(&mut self) {
        let from = self.state.mode;
        let next = self.state.advance(&self.config);
        debug!("Switched from {from} to {next}");

        self.state.is_running = true;
        self.arm(TICK_INTERVAL, Task::Tick);
        self.commit();
    }

    fn arm(&mut self, delay: Duration, task: Task) {
        self.cancel_pending();
        let id = self.scheduler.schedule(delay, task);
        self.pending = Some(Pending { id, task });
    }

    fn cancel_pending(&mut self) -> bool {
        self.pending
            .take()
            .is_some_and(|pending| self.scheduler.cancel(pending.id))
    }

    fn commit(&mut self) {
        self.persist();
        self.emit(&Notification::Update(self.snapshot()));
    }

    fn persist(&mut self) {
        let record = TimerRecord::new(&self.state, &self.config);
        let result = record
            .to_json()
            .map_err(crate::error::PomodoroError::from)
            .and_then(|json| self.store.set(STATE_KEY, &json));

        if let Err(e) = result {
            warn!("Could not save timer record: {e}");
        }
    }

    fn emit(&mut self, notification: &Notification) {
        for listener in &mut self.listeners {
            listener.notify(notification);
        }
    }

    /// Current state and configuration.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.state, &self.config)
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Check if an expired session is waiting for its mode switch.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending.is_some_and(|p| p.task == Task::Settle)
    }

    // Expired but not yet advanced, either settling or paused at zero.
    const fn switch_owed(&self) -> bool {
        self.state.seconds_left == 0 && !self.state.is_running
    }

    /// The task currently armed, if any.
    #[must_use]
    pub fn pending_task(&self) -> Option<(TaskId, Task)> {
        self.pending.map(|p| (p.id, p.task))
    }

    /// The injected scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The injected store.
    #[must_use]
    pub const fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> SessionTimer<TaskQueue, K> {
    /// Deliver every task due within the next `by` of queue time.
    pub fn advance_time(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        self.advance_to(until);
    }

    /// Deliver every task due at or before queue time `until`, in order.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(due) = self.scheduler.pop_due(until) {
            self.fire(due.id, due.task);
        }
    }
}

impl<S: Scheduler, K: KeyValueStore> Drop for SessionTimer<S, K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::PomodoroError;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use crate::timer::notify::MockListener;

    type TestTimer = SessionTimer<TaskQueue, MemoryStore>;

    fn timer_with(config: TimerConfig) -> TestTimer {
        SessionTimer::new(TaskQueue::new(), MemoryStore::new(), config)
    }

    fn recorded(timer: &mut TestTimer) -> Rc<RefCell<Vec<Notification>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        timer.add_listener(move |n: &Notification| sink.borrow_mut().push(*n));
        log
    }

    fn expiries(log: &Rc<RefCell<Vec<Notification>>>) -> usize {
        log.borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Expired { .. }))
            .count()
    }

    fn stored(timer: &TestTimer) -> TimerRecord {
        let raw = timer.store().get(STATE_KEY).unwrap().unwrap();
        TimerRecord::parse(&raw).unwrap()
    }

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_new_timer_is_fresh() {
        let timer = timer_with(TimerConfig::default());
        let snap = timer.snapshot();

        assert_eq!(snap.mode, Mode::Work);
        assert_eq!(snap.seconds_left, 1500);
        assert!(!snap.is_running);
        assert_eq!(snap.rounds_completed, 0);
        assert!(timer.pending_task().is_none());
    }

    #[test]
    fn test_start_counts_down() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        timer.advance_time(SECOND * 3);

        assert_eq!(timer.state().seconds_left, 1497);
        assert!(timer.state().is_running);
    }

    #[test]
    fn test_start_twice_keeps_single_ticker() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        timer.start();

        assert_eq!(timer.scheduler().len(), 1);
        timer.advance_time(SECOND);
        assert_eq!(timer.state().seconds_left, 1499);
    }

    #[test]
    fn test_pause_stops_countdown() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        timer.advance_time(SECOND * 10);
        timer.pause();
        timer.advance_time(SECOND * 10);

        assert_eq!(timer.state().seconds_left, 1490);
        assert!(!timer.state().is_running);
        assert!(timer.scheduler().is_empty());
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut once = timer_with(TimerConfig::default());
        once.start();
        once.advance_time(SECOND * 5);
        once.pause();

        let mut twice = timer_with(TimerConfig::default());
        twice.start();
        twice.advance_time(SECOND * 5);
        twice.pause();
        twice.pause();

        assert_eq!(once.snapshot(), twice.snapshot());
        assert_eq!(stored(&once), stored(&twice));
    }

    #[test]
    fn test_second_pause_emits_nothing() {
        let mut listener = MockListener::new();
        listener.expect_notify().times(2).return_const(());

        let mut timer = timer_with(TimerConfig::default()).with_listener(listener);
        timer.start();
        timer.pause();
        timer.pause();
    }

    #[test]
    fn test_expiry_then_settle_then_resume() {
        let mut timer = timer_with(TimerConfig::new(1, 2, 3, 4));
        let log = recorded(&mut timer);
        timer.start();

        timer.advance_time(SECOND * 60);
        assert_eq!(timer.state().seconds_left, 0);
        assert_eq!(timer.mode(), Mode::Work);
        assert!(!timer.state().is_running);
        assert!(timer.is_settling());
        assert_eq!(expiries(&log), 1);
        assert!(matches!(
            log.borrow().last(),
            Some(Notification::Expired {
                mode: Mode::Work,
                minutes: 1,
                rounds_completed: 0
            })
        ));

        timer.advance_time(SETTLE_DELAY);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().seconds_left, 120);
        assert_eq!(timer.state().rounds_completed, 1);
        assert!(timer.state().is_running);

        timer.advance_time(SECOND);
        assert_eq!(timer.state().seconds_left, 119);
    }

    #[test]
    fn test_expiry_notifies_before_mode_switch() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        let log = recorded(&mut timer);
        timer.start();
        timer.advance_time(SECOND * 61);

        let events = log.borrow();
        let expired_at = events
            .iter()
            .position(|n| matches!(n, Notification::Expired { .. }))
            .unwrap();
        let switched_at = events
            .iter()
            .position(|n| matches!(n, Notification::Update(s) if s.mode == Mode::ShortBreak))
            .unwrap();
        assert!(expired_at < switched_at);
    }

    #[test]
    fn test_zero_triggers_exactly_one_advance() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        let log = recorded(&mut timer);
        timer.start();
        timer.advance_time(SECOND * 60);

        let (settle_id, task) = timer.pending_task().unwrap();
        assert_eq!(task, Task::Settle);

        timer.advance_time(SETTLE_DELAY);
        // Redelivering the spent settle task must not advance again.
        timer.fire(settle_id, Task::Settle);

        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().rounds_completed, 1);
        assert_eq!(expiries(&log), 1);
    }

    #[test]
    fn test_long_break_every_fourth_natural_round() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        let log = recorded(&mut timer);
        timer.start();
        timer.advance_time(SECOND * 1500);

        let mut breaks = Vec::new();
        let mut last = Mode::Work;
        for n in log.borrow().iter() {
            if let Notification::Update(s) = n {
                if last == Mode::Work && s.mode != Mode::Work {
                    breaks.push((s.rounds_completed, s.mode));
                }
                last = s.mode;
            }
        }

        assert!(breaks.len() >= 12);
        for (round, mode) in breaks {
            let expected = if round % 4 == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            };
            assert_eq!(mode, expected, "after round {round}");
        }
    }

    #[test]
    fn test_skip_sequence_reaches_long_break() {
        let mut timer = timer_with(TimerConfig::default());
        let log = recorded(&mut timer);
        timer.start();

        let expected = [
            Mode::ShortBreak,
            Mode::Work,
            Mode::ShortBreak,
            Mode::Work,
            Mode::ShortBreak,
            Mode::Work,
            Mode::LongBreak,
        ];
        for mode in expected {
            timer.skip();
            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.state().seconds_left, timer.config().duration_for(mode));
            assert!(timer.state().is_running);
        }

        assert_eq!(timer.state().rounds_completed, 4);
        assert_eq!(expiries(&log), 0);
    }

    #[test]
    fn test_skip_from_stopped_resumes_running() {
        let mut timer = timer_with(TimerConfig::default());
        timer.skip();

        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert!(timer.state().is_running);
        timer.advance_time(SECOND);
        assert_eq!(timer.state().seconds_left, 299);
    }

    #[test]
    fn test_skip_during_settle_advances_once() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        timer.start();
        timer.advance_time(SECOND * 60);
        assert!(timer.is_settling());

        timer.skip();
        timer.advance_time(SECOND);

        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().rounds_completed, 1);
        assert_eq!(timer.state().seconds_left, 59);
    }

    #[test]
    fn test_pause_during_settle_cancels_switch() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        timer.start();
        timer.advance_time(SECOND * 60);

        timer.pause();
        timer.advance_time(SECOND * 5);
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.state().seconds_left, 0);
        assert!(timer.scheduler().is_empty());

        timer.start();
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().rounds_completed, 1);
        assert!(timer.state().is_running);
    }

    #[test]
    fn test_set_configuration_after_pause_in_settle_keeps_switch() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        let log = recorded(&mut timer);
        timer.start();
        timer.advance_time(SECOND * 60);
        timer.pause();

        timer.set_configuration(TimerConfig::new(2, 3, 1, 4));
        assert_eq!(timer.state().seconds_left, 0);
        assert_eq!(timer.config().work_minutes, 2);

        timer.start();
        timer.advance_time(SECOND * 5);
        assert_eq!(expiries(&log), 1);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().rounds_completed, 1);
        assert_eq!(timer.state().seconds_left, 180 - 5);
    }

    #[test]
    fn test_set_configuration_during_settle_switches_with_new_lengths() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        timer.start();
        timer.advance_time(SECOND * 60);
        assert!(timer.is_settling());

        timer.set_configuration(TimerConfig::new(2, 3, 1, 4));
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.state().seconds_left, 0);
        assert!(timer.is_settling());

        timer.advance_time(SETTLE_DELAY);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.state().seconds_left, 180);
        assert_eq!(timer.state().rounds_completed, 1);
        assert!(timer.state().is_running);
    }

    #[test]
    fn test_start_during_settle_is_ignored() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 4));
        timer.start();
        timer.advance_time(SECOND * 60);

        timer.start();
        assert!(timer.is_settling());
        timer.advance_time(SETTLE_DELAY);
        assert_eq!(timer.state().rounds_completed, 1);
    }

    #[test]
    fn test_reset() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        timer.skip();
        timer.skip();
        timer.skip();
        timer.advance_time(SECOND * 30);

        timer.reset();
        let snap = timer.snapshot();
        assert_eq!(snap.mode, Mode::Work);
        assert_eq!(snap.seconds_left, 1500);
        assert_eq!(snap.rounds_completed, 0);
        assert!(!snap.is_running);
        assert!(timer.scheduler().is_empty());

        timer.advance_time(SECOND * 30);
        assert_eq!(timer.state().seconds_left, 1500);
    }

    #[test]
    fn test_set_configuration_restarts_current_session() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        timer.advance_time(SECOND * 100);
        assert_eq!(timer.state().seconds_left, 1400);

        timer.set_configuration(TimerConfig::new(30, 5, 15, 4));
        assert_eq!(timer.state().seconds_left, 1800);
        assert!(timer.state().is_running);

        timer.advance_time(SECOND);
        assert_eq!(timer.state().seconds_left, 1799);
    }

    #[test]
    fn test_set_configuration_clamps() {
        let mut timer = timer_with(TimerConfig::default());
        timer.set_configuration(TimerConfig {
            work_minutes: 0,
            short_break_minutes: 0,
            long_break_minutes: 0,
            rounds_before_long_break: 0,
        });

        assert_eq!(timer.state().seconds_left, 60);
        assert_eq!(timer.config().rounds_before_long_break, 1);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut timer = timer_with(TimerConfig::default());

        timer.start();
        assert!(stored(&timer).is_running);

        timer.advance_time(SECOND * 2);
        assert_eq!(stored(&timer).seconds_left, 1498);

        timer.skip();
        let record = stored(&timer);
        assert_eq!(record.mode, Mode::ShortBreak);
        assert_eq!(record.rounds_completed, 1);

        timer.set_configuration(TimerConfig::new(25, 7, 15, 4));
        assert_eq!(stored(&timer).config.short_break_minutes, 7);
        assert_eq!(stored(&timer).seconds_left, 420);
    }

    #[test]
    fn test_restore_from_store() {
        let config = TimerConfig::new(40, 8, 20, 3);
        let state = SessionState {
            mode: Mode::ShortBreak,
            seconds_left: 100,
            is_running: false,
            rounds_completed: 2,
        };
        let mut store = MemoryStore::new();
        store
            .set(STATE_KEY, &TimerRecord::new(&state, &config).to_json().unwrap())
            .unwrap();

        let timer = SessionTimer::new(TaskQueue::new(), store, TimerConfig::default());

        assert_eq!(*timer.state(), state);
        assert_eq!(*timer.config(), config);
        assert!(timer.pending_task().is_none());
    }

    #[test]
    fn test_restore_running_rearms_ticker() {
        let config = TimerConfig::default();
        let state = SessionState {
            mode: Mode::LongBreak,
            seconds_left: 100,
            is_running: true,
            rounds_completed: 4,
        };
        let mut store = MemoryStore::new();
        store
            .set(STATE_KEY, &TimerRecord::new(&state, &config).to_json().unwrap())
            .unwrap();

        let mut timer = SessionTimer::new(TaskQueue::new(), store, config);
        assert!(timer.state().is_running);

        timer.advance_time(SECOND);
        assert_eq!(timer.state().seconds_left, 99);
    }

    #[test]
    fn test_restore_running_at_zero_completes_switch() {
        let raw = r#"{"mode":"work","secondsLeft":0,"isRunning":true,"roundsCompleted":3,
            "config":{"workMinutes":25,"shortBreakMinutes":5,"longBreakMinutes":15,"roundsBeforeLongBreak":4}}"#;
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, raw).unwrap();

        let timer = SessionTimer::new(TaskQueue::new(), store, TimerConfig::default());
        assert_eq!(timer.mode(), Mode::LongBreak);
        assert_eq!(timer.state().rounds_completed, 4);
        assert_eq!(timer.state().seconds_left, 900);
        assert!(timer.state().is_running);
    }

    #[test]
    fn test_malformed_record_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, "{ definitely not json").unwrap();

        let fallback = TimerConfig::new(50, 10, 20, 2);
        let timer = SessionTimer::new(TaskQueue::new(), store, fallback);

        assert_eq!(*timer.config(), fallback);
        assert_eq!(*timer.state(), SessionState::fresh(&fallback));
    }

    #[test]
    fn test_store_failures_do_not_stop_timer() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(PomodoroError::Storage("unavailable".to_string())));
        store
            .expect_set()
            .returning(|_, _| Err(PomodoroError::Storage("disk full".to_string())));

        let mut timer = SessionTimer::new(TaskQueue::new(), store, TimerConfig::default());
        timer.start();
        timer.advance_time(SECOND * 2);

        assert_eq!(timer.state().seconds_left, 1498);
    }

    #[test]
    fn test_teardown_cancels_pending() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        assert_eq!(timer.scheduler().len(), 1);

        timer.teardown();
        assert!(timer.scheduler().is_empty());
        assert!(timer.pending_task().is_none());
    }

    #[test]
    fn test_stale_tick_after_pause_is_ignored() {
        let mut timer = timer_with(TimerConfig::default());
        timer.start();
        let (tick_id, task) = timer.pending_task().unwrap();

        timer.pause();
        timer.fire(tick_id, task);

        assert_eq!(timer.state().seconds_left, 1500);
    }

    #[test]
    fn test_rounds_counted_across_skips_and_expiries() {
        let mut timer = timer_with(TimerConfig::new(1, 1, 1, 100));
        timer.start();

        // Two natural work sessions, each followed by a natural break.
        timer.advance_time(Duration::from_millis(2 * (60_000 + 400) * 2));
        assert_eq!(timer.state().rounds_completed, 2);

        // Skip through the current work session and the following break.
        assert_eq!(timer.mode(), Mode::Work);
        timer.skip();
        timer.skip();
        timer.skip();

        assert_eq!(timer.state().rounds_completed, 4);
        assert_eq!(timer.mode(), Mode::ShortBreak);
    }
}
