// Timer set for the banner: every pending timer lives in one JoinSet so the whole
// lot can be cancelled at once.

use crate::use_cases::{Schedule, TimerFired, TimerRequest};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub struct TimerSet {
    tasks: JoinSet<()>,
    fired_tx: mpsc::UnboundedSender<TimerFired>,
}

impl TimerSet {
    /// Elapsed timers are reported on `fired_tx`.
    pub fn new(fired_tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            tasks: JoinSet::new(),
            fired_tx,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, request: TimerRequest) {
        let fired_tx = self.fired_tx.clone();
        self.tasks.spawn(async move {
            tokio::time::sleep(request.delay).await;
            // Receiver gone means the owner is shutting down.
            let _ = fired_tx.send(TimerFired::from(request));
        });
    }

    /// Applies a transition's schedule: optional cancel-all, then new timers.
    pub fn apply(&mut self, schedule: Schedule) {
        if schedule.cancel_pending {
            self.cancel_all();
        }
        for request in schedule.timers {
            self.schedule(request);
        }
    }

    /// Aborts every outstanding timer. Safe to call repeatedly.
    pub fn cancel_all(&mut self) {
        self.tasks.abort_all();
        // Aborted tasks never report; drop their handles right away.
        self.tasks.detach_all();
    }

    /// Timers still waiting to elapse.
    pub fn pending(&mut self) -> usize {
        while self.tasks.try_join_next().is_some() {}
        self.tasks.len()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
