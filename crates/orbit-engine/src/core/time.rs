use crate::api::env::{TimerHandle, TimerQueue};

/// Trailing-edge debounce for resize notifications.
/// Every `notify` pushes the deadline back; `poll` fires once the host has
/// been quiet for `delay_ms`.
///
/// Hosts with a timer queue use `arm` / `timer_fired` / `disarm` instead,
/// which keep at most one timer outstanding per burst.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    /// Required quiet period in milliseconds.
    delay_ms: f64,
    /// When the pending resize becomes due, if one is pending.
    deadline: Option<f64>,
    /// The single outstanding timer, if any.
    timer: Option<TimerHandle>,
}

impl ResizeDebounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            deadline: None,
            timer: None,
        }
    }

    /// Record a resize event at `now_ms`.
    pub fn notify(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending resize is due, if one is pending.
    /// Lets a host re-arm a timer that fired slightly early.
    pub fn remaining(&self, now_ms: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now_ms).max(0.0))
    }

    /// Record a resize event and replace the outstanding timer with a fresh one.
    pub fn arm(&mut self, now_ms: f64, timers: &mut impl TimerQueue) {
        self.notify(now_ms);
        self.cancel_timer(timers);
        self.timer = timers.set_timeout(self.delay_ms);
    }

    /// The outstanding timer fired. Returns true when the resize is due;
    /// a timer that fired early is re-armed for the time left.
    pub fn timer_fired(&mut self, now_ms: f64, timers: &mut impl TimerQueue) -> bool {
        self.timer = None;
        if self.poll(now_ms) {
            return true;
        }
        if let Some(remaining) = self.remaining(now_ms) {
            self.timer = timers.set_timeout(remaining);
        }
        false
    }

    /// Drop any pending resize and cancel its timer.
    pub fn disarm(&mut self, timers: &mut impl TimerQueue) {
        self.deadline = None;
        self.cancel_timer(timers);
    }

    fn cancel_timer(&mut self, timers: &mut impl TimerQueue) {
        if let Some(handle) = self.timer.take() {
            timers.clear_timeout(handle);
        }
    }

    /// The outstanding timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Whether a resize is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured quiet period.
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::ManualTimers;

    #[test]
    fn fires_after_quiet_period() {
        let mut d = ResizeDebounce::new(250.0);
        d.notify(1000.0);
        assert!(!d.poll(1100.0));
        assert!(d.poll(1250.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_fires_once_after_last_event() {
        let mut d = ResizeDebounce::new(250.0);
        d.notify(0.0);
        d.notify(100.0);
        d.notify(200.0);
        // Timeouts armed by the first two events come due before the quiet period ends.
        assert!(!d.poll(250.0));
        assert!(!d.poll(350.0));
        assert!(d.poll(450.0));
        assert!(!d.poll(500.0));
    }

    #[test]
    fn remaining_counts_down_to_deadline() {
        let mut d = ResizeDebounce::new(250.0);
        assert_eq!(d.remaining(0.0), None);
        d.notify(100.0);
        assert_eq!(d.remaining(249.0), Some(101.0));
        assert_eq!(d.remaining(400.0), Some(0.0));
    }

    #[test]
    fn idle_never_fires() {
        let mut d = ResizeDebounce::new(250.0);
        assert!(!d.poll(10_000.0));
    }

    #[test]
    fn negative_delay_is_treated_as_zero() {
        let mut d = ResizeDebounce::new(-5.0);
        assert_eq!(d.delay_ms(), 0.0);
        d.notify(10.0);
        assert!(d.poll(10.0));
    }

    #[test]
    fn burst_keeps_a_single_timer() {
        let mut d = ResizeDebounce::new(250.0);
        let mut timers = ManualTimers::new();
        d.arm(0.0, &mut timers);
        d.arm(100.0, &mut timers);
        d.arm(200.0, &mut timers);

        assert_eq!(timers.pending().len(), 1);
        assert_eq!(timers.cleared().len(), 2);
        assert_eq!(d.timer(), Some(timers.pending()[0].0));

        assert!(timers.fire().is_some());
        assert!(d.timer_fired(450.0, &mut timers));
        assert!(timers.pending().is_empty());
        assert_eq!(d.timer(), None);
    }

    #[test]
    fn early_timer_rearms_once_for_the_rest() {
        let mut d = ResizeDebounce::new(250.0);
        let mut timers = ManualTimers::new();
        d.arm(0.0, &mut timers);

        timers.fire();
        assert!(!d.timer_fired(249.0, &mut timers));
        assert_eq!(timers.pending().len(), 1);
        assert_eq!(timers.pending()[0].1, 1.0);

        timers.fire();
        assert!(d.timer_fired(250.0, &mut timers));
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn disarm_cancels_outstanding_timer() {
        let mut d = ResizeDebounce::new(250.0);
        let mut timers = ManualTimers::new();
        d.arm(0.0, &mut timers);
        d.disarm(&mut timers);

        assert!(timers.pending().is_empty());
        assert_eq!(timers.cleared().len(), 1);
        assert!(!d.is_pending());
        assert_eq!(d.timer(), None);

        // Nothing left to cancel the second time.
        d.disarm(&mut timers);
        assert_eq!(timers.cleared().len(), 1);
    }
}
