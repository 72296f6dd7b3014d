//! Transient acknowledgement messages with timed fade in/hold/fade out

use std::time::{Duration, Instant};

/// Delay before a new toast starts fading in, in seconds
const FADE_DELAY: f32 = 0.1;
/// Duration of the fade-in and fade-out ramps, in seconds
const FADE_TIME: f32 = 0.3;
/// How long a toast stays fully visible, in seconds
const HOLD_TIME: f32 = 2.0;

/// Opacity of a toast `elapsed` seconds after it was shown.
///
/// Zero during the initial delay, ramps to one, holds, ramps back to zero.
/// Anything at or past the total lifetime is fully transparent.
fn opacity_at(elapsed: f32) -> f32 {
    let fade_out_start = FADE_DELAY + FADE_TIME + HOLD_TIME;
    if elapsed < FADE_DELAY {
        0.0
    } else if elapsed < FADE_DELAY + FADE_TIME {
        (elapsed - FADE_DELAY) / FADE_TIME
    } else if elapsed < fade_out_start {
        1.0
    } else {
        (1.0 - (elapsed - fade_out_start) / FADE_TIME).max(0.0)
    }
}

/// Total lifetime of a toast in seconds
fn lifetime() -> f32 {
    FADE_DELAY + FADE_TIME + HOLD_TIME + FADE_TIME
}

/// A single on-screen acknowledgement message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn new(message: String, now: Instant) -> Self {
        Self {
            message,
            shown_at: now,
        }
    }

    /// Current opacity in `[0, 1]`
    pub fn opacity(&self, now: Instant) -> f32 {
        opacity_at(now.saturating_duration_since(self.shown_at).as_secs_f32())
    }

    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at).as_secs_f32() >= lifetime()
    }
}

/// Active toasts plus notifications scheduled for a later instant.
///
/// A scheduled notification cannot be cancelled once queued.
#[derive(Debug, Default)]
pub struct ToastQueue {
    active: Vec<Toast>,
    scheduled: Vec<(Instant, String)>,
}

impl ToastQueue {
    /// Show a toast immediately
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.active.push(Toast::new(message, Instant::now()));
    }

    /// Queue a toast to appear after `delay`
    pub fn show_after(&mut self, delay: Duration, message: impl Into<String>) {
        self.scheduled.push((Instant::now() + delay, message.into()));
    }

    /// Promote due scheduled toasts and drop expired ones
    pub fn tick(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|(at, message)| {
            if *at <= now {
                due.push(message.clone());
                false
            } else {
                true
            }
        });
        for message in due {
            tracing::info!("{message}");
            self.active.push(Toast::new(message, now));
        }
        self.active.retain(|toast| !toast.expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    /// True while anything is visible or pending, so the UI keeps repainting
    pub fn is_live(&self) -> bool {
        !self.active.is_empty() || !self.scheduled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_follows_delay_fade_hold_fade() {
        assert_eq!(opacity_at(0.0), 0.0);
        assert_eq!(opacity_at(0.05), 0.0);
        assert!((opacity_at(0.25) - 0.5).abs() < 1e-4);
        assert_eq!(opacity_at(0.5), 1.0);
        assert_eq!(opacity_at(1.5), 1.0);
        assert!((opacity_at(2.55) - 0.5).abs() < 1e-4);
        assert_eq!(opacity_at(3.0), 0.0);
    }

    #[test]
    fn expired_toasts_are_dropped_on_tick() {
        let mut queue = ToastQueue::default();
        queue.show("saved");
        assert!(queue.is_live());

        let later = Instant::now() + Duration::from_secs(10);
        queue.tick(later);
        assert!(!queue.is_live());
    }

    #[test]
    fn scheduled_toast_appears_only_when_due() {
        let mut queue = ToastQueue::default();
        queue.show_after(Duration::from_secs(2), "Sync complete");

        let now = Instant::now();
        queue.tick(now);
        assert_eq!(queue.iter().count(), 0);
        assert!(queue.is_live());

        queue.tick(now + Duration::from_secs(3));
        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Sync complete"]);
    }
}
