//! Transient, user-dismissable notification with auto-hide.
//!
//! Shown when a policy violation is rejected (for instance disabling the
//! last remaining input method). Hides itself after a delay unless
//! re-shown; re-showing replaces the pending hide deadline.

use crate::timer::OneShotTimer;

/// Auto-hide delay when none is given.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 10_000;

/// A single notification slot.
#[derive(Debug, Default)]
pub struct Notification {
    text: String,
    action_text: String,
    visible: bool,
    hide_timer: OneShotTimer,
}

impl Notification {
    /// Create a hidden notification slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` with a dismiss action label, hiding after the default
    /// delay.
    pub fn show(&mut self, now_ms: u64, text: &str, action_text: &str) {
        self.show_with_delay(now_ms, text, action_text, DEFAULT_HIDE_DELAY_MS);
    }

    /// Show with an explicit auto-hide delay. Replaces any pending hide.
    pub fn show_with_delay(&mut self, now_ms: u64, text: &str, action_text: &str, delay_ms: u64) {
        self.text = text.to_string();
        self.action_text = action_text.to_string();
        self.visible = true;
        self.hide_timer.arm(now_ms, delay_ms);
    }

    /// Hide immediately (the user clicked the action link).
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.hide_timer.cancel();
    }

    /// Advance time. Returns `true` if the notification just auto-hid.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.hide_timer.poll(now_ms) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Whether the notification is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current action label.
    pub fn action_text(&self) -> &str {
        &self.action_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_then_auto_hides() {
        let mut n = Notification::new();
        n.show(0, "please add another input method", "ok");
        assert!(n.is_visible());
        assert_eq!(n.text(), "please add another input method");
        assert!(!n.poll(DEFAULT_HIDE_DELAY_MS - 1));
        assert!(n.is_visible());
        assert!(n.poll(DEFAULT_HIDE_DELAY_MS));
        assert!(!n.is_visible());
    }

    #[test]
    fn dismiss_cancels_pending_hide() {
        let mut n = Notification::new();
        n.show(0, "msg", "ok");
        n.dismiss();
        assert!(!n.is_visible());
        // The hide deadline is gone; polling reports nothing new.
        assert!(!n.poll(DEFAULT_HIDE_DELAY_MS));
    }

    #[test]
    fn reshow_replaces_hide_deadline() {
        let mut n = Notification::new();
        n.show(0, "first", "ok");
        n.show(5_000, "second", "ok");
        assert!(!n.poll(DEFAULT_HIDE_DELAY_MS));
        assert!(n.is_visible());
        assert_eq!(n.text(), "second");
        assert!(n.poll(5_000 + DEFAULT_HIDE_DELAY_MS));
    }

    #[test]
    fn custom_delay() {
        let mut n = Notification::new();
        n.show_with_delay(100, "msg", "ok", 500);
        assert!(!n.poll(599));
        assert!(n.poll(600));
    }
}
