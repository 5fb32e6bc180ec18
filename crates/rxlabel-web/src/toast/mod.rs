// crates/rxlabel-web/src/toast/mod.rs
//! Transient notification banner.
//!
//! One primitive backs both the admin toast and the modal toast; they only
//! differ in element, base CSS class and how long a message stays visible.

pub mod dom;

use crate::timer::Timer;

/// A user-facing outcome: what to say and whether it is an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true }
    }
}

pub trait ToastSurface {
    fn set_message(&mut self, text: &str);
    fn set_class(&mut self, class: &str);
}

pub struct Toast<S: ToastSurface, T: Timer> {
    surface: S,
    timer: T,
    base_class: &'static str,
    duration_ms: u32,
    is_error: bool,
    visible: bool,
}

impl<S: ToastSurface, T: Timer> Toast<S, T> {
    pub fn new(surface: S, timer: T, base_class: &'static str, duration_ms: u32) -> Self {
        Self {
            surface,
            timer,
            base_class,
            duration_ms,
            is_error: false,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Display `notice`; a message already on screen is replaced and its
    /// hide countdown restarted.
    pub fn show(&mut self, notice: &Notice) {
        self.is_error = notice.is_error;
        self.visible = true;
        self.surface.set_message(&notice.message);
        self.surface.set_class(&self.class());
        self.timer.start(self.duration_ms);
    }

    /// Hide timer fired
    pub fn hide(&mut self) {
        self.visible = false;
        self.surface.set_class(&self.class());
    }

    fn class(&self) -> String {
        let mut class = self.base_class.to_string();
        if self.is_error {
            class.push_str(" error");
        }
        if self.visible {
            class.push_str(" show");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::{ManualTimer, TimerCall};

    #[derive(Debug, Default)]
    struct FakeSurface {
        text: String,
        class: String,
    }

    impl ToastSurface for FakeSurface {
        fn set_message(&mut self, text: &str) {
            self.text = text.to_string();
        }

        fn set_class(&mut self, class: &str) {
            self.class = class.to_string();
        }
    }

    #[test]
    fn test_success_toast_shows_then_hides() {
        let timer = ManualTimer::new();
        let mut toast = Toast::new(FakeSurface::default(), timer.clone(), "admin-toast", 3500);

        toast.show(&Notice::success("Request #4 marked as \"approved\"."));
        assert_eq!(toast.surface().class, "admin-toast show");
        assert_eq!(toast.surface().text, "Request #4 marked as \"approved\".");
        assert_eq!(*timer.armed.borrow(), Some(3500));

        toast.hide();
        assert_eq!(toast.surface().class, "admin-toast");
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_error_toast_keeps_error_class_when_hidden() {
        let timer = ManualTimer::new();
        let mut toast = Toast::new(FakeSurface::default(), timer, "toast", 4000);

        toast.show(&Notice::error("Network error. Please try again."));
        assert_eq!(toast.surface().class, "toast error show");
        toast.hide();
        assert_eq!(toast.surface().class, "toast error");
    }

    #[test]
    fn test_new_message_restarts_hide_countdown() {
        let timer = ManualTimer::new();
        let mut toast = Toast::new(FakeSurface::default(), timer.clone(), "toast", 4000);

        toast.show(&Notice::error("first"));
        toast.show(&Notice::success("second"));

        assert_eq!(
            *timer.calls.borrow(),
            vec![TimerCall::Start(4000), TimerCall::Start(4000)]
        );
        assert_eq!(toast.surface().class, "toast show");
        assert_eq!(toast.surface().text, "second");
    }
}
