// crates/rxlabel-web/src/license/modal.rs
// License request modal: open/close, pre-selection, dismissal

use rxlabel_types::LicenseField;

use crate::form::{self, FormSurface};

pub trait ModalSurface {
    fn set_open(&self, open: bool);
    /// Stop (or restore) page scrolling behind the overlay
    fn lock_scroll(&self, locked: bool);
    fn has_license_option(&self, value: &str) -> bool;
    fn select_license(&self, value: &str);
}

pub struct Modal<M: ModalSurface, F: FormSurface<LicenseField>> {
    surface: M,
    form: F,
    open: bool,
}

impl<M: ModalSurface, F: FormSurface<LicenseField>> Modal<M, F> {
    pub fn new(surface: M, form: F) -> Self {
        Self { surface, form, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the modal, pre-selecting `license_type` when the select offers it
    pub fn open(&mut self, license_type: Option<&str>) {
        self.open = true;
        self.surface.set_open(true);
        self.surface.lock_scroll(true);

        if let Some(value) = license_type.filter(|v| !v.is_empty()) {
            if self.surface.has_license_option(value) {
                self.surface.select_license(value);
            } else {
                log::debug!("No license option '{}'; leaving selection alone", value);
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.surface.set_open(false);
        self.surface.lock_scroll(false);
        form::clear_errors(&self.form, &LicenseField::ALL);
    }

    /// Clicks inside the dialog bubble up to the overlay; only a click on the
    /// overlay itself dismisses.
    pub fn backdrop_click(&mut self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close();
        }
    }

    pub fn key_down(&mut self, key: &str) {
        if key == "Escape" && self.open {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::testing::FakeForm;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Default)]
    struct FakeOverlay {
        open: Cell<bool>,
        scroll_locked: Cell<bool>,
        options: Vec<&'static str>,
        selected: RefCell<Option<String>>,
    }

    impl ModalSurface for FakeOverlay {
        fn set_open(&self, open: bool) {
            self.open.set(open);
        }

        fn lock_scroll(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn has_license_option(&self, value: &str) -> bool {
            self.options.iter().any(|o| *o == value)
        }

        fn select_license(&self, value: &str) {
            *self.selected.borrow_mut() = Some(value.to_string());
        }
    }

    fn modal() -> Modal<FakeOverlay, FakeForm> {
        let overlay = FakeOverlay {
            options: vec!["Preorder – Starter Package", "Enterprise – Multi-Facility"],
            ..Default::default()
        };
        Modal::new(overlay, FakeForm::default())
    }

    #[test]
    fn test_open_locks_scroll_and_preselects() {
        let mut m = modal();
        m.open(Some("Enterprise – Multi-Facility"));

        assert!(m.is_open());
        assert!(m.surface.open.get());
        assert!(m.surface.scroll_locked.get());
        assert_eq!(*m.surface.selected.borrow(), Some("Enterprise – Multi-Facility".to_string()));
    }

    #[test]
    fn test_unknown_preselection_is_ignored() {
        let mut m = modal();
        m.open(Some("Lifetime"));
        m.open(Some(""));
        m.open(None);
        assert_eq!(*m.surface.selected.borrow(), None);
    }

    #[test]
    fn test_close_restores_scroll_and_clears_errors() {
        let mut m = modal();
        m.form.invalid.borrow_mut().insert("facility_email");
        m.open(None);
        m.close();

        assert!(!m.surface.open.get());
        assert!(!m.surface.scroll_locked.get());
        assert!(m.form.invalid.borrow().is_empty());
    }

    #[test]
    fn test_dismissal() {
        let mut m = modal();
        m.open(None);
        m.backdrop_click(false);
        assert!(m.is_open());
        m.key_down("Enter");
        assert!(m.is_open());
        m.backdrop_click(true);
        assert!(!m.is_open());

        m.open(None);
        m.key_down("Escape");
        assert!(!m.is_open());
    }

    #[test]
    fn test_escape_while_closed_leaves_page_alone() {
        let mut m = modal();
        m.surface.scroll_locked.set(true);
        m.key_down("Escape");
        assert!(m.surface.scroll_locked.get());
    }
}
