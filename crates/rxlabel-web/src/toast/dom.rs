// crates/rxlabel-web/src/toast/dom.rs
// Toast bound to a page element

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use web_sys::{Document, Element};

use super::{Notice, Toast, ToastSurface};
use crate::timer::BrowserTimer;

pub const ADMIN_TOAST_ID: &str = "adminToast";
pub const ADMIN_TOAST_CLASS: &str = "admin-toast";
pub const MODAL_TOAST_ID: &str = "toast";
pub const MODAL_TOAST_CLASS: &str = "toast";

pub type DomToast = Toast<DomToastSurface, BrowserTimer>;
pub type SharedToast = Rc<RefCell<DomToast>>;

pub struct DomToastSurface {
    el: Element,
}

impl ToastSurface for DomToastSurface {
    fn set_message(&mut self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn set_class(&mut self, class: &str) {
        self.el.set_class_name(class);
    }
}

/// Toast for element `#id`, or `None` when the page has no such element
pub fn mount(document: &Document, id: &str, base_class: &'static str, duration_ms: u32) -> Option<SharedToast> {
    let el = document.get_element_by_id(id)?;

    let handle: Rc<OnceCell<Weak<RefCell<DomToast>>>> = Rc::new(OnceCell::new());
    let timer = {
        let handle = handle.clone();
        BrowserTimer::once(move || {
            if let Some(toast) = handle.get().and_then(Weak::upgrade) {
                toast.borrow_mut().hide();
            }
        })
    };

    let toast = Rc::new(RefCell::new(Toast::new(DomToastSurface { el }, timer, base_class, duration_ms)));
    let _ = handle.set(Rc::downgrade(&toast));
    Some(toast)
}

/// Show `notice` on `toast`; pages without the element still get a log line
pub fn notify(toast: Option<&SharedToast>, notice: &Notice) {
    match toast {
        Some(toast) => toast.borrow_mut().show(notice),
        None if notice.is_error => log::warn!("(no toast element) {}", notice.message),
        None => log::info!("(no toast element) {}", notice.message),
    }
}
