// crates/rxlabel-web/src/license/dom.rs
// Binds the license modal to the landing page markup

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlOptionElement, HtmlSelectElement, KeyboardEvent};

use super::modal::{Modal, ModalSurface};
use super::submit::submit_request;
use crate::api::HttpApi;
use crate::dom::{by_id, listen, query_all, set_class};
use crate::form::DomForm;
use crate::toast::dom::{SharedToast, notify};

pub const OVERLAY_ID: &str = "modalOverlay";
pub const LICENSE_SELECT_ID: &str = "license_type";
pub const SUBMIT_ID: &str = "submitBtn";
pub const OPEN_ATTR: &str = "data-open-modal";
pub const CLOSE_ATTR: &str = "data-close-modal";

pub type DomModal = Modal<DomModalSurface, DomForm>;

pub struct DomModalSurface {
    overlay: Element,
    body: Option<HtmlElement>,
    select: Option<HtmlSelectElement>,
}

impl ModalSurface for DomModalSurface {
    fn set_open(&self, open: bool) {
        set_class(&self.overlay, "open", open);
    }

    fn lock_scroll(&self, locked: bool) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Could not toggle page scroll: {:?}", e);
        }
    }

    fn has_license_option(&self, value: &str) -> bool {
        let Some(select) = &self.select else { return false };
        let options = select.options();
        (0..options.length())
            .filter_map(|i| options.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .any(|opt| opt.value() == value)
    }

    fn select_license(&self, value: &str) {
        if let Some(select) = &self.select {
            select.set_value(value);
        }
    }
}

/// Wire the modal if the page has one
pub fn mount(document: &Document, api: Rc<HttpApi>, toast: Option<SharedToast>) -> Option<Rc<RefCell<DomModal>>> {
    let overlay = document.get_element_by_id(OVERLAY_ID)?;

    let surface = DomModalSurface {
        overlay: overlay.clone(),
        body: document.body(),
        select: by_id::<HtmlSelectElement>(document, LICENSE_SELECT_ID),
    };
    let form = DomForm::new(document, SUBMIT_ID);
    let modal = Rc::new(RefCell::new(Modal::new(surface, form.clone())));

    for trigger in query_all(document, &format!("[{}]", OPEN_ATTR)) {
        let m = modal.clone();
        let license_type = trigger.get_attribute(OPEN_ATTR);
        listen(&trigger, "click", move |e: Event| {
            e.prevent_default();
            m.borrow_mut().open(license_type.as_deref());
        });
    }

    for trigger in query_all(document, &format!("[{}]", CLOSE_ATTR)) {
        let m = modal.clone();
        listen(&trigger, "click", move |_: Event| m.borrow_mut().close());
    }

    {
        let m = modal.clone();
        let backdrop = overlay.clone();
        listen(&overlay, "click", move |e: Event| {
            let on_overlay = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == backdrop);
            m.borrow_mut().backdrop_click(on_overlay);
        });
    }

    {
        let m = modal.clone();
        listen(document, "keydown", move |e: KeyboardEvent| m.borrow_mut().key_down(&e.key()));
    }

    if let Some(button) = form.submit_button().cloned() {
        let m = modal.clone();
        listen(&button, "click", move |e: Event| {
            e.prevent_default();
            let api = api.clone();
            let form = form.clone();
            let modal = m.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let outcome = submit_request(&*api, &form).await;
                if outcome.close_modal {
                    modal.borrow_mut().close();
                }
                notify(toast.as_ref(), &outcome.notice);
            });
        });
    }

    log::info!("License modal mounted");
    Some(modal)
}
