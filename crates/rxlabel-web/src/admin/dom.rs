// crates/rxlabel-web/src/admin/dom.rs
// Binds status selects and the invoice form on the admin pages

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlSelectElement};

use super::invoice::send_invoice;
use super::status::{StatusControl, seed, update_status};
use crate::api::HttpApi;
use crate::dom::{by_id, listen, query_all};
use crate::form::DomForm;
use crate::toast::dom::{SharedToast, notify};

pub const STATUS_SELECTOR: &str = ".action-select";
pub const REQUEST_ID_ATTR: &str = "data-request-id";
pub const INVOICE_FORM_ID: &str = "invoiceForm";
pub const SEND_INVOICE_ID: &str = "sendInvoiceBtn";

/// Status `<select>`; the committed value lives in `data-prev`
#[derive(Clone)]
pub struct DomStatusControl {
    el: HtmlSelectElement,
}

impl StatusControl for DomStatusControl {
    fn value(&self) -> String {
        self.el.value()
    }

    fn set_value(&self, value: &str) {
        self.el.set_value(value);
    }

    fn committed(&self) -> Option<String> {
        self.el.dataset().get("prev")
    }

    fn commit(&self, value: &str) {
        if let Err(e) = self.el.dataset().set("prev", value) {
            log::warn!("Could not store committed status: {:?}", e);
        }
    }
}

fn request_id(el: &Element) -> Option<i64> {
    el.get_attribute(REQUEST_ID_ATTR)?.trim().parse().ok()
}

/// Bind every status select on the page; returns how many were bound
pub fn mount_status_selects(document: &Document, api: Rc<HttpApi>, toast: Option<SharedToast>) -> usize {
    let mut bound = 0;

    for el in query_all(document, STATUS_SELECTOR) {
        let Ok(select) = el.dyn_into::<HtmlSelectElement>() else { continue };
        let control = DomStatusControl { el: select };
        seed(&control);

        let Some(id) = request_id(&control.el) else {
            log::warn!("Status select without {}; skipped", REQUEST_ID_ATTR);
            continue;
        };

        let target = control.el.clone();
        let api = api.clone();
        let toast = toast.clone();
        listen(&target, "change", move |_: Event| {
            let control = control.clone();
            let api = api.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let requested = control.value();
                let notice = update_status(&*api, id, &requested, &control).await;
                notify(toast.as_ref(), &notice);
            });
        });
        bound += 1;
    }

    bound
}

/// Bind the invoice form if the page has one
pub fn mount_invoice_form(document: &Document, api: Rc<HttpApi>, toast: Option<SharedToast>) -> bool {
    let Some(form_el) = by_id::<Element>(document, INVOICE_FORM_ID) else { return false };
    let Some(id) = request_id(&form_el) else {
        log::warn!("#{} without {}; invoice sending disabled", INVOICE_FORM_ID, REQUEST_ID_ATTR);
        return false;
    };

    let form = DomForm::new(document, SEND_INVOICE_ID);
    let Some(button) = form.submit_button().cloned() else { return false };

    listen(&button, "click", move |e: Event| {
        e.prevent_default();
        let form = form.clone();
        let api = api.clone();
        let toast = toast.clone();
        spawn_local(async move {
            let notice = send_invoice(&*api, id, &form).await;
            notify(toast.as_ref(), &notice);
        });
    });

    true
}
