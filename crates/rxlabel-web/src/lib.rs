// crates/rxlabel-web/src/lib.rs
// RxLabel page scripts - WASM entry point and page sections

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod admin;
pub mod api;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod form;
pub mod license;
pub mod timer;
pub mod toast;

// Re-export shared types
pub use rxlabel_types::*;

use api::HttpApi;
use carousel::dom::DomCarousel;
use config::PageConfig;
use license::dom::DomModal;
use toast::dom::{ADMIN_TOAST_CLASS, ADMIN_TOAST_ID, MODAL_TOAST_CLASS, MODAL_TOAST_ID, SharedToast};

// ============================================================================
// Page Sections
// ============================================================================

/// Every controller mounted on the current page. Sections the markup does not
/// contain stay `None`.
pub struct Page {
    pub carousel: Option<Rc<RefCell<DomCarousel>>>,
    pub modal: Option<Rc<RefCell<DomModal>>>,
    pub modal_toast: Option<SharedToast>,
    pub admin_toast: Option<SharedToast>,
    pub status_selects: usize,
    pub invoice_form: bool,
}

impl Page {
    pub fn mount(document: &web_sys::Document, config: &PageConfig) -> Self {
        let api = Rc::new(HttpApi::new(config.api_base.clone()));

        let carousel = carousel::dom::mount(document, &config.carousel);

        let modal_toast = toast::dom::mount(document, MODAL_TOAST_ID, MODAL_TOAST_CLASS, config.modal_toast_ms);
        let modal = license::dom::mount(document, api.clone(), modal_toast.clone());

        let admin_toast = toast::dom::mount(document, ADMIN_TOAST_ID, ADMIN_TOAST_CLASS, config.admin_toast_ms);
        let status_selects = admin::dom::mount_status_selects(document, api.clone(), admin_toast.clone());
        let invoice_form = admin::dom::mount_invoice_form(document, api, admin_toast.clone());

        Self {
            carousel,
            modal,
            modal_toast,
            admin_toast,
            status_selects,
            invoice_form,
        }
    }

    fn summary(&self) -> String {
        format!(
            "carousel={} modal={} status_selects={} invoice_form={}",
            self.carousel.is_some(),
            self.modal.is_some(),
            self.status_selects,
            self.invoice_form,
        )
    }
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Log everything until the page config says otherwise
    _ = console_log::init_with_level(log::Level::Trace);

    let Some(document) = dom::document() else {
        log::error!("No document; RxLabel scripts not started");
        return;
    };

    let config = PageConfig::from_document(&document);
    log::set_max_level(config.log_level().to_level_filter());

    let page = Page::mount(&document, &config);
    log::info!("RxLabel page ready: {}", page.summary());

    // Controllers live for the whole page view
    Box::leak(Box::new(page));
}
