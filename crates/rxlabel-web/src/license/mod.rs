// crates/rxlabel-web/src/license/mod.rs
// License request modal on the landing page

pub mod dom;
pub mod modal;
pub mod submit;

pub use modal::{Modal, ModalSurface};
pub use submit::{SubmitOutcome, submit_request};
