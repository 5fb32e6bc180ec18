// crates/rxlabel-web/src/admin/mod.rs
// Admin requests table: status selects and the invoice form

pub mod dom;
pub mod invoice;
pub mod status;

pub use invoice::send_invoice;
pub use status::{StatusControl, seed, update_status};
