// crates/rxlabel-web/src/admin/status.rs
// Status select on each admin table row

use rxlabel_types::{RequestStatus, StatusUpdate};

use crate::api::AdminApi;
use crate::toast::Notice;

pub const UPDATE_FAILED: &str = "Update failed. Please try again.";
pub const NETWORK_ERROR: &str = "Network error.";

/// A status select plus the last value the server accepted for it
pub trait StatusControl {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn committed(&self) -> Option<String>;
    fn commit(&self, value: &str);
}

/// Record the page-load value as committed so a failed first change can revert
pub fn seed(control: &impl StatusControl) {
    control.commit(&control.value());
}

/// Ask the server to move request `id` to `requested`.
///
/// The control ends on either the newly committed value or the value it had
/// before the change, never anything in between.
pub async fn update_status<A, C>(api: &A, id: i64, requested: &str, control: &C) -> Notice
where
    A: AdminApi + ?Sized,
    C: StatusControl,
{
    let previous = control
        .committed()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| control.value());

    let status = match requested.parse::<RequestStatus>() {
        Ok(status) => status,
        Err(e) => {
            log::warn!("Request #{}: {}", id, e);
            control.set_value(&previous);
            return Notice::error(UPDATE_FAILED);
        }
    };

    match api.update_status(id, &StatusUpdate { status }).await {
        Ok(reply) if reply.success => {
            control.commit(status.as_str());
            log::info!("Request #{} -> {}", id, status);
            Notice::success(format!("Request #{} marked as \"{}\".", id, status))
        }
        Ok(reply) => {
            log::warn!("Request #{} status rejected: {}", id, reply.message_or("no message"));
            control.set_value(&previous);
            Notice::error(UPDATE_FAILED)
        }
        Err(e) => {
            log::warn!("Request #{} status update failed: {}", id, e);
            control.set_value(&previous);
            Notice::error(NETWORK_ERROR)
        }
    }
}
