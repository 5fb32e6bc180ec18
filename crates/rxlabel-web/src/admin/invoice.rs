// crates/rxlabel-web/src/admin/invoice.rs
// Invoice form on the admin request detail

use rxlabel_types::{InvoiceField, InvoiceRequest};

use super::status::NETWORK_ERROR;
use crate::api::AdminApi;
use crate::form::{self, FILL_REQUIRED, FormSurface};
use crate::toast::Notice;

pub const SEND_LABEL: &str = "Send Invoice";
pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_DEFAULT: &str = "Invoice sent.";
pub const SEND_FAILED: &str = "Invoice could not be sent.";

/// Validate and send the invoice for request `id`
pub async fn send_invoice<A, F>(api: &A, id: i64, surface: &F) -> Notice
where
    A: AdminApi + ?Sized,
    F: FormSurface<InvoiceField>,
{
    form::clear_errors(surface, &InvoiceField::ALL);

    let invoice = InvoiceRequest::from_fields(|field| surface.value(field));
    if !form::mark_missing(surface, &InvoiceField::ALL, &invoice.missing()) {
        return Notice::error(FILL_REQUIRED);
    }

    surface.set_busy(true, SENDING_LABEL);

    let notice = match api.send_invoice(id, &invoice).await {
        Ok(reply) if reply.success => {
            form::clear_values(surface, &InvoiceField::ALL);
            log::info!("Invoice {} sent for request #{}", invoice.number, id);
            Notice::success(reply.message_or(SENT_DEFAULT))
        }
        Ok(reply) => {
            log::warn!("Invoice for request #{} rejected", id);
            Notice::error(reply.message_or(SEND_FAILED))
        }
        Err(e) => {
            log::warn!("Invoice for request #{} failed: {}", id, e);
            Notice::error(NETWORK_ERROR)
        }
    };

    surface.set_busy(false, SEND_LABEL);
    notice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Call, FakeApi};
    use crate::form::testing::FakeForm;
    use rxlabel_types::ApiReply;

    fn filled() -> FakeForm {
        FakeForm::with_values(&[
            ("invoice_number", "INV-2026-014"),
            ("invoice_amount", " 499.00 "),
            ("invoice_currency", "USD"),
            ("invoice_due_date", "2026-11-30"),
            ("invoice_description", "Standard – Starter Package"),
        ])
    }

    #[tokio::test]
    async fn test_sends_trimmed_invoice_and_clears_form() {
        let api = FakeApi::replying(ApiReply {
            success: true,
            message: Some("Invoice sent to ops@mercy.test".to_string()),
        });
        let form = filled();

        let notice = send_invoice(&api, 5, &form).await;

        assert_eq!(notice, Notice::success("Invoice sent to ops@mercy.test"));
        let calls = api.calls.borrow();
        let Call::Invoice(id, sent) = &calls[0] else { panic!("expected invoice call") };
        assert_eq!(*id, 5);
        assert_eq!(sent.amount, "499.00");
        assert_eq!(form.value_of("invoice_number"), "");
        assert_eq!(
            *form.busy_log.borrow(),
            vec![(true, SENDING_LABEL.to_string()), (false, SEND_LABEL.to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_field_blocks_request() {
        let api = FakeApi::replying(ApiReply::ok());
        let form = filled();
        form.values.borrow_mut().insert("invoice_due_date", "  ".to_string());

        let notice = send_invoice(&api, 5, &form).await;

        assert_eq!(notice, Notice::error(FILL_REQUIRED));
        assert!(api.calls.borrow().is_empty());
        assert!(form.is_invalid("invoice_due_date"));
        assert!(!form.is_invalid("invoice_number"));
        assert!(form.busy_log.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields() {
        let api = FakeApi::replying(ApiReply::rejected("Email not sent: SMTP auth failed"));
        let form = filled();

        let notice = send_invoice(&api, 5, &form).await;

        assert_eq!(notice, Notice::error("Email not sent: SMTP auth failed"));
        assert_eq!(form.value_of("invoice_currency"), "USD");
        assert_eq!(form.busy_log.borrow().last(), Some(&(false, SEND_LABEL.to_string())));
    }

    #[tokio::test]
    async fn test_network_failure() {
        let api = FakeApi::offline();
        let notice = send_invoice(&api, 5, &filled()).await;
        assert_eq!(notice, Notice::error("Network error."));
    }
}
