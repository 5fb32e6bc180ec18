// crates/rxlabel-web/src/form.rs
// Required-field forms: collection, inline validation markers, busy state

use rxlabel_types::{InvoiceField, LicenseField};
use web_sys::{Document, Element, HtmlButtonElement};

use crate::dom::{by_id, control_value, set_class, set_control_value};

pub const FILL_REQUIRED: &str = "Please fill in all required fields.";

/// A form input addressable by DOM id
pub trait FormField: Copy + PartialEq + 'static {
    fn element_id(self) -> &'static str;
}

impl FormField for LicenseField {
    fn element_id(self) -> &'static str {
        self.id()
    }
}

impl FormField for InvoiceField {
    fn element_id(self) -> &'static str {
        self.id()
    }
}

/// Inputs of one form plus its submit control
pub trait FormSurface<F: FormField> {
    /// Raw value; missing inputs read as empty
    fn value(&self, field: F) -> String;
    fn clear_value(&self, field: F);
    fn set_invalid(&self, field: F, invalid: bool);
    /// Disable or re-enable the submit control and relabel it
    fn set_busy(&self, busy: bool, label: &str);
}

pub fn clear_errors<F: FormField>(surface: &impl FormSurface<F>, fields: &[F]) {
    for field in fields {
        surface.set_invalid(*field, false);
    }
}

pub fn clear_values<F: FormField>(surface: &impl FormSurface<F>, fields: &[F]) {
    for field in fields {
        surface.clear_value(*field);
    }
}

/// Flag exactly the `missing` fields; returns true when nothing is missing
pub fn mark_missing<F: FormField>(surface: &impl FormSurface<F>, fields: &[F], missing: &[F]) -> bool {
    for field in fields {
        surface.set_invalid(*field, missing.contains(field));
    }
    missing.is_empty()
}

/// Form inputs looked up by id in the live document
#[derive(Clone)]
pub struct DomForm {
    document: Document,
    submit: Option<HtmlButtonElement>,
}

impl DomForm {
    pub fn new(document: &Document, submit_id: &str) -> Self {
        let submit = by_id::<HtmlButtonElement>(document, submit_id);
        if submit.is_none() {
            log::warn!("Submit button #{} not found", submit_id);
        }
        Self { document: document.clone(), submit }
    }

    pub fn submit_button(&self) -> Option<&HtmlButtonElement> {
        self.submit.as_ref()
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl<F: FormField> FormSurface<F> for DomForm {
    fn value(&self, field: F) -> String {
        self.element(field.element_id())
            .and_then(|el| control_value(&el))
            .unwrap_or_default()
    }

    fn clear_value(&self, field: F) {
        if let Some(el) = self.element(field.element_id()) {
            set_control_value(&el, "");
        }
    }

    fn set_invalid(&self, field: F, invalid: bool) {
        if let Some(el) = self.element(field.element_id()) {
            set_class(&el, "error", invalid);
        }
    }

    fn set_busy(&self, busy: bool, label: &str) {
        if let Some(button) = &self.submit {
            button.set_disabled(busy);
            button.set_text_content(Some(label));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeForm;
    use super::*;

    #[test]
    fn test_mark_missing_flags_only_missing() {
        let form = FakeForm::default();
        form.invalid.borrow_mut().insert("facility_name");

        let ok = mark_missing(&form, &LicenseField::ALL, &[LicenseField::FacilityEmail]);
        assert!(!ok);
        assert!(form.is_invalid("facility_email"));
        assert!(!form.is_invalid("facility_name"));
    }

    #[test]
    fn test_clear_values_and_errors() {
        let form = FakeForm::with_values(&[("invoice_number", "INV-1"), ("invoice_amount", "90")]);
        form.invalid.borrow_mut().insert("invoice_amount");

        clear_values(&form, &InvoiceField::ALL);
        clear_errors(&form, &InvoiceField::ALL);

        assert_eq!(form.value_of("invoice_number"), "");
        assert!(form.invalid.borrow().is_empty());
    }
}
