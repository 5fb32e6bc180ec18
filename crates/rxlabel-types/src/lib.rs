// crates/rxlabel-types/src/lib.rs
// Shared wire types for the RxLabel pages (native + WASM compatible)
// No browser-only dependencies allowed here

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════
// REPLIES
// ═══════════════════════════════════════

/// Reply envelope shared by every JSON endpoint the pages call.
///
/// Rejections come back as `success: false` with an optional message,
/// regardless of the HTTP status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiReply {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }

    /// Server message, ignoring blank strings
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

// ═══════════════════════════════════════
// REQUEST STATUS
// ═══════════════════════════════════════

/// Review status of a license request row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a select carries a value the backend would refuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown request status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Body of `POST /admin/requests/{id}/status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

// ═══════════════════════════════════════
// LICENSE REQUEST FORM
// ═══════════════════════════════════════

/// Required inputs of the license request modal.
/// The DOM id and the JSON key are the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseField {
    FacilityName,
    FacilityContact,
    FacilityAddress,
    FacilityEmail,
    LicenseType,
}

impl LicenseField {
    pub const ALL: [LicenseField; 5] = [
        Self::FacilityName,
        Self::FacilityContact,
        Self::FacilityAddress,
        Self::FacilityEmail,
        Self::LicenseType,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::FacilityName => "facility_name",
            Self::FacilityContact => "facility_contact",
            Self::FacilityAddress => "facility_address",
            Self::FacilityEmail => "facility_email",
            Self::LicenseType => "license_type",
        }
    }
}

/// Body of `POST /request-license`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LicenseRequest {
    pub facility_name: String,
    pub facility_contact: String,
    pub facility_address: String,
    pub facility_email: String,
    pub license_type: String,
}

impl LicenseRequest {
    /// Build from a field lookup; values are trimmed
    pub fn from_fields(mut value: impl FnMut(LicenseField) -> String) -> Self {
        let mut take = |field| value(field).trim().to_string();
        Self {
            facility_name: take(LicenseField::FacilityName),
            facility_contact: take(LicenseField::FacilityContact),
            facility_address: take(LicenseField::FacilityAddress),
            facility_email: take(LicenseField::FacilityEmail),
            license_type: take(LicenseField::LicenseType),
        }
    }

    pub fn get(&self, field: LicenseField) -> &str {
        match field {
            LicenseField::FacilityName => &self.facility_name,
            LicenseField::FacilityContact => &self.facility_contact,
            LicenseField::FacilityAddress => &self.facility_address,
            LicenseField::FacilityEmail => &self.facility_email,
            LicenseField::LicenseType => &self.license_type,
        }
    }

    /// Fields left empty, in form order
    pub fn missing(&self) -> Vec<LicenseField> {
        LicenseField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

// ═══════════════════════════════════════
// INVOICE FORM
// ═══════════════════════════════════════

/// Required inputs of the admin invoice form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    Number,
    Amount,
    Currency,
    DueDate,
    Description,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 5] = [
        Self::Number,
        Self::Amount,
        Self::Currency,
        Self::DueDate,
        Self::Description,
    ];

    /// JSON key the backend expects
    pub fn key(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::DueDate => "due_date",
            Self::Description => "description",
        }
    }

    /// DOM id of the input; prefixed so it cannot clash with the license form
    pub fn id(&self) -> &'static str {
        match self {
            Self::Number => "invoice_number",
            Self::Amount => "invoice_amount",
            Self::Currency => "invoice_currency",
            Self::DueDate => "invoice_due_date",
            Self::Description => "invoice_description",
        }
    }
}

/// Body of `POST /admin/requests/{id}/invoice`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceRequest {
    pub number: String,
    pub amount: String,
    pub currency: String,
    pub due_date: String,
    pub description: String,
}

impl InvoiceRequest {
    pub fn from_fields(mut value: impl FnMut(InvoiceField) -> String) -> Self {
        let mut take = |field| value(field).trim().to_string();
        Self {
            number: take(InvoiceField::Number),
            amount: take(InvoiceField::Amount),
            currency: take(InvoiceField::Currency),
            due_date: take(InvoiceField::DueDate),
            description: take(InvoiceField::Description),
        }
    }

    pub fn get(&self, field: InvoiceField) -> &str {
        match field {
            InvoiceField::Number => &self.number,
            InvoiceField::Amount => &self.amount,
            InvoiceField::Currency => &self.currency,
            InvoiceField::DueDate => &self.due_date,
            InvoiceField::Description => &self.description,
        }
    }

    pub fn missing(&self) -> Vec<InvoiceField> {
        InvoiceField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // ApiReply tests
    // ============================================================================

    #[test]
    fn test_reply_without_message() {
        let reply: ApiReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, None);
    }

    #[test]
    fn test_reply_message_fallback() {
        let reply: ApiReply =
            serde_json::from_str(r#"{"success": false, "message": "Invalid status."}"#).unwrap();
        assert_eq!(reply.message_or("fallback"), "Invalid status.");

        let blank = ApiReply::rejected("   ");
        assert_eq!(blank.message_or("fallback"), "fallback");
        assert_eq!(ApiReply::ok().message_or("fallback"), "fallback");
    }

    // ============================================================================
    // RequestStatus tests
    // ============================================================================

    #[test]
    fn test_status_update_serialize() {
        let body = StatusUpdate { status: RequestStatus::Approved };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"approved"}"#);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("pending".parse::<RequestStatus>(), Ok(RequestStatus::Pending));
        assert_eq!("rejected".parse::<RequestStatus>(), Ok(RequestStatus::Rejected));
        assert_eq!(
            "Approved".parse::<RequestStatus>(),
            Err(UnknownStatus("Approved".to_string()))
        );
    }

    // ============================================================================
    // Form tests
    // ============================================================================

    #[test]
    fn test_license_request_trims_and_reports_missing() {
        let req = LicenseRequest::from_fields(|field| match field {
            LicenseField::FacilityName => "  Mercy Clinic ".to_string(),
            LicenseField::FacilityEmail => "   ".to_string(),
            LicenseField::LicenseType => "Standard – Starter Package".to_string(),
            _ => "x".to_string(),
        });

        assert_eq!(req.facility_name, "Mercy Clinic");
        assert_eq!(req.missing(), vec![LicenseField::FacilityEmail]);
    }

    #[test]
    fn test_license_request_json_keys_match_ids() {
        let req = LicenseRequest::from_fields(|field| field.id().to_string());
        let json = serde_json::to_value(&req).unwrap();
        for field in LicenseField::ALL {
            assert_eq!(json[field.id()], field.id());
        }
    }

    #[test]
    fn test_invoice_request_keys() {
        let req = InvoiceRequest::from_fields(|field| field.key().to_uppercase());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["due_date"], "DUE_DATE");
        assert!(req.missing().is_empty());
        assert_eq!(InvoiceField::DueDate.id(), "invoice_due_date");
    }
}
