// crates/rxlabel-web/src/api.rs
// HTTP API functions for communicating with the RxLabel server

use async_trait::async_trait;
use serde::Serialize;

use rxlabel_types::{ApiReply, InvoiceRequest, LicenseRequest, StatusUpdate};

pub const LICENSE_REQUEST_PATH: &str = "/request-license";

pub fn status_path(id: i64) -> String {
    format!("/admin/requests/{}/status", id)
}

pub fn invoice_path(id: i64) -> String {
    format!("/admin/requests/{}/invoice", id)
}

/// The request never produced a usable reply.
///
/// Explicit rejections are not errors; they arrive as `ApiReply { success: false }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unreadable reply: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait AdminApi {
    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<ApiReply, ApiError>;
    async fn send_invoice(&self, id: i64, invoice: &InvoiceRequest) -> Result<ApiReply, ApiError>;
}

#[async_trait(?Send)]
pub trait LicenseApi {
    async fn request_license(&self, request: &LicenseRequest) -> Result<ApiReply, ApiError>;
}

/// fetch-backed client; endpoints resolve against `base` (empty = same origin)
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiReply, ApiError> {
        let url = self.url(path);

        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Rejections carry a JSON body even on 4xx
        if !resp.ok() {
            log::debug!("POST {} -> HTTP {}", url, resp.status());
        }

        resp.json::<ApiReply>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AdminApi for HttpApi {
    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<ApiReply, ApiError> {
        self.post_json(&status_path(id), update).await
    }

    async fn send_invoice(&self, id: i64, invoice: &InvoiceRequest) -> Result<ApiReply, ApiError> {
        self.post_json(&invoice_path(id), invoice).await
    }
}

#[async_trait(?Send)]
impl LicenseApi for HttpApi {
    async fn request_license(&self, request: &LicenseRequest) -> Result<ApiReply, ApiError> {
        self.post_json(LICENSE_REQUEST_PATH, request).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone)]
    pub enum Scripted {
        Reply(ApiReply),
        NetworkDown,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Status(i64, StatusUpdate),
        Invoice(i64, InvoiceRequest),
        License(LicenseRequest),
    }

    /// Answers every call with the scripted result and records what was sent
    #[derive(Debug)]
    pub struct FakeApi {
        script: Scripted,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        pub fn replying(reply: ApiReply) -> Self {
            Self { script: Scripted::Reply(reply), calls: RefCell::new(Vec::new()) }
        }

        pub fn offline() -> Self {
            Self { script: Scripted::NetworkDown, calls: RefCell::new(Vec::new()) }
        }

        fn answer(&self, call: Call) -> Result<ApiReply, ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.script {
                Scripted::Reply(reply) => Ok(reply.clone()),
                Scripted::NetworkDown => Err(ApiError::Transport("connection refused".to_string())),
            }
        }
    }

    #[async_trait(?Send)]
    impl AdminApi for FakeApi {
        async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<ApiReply, ApiError> {
            self.answer(Call::Status(id, *update))
        }

        async fn send_invoice(&self, id: i64, invoice: &InvoiceRequest) -> Result<ApiReply, ApiError> {
            self.answer(Call::Invoice(id, invoice.clone()))
        }
    }

    #[async_trait(?Send)]
    impl LicenseApi for FakeApi {
        async fn request_license(&self, request: &LicenseRequest) -> Result<ApiReply, ApiError> {
            self.answer(Call::License(request.clone()))
        }
    }
}
