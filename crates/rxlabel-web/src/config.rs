// crates/rxlabel-web/src/config.rs
// Page configuration: defaults, optionally overridden by an inline JSON block

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "rxlabel-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    // ── Carousel
    pub carousel: CarouselConfig,

    // ── Toasts (milliseconds visible)
    pub admin_toast_ms: u32,
    pub modal_toast_ms: u32,

    // ── API
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,

    // ── Logging
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            admin_toast_ms: 3500,
            modal_toast_ms: 4000,
            api_base: String::new(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period
    pub interval_ms: u32,
    /// Minimum horizontal travel for a swipe
    pub swipe_threshold: f64,
    /// Vertical drift that turns a short gesture into a page scroll
    pub scroll_cancel_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4500,
            swipe_threshold: 40.0,
            scroll_cancel_threshold: 80.0,
        }
    }
}

impl PageConfig {
    /// Parse overrides; anything malformed falls back to defaults with a warning
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<PageConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }

    /// Read the inline config block from the current document, if any
    pub fn from_document(document: &web_sys::Document) -> Self {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Self::default(),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
