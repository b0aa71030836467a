//! Application configuration.
//!
//! Centralized configuration for the Chartscope frontend.
//! Every endpoint is derived from a single base URL so the document,
//! image and status routes can never drift apart.

/// Backend API base URL.
///
/// The extraction service (PDF parsing, chart detection, inference).
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Application name shown in the header and page title.
pub const APP_NAME: &str = "Chartscope";

/// Delay between two status polls (in milliseconds).
pub const POLL_INTERVAL_MS: u32 = 2000;

/// File size advertised in the upload form (in bytes).
///
/// 5 MB. Informational only: larger files get a warning but are still
/// submitted, the server enforces its own limit.
pub const ADVERTISED_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME type routed to the document upload endpoint.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// MIME types accepted by the upload form.
pub const ACCEPTED_MIME_TYPES: [&str; 5] = [
    PDF_MIME_TYPE,
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/bmp",
];

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str =
    "application/pdf,image/png,image/jpeg,image/gif,image/bmp,.pdf,.png,.jpg,.jpeg,.gif,.bmp";

/// Whether a MIME type is one the upload form lets through.
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(mime))
}

/// Endpoint layout of the extraction service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config rooted at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pdf_upload_url(&self) -> String {
        format!("{}/api/pdf/upload", self.base_url)
    }

    pub fn image_upload_url(&self) -> String {
        format!("{}/api/image/upload", self.base_url)
    }

    pub fn status_url(&self, task_id: &str) -> String {
        format!("{}/api/pdf/status/{}", self.base_url, task_id)
    }

    pub fn image_url(&self, image_id: &str) -> String {
        format!("{}/api/pdf/images/{}", self.base_url, image_id)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}
