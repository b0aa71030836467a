//! HTTP client for the extraction service.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::{ApiConfig, PDF_MIME_TYPE};
use crate::types::{AppError, AppResult, ProcessingTask, UploadResponse};

/// Upload endpoint a file goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRoute {
    /// `/api/pdf/upload`
    Document,
    /// `/api/image/upload`
    Image,
}

impl UploadRoute {
    /// PDFs go to the document endpoint, every other type to the image one.
    pub fn for_mime(mime: &str) -> Self {
        if mime.trim().eq_ignore_ascii_case(PDF_MIME_TYPE) {
            UploadRoute::Document
        } else {
            UploadRoute::Image
        }
    }

    pub fn url(self, config: &ApiConfig) -> String {
        match self {
            UploadRoute::Document => config.pdf_upload_url(),
            UploadRoute::Image => config.image_upload_url(),
        }
    }
}

/// Client for the extraction service endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Upload a document or image as multipart form data (field `file`).
    pub async fn submit_document(&self, file: &File) -> AppResult<UploadResponse> {
        let route = UploadRoute::for_mime(&file.type_());

        let form_data = FormData::new()
            .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

        let url = route.url(&self.config);
        log::info!("📤 Uploading {} to {}", file.name(), url);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        decode(response).await
    }

    /// Fetch one status snapshot of a task.
    pub async fn fetch_status(&self, task_id: &str) -> AppResult<ProcessingTask> {
        let response = Request::get(&self.config.status_url(task_id))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let mut task: ProcessingTask = decode(response).await?;
        task.task_id = task_id.to_string();
        Ok(task)
    }

    /// URL of the rendered image of an extraction. No request is made.
    pub fn image_url(&self, image_id: &str) -> String {
        self.config.image_url(image_id)
    }

    /// Whether the service answers its health endpoint.
    pub async fn check_health(&self) -> AppResult<bool> {
        let response = Request::get(&self.config.health_url())
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(response.ok())
    }
}

/// Turn a response into `T`, or into an error for non-2xx statuses.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::from_response(response.status(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}
