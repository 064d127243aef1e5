//! HTTP client for the two filter-service endpoints.
//!
//! [`ApiClient`] submits the pipeline to the remote service via the
//! browser `fetch` API: a multipart POST to `/apply` carrying the image
//! bytes and the JSON-encoded filter sequence, and a JSON POST to
//! `/export` requesting generated source code for the same sequence.
//!
//! Both calls are async and non-blocking; neither retries. A non-2xx
//! status, a network fault, or a success body missing its required
//! fields all surface as [`ApiError`], with the server's own error text
//! included when it sent any.

use filtra_pipeline::{ApplyPayload, FilterInvocation};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

/// Errors from a service submission.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request payload could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The browser failed to issue the request (offline, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("server error ({status}): {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error text from the response body, when the server sent any.
        message: String,
    },

    /// A 2xx response whose body was not the expected shape.
    #[error("unexpected response: {0}")]
    Response(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        Self::Network(format!("{value:?}"))
    }
}

/// Success body of `POST /apply`.
///
/// All fields are required; a 2xx body missing any of them is treated
/// as a failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplyResponse {
    /// Where the service hosts the processed image.
    pub image_url: String,
    /// Processed image width in pixels.
    pub width: u32,
    /// Processed image height in pixels.
    pub height: u32,
}

/// Success body of `POST /export`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportResponse {
    /// Generated source code reproducing the pipeline.
    pub code: String,
}

/// Request body of `POST /export`.
#[derive(Serialize)]
struct ExportRequest<'a> {
    filters: &'a [FilterInvocation],
}

/// Error body the service sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the filter service.
///
/// `base` is prefixed to every endpoint path; the default empty base
/// targets the origin the page was served from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// Create a client for a service rooted at `base` (no trailing
    /// slash), e.g. `"https://filters.example.net"`.
    #[must_use]
    pub const fn new(base: String) -> Self {
        Self { base }
    }

    /// Submit the image and filter sequence for processing.
    ///
    /// The multipart body carries the image bytes under `file` (with
    /// the original filename and MIME type) and the JSON-encoded filter
    /// sequence under `filters`, in pipeline order.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] if the filter sequence cannot be
    /// serialized, [`ApiError::Network`] on fetch failure,
    /// [`ApiError::Http`] on a non-2xx status, and
    /// [`ApiError::Response`] when the success body is missing
    /// `image_url` or the dimensions.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn apply(&self, payload: &ApplyPayload<'_>) -> Result<ApplyResponse, ApiError> {
        let filters_json = serde_json::to_string(&payload.filters)
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        // Assemble the multipart body. The browser picks the boundary
        // and content type itself, so no explicit header is set.
        let form = FormData::new()?;
        let bytes = js_sys::Uint8Array::from(payload.image.bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&bytes);
        let opts = BlobPropertyBag::new();
        opts.set_type(&payload.image.mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;
        form.append_with_blob_and_filename("file", &blob, &payload.image.filename)?;
        form.append_with_str("filters", &filters_json)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from(form));
        let request = Request::new_with_str_and_init(&self.endpoint("/apply"), &init)?;

        let body = send(&request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Response(e.to_string()))
    }

    /// Request generated source code for the filter sequence.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] if the sequence cannot be serialized,
    /// [`ApiError::Network`] on fetch failure, [`ApiError::Http`] on a
    /// non-2xx status, and [`ApiError::Response`] when the success body
    /// is missing `code`.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn export_code(
        &self,
        filters: &[FilterInvocation],
    ) -> Result<ExportResponse, ApiError> {
        let body_json = serde_json::to_string(&ExportRequest { filters })
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&JsValue::from(headers));
        init.set_body(&JsValue::from_str(&body_json));
        let request = Request::new_with_str_and_init(&self.endpoint("/export"), &init)?;

        let body = send(&request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Response(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// Issue a request and return the response body text of a 2xx answer.
///
/// Non-2xx statuses become [`ApiError::Http`], carrying the body's
/// `error` field when the server sent JSON, the raw body otherwise.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn send(request: &Request) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window".into()))?;
    let response_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| ApiError::Response("fetch did not produce a Response".into()))?;

    let text_value = JsFuture::from(response.text()?).await?;
    let text = text_value.as_string().unwrap_or_default();

    if response.ok() {
        Ok(text)
    } else {
        Err(ApiError::Http {
            status: response.status(),
            message: error_message(&text),
        })
    }
}

/// Extract a displayable message from an error response body.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no detail provided".to_owned()
    } else {
        trimmed.to_owned()
    }
}
