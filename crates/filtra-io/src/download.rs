//! File downloads via temporary anchor elements.
//!
//! Dioxus has no built-in download API. Generated code is downloaded by
//! wrapping it in a `Blob` and clicking a temporary `<a>` element; the
//! processed image is already hosted by the service, so its download
//! anchor points straight at the service URL.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Download in-memory text as a file.
///
/// Creates a `Blob` from `data`, generates an object URL, and
/// programmatically clicks a temporary `<a download="filename">`
/// element. The object URL is revoked after the click.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_text_download(
    data: &str,
    filename: &str,
    mime_type: &str,
) -> Result<(), DownloadError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(data));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let result = click_anchor(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

/// Download an already-hosted resource, such as the processed image the
/// service serves at its `image_url`.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if element creation or DOM
/// insertion fails.
pub fn trigger_url_download(url: &str, filename: &str) -> Result<(), DownloadError> {
    click_anchor(url, filename)
}

/// Create a temporary `<a href=url download=filename>`, click it, and
/// remove it again.
fn click_anchor(url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup -- the download is already initiated.
    let _ = body.remove_child(&anchor);

    Ok(())
}
