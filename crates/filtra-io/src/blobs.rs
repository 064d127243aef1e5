//! Blob URL creation for in-memory image bytes.
//!
//! The uploaded image is previewed by handing the browser the original
//! bytes as a Blob object URL -- no decoding happens client-side.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors from Blob or object-URL creation.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap raw file bytes in a Blob and return an object URL usable as an
/// `<img src>`.
///
/// The returned URL must be revoked via [`revoke_object_url`] when no
/// longer displayed to avoid leaking the backing memory.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_object_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke an object URL previously created by [`bytes_to_object_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
