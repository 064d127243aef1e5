//! Page-session state: the loaded image plus the filter pipeline.
//!
//! [`Session`] replaces the ambient globals of a typical script-driven
//! page (`selectedFilters`, `currentImage`) with one explicit value a
//! single controller owns. UI event handlers receive it and issue
//! commands; nothing else holds pipeline state, so the submission
//! gates are testable with no browser and no network.

use crate::pipeline::FilterPipeline;
use crate::types::FilterInvocation;

/// A user-supplied image, held as the raw uploaded bytes.
///
/// The image is never decoded client-side; the bytes travel to the
/// service verbatim in the multipart `file` field, with the original
/// filename and MIME type preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Original filename, forwarded in the multipart part.
    pub filename: String,
    /// MIME type inferred from the file extension.
    pub mime: String,
}

/// A submission rejected before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Applying filters requires a loaded image.
    #[error("load an image first")]
    NoImage,

    /// Both submission paths require at least one selected filter.
    #[error("select at least one filter")]
    EmptyPipeline,
}

/// The validated ingredients of an apply request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPayload<'a> {
    /// The image to upload.
    pub image: &'a SourceImage,
    /// The serialized pipeline, in application order.
    pub filters: Vec<FilterInvocation>,
}

/// All state owned by one page session.
///
/// Created empty on page load, never persisted. Serialization reads
/// the session; only the explicit commands mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pipeline: FilterPipeline,
    image: Option<SourceImage>,
}

impl Session {
    /// Create an empty session: no image, no filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pipeline: FilterPipeline::new(),
            image: None,
        }
    }

    /// The filter pipeline, read-only.
    #[must_use]
    pub const fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// The filter pipeline, for issuing mutation commands.
    pub const fn pipeline_mut(&mut self) -> &mut FilterPipeline {
        &mut self.pipeline
    }

    /// The currently loaded image, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Whether an image has been loaded.
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Replace the loaded image. The pipeline is left untouched so a
    /// user can swap images under an existing filter stack.
    pub fn load_image(&mut self, image: SourceImage) {
        self.image = Some(image);
    }

    /// Drop the loaded image, keeping the pipeline.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Clear everything: image and pipeline, in lockstep with the UI
    /// reset that removes every rendered parameter panel.
    pub fn reset(&mut self) {
        self.image = None;
        self.pipeline.clear();
    }

    /// Validation gate for the apply path.
    ///
    /// Checks for a loaded image first, then for a non-empty pipeline,
    /// mirroring the order a user sees the page in. On success the
    /// caller gets everything the apply request needs; on failure no
    /// network call must be made.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoImage`] when no image is loaded;
    /// [`ValidationError::EmptyPipeline`] when no filter is selected.
    pub fn apply_payload(&self) -> Result<ApplyPayload<'_>, ValidationError> {
        let image = self.image.as_ref().ok_or(ValidationError::NoImage)?;
        if self.pipeline.is_empty() {
            return Err(ValidationError::EmptyPipeline);
        }
        Ok(ApplyPayload {
            image,
            filters: self.pipeline.serialize_for_apply(),
        })
    }

    /// Validation gate for the code-export path.
    ///
    /// Only requires a non-empty pipeline -- exporting code does not
    /// need an image. This asymmetry with
    /// [`apply_payload`](Self::apply_payload) is deliberate.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyPipeline`] when no filter is selected.
    pub fn export_payload(&self) -> Result<Vec<FilterInvocation>, ValidationError> {
        if self.pipeline.is_empty() {
            return Err(ValidationError::EmptyPipeline);
        }
        Ok(self.pipeline.serialize_for_export())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::FilterKind;

    fn png_image() -> SourceImage {
        SourceImage {
            bytes: vec![0x89, b'P', b'N', b'G'],
            filename: "photo.png".to_owned(),
            mime: "image/png".to_owned(),
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(!session.has_image());
        assert!(session.pipeline().is_empty());
    }

    #[test]
    fn apply_without_image_fails_before_emptiness_check() {
        // No image AND empty pipeline: the image check wins.
        let session = Session::new();
        assert_eq!(session.apply_payload().unwrap_err(), ValidationError::NoImage);
    }

    #[test]
    fn apply_with_image_but_empty_pipeline_fails() {
        let mut session = Session::new();
        session.load_image(png_image());
        assert_eq!(
            session.apply_payload().unwrap_err(),
            ValidationError::EmptyPipeline,
        );
    }

    #[test]
    fn apply_with_image_and_filters_yields_payload() {
        let mut session = Session::new();
        session.load_image(png_image());
        session.pipeline_mut().add(FilterKind::Gray);
        let payload = session.apply_payload().unwrap();
        assert_eq!(payload.image.filename, "photo.png");
        assert_eq!(payload.filters.len(), 1);
        assert_eq!(payload.filters[0].name, "gray");
    }

    #[test]
    fn export_needs_no_image() {
        let mut session = Session::new();
        session.pipeline_mut().add(FilterKind::Gray);
        session.pipeline_mut().add(FilterKind::Invert);
        let filters = session.export_payload().unwrap();
        let keys: Vec<&str> = filters.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(keys, vec!["gray", "invert"]);
    }

    #[test]
    fn export_with_empty_pipeline_fails() {
        let mut session = Session::new();
        session.load_image(png_image());
        assert_eq!(
            session.export_payload().unwrap_err(),
            ValidationError::EmptyPipeline,
        );
    }

    #[test]
    fn clear_image_keeps_pipeline() {
        let mut session = Session::new();
        session.load_image(png_image());
        session.pipeline_mut().add(FilterKind::Blur);
        session.clear_image();
        assert!(!session.has_image());
        assert_eq!(session.pipeline().len(), 1);
    }

    #[test]
    fn reset_clears_image_and_pipeline() {
        let mut session = Session::new();
        session.load_image(png_image());
        session.pipeline_mut().add(FilterKind::Gray);
        session.pipeline_mut().add(FilterKind::Blur);
        session.pipeline_mut().add(FilterKind::Canny);
        session.reset();
        assert!(!session.has_image());
        assert!(session.pipeline().is_empty());
        assert!(session.export_payload().is_err());
    }

    #[test]
    fn loading_a_new_image_replaces_the_old_one() {
        let mut session = Session::new();
        session.load_image(png_image());
        session.load_image(SourceImage {
            bytes: vec![1, 2, 3],
            filename: "other.jpg".to_owned(),
            mime: "image/jpeg".to_owned(),
        });
        assert_eq!(session.image().unwrap().filename, "other.jpg");
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::NoImage.to_string(), "load an image first");
        assert_eq!(
            ValidationError::EmptyPipeline.to_string(),
            "select at least one filter",
        );
    }
}
