//! Integration test: walk the user-visible pipeline scenarios end to
//! end, from toggling filters through serialization of both payloads.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use filtra_pipeline::{FilterKind, Session, SourceImage, ValidationError};

fn sample_image() -> SourceImage {
    SourceImage {
        bytes: b"\x89PNG\r\n\x1a\n".to_vec(),
        filename: "sample.png".to_owned(),
        mime: "image/png".to_owned(),
    }
}

#[test]
fn blur_roundtrip_through_apply_payload() {
    let mut session = Session::new();
    session.load_image(sample_image());
    let entry = session.pipeline_mut().add(FilterKind::Blur);

    // Fresh entry serializes the catalog default.
    let payload = session.apply_payload().unwrap();
    let json = serde_json::to_string(&payload.filters).unwrap();
    assert_eq!(json, r#"[{"name":"blur","params":{"ksize":5}}]"#);

    // A slider move is visible in the very next serialization.
    session
        .pipeline_mut()
        .set_parameter(entry, "ksize", 9)
        .unwrap();
    let payload = session.apply_payload().unwrap();
    let json = serde_json::to_string(&payload.filters).unwrap();
    assert_eq!(json, r#"[{"name":"blur","params":{"ksize":9}}]"#);
}

#[test]
fn parameterless_filters_export_as_bare_names() {
    let mut session = Session::new();
    session.pipeline_mut().add(FilterKind::Gray);
    session.pipeline_mut().add(FilterKind::Invert);

    let filters = session.export_payload().unwrap();
    let json = serde_json::to_string(&filters).unwrap();
    assert_eq!(json, r#"[{"name":"gray"},{"name":"invert"}]"#);
}

#[test]
fn full_stack_serializes_in_toggle_order() {
    let mut session = Session::new();
    session.load_image(sample_image());
    for kind in [
        FilterKind::Gray,
        FilterKind::Threshold,
        FilterKind::Erode,
        FilterKind::Dilate,
        FilterKind::Canny,
    ] {
        session.pipeline_mut().add(kind);
    }
    session.pipeline_mut().remove(FilterKind::Erode);

    let payload = session.apply_payload().unwrap();
    let order: Vec<&str> = payload.filters.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(order, vec!["gray", "threshold", "dilate", "canny"]);

    // Export sees the same sequence.
    let export = session.export_payload().unwrap();
    assert_eq!(export, payload.filters);
}

#[test]
fn validation_gates_block_submission_locally() {
    // Apply: image missing.
    let mut session = Session::new();
    session.pipeline_mut().add(FilterKind::Gray);
    assert_eq!(session.apply_payload().unwrap_err(), ValidationError::NoImage);

    // Apply and export: empty pipeline.
    let mut session = Session::new();
    session.load_image(sample_image());
    assert_eq!(
        session.apply_payload().unwrap_err(),
        ValidationError::EmptyPipeline,
    );
    assert_eq!(
        session.export_payload().unwrap_err(),
        ValidationError::EmptyPipeline,
    );
}

#[test]
fn reset_after_three_entries_empties_everything() {
    let mut session = Session::new();
    session.load_image(sample_image());
    session.pipeline_mut().add(FilterKind::Blur);
    session.pipeline_mut().add(FilterKind::Gray);
    session.pipeline_mut().add(FilterKind::Canny);

    session.reset();

    // The parameter panels render from entries(), so an empty slice
    // means every panel is gone.
    assert!(session.pipeline().entries().is_empty());
    assert!(session.pipeline().serialize_for_apply().is_empty());
    assert!(session.pipeline().serialize_for_export().is_empty());
}
