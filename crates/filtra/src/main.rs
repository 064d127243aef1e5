use dioxus::prelude::*;
use filtra_io::{ApiClient, CodePanel, FileUpload, FilterBar, ParamPanels, ResultPanel, blobs};
use filtra_pipeline::{ApplyPayload, FilterKind, Session, SourceImage};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the page session (pipeline + loaded image) and the submission
/// state, and wires the upload, filter bar, parameter panels, result
/// panel, and code panel together. Every UI event resolves to a command
/// on the [`Session`]; the components themselves hold no pipeline state.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut session = use_signal(Session::new);
    let mut preview_url = use_signal(|| Option::<String>::None);
    let mut processed = use_signal(|| Option::<filtra_io::ApplyResponse>::None);
    let mut code = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut applying = use_signal(|| false);
    let mut exporting = use_signal(|| false);

    // --- File upload handler ---
    let on_upload = move |image: SourceImage| {
        if let Some(old) = preview_url() {
            blobs::revoke_object_url(&old);
        }
        match blobs::bytes_to_object_url(&image.bytes, &image.mime) {
            Ok(url) => preview_url.set(Some(url)),
            Err(e) => {
                web_sys::console::warn_1(&format!("preview blob failed: {e}").into());
                preview_url.set(None);
            }
        }
        session.write().load_image(image);
        processed.set(None);
        error.set(None);
    };

    // --- Filter toggle handler ---
    // An active button click removes the entry; an inactive one appends
    // it. Consulting contains() here is what keeps the toggle flow free
    // of duplicate entries.
    let on_toggle = move |kind: FilterKind| {
        let mut state = session.write();
        if state.pipeline().contains(kind) {
            state.pipeline_mut().remove(kind);
        } else {
            state.pipeline_mut().add(kind);
        }
    };

    // --- Parameter change handler ---
    let on_param_change = move |(index, name, value): (usize, &'static str, i64)| {
        if let Err(e) = session.write().pipeline_mut().set_parameter(index, name, value) {
            // A control referenced state that does not exist; nothing
            // the user can do about it.
            web_sys::console::error_1(&format!("parameter update rejected: {e}").into());
        }
    };

    // --- Apply handler ---
    let on_apply = move |_| {
        if applying() || exporting() {
            return;
        }
        // Validate synchronously: a gate failure shows a message and
        // performs no network call.
        let (image, filters) = match session.read().apply_payload() {
            Ok(payload) => (payload.image.clone(), payload.filters),
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        applying.set(true);
        spawn(async move {
            let client = ApiClient::default();
            match client.apply(&ApplyPayload { image: &image, filters }).await {
                Ok(response) => {
                    processed.set(Some(response));
                    error.set(None);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            // Both arms fall through here, so the overlay clears on
            // every exit path.
            applying.set(false);
        });
    };

    // --- Export handler ---
    let on_export = move |_| {
        if applying() || exporting() {
            return;
        }
        let filters = match session.read().export_payload() {
            Ok(filters) => filters,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        exporting.set(true);
        spawn(async move {
            let client = ApiClient::default();
            match client.export_code(&filters).await {
                Ok(response) => {
                    code.set(Some(response.code));
                    error.set(None);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            exporting.set(false);
        });
    };

    // --- Clear image handler ---
    let on_clear_image = move |_| {
        if let Some(old) = preview_url() {
            blobs::revoke_object_url(&old);
        }
        preview_url.set(None);
        session.write().clear_image();
    };

    // --- Reset handler ---
    // Clears the session and every dependent surface in lockstep: the
    // parameter panels disappear because the pipeline is empty, and the
    // result and code areas return to their placeholders.
    let on_reset = move |_| {
        if let Some(old) = preview_url() {
            blobs::revoke_object_url(&old);
        }
        preview_url.set(None);
        session.write().reset();
        processed.set(None);
        code.set(None);
        error.set(None);
    };

    // --- Derived render state ---
    let active: Vec<FilterKind> = session
        .read()
        .pipeline()
        .entries()
        .iter()
        .map(filtra_pipeline::PipelineEntry::kind)
        .collect();
    let pipeline = session.read().pipeline().clone();
    let busy = applying() || exporting();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "filtra" }
                p { class: "tagline", "Compose image filter pipelines and preview the result" }
            }

            div { class: "columns",
                // Left: original image
                section { class: "card",
                    h2 { "Original" }
                    if let Some(ref url) = preview_url() {
                        img { class: "preview-image", src: "{url}", alt: "Original image" }
                    } else {
                        div { class: "image-placeholder",
                            p { "No image loaded" }
                        }
                    }
                    FileUpload { on_upload: on_upload }
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: on_clear_image,
                        "Clear Image"
                    }
                }

                // Middle: filter selection and parameters
                section { class: "card",
                    h2 { "Filters" }
                    FilterBar {
                        active: active,
                        on_toggle: on_toggle,
                    }
                    ParamPanels {
                        pipeline: pipeline,
                        on_change: on_param_change,
                    }
                    div { class: "actions",
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            disabled: busy,
                            onclick: on_apply,
                            "Apply Filters"
                        }
                        button {
                            r#type: "button",
                            class: "btn",
                            disabled: busy,
                            onclick: on_export,
                            "Export Code"
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-danger",
                            onclick: on_reset,
                            "Reset All"
                        }
                    }
                }

                // Right: processed result
                section { class: "card",
                    h2 { "Result" }
                    ResultPanel { result: processed() }
                }
            }

            if let Some(ref err) = error() {
                div { class: "error-banner",
                    p { "{err}" }
                }
            }

            CodePanel { code: code() }

            if applying() {
                div { class: "loading-overlay",
                    p { class: "loading-text", "Processing..." }
                }
            }
        }
    }
}
