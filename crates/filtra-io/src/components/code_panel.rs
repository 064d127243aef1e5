//! Generated-code panel with copy and download actions.

use dioxus::prelude::*;

use crate::clipboard;
use crate::download;

/// How long the "Copied!" confirmation stays on the copy button.
const COPY_FEEDBACK_MS: u32 = 2_000;

/// Props for the [`CodePanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CodePanelProps {
    /// The generated source code. `None` hides the panel entirely.
    code: Option<String>,
}

/// Displays the source code the export endpoint generated, with a
/// copy-to-clipboard button (transient "Copied!" feedback) and a
/// download-as-file button.
#[component]
pub fn CodePanel(props: CodePanelProps) -> Element {
    let mut copied = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let Some(code) = props.code else {
        return rsx! {};
    };

    let copy_code = code.clone();
    let copy_click = move |_| {
        let text = copy_code.clone();
        spawn(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    action_error.set(None);
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    copied.set(false);
                }
                Err(e) => {
                    action_error.set(Some(format!("Copy failed: {e}")));
                }
            }
        });
    };

    let download_code = code.clone();
    let download_click = move |_| {
        match download::trigger_text_download(&download_code, "filter_pipeline.py", "text/x-python")
        {
            Ok(()) => action_error.set(None),
            Err(e) => action_error.set(Some(format!("Download failed: {e}"))),
        }
    };

    rsx! {
        div { class: "code-panel",
            h3 { class: "code-panel-title", "Generated Code" }

            if let Some(ref err) = action_error() {
                p { class: "code-panel-error", "{err}" }
            }

            pre { class: "code-block",
                code { "{code}" }
            }

            div { class: "code-panel-actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: copy_click,
                    if copied() { "Copied!" } else { "Copy" }
                }
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: download_click,
                    "Download .py"
                }
            }
        }
    }
}
