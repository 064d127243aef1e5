//! Processed-image result panel.

use dioxus::prelude::*;

use crate::api::ApplyResponse;
use crate::download;

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// The latest successful apply response. `None` renders the
    /// placeholder.
    result: Option<ApplyResponse>,
}

/// Shows the processed image the service hosts, its dimensions, and a
/// download button for it.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let mut download_error = use_signal(|| Option::<String>::None);

    // Clear stale download errors whenever a new result arrives.
    let result_present = props.result.is_some();
    use_effect(move || {
        let _ = result_present;
        download_error.set(None);
    });

    let Some(result) = props.result else {
        return rsx! {
            div { class: "result-placeholder",
                p { "Apply filters to see the result" }
            }
        };
    };

    let image_url = result.image_url.clone();
    let download_click = move |_| {
        if let Err(e) = download::trigger_url_download(&image_url, "processed_image.png") {
            download_error.set(Some(format!("Download failed: {e}")));
        } else {
            download_error.set(None);
        }
    };

    rsx! {
        div { class: "result-panel",
            img {
                class: "result-image",
                src: "{result.image_url}",
                alt: "Processed image",
            }
            p { class: "result-dimensions", "{result.width}×{result.height}" }

            if let Some(ref err) = download_error() {
                p { class: "result-error", "{err}" }
            }

            button {
                r#type: "button",
                class: "btn btn-primary",
                onclick: download_click,
                "Download"
            }
        }
    }
}
