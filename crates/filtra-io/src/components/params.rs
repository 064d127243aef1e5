//! Per-entry parameter panels.
//!
//! Renders one section per pipeline entry that declares parameters,
//! with a labeled range slider and live numeric readout per parameter.
//! Panels appear when an entry is added and disappear with it: the
//! sections are derived from the pipeline on every render, never
//! created or destroyed imperatively.

use dioxus::prelude::*;
use filtra_pipeline::{FilterPipeline, PipelineEntry};

/// Props for the [`ParamPanels`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ParamPanelsProps {
    /// Current pipeline (read-only).
    pipeline: FilterPipeline,
    /// Fired as `(entry index, parameter name, raw value)` on every
    /// slider move.
    on_change: EventHandler<(usize, &'static str, i64)>,
}

/// Parameter-editing sections for every entry with at least one
/// parameter.
///
/// The readout next to each slider always shows the value the pipeline
/// actually stores, so a clamped update is reflected in the same
/// interaction that caused it.
#[component]
pub fn ParamPanels(props: ParamPanelsProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div { class: "param-panels",
            for (index, entry) in props
                .pipeline
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, entry)| !entry.kind().params().is_empty())
            {
                {render_entry_section(index, entry, on_change)}
            }
        }
    }
}

/// Render the panel for one pipeline entry.
fn render_entry_section(
    index: usize,
    entry: &PipelineEntry,
    on_change: EventHandler<(usize, &'static str, i64)>,
) -> Element {
    let key = format!("{index}-{}", entry.kind().key());
    let title = entry.kind().display_name();

    rsx! {
        section {
            key: "{key}",
            class: "param-section",

            h4 { class: "param-section-title", "{title}" }

            for (spec, value) in entry.parameters() {
                {render_slider(index, spec.name, spec.label, value, spec.min, spec.max, spec.step, on_change)}
            }
        }
    }
}

/// Render one labeled range slider with its live readout.
#[allow(clippy::too_many_arguments)]
fn render_slider(
    entry_index: usize,
    name: &'static str,
    label: &str,
    value: i64,
    min: i64,
    max: i64,
    step: i64,
    on_change: EventHandler<(usize, &'static str, i64)>,
) -> Element {
    let id = format!("param-{entry_index}-{name}");
    let label = label.to_owned();

    rsx! {
        div { class: "param-row",
            label { r#for: "{id}", class: "param-label", "{label}" }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                class: "param-slider",
                oninput: move |e| {
                    match e.value().parse::<i64>() {
                        Ok(v) => on_change.call((entry_index, name, v)),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
            span { class: "param-value", "{value}" }
        }
    }
}
