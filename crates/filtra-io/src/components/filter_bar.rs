//! Filter selection bar.
//!
//! Renders one toggle button per catalog entry. Toggling a button on
//! asks the controller to append that filter to the pipeline; toggling
//! it off asks for its removal. The bar itself holds no state -- the
//! pressed set is derived from the pipeline and passed back in.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdArrowDownLeft, LdArrowUpRight, LdContrast, LdDroplet, LdRepeat, LdWind,
};
use filtra_pipeline::FilterKind;

/// Props for the [`FilterBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    /// Filters currently present in the pipeline (pressed buttons).
    active: Vec<FilterKind>,
    /// Fired with the filter whose button was clicked; the controller
    /// decides whether that means add or remove.
    on_toggle: EventHandler<FilterKind>,
}

/// One toggle button per catalog filter, in catalog order.
///
/// The description doubles as the button tooltip. Because the pressed
/// set is derived from the pipeline, a button can never show active
/// without a matching entry existing -- and clicking an active button
/// is always a removal, so the toggle flow cannot create duplicates.
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let on_toggle = props.on_toggle;

    rsx! {
        div { class: "filter-bar",
            for kind in FilterKind::ALL {
                {render_toggle_button(kind, props.active.contains(&kind), on_toggle)}
            }
        }
    }
}

/// Render a single filter toggle button.
fn render_toggle_button(
    kind: FilterKind,
    is_active: bool,
    on_toggle: EventHandler<FilterKind>,
) -> Element {
    let class = if is_active {
        "btn filter-toggle filter-toggle-active"
    } else {
        "btn filter-toggle"
    };
    let key = kind.key();
    let description = kind.description();
    let display_name = kind.display_name();

    rsx! {
        button {
            key: "{key}",
            r#type: "button",
            class: "{class}",
            title: "{description}",
            aria_pressed: "{is_active}",
            onclick: move |_| on_toggle.call(kind),

            {filter_icon(kind.icon())}
            span { "{display_name}" }
        }
    }
}

/// Map a catalog icon identifier to its rendered icon.
fn filter_icon(name: &str) -> Element {
    match name {
        "droplet" => rsx! { Icon { width: 16, height: 16, icon: LdDroplet } },
        "wind" => rsx! { Icon { width: 16, height: 16, icon: LdWind } },
        "contrast" => rsx! { Icon { width: 16, height: 16, icon: LdContrast } },
        "arrow-down-left" => rsx! { Icon { width: 16, height: 16, icon: LdArrowDownLeft } },
        "arrow-up-right" => rsx! { Icon { width: 16, height: 16, icon: LdArrowUpRight } },
        "activity" => rsx! { Icon { width: 16, height: 16, icon: LdActivity } },
        "repeat" => rsx! { Icon { width: 16, height: 16, icon: LdRepeat } },
        _ => rsx! { Icon { width: 16, height: 16, icon: LdDroplet } },
    }
}
