use dioxus::prelude::*;

/// Pulsing placeholder bars shown while data loads.
#[component]
pub fn Skeleton(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-group", aria_busy: true,
            for i in 0..rows {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}
