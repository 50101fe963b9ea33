use dioxus::prelude::*;

/// Centered message for "nothing here" situations, with optional actions.
#[component]
pub fn EmptyState(title: String, message: String, #[props(default)] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            h2 { "{title}" }
            p { "{message}" }
            {children}
        }
    }
}

/// Inline error line shown under the control that failed.
#[component]
pub fn InlineError(message: String) -> Element {
    rsx! {
        p { class: "inline-error", role: "alert", "{message}" }
    }
}
