use dioxus::prelude::*;

/// Title row of a page: a heading on the left, action buttons on the right.
///
/// Renders `title` in an `h1`; `children` become the actions.
#[component]
pub fn PageHeader(title: String, #[props(default)] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {children} }
        }
    }
}

/// Secondary heading for a section within a page.
#[component]
pub fn SectionTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "section-title", {children} }
    }
}
