use dioxus::prelude::*;

/// Labelled single-line text input with an optional validation message.
#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "text-field",
            span { class: "text-field-label", "{label}" }
            input {
                r#type: "text",
                value,
                disabled,
                aria_invalid: error.is_some(),
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(ref msg) = error {
                span { class: "text-field-error", "{msg}" }
            }
        }
    }
}
