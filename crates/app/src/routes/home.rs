use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Skeleton};

use crate::routes::Route;

/// Landing page. Protected pages redirect here when there is no valid session.
#[component]
pub fn Home() -> Element {
    let session = use_resource(|| async move { server::api::get_current_user().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            div { class: "home-card",
                h1 { class: "home-title", "Syllabus" }
                match &*session.read() {
                    Some(Ok(Some(user))) => rsx! {
                        p { class: "home-message", "Signed in as {user.username}." }
                        Link { to: Route::SubjectList {},
                            Button { variant: ButtonVariant::Primary, "Browse subjects" }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "home-message",
                            "Sign in is required to browse subjects and articles."
                        }
                    },
                    None => rsx! { Skeleton { rows: 1 } },
                }
            }
        }
    }
}
