pub mod articles;
pub mod home;
pub mod not_found;
pub mod subjects;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFolder};
use dioxus_free_icons::Icon;

use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/subjects")]
    SubjectList {},
    #[route("/subjects/edit/:id")]
    SubjectEdit { id: String },
    #[route("/subjects/:id")]
    SubjectDetail { id: String },
    #[route("/articles/:id")]
    ArticleDetail { id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Sends the visitor home unless `/users/me` accepts
/// their session cookie.
///
/// Uses `use_server_future` with `?` so SSR suspends until the lookup
/// completes and hydration reuses the embedded result.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if auth.current_user.peek().as_ref() != Some(&user) {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().replace(Route::Home {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Signed-in layout: top navigation bar above the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let username = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    let on_subjects = matches!(
        route,
        Route::SubjectList {}
            | Route::SubjectDetail { .. }
            | Route::SubjectEdit { .. }
            | Route::ArticleDetail { .. }
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-navbar",
            div { class: "app-brand",
                Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                span { class: "app-brand-name", "Syllabus" }
            }
            nav { class: "app-nav",
                Link {
                    to: Route::SubjectList {},
                    class: if on_subjects { "app-nav-link active" } else { "app-nav-link" },
                    Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                    "Subjects"
                }
            }
            span { class: "app-user", "{username}" }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}

// ── Route wrappers ─────────────────────────────────────

#[component]
fn SubjectList() -> Element {
    rsx! { subjects::list::SubjectListPage {} }
}

#[component]
fn SubjectDetail(id: String) -> Element {
    rsx! { subjects::detail::SubjectDetailPage { id: id } }
}

#[component]
fn SubjectEdit(id: String) -> Element {
    rsx! { subjects::edit::SubjectEditPage { id: id } }
}

#[component]
fn ArticleDetail(id: String) -> Element {
    rsx! { articles::ArticleDetailPage { id: id } }
}
