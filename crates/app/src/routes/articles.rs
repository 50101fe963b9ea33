use dioxus::prelude::*;
use shared_types::Hydration;
use shared_ui::components::{Button, EmptyState, PageHeader, Skeleton};

use crate::format_helpers::format_article_timestamp;
use crate::routes::Route;
use crate::store::use_subject_hydration;

/// Read-only view of one article, found through its owning subject.
#[component]
pub fn ArticleDetailPage(id: String) -> Element {
    let store = use_subject_hydration();
    let found = store
        .read()
        .find_article(&id)
        .map(|(subject, article)| (subject.clone(), article.clone()));
    let hydration = store.read().hydration();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./subjects/subjects.css") }

        div { class: "container",
            match (found, hydration) {
                (Some((subject, article)), _) => rsx! {
                    PageHeader { title: article.name.clone() }
                    dl { class: "detail-list",
                        dt { "Subject" }
                        dd {
                            Link { to: Route::SubjectDetail { id: subject.id.clone() },
                                "{subject.name}"
                            }
                        }
                        dt { "Created At" }
                        dd { "{format_article_timestamp(&article.created_at)}" }
                    }
                },
                (None, Hydration::Empty | Hydration::Loading) => rsx! {
                    Skeleton { rows: 2 }
                },
                (None, _) => rsx! {
                    EmptyState {
                        title: "Article Not Found",
                        message: "The article you're looking for doesn't exist.",
                        Link { to: Route::SubjectList {},
                            Button { "Back to subjects" }
                        }
                    }
                },
            }
        }
    }
}
