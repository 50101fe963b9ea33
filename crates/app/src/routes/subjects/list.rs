use dioxus::prelude::*;
use shared_types::Hydration;
use shared_ui::components::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    EmptyState, PageHeader, Skeleton,
};

use crate::format_helpers::article_count_label;
use crate::routes::Route;
use crate::store::use_subject_hydration;

#[component]
pub fn SubjectListPage() -> Element {
    let store = use_subject_hydration();
    let subjects = store.read().subjects().to_vec();
    let hydration = store.read().hydration();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./subjects.css") }

        div { class: "container",
            PageHeader { title: "Subjects" }

            match hydration {
                Hydration::Empty | Hydration::Loading => rsx! { Skeleton { rows: 5 } },
                Hydration::Failed => rsx! {
                    EmptyState {
                        title: "Subjects Unavailable",
                        message: "The subject list could not be loaded. Reload the page to try again.",
                    }
                },
                Hydration::Ready if subjects.is_empty() => rsx! {
                    EmptyState {
                        title: "No Subjects",
                        message: "There are no subjects yet.",
                    }
                },
                Hydration::Ready => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Articles" }
                        }
                        DataTableBody {
                            for (index, subject) in subjects.iter().enumerate() {
                                DataTableRow { key: "{subject.id}", index: index,
                                    DataTableCell { emphasis: true,
                                        Link { to: Route::SubjectDetail { id: subject.id.clone() },
                                            "{subject.name}"
                                        }
                                    }
                                    DataTableCell { "{article_count_label(subject.articles.len())}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
