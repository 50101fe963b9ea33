use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{
    run_delete, visible_actions, Action, DeleteOutcome, DeleteState, DeleteTarget, Hydration,
    RoleKind, SubjectStore,
};
use shared_ui::components::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, InlineError, PageHeader, SectionTitle, Skeleton,
};

use crate::auth::use_role;
use crate::format_helpers::format_article_timestamp;
use crate::routes::Route;
use crate::store::use_subject_hydration;

/// What the detail page shows for one subject id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    NotFound,
    Found(SubjectDetail),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectDetail {
    pub id: String,
    pub name: String,
    pub show_edit: bool,
    pub show_delete: bool,
    pub deleting: bool,
    pub error: Option<String>,
    pub articles: Vec<ArticleRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRow {
    pub id: String,
    pub name: String,
    /// Already formatted for display.
    pub created: String,
}

/// Derive the page contents from the store, the viewer's role and the
/// progress of any delete.
pub fn detail_view(
    store: &SubjectStore,
    id: &str,
    role: RoleKind,
    delete: &DeleteState,
) -> DetailView {
    match store.find(id) {
        Some(subject) => {
            let actions = visible_actions(role);
            DetailView::Found(SubjectDetail {
                id: subject.id.clone(),
                name: subject.name.clone(),
                show_edit: actions.contains(&Action::Edit),
                show_delete: actions.contains(&Action::Delete),
                deleting: delete.is_busy(),
                error: delete.error().map(str::to_string),
                articles: subject
                    .articles
                    .iter()
                    .map(|a| ArticleRow {
                        id: a.id.clone(),
                        name: a.name.clone(),
                        created: format_article_timestamp(&a.created_at),
                    })
                    .collect(),
            })
        }
        // Gone from the store because the delete just succeeded.
        None if delete.is_busy() => DetailView::Loading,
        None => match store.hydration() {
            Hydration::Empty | Hydration::Loading => DetailView::Loading,
            Hydration::Ready | Hydration::Failed => DetailView::NotFound,
        },
    }
}

/// Delete progress and the subject store, both held in page signals.
struct SignalDeleteTarget {
    state: Signal<DeleteState>,
    store: Signal<SubjectStore>,
}

impl DeleteTarget for SignalDeleteTarget {
    fn update<R>(&mut self, f: impl FnOnce(&mut DeleteState, &mut SubjectStore) -> R) -> R {
        let mut state = self.state.write();
        let mut store = self.store.write();
        f(&mut state, &mut store)
    }
}

#[component]
pub fn SubjectDetailPage(id: String) -> Element {
    let store = use_subject_hydration();
    let role = use_role();
    let delete_state = use_signal(DeleteState::default);

    let view = detail_view(&store.read(), &id, role, &delete_state.read());

    let subject_id = id.clone();
    let handle_delete = move |_: MouseEvent| {
        let sid = subject_id.clone();
        spawn(async move {
            let mut target = SignalDeleteTarget {
                state: delete_state,
                store,
            };
            match run_delete(&mut target, role, &sid, |id| server::api::delete_subject(id)).await {
                DeleteOutcome::Deleted => {
                    navigator().push(Route::SubjectList {});
                }
                DeleteOutcome::Failed(error) => {
                    tracing::error!(subject_id = %sid, error = %error, "Failed to delete subject");
                }
                DeleteOutcome::Busy | DeleteOutcome::NotAllowed => {}
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./subjects.css") }

        div { class: "container",
            match view {
                DetailView::Found(detail) => rsx! {
                    SubjectDetailView { detail: detail, on_delete: handle_delete }
                },
                DetailView::Loading => rsx! {
                    Skeleton { rows: 4 }
                },
                DetailView::NotFound => rsx! {
                    EmptyState {
                        title: "Subject Not Found",
                        message: "The subject you're looking for doesn't exist or could not be loaded.",
                        Link { to: Route::SubjectList {},
                            Button { "Back to subjects" }
                        }
                    }
                },
            }
        }
    }
}

/// Header with role-gated actions, then the linked articles.
#[component]
pub fn SubjectDetailView(detail: SubjectDetail, on_delete: EventHandler<MouseEvent>) -> Element {
    rsx! {
        PageHeader { title: detail.name.clone(),
            if detail.show_edit {
                Link { to: Route::SubjectEdit { id: detail.id.clone() },
                    Button { variant: ButtonVariant::Secondary, label: "Edit subject".to_string(),
                        Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                        "Edit"
                    }
                }
            }
            if detail.show_delete {
                Button {
                    variant: ButtonVariant::Destructive,
                    label: "Delete subject".to_string(),
                    disabled: detail.deleting,
                    onclick: on_delete,
                    Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                    if detail.deleting { "Deleting..." } else { "Delete" }
                }
            }
        }

        if let Some(message) = detail.error.clone() {
            InlineError { message: message }
        }

        SectionTitle { "Linked Articles" }
        if detail.articles.is_empty() {
            p { class: "muted", "No articles are linked to this subject yet." }
        } else {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Created At" }
                }
                DataTableBody {
                    for (index, article) in detail.articles.iter().enumerate() {
                        DataTableRow { key: "{article.id}", index: index,
                            DataTableCell { emphasis: true,
                                Link { to: Route::ArticleDetail { id: article.id.clone() },
                                    "{article.name}"
                                }
                            }
                            DataTableCell { "{article.created}" }
                        }
                    }
                }
            }
        }

        Link { to: Route::SubjectList {}, class: "back-link", "Back to subjects" }
    }
}
