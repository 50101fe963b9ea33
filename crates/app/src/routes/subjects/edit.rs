use dioxus::prelude::*;
use shared_types::{can, Action, AppError, Hydration};
use shared_ui::components::{
    Button, ButtonVariant, EmptyState, InlineError, PageHeader, Skeleton, TextField,
};

use crate::auth::use_role;
use crate::routes::Route;
use crate::store::use_subject_hydration;

/// Rename form for a single subject.
#[component]
pub fn SubjectEditPage(id: String) -> Element {
    let mut store = use_subject_hydration();
    let role = use_role();

    let mut name = use_signal(String::new);
    let mut seeded = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut field_error = use_signal(|| None::<String>);
    let mut form_error = use_signal(|| None::<String>);

    let seed_id = id.clone();
    use_effect(move || {
        if *seeded.peek() {
            return;
        }
        if let Some(subject) = store.read().find(&seed_id) {
            name.set(subject.name.clone());
            seeded.set(true);
        }
    });

    let subject = store.read().find(&id).cloned();
    let hydration = store.read().hydration();

    let subject_id = id.clone();
    let handle_save = move |_: MouseEvent| {
        if *saving.peek() {
            return;
        }
        saving.set(true);
        field_error.set(None);
        form_error.set(None);
        let sid = subject_id.clone();
        let new_name = name.peek().clone();
        spawn(async move {
            match server::api::update_subject(sid.clone(), new_name).await {
                Ok(updated) => {
                    store.write().rename_subject(&sid, &updated.name);
                    navigator().push(Route::SubjectDetail { id: sid });
                }
                Err(e) => {
                    tracing::error!(subject_id = %sid, error = %e, "Failed to update subject");
                    let message = e.to_string();
                    let fields = AppError::parse_field_errors(&message);
                    match fields.get("name") {
                        Some(err) => field_error.set(Some(err.clone())),
                        None => form_error.set(Some(AppError::friendly_message(&message))),
                    }
                }
            }
            saving.set(false);
        });
    };

    if !can(role, Action::Edit) {
        return rsx! {
            div { class: "container",
                EmptyState {
                    title: "Not Allowed",
                    message: "Your role cannot edit subjects.",
                    Link { to: Route::SubjectDetail { id: id.clone() },
                        Button { "Back to subject" }
                    }
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./subjects.css") }

        div { class: "container",
            match (subject, hydration) {
                (Some(subject), _) => rsx! {
                    PageHeader { title: format!("Edit {}", subject.name) }

                    if let Some(message) = form_error() {
                        InlineError { message: message }
                    }

                    div { class: "edit-form",
                        TextField {
                            label: "Name",
                            value: name(),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                            error: field_error(),
                            disabled: saving(),
                        }
                        div { class: "edit-actions",
                            Link { to: Route::SubjectDetail { id: subject.id.clone() },
                                Button { variant: ButtonVariant::Secondary, "Cancel" }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: saving(),
                                onclick: handle_save,
                                if saving() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                },
                (None, Hydration::Empty | Hydration::Loading) => rsx! {
                    Skeleton { rows: 2 }
                },
                (None, _) => rsx! {
                    EmptyState {
                        title: "Subject Not Found",
                        message: "The subject you're trying to edit doesn't exist.",
                        Link { to: Route::SubjectList {},
                            Button { "Back to subjects" }
                        }
                    }
                },
            }
        }
    }
}
