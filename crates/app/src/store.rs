use dioxus::prelude::*;
use shared_types::SubjectStore;

/// Hook to access the shared subject store.
pub fn use_subject_store() -> Signal<SubjectStore> {
    use_context::<Signal<SubjectStore>>()
}

/// Access the store, fetching `GET /subjects` once if nothing is loaded yet.
///
/// Runs after mount, so server rendering shows the loading state. An empty
/// response is never refetched; a failed one is tried again on the next
/// page mount, never within the same one.
pub fn use_subject_hydration() -> Signal<SubjectStore> {
    let mut store = use_subject_store();

    use_effect(move || {
        {
            let mut current = store.write();
            current.rearm_failed_hydration();
            if !current.begin_hydration() {
                return;
            }
        }
        spawn(async move {
            match server::api::list_subjects().await {
                Ok(subjects) => {
                    tracing::debug!(count = subjects.len(), "Subject store hydrated");
                    store.write().finish_hydration(subjects);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load subjects");
                    store.write().fail_hydration();
                }
            }
        });
    });

    store
}
