use crate::{Article, Subject};

/// Where the store is in loading its subject collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hydration {
    /// Nothing fetched yet; the next page mount should fetch.
    #[default]
    Empty,
    Loading,
    Ready,
    /// The last fetch failed. Not retried until another page mounts.
    Failed,
}

/// Client-side collection of subjects shared by every page.
///
/// All reads and writes go through these methods; the UI keeps the store in
/// a signal so each mutation notifies whatever rendered from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectStore {
    subjects: Vec<Subject>,
    hydration: Hydration,
}

impl SubjectStore {
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    pub fn find(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Look up an article across all subjects, returning its owner too.
    pub fn find_article(&self, id: &str) -> Option<(&Subject, &Article)> {
        self.subjects.iter().find_map(|s| {
            s.articles
                .iter()
                .find(|a| a.id == id)
                .map(|a| (s, a))
        })
    }

    /// Replace the whole collection.
    pub fn set_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = subjects;
        self.hydration = Hydration::Ready;
    }

    /// Remove a subject by id. Returns whether anything was removed.
    pub fn delete_subject(&mut self, id: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        self.subjects.len() != before
    }

    pub fn rename_subject(&mut self, id: &str, name: &str) -> bool {
        match self.subjects.iter_mut().find(|s| s.id == id) {
            Some(subject) => {
                subject.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Claim the right to fetch. True only when the collection is empty and
    /// no fetch has been started; the caller must then report back through
    /// `finish_hydration` or `fail_hydration`.
    pub fn begin_hydration(&mut self) -> bool {
        if !self.subjects.is_empty() || self.hydration != Hydration::Empty {
            return false;
        }
        self.hydration = Hydration::Loading;
        true
    }

    /// Called when a page mounts: a previous failure no longer blocks a
    /// fetch. Has no effect in any other state.
    pub fn rearm_failed_hydration(&mut self) {
        if self.hydration == Hydration::Failed {
            self.hydration = Hydration::Empty;
        }
    }

    pub fn finish_hydration(&mut self, subjects: Vec<Subject>) {
        self.set_subjects(subjects);
    }

    pub fn fail_hydration(&mut self) {
        if self.hydration == Hydration::Loading {
            self.hydration = Hydration::Failed;
        }
    }
}
