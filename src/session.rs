//! The editing session.
//!
//! A [`Session`] owns the one working copy of the resume and the active
//! template. Every change goes through [`Session::apply`], which runs the
//! reducer and persists the result before returning.

use crate::{
    domain::{Command, Config, Report, ResumeDocument, advise, reduce},
    render::{Layout, Template, layout},
    storage::{Gateway, SaveError, Store, StoreError},
};

/// Error raised while persisting the session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be saved.
    #[error(transparent)]
    Save(#[from] SaveError),

    /// The saved copy could not be removed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Settings a session is opened with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Pretty-print the persisted document.
    pub pretty: bool,
    /// Template selected on open.
    pub template: Template,
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            pretty: config.pretty_state,
            template: config.template,
        }
    }
}

/// The working copy of the resume and its persistence.
#[derive(Debug)]
pub struct Session<S> {
    document: ResumeDocument,
    template: Template,
    gateway: Gateway<S>,
}

impl<S: Store> Session<S> {
    /// Opens a session, restoring the saved copy if there is a valid one.
    pub fn open(store: S, options: SessionOptions) -> Self {
        let gateway = Gateway::new(store).pretty(options.pretty);
        let document = gateway.load().unwrap_or_default();
        Self {
            document,
            template: options.template,
            gateway,
        }
    }

    /// The current document.
    pub const fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// The active template.
    pub const fn template(&self) -> Template {
        self.template
    }

    /// Switches the active template. Does not touch the document.
    pub const fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    /// Applies `command` and persists the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated document cannot be saved. The
    /// in-memory document is updated regardless.
    pub fn apply(&mut self, command: Command) -> Result<(), Error> {
        tracing::debug!("applying {}", command.label());
        self.document = reduce(&self.document, command);
        self.save()
    }

    /// Replaces the whole document and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be saved.
    pub fn replace(&mut self, document: ResumeDocument) -> Result<(), Error> {
        self.apply(Command::Replace(document))
    }

    /// Resets the document and removes the saved copy if `confirm` agrees.
    ///
    /// Returns whether the document was cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved copy cannot be removed.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, Error> {
        if !confirm() {
            tracing::debug!("clear cancelled");
            return Ok(false);
        }
        self.document = reduce(&self.document, Command::Clear);
        self.gateway.clear()?;
        Ok(true)
    }

    /// Persists the current document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be saved.
    pub fn save(&self) -> Result<(), Error> {
        self.gateway.save(&self.document)?;
        Ok(())
    }

    /// Completion and validation report for the current document.
    #[must_use]
    pub fn report(&self) -> Report {
        advise(&self.document)
    }

    /// Layout of the current document in the active template.
    #[must_use]
    pub fn preview(&self) -> Layout {
        layout(&self.document, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Issue, PersonalPatch},
        render::layout::Body,
        storage::{FileStore, MemoryStore, STATE_KEY},
    };

    fn name(value: &str) -> Command {
        Command::UpdatePersonal(PersonalPatch::Name(value.to_string()))
    }

    #[test]
    fn edits_are_persisted_immediately() {
        let tmp = tempfile::tempdir().unwrap();

        let mut session = Session::open(FileStore::new(tmp.path()), SessionOptions::default());
        session.apply(name("Ada")).unwrap();
        session.apply(Command::AddSkill("Go".to_string())).unwrap();

        let reopened = Session::open(FileStore::new(tmp.path()), SessionOptions::default());
        assert_eq!(reopened.document(), session.document());
        assert_eq!(reopened.document().personal_info.name, "Ada");
    }

    #[test]
    fn malformed_saved_copy_opens_empty() {
        let store = MemoryStore::with_value(STATE_KEY, "{\"personalInfo\": 3");
        let session = Session::open(&store, SessionOptions::default());

        assert!(session.document().is_empty());
    }

    #[test]
    fn declined_clear_keeps_everything() {
        let store = MemoryStore::new();
        let mut session = Session::open(&store, SessionOptions::default());
        session.apply(name("Ada")).unwrap();

        assert!(!session.clear(|| false).unwrap());

        assert_eq!(session.document().personal_info.name, "Ada");
        assert!(store.get(STATE_KEY).unwrap().is_some());
    }

    #[test]
    fn confirmed_clear_resets_and_forgets() {
        let store = MemoryStore::new();
        let mut session = Session::open(&store, SessionOptions::default());
        session.apply(name("Ada")).unwrap();

        assert!(session.clear(|| true).unwrap());

        assert_eq!(session.document(), &ResumeDocument::default());
        assert_eq!(store.get(STATE_KEY).unwrap(), None);
        assert!(matches!(session.preview().body, Body::Empty));
    }

    #[test]
    fn switching_template_keeps_the_document() {
        let store = MemoryStore::new();
        let mut session = Session::open(&store, SessionOptions::default());
        session.apply(name("Ada")).unwrap();
        let before = session.document().clone();

        session.set_template(Template::Classic);

        assert_eq!(session.template(), Template::Classic);
        assert_eq!(session.document(), &before);
        assert_eq!(session.preview().template, Template::Classic);
    }

    #[test]
    fn replace_swaps_the_whole_document() {
        let store = MemoryStore::new();
        let mut session = Session::open(&store, SessionOptions::default());
        session.apply(Command::AddSkill("Go".to_string())).unwrap();

        let mut imported = ResumeDocument::default();
        imported.personal_info.name = "Grace".to_string();
        session.replace(imported.clone()).unwrap();

        assert_eq!(session.document(), &imported);
        let reopened = Session::open(&store, SessionOptions::default());
        assert_eq!(reopened.document(), &imported);
    }

    #[test]
    fn report_tracks_the_document() {
        let store = MemoryStore::new();
        let mut session = Session::open(&store, SessionOptions::default());
        assert!(session.report().issues.contains(&Issue::PersonalIncomplete));

        session.apply(name("Ada")).unwrap();

        assert!(!session.report().issues.contains(&Issue::PersonalIncomplete));
    }
}
