//! Persistence and export of the resume document.
//!
//! The [`Gateway`] owns the persisted working copy. The free functions here
//! cover the other transfers across the process boundary: JSON export and
//! import, and handing the print-ready page to a [`Printer`].

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use chrono::NaiveDate;

use super::store::{Store, StoreError};
use crate::{
    domain::ResumeDocument,
    render::{Layout, html},
};

/// Key the working copy is persisted under.
pub const STATE_KEY: &str = "resumeData";

/// Error returned when an imported file cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Error importing file. Please make sure it's a valid JSON file.")]
pub struct ImportError {
    #[from]
    source: serde_json::Error,
}

/// Error returned when the document cannot be saved or exported.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The document could not be serialized.
    #[error("failed to serialize resume: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The export file could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Error returned by a [`Printer`].
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The page could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The print command could not be launched.
    #[error("failed to launch print command '{command}': {source}")]
    Launch {
        /// Command that was launched.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The print command ran but reported failure.
    #[error("print command '{command}' exited with {status}")]
    Failed {
        /// Command that was launched.
        command: String,
        /// Exit status of the command.
        status: process::ExitStatus,
    },
}

/// A JSON export ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name, `resume-<name>-<YYYY-MM-DD>.json`.
    pub file_name: String,
    /// Pretty-printed document.
    pub contents: String,
}

/// Sink for the print-ready page.
pub trait Printer {
    /// Prints `html`, returning the path the page was written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be written or printed.
    fn print(&self, html: &str) -> Result<PathBuf, PrintError>;
}

/// Writes the page to a file and optionally hands it to a host command.
///
/// The command is split on whitespace; the page path is appended as its
/// last argument.
#[derive(Debug, Clone)]
pub struct HtmlFilePrinter {
    path: PathBuf,
    command: Option<String>,
}

impl HtmlFilePrinter {
    /// Creates a printer that writes to `path` without launching anything.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            command: None,
        }
    }

    /// Launches `command` with the page path once it is written.
    #[must_use]
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command.filter(|c| !c.trim().is_empty());
        self
    }

    fn launch(&self, command: &str) -> Result<(), PrintError> {
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(());
        };

        tracing::debug!("launching '{command}' for {}", self.path.display());
        let status = process::Command::new(program)
            .args(parts)
            .arg(&self.path)
            .status()
            .map_err(|source| PrintError::Launch {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PrintError::Failed {
                command: command.to_string(),
                status,
            })
        }
    }
}

impl Printer for HtmlFilePrinter {
    fn print(&self, html: &str) -> Result<PathBuf, PrintError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PrintError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, html).map_err(|source| PrintError::Write {
            path: self.path.clone(),
            source,
        })?;

        if let Some(command) = &self.command {
            self.launch(command)?;
        }
        Ok(self.path.clone())
    }
}

/// Reads and writes the document through a [`Store`].
#[derive(Debug)]
pub struct Gateway<S> {
    store: S,
    pretty: bool,
}

impl<S: Store> Gateway<S> {
    /// Creates a gateway that persists compact JSON.
    pub const fn new(store: S) -> Self {
        Self {
            store,
            pretty: false,
        }
    }

    /// Sets whether the persisted copy is pretty-printed.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Persists `doc`, overwriting any previous copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, doc: &ResumeDocument) -> Result<(), SaveError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        self.store.set(STATE_KEY, &json)?;
        tracing::info!("saved resume");
        Ok(())
    }

    /// Restores the persisted copy.
    ///
    /// Returns `None` when nothing is stored, and also when the stored value
    /// is unreadable or malformed; the failure is logged so the caller can
    /// carry on with what it has.
    pub fn load(&self) -> Option<ResumeDocument> {
        let json = match self.store.get(STATE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Error loading saved data: {e}");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::error!("Error loading saved data: {e}");
                None
            }
        }
    }

    /// Removes the persisted copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(STATE_KEY)?;
        tracing::info!("cleared saved resume");
        Ok(())
    }
}

/// Serializes `doc` as a pretty-printed export stamped with `date`.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn export_json(doc: &ResumeDocument, date: NaiveDate) -> Result<Export, SaveError> {
    Ok(Export {
        file_name: export_file_name(&doc.personal_info.name, date),
        contents: serde_json::to_string_pretty(doc)?,
    })
}

/// Writes the export of `doc` into `dir`, returning the file path.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn export_json_to(
    dir: &Path,
    doc: &ResumeDocument,
    date: NaiveDate,
) -> Result<PathBuf, SaveError> {
    let export = export_json(doc, date)?;
    fs::create_dir_all(dir).map_err(|source| SaveError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&export.file_name);
    fs::write(&path, export.contents).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!("exported resume to {}", path.display());
    Ok(path)
}

/// Parses an exported document.
///
/// Missing fields default to empty values. Caps and level bounds are
/// not enforced on import.
///
/// # Errors
///
/// Returns an error if `contents` is not a JSON document of the expected
/// shape.
pub fn import_json(contents: &str) -> Result<ResumeDocument, ImportError> {
    let doc = serde_json::from_str(contents)?;
    tracing::info!("imported resume");
    Ok(doc)
}

/// Renders `layout` as a print-ready page and hands it to `printer`.
///
/// # Errors
///
/// Returns an error if the printer fails.
pub fn export_pdf(layout: &Layout, printer: &dyn Printer) -> Result<PathBuf, PrintError> {
    let path = printer.print(&html::page(layout))?;
    tracing::info!("wrote print-ready page to {}", path.display());
    Ok(path)
}

/// Lower-cases `name` and collapses runs of other characters into `-`.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Builds `resume-<slug>-<YYYY-MM-DD>.json`.
#[must_use]
pub fn export_file_name(name: &str, date: NaiveDate) -> String {
    format!("resume-{}-{}.json", slug(name), date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{
        domain::{Command, PersonalPatch, SkillPatch, reduce},
        render::{Template, layout},
        storage::{FileStore, MemoryStore},
    };

    fn sample() -> ResumeDocument {
        let mut doc = reduce(
            &ResumeDocument::default(),
            Command::UpdatePersonal(PersonalPatch::Name("Ada Lovelace".to_string())),
        );
        doc = reduce(&doc, Command::AddSkill("Go".to_string()));
        doc = reduce(&doc, Command::AddSkill("Rust".to_string()));
        let id = doc.skills[1].id.clone();
        reduce(&doc, Command::UpdateSkill(id, SkillPatch::Level(5)))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn load_returns_what_was_saved() {
        let tmp = tempfile::tempdir().unwrap();
        let gateway = Gateway::new(FileStore::new(tmp.path()));

        assert_eq!(gateway.load(), None);

        let doc = sample();
        gateway.save(&doc).unwrap();
        assert_eq!(gateway.load(), Some(doc.clone()));

        let pretty = Gateway::new(FileStore::new(tmp.path())).pretty(true);
        pretty.save(&doc).unwrap();
        assert_eq!(pretty.load(), Some(doc));
    }

    #[test]
    fn malformed_state_is_treated_as_absent() {
        let gateway = Gateway::new(MemoryStore::with_value(STATE_KEY, "{not json"));
        assert_eq!(gateway.load(), None);
    }

    #[test]
    fn clear_removes_the_saved_copy() {
        let gateway = Gateway::new(MemoryStore::new());
        gateway.save(&sample()).unwrap();

        gateway.clear().unwrap();

        assert_eq!(gateway.load(), None);
    }

    #[test]
    fn export_then_import_preserves_the_document() {
        let doc = sample();
        let export = export_json(&doc, date()).unwrap();

        assert_eq!(export.file_name, "resume-ada-lovelace-2024-03-09.json");
        assert!(export.contents.contains("\n  \"personalInfo\""));

        let imported = import_json(&export.contents).unwrap();
        let names: Vec<_> = imported.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Go", "Rust"]);
        assert_eq!(imported, doc);
    }

    #[test]
    fn removing_the_first_skill_keeps_the_rest_in_order() {
        let doc = sample();
        let go = doc.skills[0].id.clone();
        let doc = reduce(&doc, Command::RemoveSkill(go));

        let export = export_json(&doc, date()).unwrap();
        let imported = import_json(&export.contents).unwrap();

        assert_eq!(imported.skills.len(), 1);
        assert_eq!(imported.skills[0].name, "Rust");
        assert_eq!(imported.skills[0].level, 5);
    }

    #[test]
    fn export_writes_into_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");

        let path = export_json_to(&dir, &sample(), date()).unwrap();

        assert_eq!(path, dir.join("resume-ada-lovelace-2024-03-09.json"));
        assert!(fs::read_to_string(path).unwrap().contains("Ada Lovelace"));
    }

    #[test_case("not valid json" ; "garbage")]
    #[test_case("[1, 2, 3]" ; "wrong shape")]
    #[test_case("{\"skills\": 7}" ; "wrong field type")]
    fn import_rejects_invalid_files(contents: &str) {
        let err = import_json(contents).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error importing file. Please make sure it's a valid JSON file."
        );
    }

    #[test]
    fn import_fills_missing_fields() {
        let doc = import_json("{\"skills\": [{\"name\": \"Go\"}]}").unwrap();

        assert_eq!(doc.personal_info.name, "");
        assert!(doc.education.is_empty());
        assert_eq!(doc.skills[0].name, "Go");
    }

    #[test_case("Ada Lovelace", "ada-lovelace")]
    #[test_case("  J. R. R. Tolkien ", "j-r-r-tolkien")]
    #[test_case("", "untitled")]
    #[test_case("???", "untitled")]
    #[test_case("Zoë", "zoë")]
    fn slugs(name: &str, expected: &str) {
        assert_eq!(slug(name), expected);
    }

    #[test]
    fn pdf_export_writes_the_print_ready_page() {
        let tmp = tempfile::tempdir().unwrap();
        let printer = HtmlFilePrinter::new(tmp.path().join("out/resume.html"));

        let path = export_pdf(&layout(&sample(), Template::Classic), &printer).unwrap();

        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("@page"));
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn print_command_receives_the_page() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("resume.html");
        let printer = HtmlFilePrinter::new(&path).with_command(Some("true".to_string()));

        assert_eq!(printer.print("<html></html>").unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn failing_print_command_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("resume.html");
        let printer = HtmlFilePrinter::new(&path).with_command(Some("false".to_string()));

        let err = printer.print("<html></html>").unwrap_err();

        assert!(matches!(err, PrintError::Failed { ref command, .. } if command == "false"));
        assert!(path.exists());
    }

    #[test]
    fn missing_print_command_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("resume.html");
        let printer = HtmlFilePrinter::new(&path)
            .with_command(Some("resume-no-such-printer --flag".to_string()));

        let err = printer.print("<html></html>").unwrap_err();

        assert!(matches!(
            err,
            PrintError::Launch { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
        assert!(path.exists());
    }

    #[test]
    fn blank_print_command_only_writes_the_page() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("resume.html");
        let printer = HtmlFilePrinter::new(&path).with_command(Some("   ".to_string()));

        assert_eq!(printer.print("<html></html>").unwrap(), path);
    }
}
