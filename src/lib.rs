//! Form-driven resume editing
//!
//! A resume is a single JSON document with personal details, education,
//! experience and skills. This crate edits it through typed commands, keeps
//! it in a local store, reports what is missing, and renders it through one
//! of two templates as text or print-ready HTML.

pub mod domain;
pub use domain::{Command, Config, EntryId, Report, ResumeDocument};

/// Template rendering to text and HTML.
pub mod render;
pub use render::Template;

/// The editing session tying the document to its store.
pub mod session;
pub use session::{Session, SessionOptions};

/// Local persistence and file export.
pub mod storage;
pub use storage::{FileStore, Gateway, MemoryStore, Store};
