//! Domain models for the resume builder.
//!
//! This module contains the document shape, the section editors that
//! produce updated slices of it, the command reducer, the validation advisor
//! and the workspace configuration.

/// Completion and validation status derived from a document.
pub mod advisor;
pub use advisor::{CompletedSection, Issue, Report, Status, advise};

/// Tagged update commands and the reducer.
pub mod command;
pub use command::{Command, reduce};

mod config;
pub use config::{Config, ConfigError};

/// The document and its entries.
pub mod document;
pub use document::{
    DEFAULT_SKILL_LEVEL, EDUCATION_DESCRIPTION_CAP, EXPERIENCE_DESCRIPTION_CAP, Education,
    Experience, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL, PERSON_NAME_CAP, PersonalInfo, ResumeDocument,
    SKILL_NAME_CAP, Skill,
};

/// Section editors and typed field patches.
pub mod edit;
pub use edit::{
    Advice, EducationPatch, Entry, ExperiencePatch, FieldError, PersonalPatch, SkillPatch,
};

mod id;
pub use id::EntryId;

/// Year-month parsing shared by editors and renderers.
pub mod month;
