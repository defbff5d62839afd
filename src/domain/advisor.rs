//! Completion and validation status of a resume.
//!
//! The advisor only reads the document. Each rule is evaluated on its own,
//! so a document can have a section marked complete while an unrelated
//! issue (such as a malformed email) is still reported.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Serialize, Serializer};

use super::ResumeDocument;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));

/// Returns `true` if `value` has the `local@domain.tld` shape.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// A section that has everything it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedSection {
    /// Name and email are present.
    PersonalInformation,
    /// At least one experience entry, all with company and position.
    WorkExperience,
    /// At least one education entry, all with school and degree.
    Education,
    /// At least one skill.
    Skills,
}

impl CompletedSection {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInformation => "Personal Information",
            Self::WorkExperience => "Work Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }
}

impl fmt::Display for CompletedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CompletedSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Something the user still has to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    /// Name or email is missing.
    PersonalIncomplete,
    /// Email is present but malformed.
    InvalidEmail,
    /// The experience list is empty.
    NoExperience,
    /// Some experience entry lacks a company or position.
    IncompleteExperience,
    /// The education list is empty.
    NoEducation,
    /// Some education entry lacks a school or degree.
    IncompleteEducation,
    /// The skill list is empty.
    NoSkills,
}

impl Issue {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PersonalIncomplete => {
                "Personal information is incomplete (name and email are required)"
            }
            Self::InvalidEmail => "Email format is invalid",
            Self::NoExperience => "No work experience added",
            Self::IncompleteExperience => "Some work experience entries are incomplete",
            Self::NoEducation => "No education added",
            Self::IncompleteEducation => "Some education entries are incomplete",
            Self::NoSkills => "No skills added",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No issues.
    Complete,
    /// At least one issue.
    Incomplete,
}

/// Completed sections and outstanding issues, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sections with nothing left to do.
    pub completed: Vec<CompletedSection>,
    /// Outstanding issues.
    pub issues: Vec<Issue>,
}

impl Report {
    /// `Complete` iff there are no issues.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.issues.is_empty() {
            Status::Complete
        } else {
            Status::Incomplete
        }
    }

    /// Shorthand for `status() == Status::Complete`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status() == Status::Complete
    }
}

/// Derives the completion report for `doc`.
#[must_use]
pub fn advise(doc: &ResumeDocument) -> Report {
    let mut report = Report::default();
    let personal = &doc.personal_info;

    if personal.name.is_empty() || personal.email.is_empty() {
        report.issues.push(Issue::PersonalIncomplete);
    } else {
        report.completed.push(CompletedSection::PersonalInformation);
    }

    if !personal.email.is_empty() && !looks_like_email(&personal.email) {
        report.issues.push(Issue::InvalidEmail);
    }

    if doc.experience.is_empty() {
        report.issues.push(Issue::NoExperience);
    } else if doc
        .experience
        .iter()
        .any(|exp| exp.company.is_empty() || exp.position.is_empty())
    {
        report.issues.push(Issue::IncompleteExperience);
    } else {
        report.completed.push(CompletedSection::WorkExperience);
    }

    if doc.education.is_empty() {
        report.issues.push(Issue::NoEducation);
    } else if doc
        .education
        .iter()
        .any(|edu| edu.school.is_empty() || edu.degree.is_empty())
    {
        report.issues.push(Issue::IncompleteEducation);
    } else {
        report.completed.push(CompletedSection::Education);
    }

    if doc.skills.is_empty() {
        report.issues.push(Issue::NoSkills);
    } else {
        report.completed.push(CompletedSection::Skills);
    }

    report
}
