//! The resume document and the entries it is made of.
//!
//! Field names serialize in camelCase so the JSON matches files produced by
//! the browser edition of the builder. Every field carries a default, so a
//! document is always fully populated even when read from a file that omits
//! some fields.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// Maximum length of an education description, in characters.
pub const EDUCATION_DESCRIPTION_CAP: usize = 500;

/// Maximum length of an experience description, in characters.
pub const EXPERIENCE_DESCRIPTION_CAP: usize = 1000;

/// Maximum length of a skill name, in characters.
pub const SKILL_NAME_CAP: usize = 50;

/// Advisory maximum length of the person's name, in characters.
pub const PERSON_NAME_CAP: usize = 50;

/// Lowest selectable skill level.
pub const MIN_SKILL_LEVEL: u8 = 1;

/// Highest selectable skill level.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Level given to newly added skills.
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

/// Contact details shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    /// Full name. Required for a complete resume.
    pub name: String,
    /// Email address. Required for a complete resume.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// City, region or similar.
    pub location: String,
    /// `LinkedIn` profile.
    pub linkedin: String,
    /// `GitHub` profile.
    pub github: String,
    /// Personal website.
    pub website: String,
}

/// A school, degree or course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    /// Identifier, unique within the education list.
    pub id: EntryId,
    /// Institution name.
    pub school: String,
    /// Degree awarded.
    pub degree: String,
    /// Field of study.
    pub field: String,
    /// Start month, `YYYY-MM`, or empty.
    pub start_date: String,
    /// End month, `YYYY-MM`, or empty.
    pub end_date: String,
    /// Free text, at most [`EDUCATION_DESCRIPTION_CAP`] characters when
    /// entered through the editor.
    pub description: String,
}

/// A position held at a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Identifier, unique within the experience list.
    pub id: EntryId,
    /// Employer.
    pub company: String,
    /// Job title.
    pub position: String,
    /// Start month, `YYYY-MM`, or empty.
    pub start_date: String,
    /// End month, `YYYY-MM`, or empty. Always empty while `current` is set.
    pub end_date: String,
    /// Whether this is the person's current position.
    pub current: bool,
    /// Free text, at most [`EXPERIENCE_DESCRIPTION_CAP`] characters when
    /// entered through the editor.
    pub description: String,
}

/// A named skill with a self-assessed level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Identifier, unique within the skill list.
    pub id: EntryId,
    /// Skill name, at most [`SKILL_NAME_CAP`] characters.
    pub name: String,
    /// Level between [`MIN_SKILL_LEVEL`] and [`MAX_SKILL_LEVEL`].
    pub level: u8,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: EntryId::default(),
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

/// The whole resume: the unit of persistence and the input to rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    /// Header details.
    pub personal_info: PersonalInfo,
    /// Education entries in insertion order.
    pub education: Vec<Education>,
    /// Experience entries in insertion order.
    pub experience: Vec<Experience>,
    /// Skills in insertion order.
    pub skills: Vec<Skill>,
}

impl ResumeDocument {
    /// Returns `true` if nothing has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
    }

    /// Returns `true` if none of the list sections has an entry.
    #[must_use]
    pub fn has_no_sections(&self) -> bool {
        self.education.is_empty() && self.experience.is_empty() && self.skills.is_empty()
    }
}

/// Truncates `value` to at most `cap` characters.
pub(crate) fn truncate_chars(mut value: String, cap: usize) -> String {
    if let Some((byte_index, _)) = value.char_indices().nth(cap) {
        value.truncate(byte_index);
    }
    value
}
