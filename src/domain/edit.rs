//! Section editors.
//!
//! Each editor takes the current slice of the document and returns a new
//! one. Lists share a single generic implementation through the [`Entry`]
//! trait; personal info is a flat record update.
//!
//! Field updates are expressed as typed patches. Each patch type also parses
//! from a `(field, value)` pair, which is how the terminal front end builds
//! them.

use std::fmt;

use super::{
    EDUCATION_DESCRIPTION_CAP, EXPERIENCE_DESCRIPTION_CAP, Education, EntryId, Experience,
    MAX_SKILL_LEVEL, MIN_SKILL_LEVEL, PERSON_NAME_CAP, PersonalInfo, SKILL_NAME_CAP, Skill,
    advisor::looks_like_email, document::truncate_chars, month::is_month_or_empty,
};

/// Error returned when a `(field, value)` pair cannot be turned into a patch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field name is not part of the section.
    #[error("unknown {section} field '{field}' (expected one of: {expected})")]
    UnknownField {
        /// Section the field was looked up in.
        section: &'static str,
        /// The name that was given.
        field: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },

    /// The value does not fit the field.
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        /// Field being set.
        field: &'static str,
        /// The value that was given.
        value: String,
        /// What was expected instead.
        reason: &'static str,
    },
}

/// Normalizes `startDate`, `start-date` and `start_date` to `startdate`.
fn normalize(field: &str) -> String {
    field
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn unknown(section: &'static str, field: &str, expected: &[&str]) -> FieldError {
    FieldError::UnknownField {
        section,
        field: field.to_string(),
        expected: expected.join(", "),
    }
}

fn month(field: &'static str, value: String) -> Result<String, FieldError> {
    if is_month_or_empty(&value) {
        Ok(value)
    } else {
        Err(FieldError::InvalidValue {
            field,
            value,
            reason: "expected a month as YYYY-MM, or an empty string",
        })
    }
}

/// An entry of one of the document's lists.
pub trait Entry: Clone + Default {
    /// Typed field update accepted by this entry.
    type Patch;

    /// The entry's identifier.
    fn id(&self) -> &EntryId;

    /// Replaces the entry's identifier.
    fn set_id(&mut self, id: EntryId);

    /// Applies a field update in place.
    fn apply(&mut self, patch: Self::Patch);
}

/// Returns `list` with `entry` appended under a freshly generated id.
#[must_use]
pub fn add<T: Entry>(list: &[T], mut entry: T) -> Vec<T> {
    entry.set_id(EntryId::generate(list.iter().map(Entry::id)));
    let mut next = list.to_vec();
    next.push(entry);
    next
}

/// Returns `list` with `patch` applied to the entry matching `id`.
///
/// If no entry matches, the result equals `list`.
#[must_use]
pub fn update<T: Entry>(list: &[T], id: &EntryId, patch: T::Patch) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(entry) = next.iter_mut().find(|entry| entry.id() == id) {
        entry.apply(patch);
    } else {
        tracing::debug!("no entry with id {id}; update ignored");
    }
    next
}

/// Returns `list` without the entry matching `id`.
#[must_use]
pub fn remove<T: Entry>(list: &[T], id: &EntryId) -> Vec<T> {
    list.iter().filter(|entry| entry.id() != id).cloned().collect()
}

/// A single-field update of [`PersonalInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalPatch {
    /// Sets the name.
    Name(String),
    /// Sets the email.
    Email(String),
    /// Sets the phone number.
    Phone(String),
    /// Sets the location.
    Location(String),
    /// Sets the `LinkedIn` profile.
    Linkedin(String),
    /// Sets the `GitHub` profile.
    Github(String),
    /// Sets the website.
    Website(String),
}

impl PersonalPatch {
    /// Accepted field names.
    pub const FIELDS: &[&str] = &[
        "name", "email", "phone", "location", "linkedin", "github", "website",
    ];

    /// Builds a patch from a field name and value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] if `field` is not a personal info
    /// field.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        Ok(match normalize(field).as_str() {
            "name" => Self::Name(value),
            "email" => Self::Email(value),
            "phone" => Self::Phone(value),
            "location" => Self::Location(value),
            "linkedin" => Self::Linkedin(value),
            "github" => Self::Github(value),
            "website" => Self::Website(value),
            _ => return Err(unknown("personal", field, Self::FIELDS)),
        })
    }

    fn apply(self, info: &mut PersonalInfo) {
        match self {
            Self::Name(v) => info.name = v,
            Self::Email(v) => info.email = v,
            Self::Phone(v) => info.phone = v,
            Self::Location(v) => info.location = v,
            Self::Linkedin(v) => info.linkedin = v,
            Self::Github(v) => info.github = v,
            Self::Website(v) => info.website = v,
        }
    }
}

/// Returns a copy of `info` with `patch` applied.
///
/// Personal fields are never rejected; see [`personal_field_advice`] for
/// the non-blocking checks.
#[must_use]
pub fn update_personal(info: &PersonalInfo, patch: PersonalPatch) -> PersonalInfo {
    let mut next = info.clone();
    patch.apply(&mut next);
    next
}

/// Non-blocking feedback on a personal info value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// The name is longer than [`PERSON_NAME_CAP`] characters.
    NameTooLong {
        /// Length of the name, in characters.
        length: usize,
    },
    /// The name is close to [`PERSON_NAME_CAP`].
    CharactersRemaining(usize),
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
}

impl Advice {
    /// Whether the value would be highlighted as invalid.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        !matches!(self, Self::CharactersRemaining(_))
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooLong { .. } => write!(f, "Name exceeds {PERSON_NAME_CAP} characters"),
            Self::CharactersRemaining(remaining) => write!(f, "{remaining} characters remaining"),
            Self::InvalidEmail => f.write_str("Email format looks invalid"),
        }
    }
}

/// Checks a personal info update without blocking it.
#[must_use]
pub fn personal_field_advice(patch: &PersonalPatch) -> Option<Advice> {
    match patch {
        PersonalPatch::Name(name) => {
            let length = name.chars().count();
            if length > PERSON_NAME_CAP {
                Some(Advice::NameTooLong { length })
            } else if length > PERSON_NAME_CAP - 5 {
                Some(Advice::CharactersRemaining(PERSON_NAME_CAP - length))
            } else {
                None
            }
        }
        PersonalPatch::Email(email) if !email.is_empty() && !looks_like_email(email) => {
            Some(Advice::InvalidEmail)
        }
        _ => None,
    }
}

/// A single-field update of an [`Education`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationPatch {
    /// Sets the school.
    School(String),
    /// Sets the degree.
    Degree(String),
    /// Sets the field of study.
    Field(String),
    /// Sets the start month.
    StartDate(String),
    /// Sets the end month.
    EndDate(String),
    /// Sets the description, truncated to [`EDUCATION_DESCRIPTION_CAP`].
    Description(String),
}

impl EducationPatch {
    /// Accepted field names.
    pub const FIELDS: &[&str] = &[
        "school",
        "degree",
        "field",
        "startDate",
        "endDate",
        "description",
    ];

    /// Builds a patch from a field name and value.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `field` is unknown or a date is not a
    /// `YYYY-MM` month.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        Ok(match normalize(field).as_str() {
            "school" => Self::School(value),
            "degree" => Self::Degree(value),
            "field" => Self::Field(value),
            "startdate" => Self::StartDate(month("startDate", value)?),
            "enddate" => Self::EndDate(month("endDate", value)?),
            "description" => Self::Description(value),
            _ => return Err(unknown("education", field, Self::FIELDS)),
        })
    }
}

impl Entry for Education {
    type Patch = EducationPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: EducationPatch) {
        match patch {
            EducationPatch::School(v) => self.school = v,
            EducationPatch::Degree(v) => self.degree = v,
            EducationPatch::Field(v) => self.field = v,
            EducationPatch::StartDate(v) => self.start_date = v,
            EducationPatch::EndDate(v) => self.end_date = v,
            EducationPatch::Description(v) => {
                self.description = truncate_chars(v, EDUCATION_DESCRIPTION_CAP);
            }
        }
    }
}

/// A single-field update of an [`Experience`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperiencePatch {
    /// Sets the company.
    Company(String),
    /// Sets the position.
    Position(String),
    /// Sets the start month.
    StartDate(String),
    /// Sets the end month. Ignored while the entry is current.
    EndDate(String),
    /// Marks the position as current or not. Setting it clears the end
    /// month.
    Current(bool),
    /// Sets the description, truncated to [`EXPERIENCE_DESCRIPTION_CAP`].
    Description(String),
}

impl ExperiencePatch {
    /// Accepted field names.
    pub const FIELDS: &[&str] = &[
        "company",
        "position",
        "startDate",
        "endDate",
        "current",
        "description",
    ];

    /// Builds a patch from a field name and value.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `field` is unknown, a date is not a
    /// `YYYY-MM` month, or `current` is not a boolean.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        Ok(match normalize(field).as_str() {
            "company" => Self::Company(value),
            "position" => Self::Position(value),
            "startdate" => Self::StartDate(month("startDate", value)?),
            "enddate" => Self::EndDate(month("endDate", value)?),
            "current" => Self::Current(parse_flag(&value).ok_or(FieldError::InvalidValue {
                field: "current",
                value,
                reason: "expected true or false",
            })?),
            "description" => Self::Description(value),
            _ => return Err(unknown("experience", field, Self::FIELDS)),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

impl Entry for Experience {
    type Patch = ExperiencePatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        match patch {
            ExperiencePatch::Company(v) => self.company = v,
            ExperiencePatch::Position(v) => self.position = v,
            ExperiencePatch::StartDate(v) => self.start_date = v,
            ExperiencePatch::EndDate(v) => {
                if self.current {
                    tracing::debug!("end date of current position {} left empty", self.id);
                } else {
                    self.end_date = v;
                }
            }
            ExperiencePatch::Current(current) => {
                self.current = current;
                if current {
                    self.end_date.clear();
                }
            }
            ExperiencePatch::Description(v) => {
                self.description = truncate_chars(v, EXPERIENCE_DESCRIPTION_CAP);
            }
        }
    }
}

/// A single-field update of a [`Skill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillPatch {
    /// Sets the name, truncated to [`SKILL_NAME_CAP`].
    Name(String),
    /// Sets the level, clamped to the 1–5 range.
    Level(u8),
}

impl SkillPatch {
    /// Accepted field names.
    pub const FIELDS: &[&str] = &["name", "level"];

    /// Builds a patch from a field name and value.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `field` is unknown or the level is not a
    /// number between 1 and 5.
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        Ok(match normalize(field).as_str() {
            "name" => Self::Name(value),
            "level" => Self::Level(parse_level(&value).ok_or(FieldError::InvalidValue {
                field: "level",
                value,
                reason: "expected a whole number from 1 to 5",
            })?),
            _ => return Err(unknown("skill", field, Self::FIELDS)),
        })
    }
}

/// Parses a skill level, accepting only values in the selectable range.
#[must_use]
pub fn parse_level(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|level| (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(level))
}

impl Entry for Skill {
    type Patch = SkillPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: SkillPatch) {
        match patch {
            SkillPatch::Name(v) => self.name = truncate_chars(v, SKILL_NAME_CAP),
            SkillPatch::Level(level) => {
                self.level = level.clamp(MIN_SKILL_LEVEL, MAX_SKILL_LEVEL);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;
    use crate::domain::DEFAULT_SKILL_LEVEL;

    fn skill_named(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            ..Skill::default()
        }
    }

    #[test]
    fn add_appends_with_fresh_unique_ids() {
        let mut list = Vec::new();
        for name in ["a", "b", "c", "d"] {
            list = add(&list, skill_named(name));
        }

        let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);

        let ids: HashSet<_> = list.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn add_replaces_a_colliding_id() {
        let first = add(&[], skill_named("a"));
        let mut clash = skill_named("b");
        clash.id = first[0].id.clone();

        let list = add(&first, clash);

        assert_ne!(list[0].id, list[1].id);
    }

    #[test]
    fn edits_leave_the_input_untouched() {
        let list = add(&[], skill_named("Go"));
        let before = list.clone();
        let id = list[0].id.clone();

        let _ = update(&list, &id, SkillPatch::Level(5));
        let _ = remove(&list, &id);

        assert_eq!(list, before);
    }

    #[test]
    fn update_and_remove_with_unknown_id_are_no_ops() {
        let list = add(&[], skill_named("Go"));
        let missing = EntryId::new("missing");

        assert_eq!(update(&list, &missing, SkillPatch::Level(1)), list);
        assert_eq!(remove(&list, &missing), list);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut list = Vec::new();
        for name in ["a", "b", "c"] {
            list = add(&list, skill_named(name));
        }
        let middle = list[1].id.clone();

        let list = remove(&list, &middle);

        let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn current_clears_end_date() {
        let mut exp = Experience {
            end_date: "2020-05".to_string(),
            ..Experience::default()
        };

        exp.apply(ExperiencePatch::Current(true));

        assert!(exp.current);
        assert_eq!(exp.end_date, "");
    }

    #[test]
    fn end_date_is_ignored_while_current() {
        let mut exp = Experience::default();
        exp.apply(ExperiencePatch::Current(true));
        exp.apply(ExperiencePatch::EndDate("2024-01".to_string()));
        assert_eq!(exp.end_date, "");

        exp.apply(ExperiencePatch::Current(false));
        exp.apply(ExperiencePatch::EndDate("2024-01".to_string()));
        assert_eq!(exp.end_date, "2024-01");
    }

    #[test]
    fn descriptions_are_capped() {
        let mut edu = Education::default();
        edu.apply(EducationPatch::Description("x".repeat(600)));
        assert_eq!(edu.description.chars().count(), EDUCATION_DESCRIPTION_CAP);

        let mut exp = Experience::default();
        exp.apply(ExperiencePatch::Description("y".repeat(1200)));
        assert_eq!(exp.description.chars().count(), EXPERIENCE_DESCRIPTION_CAP);
    }

    #[test]
    fn skill_level_is_clamped_and_name_capped() {
        let mut skill = Skill::default();
        assert_eq!(skill.level, DEFAULT_SKILL_LEVEL);

        skill.apply(SkillPatch::Level(9));
        assert_eq!(skill.level, MAX_SKILL_LEVEL);
        skill.apply(SkillPatch::Level(0));
        assert_eq!(skill.level, MIN_SKILL_LEVEL);

        skill.apply(SkillPatch::Name("z".repeat(80)));
        assert_eq!(skill.name.chars().count(), SKILL_NAME_CAP);
    }

    #[test_case("startDate" ; "camel case")]
    #[test_case("start-date" ; "kebab case")]
    #[test_case("start_date" ; "snake case")]
    #[test_case("STARTDATE" ; "upper case")]
    fn field_names_accept_common_spellings(field: &str) {
        assert_eq!(
            EducationPatch::parse(field, "2019-09"),
            Ok(EducationPatch::StartDate("2019-09".to_string()))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PersonalPatch::parse("twitter", "@jane").unwrap_err();
        assert!(matches!(err, FieldError::UnknownField { section: "personal", .. }));
        assert!(err.to_string().contains("linkedin"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(ExperiencePatch::parse("endDate", "last year").is_err());
        assert!(ExperiencePatch::parse("current", "maybe").is_err());
        assert!(SkillPatch::parse("level", "6").is_err());
        assert!(SkillPatch::parse("level", "three").is_err());
        assert_eq!(
            ExperiencePatch::parse("current", "yes"),
            Ok(ExperiencePatch::Current(true))
        );
        assert_eq!(ExperiencePatch::parse("endDate", ""), Ok(ExperiencePatch::EndDate(String::new())));
    }

    #[test]
    fn personal_update_replaces_one_field() {
        let info = PersonalInfo {
            name: "Jane".to_string(),
            ..PersonalInfo::default()
        };

        let next = update_personal(&info, PersonalPatch::Email("jane@example.com".to_string()));

        assert_eq!(next.name, "Jane");
        assert_eq!(next.email, "jane@example.com");
        assert_eq!(info.email, "");
    }

    #[test]
    fn advice_is_given_for_long_names_and_bad_emails() {
        assert_eq!(
            personal_field_advice(&PersonalPatch::Name("n".repeat(55))),
            Some(Advice::NameTooLong { length: 55 })
        );
        assert_eq!(
            Advice::NameTooLong { length: 55 }.to_string(),
            "Name exceeds 50 characters"
        );
        assert_eq!(
            personal_field_advice(&PersonalPatch::Name("n".repeat(47))),
            Some(Advice::CharactersRemaining(3))
        );
        assert_eq!(personal_field_advice(&PersonalPatch::Name("Jane".to_string())), None);
        assert_eq!(
            personal_field_advice(&PersonalPatch::Email("bad-email".to_string())),
            Some(Advice::InvalidEmail)
        );
        assert_eq!(personal_field_advice(&PersonalPatch::Email(String::new())), None);
    }
}
