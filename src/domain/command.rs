//! Tagged document updates and the reducer that applies them.

use super::{
    Education, EntryId, Experience, ResumeDocument, Skill,
    edit::{self, EducationPatch, ExperiencePatch, PersonalPatch, SkillPatch},
};

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace one personal info field.
    UpdatePersonal(PersonalPatch),

    /// Append an empty education entry.
    AddEducation,
    /// Replace one field of an education entry.
    UpdateEducation(EntryId, EducationPatch),
    /// Delete an education entry.
    RemoveEducation(EntryId),

    /// Append an empty experience entry.
    AddExperience,
    /// Replace one field of an experience entry.
    UpdateExperience(EntryId, ExperiencePatch),
    /// Delete an experience entry.
    RemoveExperience(EntryId),

    /// Append a skill with the given name at the default level.
    AddSkill(String),
    /// Replace one field of a skill.
    UpdateSkill(EntryId, SkillPatch),
    /// Delete a skill.
    RemoveSkill(EntryId),

    /// Swap in a whole new document (import).
    Replace(ResumeDocument),
    /// Reset to the empty document.
    Clear,
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UpdatePersonal(_) => "update-personal",
            Self::AddEducation => "add-education",
            Self::UpdateEducation(..) => "update-education",
            Self::RemoveEducation(_) => "remove-education",
            Self::AddExperience => "add-experience",
            Self::UpdateExperience(..) => "update-experience",
            Self::RemoveExperience(_) => "remove-experience",
            Self::AddSkill(_) => "add-skill",
            Self::UpdateSkill(..) => "update-skill",
            Self::RemoveSkill(_) => "remove-skill",
            Self::Replace(_) => "replace",
            Self::Clear => "clear",
        }
    }
}

/// Applies `command` to `doc`, returning the new document.
///
/// Only the slice touched by the command is rebuilt.
#[must_use]
pub fn reduce(doc: &ResumeDocument, command: Command) -> ResumeDocument {
    let mut next = doc.clone();

    match command {
        Command::UpdatePersonal(patch) => {
            next.personal_info = edit::update_personal(&doc.personal_info, patch);
        }
        Command::AddEducation => next.education = edit::add(&doc.education, Education::default()),
        Command::UpdateEducation(id, patch) => {
            next.education = edit::update(&doc.education, &id, patch);
        }
        Command::RemoveEducation(id) => next.education = edit::remove(&doc.education, &id),
        Command::AddExperience => {
            next.experience = edit::add(&doc.experience, Experience::default());
        }
        Command::UpdateExperience(id, patch) => {
            next.experience = edit::update(&doc.experience, &id, patch);
        }
        Command::RemoveExperience(id) => next.experience = edit::remove(&doc.experience, &id),
        Command::AddSkill(name) => {
            let mut skill = Skill::default();
            edit::Entry::apply(&mut skill, SkillPatch::Name(name.trim().to_string()));
            next.skills = edit::add(&doc.skills, skill);
        }
        Command::UpdateSkill(id, patch) => next.skills = edit::update(&doc.skills, &id, patch),
        Command::RemoveSkill(id) => next.skills = edit::remove(&doc.skills, &id),
        Command::Replace(replacement) => next = replacement,
        Command::Clear => next = ResumeDocument::default(),
    }

    next
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::DEFAULT_SKILL_LEVEL;

    fn apply_all(commands: impl IntoIterator<Item = Command>) -> ResumeDocument {
        commands
            .into_iter()
            .fold(ResumeDocument::default(), |doc, command| reduce(&doc, command))
    }

    #[test]
    fn skills_keep_insertion_order_across_removal() {
        let doc = apply_all([
            Command::AddSkill("Go".to_string()),
            Command::AddSkill("Rust".to_string()),
        ]);
        let names: Vec<_> = doc.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Go", "Rust"]);

        let go = doc.skills[0].id.clone();
        let doc = reduce(&doc, Command::RemoveSkill(go));
        let names: Vec<_> = doc.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust"]);
    }

    #[test]
    fn added_skill_is_trimmed_at_default_level() {
        let doc = apply_all([Command::AddSkill("  Rust \n".to_string())]);
        assert_eq!(doc.skills[0].name, "Rust");
        assert_eq!(doc.skills[0].level, DEFAULT_SKILL_LEVEL);
    }

    #[test]
    fn ids_stay_unique_under_mixed_edits() {
        let mut doc = ResumeDocument::default();
        for round in 0..20 {
            doc = reduce(&doc, Command::AddExperience);
            doc = reduce(&doc, Command::AddEducation);
            if round % 3 == 0 {
                let first = doc.experience[0].id.clone();
                doc = reduce(&doc, Command::RemoveExperience(first));
            }
        }

        let ids: HashSet<_> = doc.experience.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), doc.experience.len());
        let ids: HashSet<_> = doc.education.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), doc.education.len());
    }

    #[test]
    fn setting_current_clears_end_date_in_one_step() {
        let doc = apply_all([Command::AddExperience]);
        let id = doc.experience[0].id.clone();
        let doc = reduce(
            &doc,
            Command::UpdateExperience(id.clone(), ExperiencePatch::EndDate("2022-08".to_string())),
        );
        assert_eq!(doc.experience[0].end_date, "2022-08");

        let doc = reduce(&doc, Command::UpdateExperience(id, ExperiencePatch::Current(true)));

        assert!(doc.experience[0].current);
        assert_eq!(doc.experience[0].end_date, "");
    }

    #[test]
    fn updates_touch_only_the_matching_entry() {
        let doc = apply_all([Command::AddEducation, Command::AddEducation]);
        let second = doc.education[1].id.clone();

        let doc = reduce(
            &doc,
            Command::UpdateEducation(second, EducationPatch::School("MIT".to_string())),
        );

        assert_eq!(doc.education[0].school, "");
        assert_eq!(doc.education[1].school, "MIT");
    }

    #[test]
    fn unknown_ids_leave_the_document_unchanged() {
        let doc = apply_all([Command::AddSkill("Go".to_string())]);
        let ghost = EntryId::new("ghost");

        assert_eq!(
            reduce(&doc, Command::UpdateSkill(ghost.clone(), SkillPatch::Level(1))),
            doc
        );
        assert_eq!(reduce(&doc, Command::RemoveSkill(ghost)), doc);
    }

    #[test]
    fn personal_update_is_never_blocked() {
        let doc = apply_all([Command::UpdatePersonal(PersonalPatch::Email(
            "bad-email".to_string(),
        ))]);
        assert_eq!(doc.personal_info.email, "bad-email");
    }

    #[test]
    fn replace_and_clear_swap_the_whole_document() {
        let imported = apply_all([Command::AddSkill("Go".to_string())]);
        let doc = reduce(&ResumeDocument::default(), Command::Replace(imported.clone()));
        assert_eq!(doc, imported);

        assert!(reduce(&doc, Command::Clear).is_empty());
    }
}
