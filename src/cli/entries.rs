//! Subcommands for the list sections: education, experience and skills.
//!
//! The three sections share one implementation through [`Section`]. Entries
//! are addressed by id; any unique prefix of an id is accepted, which is
//! what `list` prints.

use anyhow::bail;
use clap::{ArgAction, builder::BoolishValueParser};
use resume::{
    Command, EntryId, ResumeDocument,
    domain::{
        Education, EducationPatch, Entry, Experience, ExperiencePatch, FieldError, Skill,
        SkillPatch, MAX_SKILL_LEVEL,
    },
    render::date::format_range,
};
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

/// Number of id characters shown by `list`.
const SHORT_ID_LEN: usize = 8;

/// A list section of the document, as seen from the terminal.
trait Section: Entry {
    /// Singular name used in messages and in the subcommand.
    const NAME: &'static str;

    fn entries(doc: &ResumeDocument) -> &[Self];
    fn parse_patch(field: &str, value: &str) -> Result<Self::Patch, FieldError>;
    fn update(id: EntryId, patch: Self::Patch) -> Command;
    fn remove(id: EntryId) -> Command;

    /// One-line description for `list`.
    fn summary(&self) -> String;
}

impl Section for Education {
    const NAME: &'static str = "education";

    fn entries(doc: &ResumeDocument) -> &[Self] {
        &doc.education
    }

    fn parse_patch(field: &str, value: &str) -> Result<EducationPatch, FieldError> {
        EducationPatch::parse(field, value)
    }

    fn update(id: EntryId, patch: EducationPatch) -> Command {
        Command::UpdateEducation(id, patch)
    }

    fn remove(id: EntryId) -> Command {
        Command::RemoveEducation(id)
    }

    fn summary(&self) -> String {
        let mut summary = or_placeholder(&self.degree, "(no degree)");
        if !self.field.is_empty() {
            summary.push_str(&format!(" in {}", self.field));
        }
        summary.push_str(&format!(", {}", or_placeholder(&self.school, "(no school)")));
        push_dates(&mut summary, &self.start_date, &self.end_date, false);
        summary
    }
}

impl Section for Experience {
    const NAME: &'static str = "experience";

    fn entries(doc: &ResumeDocument) -> &[Self] {
        &doc.experience
    }

    fn parse_patch(field: &str, value: &str) -> Result<ExperiencePatch, FieldError> {
        ExperiencePatch::parse(field, value)
    }

    fn update(id: EntryId, patch: ExperiencePatch) -> Command {
        Command::UpdateExperience(id, patch)
    }

    fn remove(id: EntryId) -> Command {
        Command::RemoveExperience(id)
    }

    fn summary(&self) -> String {
        let mut summary = format!(
            "{} at {}",
            or_placeholder(&self.position, "(no position)"),
            or_placeholder(&self.company, "(no company)")
        );
        push_dates(&mut summary, &self.start_date, &self.end_date, self.current);
        summary
    }
}

impl Section for Skill {
    const NAME: &'static str = "skill";

    fn entries(doc: &ResumeDocument) -> &[Self] {
        &doc.skills
    }

    fn parse_patch(field: &str, value: &str) -> Result<SkillPatch, FieldError> {
        SkillPatch::parse(field, value)
    }

    fn update(id: EntryId, patch: SkillPatch) -> Command {
        Command::UpdateSkill(id, patch)
    }

    fn remove(id: EntryId) -> Command {
        Command::RemoveSkill(id)
    }

    fn summary(&self) -> String {
        format!(
            "{} ({}/{MAX_SKILL_LEVEL})",
            or_placeholder(&self.name, "(unnamed)"),
            self.level
        )
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn push_dates(summary: &mut String, start: &str, end: &str, current: bool) {
    if !start.is_empty() || !end.is_empty() || current {
        summary.push_str(&format!(" ({})", format_range(start, end, current)));
    }
}

/// Returns the first few characters of `id`.
fn short_id(id: &EntryId) -> &str {
    let id = id.as_str();
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

/// Finds the entry addressed by `input`: an exact id, or a unique prefix.
fn resolve<T: Section>(doc: &ResumeDocument, input: &str) -> anyhow::Result<EntryId> {
    if input.is_empty() {
        bail!("{} id must not be empty", T::NAME);
    }

    let entries = T::entries(doc);
    if let Some(entry) = entries.iter().find(|e| e.id().as_str() == input) {
        return Ok(entry.id().clone());
    }

    let matches: Vec<&EntryId> = entries
        .iter()
        .map(Entry::id)
        .filter(|id| id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => bail!(
            "No {} entry matches '{input}'. Run 'resume {} list' to see ids.",
            T::NAME,
            T::NAME
        ),
        _ => bail!(
            "'{input}' matches {} {} entries; use a longer prefix",
            matches.len(),
            T::NAME
        ),
    }
}

/// Parses a `FIELD=VALUE` pair.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))
}

/// Appends an entry via `command`, then applies the `set` assignments to it.
///
/// Assignments are parsed before anything changes, so a bad field leaves the
/// document untouched.
fn add<T: Section>(
    workspace: &Workspace,
    command: Command,
    set: &[(String, String)],
) -> anyhow::Result<EntryId> {
    let patches = set
        .iter()
        .map(|(field, value)| T::parse_patch(field, value))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = workspace.session();
    session.apply(command)?;
    let Some(id) = T::entries(session.document()).last().map(|e| e.id().clone()) else {
        bail!("failed to add {} entry", T::NAME);
    };
    for patch in patches {
        session.apply(T::update(id.clone(), patch))?;
    }

    println!(
        "{} {}",
        format!("Added {} entry", T::NAME).success(),
        short_id(&id).info()
    );
    Ok(id)
}

fn update<T: Section>(
    workspace: &Workspace,
    id: &str,
    field: &str,
    value: &str,
) -> anyhow::Result<()> {
    let patch = T::parse_patch(field, value)?;
    patch_entry::<T>(workspace, id, patch)
}

fn patch_entry<T: Section>(workspace: &Workspace, id: &str, patch: T::Patch) -> anyhow::Result<()> {
    let mut session = workspace.session();
    let id = resolve::<T>(session.document(), id)?;
    session.apply(T::update(id.clone(), patch))?;

    println!(
        "{} {}",
        format!("Updated {} entry", T::NAME).success(),
        short_id(&id).info()
    );
    Ok(())
}

fn remove<T: Section>(workspace: &Workspace, id: &str) -> anyhow::Result<()> {
    let mut session = workspace.session();
    let id = resolve::<T>(session.document(), id)?;
    session.apply(T::remove(id.clone()))?;

    println!(
        "{} {}",
        format!("Removed {} entry", T::NAME).success(),
        short_id(&id).info()
    );
    Ok(())
}

fn list<T: Section>(workspace: &Workspace) {
    let session = workspace.session();
    let entries = T::entries(session.document());

    if entries.is_empty() {
        println!(
            "No {} entries yet. Add one with 'resume {} add'.",
            T::NAME,
            T::NAME
        );
        return;
    }

    for entry in entries {
        println!("{}  {}", short_id(entry.id()).dim(), entry.summary());
    }
}

#[derive(Debug, clap::Parser)]
pub struct EducationCommand {
    #[command(subcommand)]
    action: EducationAction,
}

#[derive(Debug, clap::Subcommand)]
enum EducationAction {
    /// Add an education entry
    Add {
        /// Set a field on the new entry (repeatable)
        ///
        /// Fields: school, degree, field, startDate, endDate, description.
        #[arg(short, long, value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Set one field of an education entry
    Update {
        /// Id, or a unique prefix of it
        id: String,
        /// Field name
        field: String,
        /// New value (dates as YYYY-MM)
        value: String,
    },

    /// Remove an education entry
    Remove {
        /// Id, or a unique prefix of it
        id: String,
    },

    /// List education entries
    List,
}

impl EducationCommand {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self.action {
            EducationAction::Add { set } => {
                add::<Education>(workspace, Command::AddEducation, &set)?;
            }
            EducationAction::Update { id, field, value } => {
                update::<Education>(workspace, &id, &field, &value)?;
            }
            EducationAction::Remove { id } => remove::<Education>(workspace, &id)?,
            EducationAction::List => list::<Education>(workspace),
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct ExperienceCommand {
    #[command(subcommand)]
    action: ExperienceAction,
}

#[derive(Debug, clap::Subcommand)]
enum ExperienceAction {
    /// Add a work experience entry
    Add {
        /// Set a field on the new entry (repeatable)
        ///
        /// Fields: company, position, startDate, endDate, current,
        /// description.
        #[arg(short, long, value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Set one field of a work experience entry
    Update {
        /// Id, or a unique prefix of it
        id: String,
        /// Field name
        field: String,
        /// New value (dates as YYYY-MM)
        value: String,
    },

    /// Mark a position as current, or not
    ///
    /// A current position shows "Present" as its end date. Marking a
    /// position as current clears its end date.
    Current {
        /// Id, or a unique prefix of it
        id: String,
        /// true or false
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        current: bool,
    },

    /// Remove a work experience entry
    Remove {
        /// Id, or a unique prefix of it
        id: String,
    },

    /// List work experience entries
    List,
}

impl ExperienceCommand {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self.action {
            ExperienceAction::Add { set } => {
                add::<Experience>(workspace, Command::AddExperience, &set)?;
            }
            ExperienceAction::Update { id, field, value } => {
                update::<Experience>(workspace, &id, &field, &value)?;
            }
            ExperienceAction::Current { id, current } => {
                patch_entry::<Experience>(workspace, &id, ExperiencePatch::Current(current))?;
            }
            ExperienceAction::Remove { id } => remove::<Experience>(workspace, &id)?,
            ExperienceAction::List => list::<Experience>(workspace),
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct SkillCommand {
    #[command(subcommand)]
    action: SkillAction,
}

#[derive(Debug, clap::Subcommand)]
enum SkillAction {
    /// Add a skill
    Add {
        /// Skill name
        name: String,

        /// Level from 1 (beginner) to 5 (expert); defaults to 3
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,
    },

    /// Set the name or level of a skill
    Update {
        /// Id, or a unique prefix of it
        id: String,
        /// Field name (name or level)
        field: String,
        /// New value
        value: String,
    },

    /// Remove a skill
    Remove {
        /// Id, or a unique prefix of it
        id: String,
    },

    /// List skills
    List,
}

impl SkillCommand {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self.action {
            SkillAction::Add { name, level } => {
                let name = name.trim();
                if name.is_empty() {
                    bail!("Skill name must not be empty");
                }
                let set: Vec<_> = level
                    .map(|level| ("level".to_string(), level.to_string()))
                    .into_iter()
                    .collect();
                add::<Skill>(workspace, Command::AddSkill(name.to_string()), &set)?;
            }
            SkillAction::Update { id, field, value } => {
                update::<Skill>(workspace, &id, &field, &value)?;
            }
            SkillAction::Remove { id } => remove::<Skill>(workspace, &id)?,
            SkillAction::List => list::<Skill>(workspace),
        }
        Ok(())
    }
}
