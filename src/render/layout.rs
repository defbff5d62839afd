//! Template-independent selection of what a resume shows.
//!
//! [`layout`] decides which sections appear, which placeholders stand in for
//! missing values and how dates and skill levels are presented. The encoders
//! ([`Layout::write_text`] and [`super::html::page`]) only arrange the result.

use std::fmt::{self, Write};

use super::{Template, date::format_range};
use crate::domain::{Education, Experience, MAX_SKILL_LEVEL, PersonalInfo, ResumeDocument, Skill};

/// First line of the placeholder shown when there is nothing to list.
pub const EMPTY_STATE_TITLE: &str = "Start filling out your information to see your resume preview";

/// Second line of the placeholder shown when there is nothing to list.
pub const EMPTY_STATE_HINT: &str = "Your resume will appear here as you type";

/// A rendered resume, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Template the layout was produced for.
    pub template: Template,
    /// Name and contact details.
    pub header: Header,
    /// Sections, or the empty-state placeholder.
    pub body: Body,
}

/// The resume header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Person's name, or `Your Name`.
    pub name: String,
    /// Email, phone and location, each only when present.
    pub contact: Vec<Contact>,
    /// `LinkedIn`, `GitHub` and website, each only when present.
    pub links: Vec<Contact>,
}

/// One contact detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// What the value is.
    pub kind: ContactKind,
    /// The value as entered.
    pub value: String,
}

/// Kinds of contact detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Location.
    Location,
    /// `LinkedIn` profile.
    Linkedin,
    /// `GitHub` profile.
    Github,
    /// Website.
    Website,
}

impl ContactKind {
    /// Short label used where icons are unavailable.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Website => "Website",
        }
    }
}

/// What follows the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// At least one list has entries.
    Sections(Vec<Section>),
    /// Every list is empty.
    Empty,
}

/// A titled section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Which part of the document this shows.
    pub kind: SectionKind,
    /// Heading text for the template.
    pub heading: &'static str,
    /// Section content.
    pub content: SectionContent,
}

/// The document lists, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Work experience.
    Experience,
    /// Education.
    Education,
    /// Skills.
    Skills,
}

impl SectionKind {
    /// Heading for this section in `template`.
    #[must_use]
    pub const fn heading(self, template: Template) -> &'static str {
        match (template, self) {
            (Template::Modern, Self::Experience) => "WORK EXPERIENCE",
            (Template::Modern, Self::Education) => "EDUCATION",
            (Template::Modern, Self::Skills) => "SKILLS",
            (Template::Classic, Self::Experience) => "Professional Experience",
            (Template::Classic, Self::Education) => "Education",
            (Template::Classic, Self::Skills) => "Skills",
        }
    }
}

/// Section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Experience or education entries.
    Entries(Vec<Item>),
    /// Skills with their ratings.
    Skills(Vec<SkillLine>),
}

/// One experience or education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Position, or degree and field.
    pub title: String,
    /// Company or school.
    pub subtitle: String,
    /// Formatted date range, when any date is known.
    pub dates: Option<String>,
    /// Description, when non-empty.
    pub description: Option<String>,
}

/// One skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLine {
    /// Skill name.
    pub name: String,
    /// How the level is shown.
    pub rating: Rating,
}

/// Presentation of a skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Five-unit indicator with this many units filled.
    Stars(u8),
    /// Textual label.
    Label(&'static str),
}

impl Rating {
    /// Rating of `level` in `template`.
    #[must_use]
    pub const fn for_level(level: u8, template: Template) -> Self {
        match template {
            Template::Modern => Self::Stars(if level > MAX_SKILL_LEVEL {
                MAX_SKILL_LEVEL
            } else {
                level
            }),
            Template::Classic => Self::Label(level_label(level)),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stars(filled) => {
                for unit in 1..=MAX_SKILL_LEVEL {
                    f.write_char(if unit <= *filled { '★' } else { '☆' })?;
                }
                Ok(())
            }
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Textual label for a skill level. Out-of-range levels read as
/// `Intermediate`.
#[must_use]
pub const fn level_label(level: u8) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Basic",
        4 => "Advanced",
        5 => "Expert",
        _ => "Intermediate",
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn contacts(pairs: [(ContactKind, &str); 3]) -> Vec<Contact> {
    pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| Contact {
            kind,
            value: value.to_string(),
        })
        .collect()
}

fn header(info: &PersonalInfo) -> Header {
    Header {
        name: or_placeholder(&info.name, "Your Name"),
        contact: contacts([
            (ContactKind::Email, &info.email),
            (ContactKind::Phone, &info.phone),
            (ContactKind::Location, &info.location),
        ]),
        links: contacts([
            (ContactKind::Linkedin, &info.linkedin),
            (ContactKind::Github, &info.github),
            (ContactKind::Website, &info.website),
        ]),
    }
}

fn experience_item(exp: &Experience) -> Item {
    let has_dates = !exp.start_date.is_empty() || !exp.end_date.is_empty() || exp.current;
    Item {
        title: or_placeholder(&exp.position, "Position"),
        subtitle: or_placeholder(&exp.company, "Company"),
        dates: has_dates.then(|| format_range(&exp.start_date, &exp.end_date, exp.current)),
        description: non_empty(&exp.description),
    }
}

fn education_item(edu: &Education) -> Item {
    let mut title = or_placeholder(&edu.degree, "Degree");
    if !edu.field.is_empty() {
        title.push_str(" in ");
        title.push_str(&edu.field);
    }
    let has_dates = !edu.start_date.is_empty() || !edu.end_date.is_empty();
    Item {
        title,
        subtitle: or_placeholder(&edu.school, "School"),
        dates: has_dates.then(|| format_range(&edu.start_date, &edu.end_date, false)),
        description: non_empty(&edu.description),
    }
}

fn skill_line(skill: &Skill, template: Template) -> SkillLine {
    SkillLine {
        name: skill.name.clone(),
        rating: Rating::for_level(skill.level, template),
    }
}

/// Lays out `doc` for `template`.
#[must_use]
pub fn layout(doc: &ResumeDocument, template: Template) -> Layout {
    let header = header(&doc.personal_info);

    if doc.has_no_sections() {
        return Layout {
            template,
            header,
            body: Body::Empty,
        };
    }

    let mut sections = Vec::with_capacity(3);
    if !doc.experience.is_empty() {
        sections.push(Section {
            kind: SectionKind::Experience,
            heading: SectionKind::Experience.heading(template),
            content: SectionContent::Entries(doc.experience.iter().map(experience_item).collect()),
        });
    }
    if !doc.education.is_empty() {
        sections.push(Section {
            kind: SectionKind::Education,
            heading: SectionKind::Education.heading(template),
            content: SectionContent::Entries(doc.education.iter().map(education_item).collect()),
        });
    }
    if !doc.skills.is_empty() {
        sections.push(Section {
            kind: SectionKind::Skills,
            heading: SectionKind::Skills.heading(template),
            content: SectionContent::Skills(
                doc.skills
                    .iter()
                    .map(|skill| skill_line(skill, template))
                    .collect(),
            ),
        });
    }

    Layout {
        template,
        header,
        body: Body::Sections(sections),
    }
}

/// Hooks for decorating the plain-text encoding, e.g. with terminal colours.
pub trait TextStyle {
    /// The person's name.
    fn name(&self, text: &str) -> String {
        text.to_string()
    }
    /// A section heading.
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }
    /// An entry title.
    fn title(&self, text: &str) -> String {
        text.to_string()
    }
    /// Secondary text such as dates and contact details.
    fn muted(&self, text: &str) -> String {
        text.to_string()
    }
    /// An accent, such as a company name or a skill rating.
    fn accent(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Undecorated text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl TextStyle for Plain {}

impl Layout {
    /// Writes the layout as text, decorated by `style`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_text<W: Write>(&self, out: &mut W, style: &dyn TextStyle) -> fmt::Result {
        let rule = match self.template {
            Template::Modern => '━',
            Template::Classic => '─',
        };

        writeln!(out, "{}", style.name(&self.header.name))?;
        for line in [&self.header.contact, &self.header.links] {
            if !line.is_empty() {
                let joined = line
                    .iter()
                    .map(|c| c.value.as_str())
                    .collect::<Vec<_>>()
                    .join(" · ");
                writeln!(out, "{}", style.muted(&joined))?;
            }
        }

        let sections = match &self.body {
            Body::Empty => {
                writeln!(out)?;
                writeln!(out, "{EMPTY_STATE_TITLE}")?;
                return writeln!(out, "{}", style.muted(EMPTY_STATE_HINT));
            }
            Body::Sections(sections) => sections,
        };

        for section in sections {
            let heading = match self.template {
                Template::Modern => section.heading.to_string(),
                Template::Classic => section.heading.to_uppercase(),
            };
            writeln!(out)?;
            writeln!(out, "{}", style.heading(&heading))?;
            let underline: String = std::iter::repeat_n(rule, heading.chars().count()).collect();
            writeln!(out, "{}", style.muted(&underline))?;

            match &section.content {
                SectionContent::Entries(items) => {
                    for (index, item) in items.iter().enumerate() {
                        if index > 0 {
                            writeln!(out)?;
                        }
                        write_item(out, item, style)?;
                    }
                }
                SectionContent::Skills(skills) => {
                    let width = skills
                        .iter()
                        .map(|s| s.name.chars().count())
                        .max()
                        .unwrap_or(0);
                    for skill in skills {
                        let padding = width - skill.name.chars().count();
                        writeln!(
                            out,
                            "{}{}  {}",
                            skill.name,
                            " ".repeat(padding),
                            style.accent(&skill.rating.to_string())
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_item<W: Write>(out: &mut W, item: &Item, style: &dyn TextStyle) -> fmt::Result {
    match &item.dates {
        Some(dates) => writeln!(
            out,
            "{}  {}",
            style.title(&item.title),
            style.muted(&format!("({dates})"))
        )?,
        None => writeln!(out, "{}", style.title(&item.title))?,
    }
    writeln!(out, "{}", style.accent(&item.subtitle))?;
    if let Some(description) = &item.description {
        for line in description.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, &Plain)
    }
}
