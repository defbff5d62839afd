//! Template renderers.
//!
//! Rendering is pure: a document and a [`Template`] go in, a [`Layout`]
//! comes out, and the layout can be written as text or as a print-ready
//! HTML page. The two templates select the same data and differ only in
//! headings, skill ratings and styling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Date formatting for entries.
pub mod date;
/// HTML page encoding.
pub mod html;
/// Data selection shared by the templates.
pub mod layout;

pub use layout::{Layout, Plain, TextStyle, layout};

use crate::domain::ResumeDocument;

/// Visual template of the resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Sans-serif with coloured accents and star ratings.
    #[default]
    Modern,
    /// Serif, traditional layout with textual skill levels.
    Classic,
}

impl Template {
    /// All templates, in picker order.
    pub const ALL: [Self; 2] = [Self::Modern, Self::Classic];

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
        }
    }

    /// One-line description shown by the template picker.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Modern => "Clean design with colored accents and modern typography",
            Self::Classic => "Traditional layout with serif fonts and professional styling",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown template name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}' (expected 'modern' or 'classic')")]
pub struct UnknownTemplate(String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "classic" => Ok(Self::Classic),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}

/// Renders `doc` with `template` as plain text.
#[must_use]
pub fn text(doc: &ResumeDocument, template: Template) -> String {
    layout(doc, template).to_string()
}

/// Renders `doc` with `template` as a print-ready HTML page.
#[must_use]
pub fn html_page(doc: &ResumeDocument, template: Template) -> String {
    html::page(&layout(doc, template))
}
