use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::Template;

/// Error reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    /// The file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be encoded.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

/// Settings for a resume workspace.
///
/// Stored as TOML next to the saved resume. A missing file means defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Template used for previews and PDF export unless overridden.
    pub template: Template,

    /// Whether the saved resume is pretty-printed.
    ///
    /// Exports are always pretty-printed; this only affects the working copy.
    pub pretty_state: bool,

    /// Host command used to print the rendered resume.
    ///
    /// It is invoked with the path of the print-ready HTML file as its only
    /// argument, e.g. `xdg-open` or `open`. When unset, PDF export only writes
    /// the file.
    print_command: Option<String>,

    /// Default directory for JSON exports. Relative paths are resolved
    /// against the workspace root.
    export_dir: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration, falling back to defaults if the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path, creating
    /// parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Returns the configured print command, if any.
    #[must_use]
    pub fn print_command(&self) -> Option<&str> {
        self.print_command.as_deref()
    }

    /// Sets or clears the print command. Blank commands clear it.
    pub fn set_print_command(&mut self, command: Option<String>) {
        self.print_command = command.filter(|c| !c.trim().is_empty());
    }

    /// Returns the configured export directory, if any.
    #[must_use]
    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    /// Sets or clears the export directory.
    pub fn set_export_dir(&mut self, dir: Option<PathBuf>) {
        self.export_dir = dir.filter(|d| !d.as_os_str().is_empty());
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        template: Template,

        #[serde(default)]
        pretty_state: bool,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        print_command: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        export_dir: Option<PathBuf>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                template,
                pretty_state,
                print_command,
                export_dir,
            } => Self {
                template,
                pretty_state,
                print_command,
                export_dir,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            template: config.template,
            pretty_state: config.pretty_state,
            print_command: config.print_command,
            export_dir: config.export_dir,
        }
    }
}
