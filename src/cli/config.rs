use std::path::PathBuf;

use anyhow::{Context, bail};
use resume::{Config, Template};
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

/// Keys accepted by 'config get' and 'config set'.
const KEYS: &[&str] = &["template", "pretty_state", "print_command", "export_dir"];

#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Print one configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    ///
    /// An empty value clears `print_command` and `export_dir`.
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Command {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let config_path = workspace.config_path();

        match self.command {
            ConfigCommand::Show => {
                let config = workspace.config();
                println!("Configuration:");
                for key in KEYS {
                    let value = get(config, key)?;
                    if value.is_empty() {
                        println!("  {key}: {}", "(unset)".dim());
                    } else {
                        println!("  {key}: {value}");
                    }
                }
            }
            ConfigCommand::Get { key } => {
                println!("{}", get(workspace.config(), &key)?);
            }
            ConfigCommand::Set { key, value } => {
                let mut config = workspace.config().clone();
                set(&mut config, &key, &value)?;
                config
                    .save(&config_path)
                    .context("failed to save configuration")?;
                println!("{}", format!("{key} = {}", get(&config, &key)?).success());
            }
        }

        Ok(())
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown configuration key: '{key}'\nSupported keys: {}",
        KEYS.join(", ")
    )
}

fn get(config: &Config, key: &str) -> anyhow::Result<String> {
    Ok(match key {
        "template" => config.template.to_string(),
        "pretty_state" => config.pretty_state.to_string(),
        "print_command" => config.print_command().unwrap_or_default().to_string(),
        "export_dir" => config
            .export_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        _ => return Err(unknown_key(key)),
    })
}

fn set(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "template" => config.template = value.parse::<Template>()?,
        "pretty_state" => {
            config.pretty_state = match value.parse::<bool>() {
                Ok(flag) => flag,
                Err(_) => bail!("Value must be 'true' or 'false'"),
            };
        }
        "print_command" => config.set_print_command(Some(value.to_string())),
        "export_dir" => config.set_export_dir(Some(PathBuf::from(value))),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use test_case::test_case;

    use super::*;

    #[test_case("template", "classic")]
    #[test_case("pretty_state", "true")]
    #[test_case("print_command", "xdg-open")]
    #[test_case("export_dir", "exports")]
    fn set_then_get(key: &str, value: &str) {
        let mut config = Config::default();
        set(&mut config, key, value).unwrap();
        assert_eq!(get(&config, key).unwrap(), value);
    }

    #[test_case("template", "fancy")]
    #[test_case("pretty_state", "maybe")]
    #[test_case("digits", "3")]
    fn invalid_settings_are_rejected(key: &str, value: &str) {
        let mut config = Config::default();
        assert!(set(&mut config, key, value).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_value_clears_the_print_command() {
        let mut config = Config::default();
        set(&mut config, "print_command", "open").unwrap();
        set(&mut config, "print_command", "").unwrap();
        assert_eq!(config.print_command(), None);
    }

    #[test]
    fn set_persists_to_the_workspace() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), None);

        Command {
            command: ConfigCommand::Set {
                key: "pretty_state".to_string(),
                value: "true".to_string(),
            },
        }
        .run(&workspace)
        .unwrap();

        let reloaded = Workspace::new(tmp.path().to_path_buf(), None);
        assert!(reloaded.config().pretty_state);
    }
}
