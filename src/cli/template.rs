//! Show or select the default template.

use anyhow::Context;
use resume::Template;
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

/// Show the available templates or select the default one
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Template to make the default; omit to list the templates
    #[arg(id = "name", value_name = "TEMPLATE")]
    pub(super) template: Option<Template>,
}

impl Command {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self.template {
            None => {
                let active = workspace.template();
                for template in Template::ALL {
                    let marker = if template == active { "*" } else { " " };
                    println!(
                        "{marker} {:<8} {}",
                        template.name().strong(),
                        template.description().dim()
                    );
                }
            }
            Some(template) => {
                let mut config = workspace.config().clone();
                config.template = template;
                config
                    .save(&workspace.config_path())
                    .context("failed to save configuration")?;
                println!("{}", format!("Template set to {template}").success());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn selecting_a_template_persists_it() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), None);

        Command {
            template: Some(Template::Classic),
        }
        .run(&workspace)
        .unwrap();

        let reloaded = Workspace::new(tmp.path().to_path_buf(), None);
        assert_eq!(reloaded.template(), Template::Classic);
    }

    #[test]
    fn listing_leaves_the_configuration_alone() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), None);

        Command { template: None }.run(&workspace).unwrap();

        assert!(!workspace.config_path().exists());
    }

    #[test]
    fn run_override_is_not_persisted_when_listing() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), Some(Template::Classic));

        Command { template: None }.run(&workspace).unwrap();

        assert!(!workspace.config_path().exists());
        let reloaded = Workspace::new(tmp.path().to_path_buf(), None);
        assert_eq!(reloaded.template(), Template::Modern);
    }
}
