use std::path::{Path, PathBuf};

mod clear;
mod complete;
mod config;
mod entries;
mod export;
mod import;
mod personal;
mod show;
mod status;
mod template;
mod terminal;

use clap::ArgAction;
use clear::Clear;
use entries::{EducationCommand, ExperienceCommand, SkillCommand};
use export::Export;
use import::Import;
use personal::Personal;
use resume::{Config, FileStore, Session, SessionOptions, Template};
use show::Show;
use status::Status;
use tracing::instrument;

/// Directory holding the saved resume and the configuration.
const WORKSPACE_DIR: &str = ".resume";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory the resume workspace lives in
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Template to use for this run instead of the configured one
    #[arg(long, global = true, value_name = "modern|classic")]
    template: Option<Template>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let workspace = Workspace::new(self.root, self.template);
        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(&workspace)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show what is complete and what still needs attention (default)
    Status(Status),

    /// Preview the resume in the terminal
    #[command(alias = "preview")]
    Show(Show),

    /// Show the available templates or select the default one
    Template(template::Command),

    /// Edit personal information
    Personal(Personal),

    /// Edit education entries
    Education(EducationCommand),

    /// Edit work experience entries
    Experience(ExperienceCommand),

    /// Edit skills
    Skill(SkillCommand),

    /// Export the resume as JSON or as a print-ready page
    Export(Export),

    /// Replace the resume with a previously exported JSON file
    Import(Import),

    /// Save the resume now
    ///
    /// Every edit is saved as it is made; this rewrites the saved copy, e.g.
    /// after changing `pretty_state`.
    Save,

    /// Delete all resume data
    Clear(Clear),

    /// Show or modify configuration settings
    Config(config::Command),

    /// Generate shell completions
    Completions(complete::Command),
}

impl Command {
    fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(workspace)?,
            Self::Show(command) => command.run(workspace)?,
            Self::Template(command) => command.run(workspace)?,
            Self::Personal(command) => command.run(workspace)?,
            Self::Education(command) => command.run(workspace)?,
            Self::Experience(command) => command.run(workspace)?,
            Self::Skill(command) => command.run(workspace)?,
            Self::Export(command) => command.run(workspace)?,
            Self::Import(command) => command.run(workspace)?,
            Self::Save => save(workspace)?,
            Self::Clear(command) => command.run(workspace)?,
            Self::Config(command) => command.run(workspace)?,
            Self::Completions(command) => command.run(),
        }
        Ok(())
    }
}

#[instrument(skip(workspace))]
fn save(workspace: &Workspace) -> anyhow::Result<()> {
    use terminal::Colorize;

    workspace.session().save()?;
    println!("{}", "Resume saved".success());
    Ok(())
}

/// A resume workspace: the root directory, its configuration and any
/// per-run overrides.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
    template: Option<Template>,
}

impl Workspace {
    pub fn new(root: PathBuf, template: Option<Template>) -> Self {
        let config = Config::load_or_default(&root.join(WORKSPACE_DIR).join("config.toml"));
        Self {
            root,
            config,
            template,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("config.toml")
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The template for this run: the override if given, else the
    /// configured one.
    pub fn template(&self) -> Template {
        self.template.unwrap_or(self.config.template)
    }

    /// Opens the session over the saved state.
    pub fn session(&self) -> Session<FileStore> {
        let mut options = SessionOptions::from(&self.config);
        options.template = self.template();
        Session::open(
            FileStore::new(self.root.join(WORKSPACE_DIR).join("state")),
            options,
        )
    }

    /// Resolves `path` against the workspace root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn status_is_the_default_command() {
        let cli = Cli::try_parse_from(["resume"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn template_override_is_global() {
        let cli = Cli::try_parse_from(["resume", "show", "--template", "classic"]).unwrap();
        assert_eq!(cli.template, Some(Template::Classic));

        assert!(Cli::try_parse_from(["resume", "--template", "fancy"]).is_err());
    }

    #[test]
    fn template_override_does_not_select_a_default() {
        let cli = Cli::try_parse_from(["resume", "--template", "classic", "template"]).unwrap();
        assert_eq!(cli.template, Some(Template::Classic));
        let Some(Command::Template(command)) = cli.command else {
            panic!("expected the template command");
        };
        assert_eq!(command.template, None);

        let cli =
            Cli::try_parse_from(["resume", "--template", "classic", "template", "modern"]).unwrap();
        assert_eq!(cli.template, Some(Template::Classic));
        let Some(Command::Template(command)) = cli.command else {
            panic!("expected the template command");
        };
        assert_eq!(command.template, Some(Template::Modern));
    }

    #[test]
    fn preview_is_an_alias_for_show() {
        let cli = Cli::try_parse_from(["resume", "preview"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show(_))));
    }

    #[test]
    fn workspace_reads_the_configured_template() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();

        let mut config = Config::default();
        config.template = Template::Classic;
        config
            .save(&root.join(".resume").join("config.toml"))
            .unwrap();

        assert_eq!(Workspace::new(root.clone(), None).template(), Template::Classic);
        assert_eq!(
            Workspace::new(root, Some(Template::Modern)).template(),
            Template::Modern
        );
    }

    #[test]
    fn save_writes_the_state_file() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), None);

        save(&workspace).unwrap();

        assert!(
            tmp.path()
                .join(".resume/state/resumeData.json")
                .exists()
        );
    }
}
