use std::path::{Path, PathBuf};

use anyhow::bail;
use chrono::{Local, NaiveDate};
use resume::storage::{
    HtmlFilePrinter,
    gateway::{export_file_name, export_json_to, export_pdf as write_page},
};
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Export {
    #[command(subcommand)]
    format: Format,
}

#[derive(Debug, clap::Subcommand)]
enum Format {
    /// Write the resume as a JSON file that can be imported later
    Json {
        /// Directory to write into
        ///
        /// Defaults to the configured `export_dir`, or the workspace root.
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Write a print-ready page for saving as PDF
    ///
    /// The page is styled for letter paper. Open it in a browser and print
    /// it, or configure `print_command` and pass `--print`.
    Pdf {
        /// File to write
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Hand the page to the configured print command
        #[arg(long)]
        print: bool,
    },
}

impl Export {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let today = Local::now().date_naive();
        match self.format {
            Format::Json { out } => {
                let path = export_json(workspace, out.as_deref(), today)?;
                println!("{} {}", "Exported resume to".success(), path.display());
            }
            Format::Pdf { out, print } => {
                let path = export_pdf(workspace, out, print, today)?;
                println!("{} {}", "Wrote print-ready page to".success(), path.display());
                if !print {
                    println!(
                        "{}",
                        "Open it in a browser and print it to save a PDF.".dim()
                    );
                }
            }
        }
        Ok(())
    }
}

fn export_json(
    workspace: &Workspace,
    out: Option<&Path>,
    date: NaiveDate,
) -> anyhow::Result<PathBuf> {
    let dir = match (out, workspace.config().export_dir()) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => workspace.resolve(dir),
        (None, None) => workspace.root().to_path_buf(),
    };
    let session = workspace.session();
    Ok(export_json_to(&dir, session.document(), date)?)
}

fn export_pdf(
    workspace: &Workspace,
    out: Option<PathBuf>,
    print: bool,
    date: NaiveDate,
) -> anyhow::Result<PathBuf> {
    let command = if print {
        let Some(command) = workspace.config().print_command() else {
            bail!(
                "No print command configured. Set one with 'resume config set print_command \
                 <COMMAND>'."
            );
        };
        Some(command.to_string())
    } else {
        None
    };

    let session = workspace.session();
    let path = out.unwrap_or_else(|| {
        workspace
            .root()
            .join(export_file_name(&session.document().personal_info.name, date))
            .with_extension("html")
    });

    let printer = HtmlFilePrinter::new(path).with_command(command);
    Ok(write_page(&session.preview(), &printer)?)
}

#[cfg(test)]
mod tests {
    use resume::{Command, domain::PersonalPatch};
    use tempfile::tempdir;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn named_workspace(root: &Path) -> Workspace {
        let workspace = Workspace::new(root.to_path_buf(), None);
        workspace
            .session()
            .apply(Command::UpdatePersonal(PersonalPatch::Name(
                "Ada Lovelace".to_string(),
            )))
            .unwrap();
        workspace
    }

    #[test]
    fn json_export_defaults_to_the_root() {
        let tmp = tempdir().unwrap();
        let workspace = named_workspace(tmp.path());

        let path = export_json(&workspace, None, date()).unwrap();

        assert_eq!(
            path,
            tmp.path().join("resume-ada-lovelace-2024-03-09.json")
        );
        assert!(path.exists());
    }

    #[test]
    fn json_export_uses_the_configured_directory() {
        let tmp = tempdir().unwrap();
        let mut config = resume::Config::default();
        config.set_export_dir(Some(PathBuf::from("exports")));
        config
            .save(&tmp.path().join(".resume/config.toml"))
            .unwrap();
        let workspace = named_workspace(tmp.path());

        let path = export_json(&workspace, None, date()).unwrap();

        assert_eq!(path.parent(), Some(tmp.path().join("exports").as_path()));
    }

    #[test]
    fn pdf_export_writes_html_next_to_the_json() {
        let tmp = tempdir().unwrap();
        let workspace = named_workspace(tmp.path());

        let path = export_pdf(&workspace, None, false, date()).unwrap();

        assert_eq!(
            path,
            tmp.path().join("resume-ada-lovelace-2024-03-09.html")
        );
        assert!(std::fs::read_to_string(path).unwrap().contains("Ada Lovelace"));
    }

    #[test]
    fn printing_requires_a_print_command() {
        let tmp = tempdir().unwrap();
        let workspace = named_workspace(tmp.path());

        assert!(export_pdf(&workspace, None, true, date()).is_err());
    }
}
