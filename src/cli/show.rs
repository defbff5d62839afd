use clap::Parser;
use resume::render::html;
use tracing::instrument;

use super::{Workspace, terminal::Terminal};

#[derive(Debug, Parser, Default)]
#[command(about = "Preview the resume in the active template")]
pub struct Show {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Styled text for the terminal
    #[default]
    Text,
    /// The print-ready HTML page
    Html,
    /// The document as JSON
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let session = workspace.session();

        match self.output {
            OutputFormat::Text => {
                let layout = session.preview();
                let mut text = String::new();
                layout.write_text(&mut text, &Terminal::new(layout.template))?;
                print!("{text}");
            }
            OutputFormat::Html => print!("{}", html::page(&session.preview())),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(session.document())?);
            }
        }
        Ok(())
    }
}
