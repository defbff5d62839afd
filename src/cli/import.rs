use std::{fs, path::PathBuf};

use anyhow::Context;
use resume::storage::gateway::import_json;
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Import {
    /// JSON file previously written by 'resume export json'
    file: PathBuf,
}

impl Import {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let contents = fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read '{}'", self.file.display()))?;

        // Parse before touching the session so a bad file changes nothing.
        let document = import_json(&contents)?;

        workspace.session().replace(document)?;
        println!(
            "{} {}",
            "Imported resume from".success(),
            self.file.display()
        );
        Ok(())
    }
}
