use dialoguer::Confirm;
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Clear {
    /// Don't ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

impl Clear {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let confirmed = self.yes
            || Confirm::new()
                .with_prompt("Are you sure you want to clear all data? This cannot be undone.")
                .default(false)
                .interact()?;

        if workspace.session().clear(|| confirmed)? {
            println!("{}", "All resume data cleared".success());
        } else {
            println!("Cancelled");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use resume::Command;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn clear_with_yes_removes_the_saved_resume() {
        let tmp = tempdir().unwrap();
        let workspace = Workspace::new(tmp.path().to_path_buf(), None);
        workspace
            .session()
            .apply(Command::AddSkill("Go".to_string()))
            .unwrap();
        let state = tmp.path().join(".resume/state/resumeData.json");
        assert!(state.exists());

        Clear { yes: true }.run(&workspace).unwrap();

        assert!(!state.exists());
        assert!(workspace.session().document().is_empty());
    }
}
