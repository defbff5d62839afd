use resume::{
    Command,
    domain::{PersonalInfo, PersonalPatch, edit::personal_field_advice},
};
use tracing::instrument;

use super::{Workspace, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Personal {
    #[command(subcommand)]
    action: PersonalAction,
}

#[derive(Debug, clap::Subcommand)]
enum PersonalAction {
    /// Set one personal information field
    Set {
        /// Field name: name, email, phone, location, linkedin, github or
        /// website
        field: String,
        /// New value
        value: String,
    },

    /// Show personal information
    Show,
}

impl Personal {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self.action {
            PersonalAction::Set { field, value } => Self::set(workspace, &field, value),
            PersonalAction::Show => {
                Self::show(&workspace.session().document().personal_info);
                Ok(())
            }
        }
    }

    fn set(workspace: &Workspace, field: &str, value: String) -> anyhow::Result<()> {
        let patch = PersonalPatch::parse(field, value)?;

        // Advice never blocks the edit.
        if let Some(advice) = personal_field_advice(&patch) {
            let message = advice.to_string();
            if advice.is_warning() {
                eprintln!("{}", message.warning());
            } else {
                eprintln!("{}", message.dim());
            }
        }

        let mut session = workspace.session();
        session.apply(Command::UpdatePersonal(patch))?;
        println!("{}", "Personal information updated".success());
        Ok(())
    }

    fn show(info: &PersonalInfo) {
        let rows = [
            ("Name", &info.name),
            ("Email", &info.email),
            ("Phone", &info.phone),
            ("Location", &info.location),
            ("LinkedIn", &info.linkedin),
            ("GitHub", &info.github),
            ("Website", &info.website),
        ];
        for (label, value) in rows {
            if value.is_empty() {
                println!("{label:<10} {}", "–".dim());
            } else {
                println!("{label:<10} {value}");
            }
        }
    }
}
