use std::process;

use clap::Parser;
use resume::{Report, domain::Status as Verdict};
use tracing::instrument;

use super::{
    Workspace,
    terminal::{Colorize, is_narrow},
};

/// Exit code used when the resume still has issues.
const INCOMPLETE_EXIT_CODE: i32 = 2;

#[derive(Debug, Parser, Default)]
#[command(about = "Show completed sections and outstanding issues")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    #[instrument(level = "debug", skip(self, workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let report = workspace.session().report();

        match self.output {
            OutputFormat::Json => Self::output_json(&report)?,
            OutputFormat::Table => {
                if self.quiet {
                    Self::output_quiet(&report);
                } else {
                    Self::output_table(&report);
                }
            }
        }

        // Exit with a non-zero code when the resume needs attention.
        let exit_code = exit_code(&report);
        if exit_code != 0 {
            process::exit(exit_code);
        }

        Ok(())
    }

    fn output_json(report: &Report) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "status": report.status(),
            "completed": report.completed,
            "issues": report.issues,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_quiet(report: &Report) {
        let status = match report.status() {
            Verdict::Complete => "complete",
            Verdict::Incomplete => "incomplete",
        };
        println!(
            "status={status} completed={} issues={}",
            report.completed.len(),
            report.issues.len()
        );
    }

    fn output_table(report: &Report) {
        let narrow = is_narrow();

        println!("Resume Status");
        println!("{}", "─────────────".dim());

        for section in &report.completed {
            println!("{} {section}", "✓".success());
        }
        for issue in &report.issues {
            println!("{} {issue}", "⚠".warning());
        }

        println!();

        if report.is_complete() {
            println!("Your resume looks complete ✅");
        } else if narrow {
            println!("Issues: {}", report.issues.len().to_string().warning());
        } else {
            println!(
                "Issues: {} ⚠️  {}",
                report.issues.len().to_string().warning(),
                "Fill in the missing sections, then run 'resume show' to preview.".dim()
            );
        }
    }
}

fn exit_code(report: &Report) -> i32 {
    match report.status() {
        Verdict::Complete => 0,
        Verdict::Incomplete => INCOMPLETE_EXIT_CODE,
    }
}
