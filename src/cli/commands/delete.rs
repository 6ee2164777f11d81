//! `clubreg delete` command - remove a clubber from the registry

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Workspace;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// ID, personal number, or the numeric part of a student ID
    pub key: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let mut ws = Workspace::open(global)?;

    let member = ws
        .registry
        .find(&args.key)
        .ok_or_else(|| miette::miette!("Clubber with key {} does not exist", args.key))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Are you sure you want to delete:\n{}", member))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Nothing deleted.");
            return Ok(());
        }
    }

    let removed = ws
        .registry
        .remove(&args.key)
        .ok_or_else(|| miette::miette!("Clubber with key {} does not exist", args.key))?;
    ws.save()?;

    tracing::debug!(id = removed.id(), "clubber removed");
    if !global.quiet {
        println!("{} Clubber successfully deleted!", style("✓").green());
    }

    Ok(())
}
