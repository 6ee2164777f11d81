//! `clubreg edit` command - change an existing clubber's fields

use console::style;
use miette::Result;

use crate::cli::commands::utils::{FieldArgs, Workspace};
use crate::cli::helpers::validation_report;
use crate::cli::wizard::FieldWizard;
use crate::cli::GlobalOpts;
use crate::core::session::EditSession;

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// ID, personal number, or the numeric part of a student ID
    pub key: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Interactive mode (prompt for fields, pre-filled with current values)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let mut ws = Workspace::open(global)?;

    let changes = args.fields.values();
    if changes.is_empty() && !args.interactive {
        return Err(miette::miette!(
            help = "Pass field flags such as --name or --tel, or use -i.",
            "Nothing to change"
        ));
    }

    let member = ws
        .registry
        .find_mut(&args.key)
        .ok_or_else(|| miette::miette!("Clubber with key {} does not exist", args.key))?;

    let id = {
        let mut session = EditSession::open(member);
        for (field, value) in changes {
            session
                .set(field, value)
                .map_err(|e| miette::miette!("{}", e))?;
        }

        let validation = if args.interactive {
            FieldWizard::new().run(&mut session)?
        } else {
            session.submit().map_err(|e| miette::miette!("{}", e))?
        };

        if !validation.is_ok() {
            session.cancel().ok();
            if args.interactive {
                println!("Cancelled, nothing saved.");
                return Ok(());
            }
            return Err(validation_report(&validation));
        }

        session.member().id().to_string()
    };

    ws.save()?;

    if !global.quiet {
        println!("{} Updated {}", style("✓").green(), style(&id).cyan());
    }

    Ok(())
}
