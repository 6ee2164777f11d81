//! `clubreg new` command - register a new clubber

use console::style;
use miette::Result;

use crate::cli::commands::utils::{FieldArgs, Workspace};
use crate::cli::helpers::validation_report;
use crate::cli::wizard::FieldWizard;
use crate::cli::{GlobalOpts, KindArg};
use crate::core::entity::EntityKind;
use crate::core::member::Member;
use crate::core::registry::RegistryError;
use crate::core::session::EditSession;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Clubber kind
    #[arg(long, short = 'k', value_enum, default_value = "person")]
    pub kind: KindArg,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let mut ws = Workspace::open(global)?;
    let kind = EntityKind::from(args.kind);
    let mut member = Member::new(kind);

    {
        let mut session = EditSession::open(&mut member);
        for (field, value) in args.fields.values() {
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
            if args.interactive {
                println!("Cancelled, nothing saved.");
                return Ok(());
            }
            return Err(validation_report(&validation));
        }
    }

    let id = member.id().to_string();
    match ws.registry.add(member) {
        Ok(()) => {}
        Err(RegistryError::DuplicateKey { key }) => {
            return Err(miette::miette!(
                help = "Use `clubreg edit` to change the existing clubber.",
                "ID already exists: {}",
                key
            ));
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    }
    ws.save()?;

    if !global.quiet {
        println!(
            "{} Created {} {}",
            style("✓").green(),
            kind,
            style(&id).cyan()
        );
        println!("   {}", style(ws.store.path().display()).dim());
    }

    Ok(())
}
