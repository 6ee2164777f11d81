//! `clubreg show` command - look up a clubber by key

use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Workspace;
use crate::cli::helpers::print_member;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// ID, personal number, or the numeric part of a student ID
    pub key: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global)?;

    let member = ws
        .registry
        .find(&args.key)
        .ok_or_else(|| miette::miette!("Clubber with key {} does not exist", args.key))?;

    match ws.format(global) {
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(member).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(member).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", member.id());
        }
        _ => print_member(member),
    }

    Ok(())
}
