//! `clubreg check` command - audit the snapshot file

use std::fs;
use std::io;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::describe_failure;
use crate::cli::GlobalOpts;
use crate::core::entity::Entity;
use crate::core::store::SnapshotStore;
use crate::core::Config;
use crate::yaml::SnapshotSyntaxError;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Only print the summary line
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = global.store.clone().unwrap_or_else(|| config.store_path());

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!(
                "{} No snapshot at {}, nothing to check.",
                style("ℹ").blue(),
                style(path.display()).cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    let registry = match SnapshotStore::parse(&content) {
        Ok(registry) => registry,
        Err(e) => {
            let filename = path.display().to_string();
            return Err(miette::Report::new(SnapshotSyntaxError::from_store_error(
                &e, &content, &filename,
            )));
        }
    };

    let mut problems = 0usize;
    let members = registry.list();

    for (i, member) in members.iter().enumerate() {
        let label = if member.id().is_empty() {
            format!("#{}", i + 1)
        } else {
            member.id().to_string()
        };

        for field in member.record().invalid_fields() {
            problems += 1;
            if !args.summary {
                println!(
                    "{} {} {}: {}",
                    style("✗").red(),
                    member.kind(),
                    style(&label).cyan(),
                    describe_failure(field)
                );
            }
        }

        if !member.id().is_empty() && members[..i].iter().any(|m| m.matches(member.id())) {
            problems += 1;
            if !args.summary {
                println!(
                    "{} {} {}: ID already exists earlier in the file",
                    style("✗").red(),
                    member.kind(),
                    style(&label).cyan()
                );
            }
        }
    }

    if problems > 0 {
        return Err(miette::miette!(
            help = "Fix the listed clubbers with `clubreg edit`.",
            "{} problem(s) found in {}",
            problems,
            path.display()
        ));
    }

    if !global.quiet {
        println!(
            "{} {} clubber(s) OK",
            style("✓").green(),
            style(registry.len()).cyan()
        );
    }

    Ok(())
}
