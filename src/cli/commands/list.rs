//! `clubreg list` command - show every clubber in registry order

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Workspace;
use crate::cli::helpers::{escape_csv, secondary_key, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::EntityKind;
use crate::core::member::Member;

/// Kind filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    Person,
    Soldier,
    Student,
    /// All kinds
    All,
}

impl KindFilter {
    fn accepts(&self, kind: EntityKind) -> bool {
        match self {
            KindFilter::Person => kind == EntityKind::Person,
            KindFilter::Soldier => kind == EntityKind::Soldier,
            KindFilter::Student => kind == EntityKind::Student,
            KindFilter::All => true,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by kind
    #[arg(long, short = 'k', default_value = "all")]
    pub kind: KindFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let ws = Workspace::open(global)?;

    let mut members: Vec<&Member> = ws
        .registry
        .iter()
        .filter(|m| args.kind.accepts(m.kind()))
        .collect();

    if let Some(limit) = args.limit {
        members.truncate(limit);
    }

    if args.count {
        println!("{}", members.len());
        return Ok(());
    }

    let format = match ws.format(global) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&members).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&members).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("kind,id,name,surname,tel,key");
            for m in &members {
                let p = m.record().person();
                println!(
                    "{},{},{},{},{},{}",
                    m.kind(),
                    escape_csv(&p.id),
                    escape_csv(&p.name),
                    escape_csv(&p.surname),
                    escape_csv(&p.tel),
                    escape_csv(secondary_key(m))
                );
            }
        }
        OutputFormat::Tsv => {
            if members.is_empty() {
                println!("No clubbers found.");
                return Ok(());
            }

            println!(
                "{:<9} {:<13} {:<12} {:<18} {:<18} {}",
                style("KIND").bold(),
                style("ID").bold(),
                style("NAME").bold(),
                style("SURNAME").bold(),
                style("TEL").bold(),
                style("KEY").bold()
            );
            println!("{}", "-".repeat(84));

            for m in &members {
                let p = m.record().person();
                println!(
                    "{:<9} {:<13} {:<12} {:<18} {:<18} {}",
                    m.kind(),
                    style(&p.id).cyan(),
                    truncate_str(&p.name, 12),
                    truncate_str(&p.surname, 18),
                    p.tel,
                    secondary_key(m)
                );
            }

            println!();
            println!("Number of Clubbers: {}", style(members.len()).cyan());
        }
        OutputFormat::Id => {
            for m in &members {
                println!("{}", m.id());
            }
        }
        OutputFormat::Md => {
            println!("| Kind | ID | Name | Surname | Tel | Key |");
            println!("|---|---|---|---|---|---|");
            for m in &members {
                let p = m.record().person();
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    m.kind(),
                    p.id.replace('|', "\\|"),
                    p.name,
                    p.surname,
                    p.tel,
                    secondary_key(m)
                );
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
