//! Shared utilities for CLI commands

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Field;
use crate::core::store::{SnapshotStore, StoreStatus};
use crate::core::{Config, Registry};

/// Loaded registry plus where it came from
pub struct Workspace {
    pub config: Config,
    pub store: SnapshotStore,
    pub registry: Registry,
}

impl Workspace {
    /// Load config and the snapshot, reporting absent or unreadable stores
    pub fn open(global: &GlobalOpts) -> Result<Self> {
        let config = Config::load();
        let path = global.store.clone().unwrap_or_else(|| config.store_path());
        let store = SnapshotStore::new(path);
        let outcome = store.load();

        match &outcome.status {
            StoreStatus::Loaded(_) => {}
            StoreStatus::Absent => {
                if !global.quiet {
                    eprintln!(
                        "{} {} will be created on first save.",
                        style("ℹ").blue(),
                        style(store.path().display()).cyan()
                    );
                }
            }
            StoreStatus::Unreadable(reason) => {
                if config.strict_load() {
                    return Err(miette::miette!(
                        help = "Run `clubreg check` for details, or disable strict_load to start empty.",
                        "Snapshot {} is unreadable: {}",
                        store.path().display(),
                        reason
                    ));
                }
                eprintln!(
                    "{} Snapshot {} is unreadable, starting with an empty registry: {}",
                    style("!").yellow().bold(),
                    style(store.path().display()).cyan(),
                    reason
                );
            }
        }

        Ok(Self {
            config,
            store,
            registry: outcome.registry,
        })
    }

    /// Persist the registry
    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.registry)
            .map_err(|e| miette::miette!("{}", e))
    }

    /// Resolve `auto` output against the configured default
    pub fn format(&self, global: &GlobalOpts) -> OutputFormat {
        if global.format != OutputFormat::Auto {
            return global.format;
        }
        self.config
            .default_format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
            .unwrap_or(OutputFormat::Auto)
    }
}

/// Field values given as flags
#[derive(clap::Args, Debug, Default)]
pub struct FieldArgs {
    /// ID, e.g. 1-2423535|1
    #[arg(long)]
    pub id: Option<String>,

    /// Name, e.g. Mark
    #[arg(long)]
    pub name: Option<String>,

    /// Surname, e.g. O'Mally
    #[arg(long)]
    pub surname: Option<String>,

    /// Phone, e.g. +(972)50-6663210
    #[arg(long)]
    pub tel: Option<String>,

    /// Personal number (soldiers), e.g. O/5044109
    #[arg(long)]
    pub personal_number: Option<String>,

    /// Student ID (students), e.g. SCE12345
    #[arg(long)]
    pub student_id: Option<String>,
}

impl FieldArgs {
    /// Every field given on the command line, in declaration order
    pub fn values(&self) -> Vec<(Field, &str)> {
        [
            (Field::Id, &self.id),
            (Field::Name, &self.name),
            (Field::Surname, &self.surname),
            (Field::Tel, &self.tel),
            (Field::PersonalNumber, &self.personal_number),
            (Field::StudentId, &self.student_id),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_args_values_skips_unset() {
        let args = FieldArgs {
            name: Some("Mark".to_string()),
            student_id: Some("SCE12345".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.values(),
            vec![(Field::Name, "Mark"), (Field::StudentId, "SCE12345")]
        );
    }
}
