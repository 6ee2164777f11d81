//! Interactive field wizard
//!
//! Prompts for each declared field of the member under edit, submits the
//! session, and re-prompts only the flagged fields until the draft passes
//! or the user gives up.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::describe_failure;
use crate::core::entity::{Entity, Field};
use crate::core::rules::Validation;
use crate::core::session::EditSession;

/// Prompt-driven editor for one session
pub struct FieldWizard {
    theme: ColorfulTheme,
}

impl Default for FieldWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldWizard {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Run the wizard until the draft commits or the user cancels
    ///
    /// Returns the final validation; on cancel the session is rolled back
    /// and the failing validation is returned.
    pub fn run(&self, session: &mut EditSession<'_>) -> Result<Validation> {
        let kind = session.member().kind();
        println!();
        println!("{} {}", style("◆").cyan(), style(kind.title()).bold());
        println!("{}", style("─".repeat(50)).dim());

        let fields = session.member().record().fields();
        self.prompt_fields(session, fields)?;

        loop {
            let validation = session.submit().map_err(|e| miette::miette!("{}", e))?;
            if validation.is_ok() {
                return Ok(validation);
            }

            for field in validation.failed() {
                println!("{} {}", style("*").red().bold(), describe_failure(*field));
            }

            let retry = Confirm::with_theme(&self.theme)
                .with_prompt("Correct and try again?")
                .default(true)
                .interact()
                .into_diagnostic()?;
            if !retry {
                session.cancel().map_err(|e| miette::miette!("{}", e))?;
                return Ok(validation);
            }

            self.prompt_fields(session, validation.failed())?;
        }
    }

    fn prompt_fields(&self, session: &mut EditSession<'_>, fields: &[Field]) -> Result<()> {
        for field in fields {
            let current = session.get(*field).unwrap_or_default().to_string();
            let value: String = Input::with_theme(&self.theme)
                .with_prompt(format!("{} ({})", field.label(), style(field.example()).dim()))
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            session
                .set(*field, value.trim())
                .map_err(|e| miette::miette!("{}", e))?;
        }
        Ok(())
    }
}
