use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::{info, warn};
use serde_json::json;

use super::{suggest, CollisionChecker, IdentifierKind};
use crate::{
    errors::{FormatError, SilentAbort},
    project::{self, ModifyOutcome},
    prompt::{PromptSpec, Prompter},
};

/// Collaborators the resolution workflow runs against. Production wiring
/// passes the dialoguer prompter and the HTTP-backed checker; tests pass
/// scripted fakes.
pub struct ResolveContext<'a> {
    pub project_dir: &'a Path,
    pub prompter: &'a mut dyn Prompter,
    pub collisions: CollisionChecker<'a>,
    pub username: Option<String>,
}

/// Resolve the identifier of `kind` for the project: return the configured
/// value when it is already set and well-formed, otherwise prompt for one,
/// check it against the store and persist it.
pub fn get_or_prompt(kind: IdentifierKind, ctx: &mut ResolveContext<'_>) -> Result<String> {
    let config = project::get_config(ctx.project_dir)?;
    if let Some(existing) = kind.current_value(&config) {
        if kind.is_valid(existing) {
            return Ok(existing.to_owned());
        }
        return Err(FormatError {
            field: kind.field_name(),
            value: existing.to_owned(),
            requirement: kind.requirement(),
        }
        .into());
    }

    let suggestion = suggest::suggest(kind, &config, ctx.username.as_deref());
    info!("{}", kind.display_name().bold());
    info!("Learn more: {}", kind.docs_url());

    let message = format!("What would you like your {} to be?", kind.display_name());
    let invalid_message = format!("The {} must {}.", kind.display_name(), kind.requirement());
    let non_interactive_help = non_interactive_help(kind);

    // Explicit retry loop: declining a collision warning re-enters at the
    // prompt step, so the only exits are a confirmed or collision-free value
    // and the fatal errors below.
    loop {
        let value = ctx.prompter.ask(PromptSpec {
            message: &message,
            initial: suggestion.clone(),
            validate: kind.validator(),
            invalid_message: &invalid_message,
            non_interactive_help: non_interactive_help.clone(),
        })?;

        if let Some(warning) = ctx.collisions.check(kind, &value) {
            warn!("{warning}");
            if !ctx.prompter.confirm("Continue anyway?", true)? {
                continue;
            }
        }

        persist(ctx.project_dir, kind, &value)?;
        return Ok(value);
    }
}

fn non_interactive_help(kind: IdentifierKind) -> String {
    format!(
        "Input is required, but the session is not interactive. Set `{}` in {} and run the \
         command again. Learn more: {}",
        kind.field_name(),
        project::CONFIG_FILE,
        kind.docs_url()
    )
}

/// Apply the accepted value to the project config. Both failure shapes print
/// a full explanation, including the exact JSON to add by hand, before
/// aborting silently so the top level does not add a generic banner.
fn persist(project_dir: &Path, kind: IdentifierKind, value: &str) -> Result<()> {
    match project::modify_config(project_dir, &kind.config_field_path(), value)? {
        ModifyOutcome::Success => Ok(()),
        ModifyOutcome::Warn { message } => {
            warn!("{message}");
            print_manual_edit(kind, value);
            Err(SilentAbort.into())
        }
        ModifyOutcome::NoConfig => {
            warn!("No {} found in the project directory.", project::CONFIG_FILE);
            print_manual_edit(kind, value);
            Err(SilentAbort.into())
        }
    }
}

fn print_manual_edit(kind: IdentifierKind, value: &str) {
    info!(
        "Please add the following to `{}` and run the command again:",
        project::CONFIG_FILE
    );
    let [section, field] = kind.config_field_path();
    let fragment = json!({ section: { field: value } });
    println!(
        "{}",
        serde_json::to_string_pretty(&fragment).expect("Fragment serialises to JSON")
    );
}
