use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::{
    identifier::{self, CollisionChecker, IdentifierKind, ResolveContext},
    prompt::TerminalPrompter,
    session,
};

/// Resolve the identifier of `kind` for the project at `project_dir` and
/// print it to stdout.
pub fn run(kind: IdentifierKind, project_dir: &Path) -> Result<()> {
    let client = appid_client::Client::new().context("Could not initialise the store client")?;
    let mut prompter = TerminalPrompter;
    let mut ctx = ResolveContext {
        project_dir,
        prompter: &mut prompter,
        collisions: CollisionChecker::new(&client),
        username: session::get_current_username(),
    };

    let value = identifier::get_or_prompt(kind, &mut ctx)?;
    info!("Using {} `{}`", kind.display_name(), value);
    println!("{value}");
    Ok(())
}
