#![deny(clippy::all)]

// Module declarations
mod args;
mod commands;
mod errors;
mod identifier;
mod project;
mod prompt;
mod session;
mod utils;

use std::{io, process};

use anyhow::Result;
use log::error;
use structopt::{clap::Shell as ClapShell, StructOpt};

use crate::{
    args::{Args, Command, Shell},
    errors::SilentAbort,
    identifier::IdentifierKind,
    utils::init_env_logger,
};

fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Ios => commands::resolve::run(IdentifierKind::IosBundleId, &args.project_dir),
        Command::Android => {
            commands::resolve::run(IdentifierKind::AndroidPackage, &args.project_dir)
        }
        Command::Completion { shell } => {
            let mut app = Args::clap();
            let clap_shell = match shell {
                Shell::Zsh => ClapShell::Zsh,
                Shell::Bash => ClapShell::Bash,
            };
            app.gen_completions_to("appid", clap_shell, &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let args = Args::from_args();
    init_env_logger(args.verbose);

    if let Err(error) = run(args) {
        // A silent abort was already explained in full where it happened.
        if !error.is::<SilentAbort>() {
            error!("An error occurred:");
            for cause in error.chain() {
                error!(" |- {cause}");
            }
        }

        process::exit(1);
    }
}
