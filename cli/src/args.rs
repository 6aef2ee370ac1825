use anyhow::{anyhow, Error, Result};
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

/// appid resolves and persists the native app identifiers of a mobile
/// project: the iOS bundle identifier and the Android package name.
#[derive(Debug, StructOpt)]
#[structopt(
    global_settings = &[
        structopt::clap::AppSettings::ColoredHelp,
        structopt::clap::AppSettings::InferSubcommands,
    ]
)]
pub struct Args {
    #[structopt(
        short = "p",
        long = "project-dir",
        default_value = ".",
        parse(from_os_str)
    )]
    /// Path to the project directory containing app.json.
    pub project_dir: PathBuf,

    #[structopt(short = "v", long = "verbose")]
    /// Enable more verbose logging.
    pub verbose: bool,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(name = "ios")]
    /// Resolve the iOS bundle identifier, prompting for one if unset
    Ios,

    #[structopt(name = "android")]
    /// Resolve the Android package name, prompting for one if unset
    Android,

    #[structopt(name = "completion")]
    /// Output shell completion code for the specified shell (bash or zsh)
    Completion { shell: Shell },
}

#[derive(Debug)]
pub enum Shell {
    Bash,
    Zsh,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        match string {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(anyhow!("unknown shell: '{}'", string)),
        }
    }
}
