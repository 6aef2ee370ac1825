use log::debug;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(Debug, Deserialize)]
struct Session {
    username: Option<String>,
}

fn session_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("appid");
    path.push("session.json");
    Some(path)
}

/// Best-effort lookup of the locally signed-in username. A missing session
/// file, like any read or parse failure, simply means "not signed in".
pub fn get_current_username() -> Option<String> {
    let path = session_path()?;
    debug!("Reading session file at `{}`", path.display());
    let file = File::open(&path).ok()?;
    let session: Session = serde_json::from_reader(BufReader::new(file)).ok()?;
    session.username
}
