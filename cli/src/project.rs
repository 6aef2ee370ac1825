use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

/// Name of the static project configuration file.
pub const CONFIG_FILE: &str = "app.json";

/// Dynamic configuration sources. Their presence means the project config is
/// produced by executable logic the tool cannot safely rewrite.
const DYNAMIC_CONFIG_FILES: [&str; 2] = ["app.config.js", "app.config.ts"];

/// The subset of the project configuration the identifier workflow reads.
/// The file may carry arbitrary other fields; those are preserved on write.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub owner: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub ios: IosConfig,
    #[serde(default)]
    pub android: AndroidConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    pub bundle_identifier: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    pub package: Option<String>,
    pub application_id: Option<String>,
}

/// Outcome of applying a configuration edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyOutcome {
    /// The static config file was rewritten.
    Success,
    /// The config is sourced from a form the tool cannot safely rewrite.
    Warn { message: String },
    /// No config file exists in the project directory.
    NoConfig,
}

pub fn get_config(project_dir: &Path) -> Result<ProjectConfig> {
    let path = project_dir.join(CONFIG_FILE);
    debug!("Reading project config at `{}`", path.display());
    let file = File::open(&path)
        .with_context(|| format!("Could not open project config `{}`", path.display()))?;
    let config_reader = BufReader::new(file);
    serde_json::from_reader(config_reader)
        .with_context(|| format!("Could not parse project config `{}`", path.display()))
}

/// Apply a single-field overlay to the static project config, preserving
/// every other field in the file.
pub fn modify_config(
    project_dir: &Path,
    field_path: &[&str],
    value: &str,
) -> Result<ModifyOutcome> {
    if let Some(dynamic) = find_dynamic_config(project_dir) {
        return Ok(ModifyOutcome::Warn {
            message: format!(
                "Cannot automatically write to dynamic config at `{}`",
                dynamic.display()
            ),
        });
    }

    let path = project_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ModifyOutcome::NoConfig);
    }

    let file = File::open(&path)
        .with_context(|| format!("Could not open project config `{}`", path.display()))?;
    let mut config: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse project config `{}`", path.display()))?;
    set_field(&mut config, field_path, value);

    debug!("Writing project config at `{}`", path.display());
    let file = File::create(&path)
        .with_context(|| format!("Could not create project config `{}`", path.display()))?;
    let config_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(config_writer, &config).with_context(|| {
        format!(
            "Could not serialise configuration to `{}`",
            path.display()
        )
    })?;
    Ok(ModifyOutcome::Success)
}

fn find_dynamic_config(project_dir: &Path) -> Option<PathBuf> {
    DYNAMIC_CONFIG_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.exists())
}

fn set_field(config: &mut Value, field_path: &[&str], value: &str) {
    let (last, parents) = match field_path.split_last() {
        Some(split) => split,
        None => return,
    };
    let mut node = config;
    for key in parents {
        node = ensure_object(node)
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(last.to_string(), Value::String(value.to_owned()));
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut()
        .expect("node was just replaced with an object")
}
