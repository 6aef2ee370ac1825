use thiserror::Error;

/// An identifier already present in the project config that fails its
/// grammar. A malformed value typed into the config file is a configuration
/// bug, never something to silently overwrite.
#[derive(Debug, Error)]
#[error("Invalid {field} `{value}`: it must {requirement}")]
pub struct FormatError {
    pub field: &'static str,
    pub value: String,
    pub requirement: &'static str,
}

/// Input was required but no interactive terminal is attached. The message
/// names the config field to set and where to read about it.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NonInteractiveError(pub String);

/// The failure was already explained in full where it happened; the
/// top-level handler must not print a second generic banner.
#[derive(Debug, Error)]
#[error("The command cannot continue (see above)")]
pub struct SilentAbort;
