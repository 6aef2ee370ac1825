//! Resolution of the two native app identifiers: the iOS bundle identifier
//! and the Android package name.
//!
//! A value already present and well-formed in the project config is
//! authoritative. Otherwise the workflow derives a suggestion, prompts for a
//! value, checks it against the public app stores and writes it back.

mod collision;
mod resolve;
mod suggest;
mod validate;

pub use collision::{CollisionChecker, StoreLookup};
pub use resolve::{get_or_prompt, ResolveContext};

use crate::project::ProjectConfig;
use validate::{is_valid_bundle_id, is_valid_package_name};

/// Which of the two native identifiers is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    IosBundleId,
    AndroidPackage,
}

impl IdentifierKind {
    /// Dotted field name as it appears in the project config.
    pub fn field_name(self) -> &'static str {
        match self {
            IdentifierKind::IosBundleId => "ios.bundleIdentifier",
            IdentifierKind::AndroidPackage => "android.package",
        }
    }

    /// Path of the field inside the config document.
    pub fn config_field_path(self) -> [&'static str; 2] {
        match self {
            IdentifierKind::IosBundleId => ["ios", "bundleIdentifier"],
            IdentifierKind::AndroidPackage => ["android", "package"],
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IdentifierKind::IosBundleId => "iOS bundle identifier",
            IdentifierKind::AndroidPackage => "Android package name",
        }
    }

    pub fn validator(self) -> fn(&str) -> bool {
        match self {
            IdentifierKind::IosBundleId => is_valid_bundle_id,
            IdentifierKind::AndroidPackage => is_valid_package_name,
        }
    }

    pub fn is_valid(self, candidate: &str) -> bool {
        self.validator()(candidate)
    }

    /// Human description of the accepted grammar, used in error and prompt
    /// messages.
    pub fn requirement(self) -> &'static str {
        match self {
            IdentifierKind::IosBundleId => {
                "start with a letter and contain only letters, digits, dashes and dots"
            }
            IdentifierKind::AndroidPackage => {
                "consist of at least two dot-separated segments of letters, digits and \
                 underscores, each starting with a letter"
            }
        }
    }

    pub fn docs_url(self) -> &'static str {
        match self {
            IdentifierKind::IosBundleId => {
                "https://developer.apple.com/documentation/bundleresources/information_property_list/cfbundleidentifier"
            }
            IdentifierKind::AndroidPackage => {
                "https://developer.android.com/studio/build/application-id"
            }
        }
    }

    /// Host of the store that can report a collision for this kind.
    pub fn store_host(self) -> &'static str {
        match self {
            IdentifierKind::IosBundleId => appid_client::ITUNES_HOST,
            IdentifierKind::AndroidPackage => appid_client::PLAY_STORE_HOST,
        }
    }

    pub fn current_value(self, config: &ProjectConfig) -> Option<&str> {
        match self {
            IdentifierKind::IosBundleId => config.ios.bundle_identifier.as_deref(),
            IdentifierKind::AndroidPackage => config.android.package.as_deref(),
        }
    }
}
