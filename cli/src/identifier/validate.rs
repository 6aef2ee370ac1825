use once_cell::sync::Lazy;
use regex::Regex;

static BUNDLE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9\-.]+$").expect("Bundle id regex is well-formed")
});

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$")
        .expect("Package name regex is well-formed")
});

/// Apple's bundle identifier grammar: a letter followed by letters, digits,
/// dashes and dots.
pub fn is_valid_bundle_id(candidate: &str) -> bool {
    BUNDLE_ID.is_match(candidate)
}

/// Android's package grammar: at least two dot-separated segments, each a
/// letter followed by letters, digits and underscores.
pub fn is_valid_package_name(candidate: &str) -> bool {
    PACKAGE_NAME.is_match(candidate)
}
