use super::IdentifierKind;
use crate::project::ProjectConfig;

/// Produce an advisory identifier to pre-fill the prompt with, or `None`
/// when nothing suitable can be derived.
///
/// Candidates are tried in order and the first one accepted by the target
/// grammar wins: the other platform's existing identifier, then
/// `com.<owner>.<slug>` where the project owner falls back to the signed-in
/// username. Cross-platform seeds are never assumed to be compatible; every
/// candidate is re-validated against the target grammar.
pub fn suggest(
    kind: IdentifierKind,
    config: &ProjectConfig,
    username: Option<&str>,
) -> Option<String> {
    for seed in other_platform_seeds(kind, config) {
        if kind.is_valid(seed) {
            return Some(seed.to_owned());
        }
    }

    let owner = config.owner.as_deref().or(username)?;
    let slug = config.slug.as_deref()?;
    let mut candidate = format!("com.{owner}.{slug}");
    if kind == IdentifierKind::AndroidPackage {
        // Play store package names forbid dashes.
        candidate = candidate.replace('-', "");
    }
    kind.is_valid(&candidate).then_some(candidate)
}

fn other_platform_seeds(kind: IdentifierKind, config: &ProjectConfig) -> Vec<&str> {
    let seeds = match kind {
        IdentifierKind::IosBundleId => [
            config.android.package.as_deref(),
            config.android.application_id.as_deref(),
        ],
        IdentifierKind::AndroidPackage => [config.ios.bundle_identifier.as_deref(), None],
    };
    seeds.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{AndroidConfig, IosConfig};
    use pretty_assertions::assert_eq;

    fn config(
        owner: Option<&str>,
        slug: Option<&str>,
        bundle_identifier: Option<&str>,
        package: Option<&str>,
    ) -> ProjectConfig {
        ProjectConfig {
            owner: owner.map(str::to_owned),
            slug: slug.map(str::to_owned),
            ios: IosConfig {
                bundle_identifier: bundle_identifier.map(str::to_owned),
            },
            android: AndroidConfig {
                package: package.map(str::to_owned),
                application_id: None,
            },
        }
    }

    #[test]
    fn test_reuses_android_package_for_ios() {
        let config = config(Some("acme"), Some("other"), None, Some("com.acme.app"));
        assert_eq!(
            suggest(IdentifierKind::IosBundleId, &config, None),
            Some("com.acme.app".to_owned())
        );
    }

    #[test]
    fn test_reuses_application_id_when_package_is_absent() {
        let mut config = config(None, None, None, None);
        config.android.application_id = Some("com.acme.legacy".to_owned());
        assert_eq!(
            suggest(IdentifierKind::IosBundleId, &config, None),
            Some("com.acme.legacy".to_owned())
        );
    }

    #[test]
    fn test_reuses_bundle_identifier_for_android_only_when_valid() {
        // Dashes are fine for a bundle id but not for a package, so the seed
        // must be rejected and the synthesized candidate used instead.
        let config = config(
            Some("acme"),
            Some("my-app"),
            Some("com.acme.my-app"),
            None,
        );
        assert_eq!(
            suggest(IdentifierKind::AndroidPackage, &config, None),
            Some("com.acme.myapp".to_owned())
        );
    }

    #[test]
    fn test_synthesizes_from_owner_and_slug() {
        let config = config(Some("acme"), Some("my-app"), None, None);
        assert_eq!(
            suggest(IdentifierKind::IosBundleId, &config, None),
            Some("com.acme.my-app".to_owned())
        );
    }

    #[test]
    fn test_owner_takes_precedence_over_username() {
        let config = config(Some("acme"), Some("app"), None, None);
        assert_eq!(
            suggest(IdentifierKind::IosBundleId, &config, Some("someone")),
            Some("com.acme.app".to_owned())
        );
    }

    #[test]
    fn test_falls_back_to_username() {
        let config = config(None, Some("app"), None, None);
        assert_eq!(
            suggest(IdentifierKind::AndroidPackage, &config, Some("someone")),
            Some("com.someone.app".to_owned())
        );
    }

    #[test]
    fn test_no_suggestion_without_identity() {
        let config = config(None, Some("app"), None, None);
        assert_eq!(suggest(IdentifierKind::IosBundleId, &config, None), None);
    }

    #[test]
    fn test_no_suggestion_when_nothing_validates() {
        // A slug starting with a digit makes the synthesized value invalid.
        let config = config(Some("acme"), Some("1app"), None, None);
        assert_eq!(suggest(IdentifierKind::AndroidPackage, &config, None), None);
    }
}
