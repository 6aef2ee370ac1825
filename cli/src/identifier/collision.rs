use std::collections::HashMap;

use appid_client::ItunesApp;
use log::debug;

use super::IdentifierKind;

/// External store queries the collision check depends on. Implemented by the
/// HTTP client; tests substitute scripted fakes.
pub trait StoreLookup {
    fn is_host_reachable(&self, host: &str) -> bool;
    fn ios_apps_with_bundle_id(&self, bundle_id: &str) -> appid_client::Result<Vec<ItunesApp>>;
    fn android_package_listed(&self, package: &str) -> appid_client::Result<bool>;
}

impl StoreLookup for appid_client::Client {
    fn is_host_reachable(&self, host: &str) -> bool {
        appid_client::Client::is_host_reachable(self, host)
    }

    fn ios_apps_with_bundle_id(&self, bundle_id: &str) -> appid_client::Result<Vec<ItunesApp>> {
        appid_client::Client::ios_apps_with_bundle_id(self, bundle_id)
    }

    fn android_package_listed(&self, package: &str) -> appid_client::Result<bool> {
        appid_client::Client::android_package_listed(self, package)
    }
}

/// Memoized availability check against the public app stores. Each candidate
/// identifier is looked up at most once per command invocation; unreachable
/// hosts and failed lookups leave no cache entry, so they are retried on the
/// next check of the same candidate.
pub struct CollisionChecker<'a> {
    store: &'a dyn StoreLookup,
    bundle_ids: HashMap<String, Option<String>>,
    packages: HashMap<String, Option<String>>,
}

impl<'a> CollisionChecker<'a> {
    pub fn new(store: &'a dyn StoreLookup) -> Self {
        CollisionChecker {
            store,
            bundle_ids: HashMap::new(),
            packages: HashMap::new(),
        }
    }

    /// Return an advisory warning when `candidate` already belongs to a
    /// published app, or `None` when it looks free. Never a hard error: a
    /// transport or parse failure is treated as "no collision found".
    pub fn check(&mut self, kind: IdentifierKind, candidate: &str) -> Option<String> {
        if let Some(cached) = self.cache(kind).get(candidate) {
            debug!("Using cached availability of `{candidate}`");
            return cached.clone();
        }

        if !self.store.is_host_reachable(kind.store_host()) {
            // An unreachable store is not evidence of availability; the
            // non-result must not be cached.
            debug!(
                "`{}` is unreachable, skipping the availability check",
                kind.store_host()
            );
            return None;
        }

        let warning = match self.lookup(kind, candidate) {
            Ok(warning) => warning,
            Err(error) => {
                debug!("Availability check for `{candidate}` failed: {error}");
                return None;
            }
        };
        self.cache(kind)
            .insert(candidate.to_owned(), warning.clone());
        warning
    }

    fn lookup(
        &self,
        kind: IdentifierKind,
        candidate: &str,
    ) -> appid_client::Result<Option<String>> {
        match kind {
            IdentifierKind::IosBundleId => {
                let apps = self.store.ios_apps_with_bundle_id(candidate)?;
                Ok(apps.first().map(|app| format_ios_warning(candidate, app)))
            }
            IdentifierKind::AndroidPackage => {
                let listed = self.store.android_package_listed(candidate)?;
                Ok(listed.then(|| {
                    format!(
                        "The package `{candidate}` is already in use by another app on Google Play."
                    )
                }))
            }
        }
    }

    fn cache(&mut self, kind: IdentifierKind) -> &mut HashMap<String, Option<String>> {
        match kind {
            IdentifierKind::IosBundleId => &mut self.bundle_ids,
            IdentifierKind::AndroidPackage => &mut self.packages,
        }
    }
}

fn format_ios_warning(candidate: &str, app: &ItunesApp) -> String {
    format!(
        "The app `{}` by {} is already using the bundle identifier `{candidate}` on the App Store.",
        app.track_name.as_deref().unwrap_or("unknown"),
        app.seller_name.as_deref().unwrap_or("an unknown seller"),
    )
}
