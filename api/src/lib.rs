#![deny(clippy::all)]
mod error;
pub mod resources;

use log::debug;
use once_cell::sync::Lazy;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;
use url::Url;

pub use crate::{
    error::{Error, Result},
    resources::ItunesApp,
};
pub use reqwest::StatusCode;
use crate::resources::ItunesLookupResponse;

/// Host serving the iTunes lookup API.
pub const ITUNES_HOST: &str = "itunes.apple.com";

/// Host serving Google Play store listings.
pub const PLAY_STORE_HOST: &str = "play.google.com";

static ITUNES_LOOKUP_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://itunes.apple.com/lookup").expect("Lookup URL is well-formed"));

static PLAY_STORE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://play.google.com/store/apps/details").expect("Store URL is well-formed")
});

/// Timeout applied to each store lookup request.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout applied to the reachability probe. Kept short so an unreachable
/// host does not stall an interactive session.
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking client for the two public app stores. All requests carry a
/// bounded timeout; callers treat timeouts like any other transport failure.
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(Error::BuildHttpClient)?;
        Ok(Client { http_client })
    }

    /// Probe whether `host` accepts connections at all. Any failure,
    /// including a timeout, counts as unreachable.
    pub fn is_host_reachable(&self, host: &str) -> bool {
        let url = match Url::parse(&format!("https://{host}")) {
            Ok(url) => url,
            Err(_) => return false,
        };
        debug!("Probing reachability of `{host}`");
        self.http_client
            .get(url)
            .timeout(REACHABILITY_TIMEOUT)
            .send()
            .is_ok()
    }

    /// Look up published iOS apps registered under `bundle_id`.
    pub fn ios_apps_with_bundle_id(&self, bundle_id: &str) -> Result<Vec<ItunesApp>> {
        let mut url = ITUNES_LOOKUP_URL.clone();
        url.query_pairs_mut().append_pair("bundleId", bundle_id);
        debug!("GET `{url}`");
        let response = self.http_client.get(url).send().map_err(Error::Http)?;
        let status_code = response.status();
        if !status_code.is_success() {
            return Err(Error::UnexpectedStatus { status_code });
        }
        let lookup: ItunesLookupResponse = response.json().map_err(Error::BadJsonResponse)?;
        debug!(
            "Lookup for `{bundle_id}` returned {} result(s)",
            lookup.result_count
        );
        Ok(lookup.results)
    }

    /// Check whether a Google Play listing exists for `package`. The store
    /// serves listings by package id, so a 200 means the name is taken and a
    /// 404 means it is free.
    pub fn android_package_listed(&self, package: &str) -> Result<bool> {
        let mut url = PLAY_STORE_URL.clone();
        url.query_pairs_mut().append_pair("id", package);
        debug!("GET `{url}`");
        let response = self.http_client.get(url).send().map_err(Error::Http)?;
        Ok(response.status() == StatusCode::OK)
    }
}
