use serde::Deserialize;

/// A published application returned by the iTunes lookup API. Fields the
/// store omits are `None`; callers decide how to render those.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItunesApp {
    pub track_name: Option<String>,
    pub seller_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItunesLookupResponse {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<ItunesApp>,
}
