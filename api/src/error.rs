use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to initialise the HTTP client")]
    BuildHttpClient(#[source] reqwest::Error),

    #[error("Store lookup request failed")]
    Http(#[source] reqwest::Error),

    #[error("Store lookup failed with {}", status_code)]
    UnexpectedStatus { status_code: StatusCode },

    #[error("Could not parse JSON response.")]
    BadJsonResponse(#[source] reqwest::Error),
}
