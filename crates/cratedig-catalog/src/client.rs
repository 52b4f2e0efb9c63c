//! HTTP client for the release database and the streaming catalog.
//!
//! Every method returns the raw response body; decoding is left to the
//! extractors so each projection can succeed or fail on its own.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CatalogError;

pub const DEFAULT_SPOTIFY_BASE_URL: &str = "https://api.spotify.com/v1/";
pub const DEFAULT_DISCOGS_BASE_URL: &str = "https://api.discogs.com/";

/// Client for the catalog lookups behind a barcode scan.
///
/// Use [`CatalogClient::new`] for production or
/// [`CatalogClient::with_base_urls`] to point at mock servers in tests.
pub struct CatalogClient {
    client: Client,
    spotify_base: Url,
    spotify_token: Option<String>,
    discogs_base: Url,
    discogs_token: Option<String>,
}

impl CatalogClient {
    /// Creates a client pointed at the production APIs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        spotify_token: Option<&str>,
        discogs_token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        Self::with_base_urls(
            DEFAULT_SPOTIFY_BASE_URL,
            spotify_token,
            DEFAULT_DISCOGS_BASE_URL,
            discogs_token,
            timeout_secs,
            user_agent,
        )
    }

    /// Creates a client with custom base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if either
    /// base URL does not parse.
    pub fn with_base_urls(
        spotify_base_url: &str,
        spotify_token: Option<&str>,
        discogs_base_url: &str,
        discogs_token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            spotify_base: normalise_base_url(spotify_base_url)?,
            spotify_token: spotify_token.map(str::to_owned),
            discogs_base: normalise_base_url(discogs_base_url)?,
            discogs_token: discogs_token.map(str::to_owned),
        })
    }

    /// Searches the release database for `barcode`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Http`] on network failure,
    /// [`CatalogError::UnexpectedStatus`] on a non-2xx response.
    pub async fn search_release(&self, barcode: &str) -> Result<String, CatalogError> {
        let url = build_url(
            &self.discogs_base,
            "database/search",
            &[("barcode", barcode), ("type", "release")],
        )?;
        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.discogs_token {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Discogs token={token}"),
            );
        }
        Self::send_text(request, &url).await
    }

    /// Searches the streaming catalog for one album by artist and title.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Http`] on network failure,
    /// [`CatalogError::UnexpectedStatus`] on a non-2xx response.
    pub async fn search_album(&self, artist: &str, album: &str) -> Result<String, CatalogError> {
        let query = format!("album:{album} artist:{artist}");
        let url = build_url(
            &self.spotify_base,
            "search",
            &[("q", &query), ("type", "album"), ("limit", "1")],
        )?;
        self.spotify_get(url).await
    }

    /// Fetches an artist profile from the API URL found in a search result.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MalformedDocument`] if `href` is not a URL,
    /// [`CatalogError::Http`] on network failure,
    /// [`CatalogError::UnexpectedStatus`] on a non-2xx response.
    pub async fn fetch_artist(&self, href: &str) -> Result<String, CatalogError> {
        let url = Url::parse(href)
            .map_err(|e| CatalogError::malformed("artist href", format!("{href:?}: {e}")))?;
        self.spotify_get(url).await
    }

    async fn spotify_get(&self, url: Url) -> Result<String, CatalogError> {
        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.spotify_token {
            request = request.bearer_auth(token);
        }
        Self::send_text(request, &url).await
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send_text(
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<String, CatalogError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "catalog request rejected");
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Ensure the base URL ends with exactly one slash so `Url::join` appends
/// to its path rather than replacing the last segment.
fn normalise_base_url(base_url: &str) -> Result<Url, CatalogError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Joins `path` onto `base` and appends percent-encoded query parameters.
fn build_url(base: &Url, path: &str, params: &[(&str, &str)]) -> Result<Url, CatalogError> {
    let mut url = base.join(path).map_err(|e| CatalogError::InvalidBaseUrl {
        base_url: base.to_string(),
        reason: e.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in params {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
