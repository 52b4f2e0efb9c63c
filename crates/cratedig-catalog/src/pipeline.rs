//! Barcode query to record metadata.
//!
//! Chains the lookups that used to be nested callbacks:
//!
//! 1. release search by barcode → [`ReleaseSummary`]
//! 2. `"Artist - Album"` title → [`RecordTitle`]
//! 3. album search → [`AlbumLinks`] and the artist API URL
//! 4. artist profile → smallest artist image
//!
//! Upstream failures (network, non-2xx) are logged and stop the chain,
//! keeping whatever was already resolved. Malformed documents propagate.

use std::future::Future;

use serde::Serialize;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::extract::{
    extract_artist_api_ref, extract_links, extract_smallest_artist_image, AlbumLinks,
};
use crate::release::{extract_release_summary, parse_record, RecordTitle, ReleaseSummary};

/// Source of raw catalog JSON.
///
/// [`CatalogClient`] is the production implementation.
pub trait MetadataSource: Send + Sync {
    fn search_release(
        &self,
        barcode: &str,
    ) -> impl Future<Output = Result<String, CatalogError>> + Send;

    fn search_album(
        &self,
        artist: &str,
        album: &str,
    ) -> impl Future<Output = Result<String, CatalogError>> + Send;

    fn fetch_artist(&self, href: &str)
        -> impl Future<Output = Result<String, CatalogError>> + Send;
}

impl MetadataSource for CatalogClient {
    async fn search_release(&self, barcode: &str) -> Result<String, CatalogError> {
        CatalogClient::search_release(self, barcode).await
    }

    async fn search_album(&self, artist: &str, album: &str) -> Result<String, CatalogError> {
        CatalogClient::search_album(self, artist, album).await
    }

    async fn fetch_artist(&self, href: &str) -> Result<String, CatalogError> {
        CatalogClient::fetch_artist(self, href).await
    }
}

/// Everything resolved for one scanned record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordMetadata {
    pub release: ReleaseSummary,
    pub record: Option<RecordTitle>,
    pub links: Option<AlbumLinks>,
    pub artist_image: Option<String>,
}

/// Drives the lookup chain against a [`MetadataSource`].
pub struct RecordLookup<S> {
    source: S,
}

impl<S: MetadataSource> RecordLookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a barcode query into record metadata.
    ///
    /// Returns `Ok(None)` when the release database has no match or cannot
    /// be reached.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MalformedDocument`] or [`CatalogError::Deserialize`]
    /// when a response is present but unreadable.
    pub async fn resolve(&self, query: &str) -> Result<Option<RecordMetadata>, CatalogError> {
        let Some(body) = upstream(self.source.search_release(query).await, "release search")?
        else {
            return Ok(None);
        };
        let Some(release) = extract_release_summary(&body)? else {
            tracing::info!(query, "no release found for barcode");
            return Ok(None);
        };

        let mut metadata = RecordMetadata {
            record: parse_record(&release.title),
            release,
            links: None,
            artist_image: None,
        };

        let Some(record) = metadata.record.as_ref() else {
            tracing::debug!(title = %metadata.release.title, "release title is not \"Artist - Album\"");
            return Ok(Some(metadata));
        };

        let Some(body) = upstream(
            self.source.search_album(&record.artist, &record.album).await,
            "album search",
        )?
        else {
            return Ok(Some(metadata));
        };
        metadata.links = extract_links(&body)?;
        let Some(artist_href) = extract_artist_api_ref(&body)? else {
            tracing::debug!(
                artist = %record.artist,
                album = %record.album,
                "album not found in catalog"
            );
            return Ok(Some(metadata));
        };

        if let Some(body) = upstream(self.source.fetch_artist(&artist_href).await, "artist profile")?
        {
            metadata.artist_image = extract_smallest_artist_image(&body)?;
        }

        Ok(Some(metadata))
    }
}

/// Turns upstream failures into a logged `None`; other errors pass through.
fn upstream(
    result: Result<String, CatalogError>,
    step: &'static str,
) -> Result<Option<String>, CatalogError> {
    match result {
        Ok(body) => Ok(Some(body)),
        Err(error) if error.is_upstream_failure() => {
            tracing::warn!(step, error = %error, "catalog lookup failed");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}
