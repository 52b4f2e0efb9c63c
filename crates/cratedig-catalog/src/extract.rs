//! Read-only projections over catalog search and artist profile documents.
//!
//! Each extractor parses the raw JSON text on its own so callers only pay
//! for what they ask for. An empty result list is `Ok(None)`; a first result
//! missing a field every album result carries is
//! [`CatalogError::MalformedDocument`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CatalogError;
use crate::types::{AlbumItem, AlbumSearchResponse, ArtistProfile, ExternalUrls, ImageRef};

const ALBUM_SEARCH: &str = "album search response";
const ARTIST_PROFILE: &str = "artist profile";

/// Web links for the first album result and its first artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumLinks {
    pub artist_link: String,
    pub album_link: String,
}

/// Extract the artist and album web links from an album search response.
///
/// # Errors
///
/// - [`CatalogError::Deserialize`] if `json` is not a JSON object.
/// - [`CatalogError::MalformedDocument`] if `items[0]` lacks
///   `artists[0].external_urls.spotify` or `external_urls.spotify`.
pub fn extract_links(json: &str) -> Result<Option<AlbumLinks>, CatalogError> {
    let Some(item) = first_album_item(json)? else {
        return Ok(None);
    };

    let artist = item
        .artists
        .first()
        .ok_or_else(|| CatalogError::malformed(ALBUM_SEARCH, "items[0].artists is empty"))?;

    let artist_link = spotify_link(artist.external_urls.as_ref()).ok_or_else(|| {
        CatalogError::malformed(
            ALBUM_SEARCH,
            "items[0].artists[0].external_urls.spotify is missing",
        )
    })?;

    let album_link = spotify_link(item.external_urls.as_ref()).ok_or_else(|| {
        CatalogError::malformed(ALBUM_SEARCH, "items[0].external_urls.spotify is missing")
    })?;

    Ok(Some(AlbumLinks {
        artist_link,
        album_link,
    }))
}

/// Extract the API URL of the first album result's first artist.
///
/// # Errors
///
/// - [`CatalogError::Deserialize`] if `json` is not a JSON object.
/// - [`CatalogError::MalformedDocument`] if `items[0].artists[0].href` is
///   missing.
pub fn extract_artist_api_ref(json: &str) -> Result<Option<String>, CatalogError> {
    let Some(item) = first_album_item(json)? else {
        return Ok(None);
    };

    item.artists
        .into_iter()
        .next()
        .and_then(|artist| artist.href)
        .map(Some)
        .ok_or_else(|| CatalogError::malformed(ALBUM_SEARCH, "items[0].artists[0].href is missing"))
}

/// Extract the URL of the narrowest image in an artist profile.
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] if `json` is not an artist profile
/// object.
pub fn extract_smallest_artist_image(json: &str) -> Result<Option<String>, CatalogError> {
    let profile: ArtistProfile = parse_json(json, ARTIST_PROFILE)?;
    let images = profile.images.unwrap_or_default();
    Ok(smallest_image_url(&images).map(str::to_owned))
}

/// Left-to-right scan for the minimum `width`; the first of equal widths wins.
///
/// Images without a width or URL are skipped.
#[must_use]
pub fn smallest_image_url(images: &[ImageRef]) -> Option<&str> {
    let mut smallest: Option<(u32, &str)> = None;
    for image in images {
        let (Some(width), Some(url)) = (image.width, image.url.as_deref()) else {
            continue;
        };
        if smallest.is_none_or(|(min_width, _)| width < min_width) {
            smallest = Some((width, url));
        }
    }
    smallest.map(|(_, url)| url)
}

fn first_album_item(json: &str) -> Result<Option<AlbumItem>, CatalogError> {
    let response: AlbumSearchResponse = parse_json(json, ALBUM_SEARCH)?;
    let Some(first) = response
        .albums
        .and_then(|page| page.items)
        .and_then(|items| items.into_iter().next())
    else {
        return Ok(None);
    };

    serde_json::from_value(first)
        .map(Some)
        .map_err(|e| CatalogError::malformed(ALBUM_SEARCH, format!("items[0]: {e}")))
}

fn spotify_link(urls: Option<&ExternalUrls>) -> Option<String> {
    urls.and_then(|u| u.spotify.clone())
}

pub(crate) fn parse_json<T: DeserializeOwned>(json: &str, context: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
