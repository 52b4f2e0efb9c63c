//! Response shapes for the streaming catalog and the release database.
//!
//! ## Album search (`GET /search?type=album`)
//! `albums.items` is the only array that matters; callers read `items[0]`.
//! Items are kept as raw [`serde_json::Value`] so a single odd entry further
//! down the list cannot fail the whole document. Every field of
//! [`AlbumItem`] is optional at the serde level; which ones are *required*
//! is decided by the extractors, so "missing" surfaces as
//! `MalformedDocument` instead of a generic decode error.
//!
//! ## Artist profile (`GET /artists/{id}`)
//! `images` is ordered largest first in observed responses, but nothing
//! guarantees that. `width` is `null` for some user-uploaded images; any
//! value that is not a whole number fitting `u32` is read as unknown.
//!
//! ## Release search (`GET /database/search?barcode=`)
//! `results[0].title` is `"Artist - Album"`. `year` arrives as a string
//! (`"1997"`) on most results and as a number on a few; both are accepted.
//! `format`, `label`, `genre` and `style` are string arrays, absent when
//! unknown.

use serde::{Deserialize, Deserializer};

/// Top-level response of an album search.
#[derive(Debug, Default, Deserialize)]
pub struct AlbumSearchResponse {
    #[serde(default)]
    pub albums: Option<AlbumPage>,
}

/// One page of album results.
#[derive(Debug, Default, Deserialize)]
pub struct AlbumPage {
    /// `null` and absent both mean no results.
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
}

/// A single album result.
#[derive(Debug, Default, Deserialize)]
pub struct AlbumItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

/// Artist reference embedded in an album item.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// API URL of the full artist profile.
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

/// Public web links for a catalog object.
#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Full artist profile.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ImageRef>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

/// Top-level response of a release database search.
#[derive(Debug, Default, Deserialize)]
pub struct ReleaseSearchResponse {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

/// A single release search result.
#[derive(Debug, Default, Deserialize)]
pub struct ReleaseResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<serde_json::Value>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Image dimensions that are not non-negative integers read as unknown.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|n| u32::try_from(n).ok()))
}
