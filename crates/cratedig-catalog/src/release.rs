//! Release database results for a scanned barcode.

use serde::Serialize;

use crate::error::CatalogError;
use crate::extract::parse_json;
use crate::types::{ReleaseResult, ReleaseSearchResponse};

const RELEASE_SEARCH: &str = "release search response";

/// What the release database knows about the first barcode match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    /// `"Artist - Album"` as listed by the database.
    pub title: String,
    pub year: Option<String>,
    pub country: Option<String>,
    pub formats: Vec<String>,
    pub labels: Vec<String>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
    pub cover_image: Option<String>,
}

/// Artist and album split out of a release title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordTitle {
    pub artist: String,
    pub album: String,
}

/// Split `"Artist - Album"` into its two trimmed halves.
///
/// Titles with no separator, or with more than one, are rejected.
#[must_use]
pub fn parse_record(title: &str) -> Option<RecordTitle> {
    let parts: Vec<&str> = title.split(" - ").collect();
    let [artist, album] = parts.as_slice() else {
        return None;
    };
    Some(RecordTitle {
        artist: artist.trim().to_owned(),
        album: album.trim().to_owned(),
    })
}

/// Summarise the first result of a release search.
///
/// # Errors
///
/// - [`CatalogError::Deserialize`] if `json` is not a JSON object.
/// - [`CatalogError::MalformedDocument`] if `results[0]` has no `title`.
pub fn extract_release_summary(json: &str) -> Result<Option<ReleaseSummary>, CatalogError> {
    let response: ReleaseSearchResponse = parse_json(json, RELEASE_SEARCH)?;
    let Some(first) = response.results.and_then(|results| results.into_iter().next()) else {
        return Ok(None);
    };

    let result: ReleaseResult = serde_json::from_value(first)
        .map_err(|e| CatalogError::malformed(RELEASE_SEARCH, format!("results[0]: {e}")))?;

    let title = result
        .title
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CatalogError::malformed(RELEASE_SEARCH, "results[0].title is missing"))?;

    Ok(Some(ReleaseSummary {
        title,
        year: result.year.as_ref().and_then(year_as_string),
        country: non_empty(result.country),
        formats: result.format,
        labels: result.label,
        genres: result.genre,
        styles: result.style,
        cover_image: non_empty(result.cover_image),
    }))
}

fn year_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => non_empty(Some(s.clone())),
        // The database uses 0 for "unknown year".
        serde_json::Value::Number(n) if n.as_u64() != Some(0) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_splits_artist_and_album() {
        assert_eq!(
            parse_record("Pink Floyd - The Dark Side Of The Moon"),
            Some(RecordTitle {
                artist: "Pink Floyd".into(),
                album: "The Dark Side Of The Moon".into(),
            })
        );
    }

    #[test]
    fn parse_record_trims_parts() {
        let record = parse_record("  Can  -  Tago Mago ").unwrap();
        assert_eq!(record.artist, "Can");
        assert_eq!(record.album, "Tago Mago");
    }

    #[test]
    fn parse_record_without_separator_is_none() {
        assert!(parse_record("Untitled").is_none());
        assert!(parse_record("Jay-Z").is_none());
    }

    #[test]
    fn parse_record_with_extra_separator_is_none() {
        assert!(parse_record("A - B - C").is_none());
    }

    #[test]
    fn summary_from_first_result() {
        let json = serde_json::json!({
            "pagination": { "items": 2 },
            "results": [
                {
                    "title": "Pink Floyd - The Dark Side Of The Moon",
                    "year": "1973",
                    "country": "UK",
                    "format": ["Vinyl", "LP", "Album"],
                    "label": ["Harvest"],
                    "genre": ["Rock"],
                    "style": ["Prog Rock", "Psychedelic Rock"],
                    "cover_image": "https://i.discogs.com/cover.jpg"
                },
                { "title": "ignored" }
            ]
        })
        .to_string();

        let summary = extract_release_summary(&json).unwrap().unwrap();
        assert_eq!(summary.title, "Pink Floyd - The Dark Side Of The Moon");
        assert_eq!(summary.year.as_deref(), Some("1973"));
        assert_eq!(summary.country.as_deref(), Some("UK"));
        assert_eq!(summary.formats, vec!["Vinyl", "LP", "Album"]);
        assert_eq!(summary.labels, vec!["Harvest"]);
        assert_eq!(summary.styles.len(), 2);
        assert_eq!(
            summary.cover_image.as_deref(),
            Some("https://i.discogs.com/cover.jpg")
        );
    }

    #[test]
    fn summary_tolerates_missing_optional_fields() {
        let json = r#"{ "results": [ { "title": "Can - Tago Mago", "year": 0 } ] }"#;
        let summary = extract_release_summary(json).unwrap().unwrap();
        assert!(summary.year.is_none());
        assert!(summary.country.is_none());
        assert!(summary.formats.is_empty());
        assert!(summary.cover_image.is_none());
    }

    #[test]
    fn summary_numeric_year_is_stringified() {
        let json = r#"{ "results": [ { "title": "Can - Tago Mago", "year": 1971 } ] }"#;
        let summary = extract_release_summary(json).unwrap().unwrap();
        assert_eq!(summary.year.as_deref(), Some("1971"));
    }

    #[test]
    fn summary_null_results_is_none() {
        assert!(extract_release_summary(r#"{ "results": null }"#)
            .unwrap()
            .is_none());
    }

    #[test]
    fn summary_empty_results_is_none() {
        assert!(extract_release_summary(r#"{ "results": [] }"#)
            .unwrap()
            .is_none());
    }

    #[test]
    fn summary_without_title_is_malformed() {
        let json = r#"{ "results": [ { "year": "1971" } ] }"#;
        assert!(matches!(
            extract_release_summary(json),
            Err(CatalogError::MalformedDocument { .. })
        ));
    }
}
