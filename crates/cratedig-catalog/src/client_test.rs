use super::*;

#[test]
fn normalise_base_url_adds_single_trailing_slash() {
    let url = normalise_base_url("https://api.spotify.com/v1").unwrap();
    assert_eq!(url.as_str(), "https://api.spotify.com/v1/");
    let url = normalise_base_url("https://api.spotify.com/v1///").unwrap();
    assert_eq!(url.as_str(), "https://api.spotify.com/v1/");
}

#[test]
fn normalise_base_url_rejects_garbage() {
    assert!(matches!(
        normalise_base_url("not a url"),
        Err(CatalogError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn build_url_keeps_base_path() {
    let base = normalise_base_url("https://api.spotify.com/v1").unwrap();
    let url = build_url(&base, "search", &[("type", "album"), ("limit", "1")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.spotify.com/v1/search?type=album&limit=1"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let base = normalise_base_url("https://api.spotify.com/v1/").unwrap();
    let url = build_url(&base, "search", &[("q", "album:Kid A artist:Radiohead & co")]).unwrap();
    assert!(
        url.as_str().contains("%26"),
        "query param should be percent-encoded: {url}"
    );
    assert!(!url.as_str().contains(' '), "spaces must be encoded: {url}");
}

#[test]
fn with_base_urls_rejects_invalid_discogs_url() {
    let result = CatalogClient::with_base_urls(
        "https://api.spotify.com/v1/",
        None,
        "::nope::",
        None,
        30,
        "cratedig-test",
    );
    assert!(matches!(result, Err(CatalogError::InvalidBaseUrl { .. })));
}
