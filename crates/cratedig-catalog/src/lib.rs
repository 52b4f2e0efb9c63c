//! Music-catalog metadata for scanned records.
//!
//! Raw JSON from the release database and the streaming catalog is decoded
//! into the structs in [`types`] and projected by the read-only extractors in
//! [`extract`] and [`release`]. [`pipeline::RecordLookup`] chains the HTTP
//! lookups that feed them.

pub mod client;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod release;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use extract::{
    extract_artist_api_ref, extract_links, extract_smallest_artist_image, AlbumLinks,
};
pub use pipeline::{MetadataSource, RecordLookup, RecordMetadata};
pub use release::{extract_release_summary, parse_record, RecordTitle, ReleaseSummary};
