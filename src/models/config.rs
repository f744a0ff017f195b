//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::ui::DEFAULT_HEADER_OFFSET;

fn default_blogs_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_header_offset() -> u32 {
    DEFAULT_HEADER_OFFSET
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the blog client.
pub struct AppConfig {
    /// JSON snapshot seeding the in-memory data source.
    pub data_file: String,
    #[serde(default = "default_blogs_per_page")]
    pub blogs_per_page: usize,
    /// Height of the sticky header subtracted when scrolling to the grid.
    #[serde(default = "default_header_offset")]
    pub header_offset: u32,
    /// Initial search term of the listing.
    #[serde(default)]
    pub search: Option<String>,
    /// Initial category selection of the listing.
    #[serde(default)]
    pub category: Option<String>,
    /// Page requested after the initial render.
    #[serde(default)]
    pub page: Option<usize>,
}
