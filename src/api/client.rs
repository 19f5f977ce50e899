//! HTTP client for the collection API.

use crate::error::Result;
use crate::filters::SearchFilters;

use super::{ArtworkDetail, ArtworkSummary, DetailResponse, SearchResponse};

/// Default base URL of the collection API.
pub const DEFAULT_API_BASE: &str = "https://api.artic.edu/api/v1";

/// Default base URL of the IIIF image service.
pub const DEFAULT_IMAGE_BASE: &str = "https://www.artic.edu/iiif/2";

/// Fixed page size requested from the search endpoint.
pub const PAGE_SIZE: usize = 100;

/// Image width for result list thumbnails.
pub const THUMBNAIL_WIDTH: u32 = 200;

/// Image width for the detail view.
pub const DETAIL_IMAGE_WIDTH: u32 = 800;

/// Fixed field projection requested from the search endpoint.
const SEARCH_FIELDS: &str =
    "id,title,artist_display,image_id,date_start,classification_title,description,dimensions";

/// Client for the two collection API endpoints and the derived image URLs.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    api_base: String,
    image_base: String,
}

impl ApiClient {
    /// Create a client against the default public API.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(DEFAULT_API_BASE, DEFAULT_IMAGE_BASE)
    }

    /// Create a client against custom base URLs.
    ///
    /// No request timeout is configured; a hung request keeps its screen
    /// in the loading state until a new fetch supersedes it.
    pub fn with_base_urls(api_base: impl Into<String>, image_base: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder().timeout(None).build()?;

        Ok(Self {
            http,
            api_base: api_base.into(),
            image_base: image_base.into(),
        })
    }

    /// Search artworks, returning one unfiltered page of summaries.
    ///
    /// Only the query and the year range are passed to the server; the
    /// year range is re-checked client-side and classification is
    /// filtered client-side only (see [`crate::filters::post_filter`]).
    pub fn search_artworks(&self, filters: &SearchFilters) -> Result<Vec<ArtworkSummary>> {
        let url = format!(
            "{}/artworks/search?{}",
            self.api_base,
            search_query_string(filters)
        );
        tracing::debug!(%url, "fetching search results");

        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let response: SearchResponse = serde_json::from_str(&body)?;

        tracing::debug!(count = response.data.len(), "search page received");
        Ok(response.data)
    }

    /// Fetch the full record for a single artwork.
    pub fn artwork_detail(&self, artwork_id: u64) -> Result<ArtworkDetail> {
        let url = format!("{}/artworks/{}", self.api_base, artwork_id);
        tracing::debug!(%url, "fetching artwork detail");

        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let response: DetailResponse = serde_json::from_str(&body)?;

        Ok(response.data)
    }

    /// Image URL for a result list thumbnail.
    pub fn thumbnail_url(&self, image_id: &str) -> String {
        self.image_url(image_id, THUMBNAIL_WIDTH)
    }

    /// Image URL for the detail view.
    pub fn detail_image_url(&self, image_id: &str) -> String {
        self.image_url(image_id, DETAIL_IMAGE_WIDTH)
    }

    fn image_url(&self, image_id: &str, width: u32) -> String {
        format!("{}/{}/full/{},/0/default.jpg", self.image_base, image_id, width)
    }
}

/// Build the search endpoint query string for a filter set.
///
/// The year range is forwarded only when both ends are present. Artist
/// and classification are never forwarded: artist is inert, and
/// classification is applied after the fetch.
fn search_query_string(filters: &SearchFilters) -> String {
    let mut params = vec![format!("q={}", urlencoding::encode(&filters.query))];

    if let (Some(from), Some(to)) = (filters.date_from, filters.date_to) {
        params.push(format!("date_start={from}&date_end={to}"));
    }

    params.push(format!("limit={PAGE_SIZE}"));
    params.push(format!("fields={SEARCH_FIELDS}"));

    params.join("&")
}
