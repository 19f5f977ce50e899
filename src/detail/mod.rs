//! Detail feature - fetching and formatting one full artwork record.
//!
//! Given an artwork id, this module fetches the full record, derives the
//! display image URL when an image exists, and formats each field with
//! its placeholder fallback. A failed fetch lands in the same terminal
//! "No Details found." state as an empty response.

pub mod ui;

use crate::api::{ApiClient, ArtworkDetail};
use crate::fetch::Fetcher;
use crate::util::strip_tags;

/// Detail screen state.
#[derive(Debug)]
pub struct DetailState {
    /// Id of the artwork being shown.
    pub artwork_id: u64,
    /// The fetched record, once available.
    pub detail: Option<ArtworkDetail>,
    /// Whether the fetch is in flight.
    pub loading: bool,
    /// Vertical scroll offset of the detail text.
    pub scroll: u16,
    fetcher: Fetcher<ArtworkDetail>,
}

impl DetailState {
    /// Open the detail screen for an artwork and start its fetch.
    pub fn open(artwork_id: u64, client: &ApiClient) -> Self {
        let mut state = Self {
            artwork_id,
            detail: None,
            loading: true,
            scroll: 0,
            fetcher: Fetcher::new(),
        };

        let client = client.clone();
        let token = state.fetcher.spawn(move || client.artwork_detail(artwork_id));
        tracing::debug!(artwork_id, ?token, "detail fetch started");

        state
    }

    /// Poll the in-flight fetch.
    ///
    /// Returns true when the fetch completed this tick. Failures are
    /// logged and leave `detail` empty.
    pub fn poll(&mut self) -> bool {
        let Some(outcome) = self.fetcher.poll() else {
            return false;
        };
        self.loading = false;

        match outcome {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => {
                tracing::error!(artwork_id = self.artwork_id, "detail request failed: {err}");
                self.detail = None;
            },
        }

        true
    }

    /// Scroll the detail text down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(2);
    }

    /// Scroll the detail text up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(2);
    }
}

/// Title line, or its placeholder.
pub fn title_text(detail: &ArtworkDetail) -> String {
    match &detail.title {
        Some(title) => title.clone(),
        None => "No Title available".to_string(),
    }
}

/// Artist line, or its placeholder.
pub fn artist_text(detail: &ArtworkDetail) -> String {
    match &detail.artist_display {
        Some(artist) => format!("Artist: {artist}"),
        None => "No Artist available".to_string(),
    }
}

/// Year line, or its placeholder.
pub fn year_text(detail: &ArtworkDetail) -> String {
    match detail.date_start {
        Some(year) => format!("Year: {year}"),
        None => "No date available".to_string(),
    }
}

/// Description with markup stripped, or its placeholder.
pub fn description_text(detail: &ArtworkDetail) -> String {
    match &detail.description {
        Some(description) => format!("Description: {}", strip_tags(description)),
        None => "No description available".to_string(),
    }
}

/// Medium line, or its placeholder.
pub fn medium_text(detail: &ArtworkDetail) -> String {
    match &detail.medium_display {
        Some(medium) => format!("Medium: {medium}"),
        None => "No medium information available".to_string(),
    }
}

/// Dimensions line, or its placeholder.
pub fn dimensions_text(detail: &ArtworkDetail) -> String {
    match &detail.dimensions {
        Some(dimensions) => format!("Dimensions: {dimensions}"),
        None => "No dimensions available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_its_placeholder() {
        let empty = ArtworkDetail::default();

        assert_eq!(title_text(&empty), "No Title available");
        assert_eq!(artist_text(&empty), "No Artist available");
        assert_eq!(year_text(&empty), "No date available");
        assert_eq!(description_text(&empty), "No description available");
        assert_eq!(medium_text(&empty), "No medium information available");
        assert_eq!(dimensions_text(&empty), "No dimensions available");
    }

    #[test]
    fn description_is_rendered_without_tags() {
        let detail = ArtworkDetail {
            description: Some("<p>Oil on canvas</p>".to_string()),
            ..Default::default()
        };

        assert_eq!(description_text(&detail), "Description: Oil on canvas");
    }

    #[test]
    fn present_fields_are_labeled() {
        let detail = ArtworkDetail {
            title: Some("The Bedroom".to_string()),
            artist_display: Some("Vincent van Gogh".to_string()),
            date_start: Some(1889),
            medium_display: Some("Oil on canvas".to_string()),
            dimensions: Some("73.6 × 92.3 cm".to_string()),
            ..Default::default()
        };

        assert_eq!(title_text(&detail), "The Bedroom");
        assert_eq!(artist_text(&detail), "Artist: Vincent van Gogh");
        assert_eq!(year_text(&detail), "Year: 1889");
        assert_eq!(medium_text(&detail), "Medium: Oil on canvas");
        assert_eq!(dimensions_text(&detail), "Dimensions: 73.6 × 92.3 cm");
    }

    #[test]
    fn failed_fetch_ends_in_no_details_state() {
        let client = ApiClient::with_base_urls("http://127.0.0.1:1", "http://127.0.0.1:1").unwrap();
        let mut state = DetailState::open(7, &client);
        assert!(state.loading);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while !state.poll() {
            assert!(std::time::Instant::now() < deadline, "fetch never completed");
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(!state.loading);
        assert!(state.detail.is_none());
    }
}
