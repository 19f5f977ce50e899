//! Results feature - fetching and listing matching artworks.
//!
//! This module owns the results screen's state: the filter set it was
//! opened with, one page of fetched-and-post-filtered artworks, and the
//! list cursor. The fetch itself runs on a background worker; a failed
//! fetch degrades to an empty list, indistinguishable from no matches.

pub mod ui;

use crate::api::{ApiClient, ArtworkSummary};
use crate::fetch::Fetcher;
use crate::filters::{post_filter, SearchFilters};

/// Results screen state.
#[derive(Debug)]
pub struct ResultsState {
    /// The filter set currently shown.
    pub filters: Option<SearchFilters>,
    /// Post-filtered artworks of the last completed fetch.
    pub items: Vec<ArtworkSummary>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    cursor: usize,
    scroll: usize,
    fetcher: Fetcher<Vec<ArtworkSummary>>,
}

impl ResultsState {
    /// Create an empty results state.
    pub fn new() -> Self {
        Self {
            filters: None,
            items: Vec::new(),
            loading: false,
            cursor: 0,
            scroll: 0,
            fetcher: Fetcher::new(),
        }
    }

    /// Apply a filter set, fetching when it changes the result set.
    ///
    /// A fetch starts when there is no current filter set or when a
    /// fetch-relevant field (query, classification, year range) changed.
    /// An artist-only change just replaces the held filters: artist
    /// affects neither the remote query nor the post-filter.
    pub fn apply_filters(&mut self, filters: SearchFilters, client: &ApiClient) {
        let needs_fetch = match &self.filters {
            Some(current) => filters.refetch_needed(current),
            None => true,
        };

        self.filters = Some(filters.clone());
        if !needs_fetch {
            return;
        }

        self.items.clear();
        self.cursor = 0;
        self.scroll = 0;
        self.loading = true;

        let client = client.clone();
        let token = self
            .fetcher
            .spawn(move || client.search_artworks(&filters).map(|page| post_filter(&filters, page)));
        tracing::debug!(?token, "search started");
    }

    /// Poll the in-flight fetch.
    ///
    /// Returns the result count when a fetch completed this tick. A
    /// failed fetch is logged and shown as an empty result list.
    pub fn poll(&mut self) -> Option<usize> {
        let outcome = self.fetcher.poll()?;
        self.loading = false;

        match outcome {
            Ok(items) => self.items = items,
            Err(err) => {
                tracing::error!("search request failed: {err}");
                self.items = Vec::new();
            },
        }

        self.cursor = 0;
        self.scroll = 0;
        Some(self.items.len())
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Go to the first artwork.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Go to the last artwork.
    pub fn goto_last(&mut self) {
        if !self.items.is_empty() {
            self.cursor = self.items.len() - 1;
        }
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the scroll offset.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Get the currently selected artwork.
    pub fn current(&self) -> Option<&ArtworkSummary> {
        self.items.get(self.cursor)
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}
