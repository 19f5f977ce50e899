//! Search filters and client-side post-filtering.
//!
//! A [`SearchFilters`] value is built once when the search form is
//! submitted and handed to the results screen as its only input. Each
//! optional filter is an explicit present/absent variant: a toggled-off
//! filter group is `None`, which downstream code treats differently from
//! an empty string.

use crate::api::ArtworkSummary;

/// The closed set of artwork classifications offered by the search form.
///
/// The collection API knows many more labels; these eleven are the ones
/// the form exposes, and classification filtering is restricted to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Ceramic works.
    Ceramic,
    /// Costumes and textiles.
    Costume,
    /// Drawings.
    Drawing,
    /// Furniture.
    Furniture,
    /// Modern and contemporary art.
    ModernAndContemporaryArt,
    /// Oil on canvas.
    OilOnCanvas,
    /// Paintings.
    Painting,
    /// Photographs.
    Photography,
    /// Prints.
    Print,
    /// Sculptures.
    Sculpture,
    /// Watercolors.
    Watercolor,
}

impl Classification {
    /// All selectable classifications, in display order.
    pub const ALL: [Classification; 11] = [
        Classification::Ceramic,
        Classification::Costume,
        Classification::Drawing,
        Classification::Furniture,
        Classification::ModernAndContemporaryArt,
        Classification::OilOnCanvas,
        Classification::Painting,
        Classification::Photography,
        Classification::Print,
        Classification::Sculpture,
        Classification::Watercolor,
    ];

    /// The display label, as the remote API spells it.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Ceramic => "Ceramic",
            Classification::Costume => "Costume",
            Classification::Drawing => "Drawing",
            Classification::Furniture => "Furniture",
            Classification::ModernAndContemporaryArt => "Modern and Contemporary Art",
            Classification::OilOnCanvas => "Oil on Canvas",
            Classification::Painting => "Painting",
            Classification::Photography => "Photography",
            Classification::Print => "Print",
            Classification::Sculpture => "Sculpture",
            Classification::Watercolor => "Watercolor",
        }
    }

    /// Case-insensitive exact match against a record's classification title.
    pub fn matches_title(self, title: &str) -> bool {
        title.eq_ignore_ascii_case(self.label())
    }
}

/// Filter set produced by the search form.
///
/// `query` is always non-empty and trimmed. The optional fields are
/// `None` when their filter group was toggled off at submit time.
/// An inverted year range is not validated; it silently filters
/// everything out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Free-text search query.
    pub query: String,
    /// Artist filter text. Collected but inert: never sent upstream and
    /// never applied client-side.
    pub artist: Option<String>,
    /// Classification to keep, matched case-insensitively after fetch.
    pub classification: Option<Classification>,
    /// Keep records whose start year is at least this.
    pub date_from: Option<i32>,
    /// Keep records whose start year is at most this.
    pub date_to: Option<i32>,
}

impl SearchFilters {
    /// Create a filter set with only a query.
    pub fn query_only(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            artist: None,
            classification: None,
            date_from: None,
            date_to: None,
        }
    }

    /// Whether switching from `current` to `self` requires a new fetch.
    ///
    /// The artist field is deliberately excluded: it affects neither the
    /// remote query nor the post-filter, so an artist-only change must
    /// not re-enter the loading state.
    pub fn refetch_needed(&self, current: &SearchFilters) -> bool {
        self.query != current.query
            || self.classification != current.classification
            || self.date_from != current.date_from
            || self.date_to != current.date_to
    }
}

/// Apply client-side post-filtering to one fetched page of results.
///
/// The remote search cannot be trusted to filter on these fields, so the
/// year range and classification are re-checked here. Each filter is
/// independently optional; records missing the compared field are
/// excluded by the comparison itself.
pub fn post_filter(filters: &SearchFilters, mut artworks: Vec<ArtworkSummary>) -> Vec<ArtworkSummary> {
    if let Some(from) = filters.date_from {
        artworks.retain(|art| art.date_start.is_some_and(|year| year >= from));
    }

    if let Some(to) = filters.date_to {
        artworks.retain(|art| art.date_start.is_some_and(|year| year <= to));
    }

    if let Some(classification) = filters.classification {
        artworks.retain(|art| {
            art.classification_title
                .as_deref()
                .is_some_and(|title| classification.matches_title(title))
        });
    }

    artworks
}
