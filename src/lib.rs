//! Museo - a terminal-based museum collection browser.
//!
//! Museo provides an interactive terminal interface for searching and
//! browsing artworks from the Art Institute of Chicago collection API,
//! with vim-style keyboard navigation across three screens: a search
//! form with optional filter groups, a results list, and an artwork
//! detail view.
//!
//! # Features
//!
//! - Free-text artwork search with classification and year-range filters
//! - Client-side post-filtering of fetched result pages
//! - Background fetches that never let a stale response overwrite a newer one
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use museo::api::ApiClient;
//! use museo::filters::SearchFilters;
//!
//! // Search the collection
//! let client = ApiClient::new()?;
//! let artworks = client.search_artworks(&SearchFilters::query_only("water lilies"))?;
//! println!("found {} artworks", artworks.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod clipboard;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod results;
pub mod search_form;
pub mod shared;
pub mod ui;
pub mod util;

pub use error::{MuseoError, Result};
