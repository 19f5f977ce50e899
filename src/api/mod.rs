//! Collection API access.
//!
//! This module talks to the remote museum collection API and represents
//! its responses as typed records.

mod client;
mod types;

pub use client::{
    ApiClient, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DETAIL_IMAGE_WIDTH, PAGE_SIZE,
    THUMBNAIL_WIDTH,
};
pub use types::{ArtworkDetail, ArtworkSummary, DetailResponse, SearchResponse};
