//! Typed records for the collection API responses.
//!
//! Both endpoints wrap their payload in a `data` field. Every field the
//! API may omit is optional here; display code substitutes placeholders,
//! it never fails on a missing field.

use serde::Deserialize;

/// Response envelope of the artwork search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// One page of matching artworks.
    #[serde(default)]
    pub data: Vec<ArtworkSummary>,
}

/// Response envelope of the artwork-by-id endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    /// The requested artwork.
    pub data: ArtworkDetail,
}

/// One artwork as returned by the search endpoint's field projection.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkSummary {
    /// Unique artwork identifier.
    pub id: u64,
    /// Artwork title.
    #[serde(default)]
    pub title: String,
    /// Artist attribution line.
    #[serde(default)]
    pub artist_display: String,
    /// Opaque image identifier, when an image exists.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Year the work was started.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Classification label, when assigned.
    #[serde(default)]
    pub classification_title: Option<String>,
}

/// Full record of a single artwork.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkDetail {
    /// Artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Artist attribution line.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Opaque image identifier, when an image exists.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Year the work was started.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Free-text description; may embed markup.
    #[serde(default)]
    pub description: Option<String>,
    /// Medium line, e.g. "Oil on canvas".
    #[serde(default)]
    pub medium_display: Option<String>,
    /// Physical dimensions line.
    #[serde(default)]
    pub dimensions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_page() {
        let body = r#"{
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "artist_display": "Georges Seurat\nFrench, 1859-1891",
                    "image_id": "1adf2696-8489-499b-cad2-821d7fde4b33",
                    "date_start": 1884,
                    "classification_title": "Painting"
                },
                {
                    "id": 111628,
                    "title": "Untitled",
                    "artist_display": ""
                }
            ]
        }"#;

        let page: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 27992);
        assert_eq!(page.data[0].date_start, Some(1884));
        assert_eq!(page.data[1].image_id, None);
        assert_eq!(page.data[1].classification_title, None);
    }

    #[test]
    fn parses_empty_page() {
        let page: SearchResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn parses_detail_with_missing_fields() {
        let body = r#"{
            "data": {
                "title": "The Bedroom",
                "artist_display": "Vincent van Gogh",
                "date_start": 1889,
                "description": "<p>Van Gogh's bedroom at Arles.</p>"
            }
        }"#;

        let detail: DetailResponse = serde_json::from_str(body).unwrap();

        assert_eq!(detail.data.title.as_deref(), Some("The Bedroom"));
        assert_eq!(detail.data.medium_display, None);
        assert_eq!(detail.data.dimensions, None);
        assert_eq!(detail.data.image_id, None);
    }

    #[test]
    fn ignores_unprojected_fields() {
        let body = r#"{
            "data": [
                {"id": 1, "title": "A", "is_boosted": true, "thumbnail": {"width": 10}}
            ]
        }"#;

        let page: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.data[0].title, "A");
    }
}
