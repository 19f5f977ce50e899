//! Utility functions for Museo.

use unicode_width::UnicodeWidthChar;

use crate::api::{ArtworkDetail, ArtworkSummary};

/// Strip markup tags from a text field.
///
/// A small scanner that tracks tag boundaries: everything from a `<` to
/// the next `>` is dropped, everything outside is kept. Best effort by
/// design; entities are not decoded, and a literal `<` with no closing
/// `>` swallows the rest of the string.
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {},
            _ => output.push(ch),
        }
    }

    output
}

/// Truncate a string to a maximum display width, appending an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one column for the ellipsis.
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut truncated = String::new();

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }

    truncated.push('…');
    truncated
}

/// Compose the clipboard text for a result list entry.
pub fn artwork_summary_text(artwork: &ArtworkSummary, thumbnail_url: Option<&str>) -> String {
    let mut text = format!("Artwork: {}\n", artwork.title);
    text.push_str(&format!("Id: {}\n", artwork.id));

    if !artwork.artist_display.is_empty() {
        text.push_str(&format!("Artist: {}\n", artwork.artist_display));
    }

    if let Some(year) = artwork.date_start {
        text.push_str(&format!("Year: {}\n", year));
    }

    if let Some(ref classification) = artwork.classification_title {
        text.push_str(&format!("Classification: {}\n", classification));
    }

    if let Some(url) = thumbnail_url {
        text.push_str(&format!("Thumbnail: {}\n", url));
    }

    text
}

/// Compose the clipboard text for a detail view.
pub fn artwork_detail_text(detail: &ArtworkDetail, image_url: Option<&str>) -> String {
    let mut text = String::new();

    if let Some(ref title) = detail.title {
        text.push_str(&format!("Artwork: {}\n", title));
    }

    if let Some(ref artist) = detail.artist_display {
        text.push_str(&format!("Artist: {}\n", artist));
    }

    if let Some(year) = detail.date_start {
        text.push_str(&format!("Year: {}\n", year));
    }

    if let Some(ref medium) = detail.medium_display {
        text.push_str(&format!("Medium: {}\n", medium));
    }

    if let Some(ref dimensions) = detail.dimensions {
        text.push_str(&format!("Dimensions: {}\n", dimensions));
    }

    if let Some(url) = image_url {
        text.push_str(&format!("Image: {}\n", url));
    }

    if let Some(ref description) = detail.description {
        text.push_str(&format!("\n{}\n", strip_tags(description)));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<p>Oil on canvas</p>"), "Oil on canvas");
    }

    #[test]
    fn strips_tags_with_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.org">a link</a> and <em>emphasis</em>"#),
            "a link and emphasis"
        );
    }

    #[test]
    fn keeps_text_without_tags() {
        assert_eq!(strip_tags("plain text"), "plain text");
    }

    #[test]
    fn keeps_bare_closing_angle() {
        assert_eq!(strip_tags("3 > 2"), "3 > 2");
    }

    #[test]
    fn unterminated_tag_swallows_the_rest() {
        // Accepted best-effort behavior for malformed input.
        assert_eq!(strip_tags("size < 10 works"), "size ");
    }

    #[test]
    fn entities_are_not_decoded() {
        assert_eq!(strip_tags("<p>black &amp; white</p>"), "black &amp; white");
    }

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("abcd", 4), "abcd");
    }

    #[test]
    fn summary_text_skips_absent_fields() {
        let artwork = ArtworkSummary {
            id: 42,
            title: "Untitled".to_string(),
            artist_display: String::new(),
            image_id: None,
            date_start: None,
            classification_title: None,
        };

        let text = artwork_summary_text(&artwork, None);

        assert!(text.contains("Artwork: Untitled"));
        assert!(text.contains("Id: 42"));
        assert!(!text.contains("Artist:"));
        assert!(!text.contains("Year:"));
        assert!(!text.contains("Thumbnail:"));
    }

    #[test]
    fn detail_text_strips_description_markup() {
        let detail = ArtworkDetail {
            title: Some("The Bedroom".to_string()),
            description: Some("<p>A <em>bedroom</em>.</p>".to_string()),
            ..Default::default()
        };

        let text = artwork_detail_text(&detail, Some("http://img/1.jpg"));

        assert!(text.contains("A bedroom."));
        assert!(!text.contains('<'));
        assert!(text.contains("Image: http://img/1.jpg"));
    }
}
