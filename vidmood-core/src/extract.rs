//! Video identifier extraction from YouTube URLs.
//!
//! Two host patterns are recognized: the short-link host `youtu.be`, where
//! the identifier is the first path segment, and the canonical host
//! `youtube.com` (with or without `www`), where the identifier is the `v`
//! query parameter. Everything else yields the invalid marker.
//!
//! Pure functions, no network, deterministic.

use url::Url;

use crate::types::UrlEntry;

/// Extracts the video identifier from a single URL string.
///
/// The input is trimmed before parsing. Returns `None` for unrecognized
/// hosts, for recognized hosts missing the expected path/query component,
/// and for strings that do not parse as absolute URLs. A returned
/// identifier is never empty.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    match parsed.host_str()? {
        "youtu.be" => {
            let segment = parsed.path_segments()?.next()?;
            (!segment.is_empty()).then(|| segment.to_owned())
        }
        "youtube.com" | "www.youtube.com" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty()),
        _ => None,
    }
}

/// Parses a newline-separated block of URLs into ordered entries.
///
/// Each line is trimmed; blank lines are skipped. Input order is preserved
/// and duplicates are kept as independent entries keyed by the literal
/// trimmed string, so the caller can report each occurrence individually.
pub fn extract_video_ids(input: &str) -> Vec<UrlEntry> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| UrlEntry {
            url: line.to_owned(),
            video_id: extract_video_id(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_uses_first_path_segment() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123"),
            Some("abc123".to_owned())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?t=42"),
            Some("abc123".to_owned())
        );
    }

    #[test]
    fn canonical_host_uses_v_parameter() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=xyz789"),
            Some("xyz789".to_owned())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=xyz789"),
            Some("xyz789".to_owned())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL1&v=xyz789&t=10"),
            Some("xyz789".to_owned())
        );
    }

    #[test]
    fn unrecognized_host_is_invalid() {
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=abc"), None);
    }

    #[test]
    fn missing_component_is_invalid() {
        // Canonical host without a v parameter.
        assert_eq!(extract_video_id("https://www.youtube.com/watch"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        // Short-link host with an empty path.
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn non_url_text_is_invalid() {
        assert_eq!(extract_video_id("notaurl"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            extract_video_id("  https://youtu.be/abc123  "),
            Some("abc123".to_owned())
        );
    }

    #[test]
    fn multi_line_input_preserves_order_and_duplicates() {
        let input = "https://youtu.be/abc123\n\n  https://www.youtube.com/watch?v=xyz789\nnotaurl\nhttps://youtu.be/abc123";
        let entries = extract_video_ids(input);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].video_id.as_deref(), Some("abc123"));
        assert_eq!(entries[1].video_id.as_deref(), Some("xyz789"));
        assert_eq!(entries[1].url, "https://www.youtube.com/watch?v=xyz789");
        assert_eq!(entries[2].video_id, None);
        // Duplicate URL stays as its own entry.
        assert_eq!(entries[3].video_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let input = "https://youtu.be/abc123\nnotaurl";
        assert_eq!(extract_video_ids(input), extract_video_ids(input));
    }
}
