//! Card Display Helpers

use tmdb_catalog::Endpoints;

/// Characters of synopsis shown on a card before truncation
pub const OVERVIEW_LIMIT: usize = 100;
pub const NO_OVERVIEW: &str = "No description available.";
/// Shipped in `public/`, used when a movie has no poster
pub const POSTER_PLACEHOLDER: &str = "/poster-placeholder.svg";

/// Synopsis as shown on a card: first 100 characters plus `...` when longer,
/// the fallback text when absent or empty
pub fn card_overview(overview: Option<&str>) -> String {
    match overview {
        Some(text) if !text.is_empty() => match text.char_indices().nth(OVERVIEW_LIMIT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        },
        _ => NO_OVERVIEW.to_string(),
    }
}

/// Poster image source, falling back to the local placeholder
pub fn poster_src(endpoints: &Endpoints, poster_path: Option<&str>) -> String {
    endpoints
        .poster_url(poster_path)
        .unwrap_or_else(|| POSTER_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_overview_unchanged() {
        assert_eq!(card_overview(Some("A short synopsis.")), "A short synopsis.");
    }

    #[test]
    fn test_exactly_limit_unchanged() {
        let text = "x".repeat(OVERVIEW_LIMIT);
        assert_eq!(card_overview(Some(&text)), text);
    }

    #[test]
    fn test_long_overview_truncated() {
        let text = format!("{}{}", "a".repeat(OVERVIEW_LIMIT), "tail");
        assert_eq!(card_overview(Some(&text)), format!("{}...", "a".repeat(OVERVIEW_LIMIT)));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(OVERVIEW_LIMIT + 1);
        let shown = card_overview(Some(&text));
        assert_eq!(shown, format!("{}...", "é".repeat(OVERVIEW_LIMIT)));
        assert_eq!(shown.chars().count(), OVERVIEW_LIMIT + 3);
    }

    #[test]
    fn test_missing_overview_fallback() {
        assert_eq!(card_overview(None), NO_OVERVIEW);
        assert_eq!(card_overview(Some("")), NO_OVERVIEW);
    }

    #[test]
    fn test_poster_src() {
        let endpoints = Endpoints::new("k");
        assert_eq!(
            poster_src(&endpoints, Some("/p.jpg")),
            "https://image.tmdb.org/t/p/w500/p.jpg"
        );
        assert_eq!(poster_src(&endpoints, None), POSTER_PLACEHOLDER);
    }
}
