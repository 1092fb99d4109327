//! Slug normalization.
//!
//! Slugs are the natural keys of most content entities; every writer in the
//! platform must produce them the same way or upserts stop matching.

/// Converts free text into a URL-safe slug.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every other run of
/// characters into a single hyphen. Leading and trailing hyphens are
/// stripped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("B2B -- SaaS & Fintech!"), "b2b-saas-fintech");
    }

    #[test]
    fn test_leading_trailing_stripped() {
        assert_eq!(slugify("  Growth  "), "growth");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_already_slugged_is_stable() {
        assert_eq!(slugify("quarterly-market-report"), "quarterly-market-report");
    }
}
