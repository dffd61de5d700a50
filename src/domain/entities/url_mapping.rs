//! Url mapping entity.

/// A stored association between a short code and the original URL.
///
/// Mappings are created once and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short: String,
    pub original: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(short: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            original: original.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new("abcdefg", "http://test.com/abc");

        assert_eq!(mapping.short, "abcdefg");
        assert_eq!(mapping.original, "http://test.com/abc");
    }
}
