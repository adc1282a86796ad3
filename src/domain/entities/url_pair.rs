//! URL pair entity representing a shortened URL mapping.

/// The mapping between an original URL and its short code.
///
/// Both fields are immutable once stored: a pair is only ever inserted or
/// read, never updated. The repository is the sole authority over persisted
/// pairs; everything else holds transient copies returned from store calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPair {
    pub original: String,
    pub short_code: String,
}

impl UrlPair {
    /// Creates a new URL pair.
    pub fn new(original: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pair() {
        let pair = UrlPair::new("https://example.com/page", "Ab3dE7gHij");
        assert_eq!(pair.original, "https://example.com/page");
        assert_eq!(pair.short_code, "Ab3dE7gHij");
    }
}
