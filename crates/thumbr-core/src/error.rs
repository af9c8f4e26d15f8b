//! Error type for the rewriter and its configuration.

use thiserror::Error;

/// Failures the rewriter can hit internally.
///
/// `optimize` never surfaces these to its caller (it substitutes the
/// placeholder); they are returned by the fallible building blocks
/// (`try_rewrite`, `RewriterConfig::validate`) so callers can inspect them.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The assembled proxy URL did not parse as a URL.
    #[error("could not encode {input_len}-byte image reference into a proxy URL")]
    Encoding { input_len: usize },
    /// A config value is unusable (empty marker, bad proxy base, out-of-range quality).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = RewriteError::Encoding { input_len: 12 };
        assert_eq!(
            e.to_string(),
            "could not encode 12-byte image reference into a proxy URL"
        );
        let e = RewriteError::InvalidConfig("quality must be 1..=100".into());
        assert_eq!(e.to_string(), "invalid config: quality must be 1..=100");
    }
}
