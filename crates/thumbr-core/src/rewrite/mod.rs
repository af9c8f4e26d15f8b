//! Image URL rewriting.
//!
//! Routes remote image references through the resizing proxy, leaves local
//! and already-proxied references alone, and falls back to a placeholder
//! image for anything missing or unusable. Pure and synchronous; an
//! [`ImageRewriter`] can be shared across threads by reference.

mod classify;
mod encode;
mod input;

pub use classify::{classify_text, Classification, PassthroughReason};
pub use encode::encode_component;
pub use input::ImageInput;

use std::sync::OnceLock;

use crate::config::RewriterConfig;
use crate::error::RewriteError;

/// Rewriter bound to a validated policy.
#[derive(Debug, Clone)]
pub struct ImageRewriter {
    cfg: RewriterConfig,
}

impl Default for ImageRewriter {
    fn default() -> Self {
        Self {
            cfg: RewriterConfig::default(),
        }
    }
}

impl ImageRewriter {
    pub fn new(cfg: RewriterConfig) -> Result<Self, RewriteError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    #[cfg(test)]
    fn unchecked(cfg: RewriterConfig) -> Self {
        Self { cfg }
    }

    /// Decides which branch `optimize` takes for `input` without building anything.
    pub fn classify<'a>(&self, input: impl Into<ImageInput<'a>>) -> Classification {
        match input.into().as_text() {
            None => Classification::Placeholder,
            Some(text) => classify_text(text, &self.cfg.proxy_marker, &self.cfg.local_marker),
        }
    }

    /// Builds the proxy URL for `url` without any classification.
    ///
    /// Fails with [`RewriteError::Encoding`] if the assembled URL does not parse.
    pub fn try_rewrite(&self, url: &str) -> Result<String, RewriteError> {
        let encoded = encode_component(url);
        let out = format!(
            "{}?url={}&w={}&q={}",
            self.cfg.proxy_base, encoded, self.cfg.width, self.cfg.quality
        );
        url::Url::parse(&out).map_err(|_| RewriteError::Encoding {
            input_len: url.len(),
        })?;
        Ok(out)
    }

    /// Returns the URL to render for `input`: the placeholder, the input
    /// unchanged, or a proxy URL. Never fails.
    pub fn optimize<'a>(&self, input: impl Into<ImageInput<'a>>) -> String {
        let input = input.into();
        match (self.classify(input), input.as_text()) {
            (Classification::Rewrite, Some(text)) => match self.try_rewrite(text) {
                Ok(out) => {
                    tracing::debug!(input = text, output = %out, "rewrote image url");
                    out
                }
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to placeholder");
                    self.cfg.placeholder.clone()
                }
            },
            (Classification::Passthrough(reason), Some(text)) => {
                tracing::trace!(input = text, ?reason, "image url passed through");
                text.to_string()
            }
            _ => {
                tracing::trace!(?input, "missing or non-text image reference");
                self.cfg.placeholder.clone()
            }
        }
    }
}

fn default_rewriter() -> &'static ImageRewriter {
    static DEFAULT: OnceLock<ImageRewriter> = OnceLock::new();
    DEFAULT.get_or_init(ImageRewriter::default)
}

/// Rewrites an optional image reference with the built-in weserv policy
/// (480px wide, quality 80).
///
/// # Examples
///
/// - `optimize_image(None)` → the placeholder URL
/// - `optimize_image(Some("https://example.com/a.jpg"))` →
///   `"https://images.weserv.nl/?url=https%3A%2F%2Fexample.com%2Fa.jpg&w=480&q=80"`
/// - `optimize_image(Some("/lesson-images/foo.png"))` → unchanged
pub fn optimize_image(url: Option<&str>) -> String {
    default_rewriter().optimize(url)
}

/// Like [`optimize_image`] for an arbitrary JSON value; non-strings get the placeholder.
pub fn optimize_image_value(value: &serde_json::Value) -> String {
    default_rewriter().optimize(value)
}
