//! Three-way classification of an image reference.

use std::fmt;

/// Why a reference is returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassthroughReason {
    /// Already points at the resizing proxy.
    AlreadyProxied,
    /// Served from the application's own lesson-image path.
    LocalPath,
}

/// What the rewriter will do with a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Placeholder,
    Passthrough(PassthroughReason),
    Rewrite,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Placeholder => write!(f, "placeholder"),
            Classification::Passthrough(PassthroughReason::AlreadyProxied) => {
                write!(f, "proxied")
            }
            Classification::Passthrough(PassthroughReason::LocalPath) => write!(f, "local"),
            Classification::Rewrite => write!(f, "rewrite"),
        }
    }
}

/// Classifies non-empty text by plain substring match on the two markers.
///
/// The proxy marker is checked first; a reference matching both reports
/// `AlreadyProxied`. Matches are not anchored, so a query value that merely
/// contains a marker also passes through.
pub fn classify_text(text: &str, proxy_marker: &str, local_marker: &str) -> Classification {
    if text.contains(proxy_marker) {
        Classification::Passthrough(PassthroughReason::AlreadyProxied)
    } else if text.contains(local_marker) {
        Classification::Passthrough(PassthroughReason::LocalPath)
    } else {
        Classification::Rewrite
    }
}
