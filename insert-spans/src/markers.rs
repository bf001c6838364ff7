//! Slot markers and detection of markers already present in a document

use regex::Regex;
use std::sync::LazyLock;

/// A named slot that receives a marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Video slot, placed before the first second-level heading
    Video,
    /// First ad slot, near 40% of the paragraph boundaries
    Ad1,
    /// Second ad slot, near 80% of the paragraph boundaries
    Ad2,
}

impl Slot {
    /// Literal marker line inserted for this slot
    pub fn tag(self) -> &'static str {
        match self {
            Slot::Video => r#"<span id="video-slot"></span>"#,
            Slot::Ad1 => r#"<span id="ad-slot-1"></span>"#,
            Slot::Ad2 => r#"<span id="ad-slot-2"></span>"#,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Video => write!(f, "video-slot"),
            Slot::Ad1 => write!(f, "ad-slot-1"),
            Slot::Ad2 => write!(f, "ad-slot-2"),
        }
    }
}

// ad-slot-3 is recognised even though nothing inserts it.
static EXISTING_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<span\s+id="(?:video-slot|ad-slot-[123])""#).expect("valid regex")
});

/// Whether `content` already carries a video or ad slot marker
pub fn has_existing_markers(content: &str) -> bool {
    EXISTING_MARKER_RE.is_match(content)
}
