//! Domain types for representing extracted lecture content.

use serde::{Deserialize, Serialize};

/// Lecture number used when no `# Lecture N:` heading is found.
pub const UNKNOWN_LECTURE_NUMBER: &str = "?";

/// Lecture title used when no `# Lecture N:` heading is found.
pub const UNTITLED_LECTURE: &str = "Untitled Lecture";

/// Duration used when no `Duration:` line is found.
pub const UNKNOWN_DURATION: &str = "Unknown";

/// Slide title used when a section has no recognizable title block.
pub const UNTITLED_SLIDE: &str = "Untitled Slide";

/// Structured content of one lecture document.
///
/// Produced once per input file by the extractor and never mutated
/// afterwards; the deck builder consumes it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureRecord {
    /// Lecture number as written in the heading, or [`UNKNOWN_LECTURE_NUMBER`].
    pub number: String,

    /// Lecture title, or [`UNTITLED_LECTURE`].
    pub title: String,

    /// Stated duration, or [`UNKNOWN_DURATION`].
    pub duration: String,

    /// Slide records in document order.
    pub slides: Vec<SlideRecord>,
}

impl LectureRecord {
    /// Create an empty record with all fields at their sentinel defaults.
    pub fn untitled() -> Self {
        Self {
            number: UNKNOWN_LECTURE_NUMBER.to_string(),
            title: UNTITLED_LECTURE.to_string(),
            duration: UNKNOWN_DURATION.to_string(),
            slides: Vec::new(),
        }
    }

    /// Number of slide sections extracted from the document.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Content of one slide section within a lecture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Slide title, or [`UNTITLED_SLIDE`].
    pub title: String,

    /// Bullet lines in source order, marker and surrounding whitespace
    /// stripped. May be empty.
    pub bullets: Vec<String>,

    /// Speaker narration, verbatim. Empty when the document has none.
    pub narration: String,
}

impl SlideRecord {
    /// Create a slide record with default title and no content.
    pub fn untitled() -> Self {
        Self {
            title: UNTITLED_SLIDE.to_string(),
            bullets: Vec::new(),
            narration: String::new(),
        }
    }

    /// Whether this slide carries narration for speaker notes.
    pub fn has_narration(&self) -> bool {
        !self.narration.is_empty()
    }
}
