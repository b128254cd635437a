//! Lecture markdown extraction.
//!
//! Turns one lecture document into a [`LectureRecord`]. The document is
//! first segmented into heading-delimited blocks, then per-block field
//! rules are applied. Extraction is best-effort: every missing pattern
//! degrades to a sentinel default and never aborts the document.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{
    LectureRecord, SlideRecord, UNKNOWN_DURATION, UNKNOWN_LECTURE_NUMBER, UNTITLED_LECTURE,
};

/// `# Lecture N: Title` heading. Number and title are captured together;
/// if either part is missing the whole match fails and both fields
/// default as a unit.
static LECTURE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# Lecture (\d+): (.+)$").unwrap());

/// `Duration: ...` anywhere in a line, capturing to end of line.
static DURATION_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Duration: (.+)$").unwrap());

/// `## Slide N:` heading that opens a slide section.
static SLIDE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^## Slide \d+:").unwrap());

/// Level-2 headings that close the slide-section region of a document.
const SECTION_TERMINATORS: &[&str] = &[
    "## Practice Assignment",
    "## Final",
    "## Downloadable",
    "## Key Takeaways",
];

/// Extractor for lecture markdown documents.
pub struct LectureExtractor;

impl LectureExtractor {
    /// Create a new lecture extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract one [`LectureRecord`] from the full text of a document.
    pub fn extract(&self, content: &str) -> LectureRecord {
        let lines: Vec<&str> = content.lines().collect();

        let (number, title) = extract_lecture_heading(&lines);
        let duration = extract_duration(&lines);

        let slides: Vec<SlideRecord> = slide_sections(&lines)
            .into_iter()
            .map(extract_slide)
            .collect();

        log::debug!(
            "Extracted lecture {} ({} slides)",
            number,
            slides.len()
        );

        LectureRecord {
            number,
            title,
            duration,
            slides,
        }
    }
}

impl Default for LectureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the lecture heading and capture number and title.
fn extract_lecture_heading(lines: &[&str]) -> (String, String) {
    for line in lines {
        if let Some(caps) = LECTURE_HEADING.captures(line) {
            return (caps[1].to_string(), caps[2].trim().to_string());
        }
    }
    (
        UNKNOWN_LECTURE_NUMBER.to_string(),
        UNTITLED_LECTURE.to_string(),
    )
}

/// Find the first `Duration:` line and capture its trailing text.
fn extract_duration(lines: &[&str]) -> String {
    for line in lines {
        if let Some(caps) = DURATION_LINE.captures(line) {
            return caps[1].trim().to_string();
        }
    }
    UNKNOWN_DURATION.to_string()
}

/// Whether this line closes the slide-section region of the document.
fn is_terminator(line: &str) -> bool {
    SECTION_TERMINATORS.iter().any(|t| line.starts_with(t))
}

/// Segment the document into non-overlapping slide sections.
///
/// A section starts at a `## Slide N:` heading and runs until the next
/// such heading, a terminator heading, or end of document.
fn slide_sections<'a>(lines: &'a [&'a str]) -> Vec<&'a [&'a str]> {
    let mut sections = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if SLIDE_HEADING.is_match(line) {
            if let Some(s) = start {
                sections.push(&lines[s..idx]);
            }
            start = Some(idx);
        } else if is_terminator(line) {
            if let Some(s) = start.take() {
                sections.push(&lines[s..idx]);
            }
        }
    }

    if let Some(s) = start {
        sections.push(&lines[s..]);
    }

    sections
}

/// One `### `-delimited block within a slide section.
struct Block<'a> {
    /// Heading text with the `### ` marker stripped.
    heading: &'a str,
    /// Lines between this heading and the next one (or section end).
    body: &'a [&'a str],
}

/// Tokenize a slide section into its level-3 blocks.
fn level3_blocks<'a>(section: &'a [&'a str]) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<(usize, &str)> = None;

    for (idx, line) in section.iter().enumerate() {
        if let Some(heading) = line.strip_prefix("### ") {
            if let Some((start, h)) = current {
                blocks.push(Block {
                    heading: h,
                    body: &section[start + 1..idx],
                });
            }
            current = Some((idx, heading.trim()));
        }
    }

    if let Some((start, h)) = current {
        blocks.push(Block {
            heading: h,
            body: &section[start + 1..],
        });
    }

    blocks
}

/// Extract one [`SlideRecord`] from a slide section.
///
/// Each field falls back to its default independently; a section with no
/// recognizable blocks still yields a record.
fn extract_slide(section: &[&str]) -> SlideRecord {
    let blocks = level3_blocks(section);
    let mut slide = SlideRecord::untitled();

    if let Some(title) = blocks
        .iter()
        .find(|b| b.heading.starts_with("Slide Title"))
        .and_then(|b| extract_title(b.body))
    {
        slide.title = title;
    }
    if let Some(block) = blocks.iter().find(|b| b.heading.starts_with("Slide Notes")) {
        slide.narration = extract_narration(block.body);
    }
    if let Some(block) = blocks
        .iter()
        .find(|b| b.heading.starts_with("Bullet Points"))
    {
        slide.bullets = extract_bullets(block.body);
    }

    slide
}

/// First non-blank line of a title block, with surrounding whitespace and
/// straight single/double quotes stripped.
fn extract_title(body: &[&str]) -> Option<String> {
    body.iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .map(|l| l.trim_matches(['"', '\'']).trim().to_string())
        .filter(|l| !l.is_empty())
}

/// Notes block body with leading blank lines skipped, joined and trimmed.
fn extract_narration(body: &[&str]) -> String {
    let start = body
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(body.len());

    body[start..].join("\n").trim().to_string()
}

/// Bullet lines (`- ` prefix) of a bullets block, marker stripped,
/// in source order.
fn extract_bullets(body: &[&str]) -> Vec<String> {
    body.iter()
        .filter_map(|line| line.trim_start().strip_prefix("- "))
        .map(|text| text.trim().to_string())
        .collect()
}
