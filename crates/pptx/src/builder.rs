//! Deck building: maps lecture records onto styled slides.
//!
//! Slide order is fixed: one course title slide, then per lecture a
//! section divider followed by one content slide per slide record.
//! Narration rides along as speaker notes.

use deck_core::{LectureRecord, Result, SlideRecord};

use crate::package::{self, PackagePart};
use crate::parts;
use crate::shapes::{self, emu, Paragraph, TextBox};

/// Fixed course title slide text.
const COURSE_TITLE: &str = "EU AI Act Compliance";
const COURSE_SUBTITLE: &str =
    "Build Audit-Ready Documentation\n\nComplete Course Presentation\n9 Lectures | 27 Slides";

/// Font sizes in hundredths of a point.
const SZ_COURSE_TITLE: u32 = 4400;
const SZ_DIVIDER_TITLE: u32 = 3600;
const SZ_CONTENT_TITLE: u32 = 2800;
const SZ_SUBTITLE: u32 = 2400;
const SZ_DURATION: u32 = 2000;
const SZ_BULLET: u32 = 1800;

/// Color scheme: dark blue titles, two grays for body and duration text.
const COLOR_TITLE: &str = "003366";
const COLOR_BODY: &str = "404040";
const COLOR_DURATION: &str = "606060";

/// Space before/after each bullet paragraph: 6 pt.
const BULLET_SPACING: u32 = 600;

struct SlideEntry {
    xml: Vec<u8>,
    notes: Option<String>,
}

/// Accumulates slides in memory and serializes the finished deck.
pub struct DeckBuilder {
    slides: Vec<SlideEntry>,
}

impl DeckBuilder {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Number of slides added so far.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Append the fixed course title slide.
    pub fn add_title_slide(&mut self) -> Result<()> {
        let boxes = [
            TextBox {
                x: emu(1.0),
                y: emu(2.0),
                cx: emu(8.0),
                cy: emu(1.5),
                paragraphs: vec![Paragraph {
                    text: COURSE_TITLE.to_string(),
                    size: SZ_COURSE_TITLE,
                    bold: true,
                    color: COLOR_TITLE,
                    center: true,
                    spacing: None,
                }],
            },
            TextBox {
                x: emu(1.0),
                y: emu(3.8),
                cx: emu(8.0),
                cy: emu(2.0),
                paragraphs: COURSE_SUBTITLE
                    .split('\n')
                    .map(|line| Paragraph {
                        text: line.to_string(),
                        size: SZ_SUBTITLE,
                        bold: false,
                        color: COLOR_BODY,
                        center: true,
                        spacing: None,
                    })
                    .collect(),
            },
        ];
        self.push_slide(&boxes, None)
    }

    /// Append the section divider slide for one lecture.
    pub fn add_section_divider(&mut self, lecture: &LectureRecord) -> Result<()> {
        let boxes = [
            TextBox {
                x: emu(1.0),
                y: emu(2.5),
                cx: emu(8.0),
                cy: emu(1.5),
                paragraphs: vec![Paragraph {
                    text: format!("Lecture {}: {}", lecture.number, lecture.title),
                    size: SZ_DIVIDER_TITLE,
                    bold: true,
                    color: COLOR_TITLE,
                    center: true,
                    spacing: None,
                }],
            },
            TextBox {
                x: emu(1.0),
                y: emu(4.2),
                cx: emu(8.0),
                cy: emu(0.8),
                paragraphs: vec![Paragraph {
                    text: format!("Duration: {}", lecture.duration),
                    size: SZ_DURATION,
                    bold: false,
                    color: COLOR_DURATION,
                    center: true,
                    spacing: None,
                }],
            },
        ];
        self.push_slide(&boxes, None)
    }

    /// Append one content slide for a slide record of the given lecture.
    pub fn add_content_slide(&mut self, lecture_number: &str, slide: &SlideRecord) -> Result<()> {
        let boxes = [
            TextBox {
                x: emu(0.5),
                y: emu(0.5),
                cx: emu(9.0),
                cy: emu(0.8),
                paragraphs: vec![Paragraph {
                    text: format!("L{}: {}", lecture_number, slide.title),
                    size: SZ_CONTENT_TITLE,
                    bold: true,
                    color: COLOR_TITLE,
                    center: false,
                    spacing: None,
                }],
            },
            TextBox {
                x: emu(0.8),
                y: emu(1.5),
                cx: emu(8.4),
                cy: emu(5.5),
                paragraphs: slide
                    .bullets
                    .iter()
                    .map(|bullet| Paragraph {
                        text: bullet.clone(),
                        size: SZ_BULLET,
                        bold: false,
                        color: COLOR_BODY,
                        center: false,
                        spacing: Some(BULLET_SPACING),
                    })
                    .collect(),
            },
        ];

        let notes = slide.has_narration().then(|| slide.narration.clone());
        self.push_slide(&boxes, notes)
    }

    /// Append the divider and all content slides for one lecture.
    ///
    /// Returns the number of content slides added.
    pub fn add_lecture(&mut self, lecture: &LectureRecord) -> Result<usize> {
        self.add_section_divider(lecture)?;
        for slide in &lecture.slides {
            self.add_content_slide(&lecture.number, slide)?;
        }
        log::debug!(
            "Added lecture {} as 1 divider + {} content slides",
            lecture.number,
            lecture.slides.len()
        );
        Ok(lecture.slides.len())
    }

    fn push_slide(&mut self, boxes: &[TextBox], notes: Option<String>) -> Result<()> {
        let xml = shapes::slide_xml(boxes)?;
        self.slides.push(SlideEntry { xml, notes });
        Ok(())
    }

    /// Assemble the OOXML package and return the .pptx bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let slide_count = self.slides.len();
        let mut package_parts = vec![
            PackagePart::new("_rels/.rels", parts::root_rels()?),
            PackagePart::new("ppt/presentation.xml", parts::presentation(slide_count)?),
            PackagePart::new(
                "ppt/_rels/presentation.xml.rels",
                parts::presentation_rels(slide_count)?,
            ),
            PackagePart::new("ppt/slideMasters/slideMaster1.xml", parts::slide_master()),
            PackagePart::new(
                "ppt/slideMasters/_rels/slideMaster1.xml.rels",
                parts::slide_master_rels()?,
            ),
            PackagePart::new("ppt/slideLayouts/slideLayout1.xml", parts::slide_layout()),
            PackagePart::new(
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
                parts::slide_layout_rels()?,
            ),
            PackagePart::new("ppt/notesMasters/notesMaster1.xml", parts::notes_master()),
            PackagePart::new(
                "ppt/notesMasters/_rels/notesMaster1.xml.rels",
                parts::notes_master_rels()?,
            ),
            PackagePart::new("ppt/theme/theme1.xml", parts::theme()),
        ];

        let mut notes_count = 0usize;
        for (idx, entry) in self.slides.into_iter().enumerate() {
            let slide_number = idx + 1;
            let notes_index = entry.notes.as_ref().map(|_| {
                notes_count += 1;
                notes_count
            });

            package_parts.push(PackagePart::new(
                format!("ppt/slides/slide{slide_number}.xml"),
                entry.xml,
            ));
            package_parts.push(PackagePart::new(
                format!("ppt/slides/_rels/slide{slide_number}.xml.rels"),
                parts::slide_rels(notes_index)?,
            ));

            if let (Some(n), Some(narration)) = (notes_index, entry.notes) {
                package_parts.push(PackagePart::new(
                    format!("ppt/notesSlides/notesSlide{n}.xml"),
                    shapes::notes_xml(&narration)?,
                ));
                package_parts.push(PackagePart::new(
                    format!("ppt/notesSlides/_rels/notesSlide{n}.xml.rels"),
                    parts::notes_rels(slide_number)?,
                ));
            }
        }

        package_parts.push(PackagePart::new(
            "[Content_Types].xml",
            parts::content_types(slide_count, notes_count)?,
        ));

        log::info!(
            "Assembling package: {} slides, {} with notes",
            slide_count,
            notes_count
        );
        package::write_package(&package_parts)
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn lecture(number: &str, slides: Vec<SlideRecord>) -> LectureRecord {
        LectureRecord {
            number: number.to_string(),
            title: format!("Lecture {number} Title"),
            duration: "45 minutes".to_string(),
            slides,
        }
    }

    fn slide(title: &str, bullets: &[&str], narration: &str) -> SlideRecord {
        SlideRecord {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            narration: narration.to_string(),
        }
    }

    fn open(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
        ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn slide_part_names(archive: &ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
        archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_total_slide_count_is_one_plus_dividers_plus_content() {
        let mut builder = DeckBuilder::new();
        builder.add_title_slide().unwrap();

        let lectures = [
            lecture("1", vec![slide("A", &["a1"], ""), slide("B", &[], "")]),
            lecture("2", vec![slide("C", &["c1", "c2"], "notes")]),
        ];
        let mut content = 0;
        for l in &lectures {
            content += builder.add_lecture(l).unwrap();
        }

        assert_eq!(content, 3);
        assert_eq!(builder.slide_count(), 1 + 2 + 3);

        let archive = open(builder.finish().unwrap());
        assert_eq!(slide_part_names(&archive).len(), 6);
    }

    #[test]
    fn test_content_slide_text_and_notes() {
        let mut builder = DeckBuilder::new();
        builder.add_title_slide().unwrap();
        builder
            .add_lecture(&lecture(
                "3",
                vec![slide(
                    "Welcome",
                    &["First bullet", "Second bullet"],
                    "Narration paragraph.",
                )],
            ))
            .unwrap();

        let mut archive = open(builder.finish().unwrap());

        let divider = read_part(&mut archive, "ppt/slides/slide2.xml");
        assert!(divider.contains("<a:t>Lecture 3: Lecture 3 Title</a:t>"));
        assert!(divider.contains("<a:t>Duration: 45 minutes</a:t>"));
        assert!(divider.contains("sz=\"3600\""));
        assert!(divider.contains("val=\"606060\""));

        let content = read_part(&mut archive, "ppt/slides/slide3.xml");
        assert!(content.contains("<a:t>L3: Welcome</a:t>"));
        assert!(content.contains("<a:t>First bullet</a:t>"));
        assert!(content.contains("<a:t>Second bullet</a:t>"));
        assert!(content.contains("sz=\"1800\""));
        assert!(content.contains("val=\"600\""));

        let notes = read_part(&mut archive, "ppt/notesSlides/notesSlide1.xml");
        assert!(notes.contains("<a:t>Narration paragraph.</a:t>"));

        let slide_rels = read_part(&mut archive, "ppt/slides/_rels/slide3.xml.rels");
        assert!(slide_rels.contains("../notesSlides/notesSlide1.xml"));
        let notes_rels = read_part(&mut archive, "ppt/notesSlides/_rels/notesSlide1.xml.rels");
        assert!(notes_rels.contains("../slides/slide3.xml"));
    }

    #[test]
    fn test_no_narration_means_no_notes_parts() {
        let mut builder = DeckBuilder::new();
        builder.add_title_slide().unwrap();
        builder
            .add_lecture(&lecture("1", vec![slide("Quiet", &["only bullet"], "")]))
            .unwrap();

        let archive = open(builder.finish().unwrap());
        assert!(!archive.file_names().any(|n| n.contains("notesSlides")));
    }

    #[test]
    fn test_title_slide_fixed_text() {
        let mut builder = DeckBuilder::new();
        builder.add_title_slide().unwrap();

        let mut archive = open(builder.finish().unwrap());
        let title = read_part(&mut archive, "ppt/slides/slide1.xml");

        assert!(title.contains("<a:t>EU AI Act Compliance</a:t>"));
        assert!(title.contains("<a:t>Build Audit-Ready Documentation</a:t>"));
        assert!(title.contains("<a:t>9 Lectures | 27 Slides</a:t>"));
        assert!(title.contains("sz=\"4400\""));
        assert!(title.contains("sz=\"2400\""));
    }

    #[test]
    fn test_structural_determinism() {
        let build = || {
            let mut builder = DeckBuilder::new();
            builder.add_title_slide().unwrap();
            builder
                .add_lecture(&lecture("1", vec![slide("S", &["b"], "n")]))
                .unwrap();
            builder.finish().unwrap()
        };

        let a = open(build());
        let b = open(build());
        let names_a: Vec<&str> = a.file_names().collect();
        let names_b: Vec<&str> = b.file_names().collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_sentinel_lecture_renders() {
        let mut builder = DeckBuilder::new();
        builder.add_title_slide().unwrap();
        builder
            .add_lecture(&LectureRecord::untitled())
            .unwrap();

        let mut archive = open(builder.finish().unwrap());
        let divider = read_part(&mut archive, "ppt/slides/slide2.xml");
        assert!(divider.contains("<a:t>Lecture ?: Untitled Lecture</a:t>"));
        assert!(divider.contains("<a:t>Duration: Unknown</a:t>"));
    }
}
