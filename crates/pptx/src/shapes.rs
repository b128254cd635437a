//! Slide and notes part composition.
//!
//! Slides are rendered as independently positioned text boxes on a blank
//! layout. All geometry is in EMU, font sizes in hundredths of a point.

use deck_core::Result;

use crate::parts::{NS_DRAWINGML, NS_PRESENTATIONML, NS_RELATIONSHIPS};
use crate::xml::Xml;

/// English Metric Units per inch.
pub(crate) const EMU_PER_INCH: f64 = 914_400.0;

/// Convert inches to EMU.
pub(crate) fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// One paragraph of styled text.
pub(crate) struct Paragraph {
    pub text: String,
    /// Font size in hundredths of a point (e.g. 4400 for 44 pt).
    pub size: u32,
    pub bold: bool,
    /// Hex RGB color, e.g. "003366".
    pub color: &'static str,
    pub center: bool,
    /// Space before and after in hundredths of a point.
    pub spacing: Option<u32>,
}

/// A positioned text box holding one or more paragraphs.
pub(crate) struct TextBox {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
    pub paragraphs: Vec<Paragraph>,
}

/// Serialize one slide part from its text boxes.
pub(crate) fn slide_xml(boxes: &[TextBox]) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.start(
        "p:sld",
        &[
            ("xmlns:a", NS_DRAWINGML),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATIONML),
        ],
    )?;
    xml.start("p:cSld", &[])?;
    xml.start("p:spTree", &[])?;
    write_group_properties(&mut xml)?;

    for (idx, text_box) in boxes.iter().enumerate() {
        write_text_box(&mut xml, text_box, idx)?;
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    Ok(xml.into_bytes())
}

/// Serialize one notes part carrying the narration as speaker notes.
pub(crate) fn notes_xml(narration: &str) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.start(
        "p:notes",
        &[
            ("xmlns:a", NS_DRAWINGML),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATIONML),
        ],
    )?;
    xml.start("p:cSld", &[])?;
    xml.start("p:spTree", &[])?;
    write_group_properties(&mut xml)?;

    // Notes body placeholder, inherited from the notes master.
    xml.start("p:sp", &[])?;
    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "2"), ("name", "Notes Placeholder 1")])?;
    xml.start("p:cNvSpPr", &[])?;
    xml.empty("a:spLocks", &[("noGrp", "1")])?;
    xml.end("p:cNvSpPr")?;
    xml.start("p:nvPr", &[])?;
    xml.empty("p:ph", &[("type", "body"), ("idx", "1")])?;
    xml.end("p:nvPr")?;
    xml.end("p:nvSpPr")?;
    xml.empty("p:spPr", &[])?;
    xml.start("p:txBody", &[])?;
    xml.empty("a:bodyPr", &[])?;
    xml.empty("a:lstStyle", &[])?;

    for line in narration.split('\n') {
        xml.start("a:p", &[])?;
        if line.is_empty() {
            xml.empty("a:endParaRPr", &[("lang", "en-US")])?;
        } else {
            xml.start("a:r", &[])?;
            xml.empty("a:rPr", &[("lang", "en-US"), ("dirty", "0")])?;
            xml.text_element("a:t", line)?;
            xml.end("a:r")?;
        }
        xml.end("a:p")?;
    }

    xml.end("p:txBody")?;
    xml.end("p:sp")?;

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:notes")?;
    Ok(xml.into_bytes())
}

/// Group shape properties required at the head of every shape tree.
fn write_group_properties(xml: &mut Xml) -> Result<()> {
    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")?;
    Ok(())
}

fn write_text_box(xml: &mut Xml, text_box: &TextBox, idx: usize) -> Result<()> {
    // id 1 is the group shape.
    let id = (idx + 2).to_string();
    let name = format!("TextBox {}", idx + 1);

    xml.start("p:sp", &[])?;
    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", &id), ("name", &name)])?;
    xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    xml.start("p:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty(
        "a:off",
        &[("x", &text_box.x.to_string()), ("y", &text_box.y.to_string())],
    )?;
    xml.empty(
        "a:ext",
        &[
            ("cx", &text_box.cx.to_string()),
            ("cy", &text_box.cy.to_string()),
        ],
    )?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    xml.empty("a:noFill", &[])?;
    xml.end("p:spPr")?;

    xml.start("p:txBody", &[])?;
    xml.empty("a:bodyPr", &[("wrap", "square")])?;
    xml.empty("a:lstStyle", &[])?;

    if text_box.paragraphs.is_empty() {
        // A text body must contain at least one paragraph.
        xml.start("a:p", &[])?;
        xml.empty("a:endParaRPr", &[("lang", "en-US")])?;
        xml.end("a:p")?;
    }
    for paragraph in &text_box.paragraphs {
        write_paragraph(xml, paragraph)?;
    }

    xml.end("p:txBody")?;
    xml.end("p:sp")?;
    Ok(())
}

fn write_paragraph(xml: &mut Xml, paragraph: &Paragraph) -> Result<()> {
    xml.start("a:p", &[])?;

    let needs_ppr = paragraph.center || paragraph.spacing.is_some();
    if needs_ppr {
        if paragraph.center {
            xml.start("a:pPr", &[("algn", "ctr")])?;
        } else {
            xml.start("a:pPr", &[])?;
        }
        if let Some(spacing) = paragraph.spacing {
            let value = spacing.to_string();
            xml.start("a:spcBef", &[])?;
            xml.empty("a:spcPts", &[("val", &value)])?;
            xml.end("a:spcBef")?;
            xml.start("a:spcAft", &[])?;
            xml.empty("a:spcPts", &[("val", &value)])?;
            xml.end("a:spcAft")?;
        }
        xml.end("a:pPr")?;
    }

    let size = paragraph.size.to_string();
    if paragraph.text.is_empty() {
        let mut attrs = vec![("lang", "en-US"), ("sz", size.as_str())];
        if paragraph.bold {
            attrs.push(("b", "1"));
        }
        xml.empty("a:endParaRPr", &attrs)?;
    } else {
        xml.start("a:r", &[])?;
        let mut attrs = vec![("lang", "en-US"), ("sz", size.as_str())];
        if paragraph.bold {
            attrs.push(("b", "1"));
        }
        attrs.push(("dirty", "0"));
        xml.start("a:rPr", &attrs)?;
        xml.start("a:solidFill", &[])?;
        xml.empty("a:srgbClr", &[("val", paragraph.color)])?;
        xml.end("a:solidFill")?;
        xml.end("a:rPr")?;
        xml.text_element("a:t", &paragraph.text)?;
        xml.end("a:r")?;
    }

    xml.end("a:p")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box(text: &str) -> TextBox {
        TextBox {
            x: emu(1.0),
            y: emu(2.0),
            cx: emu(8.0),
            cy: emu(1.5),
            paragraphs: vec![Paragraph {
                text: text.to_string(),
                size: 4400,
                bold: true,
                color: "003366",
                center: true,
                spacing: None,
            }],
        }
    }

    #[test]
    fn test_emu_conversion() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(7.5), 6_858_000);
        assert_eq!(emu(0.5), 457_200);
    }

    #[test]
    fn test_slide_xml_contains_text_and_styling() {
        let bytes = slide_xml(&[sample_box("Course Title")]).unwrap();
        let out = String::from_utf8(bytes).unwrap();

        assert!(out.contains("<a:t>Course Title</a:t>"));
        assert!(out.contains("sz=\"4400\""));
        assert!(out.contains("b=\"1\""));
        assert!(out.contains("val=\"003366\""));
        assert!(out.contains("algn=\"ctr\""));
        assert!(out.contains("x=\"914400\""));
    }

    #[test]
    fn test_slide_xml_escapes_reserved_characters() {
        let bytes = slide_xml(&[sample_box("Q&A <recap>")]).unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert!(out.contains("<a:t>Q&amp;A &lt;recap&gt;</a:t>"));
    }

    #[test]
    fn test_empty_text_box_still_has_a_paragraph() {
        let bytes = slide_xml(&[TextBox {
            x: 0,
            y: 0,
            cx: 100,
            cy: 100,
            paragraphs: Vec::new(),
        }])
        .unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert!(out.contains("<a:p><a:endParaRPr lang=\"en-US\"/></a:p>"));
    }

    #[test]
    fn test_notes_xml_splits_lines_into_paragraphs() {
        let bytes = notes_xml("First line.\n\nThird line.").unwrap();
        let out = String::from_utf8(bytes).unwrap();

        assert!(out.contains("<a:t>First line.</a:t>"));
        assert!(out.contains("<a:t>Third line.</a:t>"));
        assert_eq!(out.matches("<a:p>").count(), 3);
        assert!(out.contains("type=\"body\""));
    }
}
