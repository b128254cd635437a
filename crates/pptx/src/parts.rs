//! Fixed and generated OOXML package parts.
//!
//! The master, layout, notes master, and theme are constant: every slide
//! is drawn with explicit text boxes on a blank layout, so these parts
//! carry no content of their own. The parts that vary with slide count
//! (content types, presentation, relationships) are generated here.

use deck_core::Result;

use crate::xml::Xml;

pub(crate) const NS_DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_PRESENTATIONML: &str =
    "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_NOTES_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_NOTES_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
const CT_NOTES_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";

/// Slide canvas: 10 x 7.5 inches in EMU.
pub(crate) const SLIDE_WIDTH_EMU: i64 = 9_144_000;
pub(crate) const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

const DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";

/// Empty shape tree shared by the constant parts.
const EMPTY_SP_TREE: &str = "<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr></p:spTree>";

const CLR_MAP: &str = "<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>";

/// Blank slide master with a single layout reference.
pub(crate) fn slide_master() -> Vec<u8> {
    format!(
        "{DECL}<p:sldMaster xmlns:a=\"{NS_DRAWINGML}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATIONML}\"><p:cSld>{EMPTY_SP_TREE}</p:cSld>{CLR_MAP}<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst></p:sldMaster>"
    )
    .into_bytes()
}

/// Blank slide layout every content-bearing slide points at.
pub(crate) fn slide_layout() -> Vec<u8> {
    format!(
        "{DECL}<p:sldLayout xmlns:a=\"{NS_DRAWINGML}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATIONML}\" type=\"blank\"><p:cSld name=\"Blank\">{EMPTY_SP_TREE}</p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"
    )
    .into_bytes()
}

/// Notes master required by the notes slide parts.
pub(crate) fn notes_master() -> Vec<u8> {
    format!(
        "{DECL}<p:notesMaster xmlns:a=\"{NS_DRAWINGML}\" xmlns:r=\"{NS_RELATIONSHIPS}\" xmlns:p=\"{NS_PRESENTATIONML}\"><p:cSld>{EMPTY_SP_TREE}</p:cSld>{CLR_MAP}</p:notesMaster>"
    )
    .into_bytes()
}

/// Minimal Office theme: color scheme, font scheme, and the three-entry
/// format scheme lists the schema requires.
pub(crate) fn theme() -> Vec<u8> {
    let fill = "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>";
    let line = |w: u32| {
        format!("<a:ln w=\"{w}\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>")
    };
    format!(
        "{DECL}<a:theme xmlns:a=\"{NS_DRAWINGML}\" name=\"Office Theme\"><a:themeElements><a:clrScheme name=\"Office\"><a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1><a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1><a:dk2><a:srgbClr val=\"44546A\"/></a:dk2><a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2><a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1><a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2><a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3><a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4><a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5><a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6><a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink><a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink></a:clrScheme><a:fontScheme name=\"Office\"><a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont><a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont></a:fontScheme><a:fmtScheme name=\"Office\"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{ln1}{ln2}{ln3}</a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>",
        ln1 = line(6_350),
        ln2 = line(12_700),
        ln3 = line(19_050),
    )
    .into_bytes()
}

/// Serialize a relationships part from `(id, type, target)` triples.
pub(crate) fn relationships(rels: &[(String, &str, String)]) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.start("Relationships", &[("xmlns", NS_PACKAGE_RELATIONSHIPS)])?;
    for (id, rel_type, target) in rels {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type), ("Target", target)],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.into_bytes())
}

/// Package root relationships pointing at the presentation part.
pub(crate) fn root_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        REL_OFFICE_DOCUMENT,
        "ppt/presentation.xml".to_string(),
    )])
}

/// `[Content_Types].xml` for a deck of `slide_count` slides of which
/// `notes_count` carry a notes part.
pub(crate) fn content_types(slide_count: usize, notes_count: usize) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[("Extension", "rels"), ("ContentType", CT_RELATIONSHIPS)],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", CT_XML)])?;

    let overrides = [
        ("/ppt/presentation.xml", CT_PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
        ("/ppt/notesMasters/notesMaster1.xml", CT_NOTES_MASTER),
        ("/ppt/theme/theme1.xml", CT_THEME),
    ];
    for (part, content_type) in overrides {
        xml.empty(
            "Override",
            &[("PartName", part), ("ContentType", content_type)],
        )?;
    }
    for n in 1..=slide_count {
        xml.empty(
            "Override",
            &[
                ("PartName", &format!("/ppt/slides/slide{n}.xml")),
                ("ContentType", CT_SLIDE),
            ],
        )?;
    }
    for n in 1..=notes_count {
        xml.empty(
            "Override",
            &[
                ("PartName", &format!("/ppt/notesSlides/notesSlide{n}.xml")),
                ("ContentType", CT_NOTES_SLIDE),
            ],
        )?;
    }

    xml.end("Types")?;
    Ok(xml.into_bytes())
}

/// `ppt/presentation.xml`: master references, the slide id list, and the
/// fixed canvas size.
pub(crate) fn presentation(slide_count: usize) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.start(
        "p:presentation",
        &[
            ("xmlns:a", NS_DRAWINGML),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATIONML),
        ],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    xml.start("p:notesMasterIdLst", &[])?;
    xml.empty("p:notesMasterId", &[("r:id", "rId2")])?;
    xml.end("p:notesMasterIdLst")?;

    xml.start("p:sldIdLst", &[])?;
    for n in 0..slide_count {
        // Slide ids start at 256 by convention; rIds follow the masters.
        xml.empty(
            "p:sldId",
            &[
                ("id", &(256 + n).to_string()),
                ("r:id", &format!("rId{}", n + 3)),
            ],
        )?;
    }
    xml.end("p:sldIdLst")?;

    xml.empty(
        "p:sldSz",
        &[
            ("cx", &SLIDE_WIDTH_EMU.to_string()),
            ("cy", &SLIDE_HEIGHT_EMU.to_string()),
        ],
    )?;
    xml.empty(
        "p:notesSz",
        &[
            ("cx", &SLIDE_HEIGHT_EMU.to_string()),
            ("cy", &SLIDE_WIDTH_EMU.to_string()),
        ],
    )?;
    xml.end("p:presentation")?;
    Ok(xml.into_bytes())
}

/// Relationships for `ppt/presentation.xml`.
pub(crate) fn presentation_rels(slide_count: usize) -> Result<Vec<u8>> {
    let mut rels = vec![
        (
            "rId1".to_string(),
            REL_SLIDE_MASTER,
            "slideMasters/slideMaster1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            REL_NOTES_MASTER,
            "notesMasters/notesMaster1.xml".to_string(),
        ),
    ];
    for n in 1..=slide_count {
        rels.push((
            format!("rId{}", n + 2),
            REL_SLIDE,
            format!("slides/slide{n}.xml"),
        ));
    }
    relationships(&rels)
}

/// Relationships for one slide part: its layout and, when the slide has
/// narration, its notes part.
pub(crate) fn slide_rels(notes_index: Option<usize>) -> Result<Vec<u8>> {
    let mut rels = vec![(
        "rId1".to_string(),
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )];
    if let Some(n) = notes_index {
        rels.push((
            "rId2".to_string(),
            REL_NOTES_SLIDE,
            format!("../notesSlides/notesSlide{n}.xml"),
        ));
    }
    relationships(&rels)
}

/// Relationships for one notes part: the notes master and its slide.
pub(crate) fn notes_rels(slide_number: usize) -> Result<Vec<u8>> {
    relationships(&[
        (
            "rId1".to_string(),
            REL_NOTES_MASTER,
            "../notesMasters/notesMaster1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            REL_SLIDE,
            format!("../slides/slide{slide_number}.xml"),
        ),
    ])
}

/// Relationships for the slide master: its layout and the theme.
pub(crate) fn slide_master_rels() -> Result<Vec<u8>> {
    relationships(&[
        (
            "rId1".to_string(),
            REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            REL_THEME,
            "../theme/theme1.xml".to_string(),
        ),
    ])
}

/// Relationships for the slide layout: back to its master.
pub(crate) fn slide_layout_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

/// Relationships for the notes master: the shared theme.
pub(crate) fn notes_master_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1".to_string(),
        REL_THEME,
        "../theme/theme1.xml".to_string(),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_lists_every_slide() {
        let bytes = content_types(3, 1).unwrap();
        let out = String::from_utf8(bytes).unwrap();

        assert!(out.contains("/ppt/slides/slide1.xml"));
        assert!(out.contains("/ppt/slides/slide3.xml"));
        assert!(!out.contains("/ppt/slides/slide4.xml"));
        assert!(out.contains("/ppt/notesSlides/notesSlide1.xml"));
        assert!(!out.contains("/ppt/notesSlides/notesSlide2.xml"));
    }

    #[test]
    fn test_presentation_slide_ids_follow_masters() {
        let bytes = presentation(2).unwrap();
        let out = String::from_utf8(bytes).unwrap();

        assert!(out.contains("<p:sldId id=\"256\" r:id=\"rId3\"/>"));
        assert!(out.contains("<p:sldId id=\"257\" r:id=\"rId4\"/>"));
        assert!(out.contains("cx=\"9144000\" cy=\"6858000\""));
    }

    #[test]
    fn test_slide_rels_with_and_without_notes() {
        let with_notes = String::from_utf8(slide_rels(Some(2)).unwrap()).unwrap();
        assert!(with_notes.contains("../notesSlides/notesSlide2.xml"));

        let without = String::from_utf8(slide_rels(None).unwrap()).unwrap();
        assert!(!without.contains("notesSlides"));
        assert!(without.contains("../slideLayouts/slideLayout1.xml"));
    }

    #[test]
    fn test_constant_parts_are_wellformed_enough() {
        for part in [slide_master(), slide_layout(), notes_master(), theme()] {
            let out = String::from_utf8(part).unwrap();
            assert!(out.starts_with("<?xml"));
        }
    }
}
