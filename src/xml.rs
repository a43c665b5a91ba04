// ABOUTME: XML rendering module for the aqilha-deck application
// ABOUTME: Turns the deck model into PresentationML package parts

use crate::errors::Result;
use crate::model::{Canvas, Deck, Slide, TextShape};
use crate::palette::{Palette, Rgb};
use crate::pptx::PptxConfig;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const NS_PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
pub const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
pub const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// First id handed out to slides in `p:sldIdLst`
pub const FIRST_SLIDE_ID: usize = 256;

/// Thin wrapper over a quick-xml writer for building one package part
pub struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    /// Start a part with the standard `<?xml ...?>` declaration
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;
        Ok(Self { writer })
    }

    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    pub fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    /// Write escaped character data
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name>text</name>`
    pub fn element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// One entry of a `.rels` part
pub struct Relationship<'a> {
    pub id: String,
    pub rel_type: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    pub fn new(id: usize, rel_type: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{}", id),
            rel_type,
            target: target.into(),
        }
    }
}

pub fn relationships(rels: &[Relationship<'_>]) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open("Relationships", &[("xmlns", NS_PACKAGE_RELS)])?;
    for rel in rels {
        part.empty(
            "Relationship",
            &[
                ("Id", rel.id.as_str()),
                ("Type", rel.rel_type),
                ("Target", rel.target.as_str()),
            ],
        )?;
    }
    part.close("Relationships")?;
    Ok(part.finish())
}

pub fn content_types(slide_count: usize) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    part.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    part.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let mut overrides = vec![
        ("/ppt/presentation.xml".to_string(), CT_PRESENTATION),
        (
            "/ppt/slideMasters/slideMaster1.xml".to_string(),
            CT_SLIDE_MASTER,
        ),
        (
            "/ppt/slideLayouts/slideLayout1.xml".to_string(),
            CT_SLIDE_LAYOUT,
        ),
        ("/ppt/theme/theme1.xml".to_string(), CT_THEME),
        ("/docProps/core.xml".to_string(), CT_CORE),
        ("/docProps/app.xml".to_string(), CT_APP),
    ];
    for n in 1..=slide_count {
        overrides.push((format!("/ppt/slides/slide{}.xml", n), CT_SLIDE));
    }
    for (name, content_type) in &overrides {
        part.empty(
            "Override",
            &[("PartName", name.as_str()), ("ContentType", *content_type)],
        )?;
    }

    part.close("Types")?;
    Ok(part.finish())
}

pub fn root_relationships() -> Result<Vec<u8>> {
    relationships(&[
        Relationship::new(1, REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        Relationship::new(2, REL_CORE_PROPERTIES, "docProps/core.xml"),
        Relationship::new(3, REL_EXTENDED_PROPERTIES, "docProps/app.xml"),
    ])
}

pub fn core_properties(config: &PptxConfig) -> Result<Vec<u8>> {
    let timestamp = config.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut part = XmlPart::new()?;
    part.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    part.element("dc:title", &[], &config.title)?;
    part.element("dc:creator", &[], &config.creator)?;
    part.element("cp:lastModifiedBy", &[], &config.creator)?;
    part.element("cp:revision", &[], "1")?;
    part.element(
        "dcterms:created",
        &[("xsi:type", "dcterms:W3CDTF")],
        &timestamp,
    )?;
    part.element(
        "dcterms:modified",
        &[("xsi:type", "dcterms:W3CDTF")],
        &timestamp,
    )?;
    part.close("cp:coreProperties")?;
    Ok(part.finish())
}

pub fn app_properties(slide_count: usize) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "Properties",
        &[
            (
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            ),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    part.element("Application", &[], env!("CARGO_PKG_NAME"))?;
    part.element("Slides", &[], &slide_count.to_string())?;
    part.element("PresentationFormat", &[], "On-screen Show (4:3)")?;
    part.close("Properties")?;
    Ok(part.finish())
}

/// `ppt/presentation.xml`. Relationship ids: the master is `rId1`, slide N is
/// `rId{N+1}`, the theme follows the last slide.
pub fn presentation(deck: &Deck) -> Result<Vec<u8>> {
    let Canvas { width, height } = *deck.canvas();

    let mut part = XmlPart::new()?;
    part.open(
        "p:presentation",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    part.open("p:sldMasterIdLst", &[])?;
    part.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    part.close("p:sldMasterIdLst")?;

    part.open("p:sldIdLst", &[])?;
    for i in 0..deck.len() {
        let id = (FIRST_SLIDE_ID + i).to_string();
        let rid = format!("rId{}", i + 2);
        part.empty("p:sldId", &[("id", id.as_str()), ("r:id", rid.as_str())])?;
    }
    part.close("p:sldIdLst")?;

    let cx = width.value().to_string();
    let cy = height.value().to_string();
    part.empty(
        "p:sldSz",
        &[("cx", cx.as_str()), ("cy", cy.as_str()), ("type", "screen4x3")],
    )?;
    part.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    part.close("p:presentation")?;
    Ok(part.finish())
}

pub fn presentation_relationships(slide_count: usize) -> Result<Vec<u8>> {
    let mut rels = vec![Relationship::new(
        1,
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    )];
    for n in 1..=slide_count {
        rels.push(Relationship::new(
            n + 1,
            REL_SLIDE,
            format!("slides/slide{}.xml", n),
        ));
    }
    rels.push(Relationship::new(slide_count + 2, REL_THEME, "theme/theme1.xml"));
    relationships(&rels)
}

pub fn slide_relationships() -> Result<Vec<u8>> {
    relationships(&[Relationship::new(
        1,
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )])
}

/// Render one slide: palette background followed by its text boxes
pub fn slide(palette: &Palette, slide: &Slide) -> Result<Vec<u8>> {
    let mut part = XmlPart::new()?;
    part.open(
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    part.open("p:cSld", &[])?;

    part.open("p:bg", &[])?;
    part.open("p:bgPr", &[])?;
    solid_fill(&mut part, palette.background)?;
    part.empty("a:effectLst", &[])?;
    part.close("p:bgPr")?;
    part.close("p:bg")?;

    part.open("p:spTree", &[])?;
    group_shape_properties(&mut part)?;
    for (i, shape) in slide.shapes().iter().enumerate() {
        text_box(&mut part, i + 2, shape)?;
    }
    part.close("p:spTree")?;

    part.close("p:cSld")?;
    part.open("p:clrMapOvr", &[])?;
    part.empty("a:masterClrMapping", &[])?;
    part.close("p:clrMapOvr")?;
    part.close("p:sld")?;
    Ok(part.finish())
}

/// The non-visual header every `p:spTree` starts with
pub(crate) fn group_shape_properties(part: &mut XmlPart) -> Result<()> {
    part.open("p:nvGrpSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    part.empty("p:cNvGrpSpPr", &[])?;
    part.empty("p:nvPr", &[])?;
    part.close("p:nvGrpSpPr")?;

    part.open("p:grpSpPr", &[])?;
    part.open("a:xfrm", &[])?;
    part.empty("a:off", &[("x", "0"), ("y", "0")])?;
    part.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    part.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    part.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    part.close("a:xfrm")?;
    part.close("p:grpSpPr")
}

fn text_box(part: &mut XmlPart, id: usize, shape: &TextShape) -> Result<()> {
    let id_attr = id.to_string();
    let name = format!("TextBox {}", id - 1);
    let x = shape.x.value().to_string();
    let y = shape.y.value().to_string();
    let cx = shape.width.value().to_string();
    let cy = shape.height.value().to_string();

    part.open("p:sp", &[])?;

    part.open("p:nvSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", id_attr.as_str()), ("name", name.as_str())])?;
    part.empty("p:cNvSpPr", &[("txBox", "1")])?;
    part.empty("p:nvPr", &[])?;
    part.close("p:nvSpPr")?;

    part.open("p:spPr", &[])?;
    part.open("a:xfrm", &[])?;
    part.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    part.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    part.close("a:xfrm")?;
    part.open("a:prstGeom", &[("prst", "rect")])?;
    part.empty("a:avLst", &[])?;
    part.close("a:prstGeom")?;
    part.empty("a:noFill", &[])?;
    part.close("p:spPr")?;

    part.open("p:txBody", &[])?;
    part.empty("a:bodyPr", &[("wrap", "square"), ("rtlCol", "0")])?;
    part.empty("a:lstStyle", &[])?;
    for line in shape.paragraphs() {
        paragraph(part, shape, line)?;
    }
    part.close("p:txBody")?;

    part.close("p:sp")
}

fn paragraph(part: &mut XmlPart, shape: &TextShape, line: &str) -> Result<()> {
    let rtl = is_rtl(line);
    let lang = if rtl { "ar-SA" } else { "en-US" };
    let size = (shape.font_size * 100).to_string();

    part.open("a:p", &[])?;

    let mut ppr: Vec<(&str, &str)> = Vec::new();
    if let Some(alignment) = shape.alignment {
        ppr.push(("algn", alignment.as_ooxml()));
    }
    if rtl {
        ppr.push(("rtl", "1"));
    }
    if !ppr.is_empty() {
        part.empty("a:pPr", &ppr)?;
    }

    let mut rpr: Vec<(&str, &str)> = vec![("lang", lang), ("sz", size.as_str())];
    if shape.bold {
        rpr.push(("b", "1"));
    }
    rpr.push(("dirty", "0"));

    if line.is_empty() {
        part.open("a:endParaRPr", &rpr)?;
        solid_fill(part, shape.color)?;
        part.close("a:endParaRPr")?;
    } else {
        part.open("a:r", &[])?;
        part.open("a:rPr", &rpr)?;
        solid_fill(part, shape.color)?;
        part.close("a:rPr")?;
        part.element("a:t", &[], line)?;
        part.close("a:r")?;
    }

    part.close("a:p")
}

fn solid_fill(part: &mut XmlPart, color: Rgb) -> Result<()> {
    let hex = color.to_hex();
    part.open("a:solidFill", &[])?;
    part.empty("a:srgbClr", &[("val", hex.as_str())])?;
    part.close("a:solidFill")
}

/// A paragraph is right-to-left when its first letter is Arabic
pub fn is_rtl(line: &str) -> bool {
    line.chars()
        .find(|c| c.is_alphabetic())
        .map(is_arabic)
        .unwrap_or(false)
}

fn is_arabic(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF
        | 0x0750..=0x077F
        | 0x08A0..=0x08FF
        | 0xFB50..=0xFDFF
        | 0xFE70..=0xFEFF)
}
