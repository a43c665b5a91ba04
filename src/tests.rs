use super::*;
use crate::model::{Canvas, Emu, ShapeRole};
use std::io::Cursor;

fn render_slide(index: usize) -> String {
    let deck = build_deck();
    let bytes = xml::slide(deck.palette(), &deck.slides()[index]).expect("Failed to render slide");
    String::from_utf8(bytes).expect("Slide XML is not UTF-8")
}

#[test]
fn test_build_deck_has_thirteen_slides() {
    let deck = build_deck();
    assert_eq!(deck.len(), 13);
    assert_eq!(deck.len(), SLIDE_COUNT);
    assert!(!deck.is_empty());
}

#[test]
fn test_build_deck_titles_in_order() {
    let deck = build_deck();
    let expected = [
        "أبـشـر طويق - قالب تحكيم المشاريع",
        "المشكلة وحلّها",
        "البيانات المستخدمة",
        "التقنيات المستخدمة",
        "وصف الفكرة",
        "كيفية توفير هذه البيانات وكيفية استخدامها",
        "مواءمة الفكرة",
        "ملخص",
        "الاختبار/التحقق",
        "العرض التوضيحي",
        "التحديات والخطط المستقبلية",
        "Timeline",
        "شكراً لكم",
    ];
    assert_eq!(deck.outline(), expected);
}

#[test]
fn test_every_slide_has_exactly_one_title() {
    let deck = build_deck();
    for (i, slide) in deck.slides().iter().enumerate() {
        let titles = slide
            .shapes()
            .iter()
            .filter(|s| s.role == ShapeRole::Title)
            .count();
        assert_eq!(titles, 1, "Slide {} should have one title", i + 1);
        assert_eq!(slide.shapes()[0].role, ShapeRole::Title);
    }
}

#[test]
fn test_only_problem_slide_has_two_columns() {
    let deck = build_deck();
    for (i, slide) in deck.slides().iter().enumerate() {
        let expected = if i == 1 { 2 } else { 1 };
        assert_eq!(
            slide.bodies().count(),
            expected,
            "Unexpected body count on slide {}",
            i + 1
        );
    }
}

#[test]
fn test_shapes_fit_the_canvas() {
    let deck = build_deck();
    for (i, slide) in deck.slides().iter().enumerate() {
        for shape in slide.shapes() {
            assert!(
                shape.fits(deck.canvas()),
                "Shape on slide {} exceeds the canvas: {:?}",
                i + 1,
                shape.text
            );
        }
    }
}

#[test]
fn test_title_and_body_styling() {
    let deck = build_deck();
    let palette = Palette::AQILHA;

    for slide in deck.slides() {
        let title = slide.title().unwrap();
        assert!(title.bold);
        assert_eq!(title.color, palette.title);

        for body in slide.bodies() {
            assert!(!body.bold);
            assert_eq!(body.color, palette.body);
        }
    }

    let first = deck.slides()[0].title().unwrap();
    assert_eq!(first.font_size, 32);
    assert_eq!(first.x, Emu::from_inches(0.5));
    assert_eq!(first.width, Emu(9 * 914_400));

    let data_usage = &deck.slides()[5];
    assert_eq!(data_usage.title().unwrap().font_size, 28);
    assert_eq!(data_usage.bodies().next().unwrap().font_size, 14);
}

#[test]
fn test_closing_slide_is_centered() {
    let deck = build_deck();
    let closing = &deck.slides()[12];

    let title = closing.title().unwrap();
    assert_eq!(title.text, "شكراً لكم");
    assert_eq!(title.font_size, 48);
    assert_eq!(title.alignment, Some(Alignment::Center));

    let subtitle = closing.bodies().next().unwrap();
    assert_eq!(subtitle.font_size, 24);
    assert_eq!(subtitle.alignment, Some(Alignment::Center));
    assert_eq!(
        subtitle.paragraphs().collect::<Vec<_>>(),
        vec!["عَقِلْها", "نظام تحليل الازدحام المروري الذكي"]
    );

    // Every other shape inherits the default alignment
    for slide in &deck.slides()[..12] {
        assert!(slide.shapes().iter().all(|s| s.alignment.is_none()));
    }
}

#[test]
fn test_palette_colors() {
    let palette = Palette::default();
    assert_eq!(palette.background, Rgb::new(85, 107, 47));
    assert_eq!(palette.title, Rgb::new(255, 165, 0));
    assert_eq!(palette.body, Rgb::new(255, 255, 255));

    assert_eq!(palette.background.to_hex(), "556B2F");
    assert_eq!(palette.title.to_string(), "#FFA500");
}

#[test]
fn test_emu_conversion() {
    assert_eq!(Emu::from_inches(1.0), Emu(914_400));
    assert_eq!(Emu::from_inches(0.3), Emu(274_320));
    assert_eq!(Emu::from_inches(7.5), Canvas::STANDARD_4X3.height);
}

#[test]
fn test_rtl_detection() {
    assert!(xml::is_rtl("المشكلة:"));
    assert!(xml::is_rtl("✅ نظام الخرائط:"));
    assert!(!xml::is_rtl("Frontend:"));
    assert!(!xml::is_rtl("1. Google Maps Platform (40%)"));
    assert!(!xml::is_rtl("| 4 | 5 | 6 | 4 |"));
    assert!(!xml::is_rtl(""));
}

#[test]
fn test_slide_xml_background_and_runs() {
    let xml = render_slide(0);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert!(xml.contains("<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"556B2F\"/>"));
    assert!(xml.contains("<a:t>أبـشـر طويق - قالب تحكيم المشاريع</a:t>"));
    assert!(xml.contains("<a:rPr lang=\"ar-SA\" sz=\"3200\" b=\"1\" dirty=\"0\">"));
    assert!(xml.contains("<a:srgbClr val=\"FFA500\"/>"));
    assert!(xml.contains("<a:rPr lang=\"ar-SA\" sz=\"1800\" dirty=\"0\">"));
    assert!(xml.contains("<p:cNvPr id=\"2\" name=\"TextBox 1\"/>"));
    assert!(xml.contains("<p:cNvPr id=\"3\" name=\"TextBox 2\"/>"));
    // The blank line after the members heading
    assert!(xml.contains("<a:p><a:endParaRPr lang=\"en-US\" sz=\"1800\" dirty=\"0\">"));
}

#[test]
fn test_slide_xml_mixed_direction_paragraphs() {
    let xml = render_slide(3);

    assert!(xml.contains("<a:rPr lang=\"en-US\" sz=\"1600\" dirty=\"0\">"));
    assert!(xml.contains("<a:t>• Next.js 14 - React Framework</a:t>"));
    assert!(xml.contains("<a:pPr rtl=\"1\"/>"));
}

#[test]
fn test_slide_xml_centered_closing() {
    let xml = render_slide(12);
    assert!(xml.contains("<a:pPr algn=\"ctr\" rtl=\"1\"/>"));
    assert!(xml.contains("<a:t>شكراً لكم</a:t>"));
}

#[test]
fn test_text_is_escaped() {
    let mut deck = Deck::new(Palette::AQILHA);
    deck.add_slide().add_textbox(TextShape::new(
        ShapeRole::Title,
        model::Frame::inches(0.0, 0.0, 1.0, 1.0),
        "A & B <C>",
    ));
    let bytes = xml::slide(deck.palette(), &deck.slides()[0]).unwrap();
    let xml = String::from_utf8(bytes).unwrap();
    assert!(xml.contains("<a:t>A &amp; B &lt;C&gt;</a:t>"));
}

#[test]
fn test_presentation_lists_every_slide() {
    let deck = build_deck();
    let xml = String::from_utf8(xml::presentation(&deck).unwrap()).unwrap();

    assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
    assert!(xml.contains("<p:sldId id=\"268\" r:id=\"rId14\"/>"));
    assert!(!xml.contains("id=\"269\""));
    assert!(xml.contains("<p:sldSz cx=\"9144000\" cy=\"6858000\" type=\"screen4x3\"/>"));

    let rels = String::from_utf8(xml::presentation_relationships(deck.len()).unwrap()).unwrap();
    assert!(rels.contains("Id=\"rId14\""));
    assert!(rels.contains("Target=\"slides/slide13.xml\""));
    assert!(rels.contains("Id=\"rId15\""));
    assert!(rels.contains("Target=\"theme/theme1.xml\""));
}

#[test]
fn test_core_properties_use_configured_timestamp() {
    let config = PptxConfig {
        title: "Deck".to_string(),
        creator: "tester".to_string(),
        created: config::parse_epoch("1700000000").unwrap(),
    };
    let xml = String::from_utf8(xml::core_properties(&config).unwrap()).unwrap();

    assert!(xml.contains("<dc:title>Deck</dc:title>"));
    assert!(xml.contains("<dc:creator>tester</dc:creator>"));
    assert!(xml.contains(">2023-11-14T22:13:20Z</dcterms:created>"));
}

#[test]
fn test_parse_epoch_rejects_garbage() {
    let result = config::parse_epoch("yesterday");
    assert!(matches!(result, Err(DeckError::ConfigError(_))));
}

#[test]
fn test_get_pptx_config_prefers_explicit_title() {
    let config = Config::new();
    assert_eq!(config.get_pptx_config(None).title, config::DEFAULT_TITLE);
    assert_eq!(
        config.get_pptx_config(Some("Override".to_string())).title,
        "Override"
    );
    assert_eq!(
        config.output_path,
        std::path::PathBuf::from(config::DEFAULT_OUTPUT)
    );
}

#[test]
fn test_write_pptx_is_deterministic() {
    let deck = build_deck();
    let config = PptxConfig::default();

    let first = write_pptx(&deck, Cursor::new(Vec::new()), &config)
        .unwrap()
        .into_inner();
    let second = write_pptx(&deck, Cursor::new(Vec::new()), &config)
        .unwrap()
        .into_inner();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_write_outline_numbers_every_title() {
    let mut out = Vec::new();
    build_deck().write_outline(&mut out).expect("Failed to write outline");

    let text = String::from_utf8(out).expect("Outline is not UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], " 1. أبـشـر طويق - قالب تحكيم المشاريع");
    assert_eq!(lines[12], "13. شكراً لكم");
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_outline_failure_is_unknown_error() {
    let result = build_deck().write_outline(BrokenPipe);
    match result {
        Err(DeckError::UnknownError(msg)) => assert!(msg.contains("Failed to print outline")),
        other => panic!("Expected UnknownError, got {:?}", other),
    }
}
