//! Integration tests for normalization, pagination, and geometry handling.

use topdf::{layout_bytes, layout_text, Error, JsonFormat, PageGeometry, Topdf};

#[test]
fn test_carriage_returns_are_stripped() {
    let doc = layout_text("a\r\nb\rc\n", &PageGeometry::default()).unwrap();
    let lines = &doc.get_page(1).unwrap().lines;
    assert_eq!(lines, &vec!["a".to_string(), "bc".to_string(), String::new()]);
}

#[test]
fn test_empty_lines_consume_slots() {
    // 60 empty lines still split at the 49-line boundary.
    let input = "\n".repeat(59);
    let doc = layout_text(&input, &PageGeometry::default()).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.line_count(), 60);
    assert!(doc.is_blank());
}

#[test]
fn test_trailing_newline_adds_final_empty_line() {
    let doc = layout_text("one\ntwo\n", &PageGeometry::default()).unwrap();
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.get_page(1).unwrap().lines[2], "");
}

#[test]
fn test_custom_geometry_changes_capacity() {
    // floor((792 - 100) / 20) = 34 lines per page
    let geometry = PageGeometry::default().with_leading(20.0);
    assert_eq!(geometry.lines_per_page(), 34);

    let input = vec!["x"; 35].join("\n");
    let doc = layout_text(&input, &geometry).unwrap();
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn test_a4_geometry() {
    let geometry = PageGeometry::a4();
    assert_eq!(geometry.lines_per_page(), 53);

    let input = vec!["x"; 53].join("\n");
    let doc = layout_text(&input, &geometry).unwrap();
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn test_invalid_geometry_is_rejected() {
    let cramped = PageGeometry::default().with_margin(396.0);
    let result = layout_text("text", &cramped);
    assert!(matches!(result, Err(Error::InvalidGeometry(_))));

    let result = Topdf::new()
        .with_geometry(PageGeometry::default().with_font_size(-2.0))
        .layout("text");
    assert!(matches!(result, Err(Error::InvalidGeometry(_))));
}

#[test]
fn test_layout_bytes_boundary() {
    let ok = layout_bytes(b"plain ascii", &PageGeometry::default());
    assert!(ok.is_ok());

    let bad = layout_bytes(&[0xC3, 0x28], &PageGeometry::default());
    assert!(matches!(bad, Err(Error::InvalidInput(_))));
}

#[test]
fn test_plain_text_preserves_input() {
    let input = "alpha\n\nbeta\ngamma";
    let doc = layout_text(input, &PageGeometry::default()).unwrap();
    assert_eq!(doc.plain_text(), input);
}

#[test]
fn test_json_plan_round_trips_through_serde() {
    let doc = layout_text("alpha\nbeta", &PageGeometry::default()).unwrap();
    let json = topdf::to_json(&doc, JsonFormat::Compact).unwrap();

    let restored: topdf::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.page_count(), doc.page_count());
    assert_eq!(restored.plain_text(), doc.plain_text());
    assert_eq!(restored.geometry, doc.geometry);
}

#[test]
fn test_pagination_is_contiguous() {
    let input = (0..200)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let doc = layout_text(&input, &PageGeometry::default()).unwrap();

    let mut rebuilt = Vec::new();
    for page in &doc.pages {
        rebuilt.extend(page.lines.iter().cloned());
    }
    let expected: Vec<String> = (0..200).map(|i| i.to_string()).collect();
    assert_eq!(rebuilt, expected);
}
