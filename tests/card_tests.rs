use cardforge::dataset::Record;
use cardforge::fetch::Icon;
use cardforge::format::card_lines;
use cardforge::render::card::{write_card, CardFrame, BLACK, DARK_BLUE, GREEN};
use regex::Regex;

mod common;
use common::tiny_png;

// 400x200 card whose top-left corner sits at (100, 50).
const FRAME: CardFrame = CardFrame {
    x: 100.0,
    y: 50.0,
    width: 400.0,
    height: 200.0,
};

fn sample_card(icon: Option<&Icon>) -> String {
    let record = Record::new("Government", "USA", "Product A", "10%", 100, 10000.0);
    let mut out = String::new();
    write_card(&mut out, 3, FRAME, "#DFF2E1", &card_lines(&record), icon);
    out
}

struct TextEl {
    x: String,
    y: String,
    size: String,
    weight: String,
    fill: String,
    body: String,
}

fn text_elements(svg: &str) -> Vec<TextEl> {
    let re = Regex::new(
        r#"<text x="([\d.]+)" y="([\d.]+)" [^>]*font-size="(\d+)" font-weight="(\w+)" fill="(#[0-9A-F]{6})">([^<]*)</text>"#,
    )
    .unwrap();
    re.captures_iter(svg)
        .map(|c| TextEl {
            x: c[1].to_string(),
            y: c[2].to_string(),
            size: c[3].to_string(),
            weight: c[4].to_string(),
            fill: c[5].to_string(),
            body: c[6].to_string(),
        })
        .collect()
}

#[test]
fn test_frame_maps_unit_coordinates_with_y_up() {
    assert_eq!(FRAME.to_px(0.0, 1.0), (100.0, 50.0));
    assert_eq!(FRAME.to_px(1.0, 0.0), (500.0, 250.0));
    assert_eq!(FRAME.to_px(0.5, 0.5), (300.0, 150.0));
}

#[test]
fn test_card_background_has_black_border() {
    let svg = sample_card(None);
    assert!(svg.starts_with(r#"<g id="card-3">"#));
    assert!(svg.ends_with("</g>"));
    assert!(svg.contains(&format!(
        r##"<rect x="100.00" y="50.00" width="400.00" height="200.00" fill="#DFF2E1" stroke="{}" stroke-width="3"/>"##,
        BLACK
    )));
}

#[test]
fn test_text_lines_positions_and_colors() {
    let svg = sample_card(None);
    let lines = text_elements(&svg);
    assert_eq!(lines.len(), 6);

    // (y in px, size, weight, color, text) for unit heights 0.9 .. 0.3
    let expected = [
        ("70.00", "40", "bold", BLACK, "Government"),
        ("100.00", "26", "normal", BLACK, "Product: Product A"),
        ("120.00", "26", "normal", DARK_BLUE, "Country: USA"),
        ("150.00", "26", "normal", BLACK, "Discount Band: 10%"),
        ("170.00", "26", "normal", DARK_BLUE, "Units Sold: 100"),
        ("190.00", "26", "normal", GREEN, "Sales: $10,000.00"),
    ];

    for (line, (y, size, weight, fill, body)) in lines.iter().zip(expected) {
        assert_eq!(line.x, "300.00", "{}", body);
        assert_eq!(line.y, y, "{}", body);
        assert_eq!(line.size, size, "{}", body);
        assert_eq!(line.weight, weight, "{}", body);
        assert_eq!(line.fill, fill, "{}", body);
        assert_eq!(line.body, body);
    }
    assert!(svg.contains(r#"text-anchor="middle""#));
}

#[test]
fn test_icon_fills_its_extent_after_the_text() {
    let icon = Icon::decode(&tiny_png([10, 20, 30, 255])).unwrap();
    let svg = sample_card(Some(&icon));

    // x 0.4..0.65 and y 0.05..0.2 of the card, y up.
    let image = format!(
        r#"<image x="260.00" y="210.00" width="100.00" height="30.00" preserveAspectRatio="none" xlink:href="{}"/>"#,
        icon.data_uri()
    );
    let image_at = svg.find(&image).expect("icon element");
    let last_text_end = svg.rfind("</text>").expect("text elements");
    assert!(image_at > last_text_end);
    assert_eq!(svg.matches("<image").count(), 1);
}

#[test]
fn test_card_without_icon_has_no_image() {
    let svg = sample_card(None);
    assert!(!svg.contains("<image"));
    assert_eq!(text_elements(&svg).len(), 6);
}
