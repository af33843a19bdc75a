use super::escape_xml;
use crate::fetch::Icon;
use crate::format::CardText;

pub const BLACK: &str = "#000000";
pub const DARK_BLUE: &str = "#00008B";
pub const GREEN: &str = "#008000";

const TITLE_SIZE: f32 = 40.0;
const BODY_SIZE: f32 = 26.0;
const BORDER_WIDTH: f32 = 3.0;

// Card-local extent of the icon: x0, x1, y0, y1 in unit coordinates.
const ICON_EXTENT: (f32, f32, f32, f32) = (0.4, 0.65, 0.05, 0.2);

/// Pixel rectangle of one card. Card-local coordinates run 0..1 on both axes
/// with y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct CardFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CardFrame {
    pub fn to_px(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.x + fx * self.width, self.y + (1.0 - fy) * self.height)
    }
}

struct TextLine<'a> {
    y: f32,
    text: &'a str,
    size: f32,
    bold: bool,
    color: &'a str,
}

/// Appends one card to `out`. Paint order is background, text, icon.
pub fn write_card(
    out: &mut String,
    index: usize,
    frame: CardFrame,
    fill: &str,
    text: &CardText,
    icon: Option<&Icon>,
) {
    out.push_str(&format!(r#"<g id="card-{}">"#, index));

    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        frame.x, frame.y, frame.width, frame.height, fill, BLACK, BORDER_WIDTH
    ));

    let lines = [
        TextLine { y: 0.9, text: &text.title, size: TITLE_SIZE, bold: true, color: BLACK },
        TextLine { y: 0.75, text: &text.product, size: BODY_SIZE, bold: false, color: BLACK },
        TextLine { y: 0.65, text: &text.country, size: BODY_SIZE, bold: false, color: DARK_BLUE },
        TextLine { y: 0.5, text: &text.discount, size: BODY_SIZE, bold: false, color: BLACK },
        TextLine { y: 0.4, text: &text.units, size: BODY_SIZE, bold: false, color: DARK_BLUE },
        TextLine { y: 0.3, text: &text.sales, size: BODY_SIZE, bold: false, color: GREEN },
    ];

    for line in &lines {
        let (px, py) = frame.to_px(0.5, line.y);
        let weight = if line.bold { "bold" } else { "normal" };
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="central" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            px,
            py,
            line.size,
            weight,
            line.color,
            escape_xml(line.text)
        ));
    }

    if let Some(icon) = icon {
        let (x0, x1, y0, y1) = ICON_EXTENT;
        let (left, top) = frame.to_px(x0, y1);
        let (right, bottom) = frame.to_px(x1, y0);
        out.push_str(&format!(
            r#"<image x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" preserveAspectRatio="none" xlink:href="{}"/>"#,
            left,
            top,
            right - left,
            bottom - top,
            icon.data_uri()
        ));
    }

    out.push_str("</g>");
}
