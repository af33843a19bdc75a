#![allow(dead_code)]

use cardforge::dataset::Record;
use cardforge::fetch::MemoryFetcher;
use cardforge::segments::Segment;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use strum::IntoEnumIterator;

/// A small solid-colour PNG.
pub fn tiny_png(color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 6, Rgba(color));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode test png");
    bytes
}

/// Serves a distinct PNG for every known segment icon URL.
pub fn offline_fetcher() -> MemoryFetcher {
    Segment::iter()
        .enumerate()
        .fold(MemoryFetcher::new(), |f, (i, seg)| {
            f.with(seg.icon_url(), tiny_png([40 * i as u8, 80, 160, 255]))
        })
}

pub fn record(segment: &str, product: &str, sales: f64) -> Record {
    Record::new(segment, "USA", product, "10%", 100, sales)
}
