//! Segment icon retrieval.
//!
//! The renderer never talks to the network directly; it asks an
//! [`ImageFetcher`] for raw bytes and decodes them itself. Production runs use
//! [`HttpFetcher`], tests and offline runs use [`MemoryFetcher`].

use crate::error::{CardForgeError, CfResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use std::cell::Cell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;
use tracing::debug;

pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> CfResult<Vec<u8>>;
}

/// Serial, blocking HTTP GETs. No retries and no timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> CfResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("cardforge/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> CfResult<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.bytes()?;
        debug!("   -> {} bytes", body.len());
        Ok(body.to_vec())
    }
}

/// Fixed URL → bytes table. Unknown URLs are fetch errors.
#[derive(Default)]
pub struct MemoryFetcher {
    entries: HashMap<String, Vec<u8>>,
    requests: Cell<usize>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.entries.insert(url.to_string(), bytes);
        self
    }

    /// Number of `fetch` calls served so far, hits and misses alike.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl ImageFetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> CfResult<Vec<u8>> {
        self.requests.set(self.requests.get() + 1);
        self.entries
            .get(url)
            .cloned()
            .ok_or_else(|| CardForgeError::Fetch(format!("no image registered for '{}'", url)))
    }
}

/// A decoded icon, normalised to PNG for embedding.
#[derive(Debug, Clone)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    png: Vec<u8>,
}

impl Icon {
    pub fn decode(bytes: &[u8]) -> CfResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = DynamicImage::ImageRgba8(decoded.to_rgba8());

        let mut png = Vec::new();
        rgba.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            png,
        })
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Each URL is fetched and decoded at most once per run.
#[derive(Default)]
pub struct IconCache {
    icons: HashMap<String, Icon>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_fetch(&mut self, url: &str, fetcher: &dyn ImageFetcher) -> CfResult<&Icon> {
        let icon: &Icon = match self.icons.entry(url.to_string()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let bytes = fetcher.fetch(url)?;
                let icon = Icon::decode(&bytes)?;
                debug!("Decoded icon {}x{} from {}", icon.width, icon.height, url);
                slot.insert(icon)
            }
        };
        Ok(icon)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
