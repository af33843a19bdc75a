use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_COLOR: &str = "#FFFFFF";

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Segment {
    Government,
    Midmarket,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub color: &'static str,
    pub icon_url: Option<&'static str>,
}

impl Segment {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Government => "#DFF2E1",
            Self::Midmarket => "#FFE5CC",
            Self::Enterprise => "#E0E5FF",
        }
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            Self::Government => "https://cdn-icons-png.flaticon.com/512/4474/4474140.png",
            Self::Midmarket => "https://static.thenounproject.com/png/1958256-200.png",
            Self::Enterprise => "https://cdn-icons-png.flaticon.com/512/484/484573.png",
        }
    }

    pub fn style(&self) -> SegmentStyle {
        SegmentStyle {
            color: self.color(),
            icon_url: Some(self.icon_url()),
        }
    }
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            icon_url: None,
        }
    }
}

/// Exact, case-sensitive lookup. Unknown segments get a white card and no icon.
pub fn style_for(segment: &str) -> SegmentStyle {
    Segment::from_str(segment)
        .map(|s| s.style())
        .unwrap_or_default()
}
