use crate::error::{CardForgeError, CfResult};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "business_cards.png";

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub layout: LayoutParams,
    #[command(flatten)]
    pub output: OutputParams,
}

/// Grid and card geometry, in pixels unless noted.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct LayoutParams {
    #[arg(long, default_value_t = 5)]
    pub max_per_row: usize,
    #[arg(long, default_value_t = 420.0)]
    pub card_width: f32,
    #[arg(long, default_value_t = 500.0)]
    pub card_height: f32,
    /// Horizontal gap as a fraction of the card width.
    #[arg(long, default_value_t = 0.4)]
    pub wspace: f32,
    /// Vertical gap as a fraction of the card height.
    #[arg(long, default_value_t = 0.4)]
    pub hspace: f32,
    #[arg(long, default_value_t = 24.0)]
    pub margin: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_per_row: 5,
            card_width: 420.0,
            card_height: 500.0,
            wspace: 0.4,
            hspace: 0.4,
            margin: 24.0,
        }
    }
}

impl LayoutParams {
    pub fn h_gap(&self) -> f32 {
        self.card_width * self.wspace
    }

    pub fn v_gap(&self) -> f32 {
        self.card_height * self.hspace
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.max_per_row == 0 {
            return Err(CardForgeError::Config(
                "--max-per-row must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("card-width", self.card_width),
            ("card-height", self.card_height),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(CardForgeError::Config(format!(
                    "--{} must be a positive size, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("wspace", self.wspace),
            ("hspace", self.hspace),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CardForgeError::Config(format!(
                    "--{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// What to do when a segment icon cannot be fetched or decoded.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPolicy {
    /// Fail the whole run; no image is written.
    #[default]
    Abort,
    /// Log a warning and draw the card without its icon.
    Skip,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OutputParams {
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not open the finished image in the system viewer.
    #[arg(long, default_value_t = false)]
    pub no_show: bool,

    #[arg(long, value_enum, default_value_t = IconPolicy::Abort)]
    pub icon_policy: IconPolicy,

    /// Extra directory of font files, loaded on top of the system fonts.
    #[arg(long)]
    pub font_dir: Option<PathBuf>,

    /// Also write the card placements as JSON.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            no_show: false,
            icon_policy: IconPolicy::Abort,
            font_dir: None,
            manifest: None,
        }
    }
}
