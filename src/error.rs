use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch Error: {0}")]
    Fetch(String),

    #[error("Image Decode Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("SVG Error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Encoding Error: {0}")]
    Encode(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CfResult<T> = Result<T, CardForgeError>;
