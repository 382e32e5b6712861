use thiserror::Error;

#[derive(Error, Debug)]
pub enum TailorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No API key configured for the background-removal service")]
    MissingApiKey,

    #[error("Background-removal service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Background-removal service returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, TailorError>;
