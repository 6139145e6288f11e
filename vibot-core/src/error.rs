use thiserror::Error;

#[derive(Error, Debug)]
pub enum VibotError {
    #[error("Invalid message: required field `{0}` is missing or blank")]
    InvalidArgument(&'static str),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VibotError>;
