pub type GoldenResult<T> = Result<T, GoldenError>;

#[derive(thiserror::Error, Debug)]
pub enum GoldenError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GoldenError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn unsupported_media(msg: impl Into<String>) -> Self {
        Self::UnsupportedMedia(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
