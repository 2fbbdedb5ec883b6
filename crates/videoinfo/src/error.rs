use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoInfoError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid itag: {0}")]
    InvalidItag(String),
}
