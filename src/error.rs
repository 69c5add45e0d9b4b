use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Unknown status token: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, PayloadError>;
