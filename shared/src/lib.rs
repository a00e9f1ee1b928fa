// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("provider: {0}")]
    Provider(String),
    #[error("empty translation")]
    EmptyTranslation,
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
