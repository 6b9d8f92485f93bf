use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("frame loop configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
