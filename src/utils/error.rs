use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Payload error: {message}")]
    PayloadError { message: String },
}

pub type Result<T> = std::result::Result<T, AddressError>;
