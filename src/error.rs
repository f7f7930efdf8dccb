// src/error.rs
use mantelbogen_container::ContainerError;
use mantelbogen_datatree::TreeError;
use thiserror::Error;

/// Every way an analyze or fill call can fail.
///
/// An identity mismatch is not an error; it is reported through
/// [`crate::FillOutcome::MismatchNotConfirmed`].
#[derive(Error, Debug)]
pub enum FillError {
    #[error("Document carries no XFA datasets packet")]
    NotXfa,

    #[error("Payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Container failed: {0}")]
    Container(#[from] ContainerError),

    #[error("Data packet failed: {0}")]
    Packet(#[from] TreeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FillError>;
