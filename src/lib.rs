//! Fills the XFA data packet of funding-application cover sheets.
//!
//! The crate locates the `datasets` packet inside a PDF, indexes its leaf
//! fields by path, maps payload values onto them through a keyword rule table
//! and writes the result back into an otherwise unchanged container.
//!
//! The free functions [`analyze`] and [`fill`] use the default
//! [`FillerConfig`]; build a [`Filler`] to change it.

pub mod error;
pub mod filler;

pub use error::{FillError, Result};
pub use filler::{Analysis, FillOutcome, FillReport, FilledDocument, Filler, FillerBuilder, FillerConfig, IdentityConflict};

pub use mantelbogen_types::{FillStatus, IdentityCheck, LeafPath, Payload, PreviewEntry};

/// Analyzes `pdf` against `payload` with the default configuration.
pub fn analyze(pdf: &[u8], payload: &Payload) -> Result<Analysis> {
    Filler::default().analyze(pdf, payload)
}

/// Fills `pdf` from `payload` with the default configuration.
pub fn fill(pdf: &[u8], payload: &Payload, confirm_mismatch: bool) -> Result<FillOutcome> {
    Filler::default().fill(pdf, payload, confirm_mismatch)
}
