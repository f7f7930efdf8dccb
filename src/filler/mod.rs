//! Analyze and fill orchestration.
//!
//! - [`FillerBuilder`]: fluent builder for a configured [`Filler`]
//! - [`Filler`]: runs container extraction, indexing, mapping and write-back
//! - [`Analysis`], [`FillOutcome`]: the serializable results
//!
//! # Example
//!
//! ```ignore
//! use mantelbogen::{FillerBuilder, FillOutcome, Payload};
//!
//! let filler = FillerBuilder::new().with_download_suffix("Deckblatt").build();
//! let payload = Payload::from_json(&payload_json)?;
//! match filler.fill(&pdf_bytes, &payload, false)? {
//!     FillOutcome::Filled(document) => std::fs::write(&document.report.download_filename, &document.bytes)?,
//!     FillOutcome::MismatchNotConfirmed(conflict) => eprintln!("{:?}", conflict),
//! }
//! ```

mod builder;
pub mod config;
mod orchestrator;
pub mod report;

pub use builder::FillerBuilder;
pub use config::FillerConfig;
pub use orchestrator::Filler;
pub use report::{Analysis, FillOutcome, FillReport, FilledDocument, IdentityConflict};
