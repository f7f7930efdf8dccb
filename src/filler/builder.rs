// src/filler/builder.rs
use super::config::FillerConfig;
use super::orchestrator::Filler;

/// A builder for creating a [`Filler`].
#[derive(Debug, Clone, Default)]
pub struct FillerBuilder {
    config: FillerConfig,
}

impl FillerBuilder {
    /// Creates a new `FillerBuilder` with the default German filename parts.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the last part of the suggested download filename.
    pub fn with_download_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.download_suffix = suffix.into();
        self
    }

    pub fn with_project_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.config.project_fallback = fallback.into();
        self
    }

    pub fn with_company_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.config.company_fallback = fallback.into();
        self
    }

    /// Consumes the builder and creates the immutable `Filler`.
    pub fn build(self) -> Filler {
        Filler::new(self.config)
    }
}
