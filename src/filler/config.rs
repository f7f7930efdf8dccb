/// Settings that shape a fill beyond the payload itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerConfig {
    /// Last part of the suggested download filename, before `.pdf`.
    pub download_suffix: String,
    /// Filename part used when the project name slugs to nothing.
    pub project_fallback: String,
    /// Filename part used when the company name slugs to nothing.
    pub company_fallback: String,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            download_suffix: "Mantelbogen".to_string(),
            project_fallback: "Projekt".to_string(),
            company_fallback: "Unternehmen".to_string(),
        }
    }
}
