// src/filler/orchestrator.rs
use super::builder::FillerBuilder;
use super::config::FillerConfig;
use super::report::{Analysis, FillOutcome, FillReport, FilledDocument, IdentityConflict};
use crate::error::{FillError, Result};
use mantelbogen_container::XfaContainer;
use mantelbogen_datatree::DataPacket;
use mantelbogen_format::{normalize_text, slugify_filename};
use mantelbogen_mapper::{build_field_map, build_preview, check_identity, extract_identity, payload_project_name};
use mantelbogen_types::{IdentityCheck, LeafPath, Payload};

/// Runs analyze and fill calls with one fixed configuration.
///
/// A `Filler` holds no per-document state: every call parses its own copy of
/// the container, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Filler {
    config: FillerConfig,
}

/// The packet of an XFA document together with its derived path index.
struct IndexedPacket {
    container: XfaContainer,
    packet: DataPacket,
    paths: Vec<LeafPath>,
    document_identity: Option<String>,
}

impl IndexedPacket {
    fn load(container: XfaContainer) -> Result<Self> {
        let packet = DataPacket::parse(&container.datasets_xml()?)?;
        let paths = packet.leaf_paths();
        let document_identity = extract_identity(&packet, &paths);
        log::debug!(
            "Indexed {} leaf paths under <{}>, document identity {:?}",
            paths.len(),
            packet.root_name(),
            document_identity
        );
        Ok(Self { container, packet, paths, document_identity })
    }
}

impl Filler {
    pub fn new(config: FillerConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> FillerBuilder {
        FillerBuilder::new()
    }

    pub fn config(&self) -> &FillerConfig {
        &self.config
    }

    /// Reports what a fill would write without changing anything.
    ///
    /// A document without a datasets packet is not an error here; the result
    /// is flagged `is_xfa_document = false` with empty path and preview lists.
    pub fn analyze(&self, pdf: &[u8], payload: &Payload) -> Result<Analysis> {
        let payload_name = payload_project_name(payload);
        let Some(container) = XfaContainer::load(pdf)? else {
            log::info!("Analyzed document is not an XFA form");
            return Ok(Analysis::not_xfa(payload_name));
        };

        let indexed = IndexedPacket::load(container)?;
        let identity = check_identity(indexed.document_identity.as_deref(), payload_name.as_deref());
        let map = build_field_map(payload, &indexed.paths);
        let preview = build_preview(&indexed.paths, &map);
        log::info!(
            "Analyzed XFA form: {} leaves, {} to fill, identity {:?}",
            indexed.paths.len(),
            map.len(),
            identity
        );

        Ok(Analysis {
            is_xfa_document: true,
            document_identity: indexed.document_identity,
            payload_project_name: payload_name,
            identity_mismatch: identity,
            leaf_paths: indexed.paths,
            preview,
        })
    }

    /// Writes the payload into the document's datasets packet.
    ///
    /// Fails with [`FillError::NotXfa`] when the document has no packet. When
    /// the document names another project and `confirm_mismatch` is false,
    /// nothing is written and [`FillOutcome::MismatchNotConfirmed`] is
    /// returned instead.
    pub fn fill(&self, pdf: &[u8], payload: &Payload, confirm_mismatch: bool) -> Result<FillOutcome> {
        let container = XfaContainer::load(pdf)?.ok_or(FillError::NotXfa)?;
        let IndexedPacket { mut container, mut packet, paths, document_identity } = IndexedPacket::load(container)?;

        let payload_name = payload_project_name(payload);
        let identity = check_identity(document_identity.as_deref(), payload_name.as_deref());
        if identity == IdentityCheck::Mismatch && !confirm_mismatch {
            log::info!(
                "Refusing to fill: document identity {:?} does not match payload project {:?}",
                document_identity,
                payload_name
            );
            return Ok(FillOutcome::MismatchNotConfirmed(IdentityConflict {
                document_identity: document_identity.unwrap_or_default(),
                payload_project_name: payload_name.unwrap_or_default(),
            }));
        }

        let map = build_field_map(payload, &paths);
        let mut filled = 0;
        for mapping in map.iter() {
            if packet.set_leaf_text(&mapping.path, &mapping.value) {
                filled += 1;
            } else {
                log::warn!("Mapped path {} no longer resolves", mapping.path);
            }
        }

        container.replace_datasets(packet.to_xml()?)?;
        let bytes = container.to_bytes()?;
        let report = FillReport {
            document_identity,
            payload_project_name: payload_name,
            identity_mismatch: identity,
            download_filename: self.download_filename(payload),
            filled_leaf_count: filled,
        };
        log::info!("Filled {} of {} leaves into {}", filled, paths.len(), report.download_filename);
        Ok(FillOutcome::Filled(FilledDocument { bytes, report }))
    }

    /// `{project}_{company}_{suffix}.pdf`, each name reduced to a safe slug.
    pub fn download_filename(&self, payload: &Payload) -> String {
        let project = slugify_filename(&normalize_text(&payload.project.name), &self.config.project_fallback);
        let company = slugify_filename(&normalize_text(&payload.company.name), &self.config.company_fallback);
        format!("{}_{}_{}.pdf", project, company, self.config.download_suffix)
    }
}
