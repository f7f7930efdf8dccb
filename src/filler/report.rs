//! Serializable results of analyze and fill.

use mantelbogen_types::{IdentityCheck, LeafPath, PreviewEntry};
use serde::Serialize;

/// What an analyze call found out about a document and a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub is_xfa_document: bool,
    pub document_identity: Option<String>,
    pub payload_project_name: Option<String>,
    pub identity_mismatch: IdentityCheck,
    pub leaf_paths: Vec<LeafPath>,
    pub preview: Vec<PreviewEntry>,
}

impl Analysis {
    /// The result for a document without a datasets packet.
    pub fn not_xfa(payload_project_name: Option<String>) -> Self {
        Self {
            is_xfa_document: false,
            document_identity: None,
            payload_project_name,
            identity_mismatch: IdentityCheck::Unknown,
            leaf_paths: Vec::new(),
            preview: Vec::new(),
        }
    }
}

/// Metadata about a completed fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    pub document_identity: Option<String>,
    pub payload_project_name: Option<String>,
    pub identity_mismatch: IdentityCheck,
    pub download_filename: String,
    /// Leaves whose text was actually written.
    pub filled_leaf_count: usize,
}

/// The new container bytes plus the report describing them.
#[derive(Debug, Clone, Serialize)]
pub struct FilledDocument {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    #[serde(flatten)]
    pub report: FillReport,
}

/// The two identities that disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConflict {
    pub document_identity: String,
    pub payload_project_name: String,
}

/// Result of a fill call that did not fail.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FillOutcome {
    Filled(FilledDocument),
    /// The document belongs to another project and the caller did not
    /// confirm the override. Nothing was written.
    MismatchNotConfirmed(IdentityConflict),
}

impl FillOutcome {
    pub fn filled(self) -> Option<FilledDocument> {
        match self {
            FillOutcome::Filled(document) => Some(document),
            FillOutcome::MismatchNotConfirmed(_) => None,
        }
    }

    pub fn is_mismatch_not_confirmed(&self) -> bool {
        matches!(self, FillOutcome::MismatchNotConfirmed(_))
    }
}
