//! Result types shared by the mapper and the orchestrator.

use crate::ids::LeafPath;
use serde::{Serialize, Serializer};

/// A value the mapper decided to write into one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub path: LeafPath,
    /// The rendered text, already in the document's conventions.
    pub value: String,
    /// Dotted payload location the value came from, e.g. `company.funding.ratePct`.
    pub source: String,
}

/// Whether a preview row will be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FillStatus {
    WillFill,
    Skipped,
}

/// One row of the field inventory returned by analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEntry {
    pub path: LeafPath,
    pub value: String,
    pub source: String,
    pub status: FillStatus,
}

impl PreviewEntry {
    pub fn will_fill(mapping: &FieldMapping) -> Self {
        Self {
            path: mapping.path.clone(),
            value: mapping.value.clone(),
            source: mapping.source.clone(),
            status: FillStatus::WillFill,
        }
    }

    pub fn skipped(path: LeafPath) -> Self {
        Self { path, value: String::new(), source: String::new(), status: FillStatus::Skipped }
    }
}

/// Outcome of comparing the document's project identity with the payload's.
///
/// Serialized as a nullable mismatch flag: `null` when there was nothing to
/// compare, `true` on mismatch, `false` when both agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityCheck {
    /// One or both identities are absent.
    #[default]
    Unknown,
    Match,
    Mismatch,
}

impl IdentityCheck {
    pub fn is_mismatch(self) -> bool {
        self == IdentityCheck::Mismatch
    }

    /// The nullable-boolean view used at the JSON boundary.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            IdentityCheck::Unknown => None,
            IdentityCheck::Match => Some(false),
            IdentityCheck::Mismatch => Some(true),
        }
    }
}

impl Serialize for IdentityCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_flag().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_check_serializes_as_nullable_flag() {
        assert_eq!(serde_json::to_value(IdentityCheck::Unknown).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(IdentityCheck::Match).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(IdentityCheck::Mismatch).unwrap(), json!(true));
    }

    #[test]
    fn test_preview_entry_shape() {
        let skipped = PreviewEntry::skipped(LeafPath::from("formular/notiz"));
        assert_eq!(
            serde_json::to_value(&skipped).unwrap(),
            json!({ "path": "formular/notiz", "value": "", "source": "", "status": "skipped" })
        );

        let mapping = FieldMapping {
            path: LeafPath::from("formular/akronym"),
            value: "ProjektX".to_string(),
            source: "project.name".to_string(),
        };
        let row = PreviewEntry::will_fill(&mapping);
        assert_eq!(serde_json::to_value(&row).unwrap()["status"], json!("willFill"));
    }
}
