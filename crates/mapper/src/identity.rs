//! The document's own project identity and its comparison with the payload.

use mantelbogen_format::non_empty_text;
use mantelbogen_types::{IdentityCheck, LeafPath, LeafReader, Payload};

/// Path fragments of fields that hold the project acronym or name.
pub const IDENTITY_KEYWORDS: &[&str] = &["akronym", "projektakronym", "projektname", "kurzbezeichnung"];

/// The first non-empty value among the identity fields, in index order.
pub fn extract_identity(reader: &impl LeafReader, paths: &[LeafPath]) -> Option<String> {
    paths
        .iter()
        .filter(|path| {
            let lowered = path.lowered();
            IDENTITY_KEYWORDS.iter().any(|k| lowered.contains(k))
        })
        .map(|path| reader.leaf_text(path))
        .find(|text| !text.trim().is_empty())
        .map(|text| text.trim().to_string())
}

/// The payload's project name, if it carries a non-empty one.
pub fn payload_project_name(payload: &Payload) -> Option<String> {
    non_empty_text(&payload.project.name)
}

/// Compares both identities after trimming and lower-casing.
pub fn check_identity(document: Option<&str>, payload: Option<&str>) -> IdentityCheck {
    let normalize = |s: &str| s.trim().to_lowercase();
    match (document, payload) {
        (Some(document), Some(payload)) if normalize(document) == normalize(payload) => IdentityCheck::Match,
        (Some(_), Some(_)) => IdentityCheck::Mismatch,
        _ => IdentityCheck::Unknown,
    }
}
