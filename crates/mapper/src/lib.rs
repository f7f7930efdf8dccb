//! Decides which leaf receives which payload value.
//!
//! The mapper works on leaf paths only: it never touches the tree. Reading
//! existing leaf text goes through [`mantelbogen_types::LeafReader`].

pub mod identity;
pub mod mapping;
pub mod preview;
pub mod rules;

pub use identity::{IDENTITY_KEYWORDS, check_identity, extract_identity, payload_project_name};
pub use mapping::{FieldMap, build_field_map};
pub use preview::build_preview;
pub use rules::{Category, Matcher, RULES, Render, Rule, first_match};
