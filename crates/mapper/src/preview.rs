use crate::mapping::FieldMap;
use mantelbogen_types::{LeafPath, PreviewEntry};

/// One row per leaf path, in index order, whether or not it will be filled.
pub fn build_preview(paths: &[LeafPath], map: &FieldMap) -> Vec<PreviewEntry> {
    paths
        .iter()
        .map(|path| match map.get(path) {
            Some(mapping) => PreviewEntry::will_fill(mapping),
            None => PreviewEntry::skipped(path.clone()),
        })
        .collect()
}
