use crate::ids::LeafPath;

/// Read access to leaf values by path.
///
/// The mapper only needs to read existing leaf text (to find the document's
/// project identity); it is written against this trait rather than against a
/// concrete tree type.
pub trait LeafReader {
    /// The trimmed text of the leaf at `path`, or an empty string when the path
    /// does not resolve or the leaf holds no text.
    fn leaf_text(&self, path: &LeafPath) -> String;
}
