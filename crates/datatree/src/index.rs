//! The data packet and its leaf-path index.
//!
//! Paths start at the data root (the first element below `<xfa:data>`) and
//! name one element per level. Siblings that share a name are told apart by a
//! zero-based `[i]` suffix; a lone name carries no suffix, and a bare name
//! always resolves to the first same-named sibling.

use crate::error::TreeError;
use crate::parser::{decode_document, parse_document};
use crate::tree::{DataTree, NodeId};
use crate::writer::write_document;
use mantelbogen_types::{LeafPath, LeafReader};
use std::collections::HashMap;

/// Local name of the wrapper element whose first child is the data root.
const DATA_WRAPPER: &str = "data";

/// A parsed XFA `datasets` packet with its data root located.
#[derive(Debug, Clone)]
pub struct DataPacket {
    tree: DataTree,
    root: NodeId,
}

impl DataPacket {
    /// Parses the packet and locates the data root. The bytes may be in any
    /// encoding the XML declaration names.
    ///
    /// Fails with [`TreeError::MissingDataNode`] when there is no `data`
    /// element, and with [`TreeError::MissingDataRoot`] when it has no element
    /// child. Both are distinct from a data root that merely has no leaves.
    pub fn parse(xml: &[u8]) -> Result<Self, TreeError> {
        let tree = parse_document(&decode_document(xml)?)?;
        let root = find_data_root(&tree)?;
        log::debug!(
            "Located data root <{}>",
            tree.local_name(root).unwrap_or_default()
        );
        Ok(Self { tree, root })
    }

    pub fn tree(&self) -> &DataTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_name(&self) -> &str {
        self.tree.local_name(self.root).unwrap_or_default()
    }

    /// Every leaf path below (and including) the data root, depth-first in
    /// document order.
    pub fn leaf_paths(&self) -> Vec<LeafPath> {
        let mut paths = Vec::new();
        collect_leaves(&self.tree, self.root, LeafPath::from(self.root_name()), &mut paths);
        paths
    }

    /// Resolves a path to its node. The first segment must name the data root.
    pub fn resolve(&self, path: &LeafPath) -> Option<NodeId> {
        let mut segments = path.segments();
        let first = segments.next()?;
        if first.name != self.root_name() {
            return None;
        }

        let mut current = self.root;
        for segment in segments {
            let index = segment.index.unwrap_or(0);
            current = self.tree.children_named(current, segment.name).nth(index)?;
        }
        Some(current)
    }

    /// Writes `value` as the text of the node at `path`. Returns `false` when
    /// the path does not resolve.
    pub fn set_leaf_text(&mut self, path: &LeafPath, value: &str) -> bool {
        match self.resolve(path) {
            Some(node) => {
                self.tree.set_text(node, value.trim());
                true
            }
            None => false,
        }
    }

    /// Serializes the whole packet (not only the data root) as UTF-8 XML with
    /// a declaration.
    pub fn to_xml(&self) -> Result<Vec<u8>, TreeError> {
        write_document(&self.tree)
    }
}

impl LeafReader for DataPacket {
    fn leaf_text(&self, path: &LeafPath) -> String {
        self.resolve(path)
            .map(|node| self.tree.text(node).trim().to_string())
            .unwrap_or_default()
    }
}

fn find_data_root(tree: &DataTree) -> Result<NodeId, TreeError> {
    let data = tree
        .descendants(tree.document())
        .into_iter()
        .find(|n| tree.local_name(*n) == Some(DATA_WRAPPER))
        .ok_or(TreeError::MissingDataNode)?;
    tree.element_children(data).next().ok_or(TreeError::MissingDataRoot)
}

fn collect_leaves(tree: &DataTree, node: NodeId, path: LeafPath, out: &mut Vec<LeafPath>) {
    let children: Vec<(NodeId, &str)> = tree
        .element_children(node)
        .map(|child| (child, tree.local_name(child).unwrap_or_default()))
        .collect();
    if children.is_empty() {
        out.push(path);
        return;
    }

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (_, name) in &children {
        *totals.entry(*name).or_default() += 1;
    }

    // Shared names get their position among same-named siblings.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (child, name) in children {
        let segment = if totals[name] > 1 {
            let position = seen.entry(name).or_default();
            let segment = format!("{}[{}]", name, position);
            *position += 1;
            segment
        } else {
            name.to_string()
        };
        collect_leaves(tree, child, path.child(&segment), out);
    }
}
