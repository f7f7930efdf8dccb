//! An owned, arena-backed XML tree.
//!
//! Every node lives in a single `Vec` and is addressed by a [`NodeId`]. Nodes
//! never move, so a handle obtained by path resolution stays valid while text
//! is rewritten. Detached nodes stay in the arena but are unreachable from the
//! document node.

use quick_xml::events::BytesStart;

/// A stable handle to a node in a [`DataTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds. Element start tags are kept verbatim (name, attributes
/// and namespace declarations) so they serialize back byte-for-byte.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Document,
    Element {
        start: BytesStart<'static>,
        local_name: String,
        /// Written as `<name/>` in the source.
        self_closing: bool,
    },
    /// Unescaped character data.
    Text(String),
    CData(String),
    /// Raw comment body.
    Comment(String),
    /// Raw processing-instruction body (target and content).
    ProcessingInstruction(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct DataTree {
    nodes: Vec<NodeData>,
}

impl Default for DataTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DataTree {
    /// Creates a tree that holds only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData { kind: NodeKind::Document, parent: None, children: Vec::new() }],
        }
    }

    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The local name of an element (namespace prefix stripped), `None` for
    /// every other node kind.
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { local_name, .. } => Some(local_name),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Element { .. })
    }

    /// Element children in document order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].children.iter().copied().filter(|c| self.is_element(*c))
    }

    /// Element children whose local name equals `name`, in document order.
    pub fn children_named<'a>(
        &'a self,
        id: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.element_children(id).filter(move |c| self.local_name(*c) == Some(name))
    }

    /// All nodes below `id` (excluding `id` itself), pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Appends a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { kind, parent: Some(parent), children: Vec::new() });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends character data, merging it into a directly preceding text node.
    /// Entity references arrive as separate reader events; merging keeps one
    /// text node per run of character data.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(&last) = self.nodes[parent.0].children.last()
            && let NodeKind::Text(existing) = &mut self.nodes[last.0].kind
        {
            existing.push_str(text);
            return;
        }
        self.append(parent, NodeKind::Text(text.to_string()));
    }

    /// Concatenated text and CDATA content of the direct children of `id`.
    pub fn text(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .filter_map(|c| match &self.nodes[c.0].kind {
                NodeKind::Text(t) | NodeKind::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replaces all direct text and CDATA children of `id` with one text node.
    /// Element, comment and processing-instruction children are kept.
    pub fn set_text(&mut self, id: NodeId, value: &str) {
        let (text_nodes, kept): (Vec<NodeId>, Vec<NodeId>) =
            self.nodes[id.0].children.iter().copied().partition(|c| {
                matches!(self.nodes[c.0].kind, NodeKind::Text(_) | NodeKind::CData(_))
            });
        for detached in text_nodes {
            self.nodes[detached.0].parent = None;
        }
        self.nodes[id.0].children = kept;
        if !value.is_empty() {
            let text = self.append(id, NodeKind::Text(value.to_string()));
            // Keep text ahead of any comments so `<a>text<!--c--></a>` stays in shape.
            let children = &mut self.nodes[id.0].children;
            children.pop();
            children.insert(0, text);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}
