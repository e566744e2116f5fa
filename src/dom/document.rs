//! XML document - arena-based tree storage.
//!
//! The document owns every node created by a builder. Builder scopes address
//! nodes by `NodeId`, which keeps the whole tree in one allocation-friendly
//! place and makes attaching children a matter of pushing an index.

use super::node::{NodeId, NodeKind, XmlNode};

/// An XML document stored in arena format.
///
/// Nodes are appended with [`push`](XmlDocument::push) and linked afterwards
/// with [`append_child`](XmlDocument::append_child) or
/// [`set_root`](XmlDocument::set_root). Nodes are never removed; replacing
/// the root orphans the previous subtree, which simply stops being rendered.
#[derive(Debug, Default)]
pub struct XmlDocument {
    nodes: Vec<XmlNode>,
    root: Option<NodeId>,
}

impl XmlDocument {
    /// Create an empty document with no root.
    pub fn new() -> Self {
        XmlDocument {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Add a node to the arena and return its handle.
    pub fn push(&mut self, node: XmlNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Link a child node under a parent, preserving append order.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child as usize].parent = Some(parent);
        self.nodes[parent as usize].children.push(child);
    }

    /// Attach a node as the document root, replacing any previous root.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Assign an attribute on an element. Re-assigning an existing key
    /// overwrites its value in place, keeping the original position.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let key = key.into();
        let value = value.into();
        let attrs = &mut self.nodes[id as usize].attributes;
        match attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => attrs.push((key, value)),
        }
    }

    /// Get the root node ID, if any top-level node has been attached.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&XmlNode> {
        self.nodes.get(id as usize)
    }

    /// Get node name as string (empty for non-elements).
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|node| node.name.as_str())
    }

    /// Get node kind.
    pub fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(|node| node.kind)
    }

    /// Get attribute value by name.
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Get total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
