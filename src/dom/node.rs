//! XML node representation.
//!
//! Uses NodeId (u32) for compact node references into the document arena.

/// Compact node identifier (index into the document arena)
pub type NodeId = u32;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
    /// CDATA section
    CData,
}

/// An XML node in the arena.
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Element name, possibly qualified as `prefix:local` (empty for leaves)
    pub name: String,
    /// Content for text, comment and CDATA nodes (empty for elements)
    pub content: String,
    /// Whether content is entity-escaped on render (text nodes only)
    pub escape: bool,
    /// Attribute pairs in assignment order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in append order
    pub children: Vec<NodeId>,
    /// Parent node, None until attached
    pub parent: Option<NodeId>,
}

impl XmlNode {
    /// Create a new element node
    pub fn element(name: impl Into<String>) -> Self {
        XmlNode {
            kind: NodeKind::Element,
            name: name.into(),
            content: String::new(),
            escape: false,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a new text node with the given escape flag
    pub fn text(content: impl Into<String>, escape: bool) -> Self {
        XmlNode {
            kind: NodeKind::Text,
            name: String::new(),
            content: content.into(),
            escape,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a new comment node (never escaped)
    pub fn comment(content: impl Into<String>) -> Self {
        XmlNode {
            kind: NodeKind::Comment,
            name: String::new(),
            content: content.into(),
            escape: false,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a new CDATA node (never escaped)
    pub fn cdata(content: impl Into<String>) -> Self {
        XmlNode {
            kind: NodeKind::CData,
            name: String::new(),
            content: content.into(),
            escape: false,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node() {
        let elem = XmlNode::element("item");
        assert_eq!(elem.kind, NodeKind::Element);
        assert_eq!(elem.name, "item");
        assert!(elem.parent.is_none());
        assert!(!elem.has_children());
    }

    #[test]
    fn test_text_node_escape_flag() {
        let escaped = XmlNode::text("a < b", true);
        assert_eq!(escaped.kind, NodeKind::Text);
        assert!(escaped.escape);

        let raw = XmlNode::text("a < b", false);
        assert!(!raw.escape);
    }

    #[test]
    fn test_comment_and_cdata_never_escape() {
        assert!(!XmlNode::comment("note").escape);
        assert!(!XmlNode::cdata("raw & data").escape);
    }
}
