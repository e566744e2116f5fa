use log::debug;

use crate::core::args::{classify, Arg, Value};
use crate::core::markup::Diagnostics;
use crate::dom::{NodeId, XmlDocument, XmlNode};
use crate::error::MarkupError;

/// Result type returned by nested builder blocks.
pub type BlockResult = Result<(), MarkupError>;

/// Where the next node built in a scope gets attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachPoint {
    /// The next top-level node becomes the document root
    Document,
    /// New nodes append as children of this element
    Element(NodeId),
}

/// A nested child-building block.
///
/// The builder only runs blocks that declare the child scope argument;
/// [`Block::bare`] exists so call sites that forgot the scope handle are
/// rejected with [`MarkupError::BlockArity`] instead of silently building
/// against the wrong level.
pub struct Block<'f>(BlockFn<'f>);

enum BlockFn<'f> {
    Scoped(Box<dyn FnOnce(&mut Scope<'_>) -> BlockResult + 'f>),
    Bare(Box<dyn FnOnce() -> BlockResult + 'f>),
}

impl<'f> Block<'f> {
    /// A block that receives the child scope handle.
    pub fn scoped<F>(f: F) -> Self
    where
        F: FnOnce(&mut Scope<'_>) -> BlockResult + 'f,
    {
        Block(BlockFn::Scoped(Box::new(f)))
    }

    /// A block that ignores the child scope entirely. Always rejected by
    /// [`Scope::tag`].
    pub fn bare<F>(f: F) -> Self
    where
        F: FnOnce() -> BlockResult + 'f,
    {
        Block(BlockFn::Bare(Box::new(f)))
    }

    fn into_scoped(
        self,
    ) -> Result<Box<dyn FnOnce(&mut Scope<'_>) -> BlockResult + 'f>, MarkupError> {
        match self.0 {
            BlockFn::Scoped(f) => Ok(f),
            BlockFn::Bare(_) => Err(MarkupError::BlockArity),
        }
    }
}

/// The current attachment point during tree construction.
///
/// A scope is created once per nesting level: the facade opens one at the
/// document level, and every nested block receives a fresh scope rooted at
/// the element its call just created. All DSL operations go through a scope,
/// so writes only ever happen at the current frontier of the tree.
pub struct Scope<'d> {
    doc: &'d mut XmlDocument,
    at: AttachPoint,
    diagnostics: &'d dyn Diagnostics,
}

impl<'d> Scope<'d> {
    pub(crate) fn new(
        doc: &'d mut XmlDocument,
        at: AttachPoint,
        diagnostics: &'d dyn Diagnostics,
    ) -> Self {
        Scope {
            doc,
            at,
            diagnostics,
        }
    }

    /// Build an element named `name` from a classified argument list and
    /// attach it at the current position.
    ///
    /// This is the single dispatch point every tag goes through, so names
    /// that collide with Rust keywords or builder method names ("loop",
    /// "match", "tag") work like any other. Text content and a nested block
    /// are mutually exclusive on one call; a block must declare the child
    /// scope argument. The created node's id is returned so callers can
    /// inspect or stringify the subtree afterwards.
    pub fn tag(
        &mut self,
        name: &str,
        args: Vec<Arg>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        let classified = classify(name, args);
        debug!("building element <{}>", classified.name);

        let id = self.doc.push(XmlNode::element(classified.name));
        for (key, value) in classified.attributes {
            self.doc.set_attribute(id, key, value);
        }

        if classified.text.is_some() && block.is_some() {
            return Err(MarkupError::AmbiguousContent);
        }

        if let Some(text) = classified.text {
            let child = self.doc.push(XmlNode::text(text, true));
            self.doc.append_child(id, child);
        }

        if let Some(block) = block {
            let f = block.into_scoped()?;
            let mut child = Scope::new(self.doc, AttachPoint::Element(id), self.diagnostics);
            f(&mut child)?;
        }

        self.append_node(id);
        Ok(id)
    }

    /// Append a text node with the given escape flag.
    pub fn text(
        &mut self,
        content: impl Into<Value>,
        escape: bool,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        Self::ensure_no_block(&block)?;
        let id = self
            .doc
            .push(XmlNode::text(content.into().to_string(), escape));
        self.append_node(id);
        Ok(id)
    }

    /// Append raw text verbatim, with no escaping on render.
    pub fn raw(&mut self, content: impl Into<Value>) -> Result<NodeId, MarkupError> {
        self.text(content, false, None)
    }

    /// Append a comment node. Comment content is emitted verbatim.
    pub fn comment(
        &mut self,
        content: impl Into<Value>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        Self::ensure_no_block(&block)?;
        let id = self.doc.push(XmlNode::comment(content.into().to_string()));
        self.append_node(id);
        Ok(id)
    }

    /// Append a CDATA node. Content is emitted verbatim; a literal `]]>`
    /// inside is the caller's responsibility.
    pub fn cdata(
        &mut self,
        content: impl Into<Value>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        Self::ensure_no_block(&block)?;
        let id = self.doc.push(XmlNode::cdata(content.into().to_string()));
        self.append_node(id);
        Ok(id)
    }

    /// XML declarations beyond the default header are not supported. The
    /// call is accepted for compatibility, mutates nothing and never fails;
    /// it only surfaces an advisory through the diagnostic sink.
    pub fn declare(&mut self, _args: Vec<Arg>, _block: Option<Block<'_>>) {
        self.diagnostics
            .advisory("XML declarations are not supported");
    }

    /// Custom XML instructions are not supported. Accepted for
    /// compatibility; advisory only, never fails.
    pub fn instruct(&mut self, _args: Vec<Arg>) {
        self.diagnostics
            .advisory("custom XML instructions are not supported");
    }

    fn ensure_no_block(block: &Option<Block<'_>>) -> Result<(), MarkupError> {
        if block.is_some() {
            return Err(MarkupError::NoBlockAllowed);
        }
        Ok(())
    }

    fn append_node(&mut self, id: NodeId) {
        match self.at {
            AttachPoint::Document => self.doc.set_root(id),
            AttachPoint::Element(parent) => self.doc.append_child(parent, id),
        }
    }
}
