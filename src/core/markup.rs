use log::warn;

use crate::core::args::{Arg, Value};
use crate::core::scope::{AttachPoint, Block, Scope};
use crate::dom::{NodeId, XmlDocument};
use crate::error::MarkupError;
use crate::writer::TreeWriter;

/// Sink for advisory diagnostics.
///
/// Accepted-but-unsupported requests (custom declarations and instructions)
/// never abort tree construction; they surface one message here instead. The
/// default sink forwards to the `log` facade, so hosting applications see
/// advisories through whatever logger they installed. Tests typically inject
/// a capturing sink.
pub trait Diagnostics {
    /// Report an advisory message.
    fn advisory(&self, message: &str);
}

/// Default diagnostic sink, logging advisories at warn level.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn advisory(&self, message: &str) {
        warn!("{}", message);
    }
}

/// A fluent XML document builder.
///
/// Tags nest through blocks: every block receives a fresh [`Scope`] rooted
/// at the element its call created, and everything built in the block
/// attaches there in call order.
///
/// # Examples
///
/// ```
/// use xbuilder_rs::core::args::Arg;
/// use xbuilder_rs::core::markup::XmlMarkup;
/// use xbuilder_rs::core::scope::Block;
///
/// let mut xml = XmlMarkup::new();
/// xml.tag(
///     "node",
///     vec![Arg::map([("attr", 1)])],
///     Some(Block::scoped(|xml| {
///         xml.tag("ns", vec![Arg::sym("child"), Arg::map([("attr", 2)])], None)?;
///         Ok(())
///     })),
/// )
/// .unwrap();
///
/// assert_eq!(
///     xml.target().unwrap(),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<node attr=\"1\"><ns:child attr=\"2\"/></node>"
/// );
/// ```
///
/// Rendering with indentation:
///
/// ```
/// use xbuilder_rs::core::args::Arg;
/// use xbuilder_rs::core::markup::XmlMarkup;
/// use xbuilder_rs::core::scope::Block;
///
/// let mut xml = XmlMarkup::builder().indent(2).build().unwrap();
/// xml.tag(
///     "ol",
///     vec![],
///     Some(Block::scoped(|xml| {
///         xml.tag("li", vec![Arg::text("text")], None)?;
///         Ok(())
///     })),
/// )
/// .unwrap();
///
/// assert_eq!(
///     xml.target().unwrap(),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ol>\n  <li>text</li>\n</ol>"
/// );
/// ```
pub struct XmlMarkup {
    doc: XmlDocument,
    at: AttachPoint,
    indent: usize,
    margin: usize,
    encoding: String,
    diagnostics: Box<dyn Diagnostics>,
}

impl XmlMarkup {
    /// Create a builder over a fresh empty document with default options:
    /// encoding "UTF-8", no indentation, no margin.
    pub fn new() -> Self {
        XmlMarkupBuilder::new()
            .build()
            .expect("default options are always supported")
    }

    /// Start configuring a builder.
    pub fn builder() -> XmlMarkupBuilder {
        XmlMarkupBuilder::new()
    }

    /// Build an element. See [`Scope::tag`] for the argument contract; this
    /// entry point attaches at the document level (or under the configured
    /// root element).
    pub fn tag(
        &mut self,
        name: &str,
        args: Vec<Arg>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        self.scope().tag(name, args, block)
    }

    /// Append a text node with the given escape flag.
    ///
    /// ```
    /// use xbuilder_rs::core::markup::XmlMarkup;
    ///
    /// let mut xml = XmlMarkup::new();
    /// xml.text("escaped & text", true, None).unwrap();
    /// assert!(xml.target().unwrap().ends_with("escaped &amp; text"));
    /// ```
    pub fn text(
        &mut self,
        content: impl Into<Value>,
        escape: bool,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        self.scope().text(content, escape, block)
    }

    /// Append raw text with no escaping, the shorthand append operation.
    ///
    /// ```
    /// use xbuilder_rs::core::markup::XmlMarkup;
    ///
    /// let mut xml = XmlMarkup::new();
    /// xml.raw("unescaped & text").unwrap();
    /// assert!(xml.target().unwrap().ends_with("unescaped & text"));
    /// ```
    pub fn raw(&mut self, content: impl Into<Value>) -> Result<NodeId, MarkupError> {
        self.scope().raw(content)
    }

    /// Append a comment node.
    pub fn comment(
        &mut self,
        content: impl Into<Value>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        self.scope().comment(content, block)
    }

    /// Append a CDATA node.
    pub fn cdata(
        &mut self,
        content: impl Into<Value>,
        block: Option<Block<'_>>,
    ) -> Result<NodeId, MarkupError> {
        self.scope().cdata(content, block)
    }

    /// Accepted for compatibility; advisory only. See [`Scope::declare`].
    pub fn declare(&mut self, args: Vec<Arg>, block: Option<Block<'_>>) {
        self.scope().declare(args, block)
    }

    /// Accepted for compatibility; advisory only. See [`Scope::instruct`].
    pub fn instruct(&mut self, args: Vec<Arg>) {
        self.scope().instruct(args)
    }

    /// Render the document: declaration line plus tree, with the configured
    /// indentation, margin and encoding.
    pub fn target(&self) -> Result<String, MarkupError> {
        TreeWriter::new(&self.doc, self.indent, self.margin, &self.encoding).document_string()
    }

    /// Render one built subtree on its own: same indent width as the
    /// document, without the declaration line and without margin.
    ///
    /// ```
    /// use xbuilder_rs::core::args::Arg;
    /// use xbuilder_rs::core::markup::XmlMarkup;
    ///
    /// let mut xml = XmlMarkup::new();
    /// let id = xml.tag("x", vec![Arg::text("men")], None).unwrap();
    /// assert_eq!(xml.node_string(id).unwrap(), "<x>men</x>");
    /// ```
    pub fn node_string(&self, id: NodeId) -> Result<String, MarkupError> {
        TreeWriter::new(&self.doc, self.indent, 0, &self.encoding).node_string(id)
    }

    /// The document built so far.
    pub fn document(&self) -> &XmlDocument {
        &self.doc
    }

    /// Consume the builder and take the document.
    pub fn into_document(self) -> XmlDocument {
        self.doc
    }

    pub(crate) fn scope(&mut self) -> Scope<'_> {
        Scope::new(&mut self.doc, self.at, self.diagnostics.as_ref())
    }
}

impl Default for XmlMarkup {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring an [`XmlMarkup`] instance.
///
/// # Examples
///
/// ```
/// use xbuilder_rs::core::markup::XmlMarkup;
///
/// let xml = XmlMarkup::builder()
///     .indent(2)
///     .margin(1)
///     .encoding("utf-8")
///     .build()
///     .unwrap();
/// assert!(xml.target().unwrap().starts_with("  <?xml"));
/// ```
///
/// This builder only ever produces an in-memory tree; requesting an external
/// write sink is rejected:
///
/// ```
/// use xbuilder_rs::core::markup::XmlMarkup;
/// use xbuilder_rs::error::MarkupError;
///
/// let result = XmlMarkup::builder().target(Vec::new()).build();
/// assert!(matches!(result, Err(MarkupError::UnsupportedOption(_))));
/// ```
pub struct XmlMarkupBuilder {
    doc: Option<XmlDocument>,
    at: AttachPoint,
    indent: usize,
    margin: usize,
    encoding: String,
    diagnostics: Option<Box<dyn Diagnostics>>,
    target_requested: bool,
}

impl XmlMarkupBuilder {
    /// Creates a new `XmlMarkupBuilder` with default values: a fresh empty
    /// document, encoding "UTF-8", indent 0 and margin 0.
    pub fn new() -> Self {
        Self {
            doc: None,
            at: AttachPoint::Document,
            indent: 0,
            margin: 0,
            encoding: "UTF-8".to_string(),
            diagnostics: None,
            target_requested: false,
        }
    }

    /// Number of spaces used per nesting level. 0 renders on a single line.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Amount of initial indentation, specified in levels. Every output line
    /// is prefixed with `indent × margin` spaces.
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Document encoding written into the XML declaration.
    pub fn encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    /// Adopt an existing document; new top-level nodes attach as its root.
    pub fn document(mut self, doc: XmlDocument) -> Self {
        self.doc = Some(doc);
        self.at = AttachPoint::Document;
        self
    }

    /// Continue building inside an existing document, attaching new nodes as
    /// children of the given element.
    pub fn fragment(mut self, doc: XmlDocument, root: NodeId) -> Self {
        self.doc = Some(doc);
        self.at = AttachPoint::Element(root);
        self
    }

    /// Install a diagnostic sink for advisory messages.
    pub fn diagnostics(mut self, sink: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Request an external write sink. The builder never streams; the
    /// request is recorded and rejected by [`build`](Self::build).
    pub fn target<W: std::io::Write>(mut self, _sink: W) -> Self {
        self.target_requested = true;
        self
    }

    /// Finish configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnsupportedOption`] when an external write
    /// sink was requested.
    pub fn build(self) -> Result<XmlMarkup, MarkupError> {
        if self.target_requested {
            return Err(MarkupError::UnsupportedOption("target".to_string()));
        }
        Ok(XmlMarkup {
            doc: self.doc.unwrap_or_default(),
            at: self.at,
            indent: self.indent,
            margin: self.margin,
            encoding: self.encoding,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Box::new(LogDiagnostics)),
        })
    }
}

impl Default for XmlMarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct CapturingDiagnostics {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl Diagnostics for CapturingDiagnostics {
        fn advisory(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_default_configuration() {
        let xml = XmlMarkup::new();
        assert_eq!(
            xml.target().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        );
    }

    #[test]
    fn test_target_option_is_rejected() {
        let result = XmlMarkup::builder().target(Vec::new()).build();
        match result {
            Err(MarkupError::UnsupportedOption(option)) => assert_eq!(option, "target"),
            other => panic!("expected UnsupportedOption, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_declare_and_instruct_are_advisory_no_ops() {
        let sink = CapturingDiagnostics::default();
        let mut xml = XmlMarkup::builder()
            .diagnostics(Box::new(sink.clone()))
            .build()
            .unwrap();

        xml.declare(vec![Arg::sym("DOCTYPE")], None);
        xml.instruct(vec![Arg::sym("xml")]);

        let messages = sink.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("not supported"));
        assert!(messages[1].contains("not supported"));
        drop(messages);

        // Neither call touched the tree.
        assert_eq!(
            xml.target().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        );
    }

    #[test]
    fn test_fragment_attaches_under_existing_element() {
        let mut xml = XmlMarkup::new();
        let root = xml
            .tag("outer", vec![], None)
            .unwrap();

        let mut continued = XmlMarkup::builder()
            .fragment(xml.into_document(), root)
            .build()
            .unwrap();
        continued.tag("inner", vec![Arg::text("x")], None).unwrap();

        assert_eq!(
            continued.target().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<outer><inner>x</inner></outer>"
        );
    }
}
