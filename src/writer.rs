use log::debug;
use quick_xml::{
    events::{BytesCData, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::io::{Cursor, Write};

use crate::dom::{NodeId, NodeKind, XmlDocument};
use crate::error::MarkupError;

/// Serializes a finished document tree to text.
///
/// The output always starts with the declaration line
/// `<?xml version="1.0" encoding="<ENC>"?>` followed by a newline. When the
/// indent width is greater than zero each nesting level is rendered on its
/// own line, indented by `indent × depth` spaces; text content stays inline
/// with its element. A margin prefixes every output line with
/// `indent × margin` additional spaces.
pub struct TreeWriter<'d> {
    doc: &'d XmlDocument,
    indent: usize,
    margin: usize,
    encoding: &'d str,
}

impl<'d> TreeWriter<'d> {
    pub fn new(doc: &'d XmlDocument, indent: usize, margin: usize, encoding: &'d str) -> Self {
        TreeWriter {
            doc,
            indent,
            margin,
            encoding,
        }
    }

    /// Render the whole document: declaration line plus tree body.
    pub fn document_string(&self) -> Result<String, MarkupError> {
        debug!("serializing document ({} nodes)", self.doc.node_count());

        let mut out = format!(
            "<?xml version=\"1.0\" encoding=\"{}\"?>\n",
            self.encoding.to_uppercase()
        );
        if let Some(root) = self.doc.root() {
            out.push_str(&self.body_string(root)?);
        }
        Ok(self.apply_margin(out))
    }

    /// Render one subtree as if it alone were the root: same indent width,
    /// no declaration line and no margin.
    pub fn node_string(&self, id: NodeId) -> Result<String, MarkupError> {
        self.body_string(id)
    }

    fn body_string(&self, id: NodeId) -> Result<String, MarkupError> {
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(Cursor::new(Vec::new()), b' ', self.indent)
        } else {
            Writer::new(Cursor::new(Vec::new()))
        };
        self.write_node(&mut writer, id)?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes)
            .map_err(|e| MarkupError::Serialize(format!("output is not valid UTF-8: {}", e)))
    }

    fn write_node<W: Write>(
        &self,
        writer: &mut Writer<W>,
        id: NodeId,
    ) -> Result<(), MarkupError> {
        let node = self
            .doc
            .get(id)
            .ok_or_else(|| MarkupError::Serialize(format!("unknown node id {}", id)))?;

        match node.kind {
            NodeKind::Element => {
                let mut start = BytesStart::new(node.name.as_str());
                for (key, value) in &node.attributes {
                    start.push_attribute((key.as_str(), value.as_str()));
                }
                if node.children.is_empty() {
                    Self::emit(writer, Event::Empty(start))?;
                } else {
                    Self::emit(writer, Event::Start(start))?;
                    for child in &node.children {
                        self.write_node(writer, *child)?;
                    }
                    Self::emit(writer, Event::End(BytesEnd::new(node.name.as_str())))?;
                }
            }
            NodeKind::Text => {
                let text = if node.escape {
                    BytesText::new(&node.content)
                } else {
                    BytesText::from_escaped(node.content.as_str())
                };
                Self::emit(writer, Event::Text(text))?;
            }
            NodeKind::Comment => {
                Self::emit(
                    writer,
                    Event::Comment(BytesText::from_escaped(node.content.as_str())),
                )?;
            }
            NodeKind::CData => {
                Self::emit(writer, Event::CData(BytesCData::new(node.content.as_str())))?;
            }
        }
        Ok(())
    }

    fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), MarkupError> {
        writer
            .write_event(event)
            .map_err(|e| MarkupError::Serialize(format!("failed to write XML event: {}", e)))
    }

    fn apply_margin(&self, out: String) -> String {
        let width = self.indent * self.margin;
        if width == 0 {
            return out;
        }
        let pad = " ".repeat(width);
        let mut result = String::with_capacity(out.len() + pad.len());
        for line in out.split_inclusive('\n') {
            result.push_str(&pad);
            result.push_str(line);
        }
        result
    }
}
