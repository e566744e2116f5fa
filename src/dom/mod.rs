//! In-memory XML document model.
//!
//! Nodes live in an arena (`Vec<XmlNode>`) and reference each other through
//! `NodeId` handles, so builder scopes can hold a cursor into the tree
//! without owning any part of it.

pub mod document;
pub mod node;

pub use document::XmlDocument;
pub use node::{NodeId, NodeKind, XmlNode};
