use thiserror::Error;

#[derive(Error, Debug)]
/// Markup builder error
pub enum MarkupError {
    #[error("'{0}' option is not supported")]
    UnsupportedOption(String),

    #[error("cannot mix a text argument with a block")]
    AmbiguousContent,

    #[error("provide at least 1 block argument: `xml.tag(\"node\", vec![], Some(Block::scoped(|xml| ..)))`")]
    BlockArity,

    #[error("blocks are not allowed on XML instructions")]
    NoBlockAllowed,

    #[error("failed to serialize XML tree: {0}")]
    Serialize(String),
}
