/// Argument classification for builder calls
pub mod args;

/// The builder facade and its configuration
pub mod markup;

/// Tag construction, nesting scopes and leaf insertion
pub mod scope;
