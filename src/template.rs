//! Integration surface for hosting template engines.
//!
//! A template handler hands a fresh builder to the template body through
//! [`Template::encode`] and gets the rendered document back. Sub-templates
//! are rendered through the engine's [`RenderContext`], which receives the
//! current [`Scope`] so nested templates keep building onto the same tree.
//!
//! # Examples
//!
//! ```
//! use xbuilder_rs::core::args::Arg;
//! use xbuilder_rs::core::scope::{Block, Scope};
//! use xbuilder_rs::error::MarkupError;
//! use xbuilder_rs::template::{RenderContext, Template};
//!
//! struct Engine;
//!
//! impl RenderContext for Engine {
//!     fn render(&self, template: &str, xml: &mut Scope<'_>) -> Result<(), MarkupError> {
//!         match template {
//!             "item" => xml.tag("item", vec![Arg::text("partial")], None).map(|_| ()),
//!             other => xml.comment(format!("missing template {}", other), None).map(|_| ()),
//!         }
//!     }
//! }
//!
//! let engine = Engine;
//! let output = Template::encode(&engine, |t| {
//!     let ctx = t.context();
//!     t.markup()
//!         .tag(
//!             "list",
//!             vec![],
//!             Some(Block::scoped(move |xml| ctx.render("item", xml))),
//!         )
//!         .map(|_| ())
//! })
//! .unwrap();
//!
//! assert!(output.ends_with("<list><item>partial</item></list>"));
//! ```

use crate::core::markup::{XmlMarkup, XmlMarkupBuilder};
use crate::core::scope::Scope;
use crate::error::MarkupError;

/// Callback into the hosting template engine.
///
/// Implementations resolve a sub-template by name and build its output onto
/// the scope they are handed.
pub trait RenderContext {
    /// Render a named sub-template onto the given scope.
    fn render(&self, template: &str, xml: &mut Scope<'_>) -> Result<(), MarkupError>;
}

/// One template rendering pass: a builder plus the engine context that can
/// resolve sub-templates for it.
pub struct Template<'c, C: RenderContext> {
    markup: XmlMarkup,
    context: &'c C,
}

impl<'c, C: RenderContext> Template<'c, C> {
    /// Hand a fresh default-configured builder to the template body and
    /// return the rendered document.
    pub fn encode<F>(context: &'c C, body: F) -> Result<String, MarkupError>
    where
        F: FnOnce(&mut Template<'c, C>) -> Result<(), MarkupError>,
    {
        Self::encode_with(context, XmlMarkup::builder(), body)
    }

    /// Like [`encode`](Self::encode) with explicit builder options.
    pub fn encode_with<F>(
        context: &'c C,
        options: XmlMarkupBuilder,
        body: F,
    ) -> Result<String, MarkupError>
    where
        F: FnOnce(&mut Template<'c, C>) -> Result<(), MarkupError>,
    {
        let mut template = Template {
            markup: options.build()?,
            context,
        };
        body(&mut template)?;
        template.markup.target()
    }

    /// The underlying builder, for direct tag construction.
    pub fn markup(&mut self) -> &mut XmlMarkup {
        &mut self.markup
    }

    /// The hosting engine context. Capture it before entering a nested
    /// block to render partials at inner levels, as in the module example.
    pub fn context(&self) -> &'c C {
        self.context
    }

    /// Render a sub-template at the current top-level position.
    pub fn partial(&mut self, template: &str) -> Result<(), MarkupError> {
        let mut scope = self.markup.scope();
        self.context.render(template, &mut scope)
    }
}
