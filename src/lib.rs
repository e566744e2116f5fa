#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 <div align="center">
   <h1>Xbuilder for Rust</h1>
   <h3>A fluent builder for constructing and serializing XML document trees</h3>

   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # Xbuilder for Rust

 **xbuilder-rs** builds XML documents through nested builder calls instead of
 string concatenation. Every call creates a node, attaches it at the current
 position in the tree, and optionally opens a nested scope for children; the
 finished tree then renders to a deterministic string with configurable
 indentation, margin and encoding, with entity escaping handled for you.

 ## Core Concepts

Understanding these core components will help you get started:

- **XmlMarkup:** The builder facade a caller interacts with. It owns the
  document being built and the render configuration, and exposes the whole
  DSL: tags, text, comments, CDATA and serialization.
- **Scope:** The current attachment point during nested construction. Each
  nested block receives a fresh `Scope` rooted at the element its call
  created, so writes only ever happen at the frontier of the tree.
- **Arg / Value:** A builder call takes an ordered, dynamically-typed
  argument list. A leading symbol becomes a namespace prefix, mappings
  become attributes, everything else is stringified into text content.
- **Block:** A nested child-building closure. Blocks must declare the child
  scope argument; text content and a block are mutually exclusive on one
  call.
- **TreeWriter:** Renders the finished tree: XML declaration line, entity
  escaping, self-closing empty elements, indentation and margin.

 ## Features

The crate is modular, allowing you to enable only the features you need:

| **Feature** | **Description**                                                  |
|-------------|------------------------------------------------------------------|
| json        | Builds argument lists from `serde_json::Value` dynamic data      |
| template    | Integration surface for hosting template engines                 |
| full        | Enables all available features                                   |

 ## Getting Started

```toml
[dependencies]
xbuilder-rs = { version = "<version>", features = ["<full|json|template>"] }
```

Then, building a document:

```rust
use xbuilder_rs::{
    core::{args::Arg, markup::XmlMarkup, scope::Block},
    error::MarkupError,
};

fn main() -> Result<(), MarkupError> {
    let mut xml = XmlMarkup::builder().indent(2).build()?;

    xml.tag(
        "catalog",
        vec![Arg::map([("count", 2)])],
        Some(Block::scoped(|xml| {
            xml.tag(
                "product",
                vec![Arg::map([("id", 1)]), Arg::text("Laptop")],
                None,
            )?;
            xml.tag(
                "product",
                vec![Arg::map([("id", 2)]), Arg::text("Phone")],
                None,
            )?;
            xml.comment("prices omitted", None)?;
            Ok(())
        })),
    )?;

    let output = xml.target()?;
    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(output.contains("<product id=\"1\">Laptop</product>"));
    assert!(output.contains("<!--prices omitted-->"));

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Core module for building markup: argument classification, scopes and the
/// builder facade
pub mod core;

/// In-memory document model
pub mod dom;

/// Error types for markup operations
pub mod error;

/// Tree serialization
pub mod writer;

#[doc(inline)]
pub use error::*;

#[cfg(feature = "template")]
#[cfg_attr(docsrs, doc(cfg(feature = "template")))]
/// Integration surface for hosting template engines
pub mod template;
