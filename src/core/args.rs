//! Argument classification for builder calls.
//!
//! A builder call carries an ordered, dynamically-typed argument list, so
//! template authors can pass attributes and content in whatever order reads
//! best. [`classify`] splits that list into the three things a tag can be
//! made of: a namespace qualifier, attribute pairs, and text content.

use std::fmt;

/// A dynamic scalar value accepted by builder calls.
///
/// Attribute values and text arguments are converted to their canonical
/// string form when the node is built: integers and floats print the way
/// Rust's `Display` prints them, booleans print `true`/`false`.
///
/// ```
/// use xbuilder_rs::core::args::Value;
///
/// assert_eq!(Value::from(12).to_string(), "12");
/// assert_eq!(Value::from(1.5).to_string(), "1.5");
/// assert_eq!(Value::from(true).to_string(), "true");
/// assert_eq!(Value::from("bill").to_string(), "bill");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// One positional argument of a builder call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A bare symbol marker. In leading position it becomes the namespace
    /// prefix of the tag (`xml.tag("rdf", vec![Arg::sym("RDF")], ..)` builds
    /// `<rdf:RDF/>`); anywhere else it is treated as text.
    Sym(String),
    /// An attribute mapping; pairs apply in order.
    Attrs(Vec<(String, Value)>),
    /// A text content argument; multiple concatenate in order.
    Text(Value),
}

impl Arg {
    /// Bare symbol marker.
    pub fn sym(name: impl Into<String>) -> Self {
        Arg::Sym(name.into())
    }

    /// Attribute mapping argument.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Arg::Attrs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Text content argument.
    pub fn text(value: impl Into<Value>) -> Self {
        Arg::Text(value.into())
    }
}

/// The classified parts of one builder call.
#[derive(Debug, PartialEq)]
pub struct Classified {
    /// Tag name, qualified as `prefix:local` when a leading symbol was given
    pub name: String,
    /// Attribute pairs in encounter order; duplicate keys are resolved
    /// last-wins when assigned to the node
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content, None when no text argument was given
    pub text: Option<String>,
}

/// Split an argument list into namespace-qualified name, attributes and text.
///
/// A symbol in leading position is consumed as the namespace suffix of the
/// call name. Every mapping argument contributes its pairs; every other
/// argument is stringified and appended to the text buffer. Classification
/// never fails on its own; the text/block conflict is the tag builder's to
/// detect, since only it sees the block.
pub fn classify(name: &str, args: Vec<Arg>) -> Classified {
    let mut args = args.into_iter();
    let mut pending = args.next();

    let name = match pending {
        Some(Arg::Sym(ref marker)) => {
            let qualified = format!("{}:{}", name, marker);
            pending = args.next();
            qualified
        }
        _ => name.to_string(),
    };

    let mut attributes = Vec::new();
    let mut text: Option<String> = None;

    while let Some(arg) = pending {
        match arg {
            Arg::Attrs(pairs) => {
                attributes.extend(pairs.into_iter().map(|(k, v)| (k, v.to_string())));
            }
            Arg::Text(value) => {
                text.get_or_insert_with(String::new).push_str(&value.to_string());
            }
            // A symbol past the leading position is just more text.
            Arg::Sym(s) => {
                text.get_or_insert_with(String::new).push_str(&s);
            }
        }
        pending = args.next();
    }

    Classified {
        name,
        attributes,
        text,
    }
}

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl From<serde_json::Value> for Value {
    /// Convert a JSON scalar to its builder value. Null becomes the empty
    /// string; arrays and objects fall back to their JSON text.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Str(String::new()),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            other => Value::Str(other.to_string()),
        }
    }
}

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl From<serde_json::Value> for Arg {
    /// A JSON object becomes an attribute mapping; anything else is text.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Arg::Attrs(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
            other => Arg::Text(Value::from(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_no_args() {
        let c = classify("simple", vec![]);
        assert_eq!(c.name, "simple");
        assert!(c.attributes.is_empty());
        assert!(c.text.is_none());
    }

    #[test]
    fn test_leading_symbol_qualifies_name() {
        let c = classify("rdf", vec![Arg::sym("RDF")]);
        assert_eq!(c.name, "rdf:RDF");
        assert!(c.text.is_none());
    }

    #[test]
    fn test_trailing_symbol_is_text() {
        let c = classify("p", vec![Arg::text("hi "), Arg::sym("there")]);
        assert_eq!(c.name, "p");
        assert_eq!(c.text.as_deref(), Some("hi there"));
    }

    #[test]
    fn test_attributes_are_stringified() {
        let c = classify("ref", vec![Arg::map([("id", Value::from(12))])]);
        assert_eq!(
            c.attributes,
            vec![("id".to_string(), "12".to_string())]
        );
    }

    #[test]
    fn test_text_arguments_concatenate_in_order() {
        let c = classify(
            "li",
            vec![Arg::text("a"), Arg::map([("k", "v")]), Arg::text(3)],
        );
        assert_eq!(c.text.as_deref(), Some("a3"));
        assert_eq!(c.attributes.len(), 1);
    }

    #[test]
    fn test_multiple_mappings_keep_encounter_order() {
        let c = classify(
            "ref",
            vec![
                Arg::map([("id", Value::from(1))]),
                Arg::map([("name", Value::from("bill")), ("id", Value::from(2))]),
            ],
        );
        assert_eq!(
            c.attributes,
            vec![
                ("id".to_string(), "1".to_string()),
                ("name".to_string(), "bill".to_string()),
                ("id".to_string(), "2".to_string()),
            ]
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_object_becomes_attrs() {
        let arg = Arg::from(serde_json::json!({"id": 7, "ok": true}));
        let c = classify("node", vec![arg]);
        assert!(c.attributes.contains(&("id".to_string(), "7".to_string())));
        assert!(c.attributes.contains(&("ok".to_string(), "true".to_string())));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_scalar_becomes_text() {
        let c = classify("price", vec![Arg::from(serde_json::json!(12.5))]);
        assert_eq!(c.text.as_deref(), Some("12.5"));
    }
}
