//! Error types for schema-layer operations.
use thiserror::Error;

/// Result type for schema-layer operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Error type raised by element, slot, and facade operations.
///
/// The variants fall into four families:
///
/// - schema violations (`MissingAttribute`, `MissingChild`): the document
///   itself is malformed and the caller must decide how to recover;
/// - decode failures (`InvalidValue`): an attribute string does not match
///   its value space;
/// - precondition violations (`NotAPlaceholder`, `ElementMismatch`): the
///   caller asked a question the element structurally cannot answer;
/// - configuration errors (`UnknownElement`): a slot names a tag the element
///   registry does not know. Never data-dependent; indicates a bug.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Required attribute missing on an existing element
    #[error("required attribute `{attr}` missing on `{tag}`")]
    MissingAttribute { tag: String, attr: &'static str },

    /// Structurally mandatory child element missing
    #[error("required child `{child}` missing under `{tag}`")]
    MissingChild { tag: String, child: &'static str },

    /// Attribute string does not match its codec's grammar
    #[error("invalid value `{value}`: expected {expected}")]
    InvalidValue {
        value: String,
        expected: &'static str,
    },

    /// Placeholder accessor used on a shape with no placeholder marker
    #[error("shape element has no placeholder marker")]
    NotAPlaceholder,

    /// Element has the wrong tag for the requested typed view
    #[error("element `{tag}` cannot be read as `{expected}`")]
    ElementMismatch {
        tag: String,
        expected: String,
    },

    /// Tag not present in the element registry
    #[error("no element definition registered for tag `{0}`")]
    UnknownElement(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for SchemaError {
    fn from(err: quick_xml::Error) -> Self {
        SchemaError::Xml(err.to_string())
    }
}
