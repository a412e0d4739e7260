//! Pomelo - a schema-aware object model for PresentationML shape XML
//!
//! This library gives typed, read/write access to the XML fragments that
//! describe shapes in PowerPoint presentations (`p:sp`, `p:cxnSp`,
//! `p:pic`): position, size, rotation and flip, placeholder role metadata,
//! and line/fill styling. Every mutation keeps the underlying tree valid
//! against the schema's element-ordering and attribute-typing rules.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Element tree** (`xml`): a single-owner XML tree with structural
//!    queries, plus the `quick-xml` based parse/serialize boundary
//! 2. **Schema layer** (`schema`): declarative attribute and child slots —
//!    codecs, required/optional semantics, and the insertion-ordering rule
//!    that keeps sibling elements in their schema-defined sequence
//! 3. **Shape views** (`shapes`): typed wrappers composing the slots into
//!    derived properties with null propagation and lazy materialization
//!
//! # Example
//!
//! ```rust
//! use pomelo::{Length, ShapeElement, Transformable, parse_fragment};
//!
//! # fn main() -> pomelo::Result<()> {
//! let xml = br#"<p:sp>
//!   <p:nvSpPr>
//!     <p:cNvPr id="2" name="Title 1"/>
//!     <p:cNvSpPr/>
//!     <p:nvPr><p:ph type="title"/></p:nvPr>
//!   </p:nvSpPr>
//!   <p:spPr/>
//! </p:sp>"#;
//!
//! let mut tree = parse_fragment(xml)?;
//! let mut shape = ShapeElement::new(&mut tree)?;
//!
//! assert!(shape.is_placeholder());
//! assert_eq!(shape.shape_name()?, "Title 1");
//!
//! // no transform yet: position reads as absent, not as zero
//! assert_eq!(shape.x()?, None);
//!
//! // writing materializes the missing links in schema order
//! shape.set_x(Length::from_inches(1.0))?;
//! assert_eq!(shape.x()?, Some(Length::new(914_400)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod length;
pub mod schema;
pub mod shapes;
pub mod xml;

pub use error::{Result, SchemaError};
pub use length::Length;
pub use schema::simple_types::{
    Direction, PlaceholderSize, PlaceholderType, PresetLineDash, SimpleType,
};
pub use shapes::{
    AppNonVisualProps, LineProperties, NonVisualProps, Placeholder, ShapeElement, ShapeProperties,
    Transform, Transformable,
};
pub use xml::{XmlElement, parse_fragment, write_element};
