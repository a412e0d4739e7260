//! Typed views over PresentationML shape elements.
//!
//! Each view wraps a borrowed [`crate::xml::element::XmlElement`] and
//! exposes the element type's declared attribute and child slots as typed
//! accessors. Views hold an exclusive borrow: the tree is single-owner and
//! all mutation flows through the parent element.
//!
//! The facade for whole shapes lives in [`base`]; the building blocks
//! ([`transform`], [`line`], [`properties`], [`nonvisual`]) are public so
//! consumers with unusual shape layouts can compose their own lookup from
//! the same slot primitives.

pub mod base;
pub mod line;
pub mod nonvisual;
pub mod properties;
pub mod transform;

pub use base::{SHAPE_TAGS, ShapeElement};
pub use line::LineProperties;
pub use nonvisual::{AppNonVisualProps, NonVisualProps, Placeholder};
pub use properties::ShapeProperties;
pub use transform::{Transform, Transformable};
