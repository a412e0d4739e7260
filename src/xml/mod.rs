//! XML element tree and the parse/serialize boundary.
//!
//! The tree is a single-owner structure: each element owns its children
//! outright and there are no parent pointers. All structural edits go
//! through the parent element, which is what keeps the slot layer in
//! `crate::schema` borrow-safe without interior mutability.
//!
//! Namespace prefixes (`a:`, `p:`, `r:`) are carried as part of the tag
//! string and treated as opaque; `xmlns:*` declarations round-trip as
//! ordinary attributes.

pub mod element;
pub mod parse;
pub mod write;

pub use element::XmlElement;
pub use parse::parse_fragment;
pub use write::write_element;
