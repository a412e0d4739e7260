//! Declarative schema-enforcement layer.
//!
//! Element types declare their schema as `const` slot tables: attribute
//! slots ([`attrs`]) pair an attribute name with a codec ([`simple_types`])
//! and required/optional semantics; child slots ([`children`]) pair a child
//! tag (or a mutually exclusive candidate set) with the list of sibling
//! tags that must follow it. The generic get/set/insert routines consult
//! those tables, so declaring a slot once yields typed access and
//! order-preserving mutation with no per-field code.
//!
//! New occupants are built from the element [`registry`], which knows the
//! schema-default attribute set of every constructible tag.

pub mod attrs;
pub mod children;
pub mod registry;
pub mod simple_types;

pub use attrs::{DefaultedAttr, OptionalAttr, RequiredAttr};
pub use children::{ChildSlot, ChoiceSlot};
pub use simple_types::SimpleType;
