//! Attribute slots: typed get/set over a single attribute.
//!
//! A slot binds an attribute name to a codec from
//! [`crate::schema::simple_types`] plus required/optional semantics. Slots
//! are declared as `const` items on the element type that owns them and
//! consulted by the facade wrappers, so the name, codec, and default live in
//! exactly one place.
//!
//! Slots touch only their own attribute; they never mutate children.
use crate::error::{Result, SchemaError};
use crate::schema::simple_types::SimpleType;
use crate::xml::element::XmlElement;
use std::marker::PhantomData;

/// An attribute the schema requires to be present.
///
/// Absence on an existing element is a schema violation, not a defaultable
/// condition.
pub struct RequiredAttr<C: SimpleType> {
    name: &'static str,
    _codec: PhantomData<C>,
}

impl<C: SimpleType> RequiredAttr<C> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _codec: PhantomData,
        }
    }

    /// Decode the attribute value; `MissingAttribute` when absent.
    pub fn get(&self, el: &XmlElement) -> Result<C::Value> {
        match el.attr_raw(self.name) {
            Some(s) => C::decode(s),
            None => Err(SchemaError::MissingAttribute {
                tag: el.tag().to_string(),
                attr: self.name,
            }),
        }
    }

    /// Encode and write the value, creating the attribute if absent.
    pub fn set(&self, el: &mut XmlElement, value: C::Value) {
        el.set_attr_raw(self.name, C::encode(&value));
    }
}

/// An optional attribute with no schema default; reads yield `Option`.
pub struct OptionalAttr<C: SimpleType> {
    name: &'static str,
    _codec: PhantomData<C>,
}

impl<C: SimpleType> OptionalAttr<C> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _codec: PhantomData,
        }
    }

    /// Decode the attribute value, `None` when absent.
    pub fn get(&self, el: &XmlElement) -> Result<Option<C::Value>> {
        match el.attr_raw(self.name) {
            Some(s) => C::decode(s).map(Some),
            None => Ok(None),
        }
    }

    /// Write the value; `None` removes the attribute.
    pub fn set(&self, el: &mut XmlElement, value: Option<C::Value>) {
        match value {
            Some(v) => el.set_attr_raw(self.name, C::encode(&v)),
            None => el.remove_attr(self.name),
        }
    }
}

/// An optional attribute with a schema-defined default.
///
/// Reads never fail on absence; they yield the declared default. Writing a
/// value equal to the default removes the attribute, so serialized output
/// carries only meaningful deviations (this is also what makes boolean
/// flags whose default is false disappear when cleared).
pub struct DefaultedAttr<C: SimpleType> {
    name: &'static str,
    default: C::Value,
    _codec: PhantomData<C>,
}

impl<C: SimpleType> DefaultedAttr<C> {
    pub const fn new(name: &'static str, default: C::Value) -> Self {
        Self {
            name,
            default,
            _codec: PhantomData,
        }
    }

    /// Decode the attribute value, substituting the default when absent.
    pub fn get(&self, el: &XmlElement) -> Result<C::Value> {
        match el.attr_raw(self.name) {
            Some(s) => C::decode(s),
            None => Ok(self.default.clone()),
        }
    }

    /// Write the value, removing the attribute when it equals the default.
    pub fn set(&self, el: &mut XmlElement, value: C::Value) {
        if value == self.default {
            el.remove_attr(self.name);
        } else {
            el.set_attr_raw(self.name, C::encode(&value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;
    use crate::schema::simple_types::{StCoordinate, XsdBoolean, XsdString, XsdUnsignedInt};

    const X: RequiredAttr<StCoordinate> = RequiredAttr::new("x");
    const IDX: DefaultedAttr<XsdUnsignedInt> = DefaultedAttr::new("idx", 0);
    const FLIP_H: DefaultedAttr<XsdBoolean> = DefaultedAttr::new("flipH", false);
    const DESCR: OptionalAttr<XsdString> = OptionalAttr::new("descr");

    #[test]
    fn test_required_missing_is_schema_violation() {
        let el = XmlElement::new("a:off");
        match X.get(&el) {
            Err(SchemaError::MissingAttribute { tag, attr }) => {
                assert_eq!(tag, "a:off");
                assert_eq!(attr, "x");
            },
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_required_get_set() {
        let mut el = XmlElement::new("a:off");
        X.set(&mut el, Length::new(914_400));
        assert_eq!(el.attr_raw("x"), Some("914400"));
        assert_eq!(X.get(&el).unwrap(), Length::new(914_400));
    }

    #[test]
    fn test_decode_failure_surfaces() {
        let mut el = XmlElement::new("a:off");
        el.set_attr_raw("x", "wide");
        assert!(matches!(X.get(&el), Err(SchemaError::InvalidValue { .. })));
    }

    #[test]
    fn test_defaulted_substitutes_on_absence() {
        let el = XmlElement::new("p:ph");
        assert_eq!(IDX.get(&el).unwrap(), 0);
        assert!(!FLIP_H.get(&el).unwrap());
    }

    #[test]
    fn test_set_to_default_removes_attribute() {
        let mut el = XmlElement::new("a:xfrm");
        FLIP_H.set(&mut el, true);
        assert_eq!(el.attr_raw("flipH"), Some("1"));
        FLIP_H.set(&mut el, false);
        assert_eq!(el.attr_raw("flipH"), None);
    }

    #[test]
    fn test_optional_without_default() {
        let mut el = XmlElement::new("p:cNvPr");
        assert_eq!(DESCR.get(&el).unwrap(), None);
        DESCR.set(&mut el, Some("alt text".to_string()));
        assert_eq!(DESCR.get(&el).unwrap().as_deref(), Some("alt text"));
        DESCR.set(&mut el, None);
        assert_eq!(el.attr_raw("descr"), None);
    }
}
