//! Registry of constructible element types.
//!
//! Maps a tag name to the attribute set a schema-default instance of that
//! element carries. Child slots consult the registry when they need to
//! materialize an absent occupant; asking for a tag that is not registered
//! is a configuration error (a bug in a slot declaration, never a property
//! of the document being edited).
use crate::error::{Result, SchemaError};
use crate::xml::element::XmlElement;
use phf::phf_map;

/// Attributes applied to newly constructed elements, per tag.
///
/// Required attributes must hold a value from the moment the element
/// exists, so tags like `a:off` and `a:ext` are born with zeroed
/// coordinates.
static NEW_ELEMENT_DEFAULTS: phf::Map<&'static str, &'static [(&'static str, &'static str)]> = phf_map! {
    // transform tree
    "a:xfrm" => &[],
    "a:off" => &[("x", "0"), ("y", "0")],
    "a:ext" => &[("cx", "0"), ("cy", "0")],
    "a:chOff" => &[("x", "0"), ("y", "0")],
    "a:chExt" => &[("cx", "0"), ("cy", "0")],
    // geometry
    "a:prstGeom" => &[("prst", "rect")],
    "a:custGeom" => &[],
    // fills
    "a:noFill" => &[],
    "a:solidFill" => &[],
    "a:gradFill" => &[],
    "a:blipFill" => &[],
    "a:pattFill" => &[],
    "a:grpFill" => &[],
    // line styling
    "a:ln" => &[],
    "a:prstDash" => &[],
    "a:custDash" => &[],
    // effects
    "a:effectLst" => &[],
    // non-visual properties
    "a:hlinkClick" => &[],
    "a:hlinkHover" => &[],
    "p:nvPr" => &[],
    "p:ph" => &[],
};

/// Construct a schema-default element for a registered tag.
pub fn new_element(tag: &str) -> Result<XmlElement> {
    let defaults = NEW_ELEMENT_DEFAULTS
        .get(tag)
        .ok_or_else(|| SchemaError::UnknownElement(tag.to_string()))?;
    let mut el = XmlElement::new(tag);
    for (name, value) in *defaults {
        el.set_attr_raw(name, *value);
    }
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_initialized_offset() {
        let off = new_element("a:off").unwrap();
        assert_eq!(off.attr_raw("x"), Some("0"));
        assert_eq!(off.attr_raw("y"), Some("0"));
        assert!(off.children().is_empty());
    }

    #[test]
    fn test_unknown_tag_is_configuration_error() {
        assert!(matches!(
            new_element("a:bogus"),
            Err(SchemaError::UnknownElement(_))
        ));
    }
}
