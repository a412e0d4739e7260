//! Serializer producing markup from an [`XmlElement`] tree.
use crate::xml::element::XmlElement;

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Unescape the five standard XML entities and numeric character
/// references (`&#38;`, `&#x26;`).
///
/// An ampersand that does not open a resolvable reference passes through
/// as literal text.
pub fn unescape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let resolved = rest
            .find(';')
            .and_then(|end| resolve_reference(&rest[1..end]).map(|ch| (end, ch)));
        match resolved {
            Some((end, ch)) => {
                out.push(ch);
                rest = &rest[end + 1..];
            },
            None => {
                out.push('&');
                rest = &rest[1..];
            },
        }
    }
    out.push_str(rest);
    out
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        },
    }
}

/// Serialize an element tree to markup.
///
/// Attribute values and text content are entity-escaped; childless,
/// textless elements are written self-closing. Output from a parsed
/// fragment round-trips structurally.
pub fn write_element(el: &XmlElement) -> String {
    let mut xml = String::new();
    write_into(&mut xml, el);
    xml
}

fn write_into(xml: &mut String, el: &XmlElement) {
    xml.push('<');
    xml.push_str(el.tag());
    for (name, value) in el.attrs() {
        xml.push(' ');
        xml.push_str(name);
        xml.push_str("=\"");
        xml.push_str(&escape_xml(value));
        xml.push('"');
    }
    if el.children().is_empty() && el.text().is_empty() {
        xml.push_str("/>");
        return;
    }
    xml.push('>');
    if !el.text().is_empty() {
        xml.push_str(&escape_xml(el.text()));
    }
    for child in el.children() {
        write_into(xml, child);
    }
    xml.push_str("</");
    xml.push_str(el.tag());
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse::parse_fragment;

    #[test]
    fn test_self_closing_leaf() {
        let mut off = XmlElement::new("a:off");
        off.set_attr_raw("x", "0");
        off.set_attr_raw("y", "0");
        assert_eq!(write_element(&off), r#"<a:off x="0" y="0"/>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let mut el = XmlElement::new("p:cNvPr");
        el.set_attr_raw("name", "Tom & \"Jerry\"");
        assert_eq!(
            write_element(&el),
            r#"<p:cNvPr name="Tom &amp; &quot;Jerry&quot;"/>"#
        );
    }

    #[test]
    fn test_round_trip() {
        let xml = concat!(
            r#"<p:spPr bwMode="auto">"#,
            r#"<a:xfrm rot="5400000" flipH="1">"#,
            r#"<a:off x="100" y="200"/>"#,
            r#"<a:ext cx="300" cy="400"/>"#,
            r#"</a:xfrm>"#,
            r#"<a:prstGeom prst="rect"/>"#,
            r#"</p:spPr>"#,
        );
        let tree = parse_fragment(xml.as_bytes()).unwrap();
        assert_eq!(write_element(&tree), xml);
    }

    #[test]
    fn test_escape_unescape_inverse() {
        let raw = r#"<a & 'b' & "c">"#;
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_numeric_character_references() {
        assert_eq!(unescape_xml("&#38;"), "&");
        assert_eq!(unescape_xml("&#x26;"), "&");
        assert_eq!(unescape_xml("a&#169;b"), "a\u{a9}b");
        // unresolvable references pass through as literal text
        assert_eq!(unescape_xml("&nbsp;"), "&nbsp;");
        assert_eq!(unescape_xml("1 & 2"), "1 & 2");
        assert_eq!(unescape_xml("&#x110000;"), "&#x110000;");
    }
}
