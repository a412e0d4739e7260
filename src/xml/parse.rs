//! Fragment parser producing an [`XmlElement`] tree.
use crate::error::{Result, SchemaError};
use crate::xml::element::XmlElement;
use crate::xml::write::unescape_xml;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a single XML fragment into an element tree.
///
/// The fragment must contain exactly one root element; leading declarations,
/// comments, and processing instructions are skipped. Attribute values and
/// text content are entity-unescaped.
///
/// # Examples
///
/// ```rust
/// use pomelo::parse_fragment;
///
/// let off = parse_fragment(br#"<a:off x="914400" y="0"/>"#)?;
/// assert_eq!(off.tag(), "a:off");
/// assert_eq!(off.attr_raw("x"), Some("914400"));
/// # Ok::<(), pomelo::SchemaError>(())
/// ```
pub fn parse_fragment(xml: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(element_from_start(&e)?);
            },
            Event::Empty(e) => {
                let el = element_from_start(&e)?;
                attach(&mut stack, &mut root, el)?;
            },
            Event::End(_) => {
                let el = stack.pop().ok_or_else(|| {
                    SchemaError::Xml("end tag without matching start tag".to_string())
                })?;
                attach(&mut stack, &mut root, el)?;
            },
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    top.push_text(&unescape_xml(&String::from_utf8_lossy(&t)));
                }
            },
            Event::CData(t) => {
                if let Some(top) = stack.last_mut() {
                    top.push_text(&String::from_utf8_lossy(&t));
                }
            },
            Event::Eof => break,
            // declarations, comments, PIs carry no element content
            _ => {},
        }
    }

    if !stack.is_empty() {
        return Err(SchemaError::Xml("unclosed element in fragment".to_string()));
    }
    root.ok_or_else(|| SchemaError::Xml("fragment contains no element".to_string()))
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut el = XmlElement::new(tag);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| SchemaError::Xml(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = unescape_xml(&String::from_utf8_lossy(&attr.value));
        el.set_attr_raw(&key, value);
    }
    Ok(el)
}

/// Hand a completed element to its parent, or promote it to the root.
fn attach(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    el: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(el),
        None => {
            if root.is_some() {
                return Err(SchemaError::Xml(
                    "fragment contains more than one root element".to_string(),
                ));
            }
            *root = Some(el);
        },
    }
    Ok(())
}
