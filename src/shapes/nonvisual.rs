//! Non-visual shape properties: identity (`p:cNvPr`), application
//! properties (`p:nvPr`), and the placeholder marker (`p:ph`).
use crate::error::{Result, SchemaError};
use crate::schema::attrs::{DefaultedAttr, OptionalAttr, RequiredAttr};
use crate::schema::children::ChildSlot;
use crate::schema::simple_types::{
    Direction, PlaceholderSize, PlaceholderType, StDrawingElementId, XsdString, XsdUnsignedInt,
};
use crate::xml::element::XmlElement;

// p:cNvPr attributes and child sequence: hlinkClick, hlinkHover, extLst
pub(crate) const ID: RequiredAttr<StDrawingElementId> = RequiredAttr::new("id");
pub(crate) const NAME: RequiredAttr<XsdString> = RequiredAttr::new("name");
pub(crate) const DESCR: OptionalAttr<XsdString> = OptionalAttr::new("descr");
pub(crate) const HLINK_CLICK: ChildSlot =
    ChildSlot::new("a:hlinkClick", &["a:hlinkHover", "a:extLst"]);
pub(crate) const HLINK_HOVER: ChildSlot = ChildSlot::new("a:hlinkHover", &["a:extLst"]);

// p:nvPr child sequence puts p:ph first, ahead of the media choice group
// and the trailing custom-data/extension lists
pub(crate) const PH: ChildSlot = ChildSlot::new(
    "p:ph",
    &[
        "a:audioCd",
        "a:wavAudioFile",
        "a:audioFile",
        "a:videoFile",
        "a:quickTimeFile",
        "p:custDataLst",
        "p:extLst",
    ],
);

// p:ph attributes, each with a schema-defined default
pub(crate) const PH_TYPE: DefaultedAttr<PlaceholderType> =
    DefaultedAttr::new("type", PlaceholderType::Object);
pub(crate) const PH_ORIENT: DefaultedAttr<Direction> =
    DefaultedAttr::new("orient", Direction::Horizontal);
pub(crate) const PH_SZ: DefaultedAttr<PlaceholderSize> =
    DefaultedAttr::new("sz", PlaceholderSize::Full);
pub(crate) const PH_IDX: DefaultedAttr<XsdUnsignedInt> = DefaultedAttr::new("idx", 0);

/// Typed view over a `p:cNvPr` element.
pub struct NonVisualProps<'a> {
    el: &'a mut XmlElement,
}

impl<'a> NonVisualProps<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "p:cNvPr" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "p:cNvPr".to_string(),
            });
        }
        Ok(Self { el })
    }

    pub(crate) fn wrap(el: &'a mut XmlElement) -> Self {
        Self { el }
    }

    pub fn element(&self) -> &XmlElement {
        self.el
    }

    /// Drawing element id; required by the schema.
    pub fn id(&self) -> Result<u32> {
        ID.get(self.el)
    }

    pub fn set_id(&mut self, id: u32) {
        ID.set(self.el, id);
    }

    /// Shape name; required by the schema.
    pub fn name(&self) -> Result<String> {
        NAME.get(self.el)
    }

    pub fn set_name(&mut self, name: &str) {
        NAME.set(self.el, name.to_string());
    }

    /// Alternative text (`descr`), `None` when absent.
    pub fn alt_text(&self) -> Result<Option<String>> {
        DESCR.get(self.el)
    }

    pub fn set_alt_text(&mut self, text: Option<&str>) {
        DESCR.set(self.el, text.map(str::to_string));
    }

    /// The click hyperlink child, `None` when absent.
    pub fn hlink_click(&self) -> Option<&XmlElement> {
        HLINK_CLICK.get(self.el)
    }

    pub fn get_or_add_hlink_click(&mut self) -> Result<&mut XmlElement> {
        HLINK_CLICK.get_or_add(self.el)
    }

    pub fn remove_hlink_click(&mut self) {
        HLINK_CLICK.remove(self.el);
    }

    /// The hover hyperlink child, `None` when absent.
    pub fn hlink_hover(&self) -> Option<&XmlElement> {
        HLINK_HOVER.get(self.el)
    }

    pub fn get_or_add_hlink_hover(&mut self) -> Result<&mut XmlElement> {
        HLINK_HOVER.get_or_add(self.el)
    }

    pub fn remove_hlink_hover(&mut self) {
        HLINK_HOVER.remove(self.el);
    }
}

/// Typed view over a `p:nvPr` element.
pub struct AppNonVisualProps<'a> {
    el: &'a mut XmlElement,
}

impl<'a> AppNonVisualProps<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "p:nvPr" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "p:nvPr".to_string(),
            });
        }
        Ok(Self { el })
    }

    pub fn element(&self) -> &XmlElement {
        self.el
    }

    /// The placeholder marker, `None` when this shape is free content.
    pub fn placeholder(&self) -> Option<&XmlElement> {
        PH.get(self.el)
    }

    /// Typed placeholder view, creating the marker when absent.
    pub fn get_or_add_placeholder(&mut self) -> Result<Placeholder<'_>> {
        PH.get_or_add(self.el).map(Placeholder::wrap)
    }

    pub fn remove_placeholder(&mut self) {
        PH.remove(self.el);
    }
}

/// Typed view over a `p:ph` placeholder marker.
///
/// Every attribute carries a schema default, so reads on a bare `<p:ph/>`
/// yield (Object, Horizontal, Full, 0).
pub struct Placeholder<'a> {
    el: &'a mut XmlElement,
}

impl<'a> Placeholder<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "p:ph" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "p:ph".to_string(),
            });
        }
        Ok(Self { el })
    }

    pub(crate) fn wrap(el: &'a mut XmlElement) -> Self {
        Self { el }
    }

    pub fn element(&self) -> &XmlElement {
        self.el
    }

    pub fn ph_type(&self) -> Result<PlaceholderType> {
        PH_TYPE.get(self.el)
    }

    pub fn set_ph_type(&mut self, value: PlaceholderType) {
        PH_TYPE.set(self.el, value);
    }

    pub fn orientation(&self) -> Result<Direction> {
        PH_ORIENT.get(self.el)
    }

    pub fn set_orientation(&mut self, value: Direction) {
        PH_ORIENT.set(self.el, value);
    }

    pub fn size(&self) -> Result<PlaceholderSize> {
        PH_SZ.get(self.el)
    }

    pub fn set_size(&mut self, value: PlaceholderSize) {
        PH_SZ.set(self.el, value);
    }

    pub fn index(&self) -> Result<u32> {
        PH_IDX.get(self.el)
    }

    pub fn set_index(&mut self, value: u32) {
        PH_IDX.set(self.el, value);
    }
}
