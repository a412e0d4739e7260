//! Shape properties block (`p:spPr`): transform, geometry, fill, line.
use crate::error::{Result, SchemaError};
use crate::schema::attrs::RequiredAttr;
use crate::schema::children::{ChildSlot, ChoiceSlot};
use crate::schema::simple_types::XsdString;
use crate::shapes::line::LineProperties;
use crate::shapes::transform::{Transform, Transformable};
use crate::xml::element::XmlElement;

// p:spPr child sequence: xfrm, custGeom, prstGeom, noFill, solidFill,
// gradFill, blipFill, pattFill, grpFill, ln, effectLst, effectDag, scene3d,
// sp3d, extLst

pub(crate) const XFRM: ChildSlot = ChildSlot::new(
    "a:xfrm",
    &[
        "a:custGeom",
        "a:prstGeom",
        "a:noFill",
        "a:solidFill",
        "a:gradFill",
        "a:blipFill",
        "a:pattFill",
        "a:grpFill",
        "a:ln",
        "a:effectLst",
        "a:effectDag",
        "a:scene3d",
        "a:sp3d",
        "a:extLst",
    ],
);

pub(crate) const CUST_GEOM: ChildSlot = ChildSlot::new(
    "a:custGeom",
    &[
        "a:prstGeom",
        "a:noFill",
        "a:solidFill",
        "a:gradFill",
        "a:blipFill",
        "a:pattFill",
        "a:grpFill",
        "a:ln",
        "a:effectLst",
        "a:effectDag",
        "a:scene3d",
        "a:sp3d",
        "a:extLst",
    ],
);

pub(crate) const PRST_GEOM: ChildSlot = ChildSlot::new(
    "a:prstGeom",
    &[
        "a:noFill",
        "a:solidFill",
        "a:gradFill",
        "a:blipFill",
        "a:pattFill",
        "a:grpFill",
        "a:ln",
        "a:effectLst",
        "a:effectDag",
        "a:scene3d",
        "a:sp3d",
        "a:extLst",
    ],
);

pub(crate) const FILL: ChoiceSlot = ChoiceSlot::new(
    &[
        "a:noFill",
        "a:solidFill",
        "a:gradFill",
        "a:blipFill",
        "a:pattFill",
        "a:grpFill",
    ],
    &[
        "a:ln",
        "a:effectLst",
        "a:effectDag",
        "a:scene3d",
        "a:sp3d",
        "a:extLst",
    ],
);

pub(crate) const LN: ChildSlot = ChildSlot::new(
    "a:ln",
    &["a:effectLst", "a:effectDag", "a:scene3d", "a:sp3d", "a:extLst"],
);

pub(crate) const PRST: RequiredAttr<XsdString> = RequiredAttr::new("prst");

/// Typed view over a `p:spPr` element.
///
/// Shared by `p:sp`, `p:cxnSp`, and `p:pic`.
pub struct ShapeProperties<'a> {
    el: &'a mut XmlElement,
}

impl<'a> ShapeProperties<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "p:spPr" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "p:spPr".to_string(),
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

    /// Typed transform view, `None` when `a:xfrm` is absent.
    pub fn transform(&mut self) -> Option<Transform<'_>> {
        XFRM.get_mut(self.el).map(Transform::wrap)
    }

    /// Typed transform view, creating `a:xfrm` in schema order when absent.
    pub fn get_or_add_transform(&mut self) -> Result<Transform<'_>> {
        XFRM.get_or_add(self.el).map(Transform::wrap)
    }

    pub fn remove_transform(&mut self) {
        XFRM.remove(self.el);
    }

    /// Typed line view, `None` when `a:ln` is absent.
    pub fn line(&mut self) -> Option<LineProperties<'_>> {
        LN.get_mut(self.el).map(LineProperties::wrap)
    }

    /// Typed line view, creating `a:ln` in schema order when absent.
    pub fn get_or_add_line(&mut self) -> Result<LineProperties<'_>> {
        LN.get_or_add(self.el).map(LineProperties::wrap)
    }

    pub fn remove_line(&mut self) {
        LN.remove(self.el);
    }

    /// The present fill candidate, `None` when unfilled.
    pub fn fill(&self) -> Option<&XmlElement> {
        FILL.get(self.el)
    }

    /// Switch the shape fill to the given candidate tag (e.g. `a:noFill`).
    pub fn get_or_change_fill_to(&mut self, tag: &str) -> Result<&mut XmlElement> {
        FILL.get_or_change_to(self.el, tag)
    }

    pub fn remove_fill(&mut self) {
        FILL.remove(self.el);
    }

    /// Preset geometry name (`a:prstGeom/@prst`), `None` when absent.
    pub fn preset_geometry(&self) -> Result<Option<String>> {
        match PRST_GEOM.get(self.el) {
            Some(geom) => PRST.get(geom).map(Some),
            None => Ok(None),
        }
    }

    /// Set a preset geometry, removing any custom geometry first
    /// (the two are mutually exclusive).
    pub fn set_preset_geometry(&mut self, prst: &str) -> Result<()> {
        CUST_GEOM.remove(self.el);
        let geom = PRST_GEOM.get_or_add(self.el)?;
        PRST.set(geom, prst.to_string());
        Ok(())
    }

    /// The `a:custGeom` child, `None` when absent.
    pub fn custom_geometry(&self) -> Option<&XmlElement> {
        CUST_GEOM.get(self.el)
    }
}

impl Transformable for ShapeProperties<'_> {
    fn xfrm(&self) -> Result<Option<&XmlElement>> {
        Ok(XFRM.get(self.el))
    }

    fn get_or_add_xfrm(&mut self) -> Result<&mut XmlElement> {
        XFRM.get_or_add(self.el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;
    use crate::xml::parse::parse_fragment;
    use crate::xml::write::write_element;

    #[test]
    fn test_geometry_reads_null_propagate() {
        let mut el = XmlElement::new("p:spPr");
        let sp_pr = ShapeProperties::new(&mut el).unwrap();
        assert_eq!(sp_pr.x().unwrap(), None);
        assert_eq!(sp_pr.y().unwrap(), None);
        assert_eq!(sp_pr.cx().unwrap(), None);
        assert_eq!(sp_pr.cy().unwrap(), None);
    }

    #[test]
    fn test_geometry_reads_present_transform() {
        let mut el = parse_fragment(
            br#"<p:spPr><a:xfrm><a:off x="100" y="200"/><a:ext cx="300" cy="400"/></a:xfrm></p:spPr>"#,
        )
        .unwrap();
        let sp_pr = ShapeProperties::new(&mut el).unwrap();
        assert_eq!(sp_pr.x().unwrap(), Some(Length::new(100)));
        assert_eq!(sp_pr.y().unwrap(), Some(Length::new(200)));
        assert_eq!(sp_pr.cx().unwrap(), Some(Length::new(300)));
        assert_eq!(sp_pr.cy().unwrap(), Some(Length::new(400)));
    }

    #[test]
    fn test_transform_inserted_first() {
        let mut el = parse_fragment(br#"<p:spPr><a:prstGeom prst="rect"/></p:spPr>"#).unwrap();
        let mut sp_pr = ShapeProperties::new(&mut el).unwrap();
        sp_pr.set_x(Length::new(50)).unwrap();
        assert_eq!(
            write_element(&el),
            concat!(
                r#"<p:spPr><a:xfrm><a:off x="50" y="0"/></a:xfrm>"#,
                r#"<a:prstGeom prst="rect"/></p:spPr>"#,
            )
        );
    }

    #[test]
    fn test_line_inserted_after_fill() {
        let mut el = parse_fragment(br#"<p:spPr><a:solidFill/><a:effectLst/></p:spPr>"#).unwrap();
        let mut sp_pr = ShapeProperties::new(&mut el).unwrap();
        sp_pr.get_or_add_line().unwrap();
        let tags: Vec<&str> = el.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["a:solidFill", "a:ln", "a:effectLst"]);
    }

    #[test]
    fn test_preset_geometry_replaces_custom() {
        let mut el = parse_fragment(br#"<p:spPr><a:custGeom/></p:spPr>"#).unwrap();
        let mut sp_pr = ShapeProperties::new(&mut el).unwrap();
        sp_pr.set_preset_geometry("ellipse").unwrap();
        assert!(sp_pr.custom_geometry().is_none());
        assert_eq!(sp_pr.preset_geometry().unwrap().as_deref(), Some("ellipse"));
    }

    #[test]
    fn test_fill_choice_on_shape() {
        let mut el = XmlElement::new("p:spPr");
        let mut sp_pr = ShapeProperties::new(&mut el).unwrap();
        sp_pr.get_or_change_fill_to("a:blipFill").unwrap();
        sp_pr.get_or_change_fill_to("a:grpFill").unwrap();
        assert_eq!(sp_pr.fill().unwrap().tag(), "a:grpFill");
        assert_eq!(el.children().len(), 1);
    }
}
