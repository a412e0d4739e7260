//! Shape element facade for `p:sp`, `p:cxnSp`, and `p:pic`.
use crate::error::{Result, SchemaError};
use crate::schema::simple_types::{Direction, PlaceholderSize, PlaceholderType};
use crate::shapes::nonvisual::{self, NonVisualProps, Placeholder};
use crate::shapes::properties::{self, ShapeProperties};
use crate::shapes::transform::Transformable;
use crate::xml::element::XmlElement;

/// Shape root tags this facade understands.
pub const SHAPE_TAGS: &[&str] = &["p:sp", "p:cxnSp", "p:pic"];

/// Typed view over a shape root element.
///
/// Works for `p:sp`, `p:cxnSp`, and `p:pic`, whose shared layout is a
/// leading non-visual properties block (`p:nvSpPr` / `p:nvCxnSpPr` /
/// `p:nvPicPr`) followed by a mandatory `p:spPr`. Geometry is read from and
/// written to the shape-local `p:spPr/a:xfrm` only; shape types with a
/// different transform location implement [`Transformable`] themselves.
pub struct ShapeElement<'a> {
    el: &'a mut XmlElement,
}

impl<'a> ShapeElement<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if !SHAPE_TAGS.contains(&el.tag()) {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "p:sp | p:cxnSp | p:pic".to_string(),
            });
        }
        Ok(Self { el })
    }

    pub fn element(&self) -> &XmlElement {
        self.el
    }

    /// Tag of the leading non-visual block for this shape type.
    fn nv_tag(&self) -> &'static str {
        match self.el.tag() {
            "p:cxnSp" => "p:nvCxnSpPr",
            "p:pic" => "p:nvPicPr",
            _ => "p:nvSpPr",
        }
    }

    /// The mandatory `p:spPr` child; its absence is a schema violation.
    fn sp_pr(&self) -> Result<&XmlElement> {
        self.el
            .child("p:spPr")
            .ok_or_else(|| SchemaError::MissingChild {
                tag: self.el.tag().to_string(),
                child: "p:spPr",
            })
    }

    fn sp_pr_mut(&mut self) -> Result<&mut XmlElement> {
        let tag = self.el.tag().to_string();
        match self.el.child_mut("p:spPr") {
            Some(sp_pr) => Ok(sp_pr),
            None => Err(SchemaError::MissingChild {
                tag,
                child: "p:spPr",
            }),
        }
    }

    /// Typed view over the shape's `p:spPr` block.
    pub fn shape_properties(&mut self) -> Result<ShapeProperties<'_>> {
        self.sp_pr_mut().map(ShapeProperties::wrap)
    }

    /// The mandatory non-visual block: the shape's first child.
    fn nv_block(&self) -> Result<&XmlElement> {
        self.el
            .first_child()
            .ok_or_else(|| SchemaError::MissingChild {
                tag: self.el.tag().to_string(),
                child: self.nv_tag(),
            })
    }

    fn c_nv_pr(&self) -> Result<&XmlElement> {
        let nv = self.nv_block()?;
        nv.child("p:cNvPr").ok_or_else(|| SchemaError::MissingChild {
            tag: nv.tag().to_string(),
            child: "p:cNvPr",
        })
    }

    fn c_nv_pr_mut(&mut self) -> Result<&mut XmlElement> {
        let shape_tag = self.el.tag().to_string();
        let nv_tag = self.nv_tag();
        let nv = match self.el.first_child_mut() {
            Some(nv) => nv,
            None => {
                return Err(SchemaError::MissingChild {
                    tag: shape_tag,
                    child: nv_tag,
                });
            },
        };
        let nv_block_tag = nv.tag().to_string();
        match nv.child_mut("p:cNvPr") {
            Some(c_nv_pr) => Ok(c_nv_pr),
            None => Err(SchemaError::MissingChild {
                tag: nv_block_tag,
                child: "p:cNvPr",
            }),
        }
    }

    /// Typed view over the shape's `p:cNvPr` identity block.
    pub fn non_visual_props(&mut self) -> Result<NonVisualProps<'_>> {
        self.c_nv_pr_mut().map(NonVisualProps::wrap)
    }

    /// Drawing element id from `p:cNvPr/@id`.
    pub fn shape_id(&self) -> Result<u32> {
        nonvisual::ID.get(self.c_nv_pr()?)
    }

    pub fn set_shape_id(&mut self, id: u32) -> Result<()> {
        nonvisual::ID.set(self.c_nv_pr_mut()?, id);
        Ok(())
    }

    /// Shape name from `p:cNvPr/@name`.
    pub fn shape_name(&self) -> Result<String> {
        nonvisual::NAME.get(self.c_nv_pr()?)
    }

    pub fn set_shape_name(&mut self, name: &str) -> Result<()> {
        nonvisual::NAME.set(self.c_nv_pr_mut()?, name.to_string());
        Ok(())
    }

    /// Alternative text from `p:cNvPr/@descr`, `None` when absent.
    pub fn alt_text(&self) -> Result<Option<String>> {
        nonvisual::DESCR.get(self.c_nv_pr()?)
    }

    pub fn set_alt_text(&mut self, text: Option<&str>) -> Result<()> {
        nonvisual::DESCR.set(self.c_nv_pr_mut()?, text.map(str::to_string));
        Ok(())
    }

    /// The `p:ph` marker reached through first-child → `p:nvPr` → `p:ph`,
    /// `None` when any hop is absent.
    pub fn placeholder_marker(&self) -> Option<&XmlElement> {
        self.el.first_child()?.child_path(&["p:nvPr", "p:ph"])
    }

    /// True when this shape is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder_marker().is_some()
    }

    fn require_marker(&self) -> Result<&XmlElement> {
        self.placeholder_marker().ok_or(SchemaError::NotAPlaceholder)
    }

    /// Placeholder role; fails with `NotAPlaceholder` on free content.
    pub fn placeholder_type(&self) -> Result<PlaceholderType> {
        nonvisual::PH_TYPE.get(self.require_marker()?)
    }

    /// Placeholder orientation; fails with `NotAPlaceholder` on free content.
    pub fn placeholder_orientation(&self) -> Result<Direction> {
        nonvisual::PH_ORIENT.get(self.require_marker()?)
    }

    /// Placeholder size class; fails with `NotAPlaceholder` on free content.
    pub fn placeholder_size(&self) -> Result<PlaceholderSize> {
        nonvisual::PH_SZ.get(self.require_marker()?)
    }

    /// Placeholder index; fails with `NotAPlaceholder` on free content.
    pub fn placeholder_index(&self) -> Result<u32> {
        nonvisual::PH_IDX.get(self.require_marker()?)
    }

    /// Typed placeholder view, creating the `p:ph` marker when absent.
    ///
    /// The enclosing non-visual block and its `p:nvPr` child are mandatory;
    /// their absence is a schema violation, not something this call repairs.
    pub fn get_or_add_placeholder(&mut self) -> Result<Placeholder<'_>> {
        let shape_tag = self.el.tag().to_string();
        let nv_tag = self.nv_tag();
        let nv = match self.el.first_child_mut() {
            Some(nv) => nv,
            None => {
                return Err(SchemaError::MissingChild {
                    tag: shape_tag,
                    child: nv_tag,
                });
            },
        };
        let nv_block_tag = nv.tag().to_string();
        let nv_pr = match nv.child_mut("p:nvPr") {
            Some(nv_pr) => nv_pr,
            None => {
                return Err(SchemaError::MissingChild {
                    tag: nv_block_tag,
                    child: "p:nvPr",
                });
            },
        };
        nonvisual::PH.get_or_add(nv_pr).map(Placeholder::wrap)
    }

    /// Remove the placeholder marker; no-op when the shape is free content.
    pub fn remove_placeholder(&mut self) {
        if let Some(nv) = self.el.first_child_mut() {
            if let Some(nv_pr) = nv.child_mut("p:nvPr") {
                nonvisual::PH.remove(nv_pr);
            }
        }
    }

    /// The `p:txBody` child, `None` when not present.
    pub fn tx_body(&self) -> Option<&XmlElement> {
        self.el.child("p:txBody")
    }
}

impl Transformable for ShapeElement<'_> {
    fn xfrm(&self) -> Result<Option<&XmlElement>> {
        Ok(properties::XFRM.get(self.sp_pr()?))
    }

    fn get_or_add_xfrm(&mut self) -> Result<&mut XmlElement> {
        let sp_pr = self.sp_pr_mut()?;
        properties::XFRM.get_or_add(sp_pr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;
    use crate::xml::parse::parse_fragment;
    use crate::xml::write::write_element;

    fn title_sp() -> XmlElement {
        parse_fragment(
            br#"<p:sp>
                  <p:nvSpPr>
                    <p:cNvPr id="2" name="Title 1"/>
                    <p:cNvSpPr/>
                    <p:nvPr><p:ph type="title"/></p:nvPr>
                  </p:nvSpPr>
                  <p:spPr/>
                </p:sp>"#,
        )
        .unwrap()
    }

    fn plain_pic() -> XmlElement {
        parse_fragment(
            br#"<p:pic>
                  <p:nvPicPr>
                    <p:cNvPr id="5" name="Picture 4" descr="logo"/>
                    <p:cNvPicPr/>
                    <p:nvPr/>
                  </p:nvPicPr>
                  <p:blipFill/>
                  <p:spPr>
                    <a:xfrm rot="5400000">
                      <a:off x="914400" y="457200"/>
                      <a:ext cx="8229600" cy="1143000"/>
                    </a:xfrm>
                  </p:spPr>
                </p:pic>"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_shape_root() {
        let mut el = XmlElement::new("p:graphicFrame");
        assert!(matches!(
            ShapeElement::new(&mut el),
            Err(SchemaError::ElementMismatch { .. })
        ));
    }

    #[test]
    fn test_identity_accessors() {
        let mut tree = plain_pic();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert_eq!(shape.shape_id().unwrap(), 5);
        assert_eq!(shape.shape_name().unwrap(), "Picture 4");
        assert_eq!(shape.alt_text().unwrap().as_deref(), Some("logo"));
    }

    #[test]
    fn test_set_identity() {
        let mut tree = title_sp();
        let mut shape = ShapeElement::new(&mut tree).unwrap();
        shape.set_shape_id(9).unwrap();
        shape.set_shape_name("Renamed").unwrap();
        shape.set_alt_text(Some("spoken label")).unwrap();
        assert_eq!(shape.shape_id().unwrap(), 9);
        assert_eq!(shape.shape_name().unwrap(), "Renamed");
        assert_eq!(shape.alt_text().unwrap().as_deref(), Some("spoken label"));
    }

    #[test]
    fn test_geometry_reads() {
        let mut tree = plain_pic();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert_eq!(shape.x().unwrap(), Some(Length::new(914_400)));
        assert_eq!(shape.y().unwrap(), Some(Length::new(457_200)));
        assert_eq!(shape.cx().unwrap(), Some(Length::new(8_229_600)));
        assert_eq!(shape.cy().unwrap(), Some(Length::new(1_143_000)));
        assert_eq!(shape.rotation().unwrap(), 90.0);
        assert!(!shape.flip_h().unwrap());
    }

    #[test]
    fn test_absent_transform_reads_null() {
        let mut tree = title_sp();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert_eq!(shape.x().unwrap(), None);
        assert_eq!(shape.cx().unwrap(), None);
        assert_eq!(shape.rotation().unwrap(), 0.0);
        assert!(!shape.flip_v().unwrap());
    }

    #[test]
    fn test_set_x_materializes_transform_chain() {
        let mut tree = title_sp();
        let mut shape = ShapeElement::new(&mut tree).unwrap();
        assert_eq!(shape.x().unwrap(), None);
        shape.set_x(Length::new(100)).unwrap();
        assert_eq!(shape.x().unwrap(), Some(Length::new(100)));
        let sp_pr = tree.child("p:spPr").unwrap();
        assert_eq!(
            write_element(sp_pr),
            r#"<p:spPr><a:xfrm><a:off x="100" y="0"/></a:xfrm></p:spPr>"#
        );
    }

    #[test]
    fn test_missing_sp_pr_is_schema_violation() {
        let mut tree = parse_fragment(
            br#"<p:sp><p:nvSpPr><p:cNvPr id="1" name="s"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr></p:sp>"#,
        )
        .unwrap();
        let mut shape = ShapeElement::new(&mut tree).unwrap();
        assert!(matches!(
            shape.set_x(Length::new(1)),
            Err(SchemaError::MissingChild { child: "p:spPr", .. })
        ));
    }

    #[test]
    fn test_placeholder_resolution() {
        let mut tree = title_sp();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert!(shape.is_placeholder());
        assert_eq!(shape.placeholder_type().unwrap(), PlaceholderType::Title);
        assert_eq!(
            shape.placeholder_orientation().unwrap(),
            Direction::Horizontal
        );
        assert_eq!(shape.placeholder_size().unwrap(), PlaceholderSize::Full);
        // no explicit idx attribute reads the schema default, not an error
        assert_eq!(shape.placeholder_index().unwrap(), 0);
    }

    #[test]
    fn test_non_placeholder_fails_precondition() {
        let mut tree = plain_pic();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert!(!shape.is_placeholder());
        assert!(matches!(
            shape.placeholder_type(),
            Err(SchemaError::NotAPlaceholder)
        ));
        assert!(matches!(
            shape.placeholder_index(),
            Err(SchemaError::NotAPlaceholder)
        ));
    }

    #[test]
    fn test_get_or_add_placeholder() {
        let mut tree = plain_pic();
        let mut shape = ShapeElement::new(&mut tree).unwrap();
        {
            let mut ph = shape.get_or_add_placeholder().unwrap();
            ph.set_ph_type(PlaceholderType::Picture);
            ph.set_index(3);
        }
        assert!(shape.is_placeholder());
        assert_eq!(shape.placeholder_type().unwrap(), PlaceholderType::Picture);
        assert_eq!(shape.placeholder_index().unwrap(), 3);
        shape.remove_placeholder();
        assert!(!shape.is_placeholder());
    }

    #[test]
    fn test_placeholder_idempotent_add() {
        let mut tree = title_sp();
        let mut shape = ShapeElement::new(&mut tree).unwrap();
        shape.get_or_add_placeholder().unwrap();
        assert_eq!(shape.placeholder_type().unwrap(), PlaceholderType::Title);
        let nv_pr = tree
            .first_child()
            .unwrap()
            .child("p:nvPr")
            .unwrap();
        assert_eq!(nv_pr.children().len(), 1);
    }

    #[test]
    fn test_tx_body_lookup() {
        let mut tree = parse_fragment(
            br#"<p:sp><p:nvSpPr><p:cNvPr id="1" name="s"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody/></p:sp>"#,
        )
        .unwrap();
        let shape = ShapeElement::new(&mut tree).unwrap();
        assert!(shape.tx_body().is_some());
    }
}
