//! Geometry transform (`a:xfrm`) and the [`Transformable`] seam.
use crate::error::{Result, SchemaError};
use crate::length::Length;
use crate::schema::attrs::{DefaultedAttr, RequiredAttr};
use crate::schema::children::ChildSlot;
use crate::schema::simple_types::{StAngle, StCoordinate, StPositiveCoordinate, XsdBoolean};
use crate::xml::element::XmlElement;

// a:xfrm child sequence: off, ext, chOff, chExt
pub(crate) const OFF: ChildSlot = ChildSlot::new("a:off", &["a:ext", "a:chOff", "a:chExt"]);
pub(crate) const EXT: ChildSlot = ChildSlot::new("a:ext", &["a:chOff", "a:chExt"]);

pub(crate) const ROT: DefaultedAttr<StAngle> = DefaultedAttr::new("rot", 0.0);
pub(crate) const FLIP_H: DefaultedAttr<XsdBoolean> = DefaultedAttr::new("flipH", false);
pub(crate) const FLIP_V: DefaultedAttr<XsdBoolean> = DefaultedAttr::new("flipV", false);

pub(crate) const X: RequiredAttr<StCoordinate> = RequiredAttr::new("x");
pub(crate) const Y: RequiredAttr<StCoordinate> = RequiredAttr::new("y");
pub(crate) const CX: RequiredAttr<StPositiveCoordinate> = RequiredAttr::new("cx");
pub(crate) const CY: RequiredAttr<StPositiveCoordinate> = RequiredAttr::new("cy");

/// Anything that owns (or is) an `a:xfrm` element.
///
/// Implementors supply the transform lookup; the geometry accessors come
/// for free. The default shape lookup reads the shape-local
/// `p:spPr/a:xfrm` only — shape types that keep their transform elsewhere
/// (e.g. a group's shared properties block) implement the two required
/// methods themselves and reuse everything else.
///
/// Position and size propagate absence: a missing transform, offset, or
/// extent reads as `None`, never as zero. Rotation and flip instead read
/// their schema attribute defaults (0.0 and false), because those defaults
/// are defined one hop away on the transform itself.
pub trait Transformable {
    /// The `a:xfrm` element, `None` when not present.
    fn xfrm(&self) -> Result<Option<&XmlElement>>;

    /// The `a:xfrm` element, created in schema order when absent.
    fn get_or_add_xfrm(&mut self) -> Result<&mut XmlElement>;

    /// Offset from the left edge of the slide, `None` when unset.
    fn x(&self) -> Result<Option<Length>> {
        let Some(xfrm) = self.xfrm()? else {
            return Ok(None);
        };
        let Some(off) = OFF.get(xfrm) else {
            return Ok(None);
        };
        X.get(off).map(Some)
    }

    /// Offset from the top edge of the slide, `None` when unset.
    fn y(&self) -> Result<Option<Length>> {
        let Some(xfrm) = self.xfrm()? else {
            return Ok(None);
        };
        let Some(off) = OFF.get(xfrm) else {
            return Ok(None);
        };
        Y.get(off).map(Some)
    }

    /// Extent width, `None` when unset.
    fn cx(&self) -> Result<Option<Length>> {
        let Some(xfrm) = self.xfrm()? else {
            return Ok(None);
        };
        let Some(ext) = EXT.get(xfrm) else {
            return Ok(None);
        };
        CX.get(ext).map(Some)
    }

    /// Extent height, `None` when unset.
    fn cy(&self) -> Result<Option<Length>> {
        let Some(xfrm) = self.xfrm()? else {
            return Ok(None);
        };
        let Some(ext) = EXT.get(xfrm) else {
            return Ok(None);
        };
        CY.get(ext).map(Some)
    }

    fn set_x(&mut self, value: Length) -> Result<()> {
        let off = OFF.get_or_add(self.get_or_add_xfrm()?)?;
        X.set(off, value);
        Ok(())
    }

    fn set_y(&mut self, value: Length) -> Result<()> {
        let off = OFF.get_or_add(self.get_or_add_xfrm()?)?;
        Y.set(off, value);
        Ok(())
    }

    fn set_cx(&mut self, value: Length) -> Result<()> {
        let ext = EXT.get_or_add(self.get_or_add_xfrm()?)?;
        CX.set(ext, value);
        Ok(())
    }

    fn set_cy(&mut self, value: Length) -> Result<()> {
        let ext = EXT.get_or_add(self.get_or_add_xfrm()?)?;
        CY.set(ext, value);
        Ok(())
    }

    /// Clockwise rotation in degrees; 0.0 when the transform or the
    /// attribute is absent.
    fn rotation(&self) -> Result<f64> {
        match self.xfrm()? {
            Some(xfrm) => ROT.get(xfrm),
            None => Ok(0.0),
        }
    }

    fn set_rotation(&mut self, degrees: f64) -> Result<()> {
        ROT.set(self.get_or_add_xfrm()?, degrees);
        Ok(())
    }

    /// Horizontal flip; false when the transform or the attribute is absent.
    fn flip_h(&self) -> Result<bool> {
        match self.xfrm()? {
            Some(xfrm) => FLIP_H.get(xfrm),
            None => Ok(false),
        }
    }

    fn set_flip_h(&mut self, value: bool) -> Result<()> {
        FLIP_H.set(self.get_or_add_xfrm()?, value);
        Ok(())
    }

    /// Vertical flip; false when the transform or the attribute is absent.
    fn flip_v(&self) -> Result<bool> {
        match self.xfrm()? {
            Some(xfrm) => FLIP_V.get(xfrm),
            None => Ok(false),
        }
    }

    fn set_flip_v(&mut self, value: bool) -> Result<()> {
        FLIP_V.set(self.get_or_add_xfrm()?, value);
        Ok(())
    }
}

/// Typed view over an `a:xfrm` element.
pub struct Transform<'a> {
    el: &'a mut XmlElement,
}

impl<'a> Transform<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "a:xfrm" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "a:xfrm".to_string(),
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
}

impl Transformable for Transform<'_> {
    fn xfrm(&self) -> Result<Option<&XmlElement>> {
        Ok(Some(self.el))
    }

    fn get_or_add_xfrm(&mut self) -> Result<&mut XmlElement> {
        Ok(self.el)
    }
}
