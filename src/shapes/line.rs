//! Line styling (`a:ln`): width, dash scheme, and line fill.
use crate::error::{Result, SchemaError};
use crate::length::Length;
use crate::schema::attrs::{DefaultedAttr, OptionalAttr};
use crate::schema::children::ChoiceSlot;
use crate::schema::simple_types::{PresetLineDash, StLineWidth};
use crate::xml::element::XmlElement;

// a:ln child sequence: noFill, solidFill, gradFill, pattFill, prstDash,
// custDash, round, bevel, miter, headEnd, tailEnd, extLst

pub(crate) const LINE_FILL: ChoiceSlot = ChoiceSlot::new(
    &["a:noFill", "a:solidFill", "a:gradFill", "a:pattFill"],
    &[
        "a:prstDash",
        "a:custDash",
        "a:round",
        "a:bevel",
        "a:miter",
        "a:headEnd",
        "a:tailEnd",
        "a:extLst",
    ],
);

pub(crate) const DASH: ChoiceSlot = ChoiceSlot::new(
    &["a:prstDash", "a:custDash"],
    &[
        "a:round",
        "a:bevel",
        "a:miter",
        "a:headEnd",
        "a:tailEnd",
        "a:extLst",
    ],
);

pub(crate) const W: DefaultedAttr<StLineWidth> = DefaultedAttr::new("w", Length::new(0));
pub(crate) const DASH_VAL: OptionalAttr<PresetLineDash> = OptionalAttr::new("val");

/// Typed view over an `a:ln` element.
pub struct LineProperties<'a> {
    el: &'a mut XmlElement,
}

impl<'a> LineProperties<'a> {
    pub fn new(el: &'a mut XmlElement) -> Result<Self> {
        if el.tag() != "a:ln" {
            return Err(SchemaError::ElementMismatch {
                tag: el.tag().to_string(),
                expected: "a:ln".to_string(),
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

    /// Line width; the schema default of 0 EMU when the attribute is absent.
    pub fn width(&self) -> Result<Length> {
        W.get(self.el)
    }

    pub fn set_width(&mut self, width: Length) {
        W.set(self.el, width);
    }

    /// Value of `a:prstDash/@val`, `None` when the child or attribute is
    /// absent.
    pub fn preset_dash(&self) -> Result<Option<PresetLineDash>> {
        match self.el.child("a:prstDash") {
            Some(prst_dash) => DASH_VAL.get(prst_dash),
            None => Ok(None),
        }
    }

    /// Set the preset dash scheme.
    ///
    /// `a:custDash` is mutually exclusive with `a:prstDash`, so any custom
    /// dash pattern is removed before the preset child is added.
    pub fn set_preset_dash(&mut self, value: PresetLineDash) -> Result<()> {
        let prst_dash = DASH.get_or_change_to(self.el, "a:prstDash")?;
        DASH_VAL.set(prst_dash, Some(value));
        Ok(())
    }

    /// The `a:custDash` child, `None` when absent.
    pub fn custom_dash(&self) -> Option<&XmlElement> {
        self.el.child("a:custDash")
    }

    /// The `a:custDash` child, removing any preset dash first.
    pub fn get_or_add_custom_dash(&mut self) -> Result<&mut XmlElement> {
        DASH.get_or_change_to(self.el, "a:custDash")
    }

    /// The present line-fill candidate, `None` when unfilled.
    pub fn fill(&self) -> Option<&XmlElement> {
        LINE_FILL.get(self.el)
    }

    /// Switch the line fill to the given candidate tag (e.g. `a:solidFill`).
    pub fn get_or_change_fill_to(&mut self, tag: &str) -> Result<&mut XmlElement> {
        LINE_FILL.get_or_change_to(self.el, tag)
    }

    pub fn remove_fill(&mut self) {
        LINE_FILL.remove(self.el);
    }
}
