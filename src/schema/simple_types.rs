//! Codecs between typed values and attribute-string representations.
//!
//! Each codec is a unit struct implementing [`SimpleType`]; the attribute
//! slots in [`crate::schema::attrs`] are parameterized over these, so an
//! element type declares the codec once and gets typed get/set for free.
//! Decode failures surface as [`SchemaError::InvalidValue`] at the point of
//! read; encode never produces a string its own decode rejects.
use crate::error::{Result, SchemaError};
use crate::length::Length;

/// Conversion between a typed value and its attribute-string form.
pub trait SimpleType {
    /// The typed value this codec produces and consumes.
    type Value: Clone + PartialEq;

    /// Value-space name used in decode error messages.
    const NAME: &'static str;

    /// Decode an attribute string, failing on any value outside the space.
    fn decode(s: &str) -> Result<Self::Value>;

    /// Encode a value as an attribute string.
    fn encode(value: &Self::Value) -> String;
}

fn invalid<T>(value: &str, expected: &'static str) -> Result<T> {
    Err(SchemaError::InvalidValue {
        value: value.to_string(),
        expected,
    })
}

fn encode_i64(value: i64) -> String {
    itoa::Buffer::new().format(value).to_string()
}

/// `xsd:unsignedInt`.
pub struct XsdUnsignedInt;

impl SimpleType for XsdUnsignedInt {
    type Value = u32;
    const NAME: &'static str = "xsd:unsignedInt";

    fn decode(s: &str) -> Result<u32> {
        s.parse::<u32>().or_else(|_| invalid(s, Self::NAME))
    }

    fn encode(value: &u32) -> String {
        itoa::Buffer::new().format(*value).to_string()
    }
}

/// `xsd:boolean`. Accepts `1`/`0`/`true`/`false`, writes `1`/`0`.
pub struct XsdBoolean;

impl SimpleType for XsdBoolean {
    type Value = bool;
    const NAME: &'static str = "xsd:boolean";

    fn decode(s: &str) -> Result<bool> {
        match s {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &bool) -> String {
        if *value { "1" } else { "0" }.to_string()
    }
}

/// `xsd:string`; any attribute string is valid.
pub struct XsdString;

impl SimpleType for XsdString {
    type Value = String;
    const NAME: &'static str = "xsd:string";

    fn decode(s: &str) -> Result<String> {
        Ok(s.to_string())
    }

    fn encode(value: &String) -> String {
        value.clone()
    }
}

/// `a:ST_Coordinate` — signed EMU length.
pub struct StCoordinate;

impl StCoordinate {
    pub const MIN: i64 = -27_273_042_329_600;
    pub const MAX: i64 = 27_273_042_316_900;
}

impl SimpleType for StCoordinate {
    type Value = Length;
    const NAME: &'static str = "ST_Coordinate";

    fn decode(s: &str) -> Result<Length> {
        match s.parse::<i64>() {
            Ok(emu) if (Self::MIN..=Self::MAX).contains(&emu) => Ok(Length::new(emu)),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &Length) -> String {
        encode_i64(value.emu())
    }
}

/// `a:ST_PositiveCoordinate` — unsigned EMU length.
pub struct StPositiveCoordinate;

impl StPositiveCoordinate {
    pub const MAX: i64 = 27_273_042_316_900;
}

impl SimpleType for StPositiveCoordinate {
    type Value = Length;
    const NAME: &'static str = "ST_PositiveCoordinate";

    fn decode(s: &str) -> Result<Length> {
        match s.parse::<i64>() {
            Ok(emu) if (0..=Self::MAX).contains(&emu) => Ok(Length::new(emu)),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &Length) -> String {
        encode_i64(value.emu())
    }
}

/// `a:ST_LineWidth` — EMU length bounded to [0, 20116800].
pub struct StLineWidth;

impl StLineWidth {
    pub const MAX: i64 = 20_116_800;
}

impl SimpleType for StLineWidth {
    type Value = Length;
    const NAME: &'static str = "ST_LineWidth";

    fn decode(s: &str) -> Result<Length> {
        match s.parse::<i64>() {
            Ok(emu) if (0..=Self::MAX).contains(&emu) => Ok(Length::new(emu)),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &Length) -> String {
        encode_i64(value.emu())
    }
}

/// `a:ST_Angle` — clockwise degrees, stored as 1/60000ths of a degree.
///
/// Encoding normalizes into [0°, 360°); the stored granularity is exactly
/// one 60000th of a degree, so `decode(encode(v))` is the identity on that
/// grid.
pub struct StAngle;

impl StAngle {
    const UNITS_PER_DEGREE: f64 = 60_000.0;
    const UNITS_PER_TURN: i64 = 21_600_000;
}

impl SimpleType for StAngle {
    type Value = f64;
    const NAME: &'static str = "ST_Angle";

    fn decode(s: &str) -> Result<f64> {
        match s.parse::<i64>() {
            Ok(units) => Ok(units as f64 / Self::UNITS_PER_DEGREE),
            Err(_) => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &f64) -> String {
        let units = (value * Self::UNITS_PER_DEGREE).round() as i64;
        encode_i64(units.rem_euclid(Self::UNITS_PER_TURN))
    }
}

/// `a:ST_DrawingElementId` — unsigned integer shape identifier.
pub struct StDrawingElementId;

impl SimpleType for StDrawingElementId {
    type Value = u32;
    const NAME: &'static str = "ST_DrawingElementId";

    fn decode(s: &str) -> Result<u32> {
        s.parse::<u32>().or_else(|_| invalid(s, Self::NAME))
    }

    fn encode(value: &u32) -> String {
        itoa::Buffer::new().format(*value).to_string()
    }
}

/// Text direction of a placeholder (`p:ph/@orient`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[Direction::Horizontal, Direction::Vertical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horz",
            Self::Vertical => "vert",
        }
    }
}

impl SimpleType for Direction {
    type Value = Direction;
    const NAME: &'static str = "ST_Direction";

    fn decode(s: &str) -> Result<Direction> {
        match s {
            "horz" => Ok(Self::Horizontal),
            "vert" => Ok(Self::Vertical),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &Direction) -> String {
        value.as_str().to_string()
    }
}

/// Size class of a placeholder (`p:ph/@sz`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSize {
    Full,
    Half,
    Quarter,
}

impl PlaceholderSize {
    pub const ALL: &'static [PlaceholderSize] = &[
        PlaceholderSize::Full,
        PlaceholderSize::Half,
        PlaceholderSize::Quarter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Quarter => "quarter",
        }
    }
}

impl SimpleType for PlaceholderSize {
    type Value = PlaceholderSize;
    const NAME: &'static str = "ST_PlaceholderSize";

    fn decode(s: &str) -> Result<PlaceholderSize> {
        match s {
            "full" => Ok(Self::Full),
            "half" => Ok(Self::Half),
            "quarter" => Ok(Self::Quarter),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &PlaceholderSize) -> String {
        value.as_str().to_string()
    }
}

/// Role of a placeholder shape (`p:ph/@type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    Bitmap,
    Body,
    CenterTitle,
    Chart,
    Date,
    Footer,
    Header,
    MediaClip,
    Object,
    OrgChart,
    Picture,
    SlideImage,
    SlideNumber,
    Subtitle,
    Table,
    Title,
}

impl PlaceholderType {
    pub const ALL: &'static [PlaceholderType] = &[
        PlaceholderType::Bitmap,
        PlaceholderType::Body,
        PlaceholderType::CenterTitle,
        PlaceholderType::Chart,
        PlaceholderType::Date,
        PlaceholderType::Footer,
        PlaceholderType::Header,
        PlaceholderType::MediaClip,
        PlaceholderType::Object,
        PlaceholderType::OrgChart,
        PlaceholderType::Picture,
        PlaceholderType::SlideImage,
        PlaceholderType::SlideNumber,
        PlaceholderType::Subtitle,
        PlaceholderType::Table,
        PlaceholderType::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitmap => "clipArt",
            Self::Body => "body",
            Self::CenterTitle => "ctrTitle",
            Self::Chart => "chart",
            Self::Date => "dt",
            Self::Footer => "ftr",
            Self::Header => "hdr",
            Self::MediaClip => "media",
            Self::Object => "obj",
            Self::OrgChart => "dgm",
            Self::Picture => "pic",
            Self::SlideImage => "sldImg",
            Self::SlideNumber => "sldNum",
            Self::Subtitle => "subTitle",
            Self::Table => "tbl",
            Self::Title => "title",
        }
    }
}

impl SimpleType for PlaceholderType {
    type Value = PlaceholderType;
    const NAME: &'static str = "ST_PlaceholderType";

    fn decode(s: &str) -> Result<PlaceholderType> {
        match s {
            "clipArt" => Ok(Self::Bitmap),
            "body" => Ok(Self::Body),
            "ctrTitle" => Ok(Self::CenterTitle),
            "chart" => Ok(Self::Chart),
            "dt" => Ok(Self::Date),
            "ftr" => Ok(Self::Footer),
            "hdr" => Ok(Self::Header),
            "media" => Ok(Self::MediaClip),
            "obj" => Ok(Self::Object),
            "dgm" => Ok(Self::OrgChart),
            "pic" => Ok(Self::Picture),
            "sldImg" => Ok(Self::SlideImage),
            "sldNum" => Ok(Self::SlideNumber),
            "subTitle" => Ok(Self::Subtitle),
            "tbl" => Ok(Self::Table),
            "title" => Ok(Self::Title),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &PlaceholderType) -> String {
        value.as_str().to_string()
    }
}

/// Preset dash scheme of a line (`a:prstDash/@val`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetLineDash {
    Solid,
    Dot,
    Dash,
    LargeDash,
    DashDot,
    LargeDashDot,
    LargeDashDotDot,
    SystemDash,
    SystemDot,
    SystemDashDot,
    SystemDashDotDot,
}

impl PresetLineDash {
    pub const ALL: &'static [PresetLineDash] = &[
        PresetLineDash::Solid,
        PresetLineDash::Dot,
        PresetLineDash::Dash,
        PresetLineDash::LargeDash,
        PresetLineDash::DashDot,
        PresetLineDash::LargeDashDot,
        PresetLineDash::LargeDashDotDot,
        PresetLineDash::SystemDash,
        PresetLineDash::SystemDot,
        PresetLineDash::SystemDashDot,
        PresetLineDash::SystemDashDotDot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dot => "dot",
            Self::Dash => "dash",
            Self::LargeDash => "lgDash",
            Self::DashDot => "dashDot",
            Self::LargeDashDot => "lgDashDot",
            Self::LargeDashDotDot => "lgDashDotDot",
            Self::SystemDash => "sysDash",
            Self::SystemDot => "sysDot",
            Self::SystemDashDot => "sysDashDot",
            Self::SystemDashDotDot => "sysDashDotDot",
        }
    }
}

impl SimpleType for PresetLineDash {
    type Value = PresetLineDash;
    const NAME: &'static str = "ST_PresetLineDashVal";

    fn decode(s: &str) -> Result<PresetLineDash> {
        match s {
            "solid" => Ok(Self::Solid),
            "dot" => Ok(Self::Dot),
            "dash" => Ok(Self::Dash),
            "lgDash" => Ok(Self::LargeDash),
            "dashDot" => Ok(Self::DashDot),
            "lgDashDot" => Ok(Self::LargeDashDot),
            "lgDashDotDot" => Ok(Self::LargeDashDotDot),
            "sysDash" => Ok(Self::SystemDash),
            "sysDot" => Ok(Self::SystemDot),
            "sysDashDot" => Ok(Self::SystemDashDot),
            "sysDashDotDot" => Ok(Self::SystemDashDotDot),
            _ => invalid(s, Self::NAME),
        }
    }

    fn encode(value: &PresetLineDash) -> String {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boolean_forms() {
        assert!(XsdBoolean::decode("1").unwrap());
        assert!(XsdBoolean::decode("true").unwrap());
        assert!(!XsdBoolean::decode("0").unwrap());
        assert!(!XsdBoolean::decode("false").unwrap());
        assert!(XsdBoolean::decode("yes").is_err());
        assert_eq!(XsdBoolean::encode(&true), "1");
        assert_eq!(XsdBoolean::encode(&false), "0");
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(StCoordinate::decode("-914400").is_ok());
        assert!(StCoordinate::decode("27273042316901").is_err());
        assert!(StPositiveCoordinate::decode("-1").is_err());
        assert!(StLineWidth::decode("20116801").is_err());
        assert!(StCoordinate::decode("12.5").is_err());
    }

    #[test]
    fn test_angle_normalization() {
        assert_eq!(StAngle::encode(&90.0), "5400000");
        assert_eq!(StAngle::encode(&-90.0), "16200000");
        assert_eq!(StAngle::encode(&360.0), "0");
        assert_eq!(StAngle::decode("5400000").unwrap(), 90.0);
        assert!(StAngle::decode("90deg").is_err());
    }

    #[test]
    fn test_enum_round_trips() {
        for v in PlaceholderType::ALL {
            assert_eq!(PlaceholderType::decode(v.as_str()).unwrap(), *v);
        }
        for v in PresetLineDash::ALL {
            assert_eq!(PresetLineDash::decode(v.as_str()).unwrap(), *v);
        }
        for v in Direction::ALL {
            assert_eq!(Direction::decode(v.as_str()).unwrap(), *v);
        }
        for v in PlaceholderSize::ALL {
            assert_eq!(PlaceholderSize::decode(v.as_str()).unwrap(), *v);
        }
        assert!(PlaceholderType::decode("banner").is_err());
    }

    proptest! {
        #[test]
        fn prop_unsigned_int_round_trip(v in any::<u32>()) {
            prop_assert_eq!(XsdUnsignedInt::decode(&XsdUnsignedInt::encode(&v)).unwrap(), v);
        }

        #[test]
        fn prop_coordinate_round_trip(emu in StCoordinate::MIN..=StCoordinate::MAX) {
            let v = Length::new(emu);
            prop_assert_eq!(StCoordinate::decode(&StCoordinate::encode(&v)).unwrap(), v);
        }

        #[test]
        fn prop_angle_round_trip(units in 0i64..21_600_000) {
            let v = units as f64 / 60_000.0;
            prop_assert_eq!(StAngle::decode(&StAngle::encode(&v)).unwrap(), v);
        }
    }
}
