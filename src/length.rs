//! Length values in English Metric Units (EMU).

/// Length in English Metric Units (EMU).
///
/// EMU is the base unit for coordinates and extents in DrawingML:
/// - 914,400 EMU = 1 inch
/// - 360,000 EMU = 1 centimeter
/// - 36,000 EMU = 1 millimeter
/// - 12,700 EMU = 1 point
///
/// # Examples
///
/// ```rust
/// use pomelo::Length;
///
/// let width = Length::from_inches(1.0);
/// assert_eq!(width.emu(), 914400);
/// assert_eq!(width.inches(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(i64);

impl Length {
    /// EMUs per inch
    pub const EMUS_PER_INCH: i64 = 914_400;
    /// EMUs per centimeter
    pub const EMUS_PER_CM: i64 = 360_000;
    /// EMUs per millimeter
    pub const EMUS_PER_MM: i64 = 36_000;
    /// EMUs per point
    pub const EMUS_PER_PT: i64 = 12_700;

    /// Create a new Length from an EMU value.
    #[inline]
    pub const fn new(emu: i64) -> Self {
        Self(emu)
    }

    /// Create a Length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self((inches * Self::EMUS_PER_INCH as f64) as i64)
    }

    /// Create a Length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self((cm * Self::EMUS_PER_CM as f64) as i64)
    }

    /// Create a Length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self((mm * Self::EMUS_PER_MM as f64) as i64)
    }

    /// Create a Length from points.
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self((pt * Self::EMUS_PER_PT as f64) as i64)
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emu(&self) -> i64 {
        self.0
    }

    /// Get the value in inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.0 as f64 / Self::EMUS_PER_INCH as f64
    }

    /// Get the value in centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.0 as f64 / Self::EMUS_PER_CM as f64
    }

    /// Get the value in millimeters.
    #[inline]
    pub fn mm(&self) -> f64 {
        self.0 as f64 / Self::EMUS_PER_MM as f64
    }

    /// Get the value in points.
    #[inline]
    pub fn pt(&self) -> f64 {
        self.0 as f64 / Self::EMUS_PER_PT as f64
    }
}
