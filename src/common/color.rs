use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color representation.
///
/// Deserializes from and serializes to a `#RRGGBB` hex string, which is how
/// colours appear in deck files and inspection reports.
///
/// # Examples
///
/// ```rust
/// use deckhand::common::RGBColor;
///
/// let violet = RGBColor::new(106, 70, 243);
/// assert_eq!(RGBColor::from_hex("#6A46F3"), Some(violet));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (`"FF0000"` or `"#FF0000"`).
    ///
    /// Returns `None` unless the string holds exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as DrawingML `srgbClr@val`
    /// expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl TryFrom<String> for RGBColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("'{value}' is not a #RRGGBB colour"))
    }
}

impl From<RGBColor> for String {
    fn from(color: RGBColor) -> Self {
        color.to_string()
    }
}
