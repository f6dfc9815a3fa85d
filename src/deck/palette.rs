//! Brand palette: named style tokens resolved to RGB colours.

use crate::common::{Error, RGBColor, Result};
use std::collections::BTreeMap;

/// Fill behind title and closing slides, and header bars.
pub const PRIMARY: &str = "primary";
/// Fill behind content slides.
pub const BACKGROUND: &str = "background";
/// Text drawn on `primary`.
pub const ON_PRIMARY: &str = "on_primary";
/// Body text.
pub const TEXT: &str = "text";

/// Tokens every canvas deck needs.
pub const REQUIRED_TOKENS: [&str; 4] = [PRIMARY, BACKGROUND, ON_PRIMARY, TEXT];

/// A validated set of style tokens.
///
/// Every entry parsed as `#RRGGBB` when the palette was built; lookups of
/// absent tokens fail with [`Error::MissingColor`] at the point a slide
/// needs them.
///
/// # Examples
///
/// ```rust
/// use deckhand::common::RGBColor;
/// use deckhand::deck::palette::{Palette, PRIMARY};
///
/// let palette = Palette::from_tokens([("primary", "#6A46F3")])?;
/// assert_eq!(palette.color(PRIMARY)?, RGBColor::new(0x6A, 0x46, 0xF3));
/// assert!(palette.color("text").is_err());
/// # Ok::<(), deckhand::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, RGBColor>,
}

impl Palette {
    /// Parse every `(token, "#RRGGBB")` pair.
    pub fn from_tokens<I, K, V>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut colors = BTreeMap::new();
        for (token, value) in tokens {
            let token = token.into();
            let color = RGBColor::from_hex(value.as_ref()).ok_or_else(|| Error::InvalidColor {
                token: token.clone(),
                value: value.as_ref().to_string(),
            })?;
            colors.insert(token, color);
        }

        let palette = Self { colors };
        for token in palette.extra_tokens() {
            log::warn!("palette token '{}' is not used by any slide kind", token);
        }
        Ok(palette)
    }

    /// The brand sheet the deck renderer was first written against.
    pub fn brand() -> Self {
        let colors = [
            (PRIMARY, RGBColor::new(106, 70, 243)),
            (BACKGROUND, RGBColor::new(248, 248, 250)),
            (ON_PRIMARY, RGBColor::new(248, 248, 250)),
            (TEXT, RGBColor::new(26, 24, 27)),
            ("secondary", RGBColor::new(195, 37, 180)),
            ("blue_1", RGBColor::new(15, 197, 222)),
            ("blue_2", RGBColor::new(16, 4, 88)),
            ("blue_3", RGBColor::new(63, 133, 238)),
        ];
        Self {
            colors: colors
                .into_iter()
                .map(|(token, color)| (token.to_string(), color))
                .collect(),
        }
    }

    /// Resolve `token`.
    pub fn color(&self, token: &str) -> Result<RGBColor> {
        self.colors
            .get(token)
            .copied()
            .ok_or_else(|| Error::MissingColor(token.to_string()))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.colors.contains_key(token)
    }

    /// Tokens absent from the palette, in [`REQUIRED_TOKENS`] order.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        REQUIRED_TOKENS
            .iter()
            .copied()
            .filter(|token| !self.contains(token))
            .collect()
    }

    /// Tokens kept in the palette that no slide kind reads.
    pub fn extra_tokens(&self) -> impl Iterator<Item = &str> {
        self.colors
            .keys()
            .map(String::as_str)
            .filter(|token| !REQUIRED_TOKENS.contains(token))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RGBColor)> {
        self.colors.iter().map(|(token, color)| (token.as_str(), *color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_palette_is_complete() {
        let palette = Palette::brand();
        assert!(palette.missing_tokens().is_empty());
        assert_eq!(palette.color(PRIMARY).unwrap().to_hex(), "6A46F3");
        assert_eq!(palette.extra_tokens().count(), 4);
    }

    #[test]
    fn test_invalid_colour_names_token() {
        let err = Palette::from_tokens([("primary", "#6A46F3"), ("text", "black")]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidColor { ref token, ref value } if token == "text" && value == "black"
        ));
    }

    #[test]
    fn test_missing_token() {
        let palette = Palette::from_tokens([("primary", "6a46f3")]).unwrap();
        assert_eq!(palette.missing_tokens(), vec![BACKGROUND, ON_PRIMARY, TEXT]);
        assert!(matches!(palette.color(TEXT), Err(Error::MissingColor(ref t)) if t == "text"));
    }
}
