//! DrawingML fills and colours as found on slides, shapes and runs.
//!
//! Colours are a closed set: an explicit RGB value, a reference into the
//! theme colour scheme, or nothing usable. Theme references carry the scheme
//! name and, once resolved through the master's colour map and theme, the RGB
//! value they stand for.

use crate::common::RGBColor;
use crate::common::xml::attr_value;
use quick_xml::events::BytesStart;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A colour read from a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorValue {
    /// `a:srgbClr`, or `a:sysClr` with a cached `lastClr`
    Rgb { rgb: RGBColor },
    /// `a:schemeClr`
    Theme {
        scheme: String,
        resolved: Option<RGBColor>,
    },
    /// Preset, HSL or system colours without a cached value
    Unspecified,
}

impl ColorValue {
    /// Interpret a DrawingML colour-choice element. Returns `None` when
    /// `e` is not a colour element at all.
    pub fn from_element(e: &BytesStart<'_>) -> Option<Self> {
        match e.local_name().as_ref() {
            b"srgbClr" => Some(
                attr_value(e, b"val")
                    .and_then(|v| RGBColor::from_hex(&v))
                    .map_or(ColorValue::Unspecified, |rgb| ColorValue::Rgb { rgb }),
            ),
            b"schemeClr" => Some(attr_value(e, b"val").map_or(ColorValue::Unspecified, |scheme| {
                ColorValue::Theme {
                    scheme,
                    resolved: None,
                }
            })),
            b"sysClr" => Some(
                attr_value(e, b"lastClr")
                    .and_then(|v| RGBColor::from_hex(&v))
                    .map_or(ColorValue::Unspecified, |rgb| ColorValue::Rgb { rgb }),
            ),
            b"prstClr" | b"hslClr" | b"scrgbClr" => Some(ColorValue::Unspecified),
            _ => None,
        }
    }

    /// The RGB value, explicit or resolved from the theme.
    pub fn rgb(&self) -> Option<RGBColor> {
        match self {
            ColorValue::Rgb { rgb } => Some(*rgb),
            ColorValue::Theme { resolved, .. } => *resolved,
            ColorValue::Unspecified => None,
        }
    }

    /// Fill in the RGB value of a theme reference.
    pub fn resolve(&mut self, scheme: &ColorScheme) {
        if let ColorValue::Theme { scheme: name, resolved } = self {
            *resolved = scheme.resolve(name);
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb { rgb } => write!(f, "RGB({}, {}, {}) / {}", rgb.r, rgb.g, rgb.b, rgb),
            ColorValue::Theme {
                scheme,
                resolved: Some(rgb),
            } => write!(f, "theme {} ({})", scheme, rgb),
            ColorValue::Theme {
                scheme,
                resolved: None,
            } => write!(f, "theme {}", scheme),
            ColorValue::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Fill of a background or shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    /// No fill element; the fill comes from the layout, master or style
    #[default]
    Inherited,
    /// `a:noFill`
    NoFill,
    Solid { color: ColorValue },
    Gradient { stops: Vec<ColorValue> },
    Picture,
    Pattern {
        foreground: Option<ColorValue>,
        background: Option<ColorValue>,
    },
    /// `a:grpFill`
    Group,
    /// `p:bgRef`: a theme background style with a colour override
    StyleReference { index: u32, color: Option<ColorValue> },
}

impl Fill {
    /// Fill variant started by a fill element, before any colour children
    /// are seen. `None` for elements that are not fills.
    pub fn from_element(e: &BytesStart<'_>) -> Option<Self> {
        match e.local_name().as_ref() {
            b"noFill" => Some(Fill::NoFill),
            b"solidFill" => Some(Fill::Solid {
                color: ColorValue::Unspecified,
            }),
            b"gradFill" => Some(Fill::Gradient { stops: Vec::new() }),
            b"blipFill" => Some(Fill::Picture),
            b"pattFill" => Some(Fill::Pattern {
                foreground: None,
                background: None,
            }),
            b"grpFill" => Some(Fill::Group),
            b"bgRef" => Some(Fill::StyleReference {
                index: attr_value(e, b"idx")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
                color: None,
            }),
            _ => None,
        }
    }

    /// Record a colour found inside this fill. `parent` is the local name of
    /// the colour element's parent (`fgClr`, `bgClr`, `gs`, or the fill itself).
    pub fn push_color(&mut self, parent: &[u8], color: ColorValue) {
        match self {
            Fill::Solid { color: slot } => *slot = color,
            Fill::Gradient { stops } if parent == b"gs" => stops.push(color),
            Fill::Pattern { foreground, .. } if parent == b"fgClr" => *foreground = Some(color),
            Fill::Pattern { background, .. } if parent == b"bgClr" => *background = Some(color),
            Fill::StyleReference { color: slot, .. } => *slot = Some(color),
            _ => {},
        }
    }

    /// The representative colour: the solid colour, first gradient stop,
    /// pattern foreground or style override.
    pub fn color(&self) -> Option<&ColorValue> {
        match self {
            Fill::Solid { color } => Some(color),
            Fill::Gradient { stops } => stops.first(),
            Fill::Pattern { foreground, .. } => foreground.as_ref(),
            Fill::StyleReference { color, .. } => color.as_ref(),
            _ => None,
        }
    }

    pub fn resolve(&mut self, scheme: &ColorScheme) {
        match self {
            Fill::Solid { color } => color.resolve(scheme),
            Fill::Gradient { stops } => stops.iter_mut().for_each(|c| c.resolve(scheme)),
            Fill::Pattern {
                foreground,
                background,
            } => {
                for c in [foreground, background].into_iter().flatten() {
                    c.resolve(scheme);
                }
            },
            Fill::StyleReference { color: Some(c), .. } => c.resolve(scheme),
            _ => {},
        }
    }

    #[inline]
    pub fn is_inherited(&self) -> bool {
        matches!(self, Fill::Inherited)
    }

    /// Short name used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Fill::Inherited => "inherited",
            Fill::NoFill => "none",
            Fill::Solid { .. } => "solid",
            Fill::Gradient { .. } => "gradient",
            Fill::Picture => "picture",
            Fill::Pattern { .. } => "pattern",
            Fill::Group => "group",
            Fill::StyleReference { .. } => "style reference",
        }
    }
}

/// Theme colours of one master, with the master's colour map applied.
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    colors: HashMap<String, RGBColor>,
    /// `p:clrMap` aliases such as `bg1 -> lt1`
    aliases: HashMap<String, String>,
}

impl ColorScheme {
    pub fn new(colors: HashMap<String, RGBColor>, aliases: HashMap<String, String>) -> Self {
        Self { colors, aliases }
    }

    /// The alias set PowerPoint uses when a master carries no `p:clrMap`.
    pub fn default_aliases() -> HashMap<String, String> {
        [
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    pub fn resolve(&self, name: &str) -> Option<RGBColor> {
        let target = self.aliases.get(name).map_or(name, String::as_str);
        self.colors.get(target).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(content: &str) -> BytesStart<'_> {
        let name_len = content.find(' ').unwrap_or(content.len());
        BytesStart::from_content(content, name_len)
    }

    #[test]
    fn test_color_elements() {
        assert_eq!(
            ColorValue::from_element(&start(r#"a:srgbClr val="6A46F3""#)),
            Some(ColorValue::Rgb {
                rgb: RGBColor::new(106, 70, 243)
            })
        );
        assert_eq!(
            ColorValue::from_element(&start(r#"a:sysClr val="windowText" lastClr="000000""#)),
            Some(ColorValue::Rgb {
                rgb: RGBColor::new(0, 0, 0)
            })
        );
        assert_eq!(
            ColorValue::from_element(&start(r#"a:prstClr val="red""#)),
            Some(ColorValue::Unspecified)
        );
        assert_eq!(ColorValue::from_element(&start(r#"a:lumMod val="75000""#)), None);
    }

    #[test]
    fn test_theme_resolution_through_aliases() {
        let colors = HashMap::from([
            ("lt1".to_string(), RGBColor::new(255, 255, 255)),
            ("accent1".to_string(), RGBColor::new(106, 70, 243)),
        ]);
        let scheme = ColorScheme::new(colors, ColorScheme::default_aliases());

        let mut bg = ColorValue::from_element(&start(r#"a:schemeClr val="bg1""#)).unwrap();
        bg.resolve(&scheme);
        assert_eq!(bg.rgb(), Some(RGBColor::new(255, 255, 255)));

        let mut missing = ColorValue::Theme {
            scheme: "accent6".into(),
            resolved: None,
        };
        missing.resolve(&scheme);
        assert_eq!(missing.rgb(), None);
        assert_eq!(missing.to_string(), "theme accent6");
    }

    #[test]
    fn test_fill_collects_colors() {
        let mut fill = Fill::from_element(&start("a:gradFill")).unwrap();
        fill.push_color(b"gs", ColorValue::Unspecified);
        fill.push_color(b"gs", ColorValue::Rgb { rgb: RGBColor::new(1, 2, 3) });
        assert_eq!(fill.kind(), "gradient");
        assert_eq!(fill.color(), Some(&ColorValue::Unspecified));

        let mut pattern = Fill::from_element(&start("a:pattFill")).unwrap();
        pattern.push_color(b"bgClr", ColorValue::Unspecified);
        assert_eq!(pattern.color(), None);

        let bg_ref = Fill::from_element(&start(r#"p:bgRef idx="1001""#)).unwrap();
        assert!(matches!(bg_ref, Fill::StyleReference { index: 1001, color: None }));
        assert!(Fill::from_element(&start("a:ln")).is_none());
    }
}
