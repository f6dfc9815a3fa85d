/// Theme parts for PowerPoint presentations.
///
/// Only the pieces deck rendering and template inspection need are read:
/// the theme name, the major/minor Latin fonts and the colour scheme.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::fill::ColorScheme;
use crate::common::xml::attr_value;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Colour slots of `a:clrScheme`, in document order.
const SCHEME_SLOTS: [&[u8]; 12] = [
    b"dk1", b"lt1", b"dk2", b"lt2", b"accent1", b"accent2", b"accent3", b"accent4", b"accent5",
    b"accent6", b"hlink", b"folHlink",
];

/// Color information from a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    /// Color name (e.g., "accent1", "dk1", "lt1")
    pub name: String,
    /// RGB value; system colours use their cached `lastClr`
    pub rgb: Option<RGBColor>,
}

/// Theme information extracted from a theme part.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub name: String,
    /// Major (heading) Latin typeface
    pub major_font: Option<String>,
    /// Minor (body) Latin typeface
    pub minor_font: Option<String>,
    pub colors: Vec<ThemeColor>,
}

impl Theme {
    /// Colour scheme with a master's `p:clrMap` aliases applied.
    pub fn color_scheme(&self, aliases: HashMap<String, String>) -> ColorScheme {
        let colors = self
            .colors
            .iter()
            .filter_map(|c| c.rgb.map(|rgb| (c.name.clone(), rgb)))
            .collect();
        ColorScheme::new(colors, aliases)
    }
}

/// Theme part - defines the visual styling of a presentation.
///
/// Corresponds to `/ppt/theme/themeN.xml` in the package.
pub struct ThemePart<'a> {
    part: &'a dyn Part,
}

impl<'a> ThemePart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Parse and return the theme information.
    pub fn theme(&self) -> Result<Theme> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut theme = Theme::default();
        let mut in_major_font = false;
        let mut in_minor_font = false;
        let mut in_color_scheme = false;
        let mut current_color_name: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let tag_name = e.local_name();
                    match tag_name.as_ref() {
                        b"theme" => theme.name = attr_value(e, b"name").unwrap_or_default(),
                        b"clrScheme" => in_color_scheme = true,
                        b"majorFont" => in_major_font = true,
                        b"minorFont" => in_minor_font = true,
                        b"latin" if in_major_font => theme.major_font = attr_value(e, b"typeface"),
                        b"latin" if in_minor_font => theme.minor_font = attr_value(e, b"typeface"),
                        name if in_color_scheme && SCHEME_SLOTS.contains(&name) => {
                            current_color_name =
                                Some(String::from_utf8_lossy(name).into_owned());
                        },
                        b"srgbClr" | b"sysClr" if in_color_scheme => {
                            if let Some(name) = current_color_name.take() {
                                let hex = if tag_name.as_ref() == b"srgbClr" {
                                    attr_value(e, b"val")
                                } else {
                                    attr_value(e, b"lastClr")
                                };
                                theme.colors.push(ThemeColor {
                                    name,
                                    rgb: hex.and_then(|h| RGBColor::from_hex(&h)),
                                });
                            }
                        },
                        _ => {},
                    }
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"clrScheme" => in_color_scheme = false,
                    b"majorFont" => in_major_font = false,
                    b"minorFont" => in_minor_font = false,
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        Ok(theme)
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::{PackURI, XmlPart};

    const THEME: &str = r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Brand">
        <a:themeElements>
            <a:clrScheme name="Brand">
                <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
                <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
                <a:dk2><a:srgbClr val="1F1646"/></a:dk2>
                <a:lt2><a:srgbClr val="F2F2F2"/></a:lt2>
                <a:accent1><a:srgbClr val="6A46F3"/></a:accent1>
            </a:clrScheme>
            <a:fontScheme name="Brand">
                <a:majorFont><a:latin typeface="Montserrat"/></a:majorFont>
                <a:minorFont><a:latin typeface="Open Sans"/></a:minorFont>
            </a:fontScheme>
        </a:themeElements>
    </a:theme>"#;

    #[test]
    fn test_parse_theme() {
        let part = XmlPart::new(
            PackURI::new("/ppt/theme/theme1.xml").unwrap(),
            ct::OFC_THEME.into(),
            THEME.as_bytes().to_vec(),
        );
        let theme = ThemePart::from_part(&part).unwrap().theme().unwrap();

        assert_eq!(theme.name, "Brand");
        assert_eq!(theme.major_font.as_deref(), Some("Montserrat"));
        assert_eq!(theme.minor_font.as_deref(), Some("Open Sans"));
        assert_eq!(theme.colors.len(), 5);
        assert_eq!(theme.colors[0].rgb, Some(RGBColor::new(0, 0, 0)));

        let scheme = theme.color_scheme(ColorScheme::default_aliases());
        assert_eq!(scheme.resolve("tx2"), Some(RGBColor::new(0x1F, 0x16, 0x46)));
        assert_eq!(scheme.resolve("accent1"), Some(RGBColor::new(0x6A, 0x46, 0xF3)));
        assert_eq!(scheme.resolve("accent2"), None);
    }
}
