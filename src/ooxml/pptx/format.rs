//! Format types for text written into PPTX slides.

use crate::common::RGBColor;

/// Paragraph alignment (`a:pPr@algn`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical anchoring of text in its frame (`a:bodyPr@anchor`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Run formatting properties. Unset fields are inherited from the layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub color: Option<RGBColor>,
}

/// Paragraph formatting properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Outline level, 0-based
    pub level: u32,
    /// Left margin in EMUs
    pub margin_left: Option<i64>,
    pub alignment: Option<Alignment>,
    /// Space before the paragraph in points
    pub space_before: Option<f64>,
}

/// Text-frame properties (`a:bodyPr`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyFormat {
    pub anchor: Option<Anchor>,
    /// Left inset in EMUs
    pub left_inset: Option<i64>,
    pub word_wrap: Option<bool>,
}
