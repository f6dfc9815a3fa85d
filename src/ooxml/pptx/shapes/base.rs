/// Base shape types for PowerPoint presentations.
use crate::ooxml::pptx::fill::Fill;
use crate::ooxml::pptx::shapes::textframe::TextFrame;
use serde::Serialize;
use std::fmt;

/// Shape type enumeration.
///
/// Indicates what kind of shape this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    /// An auto shape or text box (p:sp)
    Shape,
    /// A picture shape (p:pic)
    Picture,
    /// A graphic frame containing a table or chart (p:graphicFrame)
    GraphicFrame,
    /// A group shape (p:grpSp)
    GroupShape,
    /// A connector shape (p:cxnSp)
    Connector,
    /// Anything else found in a shape tree
    Unknown,
}

impl ShapeType {
    pub fn from_local_name(name: &[u8]) -> Self {
        match name {
            b"sp" => ShapeType::Shape,
            b"pic" => ShapeType::Picture,
            b"graphicFrame" => ShapeType::GraphicFrame,
            b"grpSp" => ShapeType::GroupShape,
            b"cxnSp" => ShapeType::Connector,
            _ => ShapeType::Unknown,
        }
    }
}

/// Semantic type of a placeholder, from `p:ph@type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderType {
    Title,
    CenterTitle,
    Subtitle,
    Body,
    /// `obj`, the default when `type` is absent
    Object,
    Date,
    Footer,
    SlideNumber,
    Picture,
    Chart,
    Table,
    Other(String),
}

impl PlaceholderType {
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => PlaceholderType::Title,
            "ctrTitle" => PlaceholderType::CenterTitle,
            "subTitle" => PlaceholderType::Subtitle,
            "body" => PlaceholderType::Body,
            "obj" => PlaceholderType::Object,
            "dt" => PlaceholderType::Date,
            "ftr" => PlaceholderType::Footer,
            "sldNum" => PlaceholderType::SlideNumber,
            "pic" => PlaceholderType::Picture,
            "chart" => PlaceholderType::Chart,
            "tbl" => PlaceholderType::Table,
            other => PlaceholderType::Other(other.to_string()),
        }
    }

    /// Value of the `type` attribute.
    pub fn as_str(&self) -> &str {
        match self {
            PlaceholderType::Title => "title",
            PlaceholderType::CenterTitle => "ctrTitle",
            PlaceholderType::Subtitle => "subTitle",
            PlaceholderType::Body => "body",
            PlaceholderType::Object => "obj",
            PlaceholderType::Date => "dt",
            PlaceholderType::Footer => "ftr",
            PlaceholderType::SlideNumber => "sldNum",
            PlaceholderType::Picture => "pic",
            PlaceholderType::Chart => "chart",
            PlaceholderType::Table => "tbl",
            PlaceholderType::Other(s) => s,
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderType::Title | PlaceholderType::CenterTitle)
    }

    /// Body and generic content slots both take bulleted text.
    pub fn is_body(&self) -> bool {
        matches!(self, PlaceholderType::Body | PlaceholderType::Object)
    }
}

impl fmt::Display for PlaceholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder slot identity: `p:ph@type` and `p:ph@idx`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Placeholder {
    pub kind: PlaceholderType,
    pub idx: u32,
}

/// Shape geometry (position and size) in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeGeometry {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// A top-level entry of a shape tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub shape_type: ShapeType,
    /// Qualified element name, e.g. `p:sp`
    pub tag: String,
    /// `cNvPr@id`
    pub id: u32,
    /// `cNvPr@name`
    pub name: String,
    pub placeholder: Option<Placeholder>,
    /// Absent when the shape inherits its position from a placeholder
    pub geometry: Option<ShapeGeometry>,
    pub fill: Fill,
    pub text_frame: Option<TextFrame>,
}

impl Shape {
    pub fn new(shape_type: ShapeType, tag: String) -> Self {
        Self {
            shape_type,
            tag,
            id: 0,
            name: String::new(),
            placeholder: None,
            geometry: None,
            fill: Fill::Inherited,
            text_frame: None,
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    #[inline]
    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_type_round_trip_names() {
        for name in ["title", "ctrTitle", "subTitle", "body", "obj", "sldNum", "media"] {
            assert_eq!(PlaceholderType::parse(name).as_str(), name);
        }
        assert!(PlaceholderType::parse("ctrTitle").is_title());
        assert!(PlaceholderType::parse("obj").is_body());
        assert!(!PlaceholderType::parse("subTitle").is_body());
    }

    #[test]
    fn test_shape_type_from_tag() {
        assert_eq!(ShapeType::from_local_name(b"grpSp"), ShapeType::GroupShape);
        assert_eq!(ShapeType::from_local_name(b"contentPart"), ShapeType::Unknown);
    }
}
