/// Slide writer for PPTX.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::pptx::shapes::base::PlaceholderType;
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A slide being built for a presentation.
///
/// Shapes are written in the order they are added; the first added is the
/// bottom of the z-order.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Layout the slide is based on
    layout: PackURI,
    background: Option<RGBColor>,
    shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(layout: PackURI) -> Self {
        Self {
            layout,
            background: None,
            shapes: Vec::new(),
        }
    }

    #[inline]
    pub fn layout(&self) -> &PackURI {
        &self.layout
    }

    /// Give the slide a solid background colour.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    #[inline]
    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Shape ids start at 2; the shape tree itself is id 1.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), x, y, width, height);
        self.push(shape)
    }

    pub fn add_rectangle(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> &mut MutableShape {
        let shape =
            MutableShape::new_rectangle(self.next_shape_id(), x, y, width, height, fill_color);
        self.push(shape)
    }

    /// Add an instance of one of the layout's placeholder slots.
    pub fn add_placeholder(&mut self, kind: PlaceholderType, idx: u32, name: &str) -> &mut MutableShape {
        let shape = MutableShape::new_placeholder(self.next_shape_id(), kind, idx, name);
        self.push(shape)
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // p:bg must come before p:spTree
        if let Some(color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color.to_hex()
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::shapes::tree::parse_common_slide_data;
    use crate::ooxml::pptx::writer::shape::{TextBody, TextParagraph};

    #[test]
    fn test_slide_xml_reads_back() {
        let mut slide = MutableSlide::new(PackURI::new("/ppt/slideLayouts/slideLayout7.xml").unwrap());
        slide.set_background(RGBColor::new(0x6A, 0x46, 0xF3));
        slide.add_rectangle(0, 0, 9144000, 914400, Some(RGBColor::new(1, 2, 3)));
        slide.add_text_box(457200, 1371600, 8229600, 4572000).set_text(TextBody {
            paragraphs: vec![TextParagraph {
                text: "Hello".into(),
                ..Default::default()
            }],
            ..Default::default()
        });
        slide.add_placeholder(PlaceholderType::Title, 0, "Title 1");
        assert_eq!(slide.shape_count(), 3);

        let xml = slide.to_xml().unwrap();
        let data = parse_common_slide_data(xml.as_bytes()).unwrap();
        assert_eq!(
            data.background.color().and_then(|c| c.rgb()),
            Some(RGBColor::new(0x6A, 0x46, 0xF3))
        );
        let ids: Vec<u32> = data.shapes.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(data.shapes[1].text_frame().unwrap().text(), "Hello");
        assert!(data.shapes[2].is_placeholder());
        assert!(data.shapes[2].geometry.is_none());
    }
}
