/// Shapes written onto new slides: text boxes, filled rectangles and
/// placeholder instances.
use crate::common::RGBColor;
use crate::common::unit::{pt_to_centipoints, pt_to_spacing_points};
use crate::common::xml::{escape_xml, is_xml_char};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::{BodyFormat, ParagraphFormat, TextFormat};
use crate::ooxml::pptx::shapes::base::PlaceholderType;
use std::fmt::Write as FmtWrite;

/// One paragraph holding a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    pub text: String,
    pub paragraph: ParagraphFormat,
    pub run: TextFormat,
}

/// Text frame content of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub body: BodyFormat,
    pub paragraphs: Vec<TextParagraph>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapePlacement {
    Absolute {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    /// Position and size come from the layout's matching slot
    Placeholder { kind: PlaceholderType, idx: u32 },
}

/// A shape on a slide being written.
#[derive(Debug, Clone)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    name: String,
    placement: ShapePlacement,
    fill: Option<RGBColor>,
    text: Option<TextBody>,
    text_box: bool,
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            placement: ShapePlacement::Absolute {
                x,
                y,
                width,
                height,
            },
            fill: None,
            text: None,
            text_box: true,
        }
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            name: format!("Rectangle {}", shape_id - 1),
            placement: ShapePlacement::Absolute {
                x,
                y,
                width,
                height,
            },
            fill: fill_color,
            text: None,
            text_box: false,
        }
    }

    pub(crate) fn new_placeholder(shape_id: u32, kind: PlaceholderType, idx: u32, name: &str) -> Self {
        Self {
            shape_id,
            name: name.to_string(),
            placement: ShapePlacement::Placeholder { kind, idx },
            fill: None,
            text: None,
            text_box: false,
        }
    }

    /// Set the text content of this shape.
    pub fn set_text(&mut self, body: TextBody) -> &mut Self {
        self.text = Some(body);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn text(&self) -> Option<&TextBody> {
        self.text.as_ref()
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        match &self.placement {
            ShapePlacement::Placeholder { kind, idx } => {
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
                xml.push_str("<p:nvPr><p:ph");
                if *kind != PlaceholderType::Object {
                    write!(xml, r#" type="{}""#, escape_xml(kind.as_str()))
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                }
                if *idx != 0 {
                    write!(xml, r#" idx="{}""#, idx).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                }
                xml.push_str("/></p:nvPr>");
            },
            ShapePlacement::Absolute { .. } if self.text_box => {
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
            },
            ShapePlacement::Absolute { .. } => xml.push_str("<p:cNvSpPr/><p:nvPr/>"),
        }
        xml.push_str("</p:nvSpPr>");

        match &self.placement {
            ShapePlacement::Absolute {
                x,
                y,
                width,
                height,
            } => {
                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                match self.fill {
                    Some(color) => write_solid_fill(xml, color)?,
                    None if self.text_box => xml.push_str("<a:noFill/>"),
                    None => {},
                }
                if !self.text_box {
                    xml.push_str("<a:ln><a:noFill/></a:ln>");
                }
                xml.push_str("</p:spPr>");
            },
            ShapePlacement::Placeholder { .. } => match self.fill {
                Some(color) => {
                    xml.push_str("<p:spPr>");
                    write_solid_fill(xml, color)?;
                    xml.push_str("</p:spPr>");
                },
                None => xml.push_str("<p:spPr/>"),
            },
        }

        if let Some(text) = &self.text {
            write_text_body(xml, text)?;
        } else if !self.text_box {
            // PowerPoint expects a text body even on plain rectangles
            xml.push_str(r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p></p:txBody>"#);
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

fn write_solid_fill(xml: &mut String, color: RGBColor) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))
}

fn write_text_body(xml: &mut String, text: &TextBody) -> Result<()> {
    xml.push_str("<p:txBody>");

    xml.push_str("<a:bodyPr");
    if let Some(wrap) = text.body.word_wrap {
        xml.push_str(if wrap { r#" wrap="square""# } else { r#" wrap="none""# });
    }
    if let Some(inset) = text.body.left_inset {
        write!(xml, r#" lIns="{}""#, inset).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    xml.push_str(r#" rtlCol="0""#);
    if let Some(anchor) = text.body.anchor {
        write!(xml, r#" anchor="{}""#, anchor.as_attr())
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    xml.push_str("/>");
    xml.push_str("<a:lstStyle/>");

    if text.paragraphs.is_empty() {
        xml.push_str("<a:p/>");
    }
    for para in &text.paragraphs {
        write_paragraph(xml, para)?;
    }

    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, para: &TextParagraph) -> Result<()> {
    if let Some(c) = para.text.chars().find(|c| !is_xml_char(*c)) {
        return Err(OoxmlError::InvalidFormat(format!(
            "character U+{:04X} cannot be stored in slide text",
            c as u32
        )));
    }

    xml.push_str("<a:p>");

    let fmt = &para.paragraph;
    let mut attrs = String::new();
    if let Some(margin) = fmt.margin_left {
        write!(attrs, r#" marL="{}""#, margin).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if fmt.level > 0 {
        write!(attrs, r#" lvl="{}""#, fmt.level).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if let Some(alignment) = fmt.alignment {
        write!(attrs, r#" algn="{}""#, alignment.as_attr())
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    match fmt.space_before {
        Some(pts) => write!(
            xml,
            r#"<a:pPr{}><a:spcBef><a:spcPts val="{}"/></a:spcBef></a:pPr>"#,
            attrs,
            pt_to_spacing_points(pts)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?,
        None if !attrs.is_empty() => write!(xml, "<a:pPr{}/>", attrs)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?,
        None => {},
    }

    let run = &para.run;
    let mut rpr_attrs = String::from(r#" lang="en-US""#);
    if let Some(size) = run.size {
        write!(rpr_attrs, r#" sz="{}""#, pt_to_centipoints(size))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if let Some(bold) = run.bold {
        rpr_attrs.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
    }
    rpr_attrs.push_str(r#" dirty="0""#);

    let mut rpr_children = String::new();
    if let Some(color) = run.color {
        write_solid_fill(&mut rpr_children, color)?;
    }
    if let Some(font) = &run.font {
        write!(rpr_children, r#"<a:latin typeface="{}"/>"#, escape_xml(font))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }

    if para.text.is_empty() {
        // Blank line: keep the size on the paragraph end so it has height
        write_rpr(xml, "a:endParaRPr", &rpr_attrs, &rpr_children)?;
    } else {
        xml.push_str("<a:r>");
        write_rpr(xml, "a:rPr", &rpr_attrs, &rpr_children)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&para.text))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_rpr(xml: &mut String, tag: &str, attrs: &str, children: &str) -> Result<()> {
    if children.is_empty() {
        write!(xml, "<{}{}/>", tag, attrs)
    } else {
        write!(xml, "<{}{}>{}</{}>", tag, attrs, children, tag)
    }
    .map_err(|e| OoxmlError::Xml(e.to_string()))
}
