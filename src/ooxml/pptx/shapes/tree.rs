//! Single-pass reader for `p:cSld`: slide name, background and the
//! top-level entries of the shape tree.
//!
//! The reader keeps a stack of open element names and decides what an
//! element means from its depth relative to the shape that contains it, so
//! the shapes of a group are folded into the group entry rather than
//! reported on their own.

use crate::common::unit::centipoints_to_pt;
use crate::common::xml::{attr_i64, attr_value, push_general_ref, push_text};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::fill::{ColorValue, Fill};
use crate::ooxml::pptx::shapes::base::{
    Placeholder, PlaceholderType, Shape, ShapeGeometry, ShapeType,
};
use crate::ooxml::pptx::shapes::textframe::{Paragraph, Run, TextFrame};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// What `p:cSld` holds for slides, layouts and masters alike.
#[derive(Debug, Clone, Default)]
pub struct CommonSlideData {
    /// `p:cSld@name`; layouts carry their display name here
    pub name: String,
    pub background: Fill,
    pub shapes: Vec<Shape>,
}

/// Parse the common slide data of a slide, layout or master part.
pub fn parse_common_slide_data(xml: &[u8]) -> Result<CommonSlideData> {
    let mut reader = Reader::from_reader(xml);
    let mut parser = TreeParser::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                parser.start(e);
                parser.stack.push(e.local_name().as_ref().to_vec());
            },
            Ok(Event::Empty(ref e)) => {
                parser.start(e);
                parser.end(e.local_name().as_ref());
            },
            Ok(Event::End(ref e)) => {
                parser.stack.pop();
                parser.end(e.local_name().as_ref());
            },
            Ok(Event::Text(ref e)) => {
                if let Some(out) = parser.text_target() {
                    push_text(out, e);
                }
            },
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(out) = parser.text_target() {
                    push_general_ref(out, e);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(parser.data)
}

enum FillTarget {
    Background,
    Shape,
    Run,
}

struct ActiveFill {
    target: FillTarget,
    fill: Fill,
    depth: usize,
}

struct ShapeState {
    shape: Shape,
    depth: usize,
    in_text: bool,
    paragraph: Option<Paragraph>,
    run: Option<Run>,
}

#[derive(Default)]
struct TreeParser {
    stack: Vec<Vec<u8>>,
    data: CommonSlideData,
    shape: Option<ShapeState>,
    fill: Option<ActiveFill>,
}

impl TreeParser {
    fn start(&mut self, e: &BytesStart<'_>) {
        let depth = self.stack.len();
        let local = e.local_name();
        let local = local.as_ref();
        let parent: &[u8] = self.stack.last().map_or(b"", Vec::as_slice);

        if let Some(active) = self.fill.as_mut() {
            if let Some(color) = ColorValue::from_element(e) {
                active.fill.push_color(parent, color);
            }
            return;
        }

        let Some(state) = self.shape.as_mut() else {
            if parent == b"bgPr" || (parent == b"bg" && local == b"bgRef") {
                if let Some(fill) = Fill::from_element(e) {
                    self.fill = Some(ActiveFill {
                        target: FillTarget::Background,
                        fill,
                        depth,
                    });
                }
            } else if local == b"cSld" {
                self.data.name = attr_value(e, b"name").unwrap_or_default();
            } else if parent == b"spTree"
                && !matches!(local, b"nvGrpSpPr" | b"grpSpPr" | b"extLst")
            {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                self.shape = Some(ShapeState {
                    shape: Shape::new(ShapeType::from_local_name(local), tag),
                    depth,
                    in_text: false,
                    paragraph: None,
                    run: None,
                });
            }
            return;
        };

        let rel = depth - state.depth;
        match local {
            b"cNvPr" if rel == 2 => {
                state.shape.id = attr_i64(e, b"id").unwrap_or(0).max(0) as u32;
                state.shape.name = attr_value(e, b"name").unwrap_or_default();
            },
            b"ph" if rel == 3 => {
                let kind = attr_value(e, b"type").unwrap_or_else(|| "obj".to_string());
                state.shape.placeholder = Some(Placeholder {
                    kind: PlaceholderType::parse(&kind),
                    idx: attr_i64(e, b"idx").unwrap_or(0).max(0) as u32,
                });
            },
            b"off" if parent == b"xfrm" && rel <= 3 => {
                let geometry = state.shape.geometry.get_or_insert_with(ShapeGeometry::default);
                geometry.x = attr_i64(e, b"x").unwrap_or(0);
                geometry.y = attr_i64(e, b"y").unwrap_or(0);
            },
            b"ext" if parent == b"xfrm" && rel <= 3 => {
                let geometry = state.shape.geometry.get_or_insert_with(ShapeGeometry::default);
                geometry.cx = attr_i64(e, b"cx").unwrap_or(0);
                geometry.cy = attr_i64(e, b"cy").unwrap_or(0);
            },
            b"txBody" if rel == 1 => {
                state.in_text = true;
                state.shape.text_frame = Some(TextFrame::default());
            },
            b"p" if state.in_text && rel == 2 => state.paragraph = Some(Paragraph::default()),
            b"pPr" if parent == b"p" => {
                if let Some(paragraph) = state.paragraph.as_mut() {
                    paragraph.level = attr_i64(e, b"lvl").unwrap_or(0).max(0) as u32;
                }
            },
            b"r" | b"fld" if parent == b"p" => state.run = Some(Run::default()),
            b"br" if parent == b"p" => {
                if let Some(paragraph) = state.paragraph.as_mut() {
                    paragraph.runs.push(Run {
                        text: "\n".to_string(),
                        ..Default::default()
                    });
                }
            },
            b"rPr" if parent == b"r" || parent == b"fld" => {
                if let Some(run) = state.run.as_mut() {
                    run.size_pt = attr_i64(e, b"sz")
                        .and_then(|sz| u32::try_from(sz).ok())
                        .map(centipoints_to_pt);
                    run.bold = attr_value(e, b"b").map(|b| b == "1" || b == "true");
                }
            },
            b"latin" if parent == b"rPr" => {
                if let Some(run) = state.run.as_mut() {
                    run.font_name = attr_value(e, b"typeface");
                }
            },
            _ => {
                let target = if rel == 2 && (parent == b"spPr" || parent == b"grpSpPr") {
                    Some(FillTarget::Shape)
                } else if parent == b"rPr" && state.run.is_some() {
                    Some(FillTarget::Run)
                } else {
                    None
                };
                if let (Some(target), Some(fill)) = (target, Fill::from_element(e)) {
                    self.fill = Some(ActiveFill {
                        target,
                        fill,
                        depth,
                    });
                }
            },
        }
    }

    /// Called after the element has been popped, so `stack.len()` is the
    /// depth the element was opened at.
    fn end(&mut self, local: &[u8]) {
        let depth = self.stack.len();

        if let Some(active) = self.fill.take() {
            if active.depth != depth {
                self.fill = Some(active);
                return;
            }
            match active.target {
                FillTarget::Background => self.data.background = active.fill,
                FillTarget::Shape => {
                    if let Some(state) = self.shape.as_mut() {
                        state.shape.fill = active.fill;
                    }
                },
                FillTarget::Run => {
                    if let Some(run) = self.shape.as_mut().and_then(|s| s.run.as_mut()) {
                        run.color = active.fill.color().cloned();
                    }
                },
            }
            return;
        }

        let Some(state) = self.shape.as_mut() else {
            return;
        };
        match (depth - state.depth, local) {
            (0, _) => {
                if let Some(state) = self.shape.take() {
                    self.data.shapes.push(state.shape);
                }
            },
            (1, b"txBody") => state.in_text = false,
            (2, b"p") if state.in_text => {
                if let (Some(paragraph), Some(frame)) =
                    (state.paragraph.take(), state.shape.text_frame.as_mut())
                {
                    frame.paragraphs.push(paragraph);
                }
            },
            (3, b"r" | b"fld") if state.in_text => {
                if let (Some(run), Some(paragraph)) = (state.run.take(), state.paragraph.as_mut()) {
                    paragraph.runs.push(run);
                }
            },
            _ => {},
        }
    }

    /// Text of the run whose `a:t` is currently open.
    fn text_target(&mut self) -> Option<&mut String> {
        if self.stack.last().is_none_or(|name| name.as_slice() != b"t") {
            return None;
        }
        self.shape
            .as_mut()
            .and_then(|state| state.run.as_mut())
            .map(|run| &mut run.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    const SLIDE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld name="Agenda">
    <p:bg><p:bgPr><a:solidFill><a:schemeClr val="accent1"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
        <p:spPr/>
        <p:txBody><a:bodyPr/><a:p><a:r><a:rPr lang="en-US" sz="3600" b="1"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:latin typeface="Montserrat"/></a:rPr><a:t>Q &amp; A</a:t></a:r></a:p></p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="3" name="Content 2"/><p:cNvSpPr/><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>
        <p:spPr><a:xfrm><a:off x="457200" y="1371600"/><a:ext cx="8229600" cy="4525963"/></a:xfrm><a:solidFill><a:srgbClr val="6A46F3"/></a:solidFill><a:ln><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:ln></p:spPr>
        <p:txBody><a:bodyPr/><a:p><a:r><a:t>Item A</a:t></a:r></a:p><a:p/><a:p><a:pPr lvl="1"/><a:r><a:t>  sub</a:t></a:r><a:br/><a:r><a:t>next</a:t></a:r></a:p></p:txBody>
      </p:sp>
      <p:grpSp>
        <p:nvGrpSpPr><p:cNvPr id="4" name="Group 3"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
        <p:grpSpPr><a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/><a:chOff x="0" y="0"/><a:chExt cx="3" cy="4"/></a:xfrm></p:grpSpPr>
        <p:sp><p:nvSpPr><p:cNvPr id="5" name="Inner"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
          <p:spPr><a:xfrm><a:off x="99" y="99"/><a:ext cx="99" cy="99"/></a:xfrm><a:gradFill/></p:spPr></p:sp>
      </p:grpSp>
      <p:contentPart r:id="rId9" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#;

    #[test]
    fn test_background_and_name() {
        let data = parse_common_slide_data(SLIDE.as_bytes()).unwrap();
        assert_eq!(data.name, "Agenda");
        assert_eq!(
            data.background,
            Fill::Solid {
                color: ColorValue::Theme {
                    scheme: "accent1".into(),
                    resolved: None
                }
            }
        );
    }

    #[test]
    fn test_top_level_shapes_only() {
        let data = parse_common_slide_data(SLIDE.as_bytes()).unwrap();
        let types: Vec<_> = data.shapes.iter().map(|s| s.shape_type).collect();
        assert_eq!(
            types,
            vec![
                ShapeType::Shape,
                ShapeType::Shape,
                ShapeType::GroupShape,
                ShapeType::Unknown
            ]
        );
        assert_eq!(data.shapes[3].tag, "p:contentPart");

        let group = &data.shapes[2];
        assert_eq!(group.name, "Group 3");
        assert_eq!(
            group.geometry,
            Some(ShapeGeometry {
                x: 1,
                y: 2,
                cx: 3,
                cy: 4
            })
        );
        assert_eq!(group.fill, Fill::Inherited);
    }

    #[test]
    fn test_placeholders_and_runs() {
        let data = parse_common_slide_data(SLIDE.as_bytes()).unwrap();

        let title = &data.shapes[0];
        assert_eq!(
            title.placeholder,
            Some(Placeholder {
                kind: PlaceholderType::Title,
                idx: 0
            })
        );
        assert!(title.geometry.is_none());
        let run = title.text_frame().unwrap().first_visible_run().unwrap();
        assert_eq!(run.text, "Q & A");
        assert_eq!(run.size_pt, Some(36.0));
        assert_eq!(run.bold, Some(true));
        assert_eq!(run.font_name.as_deref(), Some("Montserrat"));
        assert_eq!(
            run.color,
            Some(ColorValue::Rgb {
                rgb: RGBColor::new(255, 255, 255)
            })
        );

        let body = &data.shapes[1];
        assert_eq!(
            body.placeholder,
            Some(Placeholder {
                kind: PlaceholderType::Object,
                idx: 1
            })
        );
        assert_eq!(body.fill.color().and_then(ColorValue::rgb), Some(RGBColor::new(0x6A, 0x46, 0xF3)));
        let frame = body.text_frame().unwrap();
        assert_eq!(frame.paragraphs.len(), 3);
        assert_eq!(frame.paragraphs[1].text(), "");
        assert_eq!(frame.paragraphs[2].level, 1);
        assert_eq!(frame.paragraphs[2].text(), "  sub\nnext");
    }
}
