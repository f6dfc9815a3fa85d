//! Slide rendering: from a slide's text to positioned, styled regions.
//!
//! Two renderers share the same output model. [`CanvasRenderer`] places
//! everything itself on a blank layout, with colours from the palette.
//! [`TemplateRenderer`] writes title and body text into a layout's
//! placeholder slots and leaves geometry and colour to the template.

use crate::common::xml::is_xml_char;
use crate::common::{Error, RGBColor, Result};
use crate::deck::binding::{BoundLayout, Role};
use crate::deck::config::Typography;
use crate::deck::geometry::{CanvasGeometry, Rect};
use crate::deck::palette::{self, Palette};
use crate::deck::slides::{BodyLine, SlideKind};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::pptx::format::{Alignment, Anchor, BodyFormat, ParagraphFormat, TextFormat};
use crate::ooxml::pptx::shapes::base::PlaceholderType;
use crate::ooxml::pptx::writer::{MutableSlide, TextBody, TextParagraph};

/// Where a region sits on the slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Absolute frame
    Frame(Rect),
    /// Geometry inherited from a layout slot
    Slot {
        role: Role,
        kind: PlaceholderType,
        idx: u32,
        name: String,
    },
}

/// One paragraph with its final formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledParagraph {
    pub text: String,
    pub level: u32,
    /// Points
    pub size: f64,
    pub bold: bool,
    /// `None` keeps the layout's colour
    pub color: Option<RGBColor>,
    /// `None` keeps the layout's alignment
    pub alignment: Option<Alignment>,
    /// EMUs
    pub margin_left: Option<i64>,
    /// Points
    pub space_before: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub anchor: Option<Anchor>,
    pub left_inset: Option<i64>,
    pub word_wrap: Option<bool>,
    pub paragraphs: Vec<StyledParagraph>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub placement: Placement,
    pub fill: Option<RGBColor>,
    pub text: Option<TextBlock>,
}

/// Background and regions of one slide, before it is tied to a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub background: Option<RGBColor>,
    pub regions: Vec<Region>,
}

/// A finished slide of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    /// 1-based position in the deck
    pub number: usize,
    pub kind: SlideKind,
    pub layout: PackURI,
    pub layout_name: String,
    pub background: Option<RGBColor>,
    pub regions: Vec<Region>,
}

impl RenderedSlide {
    pub(crate) fn new(number: usize, kind: SlideKind, layout: &BoundLayout, composition: Composition) -> Self {
        Self {
            number,
            kind,
            layout: layout.partname.clone(),
            layout_name: layout.name.clone(),
            background: composition.background,
            regions: composition.regions,
        }
    }

    /// Paragraphs of every region, in region order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &StyledParagraph> {
        self.regions
            .iter()
            .filter_map(|r| r.text.as_ref())
            .flat_map(|t| t.paragraphs.iter())
    }

    /// Emit the slide's shapes, bottom of the z-order first.
    pub fn write_to(&self, out: &mut MutableSlide) {
        if let Some(color) = self.background {
            out.set_background(color);
        }

        for region in &self.regions {
            let shape = match &region.placement {
                Placement::Frame(rect) if region.fill.is_some() => {
                    out.add_rectangle(rect.x, rect.y, rect.cx, rect.cy, region.fill)
                },
                Placement::Frame(rect) => out.add_text_box(rect.x, rect.y, rect.cx, rect.cy),
                Placement::Slot { kind, idx, name, .. } => out.add_placeholder(kind.clone(), *idx, name),
            };
            if let Some(text) = &region.text {
                shape.set_text(text.to_body());
            }
        }
    }
}

impl TextBlock {
    fn to_body(&self) -> TextBody {
        TextBody {
            body: BodyFormat {
                anchor: self.anchor,
                left_inset: self.left_inset,
                word_wrap: self.word_wrap,
            },
            paragraphs: self
                .paragraphs
                .iter()
                .map(|p| TextParagraph {
                    text: p.text.clone(),
                    paragraph: ParagraphFormat {
                        level: p.level,
                        margin_left: p.margin_left,
                        alignment: p.alignment,
                        space_before: p.space_before,
                    },
                    run: TextFormat {
                        font: None,
                        size: Some(p.size),
                        bold: p.bold.then_some(true),
                        color: p.color,
                    },
                })
                .collect(),
        }
    }
}

/// Shared formatting of the lines of one text block.
#[derive(Debug, Clone, Copy)]
struct LineStyle {
    size: f64,
    bold: bool,
    color: Option<RGBColor>,
    alignment: Option<Alignment>,
    space_before: Option<f64>,
}

/// Reject text that cannot be stored in a slide.
fn checked(slide: usize, text: &str) -> Result<&str> {
    if text.chars().all(is_xml_char) {
        Ok(text)
    } else {
        Err(Error::InvalidText {
            slide,
            text: text.to_string(),
        })
    }
}

fn require_title<'t>(slide: usize, kind: SlideKind, title: &'t str) -> Result<&'t str> {
    if title.trim().is_empty() {
        return Err(Error::EmptyTitle {
            slide,
            kind: kind.as_str(),
        });
    }
    checked(slide, title)
}

/// Paragraphs of a title-like text; each line of `text` is one paragraph.
fn text_paragraphs(slide: usize, text: &str, style: LineStyle) -> Result<Vec<StyledParagraph>> {
    Ok(checked(slide, text)?
        .split('\n')
        .map(|line| StyledParagraph {
            text: line.trim_end_matches('\r').to_string(),
            level: 0,
            size: style.size,
            bold: style.bold,
            color: style.color,
            alignment: style.alignment,
            margin_left: None,
            space_before: style.space_before,
        })
        .collect())
}

/// One paragraph per body line, in order. Nested lines are sized by
/// [`Typography::size_at`]; `indent` adds their left offset.
fn body_paragraphs(
    slide: usize,
    lines: &[String],
    style: LineStyle,
    typography: &Typography,
    indent: bool,
) -> Result<Vec<StyledParagraph>> {
    lines
        .iter()
        .map(|line| -> Result<StyledParagraph> {
            let line = BodyLine::parse(checked(slide, line)?);
            Ok(StyledParagraph {
                text: line.text.to_string(),
                level: line.level,
                size: typography.size_at(style.size, line.level),
                bold: style.bold,
                color: style.color,
                alignment: style.alignment,
                margin_left: (indent && line.level > 0).then(|| CanvasGeometry::indent(line.level)),
                space_before: style.space_before,
            })
        })
        .collect()
}

/// Merge the outcomes of both columns: both are always computed, and either
/// failure is reported together with the other side's outcome.
fn join_columns(slide: usize, left: Result<Region>, right: Result<Region>) -> Result<(Region, Region)> {
    match (left, right) {
        (Ok(left), Ok(right)) => Ok((left, right)),
        (left, right) => Err(Error::Columns {
            slide,
            left: left.err().map(Box::new),
            right: right.err().map(Box::new),
        }),
    }
}

/// Renders slides from scratch on a blank layout.
///
/// # Examples
///
/// ```rust
/// use deckhand::deck::config::Typography;
/// use deckhand::deck::geometry::CanvasGeometry;
/// use deckhand::deck::palette::Palette;
/// use deckhand::deck::render::CanvasRenderer;
///
/// let palette = Palette::brand();
/// let typography = Typography::default();
/// let renderer = CanvasRenderer {
///     geometry: CanvasGeometry::new(9_144_000, 6_858_000),
///     palette: &palette,
///     typography: &typography,
/// };
/// let slide = renderer.content(1, "Agenda", &["Item A".into(), "".into(), "Item B".into()])?;
/// assert_eq!(slide.regions.len(), 2);
/// # Ok::<(), deckhand::common::Error>(())
/// ```
pub struct CanvasRenderer<'a> {
    pub geometry: CanvasGeometry,
    pub palette: &'a Palette,
    pub typography: &'a Typography,
}

impl CanvasRenderer<'_> {
    fn frame(rect: Rect, fill: Option<RGBColor>, text: TextBlock) -> Region {
        Region {
            placement: Placement::Frame(rect),
            fill,
            text: Some(text),
        }
    }

    fn centred(&self, size: f64, bold: bool, color: RGBColor) -> LineStyle {
        LineStyle {
            size,
            bold,
            color: Some(color),
            alignment: Some(Alignment::Center),
            space_before: None,
        }
    }

    fn block(paragraphs: Vec<StyledParagraph>) -> TextBlock {
        TextBlock {
            anchor: Some(Anchor::Top),
            left_inset: None,
            word_wrap: Some(true),
            paragraphs,
        }
    }

    /// `primary` background with a centred title and optional subtitle.
    pub fn title(&self, slide: usize, title: &str, subtitle: Option<&str>) -> Result<Composition> {
        let title = require_title(slide, SlideKind::Title, title)?;
        let primary = self.palette.color(palette::PRIMARY)?;
        let on_primary = self.palette.color(palette::ON_PRIMARY)?;
        let t = self.typography;

        let mut regions = vec![Self::frame(
            self.geometry.title(),
            None,
            Self::block(text_paragraphs(slide, title, self.centred(t.title, true, on_primary))?),
        )];
        if let Some(subtitle) = subtitle.filter(|s| !s.trim().is_empty()) {
            regions.push(Self::frame(
                self.geometry.subtitle(),
                None,
                Self::block(text_paragraphs(
                    slide,
                    subtitle,
                    self.centred(t.subtitle, false, on_primary),
                )?),
            ));
        }

        Ok(Composition {
            background: Some(primary),
            regions,
        })
    }

    /// Full-width `primary` bar holding the bold title.
    fn header(&self, slide: usize, kind: SlideKind, title: &str) -> Result<Region> {
        let title = require_title(slide, kind, title)?;
        let style = LineStyle {
            size: self.typography.header,
            bold: true,
            color: Some(self.palette.color(palette::ON_PRIMARY)?),
            alignment: Some(Alignment::Left),
            space_before: None,
        };
        Ok(Self::frame(
            self.geometry.header_bar(),
            Some(self.palette.color(palette::PRIMARY)?),
            TextBlock {
                anchor: Some(Anchor::Middle),
                left_inset: Some(self.geometry.body().x),
                word_wrap: Some(true),
                paragraphs: text_paragraphs(slide, title, style)?,
            },
        ))
    }

    fn body_region(&self, slide: usize, rect: Rect, lines: &[String], size: f64, space_before: f64) -> Result<Region> {
        let style = LineStyle {
            size,
            bold: false,
            color: Some(self.palette.color(palette::TEXT)?),
            alignment: None,
            space_before: Some(space_before),
        };
        let paragraphs = body_paragraphs(slide, lines, style, self.typography, true)?;
        Ok(Self::frame(rect, None, Self::block(paragraphs)))
    }

    /// Header bar over one word-wrapped body region.
    pub fn content(&self, slide: usize, title: &str, body: &[String]) -> Result<Composition> {
        let background = self.palette.color(palette::BACKGROUND)?;
        let header = self.header(slide, SlideKind::Content, title)?;
        let t = self.typography;
        let body = self.body_region(slide, self.geometry.body(), body, t.body, t.body_space_before)?;

        Ok(Composition {
            background: Some(background),
            regions: vec![header, body],
        })
    }

    /// Header bar over two equal columns.
    pub fn two_column(&self, slide: usize, title: &str, left: &[String], right: &[String]) -> Result<Composition> {
        let background = self.palette.color(palette::BACKGROUND)?;
        let header = self.header(slide, SlideKind::TwoColumn, title)?;
        let t = self.typography;
        let (left_rect, right_rect) = self.geometry.columns();

        let left = self.body_region(slide, left_rect, left, t.two_column_body, t.column_space_before);
        let right = self.body_region(slide, right_rect, right, t.two_column_body, t.column_space_before);
        let (left, right) = join_columns(slide, left, right)?;

        Ok(Composition {
            background: Some(background),
            regions: vec![header, left, right],
        })
    }

    /// `primary` background with one large centred message.
    pub fn closing(&self, slide: usize, text: &str, secondary: Option<&str>) -> Result<Composition> {
        let text = require_title(slide, SlideKind::Closing, text)?;
        let primary = self.palette.color(palette::PRIMARY)?;
        let on_primary = self.palette.color(palette::ON_PRIMARY)?;
        let t = self.typography;

        let mut regions = vec![Self::frame(
            self.geometry.closing(),
            None,
            Self::block(text_paragraphs(slide, text, self.centred(t.closing, true, on_primary))?),
        )];
        if let Some(secondary) = secondary.filter(|s| !s.trim().is_empty()) {
            regions.push(Self::frame(
                self.geometry.closing_secondary(),
                None,
                Self::block(text_paragraphs(
                    slide,
                    secondary,
                    self.centred(t.closing_secondary, false, on_primary),
                )?),
            ));
        }

        Ok(Composition {
            background: Some(primary),
            regions,
        })
    }
}

/// Renders slides into a template's placeholder slots.
pub struct TemplateRenderer<'a> {
    /// Frames for text the layout has no slot for
    pub geometry: CanvasGeometry,
    pub typography: &'a Typography,
}

impl TemplateRenderer<'_> {
    fn slot(layout: &BoundLayout, role: Role, paragraphs: Vec<StyledParagraph>) -> Result<Region> {
        let ph = layout.require(role)?;
        Ok(Region {
            placement: Placement::Slot {
                role,
                kind: ph.kind.clone(),
                idx: ph.idx,
                name: ph.name.clone(),
            },
            fill: None,
            text: Some(TextBlock {
                anchor: None,
                left_inset: None,
                word_wrap: None,
                paragraphs,
            }),
        })
    }

    fn plain(size: f64, bold: bool) -> LineStyle {
        LineStyle {
            size,
            bold,
            color: None,
            alignment: None,
            space_before: None,
        }
    }

    fn title_slot(&self, slide: usize, kind: SlideKind, layout: &BoundLayout, title: &str) -> Result<Region> {
        let title = require_title(slide, kind, title)?;
        let paragraphs = text_paragraphs(slide, title, Self::plain(self.typography.template_title, true))?;
        Self::slot(layout, Role::Title, paragraphs)
    }

    fn body_slot(&self, slide: usize, layout: &BoundLayout, role: Role, lines: &[String]) -> Result<Region> {
        let t = self.typography;
        let style = LineStyle {
            space_before: Some(t.template_space_before),
            ..Self::plain(t.template_body, false)
        };
        let paragraphs = body_paragraphs(slide, lines, style, t, false)?;
        Self::slot(layout, role, paragraphs)
    }

    pub fn title(&self, slide: usize, layout: &BoundLayout, title: &str, subtitle: Option<&str>) -> Result<Composition> {
        let title = require_title(slide, SlideKind::Title, title)?;
        let t = self.typography;
        let mut regions = vec![Self::slot(
            layout,
            Role::Title,
            text_paragraphs(slide, title, Self::plain(t.title, true))?,
        )?];
        if let Some(subtitle) = subtitle.filter(|s| !s.trim().is_empty()) {
            regions.push(Self::slot(
                layout,
                Role::Subtitle,
                text_paragraphs(slide, subtitle, Self::plain(t.subtitle, false))?,
            )?);
        }
        Ok(Composition {
            background: None,
            regions,
        })
    }

    pub fn content(&self, slide: usize, layout: &BoundLayout, title: &str, body: &[String]) -> Result<Composition> {
        let title = self.title_slot(slide, SlideKind::Content, layout, title)?;
        let body = self.body_slot(slide, layout, Role::PrimaryBody, body)?;
        Ok(Composition {
            background: None,
            regions: vec![title, body],
        })
    }

    pub fn two_column(
        &self,
        slide: usize,
        layout: &BoundLayout,
        title: &str,
        left: &[String],
        right: &[String],
    ) -> Result<Composition> {
        let title = self.title_slot(slide, SlideKind::TwoColumn, layout, title)?;
        let left = self.body_slot(slide, layout, Role::PrimaryBody, left);
        let right = self.body_slot(slide, layout, Role::SecondaryBody, right);
        let (left, right) = join_columns(slide, left, right)?;
        Ok(Composition {
            background: None,
            regions: vec![title, left, right],
        })
    }

    /// A centred text box on the closing layout; the layout supplies the
    /// background.
    pub fn closing(&self, slide: usize, text: &str, secondary: Option<&str>) -> Result<Composition> {
        let text = require_title(slide, SlideKind::Closing, text)?;
        let t = self.typography;
        let centred = |size, bold| LineStyle {
            alignment: Some(Alignment::Center),
            ..Self::plain(size, bold)
        };
        let block = |paragraphs| TextBlock {
            anchor: Some(Anchor::Top),
            left_inset: None,
            word_wrap: Some(true),
            paragraphs,
        };

        let mut regions = vec![Region {
            placement: Placement::Frame(self.geometry.closing()),
            fill: None,
            text: Some(block(text_paragraphs(slide, text, centred(t.closing, true))?)),
        }];
        if let Some(secondary) = secondary.filter(|s| !s.trim().is_empty()) {
            regions.push(Region {
                placement: Placement::Frame(self.geometry.closing_secondary()),
                fill: None,
                text: Some(block(text_paragraphs(
                    slide,
                    secondary,
                    centred(t.closing_secondary, false),
                )?)),
            });
        }
        Ok(Composition {
            background: None,
            regions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::config::LayoutBinding;
    use crate::deck::geometry::MARGIN;
    use crate::deck::binding;
    use crate::ooxml::pptx::slide::{LayoutPlaceholder, SlideLayout};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn with_canvas<T>(f: impl FnOnce(&CanvasRenderer<'_>) -> T) -> T {
        let palette = Palette::brand();
        let typography = Typography::default();
        f(&CanvasRenderer {
            geometry: CanvasGeometry::new(9_144_000, 6_858_000),
            palette: &palette,
            typography: &typography,
        })
    }

    #[test]
    fn test_agenda_paragraphs() {
        let slide = with_canvas(|r| r.content(2, "Agenda", &lines(&["Item A", "", "Item B"]))).unwrap();
        let body = slide.regions[1].text.as_ref().unwrap();

        let texts: Vec<&str> = body.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Item A", "", "Item B"]);
        assert!(body.paragraphs.iter().all(|p| p.size == 18.0 && p.level == 0));
        assert!(body.paragraphs.iter().all(|p| p.space_before == Some(12.0)));
        assert_eq!(body.word_wrap, Some(true));
        assert_eq!(slide.background, Some(Palette::brand().color("background").unwrap()));
    }

    #[test]
    fn test_header_bar() {
        let slide = with_canvas(|r| r.content(1, "Agenda", &[])).unwrap();
        let header = &slide.regions[0];
        assert_eq!(header.placement, Placement::Frame(Rect::new(0, 0, 9_144_000, 914_400)));
        assert_eq!(header.fill, Some(Palette::brand().color("primary").unwrap()));

        let text = header.text.as_ref().unwrap();
        assert_eq!(text.anchor, Some(Anchor::Middle));
        assert_eq!(text.left_inset, Some(MARGIN));
        assert!(text.paragraphs[0].bold);
        assert_eq!(text.paragraphs[0].size, 32.0);
        assert!(slide.regions[1].text.as_ref().unwrap().paragraphs.is_empty());
    }

    #[test]
    fn test_sub_bullet_is_smaller_and_deeper() {
        let slide = with_canvas(|r| r.content(1, "Philosophy", &lines(&["Risk", "   • We inform"]))).unwrap();
        let paras = &slide.regions[1].text.as_ref().unwrap().paragraphs;
        assert_eq!(paras[1].text, "• We inform");
        assert!(paras[1].size < paras[0].size);
        assert!(paras[1].level > paras[0].level);
        assert!(paras[1].margin_left.unwrap_or(0) > paras[0].margin_left.unwrap_or(0));
    }

    #[test]
    fn test_title_slide_requires_title() {
        let err = with_canvas(|r| r.title(4, "   ", None)).unwrap_err();
        assert!(matches!(err, Error::EmptyTitle { slide: 4, kind: "title" }));

        let slide = with_canvas(|r| r.title(1, "State of Security", Some(""))).unwrap();
        assert_eq!(slide.regions.len(), 1);
        let slide = with_canvas(|r| r.title(1, "State of Security", Some("Townhall"))).unwrap();
        assert_eq!(slide.regions.len(), 2);
        assert_eq!(slide.regions[1].text.as_ref().unwrap().paragraphs[0].size, 24.0);
    }

    #[test]
    fn test_missing_palette_token() {
        let palette = Palette::from_tokens([("primary", "#000000"), ("on_primary", "#FFFFFF")]).unwrap();
        let typography = Typography::default();
        let renderer = CanvasRenderer {
            geometry: CanvasGeometry::new(9_144_000, 6_858_000),
            palette: &palette,
            typography: &typography,
        };
        assert!(renderer.title(1, "ok", None).is_ok());
        assert!(matches!(
            renderer.content(2, "x", &[]),
            Err(Error::MissingColor(ref t)) if t == "background"
        ));
    }

    #[test]
    fn test_two_column_failures_are_joined() {
        let err = with_canvas(|r| {
            r.two_column(3, "Compare", &lines(&["fine"]), &lines(&["bad \u{0}"]))
        })
        .unwrap_err();
        match err {
            Error::Columns { slide, left, right } => {
                assert_eq!(slide, 3);
                assert!(left.is_none());
                assert!(matches!(right.as_deref(), Some(Error::InvalidText { .. })));
            },
            other => panic!("unexpected error: {other}"),
        }

        let err = with_canvas(|r| r.two_column(3, "Compare", &lines(&["\u{1}"]), &lines(&["\u{2}"]))).unwrap_err();
        assert!(matches!(err, Error::Columns { left: Some(_), right: Some(_), .. }));
    }

    #[test]
    fn test_closing_slide() {
        let slide = with_canvas(|r| r.closing(9, "Questions & Discussion", Some("Security Team"))).unwrap();
        assert_eq!(slide.regions.len(), 2);
        let main = &slide.regions[0].text.as_ref().unwrap().paragraphs[0];
        assert_eq!(main.size, 60.0);
        assert_eq!(main.alignment, Some(Alignment::Center));
        assert_eq!(slide.regions[1].text.as_ref().unwrap().paragraphs[0].size, 20.0);
    }

    fn two_content() -> BoundLayout {
        let layout = SlideLayout {
            index: 2,
            name: "Two Content".into(),
            partname: PackURI::new("/ppt/slideLayouts/slideLayout3.xml").unwrap(),
            master_index: 0,
            placeholders: [("title", 0), ("obj", 1), ("obj", 2)]
                .iter()
                .map(|(kind, idx)| LayoutPlaceholder {
                    idx: *idx,
                    kind: PlaceholderType::parse(kind),
                    name: format!("Placeholder {}", idx),
                })
                .collect(),
        };
        binding::resolve(SlideKind::TwoColumn, &[layout], &LayoutBinding::default()).unwrap()
    }

    #[test]
    fn test_template_slots() {
        let typography = Typography::default();
        let renderer = TemplateRenderer {
            geometry: CanvasGeometry::new(12_192_000, 6_858_000),
            typography: &typography,
        };
        let layout = two_content();

        let slide = renderer
            .two_column(2, &layout, "Then / Now", &lines(&["a", "  • b"]), &lines(&["c"]))
            .unwrap();
        assert_eq!(slide.background, None);
        let idxs: Vec<u32> = slide
            .regions
            .iter()
            .map(|r| match r.placement {
                Placement::Slot { idx, .. } => idx,
                Placement::Frame(_) => u32::MAX,
            })
            .collect();
        assert_eq!(idxs, vec![0, 1, 2]);

        let left = &slide.regions[1].text.as_ref().unwrap().paragraphs;
        assert_eq!(left[0].size, 16.0);
        assert_eq!(left[1].size, 14.0);
        assert_eq!(left[1].margin_left, None);
        assert_eq!(left[1].color, None);
        assert_eq!(left[0].space_before, Some(6.0));

        let err = renderer.title(1, &layout, "Hello", Some("World")).unwrap_err();
        assert!(matches!(err, Error::PlaceholderNotFound { role: "subtitle", .. }));
    }
}
