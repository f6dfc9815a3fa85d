/// Slide-related objects: owned snapshots of slides and slide layouts as
/// read from a package.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::pptx::fill::{ColorScheme, Fill};
use crate::ooxml::pptx::shapes::base::{PlaceholderType, Shape};
use serde::Serialize;

/// A placeholder slot declared by a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlaceholder {
    /// `p:ph@idx`; 0 when absent
    pub idx: u32,
    /// `p:ph@type`; `obj` when absent
    pub kind: PlaceholderType,
    /// Name of the shape that declares the slot
    pub name: String,
}

/// A slide layout, numbered across all masters in master order.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::Package;
///
/// let pkg = Package::open("brand-template.pptx")?;
/// for layout in pkg.presentation()?.slide_layouts()? {
///     println!("[{}] {}", layout.index, layout.name);
///     for ph in &layout.placeholders {
///         println!("    idx {} {} ({})", ph.idx, ph.kind, ph.name);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SlideLayout {
    pub index: usize,
    pub name: String,
    pub partname: PackURI,
    /// Position of the owning master in `p:sldMasterIdLst`
    pub master_index: usize,
    pub placeholders: Vec<LayoutPlaceholder>,
}

impl SlideLayout {
    /// First title slot (`title` or `ctrTitle`).
    pub fn title_slot(&self) -> Option<&LayoutPlaceholder> {
        self.placeholders.iter().find(|ph| ph.kind.is_title())
    }

    pub fn center_title_slot(&self) -> Option<&LayoutPlaceholder> {
        self.placeholders
            .iter()
            .find(|ph| ph.kind == PlaceholderType::CenterTitle)
    }

    pub fn subtitle_slot(&self) -> Option<&LayoutPlaceholder> {
        self.placeholders
            .iter()
            .find(|ph| ph.kind == PlaceholderType::Subtitle)
    }

    /// Body and content slots, ordered by `idx`.
    pub fn body_slots(&self) -> Vec<&LayoutPlaceholder> {
        let mut slots: Vec<_> = self.placeholders.iter().filter(|ph| ph.kind.is_body()).collect();
        slots.sort_by_key(|ph| ph.idx);
        slots
    }
}

/// A slide with its colours resolved through its master's theme.
#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    /// 1-based position in `p:sldIdLst`
    pub number: usize,
    pub partname: PackURI,
    pub name: String,
    pub layout_name: Option<String>,
    pub background: Fill,
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Fill in the RGB value of every theme colour on the slide.
    pub fn resolve_colors(&mut self, scheme: &ColorScheme) {
        self.background.resolve(scheme);
        for shape in &mut self.shapes {
            shape.fill.resolve(scheme);
            let runs = shape
                .text_frame
                .iter_mut()
                .flat_map(|tf| tf.paragraphs.iter_mut())
                .flat_map(|p| p.runs.iter_mut());
            for run in runs {
                if let Some(color) = run.color.as_mut() {
                    color.resolve(scheme);
                }
            }
        }
    }

    /// Text of every shape, one shape per line.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .filter_map(|s| s.text_frame.as_ref().map(|tf| tf.text()))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::fill::ColorValue;
    use crate::ooxml::pptx::shapes::base::ShapeType;
    use crate::ooxml::pptx::shapes::textframe::{Paragraph, Run, TextFrame};
    use std::collections::HashMap;

    fn slot(idx: u32, kind: &str) -> LayoutPlaceholder {
        LayoutPlaceholder {
            idx,
            kind: PlaceholderType::parse(kind),
            name: format!("{} {}", kind, idx),
        }
    }

    #[test]
    fn test_layout_slots() {
        let layout = SlideLayout {
            index: 3,
            name: "Two Content".into(),
            partname: PackURI::new("/ppt/slideLayouts/slideLayout4.xml").unwrap(),
            master_index: 0,
            placeholders: vec![slot(0, "title"), slot(2, "obj"), slot(1, "body"), slot(10, "dt")],
        };
        assert_eq!(layout.title_slot().map(|s| s.idx), Some(0));
        assert!(layout.center_title_slot().is_none());
        let bodies: Vec<u32> = layout.body_slots().iter().map(|s| s.idx).collect();
        assert_eq!(bodies, vec![1, 2]);
    }

    #[test]
    fn test_resolve_colors() {
        let theme_color = || ColorValue::Theme {
            scheme: "tx1".into(),
            resolved: None,
        };
        let mut shape = Shape::new(ShapeType::Shape, "p:sp".into());
        shape.fill = Fill::Solid { color: theme_color() };
        shape.text_frame = Some(TextFrame {
            paragraphs: vec![Paragraph {
                level: 0,
                runs: vec![Run {
                    text: "Hello".into(),
                    color: Some(theme_color()),
                    ..Default::default()
                }],
            }],
        });
        let mut slide = Slide {
            number: 1,
            partname: PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            name: String::new(),
            layout_name: None,
            background: Fill::Inherited,
            shapes: vec![shape],
        };

        let scheme = ColorScheme::new(
            HashMap::from([("dk1".to_string(), RGBColor::new(0x1F, 0x16, 0x46))]),
            ColorScheme::default_aliases(),
        );
        slide.resolve_colors(&scheme);

        let shape = &slide.shapes[0];
        let expected = Some(RGBColor::new(0x1F, 0x16, 0x46));
        assert_eq!(shape.fill.color().and_then(ColorValue::rgb), expected);
        let run = shape.text_frame().unwrap().first_visible_run().unwrap();
        assert_eq!(run.color.as_ref().and_then(ColorValue::rgb), expected);
        assert_eq!(slide.text(), "Hello");
    }
}
