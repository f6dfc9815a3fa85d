//! Template inspection: what a .pptx offers to the deck renderer.

use crate::common::unit::emu_to_inches;
use crate::common::{Error, Result};
use crate::ooxml::pptx::fill::{ColorValue, Fill};
use crate::ooxml::pptx::package::Package;
use crate::ooxml::pptx::shapes::base::Shape;
use crate::ooxml::pptx::slide::{LayoutPlaceholder, Slide, SlideLayout};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Characters of shape text shown in a report.
pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateReport {
    pub width_emu: i64,
    pub height_emu: i64,
    pub width_in: f64,
    pub height_in: f64,
    pub slide_count: usize,
    pub layout_count: usize,
    pub layouts: Vec<LayoutReport>,
    pub slides: Vec<SlideReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub index: usize,
    pub name: String,
    pub placeholders: Vec<PlaceholderReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderReport {
    /// Slot id, `p:ph@idx`
    pub idx: u32,
    pub name: String,
    /// Semantic type, `p:ph@type`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideReport {
    pub number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub background: Fill,
    pub shapes: Vec<ShapeReport>,
}

/// A slide shape, classified by what it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeReport {
    TextRegion {
        name: String,
        preview: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        font: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_pt: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<ColorValue>,
        /// Shape fill behind the text
        #[serde(skip_serializing_if = "Fill::is_inherited")]
        fill: Fill,
    },
    FillRegion {
        name: String,
        fill: Fill,
    },
    Unknown {
        name: String,
        tag: String,
    },
}

impl ShapeReport {
    pub fn classify(shape: &Shape) -> Self {
        if let Some(frame) = shape.text_frame().filter(|tf| !tf.is_empty()) {
            let run = frame.first_visible_run();
            return ShapeReport::TextRegion {
                name: shape.name.clone(),
                preview: frame.preview(PREVIEW_CHARS),
                font: run.and_then(|r| r.font_name.clone()),
                size_pt: run.and_then(|r| r.size_pt),
                color: run.and_then(|r| r.color.clone()),
                fill: shape.fill.clone(),
            };
        }

        match shape.fill {
            Fill::Inherited => ShapeReport::Unknown {
                name: shape.name.clone(),
                tag: shape.tag.clone(),
            },
            ref fill => ShapeReport::FillRegion {
                name: shape.name.clone(),
                fill: fill.clone(),
            },
        }
    }
}

impl From<&LayoutPlaceholder> for PlaceholderReport {
    fn from(ph: &LayoutPlaceholder) -> Self {
        Self {
            idx: ph.idx,
            name: ph.name.clone(),
            kind: ph.kind.to_string(),
        }
    }
}

impl From<&SlideLayout> for LayoutReport {
    fn from(layout: &SlideLayout) -> Self {
        Self {
            index: layout.index,
            name: layout.name.clone(),
            placeholders: layout.placeholders.iter().map(PlaceholderReport::from).collect(),
        }
    }
}

impl From<&Slide> for SlideReport {
    fn from(slide: &Slide) -> Self {
        Self {
            number: slide.number,
            layout: slide.layout_name.clone(),
            background: slide.background.clone(),
            shapes: slide.shapes.iter().map(ShapeReport::classify).collect(),
        }
    }
}

impl TemplateReport {
    pub fn from_package(package: &Package) -> Result<Self> {
        let pres = package.presentation()?;
        let (width_emu, height_emu) = pres
            .slide_size()?
            .ok_or_else(|| Error::InvalidFormat("presentation declares no slide size".to_string()))?;

        let layouts: Vec<LayoutReport> = pres.slide_layouts()?.iter().map(LayoutReport::from).collect();
        let slides: Vec<SlideReport> = pres.slides()?.iter().map(SlideReport::from).collect();

        Ok(Self {
            width_emu,
            height_emu,
            width_in: emu_to_inches(width_emu),
            height_in: emu_to_inches(height_emu),
            slide_count: slides.len(),
            layout_count: layouts.len(),
            layouts,
            slides,
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Other(format!("cannot write report: {}", e)))
    }
}

/// Read a template and describe its canvas, layouts and slides.
pub fn inspect_template<P: AsRef<Path>>(path: P) -> Result<TemplateReport> {
    let package = Package::open(path.as_ref())?;
    let report = TemplateReport::from_package(&package)?;
    log::debug!(
        "{}: {} layouts, {} slides",
        path.as_ref().display(),
        report.layout_count,
        report.slide_count
    );
    Ok(report)
}

fn describe_fill(fill: &Fill) -> String {
    match fill.color() {
        Some(color) => format!("{} {}", fill.kind(), color),
        None => fill.kind().to_string(),
    }
}

impl fmt::Display for TemplateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Presentation")?;
        writeln!(f, "  Slide width:  {:.2} in ({} EMU)", self.width_in, self.width_emu)?;
        writeln!(f, "  Slide height: {:.2} in ({} EMU)", self.height_in, self.height_emu)?;
        writeln!(f, "  Slides:  {}", self.slide_count)?;
        writeln!(f, "  Layouts: {}", self.layout_count)?;

        writeln!(f)?;
        writeln!(f, "Layouts")?;
        for layout in &self.layouts {
            writeln!(f, "  [{}] {}", layout.index, layout.name)?;
            writeln!(f, "      Placeholders: {}", layout.placeholders.len())?;
            for ph in &layout.placeholders {
                writeln!(f, "        - [{}] {} ({})", ph.idx, ph.name, ph.kind)?;
            }
        }

        for slide in &self.slides {
            writeln!(f)?;
            match &slide.layout {
                Some(layout) => writeln!(f, "Slide {} ({})", slide.number, layout)?,
                None => writeln!(f, "Slide {}", slide.number)?,
            }
            writeln!(f, "  Background: {}", describe_fill(&slide.background))?;
            writeln!(f, "  Shapes: {}", slide.shapes.len())?;
            for (i, shape) in slide.shapes.iter().enumerate() {
                match shape {
                    ShapeReport::TextRegion {
                        name,
                        preview,
                        font,
                        size_pt,
                        color,
                        fill,
                    } => {
                        writeln!(f, "    [{}] text region: {}", i, name)?;
                        writeln!(f, "        Text: {}", preview)?;
                        writeln!(f, "        Font: {}", font.as_deref().unwrap_or("default"))?;
                        match size_pt {
                            Some(size) => writeln!(f, "        Size: {} pt", size)?,
                            None => writeln!(f, "        Size: default")?,
                        }
                        if let Some(color) = color {
                            writeln!(f, "        Color: {}", color)?;
                        }
                        if !fill.is_inherited() {
                            writeln!(f, "        Fill: {}", describe_fill(fill))?;
                        }
                    },
                    ShapeReport::FillRegion { name, fill } => {
                        writeln!(f, "    [{}] fill region: {}", i, name)?;
                        writeln!(f, "        Fill: {}", describe_fill(fill))?;
                    },
                    ShapeReport::Unknown { name, tag } => {
                        writeln!(f, "    [{}] {}: {}", i, tag, name)?;
                    },
                }
            }
        }
        Ok(())
    }
}
