//! Deck files: the YAML document that drives a render.
//!
//! ```yaml
//! canvas: { width: 10, height: 7.5 }
//! palette:
//!   primary: "#6A46F3"
//!   background: "#F8F8FA"
//!   on_primary: "#F8F8FA"
//!   text: "#1A181B"
//! template:
//!   path: brand-template.pptx
//!   layouts: { closing: "Violet Thank You" }
//! output: townhall.pptx
//! slides:
//!   - kind: title
//!     title: State of Security
//! ```
//!
//! Colours must be quoted: an unquoted `#` starts a YAML comment.

use crate::common::unit::inches_to_emu;
use crate::common::{Error, Result};
use crate::deck::geometry::CanvasGeometry;
use crate::deck::palette::Palette;
use crate::deck::slides::{SlideKind, SlideSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Canvas size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 7.5,
        }
    }
}

impl Canvas {
    pub fn width_emu(&self) -> i64 {
        inches_to_emu(self.width)
    }

    pub fn height_emu(&self) -> i64 {
        inches_to_emu(self.height)
    }

    /// Reject sizes on which some slide frame would have no area.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(Error::Config(format!(
                "canvas {}x{}in is not a finite size",
                self.width, self.height
            )));
        }
        if !CanvasGeometry::new(self.width_emu(), self.height_emu()).fits() {
            return Err(Error::Config(format!(
                "canvas {}x{}in is too small for slide content",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Smallest font size a run can carry (`sz="100"`).
pub const MIN_FONT_SIZE: f64 = 1.0;

/// Font sizes and paragraph spacing, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Typography {
    pub title: f64,
    pub subtitle: f64,
    /// Title inside a content slide's header bar
    pub header: f64,
    pub body: f64,
    pub two_column_body: f64,
    /// Taken off the base size for each nesting level
    pub sub_bullet_decrement: f64,
    pub body_space_before: f64,
    pub column_space_before: f64,
    pub closing: f64,
    pub closing_secondary: f64,
    pub template_title: f64,
    pub template_body: f64,
    pub template_space_before: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: 54.0,
            subtitle: 24.0,
            header: 32.0,
            body: 18.0,
            two_column_body: 16.0,
            sub_bullet_decrement: 2.0,
            body_space_before: 12.0,
            column_space_before: 10.0,
            closing: 60.0,
            closing_secondary: 20.0,
            template_title: 36.0,
            template_body: 16.0,
            template_space_before: 6.0,
        }
    }
}

impl Typography {
    /// Size of a line at `level` given the level-0 size.
    pub fn size_at(&self, base: f64, level: u32) -> f64 {
        base - self.sub_bullet_decrement * level as f64
    }

    /// Sizes must be at least [`MIN_FONT_SIZE`], sub-bullets (one level
    /// deep) strictly smaller than their base and spacing non-negative.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("header", self.header),
            ("body", self.body),
            ("two_column_body", self.two_column_body),
            ("closing", self.closing),
            ("closing_secondary", self.closing_secondary),
            ("template_title", self.template_title),
            ("template_body", self.template_body),
        ];
        for (name, size) in sizes {
            if !(size.is_finite() && size >= MIN_FONT_SIZE) {
                return Err(Error::Config(format!(
                    "typography.{} must be at least {}pt, got {}",
                    name, MIN_FONT_SIZE, size
                )));
            }
        }

        if !(self.sub_bullet_decrement.is_finite() && self.sub_bullet_decrement > 0.0) {
            return Err(Error::Config(format!(
                "typography.sub_bullet_decrement must be positive, got {}",
                self.sub_bullet_decrement
            )));
        }
        for (name, base) in [
            ("body", self.body),
            ("two_column_body", self.two_column_body),
            ("template_body", self.template_body),
        ] {
            if self.size_at(base, 1) < MIN_FONT_SIZE {
                return Err(Error::Config(format!(
                    "typography.{} of {}pt leaves sub-bullets below {}pt",
                    name, base, MIN_FONT_SIZE
                )));
            }
        }

        for (name, spacing) in [
            ("body_space_before", self.body_space_before),
            ("column_space_before", self.column_space_before),
            ("template_space_before", self.template_space_before),
        ] {
            if !(spacing.is_finite() && spacing >= 0.0) {
                return Err(Error::Config(format!(
                    "typography.{} must not be negative, got {}",
                    name, spacing
                )));
            }
        }
        Ok(())
    }
}

/// A layout named in the deck file, by position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutRef {
    Index(usize),
    Name(String),
}

/// Explicit layout choice per slide kind. Kinds left unset are matched by
/// their placeholder slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutBinding {
    pub title: Option<LayoutRef>,
    pub content: Option<LayoutRef>,
    pub two_column: Option<LayoutRef>,
    pub closing: Option<LayoutRef>,
}

impl LayoutBinding {
    pub fn get(&self, kind: SlideKind) -> Option<&LayoutRef> {
        match kind {
            SlideKind::Title => self.title.as_ref(),
            SlideKind::Content => self.content.as_ref(),
            SlideKind::TwoColumn => self.two_column.as_ref(),
            SlideKind::Closing => self.closing.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub layouts: LayoutBinding,
}

/// A parsed deck file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckFile {
    #[serde(default)]
    pub canvas: Canvas,
    /// Token -> `#RRGGBB`; the brand palette when absent
    #[serde(default)]
    pub palette: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub template: Option<TemplateConfig>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

impl DeckFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read a deck file. Relative `template.path` and `output` entries are
    /// taken relative to the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let mut deck: Self = serde_saphyr::from_str(&yaml)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            deck.resolve_paths(base);
        }
        log::debug!("loaded {} slides from {}", deck.slides.len(), path.display());
        Ok(deck)
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(template) = self.template.as_mut()
            && template.path.is_relative()
        {
            template.path = base.join(&template.path);
        }
        if let Some(output) = self.output.as_mut()
            && output.is_relative()
        {
            *output = base.join(&*output);
        }
    }

    /// The palette, validated.
    pub fn palette(&self) -> Result<Palette> {
        match &self.palette {
            Some(tokens) => Palette::from_tokens(tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            None => Ok(Palette::brand()),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
