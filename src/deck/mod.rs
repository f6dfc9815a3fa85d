//! Branded slide decks.
//!
//! A [`Deck`] renders an ordered list of [`SlideSpec`]s into slides and saves
//! them as a `.pptx` package. It runs in one of two modes:
//!
//! - **Canvas**: slides are laid out from scratch on the blank layout of a
//!   generated scaffold, coloured from the [`Palette`].
//! - **Template**: slides are instantiated from an existing template's
//!   layouts, with text written into the layouts' placeholder slots.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckhand::deck::{Deck, DeckFile};
//!
//! let file = DeckFile::load("townhall.yaml")?;
//! let mut deck = Deck::from_deck_file(&file)?;
//! deck.render_all(&file.slides)?;
//! deck.save("townhall.pptx")?;
//! # Ok::<(), deckhand::common::Error>(())
//! ```

pub mod binding;
pub mod config;
pub mod geometry;
pub mod inspect;
pub mod palette;
pub mod render;
pub mod slides;

pub use binding::{BoundLayout, Role};
pub use config::{Canvas, DeckFile, LayoutBinding, LayoutRef, TemplateConfig, Typography};
pub use geometry::{CanvasGeometry, Rect};
pub use inspect::{TemplateReport, inspect_template};
pub use palette::Palette;
pub use render::{Placement, Region, RenderedSlide, StyledParagraph, TextBlock};
pub use slides::{BodyLine, SlideKind, SlideSpec};

use crate::common::{Error, Result};
use crate::ooxml::pptx::package::Package;
use crate::ooxml::pptx::slide::SlideLayout;
use crate::ooxml::pptx::template::Scaffold;
use crate::ooxml::pptx::writer::MutablePresentation;
use render::{CanvasRenderer, Composition, TemplateRenderer};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// How a deck places its slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Canvas,
    Template,
}

/// Package the slides are written into.
enum Source {
    Canvas(Scaffold),
    /// Raw template bytes, reopened on every save
    Template(Vec<u8>),
}

/// An ordered deck of rendered slides.
pub struct Deck {
    source: Source,
    width: i64,
    height: i64,
    palette: Palette,
    typography: Typography,
    layouts: Vec<SlideLayout>,
    binding: LayoutBinding,
    bound: BTreeMap<SlideKind, BoundLayout>,
    slides: Vec<RenderedSlide>,
}

impl Deck {
    /// A blank canvas of the given size.
    pub fn canvas(canvas: Canvas, palette: Palette, typography: Typography) -> Result<Self> {
        canvas.validate()?;
        typography.validate()?;
        let scaffold = Scaffold::new(canvas.width_emu(), canvas.height_emu());
        let package = scaffold.build()?;
        let layouts = package.presentation()?.slide_layouts()?;

        for token in palette.missing_tokens() {
            log::warn!("palette has no '{}' colour; slides that need it will fail", token);
        }

        Ok(Self {
            source: Source::Canvas(scaffold),
            width: canvas.width_emu(),
            height: canvas.height_emu(),
            palette,
            typography,
            layouts,
            binding: LayoutBinding::default(),
            bound: BTreeMap::new(),
            slides: Vec::new(),
        })
    }

    /// A deck built on the layouts of a template package. Slides already in
    /// the template are not carried over.
    pub fn from_template_bytes(
        bytes: Vec<u8>,
        palette: Palette,
        typography: Typography,
        binding: LayoutBinding,
    ) -> Result<Self> {
        typography.validate()?;
        let package = Package::from_bytes(&bytes)?;
        let pres = package.presentation()?;
        let (width, height) = pres
            .slide_size()?
            .ok_or_else(|| Error::InvalidFormat("template declares no slide size".to_string()))?;
        let layouts = pres.slide_layouts()?;

        let existing = pres.slide_count()?;
        if existing > 0 {
            log::warn!("template holds {} slides; they are dropped from the output", existing);
        }
        log::debug!("template canvas {}x{} EMU with {} layouts", width, height, layouts.len());

        Ok(Self {
            source: Source::Template(bytes),
            width,
            height,
            palette,
            typography,
            layouts,
            binding,
            bound: BTreeMap::new(),
            slides: Vec::new(),
        })
    }

    pub fn from_template<P: AsRef<Path>>(
        path: P,
        palette: Palette,
        typography: Typography,
        binding: LayoutBinding,
    ) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::Config(format!("template {}: {}", path.display(), e)))?;
        Self::from_template_bytes(bytes, palette, typography, binding)
    }

    /// Canvas or template deck, as the file asks.
    pub fn from_deck_file(file: &DeckFile) -> Result<Self> {
        let palette = file.palette()?;
        match &file.template {
            Some(template) => Self::from_template(&template.path, palette, file.typography, template.layouts.clone()),
            None => Self::canvas(file.canvas, palette, file.typography),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.source {
            Source::Canvas(_) => Mode::Canvas,
            Source::Template(_) => Mode::Template,
        }
    }

    /// Slide size in EMUs.
    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn slides(&self) -> &[RenderedSlide] {
        &self.slides
    }

    /// Layouts available to the deck.
    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    fn geometry(&self) -> CanvasGeometry {
        CanvasGeometry::new(self.width, self.height)
    }

    fn canvas_renderer(&self) -> CanvasRenderer<'_> {
        CanvasRenderer {
            geometry: self.geometry(),
            palette: &self.palette,
            typography: &self.typography,
        }
    }

    fn template_renderer(&self) -> TemplateRenderer<'_> {
        TemplateRenderer {
            geometry: self.geometry(),
            typography: &self.typography,
        }
    }

    /// Layout hosting `kind` slides. Canvas decks put every slide on the
    /// scaffold's blank layout.
    fn layout_for(&mut self, kind: SlideKind) -> Result<BoundLayout> {
        if let Some(bound) = self.bound.get(&kind) {
            return Ok(bound.clone());
        }
        let bound = match self.mode() {
            Mode::Canvas => binding::resolve(SlideKind::Closing, &self.layouts, &LayoutBinding::default())?,
            Mode::Template => binding::resolve(kind, &self.layouts, &self.binding)?,
        };
        self.bound.insert(kind, bound.clone());
        Ok(bound)
    }

    fn push(&mut self, kind: SlideKind, layout: &BoundLayout, composition: Composition) -> &RenderedSlide {
        let slide = RenderedSlide::new(self.slides.len() + 1, kind, layout, composition);
        log::debug!(
            "slide {}: {} on layout '{}', {} regions",
            slide.number,
            kind,
            slide.layout_name,
            slide.regions.len()
        );
        let at = self.slides.len();
        self.slides.push(slide);
        &self.slides[at]
    }

    pub fn render_title_slide(&mut self, title: &str, subtitle: Option<&str>) -> Result<&RenderedSlide> {
        let number = self.slides.len() + 1;
        let layout = self.layout_for(SlideKind::Title)?;
        let composition = match self.mode() {
            Mode::Canvas => self.canvas_renderer().title(number, title, subtitle)?,
            Mode::Template => self.template_renderer().title(number, &layout, title, subtitle)?,
        };
        Ok(self.push(SlideKind::Title, &layout, composition))
    }

    pub fn render_content_slide(&mut self, title: &str, body: &[String]) -> Result<&RenderedSlide> {
        let number = self.slides.len() + 1;
        let layout = self.layout_for(SlideKind::Content)?;
        let composition = match self.mode() {
            Mode::Canvas => self.canvas_renderer().content(number, title, body)?,
            Mode::Template => self.template_renderer().content(number, &layout, title, body)?,
        };
        Ok(self.push(SlideKind::Content, &layout, composition))
    }

    /// Both columns are always rendered; a failure in either is reported
    /// with the outcome of the other.
    pub fn render_two_column_slide(&mut self, title: &str, left: &[String], right: &[String]) -> Result<&RenderedSlide> {
        let number = self.slides.len() + 1;
        let layout = self.layout_for(SlideKind::TwoColumn)?;
        let composition = match self.mode() {
            Mode::Canvas => self.canvas_renderer().two_column(number, title, left, right)?,
            Mode::Template => self
                .template_renderer()
                .two_column(number, &layout, title, left, right)?,
        };
        Ok(self.push(SlideKind::TwoColumn, &layout, composition))
    }

    pub fn render_closing_slide(&mut self, text: &str, secondary: Option<&str>) -> Result<&RenderedSlide> {
        let number = self.slides.len() + 1;
        let layout = self.layout_for(SlideKind::Closing)?;
        let composition = match self.mode() {
            Mode::Canvas => self.canvas_renderer().closing(number, text, secondary)?,
            Mode::Template => self.template_renderer().closing(number, text, secondary)?,
        };
        Ok(self.push(SlideKind::Closing, &layout, composition))
    }

    /// Render one slide.
    pub fn render(&mut self, spec: &SlideSpec) -> Result<&RenderedSlide> {
        match spec {
            SlideSpec::Title { title, subtitle } => self.render_title_slide(title, subtitle.as_deref()),
            SlideSpec::Content { title, body } => self.render_content_slide(title, body),
            SlideSpec::TwoColumn { title, left, right } => self.render_two_column_slide(title, left, right),
            SlideSpec::Closing { text, secondary } => self.render_closing_slide(text, secondary.as_deref()),
        }
    }

    /// Render every slide in order. Layouts for all the kinds in `specs` are
    /// resolved first, so a missing layout fails before any slide is added.
    /// On any failure the deck is left as it was before the call.
    pub fn render_all(&mut self, specs: &[SlideSpec]) -> Result<()> {
        let kinds: BTreeSet<SlideKind> = specs.iter().map(SlideSpec::kind).collect();
        for kind in kinds {
            self.layout_for(kind)?;
        }

        let start = self.slides.len();
        for spec in specs {
            if let Err(e) = self.render(spec).map(|_| ()) {
                self.slides.truncate(start);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Write the deck into a fresh copy of its package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = match &self.source {
            Source::Canvas(scaffold) => scaffold.build()?,
            Source::Template(bytes) => Package::from_bytes(bytes)?,
        };

        let mut pres = MutablePresentation::from_package(package);
        if self.mode() == Mode::Canvas {
            pres.set_slide_size(self.width, self.height);
        }
        for slide in &self.slides {
            slide.write_to(pres.add_slide(&slide.layout));
        }
        Ok(pres.to_bytes()?)
    }

    /// Save the deck to `path`. The package goes to a temporary file next to
    /// `path` first and is renamed into place once complete.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let persist_err = |source: std::io::Error| Error::Persist {
            path: path.to_path_buf(),
            source,
        };

        let mut file = NamedTempFile::new_in(dir).map_err(persist_err)?;
        file.write_all(&bytes).map_err(persist_err)?;
        file.as_file().sync_all().map_err(persist_err)?;
        file.persist(path).map_err(|e| persist_err(e.error))?;

        log::info!("wrote {} slides to {}", self.slides.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::shapes::base::PlaceholderType;
    use crate::ooxml::pptx::template::default_layouts;
    use proptest::prelude::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn canvas_deck() -> Deck {
        Deck::canvas(Canvas::default(), Palette::brand(), Typography::default()).unwrap()
    }

    fn template_bytes(scaffold: Scaffold) -> Vec<u8> {
        scaffold.build().unwrap().to_bytes().unwrap()
    }

    fn template_deck(scaffold: Scaffold) -> Deck {
        Deck::from_template_bytes(
            template_bytes(scaffold),
            Palette::brand(),
            Typography::default(),
            LayoutBinding::default(),
        )
        .unwrap()
    }

    fn townhall() -> Vec<SlideSpec> {
        vec![
            SlideSpec::Title {
                title: "State of Security 2026".into(),
                subtitle: Some("Building Tomorrow's Security".into()),
            },
            SlideSpec::Content {
                title: "Agenda".into(),
                body: lines(&["Item A", "", "Item B"]),
            },
            SlideSpec::TwoColumn {
                title: "Then and Now".into(),
                left: lines(&["Reactive", "   • Manual triage"]),
                right: lines(&["Proactive"]),
            },
            SlideSpec::Closing {
                text: "Questions & Discussion".into(),
                secondary: Some("security@example.com".into()),
            },
        ]
    }

    fn line() -> BoxedStrategy<String> {
        prop_oneof![
            "[a-zA-Z &<>]{0,12}",
            "[a-z]{1,8}".prop_map(|s| format!("   • {s}")),
        ]
        .boxed()
    }

    fn spec() -> impl Strategy<Value = SlideSpec> {
        let title = "[A-Z][a-z ]{0,16}";
        let body = prop::collection::vec(line(), 0..6);
        prop_oneof![
            (title, prop::option::of("[a-z ]{0,10}")).prop_map(|(title, subtitle)| SlideSpec::Title { title, subtitle }),
            (title, body.clone()).prop_map(|(title, body)| SlideSpec::Content { title, body }),
            (title, body.clone(), body).prop_map(|(title, left, right)| SlideSpec::TwoColumn { title, left, right }),
            (title, prop::option::of("[a-z@.]{1,10}")).prop_map(|(text, secondary)| SlideSpec::Closing { text, secondary }),
        ]
    }

    fn body_texts(region: &Region) -> Vec<String> {
        region
            .text
            .as_ref()
            .map(|t| t.paragraphs.iter().map(|p| p.text.clone()).collect())
            .unwrap_or_default()
    }

    proptest! {
        #[test]
        fn prop_slides_keep_input_order(specs in prop::collection::vec(spec(), 0..8)) {
            let mut deck = canvas_deck();
            deck.render_all(&specs).unwrap();

            prop_assert_eq!(deck.slides().len(), specs.len());
            for (i, (slide, spec)) in deck.slides().iter().zip(&specs).enumerate() {
                prop_assert_eq!(slide.number, i + 1);
                prop_assert_eq!(slide.kind, spec.kind());
            }
        }

        #[test]
        fn prop_rendering_is_deterministic(specs in prop::collection::vec(spec(), 1..6)) {
            let mut first = canvas_deck();
            let mut second = canvas_deck();
            first.render_all(&specs).unwrap();
            second.render_all(&specs).unwrap();
            prop_assert_eq!(first.slides(), second.slides());
        }

        #[test]
        fn prop_one_paragraph_per_line(body in prop::collection::vec(line(), 0..10)) {
            let mut deck = canvas_deck();
            let slide = deck.render_content_slide("Body", &body).unwrap();
            let text = slide.regions[1].text.as_ref().unwrap();

            prop_assert_eq!(text.paragraphs.len(), body.len());
            for (para, line) in text.paragraphs.iter().zip(&body) {
                let parsed = BodyLine::parse(line);
                prop_assert_eq!(para.level, parsed.level);
                prop_assert_eq!(&para.text, parsed.text);
                if parsed.level == 0 {
                    prop_assert_eq!(para.size, 18.0);
                    prop_assert_eq!(para.margin_left, None);
                } else {
                    prop_assert!(para.size < 18.0);
                    prop_assert!(para.margin_left.unwrap_or(0) > 0);
                }
            }
        }

        #[test]
        fn prop_columns_keep_their_lines(
            left in prop::collection::vec(line(), 0..6),
            right in prop::collection::vec(line(), 0..6),
            width in 4.0f64..20.0,
        ) {
            let canvas = Canvas { width, height: 7.5 };
            let mut deck = Deck::canvas(canvas, Palette::brand(), Typography::default()).unwrap();
            let slide = deck.render_two_column_slide("Compare", &left, &right).unwrap();

            let (Placement::Frame(l), Placement::Frame(r)) = (&slide.regions[1].placement, &slide.regions[2].placement) else {
                panic!("columns must be absolute frames");
            };
            prop_assert!(!l.overlaps_horizontally(r));

            let expect = |lines: &[String]| -> Vec<String> {
                lines.iter().map(|line| BodyLine::parse(line).text.to_string()).collect()
            };
            prop_assert_eq!(body_texts(&slide.regions[1]), expect(&left));
            prop_assert_eq!(body_texts(&slide.regions[2]), expect(&right));
        }
    }

    #[test]
    fn test_agenda_scenario() {
        let mut deck = canvas_deck();
        let slide = deck
            .render_content_slide("Agenda", &lines(&["Item A", "", "Item B"]))
            .unwrap();
        let body: Vec<&StyledParagraph> = slide.regions[1].text.as_ref().unwrap().paragraphs.iter().collect();
        assert_eq!(body.len(), 3);
        assert!(body.iter().all(|p| p.size == 18.0));
        assert_eq!(body[1].text, "");
        assert_eq!(deck.slides().len(), 1);
    }

    #[test]
    fn test_failed_slide_is_not_appended() {
        let mut deck = canvas_deck();
        deck.render_title_slide("Opening", None).unwrap();
        assert!(matches!(
            deck.render_content_slide("  ", &[]),
            Err(Error::EmptyTitle { slide: 2, kind: "content" })
        ));
        assert_eq!(deck.slides().len(), 1);

        let slide = deck.render_closing_slide("Thanks", None).unwrap();
        assert_eq!(slide.number, 2);
    }

    #[test]
    fn test_render_all_keeps_nothing_from_a_failed_batch() {
        let mut deck = canvas_deck();
        deck.render_title_slide("Opening", None).unwrap();

        let batch = vec![
            SlideSpec::Content {
                title: "Agenda".into(),
                body: lines(&["Item A"]),
            },
            SlideSpec::Closing {
                text: "Thanks".into(),
                secondary: None,
            },
            SlideSpec::Content {
                title: " ".into(),
                body: Vec::new(),
            },
        ];
        assert!(matches!(
            deck.render_all(&batch),
            Err(Error::EmptyTitle { slide: 4, kind: "content" })
        ));
        assert_eq!(deck.slides().len(), 1);
        assert_eq!(deck.slides()[0].kind, SlideKind::Title);

        let pkg = Package::from_bytes(&deck.to_bytes().unwrap()).unwrap();
        assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), 1);
    }

    #[test]
    fn test_deck_file_with_flat_sub_bullets_is_rejected() {
        let file = DeckFile::from_yaml(
            "typography: { sub_bullet_decrement: 0 }\nslides:\n  - kind: content\n    title: T\n    body: [Top, \"   • sub\"]\n",
        )
        .unwrap();
        assert!(matches!(Deck::from_deck_file(&file), Err(Error::Config(_))));

        let typography = Typography {
            body: 2.0,
            ..Typography::default()
        };
        assert!(matches!(
            Deck::canvas(Canvas::default(), Palette::brand(), typography),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_undersized_canvas_is_rejected() {
        let file = DeckFile::from_yaml("canvas: { width: 0.5, height: 0.5 }\n").unwrap();
        assert!(matches!(Deck::from_deck_file(&file), Err(Error::Config(_))));

        let canvas = Canvas {
            width: 0.0,
            height: 7.5,
        };
        assert!(matches!(
            Deck::canvas(canvas, Palette::brand(), Typography::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_canvas_deck_reopens() {
        let mut deck = canvas_deck();
        deck.render_all(&townhall()).unwrap();

        let pkg = Package::from_bytes(&deck.to_bytes().unwrap()).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_size().unwrap(), Some((9_144_000, 6_858_000)));

        let slides = pres.slides().unwrap();
        assert_eq!(slides.len(), 4);
        assert!(slides.iter().all(|s| s.layout_name.as_deref() == Some("Blank")));
        assert!(slides[0].text().contains("State of Security 2026"));

        let agenda = slides[1].text();
        let a = agenda.find("Item A").unwrap();
        let b = agenda.find("Item B").unwrap();
        assert!(a < b);
        assert!(slides[2].text().contains("• Manual triage"));
        assert!(slides[3].text().contains("Questions & Discussion"));
    }

    #[test]
    fn test_template_deck_fills_placeholders() {
        let mut deck = template_deck(Scaffold::default());
        assert_eq!(deck.mode(), Mode::Template);
        deck.render_all(&townhall()).unwrap();

        let names: Vec<&str> = deck.slides().iter().map(|s| s.layout_name.as_str()).collect();
        assert_eq!(names, vec!["Title Slide", "Title and Content", "Two Content", "Blank"]);

        let pkg = Package::from_bytes(&deck.to_bytes().unwrap()).unwrap();
        let slides = pkg.presentation().unwrap().slides().unwrap();
        assert_eq!(slides.len(), 4);

        let title = slides[0]
            .shapes
            .iter()
            .find(|s| s.placeholder.as_ref().is_some_and(|ph| ph.kind == PlaceholderType::CenterTitle))
            .unwrap();
        assert_eq!(title.text_frame().unwrap().text(), "State of Security 2026");

        let bodies: Vec<String> = slides[2]
            .shapes
            .iter()
            .filter(|s| s.placeholder.as_ref().is_some_and(|ph| ph.idx > 0))
            .filter_map(|s| s.text_frame().map(|tf| tf.text()))
            .collect();
        assert_eq!(bodies, vec!["Reactive\n• Manual triage".to_string(), "Proactive".to_string()]);
    }

    #[test]
    fn test_missing_two_column_layout_fails_before_any_slide() {
        let layouts = default_layouts(9_144_000, 6_858_000)
            .into_iter()
            .filter(|l| l.name != "Two Content")
            .collect();
        let mut deck = template_deck(Scaffold::default().with_layouts(layouts));

        let specs = vec![
            SlideSpec::Content {
                title: "Agenda".into(),
                body: lines(&["Item A"]),
            },
            SlideSpec::TwoColumn {
                title: "Compare".into(),
                left: lines(&["a"]),
                right: lines(&["b"]),
            },
        ];
        let err = deck.render_all(&specs).unwrap_err();
        assert!(matches!(err, Error::LayoutNotFound { kind: "two-column", .. }));
        assert!(deck.slides().is_empty());
    }

    #[test]
    fn test_explicit_layout_index_out_of_range() {
        let binding = LayoutBinding {
            title: Some(LayoutRef::Index(42)),
            ..Default::default()
        };
        let mut deck = Deck::from_template_bytes(
            template_bytes(Scaffold::default()),
            Palette::brand(),
            Typography::default(),
            binding,
        )
        .unwrap();
        assert!(matches!(
            deck.render_title_slide("Opening", None),
            Err(Error::LayoutIndexOutOfRange { index: 42, count: 5 })
        ));
        assert!(deck.slides().is_empty());
    }

    #[test]
    fn test_empty_deck_saves_valid_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pptx");

        let deck = canvas_deck();
        deck.save(&path).unwrap();

        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");

        let err = canvas_deck().save(&path).unwrap_err();
        assert!(matches!(err, Error::Persist { path: ref p, .. } if *p == path));
        assert!(!path.exists());
    }

    #[test]
    fn test_deck_file_drives_canvas_size() {
        let file = DeckFile::from_yaml(
            "canvas: { width: 13.333, height: 7.5 }\nslides:\n  - kind: closing\n    text: Bye\n",
        )
        .unwrap();
        let mut deck = Deck::from_deck_file(&file).unwrap();
        deck.render_all(&file.slides).unwrap();
        assert_eq!(deck.size(), (12_191_695, 6_858_000));

        let pkg = Package::from_bytes(&deck.to_bytes().unwrap()).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_size().unwrap(), Some((12_191_695, 6_858_000)));
        assert_eq!(pres.slide_count().unwrap(), 1);
    }
}
