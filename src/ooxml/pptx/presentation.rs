/// Main presentation object - the high-level read API.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::fill::ColorScheme;
use crate::ooxml::pptx::parts::{
    PresentationPart, SlideLayoutPart, SlideMasterPart, SlidePart, Theme, ThemePart,
};
use crate::ooxml::pptx::slide::{LayoutPlaceholder, Slide, SlideLayout};
use std::collections::HashMap;

/// A PowerPoint presentation.
///
/// Not intended to be constructed directly. Use `Package::presentation()` to
/// access a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::Package;
///
/// let pkg = Package::open("brand-template.pptx")?;
/// let pres = pkg.presentation()?;
///
/// if let Some((cx, cy)) = pres.slide_size()? {
///     println!("Slide size: {}x{} EMUs", cx, cy);
/// }
/// for slide in pres.slides()? {
///     println!("Slide {}: {} shapes", slide.number, slide.shapes.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    part: PresentationPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Slide width and height in EMUs, if the presentation declares them.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        self.part.slide_size()
    }

    pub fn slide_count(&self) -> Result<usize> {
        self.part.slide_count()
    }

    /// Slide masters in `p:sldMasterIdLst` order.
    pub fn slide_masters(&self) -> Result<Vec<SlideMasterPart<'a>>> {
        self.part
            .slide_master_rids()?
            .iter()
            .map(|rid| SlideMasterPart::from_part(self.related(self.part.part(), rid)?))
            .collect()
    }

    /// Every slide layout across all masters, in master order and then in
    /// each master's `p:sldLayoutIdLst` order.
    pub fn slide_layouts(&self) -> Result<Vec<SlideLayout>> {
        let mut layouts = Vec::new();

        for (master_index, master) in self.slide_masters()?.iter().enumerate() {
            for rid in master.slide_layout_rids()? {
                let part = self.related(master.part(), &rid)?;
                let layout = SlideLayoutPart::from_part(part)?;
                let data = layout.common_data()?;

                let placeholders = data
                    .shapes
                    .into_iter()
                    .filter_map(|shape| {
                        shape.placeholder.map(|ph| LayoutPlaceholder {
                            idx: ph.idx,
                            kind: ph.kind,
                            name: shape.name,
                        })
                    })
                    .collect();

                layouts.push(SlideLayout {
                    index: layouts.len(),
                    name: data.name,
                    partname: part.partname().clone(),
                    master_index,
                    placeholders,
                });
            }
        }

        Ok(layouts)
    }

    /// All slides in presentation order, with theme colours resolved through
    /// the master behind each slide's layout.
    pub fn slides(&self) -> Result<Vec<Slide>> {
        let mut schemes: HashMap<String, ColorScheme> = HashMap::new();
        let mut slides = Vec::new();

        for (i, rid) in self.part.slide_rids()?.iter().enumerate() {
            let part = self.related(self.part.part(), rid)?;
            let slide_part = SlidePart::from_part(part)?;
            let data = slide_part.common_data()?;

            let mut layout_name = None;
            let mut scheme = None;
            if let Ok(layout_rid) = slide_part.layout_rid() {
                let layout_part = self.related(part, &layout_rid)?;
                layout_name = Some(SlideLayoutPart::from_part(layout_part)?.name()?);

                if let Ok(master_rel) = layout_part.rels().part_with_reltype(rt::SLIDE_MASTER) {
                    let master_name = master_rel.target_partname()?;
                    if !schemes.contains_key(master_name.as_str()) {
                        let master = SlideMasterPart::from_part(self.package.get_part(&master_name)?)?;
                        schemes.insert(master_name.to_string(), self.color_scheme(&master)?);
                    }
                    scheme = schemes.get(master_name.as_str());
                }
            }

            let mut slide = Slide {
                number: i + 1,
                partname: part.partname().clone(),
                name: data.name,
                layout_name,
                background: data.background,
                shapes: data.shapes,
            };
            if let Some(scheme) = scheme {
                slide.resolve_colors(scheme);
            }
            slides.push(slide);
        }

        Ok(slides)
    }

    /// Theme of the first master.
    pub fn theme(&self) -> Result<Option<Theme>> {
        match self.slide_masters()?.first() {
            Some(master) => self.master_theme(master),
            None => Ok(None),
        }
    }

    /// Colour scheme of a master: its theme's colours seen through its
    /// `p:clrMap`.
    pub fn color_scheme(&self, master: &SlideMasterPart<'_>) -> Result<ColorScheme> {
        let aliases = master.color_map()?;
        Ok(match self.master_theme(master)? {
            Some(theme) => theme.color_scheme(aliases),
            None => ColorScheme::new(HashMap::new(), aliases),
        })
    }

    fn master_theme(&self, master: &SlideMasterPart<'_>) -> Result<Option<Theme>> {
        match master.theme_rid() {
            Some(rid) => {
                let part = self.related(master.part(), &rid)?;
                Ok(Some(ThemePart::from_part(part)?.theme()?))
            },
            None => Ok(None),
        }
    }

    fn related(&self, source: &dyn Part, r_id: &str) -> Result<&'a dyn Part> {
        self.package.related_part(source, r_id).map_err(|e| {
            OoxmlError::PartNotFound(format!("{} of {}: {}", r_id, source.partname(), e))
        })
    }

    #[inline]
    pub fn part(&self) -> &PresentationPart<'a> {
        &self.part
    }

    #[inline]
    pub fn package(&self) -> &'a OpcPackage {
        self.package
    }
}
