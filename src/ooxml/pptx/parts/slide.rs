/// Slide parts and related types.
///
/// This module contains parts for slides, slide layouts, and slide masters.
/// All three share the `p:cSld` structure, read by
/// [`parse_common_slide_data`].
use crate::common::xml::{attr_value, rel_id_attr};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::fill::ColorScheme;
use crate::ooxml::pptx::shapes::base::Placeholder;
use crate::ooxml::pptx::shapes::tree::{CommonSlideData, parse_common_slide_data};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// A slide part.
///
/// Corresponds to `/ppt/slides/slideN.xml` in the package.
pub struct SlidePart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Name, background and shapes of the slide.
    pub fn common_data(&self) -> Result<CommonSlideData> {
        parse_common_slide_data(self.part.blob())
    }

    /// rId of the layout this slide is based on.
    pub fn layout_rid(&self) -> Result<String> {
        self.part
            .rels()
            .part_with_reltype(rt::SLIDE_LAYOUT)
            .map(|rel| rel.r_id().to_string())
            .map_err(|_| {
                OoxmlError::InvalidRelationship(format!(
                    "{} has no slide layout",
                    self.part.partname()
                ))
            })
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// A slide layout part.
///
/// Corresponds to `/ppt/slideLayouts/slideLayoutN.xml` in the package.
pub struct SlideLayoutPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    pub fn common_data(&self) -> Result<CommonSlideData> {
        parse_common_slide_data(self.part.blob())
    }

    /// The layout name.
    pub fn name(&self) -> Result<String> {
        Ok(self.common_data()?.name)
    }

    /// Placeholder slots declared by the layout, in document order, with the
    /// shape name that declares each.
    pub fn placeholders(&self) -> Result<Vec<(Placeholder, String)>> {
        Ok(self
            .common_data()?
            .shapes
            .into_iter()
            .filter_map(|shape| shape.placeholder.map(|ph| (ph, shape.name)))
            .collect())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

/// A slide master part.
///
/// Corresponds to `/ppt/slideMasters/slideMasterN.xml` in the package.
pub struct SlideMasterPart<'a> {
    part: &'a dyn Part,
}

impl<'a> SlideMasterPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    pub fn name(&self) -> Result<String> {
        Ok(parse_common_slide_data(self.part.blob())?.name)
    }

    /// Get the relationship IDs of all slide layouts in this master.
    pub fn slide_layout_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == b"sldLayoutId" =>
                {
                    if let Some(rid) = rel_id_attr(e) {
                        rids.push(rid);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// `p:clrMap` as alias -> scheme slot, e.g. `bg1 -> lt1`. Falls back to
    /// the conventional mapping when the master has none.
    pub fn color_map(&self) -> Result<HashMap<String, String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == b"clrMap" =>
                {
                    let mut map = HashMap::new();
                    for attr in e.attributes().flatten() {
                        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
                        if let Some(value) = attr_value(e, attr.key.as_ref()) {
                            map.insert(key, value);
                        }
                    }
                    return Ok(map);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(ColorScheme::default_aliases())
    }

    /// rId of the master's theme, if it has one.
    pub fn theme_rid(&self) -> Option<String> {
        self.part
            .rels()
            .part_with_reltype(rt::THEME)
            .ok()
            .map(|rel| rel.r_id().to_string())
    }

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}
