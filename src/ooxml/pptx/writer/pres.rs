/// Presentation writer for PPTX.
///
/// New slides are written into an existing package (a template or the
/// built-in scaffold): the package's own slides are removed, every new slide
/// becomes a part related to its layout, and `p:sldIdLst` in
/// `presentation.xml` is rebuilt to list them in order.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{Part, XmlPart};
use crate::ooxml::pptx::package::Package;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;

use super::slide::MutableSlide;

/// First id PowerPoint hands out in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// `p:presentation` children that follow `p:sldIdLst`.
const AFTER_SLIDE_ID_LIST: [&[u8]; 11] = [
    b"sldSz",
    b"notesSz",
    b"smartTags",
    b"embeddedFontLst",
    b"custShowLst",
    b"photoAlbum",
    b"custDataLst",
    b"kinsoku",
    b"defaultTextStyle",
    b"modifyVerifier",
    b"extLst",
];

/// Extension holding PowerPoint sections, which list slide ids.
const SECTION_LIST_EXT_URI: &[u8] = b"{521415D9-36F7-43E2-AB2F-B90AF26B5E84}";

/// A presentation whose slides are being replaced.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::{MutablePresentation, Package};
///
/// let pkg = Package::open("brand-template.pptx")?;
/// let layout = pkg.presentation()?.slide_layouts()?[0].partname.clone();
///
/// let mut pres = MutablePresentation::from_package(pkg);
/// pres.add_slide(&layout).add_text_box(457200, 457200, 8229600, 914400);
/// std::fs::write("out.pptx", pres.to_bytes()?)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct MutablePresentation {
    package: Package,
    slides: Vec<MutableSlide>,
    slide_size: Option<(i64, i64)>,
}

impl MutablePresentation {
    pub fn from_package(package: Package) -> Self {
        Self {
            package,
            slides: Vec::new(),
            slide_size: None,
        }
    }

    /// Override `p:sldSz`, in EMUs.
    pub fn set_slide_size(&mut self, cx: i64, cy: i64) {
        self.slide_size = Some((cx, cy));
    }

    /// Append a slide based on the layout part `layout`.
    pub fn add_slide(&mut self, layout: &PackURI) -> &mut MutableSlide {
        self.slides.push(MutableSlide::new(layout.clone()));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    #[inline]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Write the slides into the package and hand it back.
    pub fn into_package(self) -> Result<Package> {
        let Self {
            mut package,
            slides,
            slide_size,
        } = self;
        let opc = package.opc_package_mut();

        let pres_name = opc.main_document_part()?.partname().clone();

        let old_rids: Vec<String> = opc
            .get_part(&pres_name)?
            .rels()
            .all_with_reltype(rt::SLIDE)
            .iter()
            .map(|rel| rel.r_id().to_string())
            .collect();
        {
            let pres = opc.get_part_mut(&pres_name)?;
            for rid in &old_rids {
                pres.rels_mut().remove(rid);
            }
        }
        let dropped = opc.drop_unreachable_parts();
        log::debug!(
            "removed {} existing slides ({} parts dropped)",
            old_rids.len(),
            dropped
        );

        let mut slide_ids = Vec::with_capacity(slides.len());
        for (i, slide) in slides.iter().enumerate() {
            if !opc.contains_part(slide.layout()) {
                return Err(OoxmlError::PartNotFound(format!(
                    "slide layout {}",
                    slide.layout()
                )));
            }

            let partname = opc.next_partname("/ppt/slides/slide%d.xml")?;
            let mut part = XmlPart::new(
                partname.clone(),
                ct::PML_SLIDE.to_string(),
                slide.to_xml()?.into_bytes(),
            );
            part.relate_to(slide.layout(), rt::SLIDE_LAYOUT);
            opc.add_part(Box::new(part));

            let rid = opc.get_part_mut(&pres_name)?.relate_to(&partname, rt::SLIDE);
            slide_ids.push((FIRST_SLIDE_ID + i as u32, rid));
        }

        let pres = opc.get_part_mut(&pres_name)?;
        let xml = rewrite_presentation_xml(pres.blob(), &slide_ids, slide_size)?;
        pres.set_blob(xml);

        Ok(package)
    }

    /// Write the slides and serialize the package to .pptx bytes.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        self.into_package()?.to_bytes()
    }
}

/// Copy `presentation.xml`, replacing `p:sldIdLst` with `slide_ids` and,
/// when given, `p:sldSz` with `slide_size`. Custom shows and sections refer
/// to the removed slides and are dropped.
fn rewrite_presentation_xml(
    xml: &[u8],
    slide_ids: &[(u32, String)],
    slide_size: Option<(i64, i64)>,
) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut skip_until: Option<usize> = None;
    let mut pml_prefix = String::from("p");
    let mut rel_prefix: Option<String> = None;
    let mut inserted = false;

    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        if let Some(skip_depth) = skip_until {
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == skip_depth {
                        skip_until = None;
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            continue;
        }

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_start = matches!(event, Event::Start(_));
                let local = e.local_name().as_ref().to_vec();

                if depth == 0 {
                    pml_prefix = e
                        .name()
                        .prefix()
                        .map(|prefix| String::from_utf8_lossy(prefix.as_ref()).into_owned())
                        .unwrap_or_default();
                    rel_prefix = e.attributes().flatten().find_map(|attr| {
                        let prefix = attr.key.as_ref().strip_prefix(b"xmlns:")?;
                        (attr.value.as_ref() == namespace::OFC_RELATIONSHIPS.as_bytes())
                            .then(|| String::from_utf8_lossy(prefix).into_owned())
                    });
                }

                let drop_element = (depth == 1 && (local == b"sldIdLst" || local == b"custShowLst"))
                    || (local == b"ext"
                        && e.attributes()
                            .flatten()
                            .any(|a| a.key.as_ref() == b"uri" && a.value.as_ref() == SECTION_LIST_EXT_URI));

                if depth == 1 && !inserted && AFTER_SLIDE_ID_LIST.contains(&local.as_slice()) {
                    write_slide_id_list(&mut writer, &pml_prefix, rel_prefix.as_deref(), slide_ids)?;
                    inserted = true;
                }

                if drop_element {
                    if is_start {
                        skip_until = Some(depth);
                        depth += 1;
                    }
                } else if depth == 1 && local == b"sldSz" && slide_size.is_some() {
                    if let Some((cx, cy)) = slide_size {
                        let mut sz = BytesStart::new(qname(&pml_prefix, "sldSz"));
                        sz.push_attribute(("cx", cx.to_string().as_str()));
                        sz.push_attribute(("cy", cy.to_string().as_str()));
                        for attr in e.attributes().flatten() {
                            if !matches!(attr.key.as_ref(), b"cx" | b"cy") {
                                sz.push_attribute(attr);
                            }
                        }
                        write(&mut writer, Event::Empty(sz))?;
                    }
                    if is_start {
                        skip_until = Some(depth);
                        depth += 1;
                    }
                } else {
                    write(&mut writer, event.borrow())?;
                    if is_start {
                        depth += 1;
                    }
                }
            },
            Event::End(ref e) => {
                depth -= 1;
                if depth == 0 && !inserted {
                    write_slide_id_list(&mut writer, &pml_prefix, rel_prefix.as_deref(), slide_ids)?;
                    inserted = true;
                }
                write(&mut writer, Event::End(e.borrow()))?;
            },
            Event::Eof => break,
            other => write(&mut writer, other)?,
        }
    }

    Ok(writer.into_inner().into_inner())
}

fn write_slide_id_list(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    pml_prefix: &str,
    rel_prefix: Option<&str>,
    slide_ids: &[(u32, String)],
) -> Result<()> {
    if slide_ids.is_empty() {
        return Ok(());
    }

    let list_name = qname(pml_prefix, "sldIdLst");
    let mut list = BytesStart::new(list_name.as_str());
    let rel_prefix = match rel_prefix {
        Some(prefix) => prefix,
        None => {
            list.push_attribute(("xmlns:r", namespace::OFC_RELATIONSHIPS));
            "r"
        },
    };
    write(writer, Event::Start(list))?;

    let rid_attr = qname(rel_prefix, "id");
    for (id, rid) in slide_ids {
        let mut sld_id = BytesStart::new(qname(pml_prefix, "sldId"));
        sld_id.push_attribute(("id", id.to_string().as_str()));
        sld_id.push_attribute((rid_attr.as_str(), rid.as_str()));
        write(writer, Event::Empty(sld_id))?;
    }

    write(writer, Event::End(BytesEnd::new(list_name.as_str())))
}

fn qname(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| OoxmlError::Xml(format!("Failed to write presentation.xml: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESENTATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId2"/><p:sldId id="300" r:id="rId3"/></p:sldIdLst><p:sldSz cx="9144000" cy="6858000" type="screen4x3"/><p:notesSz cx="6858000" cy="9144000"/><p:custShowLst><p:custShow name="x" id="0"><p:sldLst><p:sld r:id="rId2"/></p:sldLst></p:custShow></p:custShowLst><p:extLst><p:ext uri="{521415D9-36F7-43E2-AB2F-B90AF26B5E84}"><p14:sectionLst xmlns:p14="http://schemas.microsoft.com/office/powerpoint/2010/main"/></p:ext><p:ext uri="{EFAFB233-063F-42B5-8137-9DF3F51BA10A}"><p15:sldGuideLst xmlns:p15="http://schemas.microsoft.com/office/powerpoint/2012/main"/></p:ext></p:extLst></p:presentation>"#;

    fn rewrite(ids: &[(u32, String)], size: Option<(i64, i64)>) -> String {
        String::from_utf8(rewrite_presentation_xml(PRESENTATION.as_bytes(), ids, size).unwrap()).unwrap()
    }

    #[test]
    fn test_replaces_slide_list() {
        let xml = rewrite(&[(256, "rId9".into()), (257, "rId10".into())], None);
        assert!(xml.contains(r#"<p:sldIdLst><p:sldId id="256" r:id="rId9"/><p:sldId id="257" r:id="rId10"/></p:sldIdLst><p:sldSz"#));
        assert!(!xml.contains("rId3"));
        assert!(!xml.contains("custShowLst"));
        assert!(!xml.contains("sectionLst"));
        assert!(xml.contains("sldGuideLst"));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));
    }

    #[test]
    fn test_empty_slide_list_and_new_size() {
        let xml = rewrite(&[], Some((12192000, 6858000)));
        assert!(!xml.contains("sldIdLst"));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000" type="screen4x3"/>"#));
        assert!(xml.contains(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldSz"#));
    }

    #[test]
    fn test_list_added_when_no_following_element() {
        let xml = r#"<presentation xmlns="http://schemas.openxmlformats.org/presentationml/2006/main"><sldMasterIdLst/></presentation>"#;
        let out = rewrite_presentation_xml(xml.as_bytes(), &[(256, "rId4".into())], None).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with(r#"<sldMasterIdLst/><sldIdLst xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sldId id="256" r:id="rId4"/></sldIdLst></presentation>"#));
    }

    #[test]
    fn test_default_namespace_root_keeps_names_unprefixed() {
        let xml = r#"<presentation xmlns="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:rel="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sldMasterIdLst><sldMasterId id="2147483648" rel:id="rId1"/></sldMasterIdLst><sldSz cx="9144000" cy="6858000"/><notesSz cx="6858000" cy="9144000"/></presentation>"#;
        let out = rewrite_presentation_xml(xml.as_bytes(), &[(256, "rId2".into())], Some((12192000, 6858000))).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(r#"</sldMasterIdLst><sldIdLst><sldId id="256" rel:id="rId2"/></sldIdLst><sldSz cx="12192000" cy="6858000"/>"#));
        assert!(!out.contains("p:"));
    }
}
