//! Built-in presentation scaffold.
//!
//! Canvas-mode decks have no template file to start from, so the package is
//! generated here: one slide master with its theme, a small set of layouts
//! and the property parts PowerPoint expects. Layout geometry is derived from
//! the requested slide size.

use crate::common::unit::inches_to_emu;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::{Part, XmlPart};
use crate::ooxml::pptx::package::Package;
use crate::ooxml::pptx::shapes::base::PlaceholderType;
use std::fmt::Write as FmtWrite;

const THEME_XML: &str = include_str!("../../../resources/theme/theme1.xml");
const PRES_PROPS_XML: &str = include_str!("../../../resources/presProps.xml");
const VIEW_PROPS_XML: &str = include_str!("../../../resources/viewProps.xml");
const TABLE_STYLES_XML: &str = include_str!("../../../resources/tableStyles.xml");
const CORE_PROPS_XML: &str = include_str!("../../../resources/docProps/core.xml");
const APP_PROPS_XML: &str = include_str!("../../../resources/docProps/app.xml");

const NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

const GROUP_PROPERTIES: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

const MASTER_TEXT_STYLES: &str = concat!(
    "<p:txStyles>",
    r#"<p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="4400" kern="1200">"#,
    r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/>"#,
    "</a:defRPr></a:lvl1pPr></p:titleStyle>",
    r#"<p:bodyStyle><a:lvl1pPr marL="228600" indent="-228600"><a:spcBef><a:spcPts val="1000"/></a:spcBef>"#,
    r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="2800" kern="1200">"#,
    r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/>"#,
    "</a:defRPr></a:lvl1pPr>",
    r#"<a:lvl2pPr marL="685800" indent="-228600"><a:spcBef><a:spcPts val="500"/></a:spcBef>"#,
    r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="2400" kern="1200">"#,
    r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/>"#,
    "</a:defRPr></a:lvl2pPr></p:bodyStyle>",
    r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:otherStyle>"#,
    "</p:txStyles>",
);

/// First id of `p:sldMasterIdLst`; layout ids continue from it.
const MASTER_ID: u64 = 2_147_483_648;

/// A placeholder slot of a scaffold layout, with its frame in EMUs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldPlaceholder {
    pub kind: PlaceholderType,
    pub idx: u32,
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// A slide layout of the scaffold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldLayout {
    pub name: String,
    pub placeholders: Vec<ScaffoldPlaceholder>,
}

impl ScaffoldLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholders: Vec::new(),
        }
    }

    pub fn with_placeholder(
        mut self,
        kind: PlaceholderType,
        idx: u32,
        frame: (i64, i64, i64, i64),
    ) -> Self {
        let (x, y, cx, cy) = frame;
        self.placeholders.push(ScaffoldPlaceholder {
            kind,
            idx,
            x,
            y,
            cx,
            cy,
        });
        self
    }
}

/// The stock layouts: title, title and content, two content, title only,
/// blank.
pub fn default_layouts(width: i64, height: i64) -> Vec<ScaffoldLayout> {
    let margin = inches_to_emu(0.5);
    let gutter = inches_to_emu(0.5);
    let title_frame = (margin, inches_to_emu(0.3), width - 2 * margin, inches_to_emu(1.25));
    let content_top = inches_to_emu(1.75);
    let content_height = height - content_top - margin;
    let column_width = (width - 2 * margin - gutter) / 2;

    vec![
        ScaffoldLayout::new("Title Slide")
            .with_placeholder(
                PlaceholderType::CenterTitle,
                0,
                (width / 10, height * 3 / 10, width * 8 / 10, height / 5),
            )
            .with_placeholder(
                PlaceholderType::Subtitle,
                1,
                (width * 3 / 20, height * 11 / 20, width * 7 / 10, height / 5),
            ),
        ScaffoldLayout::new("Title and Content")
            .with_placeholder(PlaceholderType::Title, 0, title_frame)
            .with_placeholder(
                PlaceholderType::Object,
                1,
                (margin, content_top, width - 2 * margin, content_height),
            ),
        ScaffoldLayout::new("Two Content")
            .with_placeholder(PlaceholderType::Title, 0, title_frame)
            .with_placeholder(
                PlaceholderType::Object,
                1,
                (margin, content_top, column_width, content_height),
            )
            .with_placeholder(
                PlaceholderType::Object,
                2,
                (margin + column_width + gutter, content_top, column_width, content_height),
            ),
        ScaffoldLayout::new("Title Only").with_placeholder(PlaceholderType::Title, 0, title_frame),
        ScaffoldLayout::new("Blank"),
    ]
}

/// Builder for a blank presentation package.
///
/// # Examples
///
/// ```rust
/// use deckhand::ooxml::pptx::template::Scaffold;
///
/// let pkg = Scaffold::new(9_144_000, 6_858_000).build()?;
/// let pres = pkg.presentation()?;
/// assert_eq!(pres.slide_count()?, 0);
/// assert_eq!(pres.slide_layouts()?.len(), 5);
/// # Ok::<(), deckhand::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scaffold {
    width: i64,
    height: i64,
    layouts: Vec<ScaffoldLayout>,
}

impl Default for Scaffold {
    /// 10in x 7.5in.
    fn default() -> Self {
        Self::new(9_144_000, 6_858_000)
    }
}

impl Scaffold {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            layouts: default_layouts(width, height),
        }
    }

    /// Replace the stock layouts.
    pub fn with_layouts(mut self, layouts: Vec<ScaffoldLayout>) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn layouts(&self) -> &[ScaffoldLayout] {
        &self.layouts
    }

    /// Generate the package.
    pub fn build(&self) -> Result<Package> {
        if self.width <= 0 || self.height <= 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "slide size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        let mut opc = OpcPackage::new();

        let master_name = partname("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_name = partname("/ppt/theme/theme1.xml")?;
        let mut master = XmlPart::new(master_name.clone(), ct::PML_SLIDE_MASTER.into(), Vec::new());

        let mut layout_rids = Vec::with_capacity(self.layouts.len());
        for (i, layout) in self.layouts.iter().enumerate() {
            let name = partname(&format!("/ppt/slideLayouts/slideLayout{}.xml", i + 1))?;
            let mut part = XmlPart::new(
                name.clone(),
                ct::PML_SLIDE_LAYOUT.into(),
                layout_xml(layout)?.into_bytes(),
            );
            part.relate_to(&master_name, rt::SLIDE_MASTER);
            opc.add_part(Box::new(part));
            layout_rids.push(master.relate_to(&name, rt::SLIDE_LAYOUT));
        }
        master.relate_to(&theme_name, rt::THEME);
        master.set_blob(master_xml(&layout_rids)?.into_bytes());
        opc.add_part(Box::new(master));
        opc.add_part(xml_part(&theme_name, ct::OFC_THEME, THEME_XML));

        let pres_name = partname("/ppt/presentation.xml")?;
        let mut pres = XmlPart::new(pres_name.clone(), ct::PML_PRESENTATION_MAIN.into(), Vec::new());
        let master_rid = pres.relate_to(&master_name, rt::SLIDE_MASTER);
        for (name, content_type, reltype, xml) in [
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, rt::PRES_PROPS, PRES_PROPS_XML),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, rt::VIEW_PROPS, VIEW_PROPS_XML),
            ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, rt::TABLE_STYLES, TABLE_STYLES_XML),
        ] {
            let name = partname(name)?;
            pres.relate_to(&name, reltype);
            opc.add_part(xml_part(&name, content_type, xml));
        }
        pres.relate_to(&theme_name, rt::THEME);
        pres.set_blob(presentation_xml(&master_rid, self.width, self.height)?.into_bytes());
        opc.add_part(Box::new(pres));
        opc.relate_to(&pres_name, rt::OFFICE_DOCUMENT);

        let core_name = partname("/docProps/core.xml")?;
        opc.add_part(xml_part(&core_name, ct::OPC_CORE_PROPERTIES, CORE_PROPS_XML));
        opc.relate_to(&core_name, rt::CORE_PROPERTIES);
        let app_name = partname("/docProps/app.xml")?;
        opc.add_part(xml_part(&app_name, ct::OFC_EXTENDED_PROPERTIES, APP_PROPS_XML));
        opc.relate_to(&app_name, rt::EXTENDED_PROPERTIES);

        log::debug!(
            "generated scaffold {}x{} EMU with {} layouts",
            self.width,
            self.height,
            self.layouts.len()
        );
        Package::from_opc(opc)
    }
}

fn partname(name: &str) -> Result<PackURI> {
    PackURI::new(name).map_err(OoxmlError::InvalidFormat)
}

fn xml_part(name: &PackURI, content_type: &str, xml: &str) -> Box<dyn Part> {
    Box::new(XmlPart::new(
        name.clone(),
        content_type.to_string(),
        xml.trim_end().as_bytes().to_vec(),
    ))
}

fn presentation_xml(master_rid: &str, width: i64, height: i64) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:presentation {} saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst><p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/>"#,
        NAMESPACES, MASTER_ID, master_rid, width, height
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str(r#"<p:defaultTextStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:defaultTextStyle>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn master_xml(layout_rids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, "<p:sldMaster {}>", NAMESPACES).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_PROPERTIES);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    if !layout_rids.is_empty() {
        xml.push_str("<p:sldLayoutIdLst>");
        for (i, rid) in layout_rids.iter().enumerate() {
            write!(
                xml,
                r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
                MASTER_ID + 1 + i as u64,
                rid
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }
        xml.push_str("</p:sldLayoutIdLst>");
    }
    xml.push_str(MASTER_TEXT_STYLES);
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn layout_xml(layout: &ScaffoldLayout) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldLayout {} preserve="1"><p:cSld name="{}"><p:spTree>"#,
        NAMESPACES,
        escape_xml(&layout.name)
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str(GROUP_PROPERTIES);

    for (i, ph) in layout.placeholders.iter().enumerate() {
        let id = i + 2;
        let type_attr = match ph.kind {
            PlaceholderType::Object => String::new(),
            ref kind => format!(r#" type="{}""#, escape_xml(kind.as_str())),
        };
        let idx_attr = if ph.idx == 0 {
            String::new()
        } else {
            format!(r#" idx="{}""#, ph.idx)
        };
        write!(
            xml,
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{} {}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
                r#"<p:nvPr><p:ph{}{}/></p:nvPr></p:nvSpPr>"#,
                r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
                r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
            ),
            id,
            placeholder_label(&ph.kind),
            id - 1,
            type_attr,
            idx_attr,
            ph.x,
            ph.y,
            ph.cx,
            ph.cy
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// Name PowerPoint gives new placeholders of each kind.
fn placeholder_label(kind: &PlaceholderType) -> &'static str {
    match kind {
        PlaceholderType::Title | PlaceholderType::CenterTitle => "Title",
        PlaceholderType::Subtitle => "Subtitle",
        PlaceholderType::Body => "Text Placeholder",
        PlaceholderType::Object => "Content Placeholder",
        PlaceholderType::Date => "Date Placeholder",
        PlaceholderType::Footer => "Footer Placeholder",
        PlaceholderType::SlideNumber => "Slide Number Placeholder",
        PlaceholderType::Picture => "Picture Placeholder",
        PlaceholderType::Chart => "Chart Placeholder",
        PlaceholderType::Table => "Table Placeholder",
        PlaceholderType::Other(_) => "Placeholder",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_scaffold_layouts_read_back() {
        let pkg = Scaffold::default().build().unwrap();
        let pres = pkg.presentation().unwrap();

        assert_eq!(pres.slide_size().unwrap(), Some((9_144_000, 6_858_000)));
        assert_eq!(pres.slide_count().unwrap(), 0);

        let layouts = pres.slide_layouts().unwrap();
        let names: Vec<&str> = layouts.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Title Slide", "Title and Content", "Two Content", "Title Only", "Blank"]
        );
        assert!(layouts[0].center_title_slot().is_some());
        assert!(layouts[0].subtitle_slot().is_some());
        assert_eq!(layouts[2].body_slots().len(), 2);
        assert!(layouts[4].placeholders.is_empty());
    }

    #[test]
    fn test_scaffold_theme_resolves() {
        let pkg = Scaffold::default().build().unwrap();
        let pres = pkg.presentation().unwrap();
        let theme = pres.theme().unwrap().unwrap();
        assert_eq!(theme.name, "Office Theme");
        assert_eq!(theme.minor_font.as_deref(), Some("Calibri"));

        let masters = pres.slide_masters().unwrap();
        let scheme = pres.color_scheme(&masters[0]).unwrap();
        assert_eq!(scheme.resolve("bg1"), Some(RGBColor::new(0xFF, 0xFF, 0xFF)));
        assert_eq!(scheme.resolve("accent1"), Some(RGBColor::new(0x44, 0x72, 0xC4)));
    }

    #[test]
    fn test_scaffold_survives_zip_round_trip() {
        let bytes = Scaffold::new(12_192_000, 6_858_000)
            .with_layouts(vec![ScaffoldLayout::new("Blank & Empty")])
            .build()
            .unwrap()
            .to_bytes()
            .unwrap();
        let pkg = Package::from_bytes(&bytes).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_size().unwrap(), Some((12_192_000, 6_858_000)));
        let layouts = pres.slide_layouts().unwrap();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].name, "Blank & Empty");
    }

    #[test]
    fn test_rejects_empty_canvas() {
        assert!(Scaffold::new(0, 100).build().is_err());
    }
}
