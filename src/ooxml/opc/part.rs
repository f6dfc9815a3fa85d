//! Package parts.
//!
//! Parts are the units of content in an OPC package, each with a unique
//! partname, a content type, and relationships to other parts.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;

/// A part in an OPC package.
pub trait Part {
    fn partname(&self) -> &PackURI;

    fn content_type(&self) -> &str;

    fn blob(&self) -> &[u8];

    /// Replace the part's content.
    fn set_blob(&mut self, blob: Vec<u8>);

    fn rels(&self) -> &Relationships;

    fn rels_mut(&mut self) -> &mut Relationships;

    /// rId of the relationship of `reltype` to `target`, created if absent.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels_mut().get_or_add(reltype, target)
    }

    /// Absolute partname targeted by `r_id`.
    fn related_partname(&self, r_id: &str) -> Result<PackURI> {
        self.rels()
            .get(r_id)
            .ok_or_else(|| {
                OpcError::RelationshipNotFound(format!(
                    "{} in {}",
                    r_id,
                    self.partname()
                ))
            })?
            .target_partname()
    }
}

/// Part holding opaque binary content (images, fonts, embedded objects).
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Part whose content is UTF-8 XML.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml_bytes: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    pub fn new(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            xml_bytes,
            rels,
        }
    }

    /// Load an XML part, rejecting content that is not UTF-8.
    pub fn load(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Result<Self> {
        std::str::from_utf8(&xml_bytes)?;
        Ok(Self::new(partname, content_type, xml_bytes))
    }

    /// A quick-xml reader over the part content with text trimming enabled.
    pub fn reader(&self) -> Reader<&[u8]> {
        let mut reader = Reader::from_reader(self.xml_bytes.as_slice());
        reader.config_mut().trim_text(true);
        reader
    }

    pub fn xml_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.xml_bytes).map_err(Into::into)
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.xml_bytes
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.xml_bytes = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Chooses the Part implementation for a content type.
pub struct PartFactory;

impl PartFactory {
    pub fn load(partname: PackURI, content_type: String, blob: Vec<u8>) -> Result<Box<dyn Part>> {
        if Self::is_xml_content_type(&content_type) {
            Ok(Box::new(XmlPart::load(partname, content_type, blob)?))
        } else {
            Ok(Box::new(BlobPart::new(partname, content_type, blob)))
        }
    }

    #[inline]
    fn is_xml_content_type(content_type: &str) -> bool {
        content_type.ends_with("+xml") || content_type.ends_with("/xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_factory_dispatch() {
        let png = PartFactory::load(
            PackURI::new("/ppt/media/image1.png").unwrap(),
            ct::PNG.to_string(),
            vec![0x89, 0x50, 0x4E, 0x47],
        )
        .unwrap();
        assert_eq!(png.blob(), &[0x89, 0x50, 0x4E, 0x47]);

        let bad_xml = PartFactory::load(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE.to_string(),
            vec![0xFF, 0xFE, 0x00],
        );
        assert!(bad_xml.is_err());
    }

    #[test]
    fn test_is_xml_content_type() {
        assert!(PartFactory::is_xml_content_type(ct::XML));
        assert!(PartFactory::is_xml_content_type(ct::PML_SLIDE_LAYOUT));
        assert!(!PartFactory::is_xml_content_type(ct::JPEG));
    }

    #[test]
    fn test_relate_and_resolve() {
        let mut slide = XmlPart::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE.to_string(),
            b"<p:sld/>".to_vec(),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout3.xml").unwrap();
        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(slide.related_partname(&r_id).unwrap(), layout);
        assert!(slide.related_partname("rId99").is_err());

        slide.set_blob(b"<p:sld></p:sld>".to_vec());
        assert_eq!(slide.xml_str().unwrap(), "<p:sld></p:sld>");
    }
}
