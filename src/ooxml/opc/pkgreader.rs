//! Read-only view of a serialized OPC package.
//!
//! The reader parses `[Content_Types].xml`, then walks the relationship graph
//! from the package relationships, collecting every reachable part together
//! with its content type and serialized relationships.

use crate::common::xml::attr_value;
use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// A part as loaded from the archive, before it becomes a [`Part`](super::Part).
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    /// Relationship type of the first relationship that reached this part
    pub reltype: String,
    pub blob: Vec<u8>,
    pub srels: SmallVec<[SerializedRelationship; 8]>,
}

/// One `<Relationship>` element of a `.rels` member.
#[derive(Debug, Clone)]
pub struct SerializedRelationship {
    pub base_uri: String,
    pub r_id: String,
    pub reltype: String,
    pub target_ref: String,
    pub target_mode: String,
}

impl SerializedRelationship {
    #[inline]
    pub fn is_external(&self) -> bool {
        self.target_mode == target_mode::EXTERNAL
    }

    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external() {
            return Err(OpcError::InvalidRelationship(format!(
                "{} points outside the package",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Default (by extension) and Override (by partname) content types.
#[derive(Debug, Default)]
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"Default" => {
                        if let (Some(ext), Some(ct)) =
                            (attr_value(e, b"Extension"), attr_value(e, b"ContentType"))
                        {
                            map.defaults.insert(ext.to_lowercase(), ct);
                        }
                    },
                    b"Override" => {
                        if let (Some(pn), Some(ct)) =
                            (attr_value(e, b"PartName"), attr_value(e, b"ContentType"))
                        {
                            // Partnames compare case-insensitively
                            map.overrides.insert(pn.to_lowercase(), ct);
                        }
                    },
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!("Content types parse error: {}", e)));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override first, then the default for the extension.
    fn get(&self, pack_uri: &PackURI) -> Result<String> {
        self.overrides
            .get(&pack_uri.as_str().to_lowercase())
            .or_else(|| self.defaults.get(&pack_uri.ext().to_lowercase()))
            .cloned()
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// Serialized parts and package relationships of one package.
pub struct PackageReader {
    pkg_srels: SmallVec<[SerializedRelationship; 8]>,
    sparts: Vec<SerializedPart>,
}

impl PackageReader {
    pub fn from_phys_reader(mut phys_reader: PhysPkgReader) -> Result<Self> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let content_types = ContentTypeMap::from_xml(phys_reader.blob_for(&content_types_uri)?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_srels = Self::load_rels(&phys_reader, &package_uri)?;
        let sparts = Self::load_parts(&mut phys_reader, &pkg_srels, &content_types)?;

        Ok(Self { pkg_srels, sparts })
    }

    fn load_rels(
        phys_reader: &PhysPkgReader,
        source_uri: &PackURI,
    ) -> Result<SmallVec<[SerializedRelationship; 8]>> {
        match phys_reader.rels_xml_for(source_uri)? {
            Some(xml) => Self::parse_rels_xml(xml, source_uri.base_uri()),
            None => Ok(SmallVec::new()),
        }
    }

    fn parse_rels_xml(
        rels_xml: &[u8],
        base_uri: &str,
    ) -> Result<SmallVec<[SerializedRelationship; 8]>> {
        let mut srels = SmallVec::new();
        let mut reader = Reader::from_reader(rels_xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    if let (Some(r_id), Some(reltype), Some(target_ref)) = (
                        attr_value(e, b"Id"),
                        attr_value(e, b"Type"),
                        attr_value(e, b"Target"),
                    ) {
                        srels.push(SerializedRelationship {
                            base_uri: base_uri.to_string(),
                            r_id,
                            reltype,
                            target_ref,
                            target_mode: attr_value(e, b"TargetMode")
                                .unwrap_or_else(|| target_mode::INTERNAL.to_string()),
                        });
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(srels)
    }

    /// Depth-first walk of the relationship graph. Targets missing from the
    /// archive are skipped with a warning.
    fn load_parts(
        phys_reader: &mut PhysPkgReader,
        pkg_srels: &[SerializedRelationship],
        content_types: &ContentTypeMap,
    ) -> Result<Vec<SerializedPart>> {
        let mut sparts = Vec::with_capacity(32);
        let mut visited = HashSet::with_capacity(32);
        let mut work_queue: Vec<(PackURI, String)> = Vec::new();

        let mut enqueue = |srels: &[SerializedRelationship], queue: &mut Vec<(PackURI, String)>| {
            for srel in srels.iter().rev().filter(|s| !s.is_external()) {
                if let Ok(partname) = srel.target_partname() {
                    if visited.insert(partname.clone()) {
                        queue.push((partname, srel.reltype.clone()));
                    }
                }
            }
        };
        enqueue(pkg_srels, &mut work_queue);

        while let Some((partname, reltype)) = work_queue.pop() {
            if !phys_reader.contains(&partname) {
                log::warn!("relationship target {} is missing from the package", partname);
                continue;
            }

            let srels = Self::load_rels(phys_reader, &partname)?;
            enqueue(&srels, &mut work_queue);

            let content_type = content_types.get(&partname)?;
            let blob = phys_reader.take_blob(&partname)?;
            sparts.push(SerializedPart {
                partname,
                content_type,
                reltype,
                blob,
                srels,
            });
        }

        Ok(sparts)
    }

    pub fn pkg_srels(&self) -> &[SerializedRelationship] {
        &self.pkg_srels
    }

    /// Take ownership of all serialized parts.
    pub fn take_sparts(&mut self) -> Vec<SerializedPart> {
        std::mem::take(&mut self.sparts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_map() {
        let xml = br#"<?xml version="1.0"?>
            <Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
                <Default Extension="XML" ContentType="application/xml"/>
                <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
                <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
            </Types>"#;

        let ct_map = ContentTypeMap::from_xml(xml).unwrap();

        let uri = PackURI::new("/ppt/theme/theme1.xml").unwrap();
        assert_eq!(ct_map.get(&uri).unwrap(), "application/xml");

        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(ct_map.get(&uri).unwrap().ends_with("presentation.main+xml"));

        let uri = PackURI::new("/ppt/media/image1.png").unwrap();
        assert!(ct_map.get(&uri).is_err());
    }

    #[test]
    fn test_parse_rels_xml() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
            <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
        </Relationships>"#;

        let srels = PackageReader::parse_rels_xml(xml, "/ppt/slides").unwrap();
        assert_eq!(srels.len(), 2);
        assert_eq!(
            srels[0].target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
        assert!(srels[1].is_external());
        assert_eq!(srels[1].target_ref, "https://example.com/?a=1&b=2");
        assert!(srels[1].target_partname().is_err());
    }
}
