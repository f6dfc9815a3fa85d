//! In-memory OPC package.
//!
//! OpcPackage owns every part of a package plus the package-level
//! relationships, and supports the edits the presentation writer needs:
//! adding parts, replacing part content and dropping parts that nothing
//! references any more.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::{Part, PartFactory};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};
use std::path::Path;

pub struct OpcPackage {
    rels: Relationships,
    parts: HashMap<String, Box<dyn Part>>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: HashMap::new(),
        }
    }

    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use deckhand::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("brand-template.pptx").unwrap();
    /// println!("{} parts", pkg.part_count());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::open(path)?)?)
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::new(reader)?)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::from_bytes(data)?)?)
    }

    /// Build the object graph from serialized parts and relationships.
    fn unmarshal(mut pkg_reader: PackageReader) -> Result<Self> {
        let mut package = Self::new();

        for srel in pkg_reader.pkg_srels() {
            package.rels.add_relationship(
                srel.reltype.clone(),
                srel.target_ref.clone(),
                srel.r_id.clone(),
                srel.is_external(),
            );
        }

        for spart in pkg_reader.take_sparts() {
            let mut part = PartFactory::load(spart.partname, spart.content_type, spart.blob)?;
            for srel in spart.srels {
                let is_external = srel.is_external();
                part.rels_mut()
                    .add_relationship(srel.reltype, srel.target_ref, srel.r_id, is_external);
            }
            package.add_part(part);
        }

        Ok(package)
    }

    /// The main document part; `/ppt/presentation.xml` for presentations.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        self.get_part(&rel.target_partname()?)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname.as_str())
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut dyn Part> {
        self.parts
            .get_mut(partname.as_str())
            .map(|b| &mut **b as &mut dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Part targeted by `r_id` in the relationships of `source`.
    pub fn related_part(&self, source: &dyn Part, r_id: &str) -> Result<&dyn Part> {
        self.get_part(&source.related_partname(r_id)?)
    }

    /// Add a part, replacing any part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        self.parts.insert(part.partname().to_string(), part);
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
    }

    /// Parts ordered by partname.
    pub fn iter_parts_sorted(&self) -> impl Iterator<Item = &dyn Part> {
        let mut names: Vec<&String> = self.parts.keys().collect();
        names.sort();
        names.into_iter().map(|name| &*self.parts[name] as &dyn Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Relate the package itself to a part; returns the rId.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, partname)
    }

    /// First free partname for a template with a `%d` placeholder, e.g.
    /// `/ppt/slides/slide%d.xml`.
    pub fn next_partname(&self, template: &str) -> Result<PackURI> {
        (1..=self.parts.len() as u32 + 1)
            .map(|n| template.replace("%d", &n.to_string()))
            .find(|candidate| !self.parts.contains_key(candidate))
            .ok_or_else(|| OpcError::InvalidPackUri(template.to_string()))
            .and_then(|candidate| PackURI::new(candidate).map_err(OpcError::InvalidPackUri))
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname.as_str())
    }

    /// Remove every part that can no longer be reached from the package
    /// relationships. Returns the number of parts dropped.
    pub fn drop_unreachable_parts(&mut self) -> usize {
        let mut reachable: HashSet<String> = HashSet::new();
        let mut stack: Vec<PackURI> = self
            .rels
            .iter()
            .filter(|rel| !rel.is_external())
            .filter_map(|rel| rel.target_partname().ok())
            .collect();

        while let Some(partname) = stack.pop() {
            if !reachable.insert(partname.to_string()) {
                continue;
            }
            if let Some(part) = self.parts.get(partname.as_str()) {
                stack.extend(
                    part.rels()
                        .iter()
                        .filter(|rel| !rel.is_external())
                        .filter_map(|rel| rel.target_partname().ok()),
                );
            }
        }

        let before = self.parts.len();
        self.parts.retain(|name, _| reachable.contains(name));
        before - self.parts.len()
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
