//! Relationships between parts of an OPC package.
//!
//! Every part (and the package itself) owns a [`Relationships`] collection
//! that is serialized to the matching `_rels/*.rels` member.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    /// Part reference relative to `base_uri`, or an absolute URL when external
    target_ref: String,
    base_uri: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Absolute partname of the target. External relationships have none.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} points outside the package",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source, keyed by rId.
#[derive(Debug, Clone)]
pub struct Relationships {
    base_uri: String,
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create an empty collection whose relative targets resolve against `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Insert a relationship read from a `.rels` member, replacing any
    /// relationship with the same rId.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) {
        let rel = Relationship::new(
            r_id.clone(),
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        );
        self.rels.insert(r_id, rel);
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// rId of the internal relationship of `reltype` to `target`, creating
    /// it with the next free rId when absent.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(rel) = self
            .rels
            .values()
            .find(|rel| !rel.is_external() && rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref, r_id.clone(), false);
        r_id
    }

    /// Next free relationship id, filling gaps left by removed relationships.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .keys()
            .filter_map(|r_id| r_id.strip_prefix("rId"))
            .filter_map(|n| atoi_simd::parse::<u32, false, false>(n.as_bytes()).ok())
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for num in used {
            match num.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next)
    }

    /// The single relationship of `reltype`. Zero or several matches are errors.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.values().filter(|rel| rel.reltype() == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    /// All relationships of `reltype`, in rId order.
    pub fn all_with_reltype(&self, reltype: &str) -> Vec<&Relationship> {
        self.sorted()
            .into_iter()
            .filter(|rel| rel.reltype() == reltype)
            .collect()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    /// Relationships ordered by the numeric part of their rId.
    pub fn sorted(&self) -> Vec<&Relationship> {
        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by(|a, b| r_id_key(a.r_id()).cmp(&r_id_key(b.r_id())));
        rels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn remove(&mut self, r_id: &str) -> Option<Relationship> {
        self.rels.remove(r_id)
    }

    /// Serialize to the content of a `.rels` member.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.sorted() {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
                if rel.is_external() { r#" TargetMode="External""# } else { "" }
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

fn r_id_key(r_id: &str) -> (u32, &str) {
    let num = r_id
        .strip_prefix("rId")
        .and_then(|n| atoi_simd::parse::<u32, false, false>(n.as_bytes()).ok())
        .unwrap_or(u32::MAX);
    (num, r_id)
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    fn layout(n: u32) -> PackURI {
        PackURI::new(format!("/ppt/slideLayouts/slideLayout{}.xml", n)).unwrap()
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new("/ppt/slides".to_string());

        assert_eq!(rels.get_or_add(rt::SLIDE_LAYOUT, &layout(1)), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE_LAYOUT, &layout(1)), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE_LAYOUT, &layout(2)), "rId2");
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "../slideLayouts/slideLayout1.xml");
    }

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        for n in [1, 2, 4] {
            rels.add_relationship(rt::SLIDE.into(), format!("slides/slide{n}.xml"), format!("rId{n}"), false);
        }
        assert_eq!(rels.next_r_id(), "rId3");
        rels.remove("rId1");
        assert_eq!(rels.next_r_id(), "rId1");
    }

    #[test]
    fn test_target_partname() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        let r_id = rels.get_or_add(rt::SLIDE_LAYOUT, &layout(7));
        let target = rels.get(&r_id).unwrap().target_partname().unwrap();
        assert_eq!(target, layout(7));
    }

    #[test]
    fn test_sorted_is_numeric() {
        let mut rels = Relationships::new("/ppt".to_string());
        for n in [10, 2, 1] {
            rels.add_relationship(rt::SLIDE.into(), format!("slides/slide{n}.xml"), format!("rId{n}"), false);
        }
        let order: Vec<&str> = rels.sorted().iter().map(|r| r.r_id()).collect();
        assert_eq!(order, ["rId1", "rId2", "rId10"]);

        let xml = rels.to_xml();
        let first = xml.find("rId1\"").unwrap();
        let last = xml.find("rId10\"").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_non_numeric_r_ids() {
        let mut rels = Relationships::new("/ppt".to_string());
        rels.add_relationship(rt::SLIDE.into(), "slides/slide1.xml".into(), "rIdTheme".into(), false);
        rels.add_relationship(rt::SLIDE.into(), "slides/slide2.xml".into(), "rId1".into(), false);
        assert_eq!(rels.next_r_id(), "rId2");

        let order: Vec<&str> = rels.sorted().iter().map(|r| r.r_id()).collect();
        assert_eq!(order, ["rId1", "rIdTheme"]);
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = Relationships::default();
        assert!(rels.part_with_reltype(rt::OFFICE_DOCUMENT).is_err());
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        rels.get_or_add(rt::OFFICE_DOCUMENT, &pres);
        assert_eq!(
            rels.part_with_reltype(rt::OFFICE_DOCUMENT).unwrap().target_ref(),
            "ppt/presentation.xml"
        );
    }
}
