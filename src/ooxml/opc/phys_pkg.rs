//! Physical (ZIP) side of an OPC package.
//!
//! Reading decompresses every member up front into a name-indexed map; the
//! package graph is then walked entirely in memory. Writing deflates members
//! into an in-memory archive.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Decompressed members of a ZIP-based OPC package, keyed by member name.
#[derive(Debug)]
pub struct PhysPkgReader {
    members: HashMap<String, Vec<u8>>,
}

impl PhysPkgReader {
    /// Open an OPC package file (.pptx, .potx, ...).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::new(std::io::BufReader::new(file))
    }

    /// Read every member of the archive behind `reader`.
    pub fn new<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let mut blob = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut blob)?;
            members.insert(file.name().to_string(), blob);
        }

        Ok(Self { members })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::new(Cursor::new(data))
    }

    /// Content of the member for `pack_uri`.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        self.members
            .get(pack_uri.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// Move the member for `pack_uri` out of the reader.
    pub fn take_blob(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        self.members
            .remove(pack_uri.membername())
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// Content of the `.rels` member for `source_uri`, if it has one.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<&[u8]>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        Ok(self.members.get(rels_uri.membername()).map(Vec::as_slice))
    }

    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.members.contains_key(pack_uri.membername())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Writes package members into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a member with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();

        let mut writer = PhysPkgWriter::new();
        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&pres, b"<p:presentation/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(&bytes).unwrap();
        assert_eq!(reader.len(), 2);
        assert!(reader.contains(&content_types));
        assert_eq!(reader.blob_for(&pres).unwrap(), b"<p:presentation/>");
        assert!(reader.rels_xml_for(&pres).unwrap().is_none());

        assert_eq!(reader.take_blob(&pres).unwrap(), b"<p:presentation/>");
        assert!(reader.blob_for(&pres).is_err());
    }

    #[test]
    fn test_not_a_zip() {
        assert!(PhysPkgReader::from_bytes(b"plain text, not an archive").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = PhysPkgReader::open("/definitely/not/here.pptx").unwrap_err();
        assert!(matches!(err, OpcError::PackageNotFound(_)));
    }
}
