/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::parts::PresentationPart;
use crate::ooxml::pptx::presentation::Presentation;
use std::io::{Read, Seek};
use std::path::Path;

/// Main-part content types accepted as presentations.
const PRESENTATION_CONTENT_TYPES: [&str; 3] = [
    ct::PML_PRESENTATION_MAIN,
    ct::PML_PRES_MACRO_MAIN,
    ct::PML_TEMPLATE_MAIN,
];

/// A PowerPoint (.pptx / .potx) package.
///
/// This is the main entry point for working with PowerPoint presentations.
/// It wraps an OPC package and provides PowerPoint-specific functionality.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::Package;
///
/// let pkg = Package::open("brand-template.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Create a .pptx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(data)?)
    }

    /// Wrap an OPC package after checking that its main part is a
    /// presentation.
    pub fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        if !PRESENTATION_CONTENT_TYPES.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: PRESENTATION_CONTENT_TYPES.join(" or "),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// Get the main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        Ok(Presentation::new(PresentationPart::from_part(main_part)?, &self.opc))
    }

    #[inline]
    pub fn opc_package_mut(&mut self) -> &mut OpcPackage {
        &mut self.opc
    }

    /// Serialize the package to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.opc.to_bytes()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::{PackURI, XmlPart};

    #[test]
    fn test_rejects_non_presentation() {
        let mut opc = OpcPackage::new();
        let doc = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Box::new(XmlPart::new(
            doc.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml".into(),
            b"<w:document/>".to_vec(),
        )));
        opc.relate_to(&doc, rt::OFFICE_DOCUMENT);

        let err = Package::from_opc(opc).err().unwrap();
        assert!(matches!(err, OoxmlError::InvalidContentType { .. }));
    }

    #[test]
    fn test_rejects_empty_package() {
        assert!(matches!(
            Package::from_opc(OpcPackage::new()),
            Err(OoxmlError::PartNotFound(_))
        ));
    }
}
