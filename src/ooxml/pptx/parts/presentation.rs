/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::common::xml::{attr_i64, rel_id_attr};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// This part contains the presentation-level properties and references to slides,
/// slide masters, and other presentation resources.
///
/// # Example
///
/// ```rust,ignore
/// let pres_part = PresentationPart::from_part(opc_part)?;
/// let (cx, cy) = pres_part.slide_size()?.unwrap_or((9144000, 6858000));
/// ```
pub struct PresentationPart<'a> {
    part: &'a dyn Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Slide width and height in EMUs, from `p:sldSz`.
    ///
    /// Returns None if the slide size is not defined.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == b"sldSz" =>
                {
                    return match (attr_i64(e, b"cx"), attr_i64(e, b"cy")) {
                        (Some(cx), Some(cy)) if cx > 0 && cy > 0 => Ok(Some((cx, cy))),
                        _ => Err(OoxmlError::InvalidFormat(
                            "p:sldSz needs positive cx and cy".to_string(),
                        )),
                    };
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Get the relationship IDs of all slides in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        self.rids_of(b"sldId")
    }

    /// Get the relationship IDs of all slide masters.
    pub fn slide_master_rids(&self) -> Result<Vec<String>> {
        self.rids_of(b"sldMasterId")
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    fn rids_of(&self, element: &[u8]) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == element =>
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

    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}
