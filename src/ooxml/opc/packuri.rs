/// The PackURI value type: the name of a part inside an OPC package.
///
/// Part names always begin with a forward slash and use forward slashes as
/// separators, e.g. `/ppt/slides/slide1.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

impl PackURI {
    /// Create a new PackURI. Fails unless `uri` begins with a slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relationship target such as `../slideLayouts/slideLayout2.xml`
    /// against the directory of its source part.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        // Absolute targets ignore the base
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                other => segments.push(other),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// Directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    /// The package pseudo-partname and top-level parts return `/`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Filename portion, e.g. `slide1.xml`. Empty for `/`.
    pub fn filename(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or("")
    }

    /// Extension without the leading period, e.g. `xml`.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename.rfind('.').map_or("", |pos| &filename[pos + 1..])
    }

    /// Numeric suffix of tuple partnames: 21 for `/ppt/slides/slide21.xml`,
    /// `None` for singleton partnames like `/ppt/presentation.xml`.
    pub fn idx(&self) -> Option<u32> {
        let filename = self.filename();
        let stem = filename.rfind('.').map_or(filename, |pos| &filename[..pos]);
        let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 || digits == stem.len() {
            return None;
        }
        atoi_simd::parse::<u32, false, false>(stem[stem.len() - digits..].as_bytes()).ok()
    }

    /// Zip member name: the URI with its leading slash stripped.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Relative reference from `base_uri` to this part, as written into a
    /// `.rels` Target attribute.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let mut parts: Vec<&str> = std::iter::repeat_n("..", from.len() - common).collect();
        parts.extend(&to[common..]);
        parts.join("/")
    }

    /// PackURI of the `.rels` part that holds this part's relationships,
    /// e.g. `/ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        if base_uri == "/" {
            Self::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base_uri, self.filename()))
        }
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl serde::Serialize for PackURI {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new("ppt/presentation.xml").is_err());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/ppt/slideLayouts/slideLayout12.xml").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/slideLayouts");
        assert_eq!(uri.filename(), "slideLayout12.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.idx(), Some(12));
        assert_eq!(uri.membername(), "ppt/slideLayouts/slideLayout12.xml");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
        assert_eq!(root.membername(), "");
        assert_eq!(PackURI::new("/ppt/presentation.xml").unwrap().idx(), None);
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/ppt/slides", "../slideLayouts/slideLayout2.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/slideLayouts/slideLayout2.xml");

        let uri = PackURI::from_rel_ref("/", "ppt/presentation.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/presentation.xml");

        let uri = PackURI::from_rel_ref("/ppt", "/ppt/theme/theme1.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/theme/theme1.xml");
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(layout.relative_ref("/ppt/slides"), "../slideLayouts/slideLayout1.xml");
        assert_eq!(layout.relative_ref("/ppt"), "slideLayouts/slideLayout1.xml");
        assert_eq!(layout.relative_ref("/"), "ppt/slideLayouts/slideLayout1.xml");
    }

    #[test]
    fn test_rels_uri() {
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pres.rels_uri().unwrap().as_str(), "/ppt/_rels/presentation.xml.rels");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
