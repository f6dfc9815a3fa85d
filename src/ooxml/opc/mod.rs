/// Open Packaging Conventions (OPC) implementation.
///
/// A `.pptx` file is a ZIP archive of parts linked by relationships. This
/// module models that container:
///
/// - Part names ([`PackURI`]) and relationships ([`Relationships`])
/// - Content type discovery from `[Content_Types].xml`
/// - ZIP reading and writing through the `zip` crate
/// - An editable in-memory package ([`OpcPackage`])

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part, XmlPart};
pub use rel::{Relationship, Relationships};
