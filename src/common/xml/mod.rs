//! XML text and attribute helpers shared by the package reader and the
//! slide writer.

pub mod attr;
pub mod escape;
pub mod text;

pub use attr::{attr_i64, attr_value, rel_id_attr};
pub use escape::{escape_xml, is_xml_char, unescape_xml};
pub use text::{push_general_ref, push_text};
