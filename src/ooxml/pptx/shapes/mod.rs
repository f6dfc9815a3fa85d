//! Shapes of a slide, layout or master.
pub mod base;
pub mod textframe;
pub mod tree;

pub use base::{Placeholder, PlaceholderType, Shape, ShapeGeometry, ShapeType};
pub use textframe::{Paragraph, Run, TextFrame};
pub use tree::{CommonSlideData, parse_common_slide_data};
