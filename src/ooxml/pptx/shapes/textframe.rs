/// Text frame content of a shape: paragraphs made of runs.
use crate::ooxml::pptx::fill::ColorValue;
use serde::Serialize;

/// A text frame containing text content.
///
/// # Examples
///
/// ```rust,ignore
/// if let Some(frame) = shape.text_frame() {
///     println!("{}", frame.text());
///     for para in &frame.paragraphs {
///         println!("level {}: {}", para.level, para.text());
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

/// One `<a:p>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    /// Indentation level from `a:pPr@lvl`
    pub level: u32,
    pub runs: Vec<Run>,
}

/// A text run (`a:r`, `a:fld`) or line break (`a:br`, text `"\n"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    /// Latin typeface from `a:rPr/a:latin`
    pub font_name: Option<String>,
    /// Size in points (`a:rPr@sz` is in hundredths of a point)
    pub size_pt: Option<f64>,
    pub bold: Option<bool>,
    pub color: Option<ColorValue>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl TextFrame {
    /// All text, paragraphs separated by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The first run holding something other than whitespace. Its formatting
    /// is what a reader sees as "the" font of the frame.
    pub fn first_visible_run(&self) -> Option<&Run> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .find(|r| !r.text.trim().is_empty())
    }

    /// At most `max_chars` characters of the text, with line breaks folded
    /// into spaces.
    pub fn preview(&self, max_chars: usize) -> String {
        self.text()
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .take(max_chars)
            .collect::<String>()
            .trim()
            .to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text().trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> TextFrame {
        TextFrame {
            paragraphs: vec![
                Paragraph {
                    level: 0,
                    runs: vec![Run {
                        text: "  ".into(),
                        ..Default::default()
                    }],
                },
                Paragraph {
                    level: 1,
                    runs: vec![
                        Run {
                            text: "Brand ".into(),
                            font_name: Some("Montserrat".into()),
                            size_pt: Some(18.0),
                            ..Default::default()
                        },
                        Run {
                            text: "guidelines".into(),
                            ..Default::default()
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_text_and_preview() {
        let frame = frame();
        assert_eq!(frame.text(), "  \nBrand guidelines");
        assert_eq!(frame.preview(9), "Brand");
        assert!(!frame.is_empty());
        assert!(TextFrame::default().is_empty());
    }

    #[test]
    fn test_first_visible_run_skips_blank_runs() {
        let frame = frame();
        let run = frame.first_visible_run().unwrap();
        assert_eq!(run.font_name.as_deref(), Some("Montserrat"));
        assert_eq!(run.size_pt, Some(18.0));
    }
}
