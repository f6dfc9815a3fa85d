//! Slide specifications as they appear in a deck file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bullet glyph that marks a nested line when it follows leading whitespace.
pub const BULLET: char = '\u{2022}';

/// One slide of a deck, tagged by `kind` in YAML.
///
/// ```yaml
/// - kind: content
///   title: Agenda
///   body:
///     - Year in review
///     - "   • Highlights"
///     - ""
///     - Q&A
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    Title {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    Content {
        title: String,
        #[serde(default)]
        body: Vec<String>,
    },
    TwoColumn {
        title: String,
        #[serde(default)]
        left: Vec<String>,
        #[serde(default)]
        right: Vec<String>,
    },
    Closing {
        text: String,
        /// Contact line under the closing message
        #[serde(default, skip_serializing_if = "Option::is_none")]
        secondary: Option<String>,
    },
}

impl SlideSpec {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideSpec::Title { .. } => SlideKind::Title,
            SlideSpec::Content { .. } => SlideKind::Content,
            SlideSpec::TwoColumn { .. } => SlideKind::TwoColumn,
            SlideSpec::Closing { .. } => SlideKind::Closing,
        }
    }

    /// The main line of the slide: its title, or the closing message.
    pub fn title(&self) -> &str {
        match self {
            SlideSpec::Title { title, .. }
            | SlideSpec::Content { title, .. }
            | SlideSpec::TwoColumn { title, .. } => title,
            SlideSpec::Closing { text, .. } => text,
        }
    }
}

/// The four slide shapes a deck can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Content,
    TwoColumn,
    Closing,
}

impl SlideKind {
    pub const ALL: [SlideKind; 4] = [
        SlideKind::Title,
        SlideKind::Content,
        SlideKind::TwoColumn,
        SlideKind::Closing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
            SlideKind::TwoColumn => "two-column",
            SlideKind::Closing => "closing",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A body line with its indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLine<'a> {
    pub text: &'a str,
    pub level: u32,
}

impl<'a> BodyLine<'a> {
    /// Classify a line. Leading whitespace followed by [`BULLET`] makes a
    /// level-1 line whose text starts at the glyph; anything else is level 0
    /// and kept verbatim.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if trimmed.len() < line.len() && trimmed.starts_with(BULLET) {
            BodyLine {
                text: trimmed,
                level: 1,
            }
        } else {
            BodyLine { text: line, level: 0 }
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
