//! Deckhand - branded slide decks for PowerPoint (.pptx)
//!
//! This library renders an ordered list of declarative slide specifications
//! into a `.pptx` presentation, either on a blank canvas or into the layouts
//! of an existing template, and inspects templates to show what they offer.
//!
//! # Features
//!
//! - **Canvas rendering**: title, content, two-column and closing slides laid
//!   out from the canvas size and coloured from a brand palette
//! - **Template rendering**: text written into a template's placeholder slots,
//!   with layouts chosen by name, index or slot shape
//! - **Template inspection**: slide size, layouts, placeholders, backgrounds,
//!   text styling and theme colours of any `.pptx`
//! - **OOXML layer**: OPC package reading and writing with PresentationML
//!   parts, shape trees, fills and themes
//!
//! # Example - Rendering a deck
//!
//! ```no_run
//! use deckhand::deck::{Canvas, Deck, Palette, Typography};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = Deck::canvas(Canvas::default(), Palette::brand(), Typography::default())?;
//! deck.render_title_slide("State of Security 2026", Some("Building Tomorrow's Security"))?;
//! deck.render_content_slide("Agenda", &["Year in review".into(), "   • Highlights".into()])?;
//! deck.render_closing_slide("Questions & Discussion", None)?;
//! deck.save("townhall.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a template
//!
//! ```no_run
//! use deckhand::deck::inspect_template;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = inspect_template("brand-template.pptx")?;
//! for layout in &report.layouts {
//!     println!("[{}] {} ({} placeholders)", layout.index, layout.name, layout.placeholders.len());
//! }
//! # Ok(())
//! # }
//! ```

/// Shared error type, colours, units and XML helpers
pub mod common;

/// Slide specifications, palette, deck files, rendering and inspection
///
/// This is the front door of the crate: a [`deck::Deck`] turns
/// [`deck::SlideSpec`]s into slides and saves them.
pub mod deck;

/// OOXML (Office Open XML) package support
///
/// This module provides the OPC container and the PresentationML reader and
/// writer the deck renderer is built on.
pub mod ooxml;
