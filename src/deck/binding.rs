//! Layout resolution: which layout hosts each slide kind, and which of its
//! placeholder slots receives each piece of text.

use crate::common::{Error, Result};
use crate::deck::config::{LayoutBinding, LayoutRef};
use crate::deck::slides::SlideKind;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::pptx::shapes::base::PlaceholderType;
use crate::ooxml::pptx::slide::{LayoutPlaceholder, SlideLayout};
use std::collections::BTreeMap;
use std::fmt;

/// Semantic role of a text region in a templated slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Title,
    Subtitle,
    PrimaryBody,
    SecondaryBody,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::Subtitle => "subtitle",
            Role::PrimaryBody => "primary_body",
            Role::SecondaryBody => "secondary_body",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layout chosen for a slide kind, with its roles mapped to slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundLayout {
    pub index: usize,
    pub name: String,
    pub partname: PackURI,
    slots: BTreeMap<Role, LayoutPlaceholder>,
}

impl BoundLayout {
    fn new(layout: &SlideLayout) -> Self {
        let mut slots = BTreeMap::new();

        let title = layout.center_title_slot().or_else(|| layout.title_slot());
        if let Some(ph) = title {
            slots.insert(Role::Title, ph.clone());
        }
        if let Some(ph) = layout.subtitle_slot() {
            slots.insert(Role::Subtitle, ph.clone());
        }
        let bodies = layout.body_slots();
        if let Some(ph) = bodies.first() {
            slots.insert(Role::PrimaryBody, (*ph).clone());
        }
        if let Some(ph) = bodies.get(1) {
            slots.insert(Role::SecondaryBody, (*ph).clone());
        }

        for ph in &layout.placeholders {
            if let PlaceholderType::Other(kind) = &ph.kind {
                log::warn!(
                    "layout '{}' has placeholder '{}' of unknown type '{}'",
                    layout.name,
                    ph.name,
                    kind
                );
            }
        }

        Self {
            index: layout.index,
            name: layout.name.clone(),
            partname: layout.partname.clone(),
            slots,
        }
    }

    /// Slot for `role`, if the layout has one.
    pub fn slot(&self, role: Role) -> Option<&LayoutPlaceholder> {
        self.slots.get(&role)
    }

    /// Slot for `role`, or [`Error::PlaceholderNotFound`].
    pub fn require(&self, role: Role) -> Result<&LayoutPlaceholder> {
        self.slot(role).ok_or_else(|| Error::PlaceholderNotFound {
            layout: self.name.clone(),
            role: role.as_str(),
        })
    }
}

/// Whether `layout` has the slots a `kind` slide needs.
pub fn fits(kind: SlideKind, layout: &SlideLayout) -> bool {
    let has_title = layout.title_slot().is_some();
    let bodies = layout.body_slots().len();
    match kind {
        SlideKind::Title => {
            layout.center_title_slot().is_some() || (has_title && layout.subtitle_slot().is_some())
        },
        SlideKind::Content => has_title && bodies >= 1,
        SlideKind::TwoColumn => has_title && bodies >= 2,
        SlideKind::Closing => !has_title && bodies == 0,
    }
}

/// Pick the layout for `kind`.
///
/// An explicit binding wins. Otherwise the first fitting layout is taken;
/// content slides prefer a layout with exactly one body slot over one with
/// several.
pub fn resolve(kind: SlideKind, layouts: &[SlideLayout], binding: &LayoutBinding) -> Result<BoundLayout> {
    let layout = match binding.get(kind) {
        Some(LayoutRef::Index(index)) => layouts.get(*index).ok_or(Error::LayoutIndexOutOfRange {
            index: *index,
            count: layouts.len(),
        })?,
        Some(LayoutRef::Name(name)) => layouts
            .iter()
            .find(|l| l.name == *name)
            .ok_or_else(|| Error::LayoutNotFound {
                kind: kind.as_str(),
                reason: format!("no layout is named '{}'", name),
            })?,
        None => {
            let preferred = match kind {
                SlideKind::Content => layouts
                    .iter()
                    .find(|l| l.title_slot().is_some() && l.body_slots().len() == 1),
                _ => None,
            };
            preferred
                .or_else(|| layouts.iter().find(|l| fits(kind, l)))
                .ok_or_else(|| Error::LayoutNotFound {
                    kind: kind.as_str(),
                    reason: requirement(kind).to_string(),
                })?
        },
    };

    log::debug!("{} slides use layout [{}] '{}'", kind, layout.index, layout.name);
    Ok(BoundLayout::new(layout))
}

fn requirement(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Title => "needs a centre-title slot, or a title and a subtitle slot",
        SlideKind::Content => "needs a title slot and a body slot",
        SlideKind::TwoColumn => "needs a title slot and two body slots",
        SlideKind::Closing => "needs a layout without title or body slots",
    }
}
