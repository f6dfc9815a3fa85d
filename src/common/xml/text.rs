//! Character data helpers for quick-xml event loops.

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesText};

/// Append a text event to `out`. Text that is not valid UTF-8 is replaced
/// lossily.
pub fn push_text(out: &mut String, e: &BytesText<'_>) {
    out.push_str(&String::from_utf8_lossy(e.as_ref()));
}

/// Append the character an entity or character reference stands for.
/// Unknown entities are kept verbatim.
pub fn push_general_ref(out: &mut String, e: &BytesRef<'_>) {
    if let Ok(Some(ch)) = e.resolve_char_ref() {
        out.push(ch);
        return;
    }
    let name = String::from_utf8_lossy(e.as_ref());
    match resolve_predefined_entity(&name) {
        Some(resolved) => out.push_str(resolved),
        None => {
            out.push('&');
            out.push_str(&name);
            out.push(';');
        },
    }
}
