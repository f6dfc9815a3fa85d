//! Attribute lookups on quick-xml start tags.

use super::escape::unescape_xml;
use quick_xml::events::BytesStart;

/// Value of the attribute whose qualified name is exactly `name`,
/// entity-decoded.
pub fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(unescape_xml))
}

/// Integer attribute; absent or malformed values yield `None`.
pub fn attr_i64(e: &BytesStart<'_>, name: &[u8]) -> Option<i64> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| atoi_simd::parse::<i64, false, false>(&attr.value).ok())
}

/// Namespaced relationship id (`r:id`, whatever the prefix is bound to).
pub fn rel_id_attr(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id")
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let e = BytesStart::from_content(
            r#"p:sldId id="256" r:id="rId7" name="A &amp; B" cx="-12""#,
            7,
        );
        assert_eq!(attr_i64(&e, b"id"), Some(256));
        assert_eq!(attr_i64(&e, b"cx"), Some(-12));
        assert_eq!(attr_i64(&e, b"name"), None);
        assert_eq!(attr_value(&e, b"name").as_deref(), Some("A & B"));
        assert_eq!(rel_id_attr(&e).as_deref(), Some("rId7"));
        assert_eq!(attr_value(&e, b"missing"), None);
    }
}
