//! Entity reference decoding.
//!
//! Handles the five XML entities, numeric character references, and the
//! HTML named entities that commonly show up in translated strings.

use std::borrow::Cow;

/// Decode the body of an entity reference (the part between `&` and `;`).
///
/// Unknown or invalid references are returned literally as `&name;`.
pub(crate) fn decode_entity(entity: &str) -> String {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => numeric.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map_or_else(|| format!("&{entity};"), |c| c.to_string());
    }
    named_entity(entity).map_or_else(|| format!("&{entity};"), str::to_owned)
}

/// Decode every `&...;` reference in `raw`, as [`decode_entity`] does for text.
pub(crate) fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let body = &rest[start + 1..];
        let Some(end) = body.find(';') else {
            out.push_str(&rest[start..]);
            return Cow::Owned(out);
        };
        out.push_str(&decode_entity(&body[..end]));
        rest = &body[end + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        // XML
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",

        // Punctuation
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "middot" => "\u{00b7}",
        "iexcl" => "\u{00a1}",
        "iquest" => "\u{00bf}",

        // Arrows
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "harr" => "\u{2194}",
        "uarr" => "\u{2191}",
        "darr" => "\u{2193}",

        // Math
        "le" => "\u{2264}",
        "ge" => "\u{2265}",
        "ne" => "\u{2260}",
        "plusmn" => "\u{00b1}",
        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",
        "deg" => "\u{00b0}",

        // Legal
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "sect" => "\u{00a7}",
        "para" => "\u{00b6}",

        // Currency
        "euro" => "\u{20ac}",
        "pound" => "\u{00a3}",
        "yen" => "\u{00a5}",
        "cent" => "\u{00a2}",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_entities() {
        assert_eq!(decode_entity("lt"), "<");
        assert_eq!(decode_entity("amp"), "&");
        assert_eq!(decode_entity("quot"), "\"");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode_entity("#65"), "A");
        assert_eq!(decode_entity("#x1F600"), "\u{1F600}");
        assert_eq!(decode_entity("#X41"), "A");
    }

    #[test]
    fn test_invalid_numeric_reference_is_literal() {
        assert_eq!(decode_entity("#xD800"), "&#xD800;");
        assert_eq!(decode_entity("#abc"), "&#abc;");
    }

    #[test]
    fn test_html_named_entities() {
        assert_eq!(decode_entity("nbsp"), "\u{00a0}");
        assert_eq!(decode_entity("mdash"), "\u{2014}");
        assert_eq!(decode_entity("euro"), "\u{20ac}");
    }

    #[test]
    fn test_unknown_entity_is_literal() {
        assert_eq!(decode_entity("unknown"), "&unknown;");
    }

    #[test]
    fn test_decode_entities_mixes_xml_and_html() {
        assert_eq!(decode_entities("x&nbsp;y&amp;z&#65;"), "x\u{00a0}y&zA");
    }

    #[test]
    fn test_decode_entities_keeps_unknown_and_unterminated() {
        assert_eq!(decode_entities("a&bogus;b"), "a&bogus;b");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
    }

    #[test]
    fn test_decode_entities_borrows_plain_values() {
        assert!(matches!(decode_entities("plain"), Cow::Borrowed("plain")));
    }
}
