//! HTML include-tag rendering.
//!
//! The bundling core only produces public paths; turning a path into a
//! `<script>` or `<link>` tag happens here.

use std::borrow::Cow;

use crate::asset::BundleKind;

/// Render the include tag for `path` according to the bundle kind.
#[inline]
pub fn include_tag(kind: BundleKind, path: &str) -> String {
    match kind {
        BundleKind::Js => script_tag(path),
        BundleKind::Css => link_tag(path),
    }
}

/// `<script>` tag for a JS file.
pub fn script_tag(src: &str) -> String {
    format!(
        "<script type=\"text/javascript\" src=\"{}\"></script>\n",
        escape_attr(src)
    )
}

/// `<link>` tag for a CSS file.
pub fn link_tag(href: &str) -> String {
    format!(
        "<link type=\"text/css\" rel=\"stylesheet\" href=\"{}\">\n",
        escape_attr(href)
    )
}

/// Characters that require escaping in attribute values.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS[..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
