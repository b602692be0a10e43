//! Cursor pagination via the `Link` response header.
//!
//! Shopify's REST Admin API paginates with opaque cursors carried in the
//! `Link` header of each response. The cursor is encoded as a `page_info`
//! query parameter in the linked URL.
//!
//! ## Header format
//!
//! Single next link:
//! ```text
//! <https://shop.com/admin/api/2026-01/products.json?limit=20&page_info=CURSOR>; rel="next"
//! ```
//!
//! Combined previous and next:
//! ```text
//! <https://shop.com/.../products.json?page_info=PREV>; rel="previous",
//! <https://shop.com/.../products.json?page_info=NEXT>; rel="next"
//! ```

/// Query parameter holding the pagination cursor.
pub const PAGE_INFO_PARAM: &str = "page_info";

/// Forward/backward cursors decoded from one `Link` header.
///
/// Presence of a cursor is the sole "has more pages" signal in that
/// direction. Cursors are opaque: never parse or construct one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursors {
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PageCursors {
    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Parses a `Link` header value into per-direction cursors.
///
/// A missing header yields empty cursors. Malformed individual entries
/// (no angle-bracket URL, no recognized `rel`, no `page_info` parameter)
/// are skipped without aborting the rest of the parse.
#[must_use]
pub fn parse_link_header(link_header: Option<&str>) -> PageCursors {
    let mut cursors = PageCursors::default();
    let Some(header) = link_header else {
        return cursors;
    };

    // Split on "," to separate individual link directives.
    // Each segment looks like: `<URL>; rel="next"` (possibly with leading whitespace).
    for segment in header.split(',') {
        let segment = segment.trim();

        let Some(url) = extract_angle_bracket_url(segment) else {
            continue;
        };
        let Some(cursor) = extract_query_param(url, PAGE_INFO_PARAM) else {
            continue;
        };

        if segment.contains(r#"rel="next""#) {
            cursors.next = Some(cursor);
        } else if segment.contains(r#"rel="previous""#) {
            cursors.previous = Some(cursor);
        }
    }

    cursors
}

/// Extracts the URL between `<` and `>` in a link directive segment.
fn extract_angle_bracket_url(segment: &str) -> Option<&str> {
    let start = segment.find('<')? + 1;
    let end = segment.find('>')?;
    if start >= end {
        return None;
    }
    segment.get(start..end)
}

/// Extracts the value of a named query parameter from a URL string.
///
/// Does not decode percent-encoded characters - Shopify cursors are
/// base64url-encoded and contain no characters that require decoding.
fn extract_query_param(url: &str, param: &str) -> Option<String> {
    let query_start = url.find('?')? + 1;
    let query = url.get(query_start..)?;

    let needle = format!("{param}=");
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix(needle.as_str()) {
            // Trim any fragment anchor that might trail the value.
            let value = value.split('#').next().unwrap_or(value);
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}
