// src/core/html.rs
// Low-level tag scanning. Deliberately naive: no DOM, just a forward walk over
// `<...>` tokens that is tolerant of attribute quoting and case.

/// One markup token found by [`next_tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Lowercased ASCII tag name without the leading `/` ("td", "table", ...).
    pub name: String,
    pub is_close: bool,
    /// Raw text between the name and `>`.
    pub attrs: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
}

/// Find the next tag at or after `from`. Comments and doctype/processing
/// instructions are skipped. Returns `None` when no complete tag remains.
pub fn next_tag(s: &str, from: usize) -> Option<Tag<'_>> {
    let bytes = s.as_bytes();
    let mut i = from;
    loop {
        let lt = bytes.get(i..)?.iter().position(|&c| c == b'<')? + i;

        if s[lt..].starts_with("<!--") {
            i = s[lt + 4..].find("-->").map(|e| lt + 4 + e + 3)?;
            continue;
        }
        if matches!(bytes.get(lt + 1), Some(b'!') | Some(b'?')) {
            i = s[lt..].find('>').map(|e| lt + e + 1)?;
            continue;
        }

        let (is_close, name_start) = match bytes.get(lt + 1) {
            Some(b'/') => (true, lt + 2),
            _ => (false, lt + 1),
        };
        if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
            // "<" followed by something that isn't a tag name; treat as text
            i = lt + 1;
            continue;
        }

        let gt = find_tag_end(bytes, name_start)?;
        let body = &s[name_start..gt];
        let name_end = body
            .bytes()
            .position(|c| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());

        return Some(Tag {
            name: body[..name_end].to_ascii_lowercase(),
            is_close,
            attrs: &body[name_end..],
            start: lt,
            end: gt + 1,
        });
    }
}

/// Position of the `>` closing a tag opener, skipping quoted attribute values.
fn find_tag_end(bytes: &[u8], mut i: usize) -> Option<usize> {
    let mut in_s = false; // '
    let mut in_d = false; // "
    while i < bytes.len() {
        match bytes[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Value of attribute `name` in a tag's attribute text. Quotes optional.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = attrs.to_ascii_lowercase();
    let needle = format!("{}=", name.to_ascii_lowercase());
    let mut search_from = 0;
    while let Some(rel) = lc[search_from..].find(&needle) {
        let pos = search_from + rel;
        search_from = pos + needle.len();
        // must be a whole attribute name
        let boundary = pos == 0 || lc.as_bytes()[pos - 1].is_ascii_whitespace();
        if !boundary {
            continue;
        }
        let val = attrs[pos + needle.len()..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[start_off..].find(q).map(|e| start_off + e),
            None => val.find(|c: char| c.is_ascii_whitespace() || c == '/'),
        }
        .unwrap_or(val.len());
        return Some(&val[start_off..end]);
    }
    None
}
