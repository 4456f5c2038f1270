// src/core/html.rs
// Case-insensitive tag scanning over raw markup. No DOM: blocks are found by
// their opening/closing tags and cell text is read straight out of them.
// Lowercasing only touches ASCII, so byte offsets in the lowercased copy
// line up with the input.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// `<tr>`, `<tr class=..>` but not `<track>`.
fn is_tag_at(lc: &str, at: usize, tag: &str) -> bool {
    let b = lc.as_bytes();
    let name_end = at + 1 + tag.len();
    b.get(at) == Some(&b'<')
        && lc.get(at + 1..name_end) == Some(tag)
        && matches!(b.get(name_end), Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n'))
}

fn find_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("<", tag);
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        if is_tag_at(lc, at, tag) {
            return Some(at);
        }
        pos = at + pat.len();
    }
    None
}

/// `</tr>`, `</tr >` but not `</track>`.
fn find_close(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("</", tag);
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        pos = at + pat.len();
        if matches!(lc.as_bytes().get(pos), Some(b'>' | b' ' | b'\t' | b'\r' | b'\n')) {
            return Some(at);
        }
    }
    None
}

fn next_block(lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_tag(lc, tag, from)?;
    let open_end = lc[start..].find('>')? + start + 1;
    let close_start = find_close(lc, tag, open_end)?;
    let end = lc[close_start..]
        .find('>')
        .map_or(lc.len(), |i| close_start + i + 1);
    Some((start, end))
}

/// End offset of the close tag matching the element opened just before `open_end`,
/// counting nested elements of the same name. Runs to the end of `lc` if unclosed.
fn matching_close_end(lc: &str, tag: &str, open_end: usize) -> usize {
    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_open = find_tag(lc, tag, pos);
        let Some(close) = find_close(lc, tag, pos) else {
            return lc.len();
        };
        match next_open {
            Some(open) if open < close => {
                depth += 1;
                pos = open + 1;
            }
            _ => {
                let close_end = lc[close..].find('>').map_or(lc.len(), |i| close + i + 1);
                depth -= 1;
                if depth == 0 {
                    return close_end;
                }
                pos = close_end;
            }
        }
    }
}

/// Next complete `<tag ...>...</tag>` block at or after `from`, as byte offsets
/// covering the whole block. Same-name nesting is not tracked.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    next_block(&to_lower(s), &to_lower(tag), from)
}

/// Every top-level `<tag>` block in `s`, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let tag = to_lower(tag);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = next_block(&lc, &tag, pos) {
        out.push(&s[start..end]);
        pos = end;
    }
    out
}

/// The whole element carrying `id`, from its opening tag through its matching
/// closing tag. Accepts `id="x"`, `id='x'` and unquoted `id=x`.
pub fn element_by_id<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let id = to_lower(id);
    let patterns = [
        (format!("id=\"{id}\""), true),
        (format!("id='{id}'"), true),
        (format!("id={id}"), false),
    ];

    for (pat, quoted) in &patterns {
        let mut pos = 0usize;
        while let Some(rel) = lc[pos..].find(pat.as_str()) {
            let at = pos + rel;
            pos = at + pat.len();

            let bytes = lc.as_bytes();
            let left_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
            let right_ok = *quoted
                || matches!(bytes.get(pos), Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n'));
            if !(left_ok && right_ok) {
                continue;
            }
            let tag_start = lc[..at].rfind('<')?;
            let name_end = lc[tag_start + 1..]
                .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                .map_or(lc.len(), |i| tag_start + 1 + i);
            let name = &lc[tag_start + 1..name_end];
            let open_end = lc[at..].find('>').map_or(lc.len(), |i| at + i + 1);
            let end = matching_close_end(&lc, name, open_end);
            return Some(&doc[tag_start..end]);
        }
    }
    None
}

/// Inner markup of the first `<tag>` block in `s`.
pub fn first_block_inner<'a>(s: &'a str, tag: &str) -> Option<&'a str> {
    let (start, end) = next_tag_block_ci(s, tag, 0)?;
    Some(inner_after_open_tag(&s[start..end]))
}

/// Given a complete tag block like `<td ...>INNER</td>`, return INNER
/// (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return &block[oe + 1..cs];
            }
        }
    }
    ""
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of a cell block: tags stripped, entities decoded, whitespace collapsed.
pub fn cell_text(block: &str) -> String {
    let stripped = strip_tags(inner_after_open_tag(block));
    normalize_ws(&normalize_entities(&stripped))
}

/// Text of every `<td>` in a `<tr>` block.
pub fn row_cells(tr: &str) -> Vec<String> {
    tag_blocks_ci(tr, "td").into_iter().map(cell_text).collect()
}
