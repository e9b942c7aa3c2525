use crate::split::CUT_MARKER;

/// Byte range of one top-level element in the cleaned stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

/// Where the author's cut marker sat before it was stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorCut {
    /// Offset of the removed marker in the cleaned stream.
    pub offset: usize,
    /// The removed unit carried a trailing newline.
    pub owns_newline: bool,
}

#[derive(Debug)]
pub(crate) struct StrippedHtml {
    pub working: String,
    pub author_cut: Option<AuthorCut>,
}

/// Removes every cut marker unit (the token plus at most one newline right
/// after it), remembering where the first one sat. A valid body carries at
/// most one marker, but stripping them all keeps the at-most-one output
/// guarantee for any input.
pub(crate) fn strip_markers(html: &str) -> StrippedHtml {
    let mut working = String::with_capacity(html.len());
    let mut author_cut = None;
    let mut i = 0;
    while let Some(found) = html[i..].find(CUT_MARKER) {
        let at = i + found;
        working.push_str(&html[i..at]);
        let mut next = at + CUT_MARKER.len();
        let owns_newline = html.as_bytes().get(next) == Some(&b'\n');
        if owns_newline {
            next += 1;
        }
        if author_cut.is_none() {
            author_cut = Some(AuthorCut { offset: working.len(), owns_newline });
        }
        i = next;
    }
    working.push_str(&html[i..]);
    StrippedHtml { working, author_cut }
}

// Elements with no content model; the open tag is the whole element.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// Elements whose content is raw text, never parsed as markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Finds the byte spans of the top-level elements of an HTML fragment.
///
/// One forward pass tracking element depth. Comments, doctypes, quoted
/// attribute values, void and self-closed elements and raw-text content are
/// skipped structurally. A stray close tag at the top level is ignored
/// rather than underflowing, and an element still open at the end of input
/// closes its block there. Text runs between top-level elements belong to
/// no block.
pub(crate) fn scan_blocks(html: &str) -> Vec<BlockSpan> {
    let bytes = html.as_bytes();
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut block_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if bytes[i..].starts_with(b"<!--") {
            i = skip_comment(bytes, i);
        } else if bytes[i..].starts_with(b"<!") || bytes[i..].starts_with(b"<?") {
            i = skip_past_gt(bytes, i);
        } else if bytes[i..].starts_with(b"</") {
            let end = skip_past_gt(bytes, i);
            if depth > 0 {
                depth -= 1;
                if depth == 0 {
                    blocks.push(BlockSpan { start: block_start, end });
                }
            }
            i = end;
        } else if bytes.get(i + 1).is_some_and(|b| b.is_ascii_alphabetic()) {
            let tag = read_open_tag(bytes, i);
            if depth == 0 {
                block_start = i;
            }
            if tag.self_closing || VOID_ELEMENTS.contains(&tag.name.as_str()) {
                if depth == 0 {
                    blocks.push(BlockSpan { start: block_start, end: tag.end });
                }
                i = tag.end;
            } else {
                depth += 1;
                i = tag.end;
                if RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
                    i = find_raw_text_end(bytes, tag.end, &tag.name);
                }
            }
        } else {
            // a lone '<' in text
            i += 1;
        }
    }

    if depth > 0 {
        blocks.push(BlockSpan { start: block_start, end: bytes.len() });
    }
    blocks
}

struct OpenTag {
    name: String,
    end: usize,
    self_closing: bool,
}

fn read_open_tag(bytes: &[u8], start: usize) -> OpenTag {
    let mut i = start + 1;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    let name = String::from_utf8_lossy(&bytes[start + 1..i]).to_ascii_lowercase();

    let mut quote: Option<u8> = None;
    let mut prev = 0u8;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => {
                    return OpenTag { name, end: i + 1, self_closing: prev == b'/' };
                }
                _ => {}
            },
        }
        if !b.is_ascii_whitespace() {
            prev = b;
        }
        i += 1;
    }
    OpenTag { name, end: bytes.len(), self_closing: false }
}

fn skip_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 4;
    while i + 3 <= bytes.len() {
        if &bytes[i..i + 3] == b"-->" {
            return i + 3;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_past_gt(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == b'>' {
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

fn find_raw_text_end(bytes: &[u8], from: usize, name: &str) -> usize {
    let name = name.as_bytes();
    let mut i = from;
    while i + 2 + name.len() <= bytes.len() {
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2..i + 2 + name.len()].eq_ignore_ascii_case(name)
        {
            return i;
        }
        i += 1;
    }
    bytes.len()
}
