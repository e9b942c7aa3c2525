/// Marker separating the preview portion of an entry body from the rest.
/// Inert when rendered; any comment-ignoring HTML consumer drops it.
pub const CUT_MARKER: &str = "<!--cut-->";

/// Splits a stored entry body at the cut marker, for rendering a listing
/// view against a full-entry view.
///
/// Returns the preview portion and, when a marker is present, the
/// remainder with the marker unit (the token plus the newline it owns)
/// removed. Both halves borrow from the input.
pub fn split_at_cut(html: &str) -> (&str, Option<&str>) {
    match html.find(CUT_MARKER) {
        Some(at) => {
            let mut rest = &html[at + CUT_MARKER.len()..];
            if let Some(stripped) = rest.strip_prefix('\n') {
                rest = stripped;
            }
            (&html[..at], Some(rest))
        }
        None => (html, None),
    }
}
