use crate::blocks::{scan_blocks, strip_markers, AuthorCut, BlockSpan, StrippedHtml};
use crate::measure::{block_weight, leading_media_count};
use crate::split::CUT_MARKER;
use crate::types::{Preview, PreviewOptions};

/// Places the preview cut in a rendered entry body using the default
/// calibration. See [`create_preview_with`].
pub fn create_preview(html: &str) -> Preview {
    create_preview_with(html, &PreviewOptions::default())
}

/// Decides where a rendered entry body splits into a listing preview and
/// the full text, and splices the cut marker there.
///
/// The body is returned byte-for-byte except for marker insertion, removal
/// or repositioning. An author-placed marker wins as long as it keeps no
/// more blocks than the engine would have kept; otherwise it is moved to
/// the computed spot and `user_cut_too_large` reports the override. Bodies
/// short enough to show in full come back without any marker. The
/// operation cannot fail and re-running it on its own output changes
/// nothing.
pub fn create_preview_with(html: &str, options: &PreviewOptions) -> Preview {
    let StrippedHtml { working, author_cut } = strip_markers(html);
    let blocks = scan_blocks(&working);

    let candidate = auto_cut(&working, &blocks, options);
    let author = author_cut.and_then(|cut| place_author_cut(&blocks, cut));

    let mut user_cut_too_large = false;
    let splice = match (author, candidate) {
        (None, None) => None,
        (None, Some(keep)) => Some(Splice::auto(&working, &blocks, keep)),
        (Some(author), None) => Some(Splice::author(author)),
        (Some(author), Some(keep)) => {
            if author.blocks_before <= keep {
                Some(Splice::author(author))
            } else {
                log::debug!(
                    "author cut keeps {} blocks, engine keeps {keep}; relocating",
                    author.blocks_before
                );
                user_cut_too_large = true;
                Some(Splice::auto(&working, &blocks, keep))
            }
        }
    };

    let top_too_heavy = blocks
        .first()
        .is_some_and(|b| leading_media_count(&working[b.start..b.end]) > options.max_leading_media);

    let html = match splice {
        None => working,
        Some(splice) => splice.apply(&working),
    };

    Preview {
        html,
        top_too_heavy,
        user_cut_too_large,
    }
}

/// Greedy threshold scan: the cut lands right after the first block whose
/// cumulative weight reaches the budget. Blocks are never split, so a
/// single oversized block still ends up in the preview whole. Returns how
/// many blocks the preview keeps, or `None` when everything fits.
fn auto_cut(working: &str, blocks: &[BlockSpan], options: &PreviewOptions) -> Option<usize> {
    let mut total = 0u32;
    for (index, block) in blocks.iter().enumerate() {
        total = total.saturating_add(block_weight(&working[block.start..block.end], options));
        if total >= options.budget_lines {
            log::debug!(
                "cut after block {} of {} (cumulative weight {total})",
                index + 1,
                blocks.len()
            );
            return Some(index + 1);
        }
    }
    None
}

#[derive(Debug, Clone, Copy)]
struct AuthorPlacement {
    offset: usize,
    owns_newline: bool,
    blocks_before: usize,
}

/// Validates the author's marker position. An offset that landed inside a
/// block snaps to that block's end, so markers only ever sit between
/// top-level siblings. Markers with no block before them (an empty preview
/// is meaningless) or no block after them (nothing would be hidden) are
/// discarded.
fn place_author_cut(blocks: &[BlockSpan], cut: AuthorCut) -> Option<AuthorPlacement> {
    let offset = blocks
        .iter()
        .find(|b| b.start < cut.offset && cut.offset < b.end)
        .map(|b| b.end)
        .unwrap_or(cut.offset);
    let blocks_before = blocks.iter().filter(|b| b.end <= offset).count();
    let blocks_after = blocks.iter().filter(|b| b.start >= offset).count();
    if blocks_before == 0 || blocks_after == 0 {
        return None;
    }
    Some(AuthorPlacement {
        offset,
        owns_newline: cut.owns_newline,
        blocks_before,
    })
}

/// A pending marker insertion: byte offset plus whether the marker gets a
/// line of its own.
#[derive(Debug, Clone, Copy)]
struct Splice {
    at: usize,
    own_line: bool,
}

impl Splice {
    /// After the last kept block, stepping past the newline that separates
    /// it from the rest so the marker lands on its own line in
    /// line-structured output.
    fn auto(working: &str, blocks: &[BlockSpan], keep: usize) -> Self {
        let base = blocks[keep - 1].end;
        let own_line = working.as_bytes().get(base) == Some(&b'\n');
        Self {
            at: if own_line { base + 1 } else { base },
            own_line,
        }
    }

    fn author(placement: AuthorPlacement) -> Self {
        Self {
            at: placement.offset,
            own_line: placement.owns_newline,
        }
    }

    fn apply(&self, working: &str) -> String {
        let mut out = String::with_capacity(working.len() + CUT_MARKER.len() + 1);
        out.push_str(&working[..self.at]);
        out.push_str(CUT_MARKER);
        if self.own_line {
            out.push('\n');
        }
        out.push_str(&working[self.at..]);
        out
    }
}
