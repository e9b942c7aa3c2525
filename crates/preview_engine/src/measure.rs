use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::{ElementRef, Html};

use crate::types::PreviewOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Image,
    Attachment,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Preformatted,
    Media(MediaKind),
    Text,
}

/// Classifies a top-level element by its own tag and classes, never a mix
/// of rules.
pub(crate) fn classify(element: &Element) -> BlockKind {
    match element.name() {
        "pre" | "code" => BlockKind::Preformatted,
        _ => media_kind(element)
            .map(BlockKind::Media)
            .unwrap_or(BlockKind::Text),
    }
}

fn media_kind(element: &Element) -> Option<MediaKind> {
    for class in element.classes() {
        match class {
            "image" => return Some(MediaKind::Image),
            "attach" => return Some(MediaKind::Attachment),
            "ez-player" | "ez-block" => return Some(MediaKind::Video),
            _ => {}
        }
    }
    (element.name() == "img").then_some(MediaKind::Image)
}

/// Estimated rendered height of one top-level block, in line units.
///
/// Preformatted blocks count their literal line breaks, scaled because
/// monospace lines run denser than prose. Atomic media costs a flat
/// thumbnail footprint. Everything else divides its recursive text length
/// by the assumed line width. Minimum one line in every case.
pub(crate) fn block_weight(block_html: &str, options: &PreviewOptions) -> u32 {
    let fragment = Html::parse_fragment(block_html);
    let root = fragment.root_element();
    let kind = root
        .children()
        .find_map(ElementRef::wrap)
        .map(|el| classify(el.value()))
        .unwrap_or(BlockKind::Text);

    let weight = match kind {
        BlockKind::Media(_) => options.media_lines,
        BlockKind::Preformatted => {
            let breaks: usize = root.text().map(|t| t.matches('\n').count()).sum();
            (breaks as f32 * options.code_line_factor).ceil() as u32
        }
        BlockKind::Text => {
            let chars: usize = root.text().map(|t| t.chars().count()).sum();
            let per_line = options.chars_per_line.max(1) as usize;
            chars.div_ceil(per_line) as u32
        }
    };
    weight.max(1)
}

/// Flat media (images and attachment links) inside one block. Media
/// elements are atomic: nothing inside an already-counted wrapper is
/// visited, so a wrapped image counts once. Embedded video is media for
/// weighting but never flat.
pub(crate) fn leading_media_count(block_html: &str) -> usize {
    let fragment = Html::parse_fragment(block_html);
    let mut count = 0;
    for child in fragment.root_element().children() {
        visit_media(child, &mut count);
    }
    count
}

fn visit_media(node: NodeRef<'_, Node>, count: &mut usize) {
    if let Node::Element(element) = node.value() {
        if let Some(kind) = media_kind(element) {
            if matches!(kind, MediaKind::Image | MediaKind::Attachment) {
                *count += 1;
            }
            return;
        }
    }
    for child in node.children() {
        visit_media(child, count);
    }
}
