use serde::{Deserialize, Serialize};

const PREVIEW_BUDGET_LINES: u32 = 15;
const CHARS_PER_LINE: u32 = 80;
const MEDIA_BLOCK_LINES: u32 = 8;
const CODE_LINE_FACTOR: f32 = 1.5;
const MAX_LEADING_MEDIA: usize = 2;

/// Outcome of one preview computation. `html` is the input with the cut
/// marker inserted, removed or repositioned; nothing else is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub html: String,
    /// The first block of the preview holds more flat media than allowed.
    /// Callers are expected to reject the submission.
    pub top_too_heavy: bool,
    /// The author's cut kept more content than the engine would have, so
    /// the marker was moved. Callers surface this as a warning only.
    pub user_cut_too_large: bool,
}

/// Calibration for cut placement, in abstract "visual line" units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Preview size target; the cut lands on the block that reaches it.
    pub budget_lines: u32,
    /// Assumed width of one rendered prose line.
    pub chars_per_line: u32,
    /// Flat cost of an atomic media block, whatever its internal markup.
    pub media_lines: u32,
    /// Monospace content renders denser than prose; scales the line count
    /// of `pre`/`code` blocks.
    pub code_line_factor: f32,
    /// Flat media allowed in the first preview block before the entry
    /// counts as top-heavy.
    pub max_leading_media: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            budget_lines: PREVIEW_BUDGET_LINES,
            chars_per_line: CHARS_PER_LINE,
            media_lines: MEDIA_BLOCK_LINES,
            code_line_factor: CODE_LINE_FACTOR,
            max_leading_media: MAX_LEADING_MEDIA,
        }
    }
}
