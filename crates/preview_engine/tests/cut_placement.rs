use preview_engine::{create_preview, CUT_MARKER};
use pretty_assertions::assert_eq;

// Filler prose of an exact length.
fn text(len: usize) -> String {
    "test ".repeat(len.div_ceil(5))[..len].to_string()
}

/// Strips the marker out of `expected` and asserts the engine puts it back
/// in the same place.
fn assert_cut_restored(expected: &str) {
    let input = expected.replacen(&format!("{CUT_MARKER}\n"), "", 1);
    let preview = create_preview(&input);
    assert_eq!(preview.html, expected);
    assert!(!preview.top_too_heavy);
    assert!(!preview.user_cut_too_large);
}

#[test]
fn empty_and_whitespace_bodies_pass_through() {
    for body in ["", "\n\n"] {
        let preview = create_preview(body);
        assert_eq!(preview.html, body);
        assert!(!preview.top_too_heavy);
        assert!(!preview.user_cut_too_large);
    }
}

#[test]
fn short_bodies_get_no_cut() {
    let t = text(10);
    let body = format!("<p>{t}</p>\n<p>{t}</p>\n<p>{t}</p>\n");
    let preview = create_preview(&body);
    assert_eq!(preview.html, body);
    assert!(!preview.top_too_heavy);
    assert!(!preview.user_cut_too_large);
}

#[test]
fn cut_lands_close_to_the_budget() {
    let p = format!("<p>{}</p>", text(400));
    assert_cut_restored(&format!("{p}\n{p}\n{p}\n{CUT_MARKER}\n{p}\n{p}\n{p}\n"));
}

#[test]
fn cut_follows_a_single_long_paragraph() {
    let expected = format!(
        "<p>{}</p>\n{CUT_MARKER}\n<p>{}</p>\n<p>{}</p>\n",
        text(20 * 120),
        text(120),
        text(120)
    );
    assert_cut_restored(&expected);
}

#[test]
fn code_blocks_are_weighed_by_line_breaks() {
    let code = format!("<code>\n{}</code>", "q\n".repeat(10));
    assert_cut_restored(&format!("{code}\n{CUT_MARKER}\n{code}\n"));
}

#[test]
fn cut_follows_two_images() {
    let img = r#"<img class="image">"#;
    assert_cut_restored(&format!("{img}\n{img}\n{CUT_MARKER}\n{img}\n"));
}

#[test]
fn cut_follows_two_wrapped_images() {
    let pic = concat!(
        "<span class=\"image\" style=\"width: 100px\" data-nd-orig=\"http://example.com/image.png\">\n",
        "  <img src=\"http://example.com/image.png\">\n",
        "  <span class=\"image__spacer\" style=\"padding-bottom: 50%\"></span>\n",
        "</span>"
    );
    assert_cut_restored(&format!("{pic}\n{pic}\n{CUT_MARKER}\n{pic}\n"));
}

#[test]
fn cut_follows_two_videos() {
    let video = r#"<div class="ez-player ez-block"></div>"#;
    assert_cut_restored(&format!("{video}\n{video}\n{CUT_MARKER}\n{video}\n"));
}

#[test]
fn cut_follows_two_attachment_links() {
    let attach = r#"<a class="attach"></a>"#;
    assert_cut_restored(&format!("{attach}\n{attach}\n{CUT_MARKER}\n{attach}\n"));
}

#[test]
fn nested_text_counts_toward_its_top_level_block() {
    let expected = format!(
        "<p>test <div>test <em>{}</em><br> test</div> </p>\n{CUT_MARKER}\n<p>{}</p>\n",
        text(120 * 15),
        text(400)
    );
    assert_cut_restored(&expected);
}

#[test]
fn an_oversized_block_is_never_split() {
    let body = format!("<p>{}</p>\n", text(2400));
    let preview = create_preview(&body);
    assert_eq!(preview.html, format!("{body}{CUT_MARKER}\n"));
    assert!(!preview.user_cut_too_large);
}

#[test]
fn cut_lands_on_the_block_that_reaches_the_budget() {
    // three blocks of five lines reach the budget of 15 exactly
    let p = format!("<p>{}</p>", text(400));
    assert_cut_restored(&format!("{p}\n{p}\n{p}\n{CUT_MARKER}\n"));
}

#[test]
fn blocks_packed_without_whitespace_keep_their_bytes() {
    let p = format!("<p>{}</p>", text(400));
    let body = format!("{p}{p}{p}{p}");
    let preview = create_preview(&body);
    assert_eq!(preview.html, format!("{p}{p}{p}{CUT_MARKER}{p}"));
}
