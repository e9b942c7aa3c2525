use preview_engine::{create_preview_with, Preview, PreviewOptions, CUT_MARKER};
use pretty_assertions::assert_eq;

fn text(len: usize) -> String {
    "test ".repeat(len.div_ceil(5))[..len].to_string()
}

#[test]
fn defaults_carry_the_published_calibration() {
    let options = PreviewOptions::default();
    assert_eq!(options.budget_lines, 15);
    assert_eq!(options.chars_per_line, 80);
    assert_eq!(options.media_lines, 8);
    assert_eq!(options.code_line_factor, 1.5);
    assert_eq!(options.max_leading_media, 2);
}

#[test]
fn a_smaller_budget_cuts_earlier() {
    let options = PreviewOptions {
        budget_lines: 5,
        ..PreviewOptions::default()
    };
    let p = format!("<p>{}</p>", text(400));
    let body = format!("{p}\n{p}\n{p}\n");
    let preview = create_preview_with(&body, &options);
    assert_eq!(preview.html, format!("{p}\n{CUT_MARKER}\n{p}\n{p}\n"));
}

#[test]
fn a_wider_line_keeps_more_text_uncut() {
    let options = PreviewOptions {
        chars_per_line: 400,
        ..PreviewOptions::default()
    };
    let p = format!("<p>{}</p>", text(400));
    let body = format!("{p}\n{p}\n{p}\n{p}\n{p}\n{p}\n");
    let preview = create_preview_with(&body, &options);
    assert_eq!(preview.html, body);
}

#[test]
fn a_stricter_media_cap_flags_sooner() {
    let options = PreviewOptions {
        max_leading_media: 0,
        ..PreviewOptions::default()
    };
    let preview = create_preview_with(r#"<p><img class="image"></p>"#, &options);
    assert!(preview.top_too_heavy);
}

#[test]
fn result_and_options_cross_the_serde_boundary() {
    let preview = create_preview_with("<p>hi</p>", &PreviewOptions::default());
    let json = serde_json::to_string(&preview).unwrap();
    let back: Preview = serde_json::from_str(&json).unwrap();
    assert_eq!(back, preview);

    let options = PreviewOptions::default();
    let json = serde_json::to_string(&options).unwrap();
    let back: PreviewOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
