//! End-to-end scenarios through the public library API: HTML in, display text out.

use artix_news::convert::{PageLayout, Token, convert_html, convert_tokens};
use artix_news::pipeline::{RenderOptions, present, render_document};
use artix_news::render::{Color, Highlight, extract_summary};
use artix_news::settings::Settings;

/// Render with colors and without summary filtering.
fn colored(html: &str) -> String {
    render_document(
        html,
        &Settings::default(),
        RenderOptions {
            summary: false,
            color: true,
        },
    )
    .expect("document renders")
}

#[test]
/// What: A news entry with two paragraphs yields a single `[News]` line.
///
/// Inputs:
/// - `div.news` with "Kernel update" and "released today".
///
/// Output:
/// - Exactly one line `[News]  Kernel update` before coloring.
fn news_entry_scenario() {
    let conv = convert_html(
        r#"<div class="news"><p>Kernel update</p><p>released today</p></div>"#,
        &PageLayout::default(),
        false,
    )
    .expect("valid document");
    let lines: Vec<&str> = conv
        .text
        .lines()
        .filter(|l| *l == "[News]  Kernel update")
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(conv.text.matches("[News]").count(), 1);
}

#[test]
/// What: Timestamp anchors survive conversion verbatim and turn green afterwards.
///
/// Inputs:
/// - `div.timestamp > a` holding `2019-05-01`.
///
/// Output:
/// - `[Date] 2019-05-01` after conversion; `[ESC[32m2019-05-01ESC[0m]` after presentation.
fn timestamp_scenario() {
    let html = r#"<div class="timestamp"><a>2019-05-01</a></div>"#;
    let settings = Settings::default();
    let conv = convert_html(html, &settings.layout, false).expect("valid document");
    assert!(conv.text.contains("[Date] 2019-05-01"));

    let out = present(
        &conv,
        &settings,
        RenderOptions {
            summary: false,
            color: true,
        },
    );
    assert!(out.contains("[\x1b[32m2019-05-01\x1b[0m]"), "{out:?}");
}

#[test]
fn sidebar_scenario() {
    let out = colored(r#"<div class="sidebar"><p>ignore me</p></div><p>keep me</p>"#);
    assert!(out.contains("keep me"));
    assert!(!out.contains("ignore me"));
}

#[test]
/// What: The default highlight colors the news marker, and summary mode keeps it on one line.
fn highlighted_summary() {
    let html = concat!(
        r#"<h0>Artix Linux</h0><div class="right"><ul><li>Forum</li></ul></div>"#,
        r#"<div class="timestamp"><a>2024-01-02</a></div>"#,
        r#"<div class="news"><p>New ISO images</p><p>Grab them now.</p></div>"#,
        r#"<div class="news"><p>Mirror changes</p></div>"#,
    );
    let out = render_document(
        html,
        &Settings::default(),
        RenderOptions {
            summary: true,
            color: true,
        },
    )
    .expect("document renders");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "\x1b[34m[News]\x1b[0m  New ISO images",
            "\x1b[34m[News]\x1b[0m  Mirror changes",
        ]
    );
}

#[test]
/// What: A configured highlight overlapping the news marker keeps summary lines intact.
///
/// Inputs:
/// - Highlight `News` in red, summary and colors enabled.
///
/// Output:
/// - The news line survives the summary filter, with `News` colored red.
fn summary_survives_marker_highlight() {
    let settings = Settings {
        highlights: vec![Highlight {
            keyword: "News".to_string(),
            color: Color::Red,
        }],
        ..Settings::default()
    };
    let out = render_document(
        r#"<div class="news"><p>Kernel update</p></div>"#,
        &settings,
        RenderOptions {
            summary: true,
            color: true,
        },
    )
    .expect("document renders");
    assert_eq!(out, "[\x1b[31mNews\x1b[0m]  Kernel update");
}

#[test]
/// What: Text after the timestamp anchor stays outside the date brackets.
///
/// Inputs:
/// - `div.timestamp` holding an anchor followed by "posted by admin".
///
/// Output:
/// - `[2019-05-01] posted by admin` on screen, and a `Date` annotation of `2019-05-01`.
fn date_brackets_match_annotation() {
    let html = r#"<div class="timestamp"><a>2019-05-01</a> posted by admin</div>"#;
    let settings = Settings::default();
    let conv = convert_html(html, &settings.layout, false).expect("valid document");
    assert_eq!(conv.annotations.len(), 1);
    assert_eq!(conv.annotations[0].text, "2019-05-01");

    let plain = present(&conv, &settings, RenderOptions::default());
    assert!(plain.contains("[2019-05-01] posted by admin"), "{plain:?}");

    let out = present(
        &conv,
        &settings,
        RenderOptions {
            summary: false,
            color: true,
        },
    );
    assert!(
        out.contains("[\x1b[32m2019-05-01\x1b[0m] posted by admin"),
        "{out:?}"
    );
}

#[test]
fn summary_on_three_lines() {
    assert_eq!(
        extract_summary("Artix\n[News]  Kernel update\nreleased today"),
        "[News]  Kernel update"
    );
}

#[test]
/// What: A stray closing tag in the event stream neither fails nor leaks sidebar text.
fn unmatched_close_scenario() {
    let tokens = vec![
        Token::start("p"),
        Token::text("one"),
        Token::end("p"),
        Token::end("div"),
        Token::start_class("div", "sidebar"),
        Token::text("hidden"),
        Token::end("div"),
        Token::start("p"),
        Token::text("two"),
        Token::end("p"),
    ];
    let conv = convert_tokens(tokens, &PageLayout::default());
    assert!(conv.text.contains("one"));
    assert!(conv.text.contains("two"));
    assert!(!conv.text.contains("hidden"));
}

#[test]
/// What: No output ever holds more than one blank line in a row.
fn blank_lines_are_capped() {
    let out = colored("<div><div><p>a</p></div></div><p></p><div></div><p>b</p><br><br><br>");
    assert!(!out.contains("\n\n\n"), "{out:?}");
    assert!(out.contains("a\n\nb"));
}
