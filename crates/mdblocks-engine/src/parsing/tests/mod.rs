//! Behaviour tests for the whole parsing pipeline.
//!
//! Every parsed document is also run through `snapshot::invariants`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::Block,
    inline::{Annotations, TextSpan},
    options::ParseOptions,
    parse, parse_with, snapshot,
};

fn parse_checked(md: &str) -> Vec<Block> {
    let blocks = parse(md);
    snapshot::invariants(&blocks);
    blocks
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        spans: vec![TextSpan::plain(text)],
    }
}

fn bullet(text: &str, children: Vec<Block>) -> Block {
    Block::BulletListItem {
        spans: vec![TextSpan::plain(text)],
        children,
    }
}

// Quotes

#[rstest]
#[case("> one", "one")]
#[case("> one\n> two", "one\ntwo")]
#[case("> one\n> two\n> three\n", "one\ntwo\nthree")]
fn consecutive_quote_lines_make_one_quote(#[case] md: &str, #[case] expected: &str) {
    let blocks = parse_checked(md);
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], Block::Quote { .. }));
    assert_eq!(blocks[0].text(), expected);
}

#[test]
fn quote_is_flushed_before_next_line() {
    let blocks = parse_checked("> quoted\n# After");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].text(), "quoted");
    assert!(matches!(blocks[1], Block::Heading { level: 1, .. }));
}

#[test]
fn quote_lines_are_tokenized() {
    let blocks = parse_checked("> a **b**");
    assert_eq!(
        blocks[0].spans(),
        &[
            TextSpan::plain("a "),
            TextSpan::styled("b", Annotations::BOLD)
        ]
    );
}

// Headings

#[rstest]
#[case("# One", 1)]
#[case("## Two", 2)]
#[case("### Three", 3)]
#[case("#### Four", 3)]
#[case("########## Ten", 3)]
fn heading_level_is_clamped(#[case] md: &str, #[case] level: u8) {
    let blocks = parse_checked(md);
    assert!(matches!(blocks[0], Block::Heading { level: l, .. } if l == level));
}

#[test]
fn hashtag_without_space_is_a_paragraph() {
    assert_eq!(parse_checked("#hashtag"), vec![paragraph("#hashtag")]);
}

// Lists

#[test]
fn nested_bullets_follow_indentation() {
    let blocks = parse_checked("- a\n  - b\n- c");
    assert_eq!(
        blocks,
        vec![bullet("a", vec![bullet("b", vec![])]), bullet("c", vec![])]
    );
}

#[test]
fn same_indent_items_are_siblings() {
    let blocks = parse_checked("  - a\n  - b");
    assert_eq!(blocks, vec![bullet("a", vec![]), bullet("b", vec![])]);
}

#[test]
fn deeper_nesting_and_dedent() {
    let blocks = parse_checked("- a\n  - b\n    - c\n  - d\n- e");
    assert_eq!(
        blocks,
        vec![
            bullet(
                "a",
                vec![bullet("b", vec![bullet("c", vec![])]), bullet("d", vec![])]
            ),
            bullet("e", vec![]),
        ]
    );
}

#[test]
fn numbered_items_nest_like_bullets() {
    let blocks = parse_checked("1. first\n   - sub\n2. second");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::NumberedListItem { .. }));
    assert_eq!(blocks[0].children(), &[bullet("sub", vec![])]);
    assert_eq!(blocks[1].text(), "second");
}

#[test]
fn todo_then_bullet_are_independent() {
    let blocks = parse_checked("- [ ] todo\n- bullet");
    assert_eq!(
        blocks,
        vec![
            Block::TodoItem {
                spans: vec![TextSpan::plain("todo")],
                checked: false,
            },
            bullet("bullet", vec![]),
        ]
    );
}

#[test]
fn checked_todo() {
    let blocks = parse_checked("- [x] done");
    assert!(matches!(blocks[0], Block::TodoItem { checked: true, .. }));
    assert_eq!(blocks[0].text(), "done");
}

#[test]
fn blank_line_ends_a_list() {
    let blocks = parse_checked("- a\n\n  - b");
    assert_eq!(blocks, vec![bullet("a", vec![]), bullet("b", vec![])]);
}

#[test]
fn paragraph_inside_list_becomes_child() {
    let blocks = parse_checked("- a\n  more about a\n- b");
    assert_eq!(
        blocks,
        vec![
            bullet("a", vec![paragraph("more about a")]),
            bullet("b", vec![])
        ]
    );
}

#[test]
fn heading_resets_list_nesting() {
    let blocks = parse_checked("- a\n# H\n  - b");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[2], bullet("b", vec![]));
}

#[rstest]
#[case("- a\n---\n  - b")]
#[case("- a\n![i](x.png)\n  - b")]
fn divider_and_image_end_a_list(#[case] md: &str) {
    let blocks = parse_checked(md);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], bullet("a", vec![]));
    assert_eq!(blocks[2], bullet("b", vec![]));
}

#[test]
fn code_block_keeps_list_open() {
    let blocks = parse_checked("- a\n```\nx\n```\n  - b");
    assert_eq!(
        blocks,
        vec![
            bullet("a", vec![bullet("b", vec![])]),
            Block::CodeBlock {
                language: "plain_text".into(),
                text: "x".into(),
            },
        ]
    );
}

#[test]
fn quote_keeps_list_open() {
    let blocks = parse_checked("- a\n> q\n  more");
    assert_eq!(
        blocks,
        vec![
            bullet("a", vec![paragraph("more")]),
            Block::Quote {
                spans: vec![TextSpan::plain("q")],
            },
        ]
    );
}

#[test]
fn paragraph_after_todo_is_top_level() {
    let blocks = parse_checked("- [ ] t\n  more");
    assert_eq!(
        blocks,
        vec![
            Block::TodoItem {
                spans: vec![TextSpan::plain("t")],
                checked: false,
            },
            paragraph("  more"),
        ]
    );
}

// Dividers and images

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
#[case("  ---  ")]
fn dividers(#[case] md: &str) {
    assert_eq!(parse_checked(md), vec![Block::Divider]);
}

#[test]
fn image_without_scheme_gets_https() {
    assert_eq!(
        parse_checked("![logo](example.com/logo.png)"),
        vec![Block::Image {
            url: "https://example.com/logo.png".into()
        }]
    );
}

#[test]
fn insecure_resolver_output_is_upgraded() {
    let resolver = |_: &str| "notasecureurl".to_string();
    let blocks = parse_with(
        "![alt](http://example.com/x.png)",
        &resolver,
        &ParseOptions::default(),
    );
    snapshot::invariants(&blocks);
    assert_eq!(
        blocks,
        vec![Block::Image {
            url: "https://notasecureurl".into()
        }]
    );
}

#[test]
fn http_resolver_output_is_upgraded() {
    let resolver = |url: &str| url.to_string();
    let blocks = parse_with(
        "![alt](http://example.com/x.png)",
        &resolver,
        &ParseOptions::default(),
    );
    assert_eq!(
        blocks,
        vec![Block::Image {
            url: "https://example.com/x.png".into()
        }]
    );
}

#[test]
fn broken_image_syntax_is_a_paragraph() {
    assert_eq!(parse_checked("![alt](x.png"), vec![paragraph("![alt](x.png")]);
}

// Code fences

#[test]
fn fenced_code_keeps_interior_lines() {
    let blocks = parse_checked("```python\nprint(1)\nprint(2)\n```");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            language: "python".into(),
            text: "print(1)\nprint(2)".into(),
        }]
    );
}

#[test]
fn fence_without_info_uses_default_language() {
    let blocks = parse_checked("```\nx\n```");
    assert!(matches!(&blocks[0], Block::CodeBlock { language, .. } if language == "plain_text"));
}

#[test]
fn fence_contents_are_not_classified() {
    let blocks = parse_checked("```md\n# not a heading\n- not a list\n> not a quote\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].text(),
        "# not a heading\n- not a list\n> not a quote"
    );
}

#[test]
fn unterminated_fence_is_discarded() {
    assert_eq!(parse_checked("para\n```rust\nfn main() {}"), vec![paragraph("para")]);
}

#[test]
fn tilde_fence_ignores_backtick_marker() {
    let blocks = parse_checked("~~~\n```\n~~~");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            language: "plain_text".into(),
            text: "```".into(),
        }]
    );
}

#[test]
fn fence_closes_an_open_quote_first() {
    let blocks = parse_checked("> q\n```\ncode\n```");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::Quote { .. }));
    assert!(matches!(blocks[1], Block::CodeBlock { .. }));
}

// Inline markup through the block parser

#[test]
fn bold_wrapping_italic_does_not_nest() {
    let blocks = parse_checked("**_x_**");
    assert_eq!(
        blocks[0].spans(),
        &[TextSpan::styled("_x_", Annotations::BOLD)]
    );
    assert!(!blocks[0].spans()[0].annotations.italic);
}

#[test]
fn adjacent_markup_is_sequential() {
    let blocks = parse_checked("**a**_b_");
    assert_eq!(
        blocks[0].spans(),
        &[
            TextSpan::styled("a", Annotations::BOLD),
            TextSpan::styled("b", Annotations::ITALIC),
        ]
    );
}

// Whole documents

#[test]
fn empty_document() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_checked("\n\n   \n").is_empty());
}

#[test]
fn crlf_line_endings() {
    let blocks = parse_checked("# T\r\n- a\r\n  - b\r\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1], bullet("a", vec![bullet("b", vec![])]));
}
