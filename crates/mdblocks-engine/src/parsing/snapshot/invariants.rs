use crate::images::SECURE_SCHEME;
use crate::parsing::blocks::Block;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within `1..=3`
/// - List item children are list items or paragraphs
/// - No span has empty content
/// - Image URLs use the secure scheme
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    for b in blocks {
        if let Block::Heading { level, .. } = b {
            assert!(
                (1..=3).contains(level),
                "heading level out of range: {level}"
            );
        }
        if let Block::Image { url } = b {
            assert!(
                url.starts_with(SECURE_SCHEME),
                "image url is not secure: {url}"
            );
        }
        for span in b.spans() {
            assert!(!span.content.is_empty(), "empty span in {b:?}");
        }
        for child in b.children() {
            assert!(
                child.is_list_item() || matches!(child, Block::Paragraph { .. }),
                "unexpected child {child:?} under {b:?}"
            );
        }
        check(b.children());
    }
}
