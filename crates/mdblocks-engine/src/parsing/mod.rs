pub mod blocks;
pub mod inline;
pub mod options;
pub mod snapshot;

use crate::images::{ImageResolver, SecureSchemeResolver};

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use options::ParseOptions;

/// Parses a Markdown document into top-level blocks with default options.
///
/// Image URLs are only normalized to `https://`; no external service is
/// contacted.
pub fn parse(document: &str) -> Vec<Block> {
    parse_with(document, &SecureSchemeResolver, &ParseOptions::default())
}

/// Parses a Markdown document, resolving each image through `resolver` in
/// document order.
pub fn parse_with(
    document: &str,
    resolver: &dyn ImageResolver,
    options: &ParseOptions,
) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(resolver, options.clone());

    for line in document.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

#[cfg(test)]
mod tests;
