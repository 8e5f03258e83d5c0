use log::{debug, info};

use crate::images::{ImageResolver, ensure_https};
use crate::parsing::{inline::tokenize, options::ParseOptions};

use super::{
    classify::{LineClass, LineKind},
    containers::ListStack,
    kinds::{CodeFence, FenceKind, FenceSig, ListKind},
    types::{Block, append_block},
};

#[derive(Debug)]
struct FenceState {
    kind: FenceKind,
    language: String,
    lines: Vec<String>,
}

/// Line-by-line state machine that turns classified lines into a block tree.
///
/// Holds the per-document parse state: the output so far, an open code fence,
/// an open quote and the stack of open list ancestors. One builder serves
/// exactly one document.
pub struct BlockBuilder<'r> {
    resolver: &'r dyn ImageResolver,
    options: ParseOptions,
    fence: Option<FenceState>,
    quote: Option<Vec<String>>,
    lists: ListStack,
    out: Vec<Block>,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(resolver: &'r dyn ImageResolver, options: ParseOptions) -> Self {
        Self {
            resolver,
            options,
            fence: None,
            quote: None,
            lists: ListStack::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if let Some(sig) = c.fence_sig {
            match self.fence.as_ref().map(|f| f.kind) {
                None => {
                    self.flush_quote();
                    self.open_fence(sig);
                    return;
                }
                Some(kind) if CodeFence::closes(kind, sig) => {
                    self.close_fence();
                    return;
                }
                Some(_) => {}
            }
        }

        if let Some(fence) = self.fence.as_mut() {
            fence.lines.push(c.raw.to_string());
            return;
        }

        if !matches!(c.kind, LineKind::Quote(_)) {
            self.flush_quote();
        }

        match c.kind {
            LineKind::Quote(text) => {
                if self.quote.is_none() {
                    debug!("opening quote");
                }
                self.quote.get_or_insert_with(Vec::new).push(text.to_string());
            }
            LineKind::Heading { level, content } => {
                self.out.push(Block::Heading {
                    level,
                    spans: tokenize(content),
                });
                self.lists.reset();
            }
            LineKind::Todo { checked, content } => {
                self.out.push(Block::TodoItem {
                    spans: tokenize(content),
                    checked,
                });
                self.lists.enter_todo();
            }
            LineKind::ListItem {
                kind,
                indent,
                content,
            } => self.push_list_item(kind, indent, content),
            LineKind::Divider => {
                self.out.push(Block::Divider);
                self.lists.reset();
            }
            LineKind::Image { alt, url } => self.push_image(alt, url),
            LineKind::Blank => self.lists.reset(),
            LineKind::Text => self.push_paragraph(c.raw),
        }
    }

    /// Flushes a dangling quote and returns the top-level blocks.
    ///
    /// A fence still open here is dropped unless
    /// [`ParseOptions::close_unterminated_fence`] is set. Open lists need no
    /// closing since items are appended as they are seen.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_quote();
        if self.fence.is_some() {
            if self.options.close_unterminated_fence {
                self.close_fence();
            } else if let Some(fence) = self.fence.take() {
                debug!(
                    "discarding unterminated {} fence ({} lines)",
                    fence.language,
                    fence.lines.len()
                );
            }
        }
        self.out
    }

    fn open_fence(&mut self, sig: FenceSig<'_>) {
        let language = CodeFence::language(sig.info, &self.options.default_code_language);
        debug!("opening {language} fence");
        self.fence = Some(FenceState {
            kind: sig.kind,
            language,
            lines: vec![],
        });
    }

    fn close_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            debug!("closing {} fence", fence.language);
            self.out.push(Block::CodeBlock {
                language: fence.language,
                text: fence.lines.join("\n"),
            });
        }
    }

    fn flush_quote(&mut self) {
        if let Some(lines) = self.quote.take() {
            debug!("closing quote ({} lines)", lines.len());
            self.out.push(Block::Quote {
                spans: tokenize(&lines.join("\n")),
            });
        }
    }

    fn push_list_item(&mut self, kind: ListKind, indent: usize, content: &str) {
        let item = Block::list_item(kind, tokenize(content));
        let parent = self.lists.parent_for(indent).cloned();
        let path = append_block(&mut self.out, parent.as_deref(), item);
        self.lists.push(path, indent);
    }

    fn push_image(&mut self, alt: &str, url: &str) {
        debug!("image alt text: {alt:?}");
        let resolved = self.resolver.resolve(url);
        let url_out = ensure_https(&resolved);
        info!("image {url} resolved to {url_out}");
        self.out.push(Block::Image { url: url_out });
        self.lists.reset();
    }

    fn push_paragraph(&mut self, line: &str) {
        match self.lists.innermost().cloned() {
            Some(owner) => {
                let para = Block::Paragraph {
                    spans: tokenize(line.trim()),
                };
                append_block(&mut self.out, Some(&owner), para);
            }
            None => self.out.push(Block::Paragraph {
                spans: tokenize(line),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::SecureSchemeResolver;
    use crate::parsing::blocks::classify::MarkdownLineClassifier;
    use crate::parsing::inline::TextSpan;
    use pretty_assertions::assert_eq;

    fn feed(builder: &mut BlockBuilder<'_>, text: &str) {
        for line in text.lines() {
            builder.push(&MarkdownLineClassifier.classify(line));
        }
    }

    #[test]
    fn partial_documents_can_be_fed_incrementally() {
        let resolver = SecureSchemeResolver;
        let mut builder = BlockBuilder::new(&resolver, ParseOptions::default());
        feed(&mut builder, "- a\n");
        feed(&mut builder, "  - b\n");
        feed(&mut builder, "  continued\n");
        let blocks = builder.finish();

        assert_eq!(blocks.len(), 1);
        let b = &blocks[0].children()[0];
        assert_eq!(b.text(), "b");
        assert_eq!(
            b.children(),
            &[Block::Paragraph {
                spans: vec![TextSpan::plain("continued")]
            }]
        );
    }

    #[test]
    fn unterminated_fence_can_be_closed_by_option() {
        let resolver = SecureSchemeResolver;
        let options = ParseOptions {
            close_unterminated_fence: true,
            ..ParseOptions::default()
        };
        let mut builder = BlockBuilder::new(&resolver, options);
        feed(&mut builder, "```rust\nfn main() {}");
        assert_eq!(
            builder.finish(),
            vec![Block::CodeBlock {
                language: "rust".into(),
                text: "fn main() {}".into()
            }]
        );
    }

    #[test]
    fn resolver_is_called_once_per_image_in_order() {
        let seen = std::cell::RefCell::new(vec![]);
        let resolver = |url: &str| {
            seen.borrow_mut().push(url.to_string());
            format!("https://cdn.example/{}", seen.borrow().len())
        };
        let mut builder = BlockBuilder::new(&resolver, ParseOptions::default());
        feed(&mut builder, "![a](one.png)\ntext\n![b](two.png)");
        let blocks = builder.finish();

        assert_eq!(*seen.borrow(), vec!["one.png", "two.png"]);
        assert_eq!(
            blocks[2],
            Block::Image {
                url: "https://cdn.example/2".into()
            }
        );
    }
}
