//! # Inline Tokenizing
//!
//! Cursor-based splitting of one line of text into annotated spans.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from block parsing. The block builder calls
//! [`tokenize`] for every piece of prose it renders as rich text (headings,
//! paragraphs, list items, todo items, quotes).
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `Annotations`
//! - **`kinds`**: Inline-specific types with owned delimiters and the priority table
//! - **`cursor`**: `Cursor` for scanning a line
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Known Limitation
//!
//! Markup does not nest. A delimited segment's inner text is taken verbatim,
//! so `**_x_**` produces a bold span containing `_x_`, never bold+italic.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Annotations, TextSpan, plain_text};
