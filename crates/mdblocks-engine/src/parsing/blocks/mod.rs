//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (fence signature, quote text, heading level, list marker
//!    and indentation, ...)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` owns the parse state (open
//!    fence, open quote, list stack) and emits `Block`s in document order
//!
//! ## Modules
//!
//! - **`types`**: `Block` tree and path helpers
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, BlockQuote, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ListStack` of open list ancestors, addressed by path
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no classification or inline tokenizing inside
//! - Headings are clamped to level 3
//! - Only list items own children; children are never reordered
//! - A list item nests under the nearest open item with strictly smaller indentation

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use kinds::ListKind;
pub use types::{Block, BlockPath};
