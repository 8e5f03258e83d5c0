//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `**` and `__`
//! - **`Emphasis`**: `*` and `_`
//! - **`CodeSpan`**: `` ` ``
//! - **`Strikethrough`**: `~~`
//! - **`Link`**: `[`, `](`, `)`
//!
//! ## Delimiter Table
//!
//! [`DELIMITERS`] lists the symmetric delimiters in match priority. Longer
//! markers come before their single-character prefixes so `**` is never read
//! as two `*`. Links are not symmetric and are tried after the table.
//!
//! Delimiters do not nest: the inner text of a match is kept verbatim and is
//! never tokenized again. `**_x_**` is one bold span whose text is `_x_`.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
pub use strikethrough::Strikethrough;

use super::types::Annotations;

/// A symmetric inline delimiter and the annotations it applies.
#[derive(Debug, Clone, Copy)]
pub struct Delimiter {
    pub marker: &'static str,
    pub annotations: Annotations,
}

pub const DELIMITERS: &[Delimiter] = &[
    Delimiter {
        marker: Strong::STARS,
        annotations: Annotations::BOLD,
    },
    Delimiter {
        marker: Strong::UNDERSCORES,
        annotations: Annotations::BOLD,
    },
    Delimiter {
        marker: Emphasis::STAR,
        annotations: Annotations::ITALIC,
    },
    Delimiter {
        marker: Emphasis::UNDERSCORE,
        annotations: Annotations::ITALIC,
    },
    Delimiter {
        marker: CodeSpan::TICK,
        annotations: Annotations::CODE,
    },
    Delimiter {
        marker: Strikethrough::TILDES,
        annotations: Annotations::STRIKETHROUGH,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_markers_precede_their_prefixes() {
        for (i, d) in DELIMITERS.iter().enumerate() {
            for later in &DELIMITERS[i + 1..] {
                assert!(
                    !(later.marker.len() > d.marker.len() && later.marker.starts_with(d.marker)),
                    "{:?} must come before {:?}",
                    later.marker,
                    d.marker
                );
            }
        }
    }
}
