pub mod images;
pub mod notion;
pub mod parsing;

// Re-export key types for easier usage
pub use images::{
    CdnResolver, CdnTransport, ImageResolver, ResolveError, SecureSchemeResolver, ensure_https,
};
pub use notion::{to_json, to_json_pretty};
pub use parsing::{
    blocks::Block,
    inline::{Annotations, TextSpan, tokenize},
    options::ParseOptions,
    parse, parse_with,
};
