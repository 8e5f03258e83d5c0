//! # Image Resolution
//!
//! The boundary between the parser and the service that rehosts images.
//!
//! [`ImageResolver::resolve`] is total: implementations log failures and fall
//! back to the (scheme-normalized) input. The parser still runs
//! [`ensure_https`] on whatever comes back, so a misbehaving resolver can
//! never produce an insecure image block.
//!
//! ## Modules
//!
//! - **`scheme`**: URL scheme normalization helpers
//! - **`cdn`**: `CdnResolver` over a pluggable `CdnTransport`

pub mod cdn;
pub mod scheme;

pub use cdn::{CdnResolver, CdnTransport};
pub use scheme::{SECURE_SCHEME, ensure_https, has_scheme, with_scheme};

/// Rewrites an image URL, e.g. through a CDN.
pub trait ImageResolver {
    /// Never fails; on error the input URL comes back with a scheme added.
    fn resolve(&self, url: &str) -> String;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, url: &str) -> String {
        self(url)
    }
}

/// Resolver that contacts nothing and only adds a missing scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureSchemeResolver;

impl ImageResolver for SecureSchemeResolver {
    fn resolve(&self, url: &str) -> String {
        with_scheme(url)
    }
}

/// Failures while asking the CDN to rehost an image.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("request for {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("invalid CDN response for {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
    #[error("CDN returned a non-https url: {url}")]
    InsecureUrl { url: String },
}
