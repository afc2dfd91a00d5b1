//! Remote resource fetching
//!
//! Stages never talk to the network directly; they go through
//! [`ResourceFetcher`], which hands back a fully buffered body either as
//! text or as raw bytes. [`HttpFetcher`] is the production implementation.

pub mod errors;
pub mod http;
pub mod retry;

use std::future::Future;
use std::pin::Pin;

pub use errors::FetchError;
pub use http::HttpFetcher;
pub use retry::RetryPolicy;

/// Boxed future returned by [`ResourceFetcher`] methods
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;

/// GET primitives used by the inlining stages.
///
/// Implementations succeed only on a 200 response and buffer the whole
/// body before returning.
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the body decoded as UTF-8 text
    fn fetch_text<'a>(&'a self, url: &'a str) -> FetchFuture<'a, String>;

    /// Fetch the raw body bytes
    fn fetch_bytes<'a>(&'a self, url: &'a str) -> FetchFuture<'a, Vec<u8>>;
}
