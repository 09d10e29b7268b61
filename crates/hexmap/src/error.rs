//! Error types and result alias for the crate.
//!
//! Generation and store lookups are total and never fail; the only
//! fallible surface is decoding a wire-format shape tag.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown shape value {0}")]
    UnknownShape(u8),
}
