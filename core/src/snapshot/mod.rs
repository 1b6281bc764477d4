//! Shareable workout snapshots
//!
//! A snapshot token is the workout config serialized to JSON and wrapped in
//! unpadded URL-safe base64, small enough to ride in a `?c=` query parameter.
//!
//! Loading is tolerant by contract: tokens are user-visible and may be
//! hand-edited or truncated, so `decode_or_default` never fails. Individual
//! set entries are sanitized field by field instead of being trusted.

mod codec;
mod error;
mod share;

#[cfg(test)]
mod codec_tests;

pub use codec::{decode, decode_or_default, encode};
pub use error::SnapshotError;
pub use share::{SHARE_PARAM, share_query, token_from_url};
