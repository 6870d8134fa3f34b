//! Record identifier utilities.
//!
//! Every stored vital-signs record is addressed by a [`RecordId`]: a version 4 UUID held in
//! a *canonical* text form of **32 lowercase hexadecimal characters** (no hyphens).
//!
//! ## Canonical UUID form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Canonical form is required for externally supplied identifiers (CLI arguments, REST path
//! segments). Use [`RecordId::parse`] to validate an input string; uppercase, hyphenated,
//! wrong-length and non-hex values are rejected.

mod record_id;

pub use record_id::RecordId;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
