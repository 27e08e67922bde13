//! # Error Types
//!
//! Error handling for the wire codec.
//!
//! This module defines the closed set of failures the codec can produce.
//! Decode operations fail only on buffer underflow; encode operations fail
//! only when a value exceeds the width of its length prefix.
//!
//! ## Error Categories
//! - **Underflow**: a decode step needs more bytes than the buffer holds
//! - **StringTooLong**: an encode precondition violation (value wider than
//!   its signed length prefix can represent)
//!
//! Both variants carry enough context for the caller to decide between
//! "wait for more data" (streaming) and "treat the frame as corrupt"
//! (fixed-buffer). The codec never swallows or logs errors; every failure
//! is surfaced to the immediate caller, which owns the retry policy.
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use kafka_wire::codec::decode_short_string;
//! use kafka_wire::error::WireError;
//!
//! // A lone prefix byte is not enough to read an i16 length.
//! match decode_short_string(&[0x00], 0) {
//!     Err(WireError::Underflow { needed, available }) => {
//!         assert_eq!((needed, available), (2, 1));
//!     }
//!     other => panic!("expected underflow, got {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// WireError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    /// The buffer has fewer bytes remaining at the cursor than the current
    /// decode step requires. Always caller-recoverable: request more bytes
    /// and retry, or reject the frame.
    #[error("buffer underflow: needed {needed} bytes, {available} available")]
    Underflow {
        /// Bytes the current step requires at the cursor.
        needed: usize,
        /// Bytes actually remaining at the cursor.
        available: usize,
    },

    /// The value passed to an encode operation exceeds what the signed
    /// length prefix can represent. Emitting the frame anyway would wrap
    /// the length field and corrupt the stream, so this is a hard error.
    #[error("string of {len} bytes exceeds length-prefix maximum of {max}")]
    StringTooLong {
        /// Length of the rejected value.
        len: usize,
        /// Maximum payload length the prefix width allows.
        max: usize,
    },
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
