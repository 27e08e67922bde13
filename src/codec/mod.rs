//! # Wire Codec
//!
//! Low-level encoding and decoding of Kafka-style wire primitives.
//!
//! This module is the byte-exact core of the crate: nullable strings in two
//! length-prefix widths, plus fixed-format field extraction at an explicit
//! cursor.
//!
//! ## Components
//! - **Strings**: nullable byte strings with 2-byte or 4-byte signed prefixes
//! - **Fixed**: descriptor-driven unpacking of big-endian numeric/byte fields
//!
//! ## Wire Format
//! ```text
//! short string:  [Length(2, BE signed)] [Payload(N)]     null => length = -1
//! int string:    [Length(4, BE signed)] [Payload(N)]     null => length = -1
//! ```
//!
//! ## Security
//! - Remaining-length validation before every read (frames arrive from an
//!   untrusted network; a truncated frame must never read out of bounds)
//! - The null sentinel (-1) can never be a valid non-null length, so the
//!   two cases are unambiguous
//! - Big-endian (network byte order) throughout; this is a wire-format
//!   compatibility requirement
//!
//! The codec is stateless and reentrant. Buffers are caller-owned immutable
//! views and the cursor is passed explicitly; every decode returns the value
//! together with the advanced cursor rather than hiding position in a
//! mutable reader.

pub mod fixed;
pub mod strings;

pub use fixed::{decode_fixed, FieldValue, FixedField};
pub use strings::{
    decode_int_string, decode_short_string, encode_int_string, encode_short_string,
    INT_PREFIX_LEN, SHORT_PREFIX_LEN, SHORT_STRING_MAX,
};
