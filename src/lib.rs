//! # kafka-wire
//!
//! Length-prefixed, big-endian wire primitives for Kafka-style broker
//! protocols.
//!
//! This crate is the byte-exact framing core shared by request/response
//! schemas in distributed log systems: nullable strings in two length-prefix
//! widths, fixed-format field extraction at an explicit cursor, and a small
//! utility that groups flat records by topic and partition.
//!
//! ## Wire Format
//! ```text
//! short string:  [Length(2, BE signed)] [Payload(N)]     null => length = -1
//! int string:    [Length(4, BE signed)] [Payload(N)]     null => length = -1
//! ```
//!
//! ## Design
//! - Every decode validates remaining length before touching memory, so a
//!   short or corrupted frame from the network can never read out of bounds
//! - Cursors are explicit: each decode returns `(value, new_cursor)` rather
//!   than hiding stream position in a mutable reader, keeping the
//!   bounds-checking contract visible at every call site
//! - All operations are pure and stateless; safe to call concurrently
//!   without synchronization
//!
//! ## Example
//! ```rust
//! use kafka_wire::codec::{decode_short_string, encode_short_string};
//!
//! let frame = encode_short_string(Some(b"ab"))?;
//! assert_eq!(&frame[..], &[0x00, 0x02, 0x61, 0x62]);
//!
//! let (value, cursor) = decode_short_string(&frame, 0)?;
//! assert_eq!(value, Some(&b"ab"[..]));
//! assert_eq!(cursor, 4);
//! # Ok::<(), kafka_wire::error::WireError>(())
//! ```
//!
//! There is no framing beyond the length prefix itself; callers delimit
//! complete protocol frames (e.g. via an outer length-prefixed envelope)
//! before invoking decode.

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod group;

pub use codec::{
    decode_fixed, decode_int_string, decode_short_string, encode_int_string, encode_short_string,
    FieldValue, FixedField,
};
pub use error::{Result, WireError};
pub use group::{group_by_topic_and_partition, TopicPartition};
