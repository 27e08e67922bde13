//! Nullable string encoding in the two Kafka prefix widths.
//!
//! A "short string" carries a 2-byte big-endian signed length, an "int
//! string" a 4-byte one. In both, a prefix of -1 encodes the null value and
//! no payload bytes follow. Decoders take `(buffer, cursor)` and return
//! `(value, new_cursor)`; payload slices borrow from the input buffer, so
//! decoding allocates nothing.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{Result, WireError};

/// Width of the short-string length prefix in bytes.
pub const SHORT_PREFIX_LEN: usize = 2;

/// Width of the int-string length prefix in bytes.
pub const INT_PREFIX_LEN: usize = 4;

/// Maximum payload a short string can carry (the prefix is a signed i16).
pub const SHORT_STRING_MAX: usize = i16::MAX as usize;

/// Encode a nullable short string: 2-byte big-endian signed length followed
/// by the raw payload bytes, or a bare `-1` prefix for null.
///
/// # Errors
/// Returns [`WireError::StringTooLong`] if the value exceeds
/// [`SHORT_STRING_MAX`]. Encoding anyway would wrap the signed prefix and
/// emit a malformed frame, so the precondition is enforced rather than
/// silently violated.
pub fn encode_short_string(value: Option<&[u8]>) -> Result<Bytes> {
    let Some(value) = value else {
        let mut buf = BytesMut::with_capacity(SHORT_PREFIX_LEN);
        buf.put_i16(-1);
        return Ok(buf.freeze());
    };

    if value.len() > SHORT_STRING_MAX {
        return Err(WireError::StringTooLong {
            len: value.len(),
            max: SHORT_STRING_MAX,
        });
    }

    let mut buf = BytesMut::with_capacity(SHORT_PREFIX_LEN + value.len());
    buf.put_i16(value.len() as i16);
    buf.put_slice(value);
    Ok(buf.freeze())
}

/// Encode a nullable int string: 4-byte big-endian signed length followed
/// by the raw payload bytes, or a bare `-1` prefix for null.
///
/// # Errors
/// Returns [`WireError::StringTooLong`] if the value exceeds `i32::MAX`
/// bytes.
pub fn encode_int_string(value: Option<&[u8]>) -> Result<Bytes> {
    let Some(value) = value else {
        let mut buf = BytesMut::with_capacity(INT_PREFIX_LEN);
        buf.put_i32(-1);
        return Ok(buf.freeze());
    };

    if value.len() > i32::MAX as usize {
        return Err(WireError::StringTooLong {
            len: value.len(),
            max: i32::MAX as usize,
        });
    }

    let mut buf = BytesMut::with_capacity(INT_PREFIX_LEN + value.len());
    buf.put_i32(value.len() as i32);
    buf.put_slice(value);
    Ok(buf.freeze())
}

/// Decode a nullable short string at `cursor`, returning the payload slice
/// and the advanced cursor.
///
/// A negative length is the null sentinel: the result is `None` and only
/// the prefix is consumed.
///
/// # Errors
/// Returns [`WireError::Underflow`] if fewer than 2 bytes remain at the
/// cursor, or if the declared payload length exceeds the bytes remaining
/// after the prefix.
pub fn decode_short_string(buf: &[u8], cursor: usize) -> Result<(Option<&[u8]>, usize)> {
    let prefix = take(buf, cursor, SHORT_PREFIX_LEN)?;
    let len = i16::from_be_bytes([prefix[0], prefix[1]]);
    if len < 0 {
        return Ok((None, cursor + SHORT_PREFIX_LEN));
    }

    let payload = take(buf, cursor + SHORT_PREFIX_LEN, len as usize)?;
    trace!(len, "decoded short string");
    Ok((Some(payload), cursor + SHORT_PREFIX_LEN + len as usize))
}

/// Decode a nullable int string at `cursor`, returning the payload slice
/// and the advanced cursor.
///
/// Identical contract to [`decode_short_string`] with a 4-byte prefix.
///
/// # Errors
/// Returns [`WireError::Underflow`] if fewer than 4 bytes remain at the
/// cursor, or if the declared payload length exceeds the bytes remaining
/// after the prefix.
pub fn decode_int_string(buf: &[u8], cursor: usize) -> Result<(Option<&[u8]>, usize)> {
    let prefix = take(buf, cursor, INT_PREFIX_LEN)?;
    let len = i32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    if len < 0 {
        return Ok((None, cursor + INT_PREFIX_LEN));
    }

    let payload = take(buf, cursor + INT_PREFIX_LEN, len as usize)?;
    trace!(len, "decoded int string");
    Ok((Some(payload), cursor + INT_PREFIX_LEN + len as usize))
}

/// Bounds-checked window of `needed` bytes at `cursor`. The single place
/// remaining-length is compared against a read, shared by every decoder.
pub(crate) fn take(buf: &[u8], cursor: usize, needed: usize) -> Result<&[u8]> {
    let available = buf.len().saturating_sub(cursor);
    cursor
        .checked_add(needed)
        .and_then(|end| buf.get(cursor..end))
        .ok_or(WireError::Underflow { needed, available })
}
