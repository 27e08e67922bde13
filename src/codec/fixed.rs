//! Descriptor-driven extraction of fixed-format fields.
//!
//! Protocol frames interleave length-prefixed strings with runs of
//! fixed-width big-endian integers (error codes, offsets, CRCs). Callers
//! describe such a run as a slice of [`FixedField`]s and decode it in one
//! bounds-checked step, mirroring the cursor convention of the string
//! decoders.

use tracing::trace;

use crate::codec::strings::take;
use crate::error::Result;

/// One field in a fixed-format run. All integers are big-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedField {
    /// Signed 8-bit integer (e.g. message magic, attributes).
    I8,
    /// Signed 16-bit integer (e.g. error codes, API keys).
    I16,
    /// Signed 32-bit integer (e.g. partition ids, correlation ids).
    I32,
    /// Signed 64-bit integer (e.g. offsets, timestamps).
    I64,
    /// Unsigned 32-bit integer (e.g. CRC checksums).
    U32,
    /// A run of raw bytes of known, fixed width.
    Raw(usize),
}

impl FixedField {
    /// Byte width of this field on the wire.
    pub fn width(self) -> usize {
        match self {
            FixedField::I8 => 1,
            FixedField::I16 => 2,
            FixedField::I32 => 4,
            FixedField::I64 => 8,
            FixedField::U32 => 4,
            FixedField::Raw(n) => n,
        }
    }
}

/// A decoded fixed-format value. Variants correspond to [`FixedField`]
/// descriptors; `Raw` borrows from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Decoded signed 8-bit integer.
    I8(i8),
    /// Decoded signed 16-bit integer.
    I16(i16),
    /// Decoded signed 32-bit integer.
    I32(i32),
    /// Decoded signed 64-bit integer.
    I64(i64),
    /// Decoded unsigned 32-bit integer.
    U32(u32),
    /// Borrowed raw bytes.
    Raw(&'a [u8]),
}

/// Decode a run of fixed-format fields at `cursor`, returning the values
/// in descriptor order alongside the advanced cursor.
///
/// The total width of the run is validated against the remaining buffer
/// before any field is read, so a truncated frame fails without a partial
/// result.
///
/// # Errors
/// Returns [`crate::error::WireError::Underflow`] if fewer bytes remain at
/// the cursor than the descriptor's total width.
pub fn decode_fixed<'a>(
    fields: &[FixedField],
    buf: &'a [u8],
    cursor: usize,
) -> Result<(Vec<FieldValue<'a>>, usize)> {
    let size: usize = fields.iter().map(|f| f.width()).sum();
    let window = take(buf, cursor, size)?;

    let mut values = Vec::with_capacity(fields.len());
    let mut at = 0;
    for field in fields {
        let raw = &window[at..at + field.width()];
        at += field.width();
        values.push(match *field {
            FixedField::I8 => FieldValue::I8(raw[0] as i8),
            FixedField::I16 => FieldValue::I16(i16::from_be_bytes([raw[0], raw[1]])),
            FixedField::I32 => {
                FieldValue::I32(i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            FixedField::I64 => FieldValue::I64(i64::from_be_bytes([
                raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
            ])),
            FixedField::U32 => {
                FieldValue::U32(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            FixedField::Raw(_) => FieldValue::Raw(raw),
        });
    }

    trace!(fields = fields.len(), size, "decoded fixed run");
    Ok((values, cursor + size))
}
