//! Recursive length prefix (RLP) encoding and decoding.
//!
//! RLP is the canonical binary encoding used for every transaction field,
//! signature tuple, and account key in this SDK. A value is either a flat
//! byte string or an ordered list of nested values; the encoding is a pure
//! function of the logical value, so equal values always produce equal
//! bytes and `decode(encode(x)) == x` for every representable `x`.

use crate::PrimitivesError;

/// Encoding offset for short byte strings (0x80 + length).
const STRING_OFFSET: u8 = 0x80;

/// Encoding offset for short lists (0xc0 + length).
const LIST_OFFSET: u8 = 0xc0;

/// Longest payload that fits a single-byte length prefix.
const SHORT_LENGTH_MAX: usize = 55;

// ---------------------------------------------------------------------------
// Value model
// ---------------------------------------------------------------------------

/// An RLP value: a byte string or an ordered list of nested values.
///
/// Unsigned integers are represented as minimal big-endian byte strings
/// with zero encoding as the empty string; `from_u64`/`to_u64` apply the
/// rule identically in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rlp {
    /// A flat byte string.
    Bytes(Vec<u8>),
    /// An ordered list of nested values.
    List(Vec<Rlp>),
}

impl Rlp {
    /// Create a byte-string value from a slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Rlp::Bytes(bytes.to_vec())
    }

    /// Create a byte-string value holding the minimal big-endian encoding
    /// of an unsigned integer. Zero encodes as the empty string.
    pub fn from_u64(value: u64) -> Self {
        Rlp::Bytes(trim_leading_zeros(&value.to_be_bytes()))
    }

    /// Create a byte-string value holding the minimal big-endian encoding
    /// of a 128-bit unsigned integer. Zero encodes as the empty string.
    pub fn from_u128(value: u128) -> Self {
        Rlp::Bytes(trim_leading_zeros(&value.to_be_bytes()))
    }

    /// View this value as a byte string.
    ///
    /// # Returns
    /// `Some(&[u8])` for `Bytes`, `None` for `List`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Rlp::Bytes(b) => Some(b),
            Rlp::List(_) => None,
        }
    }

    /// View this value as a list of nested values.
    ///
    /// # Returns
    /// `Some(&[Rlp])` for `List`, `None` for `Bytes`.
    pub fn as_list(&self) -> Option<&[Rlp]> {
        match self {
            Rlp::Bytes(_) => None,
            Rlp::List(items) => Some(items),
        }
    }

    /// Interpret this byte string as a big-endian unsigned integer.
    ///
    /// Leading zero bytes are tolerated on read; the value itself must fit
    /// in 64 bits.
    ///
    /// # Returns
    /// The decoded integer, or an error for lists or oversized values.
    pub fn to_u64(&self) -> Result<u64, PrimitivesError> {
        let bytes = self.as_bytes().ok_or_else(|| {
            PrimitivesError::InvalidRlp("expected byte string, found list".to_string())
        })?;
        let trimmed = strip_leading_zeros(bytes);
        if trimmed.len() > 8 {
            return Err(PrimitivesError::IntegerOverflow(64));
        }
        Ok(trimmed.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Interpret this byte string as a big-endian 128-bit unsigned integer.
    ///
    /// # Returns
    /// The decoded integer, or an error for lists or oversized values.
    pub fn to_u128(&self) -> Result<u128, PrimitivesError> {
        let bytes = self.as_bytes().ok_or_else(|| {
            PrimitivesError::InvalidRlp("expected byte string, found list".to_string())
        })?;
        let trimmed = strip_leading_zeros(bytes);
        if trimmed.len() > 16 {
            return Err(PrimitivesError::IntegerOverflow(128));
        }
        Ok(trimmed.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128))
    }
}

/// Strip leading zero bytes, returning an owned minimal representation.
fn trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    strip_leading_zeros(bytes).to_vec()
}

/// Strip leading zero bytes from a slice. All-zero input yields an empty slice.
fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a value into a new byte vector.
///
/// # Arguments
/// * `value` - The value to encode.
///
/// # Returns
/// The RLP encoding of the value.
pub fn encode(value: &Rlp) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    encode_into(value, &mut out);
    out
}

/// Encode a value, appending to an existing buffer.
fn encode_into(value: &Rlp, out: &mut Vec<u8>) {
    match value {
        Rlp::Bytes(bytes) => {
            if bytes.len() == 1 && bytes[0] < STRING_OFFSET {
                out.push(bytes[0]);
            } else {
                write_length(bytes.len(), STRING_OFFSET, out);
                out.extend_from_slice(bytes);
            }
        }
        Rlp::List(items) => {
            let mut payload = Vec::with_capacity(64);
            for item in items {
                encode_into(item, &mut payload);
            }
            write_length(payload.len(), LIST_OFFSET, out);
            out.extend_from_slice(&payload);
        }
    }
}

/// Write a length prefix for a payload of `len` bytes.
///
/// Lengths up to 55 use a single prefix byte (`offset + len`); longer
/// payloads use `offset + 55 + n` followed by the `n`-byte big-endian
/// length.
fn write_length(len: usize, offset: u8, out: &mut Vec<u8>) {
    if len <= SHORT_LENGTH_MAX {
        out.push(offset + len as u8);
    } else {
        let len_bytes = trim_leading_zeros(&(len as u64).to_be_bytes());
        out.push(offset + SHORT_LENGTH_MAX as u8 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode exactly one value from a byte slice.
///
/// # Arguments
/// * `data` - The encoded bytes.
///
/// # Returns
/// The decoded value, or an error for truncated input or trailing bytes
/// after the top-level item.
pub fn decode(data: &[u8]) -> Result<Rlp, PrimitivesError> {
    let mut reader = RlpReader::new(data);
    let value = reader.read_item()?;
    if reader.remaining() != 0 {
        return Err(PrimitivesError::TrailingBytes(reader.remaining()));
    }
    Ok(value)
}

/// A cursor-based reader over RLP-encoded bytes.
///
/// Wraps a byte slice and maintains a read position; each `read_item`
/// consumes one complete value including its nested contents.
pub struct RlpReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RlpReader<'a> {
    /// Create a new reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        RlpReader { data, pos: 0 }
    }

    /// Read `n` bytes and advance the position.
    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        if self.pos + n > self.data.len() {
            return Err(PrimitivesError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a single byte and advance the position.
    fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a big-endian length field of `n` bytes.
    fn read_length(&mut self, n: usize) -> Result<usize, PrimitivesError> {
        if n > 8 {
            return Err(PrimitivesError::InvalidRlp(format!(
                "length field of {} bytes is too large",
                n
            )));
        }
        let bytes = self.read_bytes(n)?;
        Ok(bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize))
    }

    /// Read one complete value (byte string or list) and advance past it.
    ///
    /// # Returns
    /// The decoded value, or an error if the input is truncated.
    pub fn read_item(&mut self) -> Result<Rlp, PrimitivesError> {
        let prefix = self.read_u8()?;
        match prefix {
            // Single byte below 0x80 encodes as itself.
            0x00..=0x7f => Ok(Rlp::Bytes(vec![prefix])),
            // Short string: 0-55 bytes.
            0x80..=0xb7 => {
                let len = (prefix - STRING_OFFSET) as usize;
                Ok(Rlp::Bytes(self.read_bytes(len)?.to_vec()))
            }
            // Long string: multi-byte length.
            0xb8..=0xbf => {
                let len = self.read_length((prefix - 0xb7) as usize)?;
                Ok(Rlp::Bytes(self.read_bytes(len)?.to_vec()))
            }
            // Short list: payload of 0-55 bytes.
            0xc0..=0xf7 => {
                let len = (prefix - LIST_OFFSET) as usize;
                self.read_list_payload(len)
            }
            // Long list: multi-byte length.
            0xf8..=0xff => {
                let len = self.read_length((prefix - 0xf7) as usize)?;
                self.read_list_payload(len)
            }
        }
    }

    /// Read a list payload of exactly `len` bytes into nested values.
    fn read_list_payload(&mut self, len: usize) -> Result<Rlp, PrimitivesError> {
        let payload = self.read_bytes(len)?;
        let mut sub = RlpReader::new(payload);
        let mut items = Vec::new();
        while sub.remaining() > 0 {
            items.push(sub.read_item()?);
        }
        Ok(Rlp::List(items))
    }

    /// Return the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
