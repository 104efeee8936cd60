//! Compressed interval-boundary stream codec.
//!
//! The wire format is first-difference coding over a variable-length
//! integer: a byte with its top bit clear carries a plain 7-bit value; a
//! byte shaped `0b100xxxxx` introduces one more payload byte for a 13-bit
//! total; a byte shaped `0b101xxxxx` introduces two more payload bytes for
//! a 21-bit total. Decoded values are cumulative deltas between
//! successive boundary values. An odd count of decoded boundaries implies
//! an implicit trailing end at [`CODESPACE_END`](crate::codepointset::CODESPACE_END).
//!
//! This is unrelated to LLVM's VBR scheme beyond sharing the general
//! "low bits payload, tag bits say how much more follows" idea.

use crate::codepointset::{CodepointSet, CODESPACE_END};

const TAG13: u8 = 0b1000_0000;
const TAG21: u8 = 0b1010_0000;
const TAG_MASK: u8 = 0b1110_0000;
const PAYLOAD7_MASK: u8 = 0b0111_1111;
const PAYLOAD5_MASK: u8 = 0b0001_1111;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The stream ended in the middle of a multi-byte code.
    Truncated,
    /// The leading byte's top three bits are a tag this codec doesn't
    /// recognize (`0b110xxxxx` / `0b111xxxxx` are reserved).
    UnknownTag(u8),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Truncated => write!(f, "varint stream ended mid-code"),
            Error::UnknownTag(b) => write!(f, "unrecognized varint tag byte 0x{b:02x}"),
        }
    }
}

impl std::error::Error for Error {}

/// Decode a compressed boundary stream directly into a [`CodepointSet`].
pub fn decode_to_codepointset(bytes: &[u8]) -> Result<CodepointSet, Error> {
    let mut boundaries = decode_deltas(bytes)?;
    if boundaries.len() % 2 == 1 {
        boundaries.push(CODESPACE_END);
    }
    let intervals: Vec<(u32, u32)> = boundaries.chunks(2).map(|p| (p[0], p[1])).collect();
    Ok(CodepointSet::from_intervals(&intervals))
}

/// Decode the raw cumulative boundary values without the odd-length
/// fixup, mainly useful for tests that want to inspect the stream shape.
fn decode_deltas(bytes: &[u8]) -> Result<Vec<u32>, Error> {
    let mut out = Vec::new();
    let mut cumulative: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        let (delta, consumed) = if b0 & 0x80 == 0 {
            (u32::from(b0 & PAYLOAD7_MASK), 1)
        } else {
            match b0 & TAG_MASK {
                TAG13 => {
                    let b1 = *bytes.get(i + 1).ok_or(Error::Truncated)?;
                    let value = (u32::from(b0 & PAYLOAD5_MASK) << 8) | u32::from(b1);
                    (value, 2)
                }
                TAG21 => {
                    let b1 = *bytes.get(i + 1).ok_or(Error::Truncated)?;
                    let b2 = *bytes.get(i + 2).ok_or(Error::Truncated)?;
                    let value =
                        (u32::from(b0 & PAYLOAD5_MASK) << 16) | (u32::from(b1) << 8) | u32::from(b2);
                    (value, 3)
                }
                _ => return Err(Error::UnknownTag(b0)),
            }
        };
        cumulative += delta;
        out.push(cumulative);
        i += consumed;
    }
    Ok(out)
}

/// Encode a set's boundary sequence as a first-difference varint stream.
/// If the boundary count is odd after the implicit-trailing-end
/// convention is undone (i.e. the set's last interval reaches
/// `CODESPACE_END`), the final boundary is dropped so decoding restores
/// it implicitly.
#[must_use]
pub fn encode_from_intervals(set: &CodepointSet) -> Vec<u8> {
    let mut boundaries: Vec<u32> = Vec::new();
    for (a, b) in set.by_interval() {
        boundaries.push(a);
        boundaries.push(b);
    }
    if boundaries.last() == Some(&CODESPACE_END) {
        boundaries.pop();
    }
    let mut out = Vec::new();
    let mut prev = 0u32;
    for &boundary in &boundaries {
        let delta = boundary - prev;
        encode_delta(delta, &mut out);
        prev = boundary;
    }
    out
}

fn encode_delta(delta: u32, out: &mut Vec<u8>) {
    if delta <= 0x7F {
        out.push(delta as u8);
    } else if delta <= 0x1FFF {
        out.push(TAG13 | ((delta >> 8) as u8 & PAYLOAD5_MASK));
        out.push((delta & 0xFF) as u8);
    } else {
        debug_assert!(delta <= 0x1F_FFFF, "delta {delta} exceeds 21-bit payload");
        out.push(TAG21 | ((delta >> 16) as u8 & PAYLOAD5_MASK));
        out.push(((delta >> 8) & 0xFF) as u8);
        out.push((delta & 0xFF) as u8);
    }
}
