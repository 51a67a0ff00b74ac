//! Cursor-style readers and writers shared by the entry and payload
//! codecs. All multi-byte integers on this chain are big-endian.

use crate::error::CodecError;

pub(crate) fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], CodecError> {
    if input.len() < n {
        return Err(CodecError::TruncatedInput);
    }
    let (a, b) = input.split_at(n);
    *input = b;
    Ok(a)
}

pub(crate) fn read_u8(input: &mut &[u8]) -> Result<u8, CodecError> {
    Ok(take(input, 1)?[0])
}

pub(crate) fn read_u16_be(input: &mut &[u8]) -> Result<u16, CodecError> {
    let b = take(input, 2)?;
    Ok(u16::from_be_bytes([b[0], b[1]]))
}

pub(crate) fn read_u32_be(input: &mut &[u8]) -> Result<u32, CodecError> {
    let b = take(input, 4)?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

pub(crate) fn read_u64_be(input: &mut &[u8]) -> Result<u64, CodecError> {
    let b = take(input, 8)?;
    Ok(u64::from_be_bytes([
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
    ]))
}

pub(crate) fn read_32(input: &mut &[u8]) -> Result<[u8; 32], CodecError> {
    let b = take(input, 32)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(b);
    Ok(out)
}

pub(crate) fn write_u8(out: &mut Vec<u8>, v: u8) {
    out.push(v);
}

pub(crate) fn write_u16_be(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

pub(crate) fn write_u32_be(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

pub(crate) fn write_u64_be(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_be_bytes());
}

/// Byte-length-prefixed write with a u16 prefix.
pub(crate) fn write_short_bytes(out: &mut Vec<u8>, b: &[u8]) -> Result<(), CodecError> {
    let len: u16 = b.len().try_into().map_err(|_| CodecError::LengthOverflow)?;
    write_u16_be(out, len);
    out.extend_from_slice(b);
    Ok(())
}
