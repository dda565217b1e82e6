//! Exact-length block reads
//!
//! `RespReader::read_bytes` may return short. These helpers keep calling it
//! until a whole block has arrived, then check the trailing CRLF.

use std::io::Read;

use bytes::{Bytes, BytesMut};

use super::{RespReader, CR, LF};
use crate::error::{RespError, Result};

/// Largest block a caller may ask for (512 MB, the RESP bulk string limit)
pub const MAX_BLOCK_SIZE: usize = 512 * 1024 * 1024;

/// Fill `dst` completely, one partial read at a time
pub fn read_block_into<R: Read>(reader: &mut RespReader<R>, dst: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < dst.len() {
        let remaining = dst.len() - filled;
        filled += reader.read_bytes(dst, filled, remaining)?;
    }
    Ok(())
}

/// Read exactly `len` bytes into a new buffer
pub fn read_block<R: Read>(reader: &mut RespReader<R>, len: usize) -> Result<Bytes> {
    if len > MAX_BLOCK_SIZE {
        return Err(RespError::Protocol(format!(
            "Block too large: {} bytes (max {})",
            len, MAX_BLOCK_SIZE
        )));
    }

    let mut block = BytesMut::zeroed(len);
    read_block_into(reader, &mut block)?;
    Ok(block.freeze())
}

/// Consume a CRLF that must follow a block
pub fn read_terminator<R: Read>(reader: &mut RespReader<R>) -> Result<()> {
    let first = reader.read_byte()?;
    let second = reader.read_byte()?;

    if first != CR || second != LF {
        return Err(RespError::Protocol(format!(
            "Expected CRLF after block, got 0x{:02x} 0x{:02x}",
            first, second
        )));
    }
    Ok(())
}

/// Read a `len`-byte bulk payload and its trailing CRLF
pub fn read_bulk_payload<R: Read>(reader: &mut RespReader<R>, len: usize) -> Result<Bytes> {
    let payload = read_block(reader, len)?;
    read_terminator(reader)?;
    tracing::trace!("Read bulk payload of {} bytes", len);
    Ok(payload)
}
