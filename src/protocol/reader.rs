//! RESP Reader
//!
//! Fixed-buffer reader that serves bytes, CRLF-terminated lines and partial
//! blocks from any `Read` source.

use std::io::{ErrorKind, Read};

use super::{CR, DEFAULT_BUFFER_SIZE, LF};
use crate::config::Config;
use crate::error::{ConnectionError, RespError, Result};

/// Buffered reader for RESP connections
///
/// ## Buffer Layout
/// ```text
///  0            pos             limit          capacity
///  ├─ consumed ──┼── unconsumed ───┼─── stale ─────┤
/// ```
///
/// Only `buf[pos..limit]` is valid. The buffer is refilled from offset 0, and
/// only once `pos == limit`, so a refill never drops undelivered bytes.
///
/// ## Ownership
/// The reader is the sole consumer of its source and is meant to be driven by
/// one request/response cycle at a time. Every read takes `&mut self`; sharing
/// a reader across threads needs external synchronization. There is no
/// timeout or cancellation here: configure those on the source.
pub struct RespReader<R> {
    /// Underlying byte source
    source: R,

    /// Fixed-capacity buffer
    buf: Box<[u8]>,

    /// Index of the next unconsumed byte
    pos: usize,

    /// One past the last valid byte
    limit: usize,
}

impl<R: Read> RespReader<R> {
    /// Create a reader with the default 8 KB buffer
    pub fn new(source: R) -> Self {
        Self::from_parts(source, DEFAULT_BUFFER_SIZE)
    }

    /// Create a reader with a buffer of exactly `capacity` bytes
    ///
    /// Fails with `InvalidArgument` when `capacity` is zero.
    pub fn with_capacity(source: R, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RespError::InvalidArgument("Buffer size <= 0".to_string()));
        }
        Ok(Self::from_parts(source, capacity))
    }

    /// Create a reader sized by `config.buffer_size`
    pub fn from_config(source: R, config: &Config) -> Result<Self> {
        Self::with_capacity(source, config.buffer_size)
    }

    fn from_parts(source: R, capacity: usize) -> Self {
        Self {
            source,
            buf: vec![0u8; capacity].into_boxed_slice(),
            pos: 0,
            limit: 0,
        }
    }

    /// Read a single byte, refilling the buffer if it is exhausted
    pub fn read_byte(&mut self) -> Result<u8> {
        self.ensure_fill()?;
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Read one CRLF-terminated line, without the terminator
    ///
    /// Each byte becomes one `char`. A `\r` that is not followed by `\n` is
    /// kept together with the byte after it, and scanning goes on. An empty
    /// line fails with `ConnectionError::ServerClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();

        loop {
            let byte = self.read_byte()?;
            if byte == CR {
                // A CR always consumes the next byte, even across a refill
                let next = self.read_byte()?;
                if next == LF {
                    break;
                }
                line.push(byte as char);
                line.push(next as char);
            } else {
                line.push(byte as char);
            }
        }

        if line.is_empty() {
            return Err(ConnectionError::ServerClosed.into());
        }

        Ok(line)
    }

    /// Copy up to `len` buffered bytes into `dst[offset..]`
    ///
    /// Refills at most once, then returns however many bytes were buffered
    /// (never more than `len`). Callers that need an exact block must call
    /// again until they have it; see [`read_block_into`](super::read_block_into).
    pub fn read_bytes(&mut self, dst: &mut [u8], offset: usize, len: usize) -> Result<usize> {
        match offset.checked_add(len) {
            Some(end) if end <= dst.len() => {}
            _ => {
                return Err(RespError::InvalidArgument(format!(
                    "Range {}+{} out of bounds for destination of {} bytes",
                    offset,
                    len,
                    dst.len()
                )))
            }
        }

        self.ensure_fill()?;

        let count = len.min(self.limit - self.pos);
        dst[offset..offset + count].copy_from_slice(&self.buf[self.pos..self.pos + count]);
        self.pos += count;

        Ok(count)
    }

    /// Refill from offset 0 when every buffered byte has been consumed
    fn ensure_fill(&mut self) -> Result<()> {
        if self.pos < self.limit {
            return Ok(());
        }

        let filled = loop {
            match self.source.read(&mut self.buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::debug!("Read from source failed: {}", e);
                    self.pos = 0;
                    self.limit = 0;
                    return Err(ConnectionError::Io(e).into());
                }
            }
        };

        debug_assert!(filled <= self.buf.len());
        self.pos = 0;
        self.limit = filled;

        if filled == 0 {
            tracing::debug!("Source reached end of stream");
            return Err(ConnectionError::UnexpectedEof.into());
        }

        tracing::trace!("Refilled {} bytes", filled);
        Ok(())
    }
}

impl<R> RespReader<R> {
    /// Buffer capacity in bytes
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes read from the source but not yet delivered
    pub fn buffered(&self) -> usize {
        self.limit - self.pos
    }

    /// Get a reference to the underlying source
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Get a mutable reference to the underlying source
    ///
    /// Reading from it directly skips the buffer and breaks line framing.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Unwrap the source, discarding any buffered bytes
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R> std::fmt::Debug for RespReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RespReader")
            .field("capacity", &self.buf.len())
            .field("pos", &self.pos)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
