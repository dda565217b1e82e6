//! Protocol Module
//!
//! Buffered reading primitives for the Redis Serialization Protocol (RESP).
//!
//! ## Line and Block Framing
//! ```text
//! ┌──────────────────────────────┬──────┐
//! │ Line (ASCII, no CRLF inside) │ \r\n │      read_line()
//! └──────────────────────────────┴──────┘
//! ┌──────────────────────────────┬──────┐
//! │ Block (exactly N raw bytes)  │ \r\n │      read_bytes() / read_bulk_payload()
//! └──────────────────────────────┴──────┘
//! ```
//!
//! The reader only knows the terminator. Deciding whether a line announces a
//! block (and how long it is) is the caller's job.

mod reader;
mod block;

pub use reader::RespReader;
pub use block::{
    read_block, read_block_into, read_bulk_payload, read_terminator, MAX_BLOCK_SIZE,
};

/// Carriage return, first byte of the line terminator
pub const CR: u8 = b'\r';

/// Line feed, second byte of the line terminator
pub const LF: u8 = b'\n';

/// Line terminator
pub const CRLF: &[u8; 2] = b"\r\n";

/// Default reader buffer capacity (8 KB)
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
