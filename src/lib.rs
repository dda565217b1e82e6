//! # respline
//!
//! Buffered reading for the Redis Serialization Protocol (RESP):
//! - Fixed-size buffer with one refill per exhausted buffer
//! - CRLF line reads and partial block reads
//! - I/O failures surfaced as connection errors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Caller (reply decoder / CLI)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ read_line / read_bytes / read_byte
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       RespReader                             │
//! │               buffer + pos + limit cursors                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Read::read (on exhaustion only)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              Byte source (TcpStream, File, ...)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use respline::protocol::{read_bulk_payload, RespReader};
//!
//! let mut reader = RespReader::new(&b"$3\r\nfoo\r\n"[..]);
//! assert_eq!(reader.read_line().unwrap(), "$3");
//! assert_eq!(&read_bulk_payload(&mut reader, 3).unwrap()[..], b"foo");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ConnectionError, RespError, Result};
pub use config::Config;
pub use protocol::RespReader;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
