//! Network Module
//!
//! Blocking TCP client side.
//!
//! ## Architecture
//! - One socket, split into a buffered writer and a `RespReader`
//! - Timeouts live on the socket, never in the reader

mod connection;

pub use connection::Connection;
