//! Connection Handler
//!
//! Blocking TCP connection to a RESP server.

use std::io::{BufWriter, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{RespReader, CRLF};

/// A single client connection
pub struct Connection {
    /// Reply side, read through the protocol reader
    reader: RespReader<TcpStream>,

    /// Request side (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to `config.server_addr`
    pub fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let stream = TcpStream::connect(&config.server_addr)?;
        let conn = Self::from_stream(stream, config)?;

        tracing::debug!("Connected to {}", conn.peer_addr);
        Ok(conn)
    }

    /// Wrap an already established stream
    ///
    /// Sets up buffered I/O and configures timeouts
    pub fn from_stream(stream: TcpStream, config: &Config) -> Result<Self> {
        config.validate()?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if config.nodelay {
            stream.set_nodelay(true)?;
        }

        // Zero means "no timeout"; std rejects a zero Duration
        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: RespReader::from_config(read_stream, config)?,
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Send a command as a RESP multi-bulk request and flush it
    pub fn send_command<A: AsRef<[u8]>>(&mut self, args: &[A]) -> Result<()> {
        write!(self.writer, "*{}", args.len())?;
        self.writer.write_all(CRLF)?;

        for arg in args {
            let arg = arg.as_ref();
            write!(self.writer, "${}", arg.len())?;
            self.writer.write_all(CRLF)?;
            self.writer.write_all(arg)?;
            self.writer.write_all(CRLF)?;
        }

        self.writer.flush()?;
        tracing::trace!("Sent {}-argument command to {}", args.len(), self.peer_addr);
        Ok(())
    }

    /// The reader replies arrive on
    pub fn reader(&mut self) -> &mut RespReader<TcpStream> {
        &mut self.reader
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
