//! Tests for Connection
//!
//! These tests verify:
//! - Multi-bulk request encoding on the wire
//! - Reading replies through the connection's reader
//! - Timeouts and peer close surfacing as connection errors

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use respline::network::Connection;
use respline::protocol::read_bulk_payload;
use respline::{Config, ConnectionError, RespError};

// =============================================================================
// Helper Functions
// =============================================================================

/// Bind a loopback listener and return it with a config pointing at it
fn listen() -> (TcpListener, Config) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let config = Config::builder()
        .server_addr(addr)
        .buffer_size(16)
        .read_timeout_ms(2000)
        .write_timeout_ms(2000)
        .build();
    (listener, config)
}

/// Read from `stream` until `expected_len` bytes have arrived
fn read_request(stream: &mut TcpStream, expected_len: usize) -> Vec<u8> {
    let mut request = vec![0u8; expected_len];
    stream.read_exact(&mut request).unwrap();
    request
}

// =============================================================================
// Request/Reply Tests
// =============================================================================

#[test]
fn test_send_command_and_read_status() {
    let (listener, config) = listen();
    let expected = b"*1\r\n$4\r\nPING\r\n";

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream, expected.len());
        stream.write_all(b"+PONG\r\n").unwrap();
        request
    });

    let mut conn = Connection::connect(&config).unwrap();
    conn.send_command(&["PING"]).unwrap();

    assert_eq!(conn.reader().read_line().unwrap(), "+PONG");
    assert_eq!(server.join().unwrap(), expected);
}

#[test]
fn test_binary_arguments_and_bulk_reply() {
    let (listener, config) = listen();
    let expected = b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$4\r\nv\r\n\0\r\n";

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream, expected.len());
        // Larger than the 16 byte reader buffer
        stream.write_all(b"$20\r\n0123456789abcdefghij\r\n").unwrap();
        request
    });

    let mut conn = Connection::connect(&config).unwrap();
    let args: [&[u8]; 3] = [b"SET", b"k", b"v\r\n\0"];
    conn.send_command(&args).unwrap();

    let reader = conn.reader();
    assert_eq!(reader.read_line().unwrap(), "$20");
    let payload = read_bulk_payload(reader, 20).unwrap();
    assert_eq!(&payload[..], b"0123456789abcdefghij");
    assert_eq!(server.join().unwrap(), expected);
}

#[test]
fn test_from_stream_reports_peer() {
    let (listener, config) = listen();
    let addr = config.server_addr.clone();

    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        drop(stream);
    });

    let stream = TcpStream::connect(&addr).unwrap();
    let conn = Connection::from_stream(stream, &config).unwrap();

    assert_eq!(conn.peer_addr(), addr);
    server.join().unwrap();
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_peer_close_is_end_of_stream() {
    let (listener, config) = listen();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(b"+OK").unwrap();
    });

    let mut conn = Connection::connect(&config).unwrap();
    server.join().unwrap();

    assert!(matches!(
        conn.reader().read_line(),
        Err(RespError::Connection(ConnectionError::UnexpectedEof))
    ));
}

#[test]
fn test_read_timeout_is_io_error() {
    let (listener, mut config) = listen();
    config.read_timeout_ms = 50;

    let (done_tx, done_rx) = std::sync::mpsc::channel::<()>();
    let server = thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        // Hold the socket open without writing
        let _ = done_rx.recv();
    });

    let mut conn = Connection::connect(&config).unwrap();
    let err = conn.reader().read_line().unwrap_err();

    match err {
        RespError::Connection(ConnectionError::Io(e)) => {
            assert!(matches!(
                e.kind(),
                std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
            ));
        }
        other => panic!("Expected IO connection error, got {:?}", other),
    }

    done_tx.send(()).unwrap();
    server.join().unwrap();
}

#[test]
fn test_connect_refused() {
    let (listener, config) = listen();
    drop(listener);

    let err = Connection::connect(&config).err().unwrap();
    assert!(err.is_connection());
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config::builder().buffer_size(0).build();
    assert!(matches!(
        Connection::connect(&config),
        Err(RespError::InvalidArgument(_))
    ));
}
