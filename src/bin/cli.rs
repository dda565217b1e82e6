//! respline CLI
//!
//! Sends one command to a RESP server and prints the raw reply frames.

use std::net::TcpStream;

use clap::Parser;
use respline::network::Connection;
use respline::protocol::{read_bulk_payload, RespReader};
use respline::{Config, RespError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// respline CLI
#[derive(Parser, Debug)]
#[command(name = "respline-cli")]
#[command(about = "Send a command to a RESP server and dump the reply")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:6379")]
    server: String,

    /// Reader buffer size in bytes
    #[arg(short, long, default_value = "8192")]
    buffer_size: usize,

    /// Socket read/write timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// Command and arguments, e.g. `GET mykey`
    #[arg(required = true, num_args = 1..)]
    command: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,respline=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(&args.server)
        .buffer_size(args.buffer_size)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    if let Err(e) = run(&config, &args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, command: &[String]) -> Result<()> {
    let mut conn = Connection::connect(config)?;
    tracing::info!("Connected to {}", conn.peer_addr());

    conn.send_command(command)?;
    dump_reply(conn.reader())
}

/// Print frames until the announced reply is complete
fn dump_reply(reader: &mut RespReader<TcpStream>) -> Result<()> {
    let mut pending: u64 = 1;

    while pending > 0 {
        pending -= 1;

        let line = reader.read_line()?;
        println!("{}", line);

        match line.as_bytes().first() {
            Some(b'$') => {
                let len = parse_length(&line)?;
                if len >= 0 {
                    let payload = read_bulk_payload(reader, len as usize)?;
                    println!("{}", String::from_utf8_lossy(&payload));
                }
            }
            Some(b'*') => {
                let count = parse_length(&line)?;
                if count > 0 {
                    pending += count as u64;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Parse the signed length following a `$` or `*` marker
fn parse_length(line: &str) -> Result<i64> {
    line[1..]
        .parse()
        .map_err(|_| RespError::Protocol(format!("Invalid length in {:?}", line)))
}
