#![cfg(feature = "std")]

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::transport::LineTransport;

/// Default per-turn read timeout (60 seconds).
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Newline-delimited UTF-8 over one TCP connection.
pub struct TcpLineTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    read_timeout: Duration,
}

impl TcpLineTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_timeout(stream, DEFAULT_READ_TIMEOUT)
    }

    pub fn with_timeout(stream: TcpStream, read_timeout: Duration) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
            read_timeout,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

#[async_trait::async_trait]
impl LineTransport for TcpLineTransport {
    async fn recv_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        // A turn that never arrives is a disconnect, not an engine failure.
        let read = match timeout(self.read_timeout, self.reader.read_line(&mut line)).await {
            Ok(result) => result?,
            Err(_) => return Ok(None),
        };
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }
}
