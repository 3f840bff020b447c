//! Line transports carrying the wire protocol.

/// One line in, one line out.
///
/// `recv_line` resolves to `None` on a clean disconnect: EOF or a per-turn
/// read timeout. Transport failures are errors; they belong to the
/// transport layer and never to the engine.
#[async_trait::async_trait]
pub trait LineTransport: Send {
    async fn recv_line(&mut self) -> anyhow::Result<Option<String>>;
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod tcp;
