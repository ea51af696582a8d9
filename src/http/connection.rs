use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::message_length;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// Bytes requested from the socket per read call.
const READ_CHUNK: usize = 1024;

pub struct Connection<'r, S> {
    stream: S,
    peer: SocketAddr,
    router: &'r Router,
    buffer: BytesMut,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(BytesMut),
    Writing(ResponseWriter),
    Closed,
}

impl<'r, S> Connection<'r, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, router: &'r Router, max_request_bytes: usize) -> Self {
        Self {
            stream,
            peer,
            router,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(raw) => {
                            self.state = ConnectionState::Processing(raw);
                        }
                        None => {
                            tracing::debug!(peer = %self.peer, "empty request, closing");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(raw) => {
                    let response = self.router.dispatch(raw, self.peer).await;
                    log_access(raw, &response, self.peer);

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the header block and its declared body are in, the peer
    /// stops sending, or `max_request_bytes` is reached. Whatever arrived is
    /// handed on; `None` means nothing arrived at all.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<BytesMut>> {
        while self.buffer.len() < self.max_request_bytes {
            if let Some(total) = message_length(&self.buffer) {
                if self.buffer.len() >= total {
                    break;
                }
            }

            let want = READ_CHUNK.min(self.max_request_bytes - self.buffer.len());
            let mut temp = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut temp[..want]).await?;

            if n == 0 {
                // Client finished sending (or closed)
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }

        tracing::debug!(peer = %self.peer, bytes = self.buffer.len(), "request received");
        Ok(Some(self.buffer.split()))
    }
}

fn log_access(raw: &[u8], response: &Response, peer: SocketAddr) {
    let first_line = raw
        .split(|b| *b == b'\n')
        .next()
        .map(|line| String::from_utf8_lossy(line).trim_end().to_string())
        .unwrap_or_default();

    tracing::info!(
        %peer,
        request = %first_line,
        status = response.status.as_u16(),
        "request served"
    );
}
