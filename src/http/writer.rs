use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Header sent on every response; the socket is closed after it.
const CONNECTION_CLOSE: &[u8] = b"Connection: close\r\n";

/// Status line, headers in insertion order, then the blank line.
fn encode_head(resp: &Response, dst: &mut BytesMut) {
    dst.put_slice(HTTP_VERSION.as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(resp.status.as_u16().to_string().as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(resp.status.reason_phrase().as_bytes());
    dst.put_slice(b"\r\n");

    for (name, value) in &resp.headers {
        dst.put_slice(name.as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(value.as_bytes());
        dst.put_slice(b"\r\n");
    }

    dst.put_slice(CONNECTION_CLOSE);
    dst.put_slice(b"\r\n");
}

fn head_capacity(resp: &Response) -> usize {
    let headers: usize = resp
        .headers
        .iter()
        .map(|(name, value)| name.len() + value.len() + 4)
        .sum();
    // "HTTP/1.1 307 Temporary Redirect\r\n" is the longest status line
    40 + headers + CONNECTION_CLOSE.len() + 2
}

/// The exact bytes sent for `resp`; a body, when present, follows the head
/// verbatim.
pub fn serialize_response(resp: &Response) -> Bytes {
    let body = resp.body.as_deref().unwrap_or_default();
    let mut buf = BytesMut::with_capacity(head_capacity(resp) + body.len());

    encode_head(resp, &mut buf);
    buf.put_slice(body);

    buf.freeze()
}

/// A serialized response draining onto a stream.
pub struct ResponseWriter {
    pending: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            pending: serialize_response(response),
        }
    }

    /// Bytes not yet written.
    pub fn len(&self) -> usize {
        self.pending.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.pending.has_remaining()
    }

    /// Writes whatever is pending. A failed write is not retried; the
    /// connection is dropped by the caller.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.pending.has_remaining() {
            let n = stream.write(self.pending.chunk()).await?;
            if n == 0 {
                anyhow::bail!(
                    "connection closed with {} response bytes unsent",
                    self.pending.remaining()
                );
            }
            self.pending.advance(n);
        }

        stream.flush().await?;
        Ok(())
    }
}
