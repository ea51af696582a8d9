use std::fmt;

use crate::http::headers::Headers;
use crate::http::request::{Method, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was received
    Empty,
    /// The first line is missing its method or path token
    MalformedRequestLine,
    InvalidMethod,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::MalformedRequestLine => f.write_str("malformed request line"),
            ParseError::InvalidMethod => f.write_str("unknown request method"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one request out of `buf`.
///
/// The buffer is whatever a single bounded read produced, so a missing
/// header terminator or a short body are not errors: the request is handled
/// with what arrived.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    // Header block / body split on the first blank line
    let (header_bytes, body_bytes) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], &buf[end + 4..]),
        None => (buf, &buf[buf.len()..]),
    };

    let headers_str = String::from_utf8_lossy(header_bytes);
    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let path = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = Headers::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        match line.split_once(':') {
            Some((key, value)) => headers.insert(key.trim(), value.trim()),
            None => tracing::debug!(line, "skipping header line without ':'"),
        }
    }

    // Body
    let declared = headers
        .get("Content-Length")
        .and_then(|v| v.trim().parse::<usize>().ok());

    let body_len = match declared {
        Some(n) => n.min(body_bytes.len()),
        None => body_bytes.len(),
    };

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: body_bytes[..body_len].to_vec(),
    })
}

/// Total size of the message in `buf` once its header block is complete.
///
/// Returns `None` while the blank line has not arrived yet. The size covers
/// the declared Content-Length, which may exceed what is buffered so far.
/// An absurd Content-Length saturates at `usize::MAX`, leaving the caller's
/// read limit to end the read.
pub fn message_length(buf: &[u8]) -> Option<usize> {
    let headers_end = find_headers_end(buf)?;
    let head = String::from_utf8_lossy(&buf[..headers_end]);

    let content_length = head
        .split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    Some(headers_end.saturating_add(4).saturating_add(content_length))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
