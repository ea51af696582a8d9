/// HTTP status codes the server produces.
///
/// - `Ok` (200): static page, asset or rendered image
/// - `TemporaryRedirect` (307): external shortcut
/// - `NotFound` (404): anything unmatched, missing or malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 307 Temporary Redirect
    TemporaryRedirect,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use campus_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::TemporaryRedirect.as_u16(), 307);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::TemporaryRedirect => 307,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::TemporaryRedirect => "Temporary Redirect",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep the order they were added in, which is the order they are
/// written on the wire.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    /// `None` for responses without a body (redirects)
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use campus_server::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body(b"body {}".to_vec())
///     .build();
/// assert_eq!(response.header("content-length"), Some("7"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header, replacing any existing header of the same name
    /// (compared case-insensitively) in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the final Response.
    ///
    /// A response with a body always leaves here with a Content-Type and a
    /// Content-Length equal to the body's byte length.
    pub fn build(mut self) -> Response {
        if let Some(body) = &self.body {
            if !has_header(&self.headers, "Content-Type") {
                self.headers.push((
                    "Content-Type".to_string(),
                    "application/octet-stream".to_string(),
                ));
            }
            set_header(
                &mut self.headers,
                "Content-Length".to_string(),
                body.len().to_string(),
            );
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 with a `text/html` body.
    pub fn html(body: impl Into<String>) -> Self {
        Self::content(body.into().into_bytes(), "text/html")
    }

    /// 200 with raw bytes and the given content type.
    pub fn content(body: Vec<u8>, content_type: &str) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }

    /// 307 pointing at `location`, without a body.
    pub fn redirect(location: &str) -> Self {
        ResponseBuilder::new(StatusCode::TemporaryRedirect)
            .header("Location", location)
            .build()
    }

    /// Looks up a header value, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

fn has_header(headers: &[(String, String)], key: &str) -> bool {
    headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
}

fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
        Some(slot) => slot.1 = value,
        None => headers.push((key, value)),
    }
}
