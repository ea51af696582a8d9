//! HTML documents rendered by the server itself.

use std::net::SocketAddr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::assets::ResolvedResource;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// The 404 page. The client's `<ip>:<port>` is the only dynamic part.
pub fn not_found(peer: SocketAddr) -> Response {
    let client = format!("{}:{}", peer.ip(), peer.port());
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Error 404</title>
  <link rel="stylesheet" type="text/css" href="style.css">
</head>
<body>
  <h1 style="color:red">The file is not found</h1>
  <p>IP and port number of the client: {client}</p>
</body>
</html>
"#
    );

    ResponseBuilder::new(StatusCode::NotFound)
        .header("Content-Type", "text/html")
        .body(page)
        .build()
}

/// Wraps an image in a page that embeds it as a `data:` URI.
pub fn image_page(image: &ResolvedResource) -> Response {
    let payload = STANDARD.encode(&image.bytes);
    Response::html(format!(
        r#"<html><body><h1>Image Display</h1><img src="data:{};base64,{}" /></body></html>"#,
        image.content_type, payload
    ))
}
