use campus_server::http::headers::Headers;
use campus_server::http::request::{Method, Request, RequestBuilder};

fn request_with_headers(headers: Headers) -> Request {
    Request {
        method: Method::POST,
        path: "/find-image".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");
    headers.insert("Content-Type", "application/x-www-form-urlencoded");

    let req = request_with_headers(headers);

    assert_eq!(req.header("host"), Some("example.com"));
    assert_eq!(
        req.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "42");

    assert_eq!(request_with_headers(headers).content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    assert_eq!(request_with_headers(Headers::new()).content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "not-a-number");

    assert_eq!(request_with_headers(headers).content_length(), 0);
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::POST.to_string(), "POST");
    assert_eq!(Method::GET.as_str(), "GET");
}

#[test]
fn test_request_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/ar")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert!(req.body.is_empty());
}

#[test]
fn test_request_builder_requires_path() {
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_form_decodes_body() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/find-image")
        .body("name=bzu%2Dlogo")
        .build()
        .unwrap();

    assert_eq!(req.form().get("name"), Some("bzu-logo"));
    assert_eq!(req.body_text(), "name=bzu%2Dlogo");
}
