use campus_server::http::parser::{ParseError, message_length, parse_http_request};
use campus_server::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_parse_post_request_with_form_body() {
    let req = b"POST /find-image HTTP/1.1\r\nHost: localhost\r\nContent-Length: 13\r\n\r\nname=bzu-logo";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/find-image");
    assert_eq!(parsed.body, b"name=bzu-logo".to_vec());
}

#[test]
fn test_parse_headers_are_case_insensitive() {
    let req = b"GET /path HTTP/1.1\r\nhost: example.com\r\nUSER-AGENT: test-client\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("user-agent"), Some("test-client"));
}

#[test]
fn test_parse_keeps_query_string_in_path() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_truncated_headers_still_parse() {
    // A read that stopped before the blank line
    let req = b"GET /style.css HTTP/1.1\r\nHost: example.com\r\nAcc";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/style.css");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_short_body_is_kept() {
    let req = b"POST /find-image HTTP/1.1\r\nContent-Length: 40\r\n\r\nname=bzu";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"name=bzu".to_vec());
}

#[test]
fn test_parse_body_clipped_to_content_length() {
    let req = b"POST /find-image HTTP/1.1\r\nContent-Length: 4\r\n\r\nname=bzu";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"name".to_vec());
}

#[test]
fn test_parse_body_without_content_length_takes_rest() {
    let req = b"POST /find-image HTTP/1.1\r\n\r\nname=bzu-logo";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"name=bzu-logo".to_vec());
}

#[test]
fn test_parse_missing_version_defaults() {
    let parsed = parse_http_request(b"GET /itc\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/itc");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_single_token_request_line() {
    let result = parse_http_request(b"GET\r\n\r\n");
    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_blank_request_line() {
    let result = parse_http_request(b"\r\n\r\n");
    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_empty_buffer() {
    assert!(matches!(parse_http_request(b""), Err(ParseError::Empty)));
}

#[test]
fn test_parse_invalid_http_method() {
    let result = parse_http_request(b"INVALID / HTTP/1.1\r\n\r\n");
    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_header_without_colon_is_skipped() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: a\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("Host"), Some("a"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_message_length_includes_declared_body() {
    let head = b"POST /find-image HTTP/1.1\r\ncontent-length: 13\r\n\r\n";
    assert_eq!(message_length(head), Some(head.len() + 13));
}

#[test]
fn test_message_length_incomplete_head() {
    assert_eq!(message_length(b"POST /find-image HTTP/1.1\r\n"), None);
}

#[test]
fn test_message_length_saturates_on_huge_content_length() {
    let req = format!(
        "POST /find-image HTTP/1.1\r\nContent-Length: {}\r\n\r\nname=x",
        usize::MAX
    );
    assert_eq!(message_length(req.as_bytes()), Some(usize::MAX));
}

#[test]
fn test_message_length_ignores_non_numeric_content_length() {
    let head = b"POST /find-image HTTP/1.1\r\nContent-Length: lots\r\n\r\n";
    assert_eq!(message_length(head), Some(head.len()));
}

#[test]
fn test_parse_huge_content_length_keeps_received_body() {
    let req = format!(
        "POST /find-image HTTP/1.1\r\nContent-Length: {}\r\n\r\nname=x",
        usize::MAX
    );
    let parsed = parse_http_request(req.as_bytes()).unwrap();

    assert_eq!(parsed.body, b"name=x".to_vec());
}

#[test]
fn test_parse_non_numeric_content_length_takes_rest() {
    let req = b"POST /find-image HTTP/1.1\r\nContent-Length: lots\r\n\r\nname=x";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"name=x".to_vec());
}
