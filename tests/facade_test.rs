mod common;

use bytes::Bytes;
use common::MockExchange;
use hyper::{Method, Version};
use simple_context::accessor::Cookie;
use simple_context::{Context, ContextError};
use std::io;

#[test]
fn test_status_rejects_out_of_range_codes() {
    let mut exchange = MockExchange::new();
    {
        let mut ctx = Context::new(&mut exchange);
        for code in [50, 99, 1000] {
            match ctx.status(code) {
                Err(ContextError::InvalidStatusCode(rejected)) => assert_eq!(rejected, code),
                other => panic!("expected invalid status code for {}, got {:?}", code, other),
            }
        }
        assert!(ctx.status(200).is_ok());
        assert!(ctx.status(999).is_ok());
        assert!(ctx.status(100).is_ok());
    }

    // 범위를 벗어난 코드는 접근자까지 전달되지 않음
    assert_eq!(exchange.response.status_calls, vec![200, 999, 100]);
}

#[test]
fn test_status_propagates_accessor_error() {
    let mut exchange = MockExchange::new();
    let mut ctx = Context::new(&mut exchange);

    ctx.write(b"hello").unwrap();
    let err = ctx.status(500).unwrap_err();

    let io_err = err.as_io().expect("accessor error");
    assert_eq!(io_err.kind(), io::ErrorKind::Other);
    assert_eq!(err.to_string(), "response already committed");
}

#[test]
fn test_write_error_is_unmodified() {
    let mut exchange = MockExchange::new();
    exchange.response.fail_writes = true;
    let mut ctx = Context::new(&mut exchange);

    let err = ctx.write(b"payload").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_write_returns_bytes_accepted() {
    let mut exchange = MockExchange::new();
    {
        let mut ctx = Context::new(&mut exchange);
        assert_eq!(ctx.write(b"abc").unwrap(), 3);
    }
    assert_eq!(exchange.response.body, b"abc");
}

#[test]
fn test_client_ip_prefers_forwarded_header() {
    let mut exchange = MockExchange::new().with_header("x-forwarded-for", "1.2.3.4");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.client_ip(), "1.2.3.4");
}

#[test]
fn test_client_ip_falls_back_to_accessor() {
    let mut exchange = MockExchange::new();
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.client_ip(), "192.0.2.10");
}

#[test]
fn test_client_ip_ignores_empty_forwarded_header() {
    let mut exchange = MockExchange::new().with_header("x-forwarded-for", "");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.client_ip(), "192.0.2.10");
}

#[test]
fn test_content_type_strips_parameters() {
    let mut exchange =
        MockExchange::new().with_header("content-type", "application/json; charset=utf-8");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "application/json");
}

#[test]
fn test_content_type_allows_whitespace_before_parameters() {
    let mut exchange =
        MockExchange::new().with_header("content-type", "Text/Plain ; charset=\"x\"");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "text/plain");
}

#[test]
fn test_content_type_ignores_broken_parameters() {
    let mut exchange = MockExchange::new().with_header("content-type", "application/json; charset");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "application/json");

    let mut exchange = MockExchange::new().with_header("content-type", "multipart/form-data; =;;");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "multipart/form-data");
}

#[test]
fn test_content_type_malformed_is_empty() {
    let mut exchange = MockExchange::new().with_header("content-type", "not a media type");
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "");

    let mut exchange = MockExchange::new();
    let ctx = Context::new(&mut exchange);
    assert_eq!(ctx.content_type(), "");
}

#[test]
fn test_request_pass_through() {
    let mut exchange = MockExchange::new()
        .with_header("x-tag", "one")
        .with_header("x-tag", "two")
        .with_query("page", "2")
        .with_query("sort", "name")
        .with_query("sort", "date");
    exchange.request.method = Method::POST;
    exchange.request.version = Version::HTTP_2;
    exchange.request.path = "/users/42".to_string();
    exchange.request.resource = "/users/{id}".to_string();
    exchange.request.path_params.insert("id".to_string(), "42".to_string());
    exchange.request.cookies = vec![Cookie::new("session", "abc")];
    exchange.request.body = Some(Bytes::from_static(b"{}"));
    exchange.request.credentials = Some(("admin".to_string(), "secret".to_string()));

    let ctx = Context::new(&mut exchange);

    assert_eq!(*ctx.method(), Method::POST);
    assert_eq!(ctx.protocol(), Version::HTTP_2);
    assert_eq!(ctx.path(), "/users/42");
    assert_eq!(ctx.resource(), "/users/{id}");
    assert_eq!(ctx.path_value("id"), "42");
    assert_eq!(ctx.query("page"), "2");
    assert_eq!(ctx.query_values("sort"), ["name", "date"]);
    assert_eq!(ctx.queries().len(), 2);
    assert_eq!(ctx.header("X-Tag"), "one");
    assert_eq!(ctx.header_values("x-tag"), vec!["one", "two"]);
    assert_eq!(ctx.headers().len(), 2);
    assert_eq!(ctx.cookie("session"), Some(Cookie::new("session", "abc")));
    assert_eq!(ctx.cookies().len(), 1);
    assert_eq!(ctx.content_length(), Some(2));
    assert_eq!(ctx.body().unwrap(), Bytes::from_static(b"{}"));
    assert_eq!(
        ctx.basic_auth(),
        Some(("admin".to_string(), "secret".to_string()))
    );
}

#[test]
fn test_missing_values_are_empty() {
    let mut exchange = MockExchange::new();
    exchange.request.body = None;
    let ctx = Context::new(&mut exchange);

    assert_eq!(ctx.path_value("id"), "");
    assert_eq!(ctx.query("page"), "");
    assert!(ctx.query_values("page").is_empty());
    assert_eq!(ctx.header("x-missing"), "");
    assert!(ctx.header_values("x-missing").is_empty());
    assert_eq!(ctx.cookie("session"), None);
    assert_eq!(ctx.basic_auth(), None);
    assert_eq!(ctx.body().unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_response_headers() {
    let mut exchange = MockExchange::new();
    {
        let mut ctx = Context::new(&mut exchange);
        ctx.add_header("Vary", "Accept");
        ctx.add_header("Vary", "Origin");
        assert_eq!(ctx.get_header("vary"), "Accept");

        ctx.set_header("Vary", "Cookie");
        assert_eq!(ctx.get_header("Vary"), "Cookie");

        ctx.del_header("Vary");
        assert_eq!(ctx.get_header("Vary"), "");
    }
    assert!(exchange.response.headers.is_empty());
}

#[test]
fn test_abort_with_status() {
    let mut exchange = MockExchange::new();
    {
        let mut ctx = Context::new(&mut exchange);
        ctx.use_fn(|ctx| {
            ctx.abort_with_status(403).unwrap();
        });
        ctx.use_fn(|ctx| {
            ctx.write(b"should not run").unwrap();
        });
        ctx.next();
        assert!(ctx.is_aborted());

        // 잘못된 코드여도 중단은 유지됨
        assert!(ctx.abort_with_status(42).is_err());
        assert!(ctx.is_aborted());
    }
    assert_eq!(exchange.response.status_calls, vec![403]);
    assert!(exchange.response.body.is_empty());
}
