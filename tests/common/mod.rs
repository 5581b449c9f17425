#![allow(dead_code)]

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Version};
use simple_context::accessor::{Cookie, Exchange, Queries, RequestAccessor, ResponseAccessor};
use std::collections::HashMap;
use std::io;

// 메모리 기반 요청 접근자
#[derive(Debug)]
pub struct MockRequest {
    pub method: Method,
    pub version: Version,
    pub path: String,
    pub resource: String,
    pub path_params: HashMap<String, String>,
    pub queries: Queries,
    pub headers: HeaderMap,
    pub cookies: Vec<Cookie>,
    pub body: Option<Bytes>,
    pub credentials: Option<(String, String)>,
    pub client_ip: String,
}

// 호출 기록을 남기는 응답 접근자
#[derive(Debug, Default)]
pub struct MockResponse {
    pub headers: Vec<(String, String)>,
    pub status_calls: Vec<u16>,
    pub body: Vec<u8>,
    pub committed: bool,
    pub fail_writes: bool,
}

#[derive(Debug)]
pub struct MockExchange {
    pub request: MockRequest,
    pub response: MockResponse,
}

impl MockExchange {
    pub fn new() -> Self {
        Self {
            request: MockRequest {
                method: Method::GET,
                version: Version::HTTP_11,
                path: "/".to_string(),
                resource: "/".to_string(),
                path_params: HashMap::new(),
                queries: Queries::new(),
                headers: HeaderMap::new(),
                cookies: Vec::new(),
                body: Some(Bytes::new()),
                credentials: None,
                client_ip: "192.0.2.10".to_string(),
            },
            response: MockResponse::default(),
        }
    }

    pub fn with_header(mut self, key: &'static str, value: &str) -> Self {
        self.request.headers.append(
            HeaderName::from_static(key),
            HeaderValue::from_str(value).unwrap(),
        );
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.request
            .queries
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }
}

impl RequestAccessor for MockRequest {
    fn method(&self) -> &Method {
        &self.method
    }

    fn protocol(&self) -> Version {
        self.version
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn resource(&self) -> &str {
        &self.resource
    }

    fn path_value(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    fn queries(&self) -> &Queries {
        &self.queries
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn cookies(&self) -> Vec<Cookie> {
        self.cookies.clone()
    }

    fn content_length(&self) -> Option<u64> {
        self.body.as_ref().map(|body| body.len() as u64)
    }

    fn body(&self) -> io::Result<Bytes> {
        self.body
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "body already consumed"))
    }

    fn basic_auth(&self) -> Option<(String, String)> {
        self.credentials.clone()
    }

    fn client_ip(&self) -> String {
        self.client_ip.clone()
    }
}

impl ResponseAccessor for MockResponse {
    fn add_header(&mut self, key: &str, value: &str) {
        self.headers.push((key.to_string(), value.to_string()));
    }

    fn set_header(&mut self, key: &str, value: &str) {
        self.del_header(key);
        self.add_header(key, value);
    }

    fn get_header(&self, key: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.clone())
    }

    fn del_header(&mut self, key: &str) {
        self.headers.retain(|(name, _)| !name.eq_ignore_ascii_case(key));
    }

    fn status(&mut self, code: u16) -> io::Result<()> {
        self.status_calls.push(code);
        if self.committed {
            return Err(io::Error::new(io::ErrorKind::Other, "response already committed"));
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection closed"));
        }
        self.committed = true;
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}

impl Exchange for MockExchange {
    fn request(&self) -> &dyn RequestAccessor {
        &self.request
    }

    fn response(&mut self) -> &mut dyn ResponseAccessor {
        &mut self.response
    }
}

/// 공유 상태에 실행 기록을 남기는 헬퍼
pub fn record(ctx: &simple_context::Context<'_>, entry: &str) {
    let log = ctx
        .state()
        .get_as::<std::sync::Mutex<Vec<String>>>("log")
        .expect("log must be initialized");
    log.lock().unwrap().push(entry.to_string());
}

pub fn recorded(ctx: &simple_context::Context<'_>) -> Vec<String> {
    ctx.state()
        .get_as::<std::sync::Mutex<Vec<String>>>("log")
        .map(|log| log.lock().unwrap().clone())
        .unwrap_or_default()
}
