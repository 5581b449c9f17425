use super::{Cookie, Exchange, Queries, RequestAccessor, ResponseAccessor};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bytes::{Bytes, BytesMut};
use http_body_util::Full;
use hyper::header::{self, HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Request, Response, StatusCode, Version};
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use tracing::warn;

/// hyper 요청을 감싸는 `Exchange` 구현
///
/// 라우팅은 외부에서 수행되므로 경로 패턴과 경로 파라미터는
/// `with_resource`, `with_path_param`으로 주입받습니다.
pub struct HyperExchange {
    request: HyperRequest,
    response: HyperResponse,
}

struct HyperRequest {
    inner: Request<Bytes>,
    peer_addr: SocketAddr,
    resource: String,
    path_params: HashMap<String, String>,
    queries: Queries,
}

#[derive(Debug)]
struct HyperResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
    committed: bool,
}

impl HyperExchange {
    pub fn new(request: Request<Bytes>, peer_addr: SocketAddr) -> Self {
        let queries = parse_queries(request.uri().query());
        Self {
            request: HyperRequest {
                inner: request,
                peer_addr,
                resource: String::new(),
                path_params: HashMap::new(),
                queries,
            },
            response: HyperResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                body: BytesMut::new(),
                committed: false,
            },
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.request.resource = resource.into();
        self
    }

    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.path_params.insert(name.into(), value.into());
        self
    }

    /// 누적된 응답 상태를 hyper 응답으로 변환합니다.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let HyperResponse { status, headers, body, .. } = self.response;
        let mut response = Response::new(Full::new(body.freeze()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

fn parse_queries(query: Option<&str>) -> Queries {
    let mut queries = Queries::new();
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            queries.entry(key.into_owned()).or_default().push(value.into_owned());
        }
    }
    queries
}

impl RequestAccessor for HyperRequest {
    fn method(&self) -> &Method {
        self.inner.method()
    }

    fn protocol(&self) -> Version {
        self.inner.version()
    }

    fn path(&self) -> &str {
        self.inner.uri().path()
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
        self.inner.headers()
    }

    fn cookies(&self) -> Vec<Cookie> {
        // "a=1; b=2" 형식, Cookie 헤더가 여러 개일 수 있음
        self.inner
            .headers()
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|line| line.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Cookie::new(name, value.trim().trim_matches('"')))
            })
            .collect()
    }

    fn content_length(&self) -> Option<u64> {
        match self.inner.headers().get(header::CONTENT_LENGTH) {
            Some(value) => value.to_str().ok()?.trim().parse().ok(),
            None => Some(self.inner.body().len() as u64),
        }
    }

    fn body(&self) -> io::Result<Bytes> {
        Ok(self.inner.body().clone())
    }

    fn basic_auth(&self) -> Option<(String, String)> {
        self.inner
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|auth| auth.strip_prefix("Basic "))
            .and_then(|credentials| BASE64.decode(credentials.trim()).ok())
            .and_then(|decoded| String::from_utf8(decoded).ok())
            .and_then(|pair| {
                let (username, password) = pair.split_once(':')?;
                Some((username.to_string(), password.to_string()))
            })
    }

    fn client_ip(&self) -> String {
        self.peer_addr.ip().to_string()
    }
}

impl ResponseAccessor for HyperResponse {
    fn add_header(&mut self, key: &str, value: &str) {
        match header_pair(key, value) {
            Some((name, value)) => {
                self.headers.append(name, value);
            }
            None => warn!(key = %key, "Ignoring invalid response header"),
        }
    }

    fn set_header(&mut self, key: &str, value: &str) {
        match header_pair(key, value) {
            Some((name, value)) => {
                self.headers.insert(name, value);
            }
            None => warn!(key = %key, "Ignoring invalid response header"),
        }
    }

    fn get_header(&self, key: &str) -> Option<String> {
        self.headers
            .get(key)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn del_header(&mut self, key: &str) {
        self.headers.remove(key);
    }

    fn status(&mut self, code: u16) -> io::Result<()> {
        if self.committed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "response already committed",
            ));
        }
        self.status = StatusCode::from_u16(code)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.committed = true;
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}

fn header_pair(key: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(key.as_bytes()).ok()?;
    let value = HeaderValue::from_str(value).ok()?;
    Some((name, value))
}

impl Exchange for HyperExchange {
    fn request(&self) -> &dyn RequestAccessor {
        &self.request
    }

    fn response(&mut self) -> &mut dyn ResponseAccessor {
        &mut self.response
    }
}
