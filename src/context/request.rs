use super::Context;
use crate::accessor::{Cookie, Queries, RequestAccessor};
use bytes::Bytes;
use hyper::{HeaderMap, Method, Version};
use std::io;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

impl<'a> Context<'a> {
    pub fn request(&self) -> &dyn RequestAccessor {
        self.exchange.request()
    }

    /// Basic 인증 헤더의 사용자명과 비밀번호
    pub fn basic_auth(&self) -> Option<(String, String)> {
        self.request().basic_auth()
    }

    pub fn body(&self) -> io::Result<Bytes> {
        self.request().body()
    }

    /// 요청한 클라이언트의 IP 주소
    ///
    /// `X-Forwarded-For` 값이 있으면 검증 없이 그대로 반환합니다.
    /// 신뢰할 수 없는 프록시 뒤라면 상위에서 걸러야 합니다.
    pub fn client_ip(&self) -> String {
        let proxy_ip = self.header(X_FORWARDED_FOR);
        if !proxy_ip.is_empty() {
            return proxy_ip;
        }
        self.request().client_ip()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.request().content_length()
    }

    /// `Content-Type`의 미디어 타입만 반환합니다 (파라미터 제외). 파싱 실패 시 빈 문자열.
    ///
    /// 파라미터가 잘못되어도 미디어 타입 자체가 유효하면 그대로 반환합니다.
    pub fn content_type(&self) -> String {
        let header = self.header(hyper::header::CONTENT_TYPE.as_str());
        let media_type = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        media_type
            .parse::<mime::Mime>()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default()
    }

    pub fn cookie(&self, name: &str) -> Option<Cookie> {
        self.request().cookie(name)
    }

    pub fn cookies(&self) -> Vec<Cookie> {
        self.request().cookies()
    }

    /// 헤더의 첫 번째 값. 없거나 문자열이 아니면 빈 문자열.
    pub fn header(&self, key: &str) -> String {
        self.request()
            .headers()
            .get(key)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn header_values(&self, key: &str) -> Vec<String> {
        self.request()
            .headers()
            .get_all(key)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.request().headers()
    }

    pub fn method(&self) -> &Method {
        self.request().method()
    }

    pub fn protocol(&self) -> Version {
        self.request().protocol()
    }

    pub fn path(&self) -> &str {
        self.request().path()
    }

    /// 경로 파라미터 값. 없으면 빈 문자열.
    pub fn path_value(&self, name: &str) -> &str {
        self.request().path_value(name).unwrap_or_default()
    }

    pub fn resource(&self) -> &str {
        self.request().resource()
    }

    /// 쿼리 파라미터의 첫 번째 값. 없으면 빈 문자열.
    pub fn query(&self, key: &str) -> &str {
        self.queries()
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn query_values(&self, key: &str) -> &[String] {
        self.queries()
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn queries(&self) -> &Queries {
        self.request().queries()
    }
}
