//! 요청/응답 접근자 인터페이스
//!
//! 실제 HTTP 전송 계층은 이 트레이트들을 통해서만 컨텍스트에 노출됩니다.

mod exchange;

use bytes::Bytes;
use hyper::{HeaderMap, Method, Version};
use std::collections::HashMap;
use std::io;

pub use exchange::HyperExchange;

/// 쿼리 파라미터 컬렉션 (키 순서는 보장하지 않으며, 같은 키의 값들은 입력 순서 유지)
pub type Queries = HashMap<String, Vec<String>>;

/// 요청에 포함된 쿠키
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 요청 측 접근자
pub trait RequestAccessor {
    fn method(&self) -> &Method;
    fn protocol(&self) -> Version;
    fn path(&self) -> &str;
    /// 라우터가 매칭한 경로 패턴 (예: `/users/{id}`)
    fn resource(&self) -> &str;
    fn path_value(&self, name: &str) -> Option<&str>;
    fn queries(&self) -> &Queries;
    fn headers(&self) -> &HeaderMap;
    fn cookies(&self) -> Vec<Cookie>;
    fn content_length(&self) -> Option<u64>;
    fn body(&self) -> io::Result<Bytes>;
    fn basic_auth(&self) -> Option<(String, String)>;
    /// 소켓 피어 주소 등에서 직접 얻은 클라이언트 IP
    fn client_ip(&self) -> String;

    fn cookie(&self, name: &str) -> Option<Cookie> {
        self.cookies().into_iter().find(|cookie| cookie.name == name)
    }
}

/// 응답 측 접근자
pub trait ResponseAccessor {
    fn add_header(&mut self, key: &str, value: &str);
    fn set_header(&mut self, key: &str, value: &str);
    fn get_header(&self, key: &str) -> Option<String>;
    fn del_header(&mut self, key: &str);
    /// 응답이 이미 확정된 경우 실패합니다.
    fn status(&mut self, code: u16) -> io::Result<()>;
    fn write(&mut self, data: &[u8]) -> io::Result<usize>;
}

/// 하나의 요청/응답 쌍에 대한 접근자
pub trait Exchange {
    fn request(&self) -> &dyn RequestAccessor;
    fn response(&mut self) -> &mut dyn ResponseAccessor;
}
