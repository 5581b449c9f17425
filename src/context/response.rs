use super::{Context, ContextError};
use crate::accessor::ResponseAccessor;
use std::io;

impl<'a> Context<'a> {
    pub fn response(&mut self) -> &mut dyn ResponseAccessor {
        self.exchange.response()
    }

    /// 응답 헤더에 값을 추가합니다 (기존 값 유지).
    pub fn add_header(&mut self, key: &str, value: &str) {
        self.response().add_header(key, value);
    }

    /// 응답 헤더의 기존 값을 모두 교체합니다.
    pub fn set_header(&mut self, key: &str, value: &str) {
        self.response().set_header(key, value);
    }

    pub fn get_header(&mut self, key: &str) -> String {
        self.response().get_header(key).unwrap_or_default()
    }

    pub fn del_header(&mut self, key: &str) {
        self.response().del_header(key);
    }

    /// 응답 상태 코드를 설정합니다.
    ///
    /// 100-999 범위를 벗어나면 접근자를 호출하지 않고 실패합니다.
    pub fn status(&mut self, code: u16) -> Result<(), ContextError> {
        if !(100..=999).contains(&code) {
            return Err(ContextError::InvalidStatusCode(code));
        }
        self.response().status(code)?;
        Ok(())
    }

    pub fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.response().write(data)
    }

    /// 상태 코드를 설정하고 체인을 중단합니다.
    ///
    /// 상태 설정이 실패해도 체인은 중단됩니다.
    pub fn abort_with_status(&mut self, code: u16) -> Result<(), ContextError> {
        self.abort();
        self.status(code)
    }
}
