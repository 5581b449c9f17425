//! 요청 단위 실행 컨텍스트
//!
//! 요청/응답 접근자, 핸들러 간 공유 상태, 순차 핸들러 체인 실행기를 묶습니다.

mod chain;
mod error;
mod request;
mod response;
mod state;

use crate::accessor::Exchange;

pub use chain::{handler, ChainState, HandlerFunc};
pub use error::ContextError;
pub use state::{State, Value};

/// 요청 하나에 대한 실행 컨텍스트
///
/// 접근자는 빌려 쓰기만 하며, 요청이 끝나면 컨텍스트와 함께 반납됩니다.
pub struct Context<'a> {
    exchange: &'a mut dyn Exchange,
    state: State,
    index: isize,
    aborted: bool,
    handlers: Vec<HandlerFunc>,
    invoked: usize,
}

impl<'a> Context<'a> {
    pub fn new(exchange: &'a mut dyn Exchange) -> Self {
        Self {
            exchange,
            state: State::new(),
            index: -1,
            aborted: false,
            handlers: Vec::new(),
            invoked: 0,
        }
    }

    /// 공유 상태 저장소 핸들. 복제해서 다른 스레드로 넘길 수 있습니다.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.get(key)
    }

    /// 값을 저장하고 이전 값을 반환합니다.
    pub fn set<T: std::any::Any + Send + Sync>(&self, key: impl Into<String>, value: T) -> Option<Value> {
        self.state.set(key, value)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("state", &self.state)
            .field("index", &self.index)
            .field("aborted", &self.aborted)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
