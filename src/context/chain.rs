use super::Context;
use std::sync::Arc;
use tracing::debug;

/// 체인에 등록되는 핸들러
///
/// 같은 컨텍스트를 받아 `next()`를 호출하면 나머지 체인을 먼저 실행한 뒤
/// 자신의 후처리로 돌아옵니다.
pub type HandlerFunc = Arc<dyn Fn(&mut Context<'_>) + Send + Sync>;

/// 클로저를 `HandlerFunc`로 감쌉니다.
pub fn handler<F>(f: F) -> HandlerFunc
where
    F: Fn(&mut Context<'_>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 핸들러 체인 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    NotStarted,
    Running,
    Aborted,
    Completed,
}

impl<'a> Context<'a> {
    /// 체인의 다음 핸들러부터 실행합니다.
    ///
    /// 핸들러 안에서 다시 호출될 수 있으며, 중단되었거나 체인이 끝났으면
    /// 아무 핸들러도 실행하지 않습니다.
    pub fn next(&mut self) {
        self.index += 1;
        while !self.aborted {
            let handler = match self.handlers.get(self.index as usize) {
                Some(handler) => Arc::clone(handler),
                None => break,
            };
            self.invoked += 1;
            handler(self);
            self.index += 1;
        }
    }

    /// 이후 핸들러가 실행되지 않도록 표시합니다. 이미 실행 중인 핸들러는 끝까지 실행됩니다.
    pub fn abort(&mut self) {
        if !self.aborted {
            debug!(index = self.index, "Handler chain aborted");
        }
        self.aborted = true;
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// 체인 끝에 핸들러들을 추가합니다.
    ///
    /// 실행 중에 추가된 핸들러도 이후 반복에서 보입니다.
    pub fn use_handlers<I>(&mut self, handlers: I)
    where
        I: IntoIterator<Item = HandlerFunc>,
    {
        self.handlers.extend(handlers);
    }

    pub fn use_fn<F>(&mut self, f: F)
    where
        F: Fn(&mut Context<'_>) + Send + Sync + 'static,
    {
        self.handlers.push(handler(f));
    }

    /// 현재 커서 위치 (시작 전에는 -1)
    pub fn index(&self) -> isize {
        self.index
    }

    /// 지금까지 시작된 핸들러 수
    pub fn handlers_invoked(&self) -> usize {
        self.invoked
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn chain_state(&self) -> ChainState {
        if self.aborted {
            ChainState::Aborted
        } else if self.index < 0 {
            ChainState::NotStarted
        } else if (self.index as usize) < self.handlers.len() {
            ChainState::Running
        } else {
            ChainState::Completed
        }
    }
}
