use crate::accessor::Exchange;
use crate::context::{Context, HandlerFunc};
use crate::middleware::{HeadersMiddleware, Middleware, RequestLogger};
use crate::settings::Settings;
use tracing::debug;

/// 체인 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub aborted: bool,
    pub handlers_run: usize,
}

/// 전역 미들웨어를 보관하고 요청마다 컨텍스트를 구성해 체인을 실행합니다.
#[derive(Default, Clone)]
pub struct Engine {
    middlewares: Vec<HandlerFunc>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정에서 활성화된 내장 미들웨어를 등록합니다.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut engine = Self::new();

        if settings.middleware.request_log {
            engine.use_handler(RequestLogger::new().into_handler());
        }
        if let Some(headers) = &settings.middleware.headers {
            engine.use_handler(HeadersMiddleware::new(headers.clone()).into_handler());
        }

        debug!(middlewares = engine.middlewares.len(), "Engine created from settings");
        engine
    }

    pub fn use_handler(&mut self, handler: HandlerFunc) -> &mut Self {
        self.middlewares.push(handler);
        self
    }

    pub fn middleware_count(&self) -> usize {
        self.middlewares.len()
    }

    /// 전역 미들웨어 뒤에 라우트 핸들러를 붙여 체인을 한 번 실행합니다.
    pub fn handle<I>(&self, exchange: &mut dyn Exchange, route_handlers: I) -> Outcome
    where
        I: IntoIterator<Item = HandlerFunc>,
    {
        let mut ctx = Context::new(exchange);
        ctx.use_handlers(self.middlewares.iter().cloned());
        ctx.use_handlers(route_handlers);
        ctx.next();

        Outcome {
            aborted: ctx.is_aborted(),
            handlers_run: ctx.handlers_invoked(),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
