use super::Middleware;
use crate::context::Context;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 요청 ID가 저장되는 상태 키
pub const REQUEST_ID_KEY: &str = "request_id";

/// 요청 로깅 미들웨어
///
/// 요청 ID를 발급해 상태에 저장하고, 나머지 체인을 감싸 처리 시간을 기록합니다.
#[derive(Debug, Default)]
pub struct RequestLogger;

impl RequestLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for RequestLogger {
    fn name(&self) -> &str {
        "request-logger"
    }

    fn handle(&self, ctx: &mut Context<'_>) {
        let request_id = Uuid::new_v4().to_string();
        ctx.set(REQUEST_ID_KEY, request_id.clone());

        let start = Instant::now();
        info!(
            request_id = %request_id,
            method = %ctx.method(),
            path = %ctx.path(),
            client_ip = %ctx.client_ip(),
            "Received request"
        );

        ctx.next();

        let duration_ms = start.elapsed().as_millis() as u64;
        if ctx.is_aborted() {
            warn!(
                request_id = %request_id,
                duration_ms = duration_ms,
                handlers = ctx.handlers_invoked(),
                "Request chain aborted"
            );
        } else {
            info!(
                request_id = %request_id,
                duration_ms = duration_ms,
                handlers = ctx.handlers_invoked(),
                "Request completed"
            );
        }
    }
}
