use super::config::HeadersConfig;
use crate::context::Context;
use crate::middleware::Middleware;
use tracing::debug;

/// 헤더 수정 미들웨어
#[derive(Debug)]
pub struct HeadersMiddleware {
    config: HeadersConfig,
}

impl HeadersMiddleware {
    pub fn new(config: HeadersConfig) -> Self {
        Self { config }
    }

    /// 기본 보안 헤더를 설정합니다.
    fn apply_security_headers(&self, ctx: &mut Context<'_>) {
        // 클릭재킹 방지
        ctx.set_header("X-Frame-Options", "DENY");
        // MIME 타입 스니핑 방지
        ctx.set_header("X-Content-Type-Options", "nosniff");
        ctx.set_header("Strict-Transport-Security", "max-age=31536000");
    }
}

impl Middleware for HeadersMiddleware {
    fn name(&self) -> &str {
        "headers"
    }

    fn handle(&self, ctx: &mut Context<'_>) {
        if self.config.security_headers {
            self.apply_security_headers(ctx);
        }

        for (key, value) in &self.config.set {
            ctx.set_header(key, value);
        }
        for (key, value) in &self.config.add {
            ctx.add_header(key, value);
        }
        for key in &self.config.remove {
            ctx.del_header(key);
        }

        debug!(
            set = self.config.set.len(),
            add = self.config.add.len(),
            remove = self.config.remove.len(),
            "Response headers applied"
        );
    }
}
