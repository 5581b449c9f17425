use crate::context::{handler, Context, HandlerFunc};
use std::sync::Arc;

/// 미들웨어 트레이트
///
/// 컨텍스트를 받아 요청/응답을 다루고, 필요하면 `ctx.next()`로 나머지 체인을 감쌉니다.
pub trait Middleware: Send + Sync + 'static {
    /// 미들웨어의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 요청을 처리합니다.
    fn handle(&self, ctx: &mut Context<'_>);

    /// 체인에 등록할 수 있는 핸들러로 변환합니다.
    fn into_handler(self) -> HandlerFunc
    where
        Self: Sized,
    {
        let middleware = Arc::new(self);
        handler(move |ctx| middleware.handle(ctx))
    }
}
