//! 헤더 수정 미들웨어
//!
//! 응답 헤더를 설정에 따라 추가, 교체, 삭제합니다.

mod config;
mod middleware;

pub use config::HeadersConfig;
pub use middleware::HeadersMiddleware;
