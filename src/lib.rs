//! Simple Context는 HTTP 미들웨어 파이프라인을 위한 요청 단위 실행 컨텍스트입니다.
//!
//! # 주요 기능
//!
//! - 순차 핸들러 체인 실행 및 중단(abort)
//! - 핸들러 간 공유되는 동시성 안전 상태 저장소
//! - 요청/응답 접근자 위임
//!
//! # 예제
//!
//! ```
//! use simple_context::accessor::HyperExchange;
//! use simple_context::context::{handler, Context};
//! use bytes::Bytes;
//!
//! let request = hyper::Request::builder()
//!     .uri("/users/42?verbose=1")
//!     .body(Bytes::new())
//!     .unwrap();
//! let mut exchange = HyperExchange::new(request, "127.0.0.1:9000".parse().unwrap())
//!     .with_resource("/users/{id}")
//!     .with_path_param("id", "42");
//!
//! let mut ctx = Context::new(&mut exchange);
//! ctx.use_handlers([
//!     handler(|ctx| {
//!         ctx.set("user_id", ctx.path_value("id").to_string());
//!         ctx.next();
//!         ctx.set_header("X-Handled", "true");
//!     }),
//!     handler(|ctx| {
//!         let user_id = ctx.state().get_as::<String>("user_id").unwrap();
//!         ctx.write(format!("user {}", user_id).as_bytes()).unwrap();
//!     }),
//! ]);
//! ctx.next();
//! assert!(!ctx.is_aborted());
//! ```
//!
//! # 엔진
//!
//! ```
//! use simple_context::accessor::HyperExchange;
//! use simple_context::context::handler;
//! use simple_context::Engine;
//! use bytes::Bytes;
//!
//! let mut engine = Engine::new();
//! engine.use_handler(handler(|ctx| {
//!     if ctx.header("Authorization").is_empty() {
//!         let _ = ctx.abort_with_status(401);
//!     }
//! }));
//!
//! let request = hyper::Request::builder().uri("/").body(Bytes::new()).unwrap();
//! let mut exchange = HyperExchange::new(request, "127.0.0.1:9000".parse().unwrap());
//! let outcome = engine.handle(&mut exchange, [handler(|ctx| {
//!     ctx.write(b"secret").unwrap();
//! })]);
//!
//! assert!(outcome.aborted);
//! assert_eq!(exchange.into_response().status(), 401);
//! ```

pub mod accessor;
pub mod context;
pub mod engine;
pub mod logging;
pub mod middleware;
pub mod settings;

pub use context::{Context, ContextError, HandlerFunc, State};
pub use engine::{Engine, Outcome};
