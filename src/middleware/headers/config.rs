use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 응답 헤더 미들웨어 설정
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HeadersConfig {
    /// 추가할 헤더 (기존 값 유지)
    #[serde(default)]
    pub add: BTreeMap<String, String>,

    /// 덮어쓸 헤더
    #[serde(default)]
    pub set: BTreeMap<String, String>,

    /// 삭제할 헤더
    #[serde(default)]
    pub remove: Vec<String>,

    /// 기본 보안 헤더 적용 여부
    #[serde(default)]
    pub security_headers: bool,
}
