use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("invalid status code: {0}")]
    InvalidStatusCode(u16),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ContextError {
    /// 접근자 I/O 오류라면 원본 오류를 반환합니다.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidStatusCode(_) => None,
        }
    }
}
