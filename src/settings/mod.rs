use std::{env, fs, path::Path};
use serde::Deserialize;
use tracing::debug;
use crate::middleware::HeadersConfig;

pub mod logging;
mod error;

pub use logging::{LogFormat, LogOutput, LogSettings};
pub use error::SettingsError;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_FILE_ENV: &str = "SIMPLE_CONTEXT_CONFIG_FILE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    // 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,

    /// 내장 미들웨어 설정
    #[serde(default)]
    pub middleware: MiddlewareSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MiddlewareSettings {
    /// 요청 로깅 미들웨어 활성화 여부
    #[serde(default)]
    pub request_log: bool,

    /// 응답 헤더 미들웨어 설정 (없으면 비활성화)
    #[serde(default)]
    pub headers: Option<HeadersConfig>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = env::var(CONFIG_FILE_ENV) {
            Self::from_toml_file(&config_path)
        } else {
            Self::from_env()
        }
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.as_ref().display(), "Settings loaded from file");
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SettingsError::ParseError { source: e })
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            logging: LogSettings::from_env()?,
            middleware: MiddlewareSettings {
                request_log: parse_env_var::<bool, _>("SIMPLE_CONTEXT_REQUEST_LOG", || false)?,
                headers: None,
            },
        })
    }
}

pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}
