use crate::settings::{LogFormat, LogOutput, LogSettings};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// 전역 tracing 구독자를 설치합니다.
///
/// 파일 출력일 때 반환되는 guard가 살아 있는 동안만 로그가 기록됩니다.
pub fn init_logging(settings: &LogSettings) -> Result<Option<WorkerGuard>, InitError> {
    let filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::from_level(settings.level).into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    match &settings.output {
        LogOutput::Stdout => {
            match settings.format {
                LogFormat::Text => builder.try_init()?,
                LogFormat::Json => builder.json().try_init()?,
            }
            Ok(None)
        }
        LogOutput::File(path) => {
            let path = Path::new(path);
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "simple_context.log".to_string());

            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let builder = builder.with_writer(writer).with_ansi(false);
            match settings.format {
                LogFormat::Text => builder.try_init()?,
                LogFormat::Json => builder.json().try_init()?,
            }
            Ok(Some(guard))
        }
    }
}
