use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Console logging, level taken from `RUST_LOG` or `level`
pub fn setup_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .format(flexi_logger::colored_default_format)
        .start()
}

/// Rotating file logs in `directory`, mirrored to stderr
pub fn setup_file_logging(level: &str, directory: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_file(FileSpec::default().directory(directory))
        .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // 10 MB
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}
