use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr. `RUST_LOG` takes precedence over `default_spec`.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init_logging(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_spec)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
