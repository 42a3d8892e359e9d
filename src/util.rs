use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::{Level, Log, Metadata, Record};
use std::fmt;
use std::sync::Arc;

pub const LOG_TARGET: &str = "item_summary";

pub fn init_log() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?.log_to_stdout().start()
}

/// Log sink handed to the pipeline instead of it reaching for the global logger.
#[derive(Clone)]
pub struct Trace {
    sink: Arc<dyn Log>,
}

impl Trace {
    pub fn new(sink: Arc<dyn Log>) -> Self {
        Trace { sink }
    }

    /// Forwards to whatever logger `init_log` installed.
    pub fn global() -> Self {
        Trace::new(Arc::new(GlobalLog))
    }

    pub fn emit(&self, level: Level, args: fmt::Arguments) {
        let record = Record::builder()
            .args(args)
            .level(level)
            .target(LOG_TARGET)
            .build();
        if self.sink.enabled(record.metadata()) {
            self.sink.log(&record);
        }
    }

    pub fn debug(&self, args: fmt::Arguments) {
        self.emit(Level::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments) {
        self.emit(Level::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments) {
        self.emit(Level::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments) {
        self.emit(Level::Error, args)
    }
}

struct GlobalLog;

impl Log for GlobalLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}
