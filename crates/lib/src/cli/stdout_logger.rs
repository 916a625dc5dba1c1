use log::{Level, LevelFilter, Log};

/// Logger which writes diagnostics to stdout, and warnings or errors to
/// stderr.
pub(crate) struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub(crate) const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// The most verbose level which is written.
    pub(crate) fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or_default();
        let line = record.line().unwrap_or_default();

        match record.level() {
            level @ (Level::Error | Level::Warn) => {
                eprintln!("{file}:{line}: {level}: {}", record.args());
            }
            level => {
                println!("{file}:{line}: {level}: {}", record.args());
            }
        }
    }

    fn flush(&self) {}
}
