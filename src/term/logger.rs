use ansi_term::Colour;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Log lines go to stderr so they never mix with console output.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let colour = match record.level() {
            Level::Error => Colour::Red,
            Level::Warn => Colour::Yellow,
            Level::Info => Colour::Green,
            Level::Debug => Colour::Cyan,
            Level::Trace => Colour::Fixed(8),
        };
        eprintln!(
            "{} {}: {}",
            colour.paint(format!("[{:>5}]", record.level())),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Level comes from `CMDER_LOG`; logging is off when it is unset.
pub fn init() {
    let level = match std::env::var("CMDER_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("warn") => LevelFilter::Warn,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
