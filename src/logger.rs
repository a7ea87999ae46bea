use colored::{ColoredString, Colorize};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};

/** Below info, only records from this crate are shown. */
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

static LOGGER: TerminalLogger = TerminalLogger;

/** Installs the terminal logger. Log lines go to stderr so they never interleave with a rendered frame. */
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
	log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct TerminalLogger;

fn styled(record: &Record) -> ColoredString {
	let line = format!("{}", record.args());

	match record.level() {
		Level::Error => format!("error: {line}").red().bold(),
		Level::Warn => line.yellow(),
		Level::Info => line.normal(),
		Level::Debug => format!("[{}] {line}", record.target()).purple(),
		Level::Trace => format!("[{}] {line}", record.target()).dimmed(),
	}
}

impl Log for TerminalLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
			&& (metadata.level() <= Level::Info || metadata.target().starts_with(OWN_TARGET))
	}

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			eprintln!("{}", styled(record));
		}
	}

	fn flush(&self) {}
}
