//! Logger
//!
//! Logs to stderr, filtered by `RUST_LOG` (default `info`), and
//! optionally to a file, filtered by `RUST_LOG_FILE` (default `debug`).

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing::level_filters::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the global logger.
///
/// Any messages buffered through [`pre_init`] are emitted once the logger is installed.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", LevelFilter::INFO));

	let file_layer = log_file.and_then(|path| match self::open_log_file(path, log_file_append) {
		Ok(file) => Some(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.with_filter(self::env_filter("RUST_LOG_FILE", LevelFilter::DEBUG)),
		),
		Err(err) => {
			pre_init::warn(format!("Unable to open log file {path:?}, ignoring: {err}"));
			None
		},
	});

	if let Err(err) = tracing_subscriber::registry()
		.with(stderr_layer)
		.with(file_layer)
		.try_init()
	{
		eprintln!("Unable to initialize logger: {err}");
	}

	pre_init::flush();
}

/// Opens the log file, truncating it unless `append` is set
fn open_log_file(path: &Path, append: bool) -> Result<fs::File, io::Error> {
	let mut options = fs::OpenOptions::new();
	options.create(true);
	match append {
		true => options.append(true),
		false => options.write(true).truncate(true),
	};

	options.open(path)
}

/// Creates an env filter from `var`, falling back to `default` if unset
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(default.into())
		.with_env_var(var)
		.from_env_lossy()
}

/// Messages logged before the logger exists
pub mod pre_init {
	// Imports
	use std::sync::{Mutex, PoisonError};

	/// Buffered messages
	static MESSAGES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

	/// Message level
	#[derive(Clone, Copy, Debug)]
	enum Level {
		Debug,
		Warn,
	}

	/// Buffers a debug message
	pub fn debug(msg: impl Into<String>) {
		self::push(Level::Debug, msg.into());
	}

	/// Buffers a warning
	pub fn warn(msg: impl Into<String>) {
		self::push(Level::Warn, msg.into());
	}

	fn push(level: Level, msg: String) {
		MESSAGES
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push((level, msg));
	}

	/// Emits all buffered messages through `tracing`
	pub(super) fn flush() {
		let messages = std::mem::take(&mut *MESSAGES.lock().unwrap_or_else(PoisonError::into_inner));
		for (level, msg) in messages {
			match level {
				Level::Debug => tracing::debug!("{msg}"),
				Level::Warn => tracing::warn!("{msg}"),
			}
		}
	}

}
