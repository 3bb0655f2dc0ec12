use env_logger::{Builder, Target};
use log::LevelFilter;

/// Maps the number of `-d` flags to a log level, no flag only shows errors
pub fn level_filter(level: u8) -> LevelFilter {
  match level {
    0 => LevelFilter::Error,
    1 => LevelFilter::Warn,
    2 => LevelFilter::Info,
    3 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// Logs go to stderr, stdout is reserved for the zone comments we print.
pub fn setup_logging(level: u8) {
  let mut builder = Builder::from_default_env();
  // RUST_LOG wins over the command line flag
  if std::env::var("RUST_LOG").is_err() {
    builder.filter_level(level_filter(level));
  }
  builder.target(Target::Stderr).format_timestamp_secs();
  if builder.try_init().is_err() {
    log::warn!("logger already initialized, keeping the existing one");
  }
}
