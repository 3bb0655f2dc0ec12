use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("{0}")]
  Usage(String),

  #[error("「{}」 must be a valid file", .0.display())]
  FileNotFound(PathBuf),

  #[error("no domain name can be derived from the file name 「{}」", .0.display())]
  InvalidFileName(PathBuf),

  #[error("reverse domain 「{0}」 is missing the in-addr or arpa label")]
  MalformedReverseDomain(String),

  #[error("an i/o error occurred reading 「{}」: {source}", path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("could not write the report: {0}")]
  Output(#[from] io::Error),

  #[error("「{0}」 is not a dotted quad IPv4 address")]
  InvalidAddress(String),

  #[error("{}:{line}: {reason}", path.display())]
  Config { path: PathBuf, line: usize, reason: String },
}

impl Error {
  /// Process exit status for this error, i/o failures exit with the OS error number
  pub fn exit_code(&self) -> u8 {
    match self {
      Error::Usage(_) => 1,
      Error::FileNotFound(_) => 2,
      Error::InvalidFileName(_) => 3,
      Error::MalformedReverseDomain(_) => 4,
      Error::InvalidAddress(_) => 5,
      Error::Config { .. } => 6,
      Error::Io { source, .. } | Error::Output(source) => os_error_code(source),
    }
  }
}

fn os_error_code(e: &io::Error) -> u8 {
  e.raw_os_error().and_then(|code| u8::try_from(code).ok()).filter(|code| *code != 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exit_codes_are_distinct() {
    let codes = [
      Error::Usage("usage".into()).exit_code(),
      Error::FileNotFound("a".into()).exit_code(),
      Error::InvalidFileName("a".into()).exit_code(),
      Error::MalformedReverseDomain("a".into()).exit_code(),
      Error::InvalidAddress("a".into()).exit_code(),
      Error::Config { path: "a".into(), line: 1, reason: "bad".into() }.exit_code(),
    ];
    assert_eq!(codes, [1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn test_io_error_exits_with_os_error_number() {
    let e = Error::Io { path: "zone.corp.db".into(), source: io::Error::from_raw_os_error(13) };
    assert_eq!(e.exit_code(), 13);
  }

  #[test]
  fn test_io_error_without_os_code_exits_with_one() {
    let e = Error::Io { path: "zone.corp.db".into(), source: io::Error::new(io::ErrorKind::InvalidData, "not utf-8") };
    assert_eq!(e.exit_code(), 1);
  }
}
