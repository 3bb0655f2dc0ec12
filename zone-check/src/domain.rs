use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::Error;

/// Forward zone files are named `zone.<domain>.db`
static FORWARD_FILE_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"zone\.(.+?)\.db").expect("forward file name pattern is valid"));

/// Reverse zone files are named `<labels>.in-addr.arpa.db`
static REVERSE_FILE_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(.+?)\.db").expect("reverse file name pattern is valid"));

const REVERSE_LABELS: [&str; 2] = ["in-addr", "arpa"];

/// Maps a domain taken from a file name to the domain the records really live in.
/// Used for zone files whose name only carries the short domain, e.g. `zone.corp.db`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DomainAliases(HashMap<String, String>);

impl DomainAliases {
  pub fn insert(&mut self, short: impl Into<String>, fqdn: impl Into<String>) -> Option<String> {
    self.0.insert(short.into(), fqdn.into())
  }

  pub fn resolve<'a>(&'a self, domain: &'a str) -> &'a str {
    self.0.get(domain).map_or(domain, String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl Extend<(String, String)> for DomainAliases {
  fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
    self.0.extend(iter);
  }
}

/// The domains derived from the names of a forward and reverse zone file pair
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDomains {
  /// domain appended to the owner names of the address records
  pub direct: String,
  /// reverse zone as found in the file name, e.g. `2.0.192.in-addr.arpa`
  pub reverse: String,
  /// reverse zone turned back into a prefix, e.g. `192.0.2`
  pub reverse_to_direct: String,
}

impl ZoneDomains {
  pub fn from_paths(forward: &Path, reverse: &Path, aliases: &DomainAliases) -> Result<Self, Error> {
    let extracted = forward_domain(forward)?;
    let direct = aliases.resolve(&extracted).to_string();
    if direct != extracted {
      info!("direct domain 「{extracted}」 is an alias for 「{direct}」");
    }
    let reverse = reverse_domain(reverse)?;
    let reverse_to_direct = invert_reverse_domain(&reverse)?;
    debug!("reverse domain 「{reverse}」 turns into 「{reverse_to_direct}」");
    Ok(ZoneDomains { direct, reverse, reverse_to_direct })
  }
}

/// Extracts `<domain>` from a forward zone file named `zone.<domain>.db`
pub fn forward_domain(path: &Path) -> Result<String, Error> {
  capture_from_file_name(path, &FORWARD_FILE_NAME)
}

/// Extracts the raw reverse domain from a file named `<domain>.db`
pub fn reverse_domain(path: &Path) -> Result<String, Error> {
  capture_from_file_name(path, &REVERSE_FILE_NAME)
}

fn capture_from_file_name(path: &Path, pattern: &Regex) -> Result<String, Error> {
  path
    .file_name()
    .and_then(|name| name.to_str())
    .and_then(|name| pattern.captures(name))
    .and_then(|captures| captures.get(1))
    .map(|m| m.as_str().to_string())
    .ok_or_else(|| Error::InvalidFileName(path.to_path_buf()))
}

/// Drops the `in-addr` and `arpa` labels and reverses the rest: `2.0.192.in-addr.arpa` becomes `192.0.2`
pub fn invert_reverse_domain(reverse: &str) -> Result<String, Error> {
  let mut labels: Vec<&str> = reverse.split('.').collect();
  for suffix in REVERSE_LABELS {
    let position = labels
      .iter()
      .position(|label| *label == suffix)
      .ok_or_else(|| Error::MalformedReverseDomain(reverse.to_string()))?;
    labels.remove(position);
  }
  labels.reverse();
  Ok(labels.join("."))
}
