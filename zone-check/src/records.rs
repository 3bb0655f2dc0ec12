//! Loose extraction of A and PTR records from BIND zone files.
//!
//! This is not a zone file grammar: a line is an address record as soon as it contains `IN`
//! with an `A` somewhere after it, and a pointer record when `PTR` follows `IN`. Any line
//! holding a `;` is treated as a comment, wherever the `;` is.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::Error;

/// Record key to value, filled while parsing and only sorted when reporting
pub type ZoneMap = HashMap<String, String>;

static ADDRESS_RECORD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new("IN.*A").expect("address record pattern is valid"));
static POINTER_RECORD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new("IN.*PTR").expect("pointer record pattern is valid"));

pub fn read_zone_file(path: &Path) -> Result<String, Error> {
  let text = read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
  debug!("read {} lines from 「{}」", text.lines().count(), path.display());
  Ok(text)
}

fn is_comment(line: &str) -> bool {
  line.contains(';')
}

/// Tokens that directly follow a standalone `record_type` token
fn targets<'a>(tokens: &'a [&'a str], record_type: &'a str) -> impl Iterator<Item = &'a str> + 'a {
  tokens.windows(2).filter(move |pair| pair[0] == record_type).map(|pair| pair[1])
}

/// Builds `address -> owner.domain` from the A records of a forward zone.
/// A later record for the same address replaces the earlier one.
pub fn parse_forward<'a>(lines: impl IntoIterator<Item = &'a str>, domain: &str) -> ZoneMap {
  let mut map = ZoneMap::new();
  for line in lines {
    if is_comment(line) || !ADDRESS_RECORD.is_match(line) {
      continue;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(owner) = tokens.first() else { continue };
    for address in targets(&tokens, "A") {
      let fqdn = format!("{owner}.{domain}");
      trace!("A {address} -> {fqdn}");
      map.insert(address.to_string(), fqdn);
    }
  }
  debug!("{} direct entries for 「{domain}」", map.len());
  map
}

/// Builds `prefix.owner -> hostname` from the PTR records of a reverse zone,
/// `prefix` being the reverse zone turned back into forward order.
pub fn parse_reverse<'a>(lines: impl IntoIterator<Item = &'a str>, prefix: &str) -> ZoneMap {
  let mut map = ZoneMap::new();
  for line in lines {
    if is_comment(line) || !POINTER_RECORD.is_match(line) {
      continue;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(owner) = tokens.first() else { continue };
    let key = format!("{prefix}.{owner}");
    for hostname in targets(&tokens, "PTR") {
      let hostname = hostname.trim_matches('.');
      trace!("PTR {key} -> {hostname}");
      map.insert(key.clone(), hostname.to_string());
    }
  }
  debug!("{} reverse entries under 「{prefix}」", map.len());
  map
}
