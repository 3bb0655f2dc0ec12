use std::collections::HashSet;
use std::net::Ipv4Addr;

use log::debug;

use crate::Error;
use crate::records::ZoneMap;

/// A key whose direct and reverse values disagree, `None` when one zone lacks the key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
  pub key: String,
  pub direct: Option<String>,
  pub reverse: Option<String>,
}

/// Numeric value of a dotted quad key, four decimal octets read big endian
pub fn sort_key(key: &str) -> Result<u32, Error> {
  key.parse::<Ipv4Addr>().map(u32::from).map_err(|_| Error::InvalidAddress(key.to_string()))
}

/// Sorts keys by address, one key that is not an address fails the whole sort.
fn sort_by_address<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<Vec<&'a str>, Error> {
  let mut keyed =
    keys.into_iter().map(|key| sort_key(key).map(|address| (address, key))).collect::<Result<Vec<_>, Error>>()?;
  keyed.sort_unstable_by_key(|(address, _)| *address);
  Ok(keyed.into_iter().map(|(_, key)| key).collect())
}

/// Map entries in increasing address order
pub fn sorted_entries(map: &ZoneMap) -> Result<Vec<(String, String)>, Error> {
  let keys = sort_by_address(map.keys().map(String::as_str))?;
  Ok(keys.into_iter().map(|key| (key.to_string(), map[key].clone())).collect())
}

/// Every key of either map whose values differ, in increasing address order
pub fn differences(direct: &ZoneMap, reverse: &ZoneMap) -> Result<Vec<Difference>, Error> {
  let union: HashSet<&str> = direct.keys().chain(reverse.keys()).map(String::as_str).collect();
  let keys = sort_by_address(union)?;

  let differences: Vec<Difference> = keys
    .into_iter()
    .filter_map(|key| {
      let direct = direct.get(key);
      let reverse = reverse.get(key);
      (direct != reverse).then(|| Difference { key: key.to_string(), direct: direct.cloned(), reverse: reverse.cloned() })
    })
    .collect();
  debug!("{} differences between the direct and reverse entries", differences.len());
  Ok(differences)
}
