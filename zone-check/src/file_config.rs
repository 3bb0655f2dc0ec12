use std::env;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::Error;
use crate::domain::DomainAliases;

const ALIASES_FILE: &str = "domain.aliases";

/// Determine the config directory path
pub fn default_config_dir() -> PathBuf {
  env::var("ZONE_CHECK_CONFIG_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("/etc/zone-check"))
}

/// Reads `<config_dir>/domain.aliases`, a missing file means no aliases
pub fn load_aliases(config_dir: &Path) -> Result<DomainAliases, Error> {
  let path = config_dir.join(ALIASES_FILE);
  if !path.is_file() {
    debug!("no alias file at 「{}」", path.display());
    return Ok(DomainAliases::default());
  }
  let content = read_to_string(&path).map_err(|source| Error::Io { path: path.clone(), source })?;
  let aliases = parse_aliases(&content, &path)?;
  info!("loaded {} domain aliases from 「{}」", aliases.len(), path.display());
  Ok(aliases)
}

/// One `<short> <fqdn>` pair per line, `#` starts a comment
fn parse_aliases(content: &str, path: &Path) -> Result<DomainAliases, Error> {
  let mut aliases = DomainAliases::default();
  for (index, line) in content.lines().enumerate() {
    let cleaned = line.split('#').next().unwrap_or_default().trim();
    if cleaned.is_empty() {
      continue;
    }
    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    let &[short, fqdn] = fields.as_slice() else {
      return Err(Error::Config {
        path: path.to_path_buf(),
        line: index + 1,
        reason: format!("expected 「<short> <fqdn>」, got 「{cleaned}」"),
      });
    };
    if let Some(previous) = aliases.insert(short, fqdn) {
      debug!("alias 「{short}」 redefined, 「{previous}」 replaced by 「{fqdn}」");
    }
  }
  Ok(aliases)
}
