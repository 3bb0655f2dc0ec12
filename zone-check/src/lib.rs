pub mod cli;
pub mod domain;
mod error;
pub mod file_config;
pub mod records;
pub mod reconcile;
pub mod report;

use std::io::Write;

use log::{debug, info};

pub use error::Error;

use crate::cli::Args;
use crate::domain::ZoneDomains;
use crate::records::{parse_forward, parse_reverse, read_zone_file};
use crate::report::{Report, write_header};

/// Checks one forward/reverse zone pair and writes the report to `out`.
/// Nothing but the header is written when a step fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), Error> {
  for path in [&args.forward_zone, &args.reverse_zone] {
    if !path.exists() {
      return Err(Error::FileNotFound(path.clone()));
    }
  }

  let config_dir = args.config_dir.clone().unwrap_or_else(file_config::default_config_dir);
  let mut aliases = file_config::load_aliases(&config_dir)?;
  aliases.extend(args.aliases.iter().cloned());

  let domains = ZoneDomains::from_paths(&args.forward_zone, &args.reverse_zone, &aliases)?;
  info!("direct domain 「{}」, reverse prefix 「{}」", domains.direct, domains.reverse_to_direct);
  write_header(out, &args.forward_zone, &args.reverse_zone, &domains)?;

  let forward_text = read_zone_file(&args.forward_zone)?;
  let reverse_text = read_zone_file(&args.reverse_zone)?;

  let direct = parse_forward(forward_text.lines(), &domains.direct);
  let reverse = parse_reverse(reverse_text.lines(), &domains.reverse_to_direct);

  let report = Report::build(&direct, &reverse)?;
  debug!("writing report with {} differences", report.differences.len());
  report.write_to(out, args.differences_only)?;
  out.flush()?;
  Ok(())
}
