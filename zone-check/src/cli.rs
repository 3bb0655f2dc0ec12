use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Cross-check a BIND9 forward zone file against its reverse zone file.
///
/// Lists the A records of the forward zone, the PTR records of the reverse zone and every
/// address where the two disagree. The output is made of zone file comments.
#[derive(Parser, Debug, Clone)]
#[command(name = "zone-check", author, version, about, long_about)]
pub struct Args {
  /// log level, dddd for trace, ddd for debug, dd for info, d for warn, default errors only
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub debug: u8,

  /// only print the entries that differ between the two zones
  #[arg(short = 'q', long)]
  pub differences_only: bool,

  /// Domain to use for a forward file named after a short domain, e.g. corp=corp.example.ch
  #[arg(short, long = "alias", value_name = "SHORT=FQDN", value_parser = parse_alias)]
  pub aliases: Vec<(String, String)>,

  /// Directory holding domain.aliases, defaults to $ZONE_CHECK_CONFIG_DIR or /etc/zone-check
  #[arg(short, long, value_hint = ValueHint::DirPath)]
  pub config_dir: Option<PathBuf>,

  /// Forward zone file, named zone.<domain>.db
  #[arg(value_hint = ValueHint::FilePath)]
  pub forward_zone: PathBuf,

  /// Reverse zone file, named <reversed network>.in-addr.arpa.db
  #[arg(value_hint = ValueHint::FilePath)]
  pub reverse_zone: PathBuf,
}

pub fn get_args() -> Result<Args, clap::Error> {
  Args::try_parse()
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((short, fqdn)) if !short.trim().is_empty() && !fqdn.trim().is_empty() => {
      Ok((short.trim().to_string(), fqdn.trim().to_string()))
    }
    _ => Err(format!("「{s}」 should look like short=fqdn")),
  }
}
