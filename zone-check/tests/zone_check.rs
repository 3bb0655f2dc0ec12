use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use tempfile::TempDir;
use zone_check_lib::cli::Args;
use zone_check_lib::{Error, run};

const FORWARD: &str = indoc! {"
  $TTL 86400
  @       IN  SOA ns1.example.com. hostmaster.example.com. (
                  2024010101 ; serial
                  3H 1H 1W 1H )
          IN  NS  ns1.example.com.
  ns1     IN  A   192.0.2.53
  host1   IN  A   192.0.2.1
  host2   IN  A   192.0.2.2
  printer IN  A   192.0.2.20
  ; old     IN  A   192.0.2.99
"};

const REVERSE: &str = indoc! {"
  $TTL 86400
  @   IN  SOA ns1.example.com. hostmaster.example.com. (
              2024010101 ; serial
              3H 1H 1W 1H )
      IN  NS  ns1.example.com.
  53  IN  PTR ns1.example.com.
  1   IN  PTR host1.example.com.
  2   IN  PTR host-two.example.com.
  30  IN  PTR scanner.example.com.
"};

struct Zones {
  dir: TempDir,
  forward: PathBuf,
  reverse: PathBuf,
}

fn zones(forward_name: &str, forward: &str, reverse_name: &str, reverse: &str) -> Zones {
  let dir = tempfile::tempdir().unwrap();
  let forward_path = dir.path().join(forward_name);
  let reverse_path = dir.path().join(reverse_name);
  fs::write(&forward_path, forward).unwrap();
  fs::write(&reverse_path, reverse).unwrap();
  Zones { dir, forward: forward_path, reverse: reverse_path }
}

fn args(zones: &Zones) -> Args {
  Args {
    debug: 0,
    differences_only: false,
    aliases: Vec::new(),
    config_dir: Some(zones.dir.path().to_path_buf()),
    forward_zone: zones.forward.clone(),
    reverse_zone: zones.reverse.clone(),
  }
}

fn check(args: &Args) -> (Result<(), Error>, String) {
  let mut out = Vec::new();
  let result = run(args, &mut out);
  (result, String::from_utf8(out).unwrap())
}

fn section<'a>(report: &'a str, title: &str) -> Vec<&'a str> {
  report
    .split("\n\n")
    .find(|block| block.starts_with(&format!("; {title}")))
    .map(|block| block.lines().skip(2).collect())
    .unwrap_or_default()
}

#[test]
fn test_consistent_zones_have_no_differences() {
  let z = zones(
    "zone.example.com.db",
    "host1   IN  A   192.0.2.1\n",
    "2.0.192.in-addr.arpa.db",
    "1   IN  PTR host1.example.com.\n",
  );
  let (result, report) = check(&args(&z));
  result.unwrap();

  assert_eq!(section(&report, "Direct entries"), ["; 192.0.2.1        - host1.example.com"]);
  assert_eq!(section(&report, "Reverse entries"), ["; 192.0.2.1        - host1.example.com"]);
  assert!(section(&report, "Different entries").is_empty());
}

#[test]
fn test_full_report() {
  let z = zones("zone.example.com.db", FORWARD, "2.0.192.in-addr.arpa.db", REVERSE);
  let (result, report) = check(&args(&z));
  result.unwrap();

  assert!(report.contains("; direct domain 'example.com'\n"));
  assert!(report.contains("; reverse domain '2.0.192.in-addr.arpa'\n"));
  assert!(report.contains("; reverse to direct domain 192.0.2\n"));
  assert!(report.lines().all(|line| line.is_empty() || line.starts_with(';')));

  assert_eq!(
    section(&report, "Direct entries"),
    [
      "; 192.0.2.1        - host1.example.com",
      "; 192.0.2.2        - host2.example.com",
      "; 192.0.2.20       - printer.example.com",
      "; 192.0.2.53       - ns1.example.com",
    ]
  );
  assert_eq!(
    section(&report, "Different entries"),
    [
      "; 192.0.2.2        - host2.example.com              - host-two.example.com",
      "; 192.0.2.20       - printer.example.com            - (missing)",
      "; 192.0.2.30       - (missing)                      - scanner.example.com",
    ]
  );
}

#[test]
fn test_differences_only() {
  let z = zones("zone.example.com.db", FORWARD, "2.0.192.in-addr.arpa.db", REVERSE);
  let (result, report) = check(&Args { differences_only: true, ..args(&z) });
  result.unwrap();
  assert!(section(&report, "Direct entries").is_empty());
  assert_eq!(section(&report, "Different entries").len(), 3);
}

#[test]
fn test_rerun_is_identical() {
  let z = zones("zone.example.com.db", FORWARD, "2.0.192.in-addr.arpa.db", REVERSE);
  assert_eq!(check(&args(&z)).1, check(&args(&z)).1);
}

#[test]
fn test_missing_file() {
  let z = zones("zone.example.com.db", FORWARD, "2.0.192.in-addr.arpa.db", REVERSE);
  let missing = z.dir.path().join("zone.missing.db");
  let (result, report) = check(&Args { forward_zone: missing.clone(), ..args(&z) });
  let e = result.unwrap_err();
  assert!(matches!(&e, Error::FileNotFound(p) if *p == missing));
  assert_eq!(e.exit_code(), 2);
  assert!(report.is_empty());
}

#[test]
fn test_bad_forward_file_name() {
  let z = zones("example.com.zone", FORWARD, "2.0.192.in-addr.arpa.db", REVERSE);
  let (result, report) = check(&args(&z));
  let e = result.unwrap_err();
  assert!(matches!(e, Error::InvalidFileName(_)));
  assert_eq!(e.exit_code(), 3);
  assert!(report.is_empty());
}

#[test]
fn test_malformed_reverse_domain() {
  let z = zones("zone.example.com.db", FORWARD, "2.0.192.arpa.db", REVERSE);
  let e = check(&args(&z)).0.unwrap_err();
  assert!(matches!(&e, Error::MalformedReverseDomain(d) if d == "2.0.192.arpa"));
  assert_eq!(e.exit_code(), 4);
}

#[test]
fn test_non_address_key_aborts_without_sections() {
  // a /16 reverse zone gives keys with three labels only
  let z = zones("zone.example.com.db", FORWARD, "0.10.in-addr.arpa.db", "1.2 IN PTR host1.example.com.\n3 IN PTR x.\n");
  let (result, report) = check(&args(&z));
  let e = result.unwrap_err();
  assert!(matches!(&e, Error::InvalidAddress(k) if k == "10.0.3"));
  assert_eq!(e.exit_code(), 5);
  assert!(!report.contains("Direct entries"));
}

#[test]
fn test_aliases_from_config_and_command_line() {
  let z = zones("zone.corp.db", "pc1 IN A 10.0.0.1\n", "0.0.10.in-addr.arpa.db", "1 IN PTR pc1.corp.example.ch.\n");
  fs::write(z.dir.path().join("domain.aliases"), "corp corp.example.ch\n").unwrap();
  let (result, report) = check(&args(&z));
  result.unwrap();
  assert!(report.contains("; direct domain 'corp.example.ch'\n"));
  assert!(section(&report, "Different entries").is_empty());

  let cli = Args { aliases: vec![("corp".into(), "corp.example.net".into())], ..args(&z) };
  let (result, report) = check(&cli);
  result.unwrap();
  assert_eq!(
    section(&report, "Different entries"),
    ["; 10.0.0.1         - pc1.corp.example.net           - pc1.corp.example.ch"]
  );
}

#[test]
fn test_bad_alias_file() {
  let z = zones("zone.corp.db", "", "0.0.10.in-addr.arpa.db", "");
  fs::write(z.dir.path().join("domain.aliases"), "corp\n").unwrap();
  let e = check(&args(&z)).0.unwrap_err();
  assert!(matches!(e, Error::Config { line: 1, .. }));
}

#[test]
fn test_unreadable_zone_is_an_io_error() {
  let z = zones("zone.example.com.db", "", "2.0.192.in-addr.arpa.db", "");
  fs::write(&z.reverse, [0xff, 0xfe, 0x00]).unwrap();
  let e = check(&args(&z)).0.unwrap_err();
  assert!(matches!(&e, Error::Io { path, .. } if *path == z.reverse));
  assert_eq!(e.exit_code(), 1);
}
