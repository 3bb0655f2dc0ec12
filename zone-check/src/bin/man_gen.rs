use std::path::PathBuf;

use clap::CommandFactory; // Required to access command() method
use shared::{ExitStatus, ManExample, generate_man_page};
use zone_check_lib::cli::Args;

fn main() -> std::io::Result<()> {
  // first argument is the output directory
  let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

  let examples = [
    ManExample {
      title: "Check the zone pair of a /24 network:",
      example: "zone-check /etc/bind/zones/zone.example.com.db /etc/bind/zones/2.0.192.in-addr.arpa.db",
    },
    ManExample {
      title: "Only show the differences, the forward file being named after a short domain:",
      example: "zone-check -q -a corp=corp.example.ch zone.corp.db 0.10.in-addr.arpa.db",
    },
  ];
  let exit_statuses = [
    ExitStatus { code: "0", meaning: "the report was written" },
    ExitStatus { code: "1", meaning: "wrong command line arguments" },
    ExitStatus { code: "2", meaning: "a zone file does not exist" },
    ExitStatus { code: "3", meaning: "no domain can be derived from a zone file name" },
    ExitStatus { code: "4", meaning: "the reverse zone name lacks the in-addr or arpa label" },
    ExitStatus { code: "5", meaning: "a record key is not a dotted quad IPv4 address" },
    ExitStatus { code: "6", meaning: "the domain.aliases file is malformed" },
    ExitStatus { code: "other", meaning: "the OS error number of a failed read" },
  ];
  let page = generate_man_page(Args::command(), &examples, &exit_statuses, &out_dir)?;
  println!("{}", page.display());

  Ok(())
}
