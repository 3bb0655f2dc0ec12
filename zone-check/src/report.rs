//! Text output. Every line starts with `;` so the report can be pasted into a zone file.

use std::io::Write;
use std::path::Path;

use crate::domain::ZoneDomains;
use crate::reconcile::{Difference, differences, sorted_entries};
use crate::records::ZoneMap;
use crate::Error;

const MISSING: &str = "(missing)";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
  pub direct: Vec<(String, String)>,
  pub reverse: Vec<(String, String)>,
  pub differences: Vec<Difference>,
}

impl Report {
  /// Sorts all sections up front so a bad key fails before anything is printed
  pub fn build(direct: &ZoneMap, reverse: &ZoneMap) -> Result<Self, Error> {
    Ok(Report {
      direct: sorted_entries(direct)?,
      reverse: sorted_entries(reverse)?,
      differences: differences(direct, reverse)?,
    })
  }

  pub fn write_to(&self, out: &mut impl Write, differences_only: bool) -> std::io::Result<()> {
    if !differences_only {
      write_entries(out, "Direct entries", &self.direct)?;
      write_entries(out, "Reverse entries", &self.reverse)?;
    }
    writeln!(out, "\n; Different entries\n;")?;
    for d in &self.differences {
      let direct = d.direct.as_deref().unwrap_or(MISSING);
      let reverse = d.reverse.as_deref().unwrap_or(MISSING);
      writeln!(out, "; {:16} - {:30} - {}", d.key, direct, reverse)?;
    }
    Ok(())
  }
}

fn write_entries(out: &mut impl Write, title: &str, entries: &[(String, String)]) -> std::io::Result<()> {
  writeln!(out, "\n; {title}\n;")?;
  for (key, value) in entries {
    writeln!(out, "; {:16} - {}", key, value)?;
  }
  Ok(())
}

pub fn write_header(out: &mut impl Write, forward: &Path, reverse: &Path, domains: &ZoneDomains) -> std::io::Result<()> {
  writeln!(out, "; direct file name {}", forward.display())?;
  writeln!(out, "; reverse file name {}", reverse.display())?;
  writeln!(out, "; direct domain '{}'", domains.direct)?;
  writeln!(out, "; reverse domain '{}'", domains.reverse)?;
  writeln!(out, "; reverse to direct domain {}", domains.reverse_to_direct)
}

/// Prints a fatal error as zone file comments
pub fn write_diagnostic(out: &mut impl Write, error: &Error) -> std::io::Result<()> {
  for line in error.to_string().lines().filter(|line| !line.trim().is_empty()) {
    writeln!(out, "; {}", line.trim_end())?;
  }
  writeln!(out, "; Exiting.")
}
