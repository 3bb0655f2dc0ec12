use chrono::Local;
use clap_mangen::Man;
use roff::{Roff, bold, roman};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ManExample<'a> {
  pub title: &'a str,
  pub example: &'a str,
}

/// One entry of the EXIT STATUS section
pub struct ExitStatus<'a> {
  pub code: &'a str,
  pub meaning: &'a str,
}

/// Renders `<name>.1` into `out_dir` and returns the path of the page.
pub fn generate_man_page(
  cmd: clap::Command,
  examples: &[ManExample],
  exit_statuses: &[ExitStatus],
  out_dir: &Path,
) -> std::io::Result<PathBuf> {
  let file_path = out_dir.join(format!("{}.1", cmd.get_name()));
  let mut file = File::create(&file_path)?;
  render(cmd, examples, exit_statuses, &mut file)?;
  Ok(file_path)
}

fn render(
  cmd: clap::Command,
  examples: &[ManExample],
  exit_statuses: &[ExitStatus],
  out: &mut impl Write,
) -> std::io::Result<()> {
  let date_str = Local::now().format("%B %Y").to_string();
  Man::new(cmd).source("zone-check").date(&date_str).manual("User Manual").render(out)?;

  let mut roff = Roff::new();
  if !examples.is_empty() {
    roff.control("SH", ["EXAMPLES"]);
    for example in examples {
      roff.control("TP", ["2"]).control("B", [example.title]).text([roman(example.example)]);
    }
  }
  if !exit_statuses.is_empty() {
    roff.control("SH", ["EXIT STATUS"]);
    for status in exit_statuses {
      roff.control("TP", ["4"]).text([bold(status.code)]).text([roman(status.meaning)]);
    }
  }

  out.write_all(roff.render().as_bytes())
}
