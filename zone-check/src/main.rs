use std::io::{self, Write};
use std::process::ExitCode;

use log::*;
use shared::setup_logging;
use zone_check_lib::cli::get_args;
use zone_check_lib::report::write_diagnostic;
use zone_check_lib::{Error, run};

fn main() -> ExitCode {
  let args = match get_args() {
    Ok(args) => args,
    // --help and --version
    Err(e) if !e.use_stderr() => {
      let _ = e.print();
      return ExitCode::SUCCESS;
    }
    Err(e) => return fail(&mut io::stdout().lock(), &Error::Usage(e.render().to_string())),
  };

  setup_logging(args.debug);

  trace!("{:#?}", args);

  let mut out = io::stdout().lock();
  match run(&args, &mut out) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{e}");
      fail(&mut out, &e)
    }
  }
}

fn fail(out: &mut impl Write, e: &Error) -> ExitCode {
  // stdout may be the very thing that failed, nothing more we can do then
  let _ = write_diagnostic(out, e).and_then(|_| out.flush());
  ExitCode::from(e.exit_code())
}
