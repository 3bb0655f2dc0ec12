mod logging;
mod man;

pub use logging::{level_filter, setup_logging};
pub use man::{ExitStatus, ManExample, generate_man_page};
