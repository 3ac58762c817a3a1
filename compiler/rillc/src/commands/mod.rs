//! Command handlers for the `rill` CLI.
//!
//! Each handler returns the process exit status; `main` does the exiting.

mod dump;
mod run;

pub use dump::dump_file;
pub use run::{execute, run_file, RunOptions};
