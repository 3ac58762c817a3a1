//! The `dump` command: print a program in source-like form.

use std::path::Path;

use rill_ir::dump::describe_program;

use crate::load_program;
use crate::reporting::report_load_error;

pub fn dump_file(path: &str) -> i32 {
    match load_program(Path::new(path)) {
        Ok(program) => {
            print!("{}", describe_program(&program));
            0
        }
        Err(err) => report_load_error(&err),
    }
}
