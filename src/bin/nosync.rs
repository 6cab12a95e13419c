#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// Fast general-purpose allocator for the short-lived CLI process.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let status = nosync_cli::run(env::args_os(), &mut stdout, &mut stderr);
    nosync_cli::exit_code_from(status)
}
