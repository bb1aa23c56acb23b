// src/main.rs

//! Command-line entry point.
//!
//! With no arguments the editor reads commands interactively from stdin
//! until `q`/`quit` or end of input. With `-file <script>` it executes the
//! script and exits.

use std::io::{BufReader, stdin, stdout};
use std::path::Path;
use std::process::ExitCode;

use rasterlab::{Registry, command, utils};

fn main() -> ExitCode {
    utils::log::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut registry = Registry::new();

    match args.as_slice() {
        [] => {
            let input = BufReader::new(stdin());
            let mut output = stdout();
            if let Err(err) = command::process(input, &mut output, &mut registry) {
                eprintln!("fatal: {err}");
                return ExitCode::FAILURE;
            }
        }
        [flag, script] if flag == "-file" => {
            if let Err(err) = command::run_script(Path::new(script), &mut registry) {
                eprintln!("fatal: {err}");
                return ExitCode::FAILURE;
            }
        }
        _ => {
            eprintln!("usage: rasterlab [-file <script>]");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
