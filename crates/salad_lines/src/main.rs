//! salad-lines: compact located diagnostics for the terminal.

use std::io::{self, Read};

use salad_lines::{init_tracing, parse_args, render};

fn main() {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if config.help {
        print_usage();
        return;
    }

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {err}");
        std::process::exit(1);
    }

    let output = render(&input, &config);
    if !output.is_empty() {
        println!("{output}");
    }
}

fn print_usage() {
    eprintln!("Usage: salad-lines [--width=<n>] < diagnostics.txt");
    eprintln!();
    eprintln!("Collapses repeated 'file:line:col:' leads and wraps messages.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --width=<n>   Maximum line width (default: $COLUMNS, else 100)");
    eprintln!("  -h, --help    Show this help");
}
