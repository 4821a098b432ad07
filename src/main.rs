use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use sexpr_calc::{evaluate_line, repl};

/// sexpr-calc evaluates parenthesized prefix arithmetic expressions such as
/// `(+ 10 (* 5 2) (- 8 3) (/ 20 4))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sexpr-calc to read expressions, one per line, from a file
    /// instead of evaluating `contents` directly.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Do not print the greeting before reading expressions.
    #[arg(short, long)]
    quiet: bool,

    /// Raises log verbosity on standard error. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression to evaluate, or a path when `--file` is given. Without
    /// it, expressions are read from standard input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let result = match args.contents {
        Some(path) if args.file => {
            let file = File::open(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                process::exit(1);
            });
            repl::run(BufReader::new(file), &mut io::stdout().lock(), false)
        },
        Some(expression) => match evaluate_line(&expression) {
            Ok(value) => {
                println!("Result: {value}");
                Ok(())
            },
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        },
        None => repl::run(io::stdin().lock(), &mut io::stdout().lock(), !args.quiet),
    };

    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        process::exit(1);
    }
}

/// Installs the logger. `SEXPR_CALC_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new().filter_level(level).parse_env("SEXPR_CALC_LOG").init();
}
