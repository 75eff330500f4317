use std::io;

use bodmas::{
    error::CalcError,
    evaluate_with,
    interpreter::evaluator::core::{Context, ZeroPowerPolicy},
    trace,
};
use clap::Parser;
use log::LevelFilter;

/// bodmas evaluates arithmetic expressions with the standard order of
/// operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints every reduction step instead of only the result.
    #[arg(short, long)]
    steps: bool,

    /// Treats 0^0 as an error instead of 1.
    #[arg(long)]
    strict_zero_power: bool,

    /// Logs each pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. Reads one expression per line from stdin
    /// when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(if args.verbose {
                                                LevelFilter::Debug
                                            } else {
                                                LevelFilter::Warn
                                            })
                              .parse_default_env()
                              .init();

    let context = if args.strict_zero_power {
        Context::new().with_zero_power(ZeroPowerPolicy::Reject)
    } else {
        Context::new()
    };

    if let Some(expression) = &args.expression {
        if let Err(e) = run(expression, &context, args.steps) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    for line in io::stdin().lines().map_while(Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = run(&line, &context, args.steps) {
            eprintln!("{e}");
        }
    }
}

fn run(expression: &str, context: &Context, steps: bool) -> Result<(), CalcError> {
    if steps {
        for step in trace(expression, context)? {
            println!("{step}");
        }
    } else {
        println!("{}", evaluate_with(expression, context)?);
    }
    Ok(())
}
