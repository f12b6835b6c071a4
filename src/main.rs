use std::{fs, process::ExitCode};

use clap::Parser as _;
use pascalite::{
    Config,
    error::Error,
    interpreter::{Interpreter, lexer::Lexer, parser::Parser},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// pascalite runs programs written in a small Pascal-like teaching language
/// and prints the final value of every variable.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a source file instead of the program
    /// text itself.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of running the program.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree instead of running the program.
    #[arg(long)]
    ast: bool,

    /// Abort any single loop after this many iterations.
    #[arg(long, value_name = "N")]
    max_iterations: Option<u64>,

    contents: String,
}

/// Logs go to stderr; the level comes from `RUST_LOG` and defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn run(source: &str, args: &Args) -> Result<(), Error> {
    if args.tokens {
        for spanned in Lexer::new(source) {
            let spanned = spanned?;
            println!("{} {}", spanned.position, spanned.token);
        }
        return Ok(());
    }

    let parser = Parser::new(Lexer::new(source));
    if args.ast {
        let tree = parser.parse()?;
        println!("{tree:#?}");
        return Ok(());
    }

    let config = Config { max_loop_iterations: args.max_iterations };
    let memory = Interpreter::new(parser, config).interpret()?;
    print!("{memory}");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    match run(&source, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
