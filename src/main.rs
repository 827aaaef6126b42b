//! sqlterp CLI - run SQL commands against local SQLite databases

use anyhow::Context as _;
use clap::Parser;
use sqlterp::cli::{Args, SubCommand};
use sqlterp::output::{formatter::render, OutputFormat};
use sqlterp::script::ScriptRunner;
use sqlterp::{init_logging, Config, Interpreter};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config();
    init_logging(&config).context("failed to initialize logging")?;

    match args.command {
        SubCommand::Query { query, json } => {
            let mut interpreter = Interpreter::from_config(&config)?;
            let (_, text) = interpreter.process(&query);
            let format = if json { OutputFormat::Json } else { OutputFormat::Human };
            println!("{}", render(&text, format));
            interpreter.shutdown();
            Ok(())
        }

        SubCommand::Run { file } => {
            let interpreter = Interpreter::from_config(&config)?;
            let mut runner = ScriptRunner::new(interpreter).with_echo(true);
            let result = runner
                .run_file(&file)
                .with_context(|| format!("failed to run {}", file.display()))?;
            runner.finish();

            if args.verbose {
                println!(
                    "\n--- Script completed: {} commands processed ---",
                    result.commands_processed()
                );
            }
            Ok(())
        }

        SubCommand::Repl => {
            sqlterp::repl::run_repl(&config)?;
            Ok(())
        }

        SubCommand::Serve { bind } => serve(&config, &bind),
    }
}

#[cfg(feature = "web")]
fn serve(config: &Config, bind: &str) -> anyhow::Result<()> {
    sqlterp::web::server::serve(config, bind)
}

#[cfg(not(feature = "web"))]
fn serve(_config: &Config, _bind: &str) -> anyhow::Result<()> {
    anyhow::bail!("HTTP support not enabled. Rebuild with --features web")
}
