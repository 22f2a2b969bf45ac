use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{Evaluation, evaluate_tokens, format_result, validate_input};
use zcalc::Config;

/// Basic calculator: arithmetic, powers, roots and trigonometry in degrees
#[derive(Parser)]
#[command(name = "zcalc", version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation, e.g. `calc 12 + 8`, `calc sqrt 16`, `calc sin 30`
    Calc {
        /// Operation name or symbol plus its operands, in any order.
        /// Operands must be complete numbers such as `12`, `-3.5`, `1e3` or
        /// `Infinity`; text with trailing characters (`12a34`) is not an operand
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether text is a usable operand
    Validate {
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a number the way results are displayed
    Format {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(cli.verbose, &config);

    debug!("zcalc started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match cli.command {
        Commands::Calc { tokens, json } => run_calc(&tokens, json, &config),
        Commands::Validate { input, json } => run_validate(&input, json),
        Commands::Format { value } => {
            println!("{}", format_result(value));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new(&config.log_filter),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn run_calc(tokens: &[String], json: bool, config: &Config) -> Result<ExitCode> {
    let evaluation = evaluate_tokens(tokens);

    if json {
        println!(
            "{}",
            serde_json::to_string(&evaluation).context("Failed to serialize evaluation")?
        );
    } else {
        match &evaluation {
            Evaluation::Success {
                expression,
                display,
                ..
            } if config.show_expression => println!("{} = {}", expression, display),
            Evaluation::Success { display, .. } => println!("{}", display),
            Evaluation::Error { message, .. } => eprintln!("{}", message),
        }
    }

    Ok(exit_code(evaluation.is_success()))
}

fn run_validate(input: &str, json: bool) -> Result<ExitCode> {
    let result = validate_input(input);

    if json {
        println!(
            "{}",
            serde_json::to_string(&result).context("Failed to serialize validation result")?
        );
    } else if let Some(value) = result.value() {
        println!("valid: {}", format_result(value));
    } else {
        println!("invalid: {}", result.error_message().unwrap_or_default());
    }

    Ok(exit_code(result.is_valid()))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
