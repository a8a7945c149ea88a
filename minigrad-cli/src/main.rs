//! minigrad - command-line evaluation of scalar operators and list combinators

mod config;
mod error;
mod output;
mod values;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use minigrad_ops::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{CliConfig, OutputFormat};
use output::Report;
use values::parse_list;

#[derive(Parser)]
#[command(name = "minigrad")]
#[command(author = "Minigrad Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "Evaluate minigrad scalar operators and list combinators", long_about = None)]
struct Cli {
    /// Output format (overrides MINIGRAD_FORMAT)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Digits after the decimal point in plain output (overrides MINIGRAD_PRECISION)
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a unary operator (id, neg, sigmoid, relu, log, exp, inv)
    Unary {
        #[arg(value_name = "OP")]
        op: UnaryOp,

        #[arg(value_name = "X", allow_negative_numbers = true)]
        x: f64,
    },

    /// Apply a binary operator or backward helper
    Binary {
        #[arg(value_name = "OP")]
        op: BinaryOp,

        #[arg(value_name = "X", allow_negative_numbers = true)]
        x: f64,

        #[arg(value_name = "Y", allow_negative_numbers = true)]
        y: f64,
    },

    /// Map a unary operator over values
    Map {
        #[arg(value_name = "OP")]
        op: UnaryOp,

        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Combine two lists element-wise (stops at the shorter list)
    Zip {
        #[arg(value_name = "OP")]
        op: BinaryOp,

        /// Left list, e.g. "1,2,3"
        #[arg(short, long, allow_hyphen_values = true)]
        left: String,

        /// Right list, e.g. "10,20"
        #[arg(short, long, allow_hyphen_values = true)]
        right: String,
    },

    /// Right-associative reduce; `--start` is accepted but not used
    Reduce {
        #[arg(value_name = "OP")]
        op: BinaryOp,

        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,

        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Right-associative fold seeded with `--start`
    Fold {
        #[arg(value_name = "OP")]
        op: BinaryOp,

        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,

        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Sum of values
    Sum {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Product of values
    Prod {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Negate every value
    Neg {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// List every operator name
    Ops,
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env()
        .map(|c| c.with_overrides(cli.format, cli.precision))
        .and_then(|c| c.validate().map(|_| c))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &CliConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands, config: &CliConfig) -> anyhow::Result<()> {
    let report = evaluate(command)?;
    let rendered = report.render(config).context("failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}

// ============================================================================
// Command evaluation
// ============================================================================

fn evaluate(command: Commands) -> anyhow::Result<Report> {
    match command {
        Commands::Unary { op, x } => {
            let value = op.apply(x).with_context(|| format!("{}({})", op, x))?;
            Ok(Report::scalar(op.name(), value))
        }

        Commands::Binary { op, x, y } => {
            let value = op.apply(x, y).with_context(|| format!("{}({}, {})", op, x, y))?;
            Ok(Report::scalar(op.name(), value))
        }

        Commands::Map { op, values } => {
            let out = map_op(op, &values).with_context(|| format!("map {}", op))?;
            Ok(Report::list(format!("map({})", op), out))
        }

        Commands::Zip { op, left, right } => {
            let left = parse_list(&left).context("--left")?;
            let right = parse_list(&right).context("--right")?;
            if left.len() != right.len() {
                tracing::warn!(
                    left = left.len(),
                    right = right.len(),
                    "lists differ in length; extra elements are dropped"
                );
            }
            let out = zip_with_op(op, &left, &right).with_context(|| format!("zip {}", op))?;
            Ok(Report::list(format!("zip({})", op), out))
        }

        Commands::Reduce { op, start, values } => {
            if start != 0.0 {
                tracing::warn!(start, "reduce ignores --start; use `fold` to seed the reduction");
            }
            let value = reduce_op(op, start, &values).with_context(|| format!("reduce {}", op))?;
            Ok(Report::scalar(format!("reduce({})", op), value))
        }

        Commands::Fold { op, start, values } => {
            let value = fold_op(op, start, &values).with_context(|| format!("fold {}", op))?;
            Ok(Report::scalar(format!("fold({})", op), value))
        }

        Commands::Sum { values } => Ok(Report::scalar("sum", sum(&values))),

        Commands::Prod { values } => Ok(Report::scalar("prod", prod(&values))),

        Commands::Neg { values } => Ok(Report::list("neg", neg_list(&values))),

        Commands::Ops => Ok(Report::Operators {
            unary: UnaryOp::ALL.iter().map(|op| op.name().to_string()).collect(),
            binary: BinaryOp::ALL.iter().map(|op| op.name().to_string()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> anyhow::Result<Report> {
        let cli = Cli::try_parse_from(std::iter::once("minigrad").chain(args.iter().copied()))?;
        evaluate(cli.command)
    }

    #[test]
    fn test_unary_and_binary() {
        assert_eq!(eval(&["unary", "inv", "2"]).unwrap(), Report::scalar("inv", 0.5));
        assert_eq!(eval(&["unary", "neg", "-3"]).unwrap(), Report::scalar("neg", 3.0));
        assert_eq!(
            eval(&["binary", "log_back", "1", "1"]).unwrap(),
            Report::scalar("log_back", 1.0)
        );
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let err = eval(&["unary", "inv", "0"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Division by zero"), "{}", message);
    }

    #[test]
    fn test_binary_division_by_zero_is_reported() {
        let err = eval(&["binary", "inv_back", "0", "1"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("inv_back(0, 1)"), "{}", message);
        assert!(message.contains("Division by zero"), "{}", message);
    }

    #[test]
    fn test_map_command() {
        assert_eq!(
            eval(&["map", "relu", "-1", "0", "2.5"]).unwrap(),
            Report::list("map(relu)", vec![0.0, 0.0, 2.5])
        );
        assert!(eval(&["map", "inv", "1", "0"]).is_err());
    }

    #[test]
    fn test_fold_with_values() {
        // 3 + (2 + (1 + 10))
        assert_eq!(
            eval(&["fold", "add", "--start", "10", "1", "2", "3"]).unwrap(),
            Report::scalar("fold(add)", 16.0)
        );
        assert_eq!(
            eval(&["reduce", "add", "--start", "10", "1", "2", "3"]).unwrap(),
            Report::scalar("reduce(add)", 6.0)
        );
    }

    #[test]
    fn test_unknown_operator_is_a_parse_error() {
        assert!(eval(&["unary", "tanh", "1"]).is_err());
    }

    #[test]
    fn test_list_commands() {
        assert_eq!(
            eval(&["neg", "1", "-2", "3"]).unwrap(),
            Report::list("neg", vec![-1.0, 2.0, -3.0])
        );
        assert_eq!(eval(&["sum", "1", "2", "3", "4"]).unwrap(), Report::scalar("sum", 10.0));
        assert_eq!(eval(&["prod", "1", "2", "3", "4"]).unwrap(), Report::scalar("prod", 24.0));
        assert_eq!(
            eval(&["zip", "add", "--left", "1,2,3", "--right", "10,20"]).unwrap(),
            Report::list("zip(add)", vec![11.0, 22.0])
        );
    }

    #[test]
    fn test_reduce_ignores_start_but_fold_uses_it() {
        assert_eq!(
            eval(&["reduce", "add", "--start", "5"]).unwrap(),
            Report::scalar("reduce(add)", 0.0)
        );
        assert_eq!(
            eval(&["fold", "add", "--start", "5"]).unwrap(),
            Report::scalar("fold(add)", 5.0)
        );
    }

    #[test]
    fn test_ops_lists_everything() {
        match eval(&["ops"]).unwrap() {
            Report::Operators { unary, binary } => {
                assert_eq!(unary.len(), UnaryOp::ALL.len());
                assert!(binary.contains(&"relu_back".to_string()));
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }
}
