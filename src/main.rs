use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use name_parser::Name;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "name_parser", version, about = "Split human names into their parts")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the arguments as a single name, or newline-separated names from
    /// stdin if the only argument is "-"
    Parse {
        #[arg(required = true, value_name = "NAME")]
        words: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// A JSON object with all five fields
    Json,
    /// The canonical display string
    Display,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Command::Parse { words, format } => {
            if words.len() == 1 && words[0] == "-" {
                parse_stdin(format)
            } else {
                parse_args(&words.join(" "), format)
            }
        }
    }
}

fn init_logging(log_level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level/filter '{}'", log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!("unable to install log subscriber: {}", err))
}

fn parse_args(input: &str, format: Format) -> Result<()> {
    match Name::parse(input) {
        Ok(name) => {
            println!("{}", render(&name, format)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn parse_stdin(format: Format) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        let output = match Name::parse(&line) {
            Ok(name) => render(&name, format)?,
            Err(err) => {
                tracing::info!(input = %line.trim(), "{}", err);
                String::new()
            }
        };

        if writeln!(out, "{}", output).is_err() {
            // Downstream closed the pipe
            break;
        }
    }

    Ok(())
}

fn render(name: &Name, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string(name).context("failed to serialize name"),
        Format::Display => Ok(name.display_full()),
    }
}
