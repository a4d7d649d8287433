//! Command-line drivers: boolean gates and Semeion digit recognition.

pub mod logical;
pub mod semeion;

use crate::error::{NeuralError, Result};

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Logical,
    Semeion(SemeionArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemeionArgs {
    pub path: String,
    pub hidden: usize,
    pub epochs: usize,
    pub learning_rate: f64,
}

pub fn usage(program: &str) -> String {
    format!("Usage:\n  {program} --logical\n  {program} --semeion <file> <hidden> <epochs> <lr>")
}

/// Parses arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.first().map(String::as_str) {
        Some("--logical") if args.len() == 1 => Ok(Command::Logical),
        Some("--semeion") if args.len() == 5 => Ok(Command::Semeion(SemeionArgs {
            path: args[1].clone(),
            hidden: parse_number("hidden", &args[2])?,
            epochs: parse_number("epochs", &args[3])?,
            learning_rate: parse_number("lr", &args[4])?,
        })),
        Some("--semeion") => Err(NeuralError::Usage(
            "--semeion expects <file> <hidden> <epochs> <lr>".to_string(),
        )),
        _ => Err(NeuralError::Usage("specify --logical or --semeion <file>".to_string())),
    }
}

fn parse_number<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| NeuralError::Usage(format!("invalid {name} {value:?}: {e}")))
}

pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Logical => logical::run(),
        Command::Semeion(args) => semeion::run(args),
    }
}

/// Line written to stderr when [`run`] fails. Printed directly so it shows
/// up whatever the log filter is.
pub fn failure_message(program: &str, err: &NeuralError) -> String {
    format!("{program}: {err}")
}
