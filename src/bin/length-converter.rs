//! Terminal front end for the length converter.
//!
//! Usage:
//! ```bash
//! # One-shot conversion
//! length-converter convert 12 --from mile --to foot
//!
//! # List supported units
//! length-converter units
//!
//! # Line-driven form (default)
//! length-converter interactive --from metre --to millimetre
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use length_converter::{
    form::{Form, FormConfig, validate},
    models::length::{ConversionRequest, LengthConverter},
    support::units::{Measurement, Unit},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use twine_core::Model;

#[derive(Parser)]
#[command(
    name = "length-converter",
    about = "Convert lengths between metres, millimetres, miles, and feet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single value and print the result line
    Convert {
        /// Value to convert (must be a non-negative number)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit the value is expressed in
        #[arg(long, default_value = "Metre")]
        from: Unit,

        /// Unit to convert into
        #[arg(long, default_value = "Metre")]
        to: Unit,
    },

    /// List the supported units
    Units,

    /// Run the line-driven conversion form
    Interactive {
        /// Initially selected source unit
        #[arg(long, default_value = "Metre")]
        from: Unit,

        /// Initially selected target unit
        #[arg(long, default_value = "Metre")]
        to: Unit,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Command::Convert { value, from, to }) => convert_once(&mut out, &value, from, to),
        Some(Command::Units) => print_units(&mut out),
        Some(Command::Interactive { from, to }) => {
            run_interactive(io::stdin().lock(), &mut out, FormConfig { from, to })
        }
        None => run_interactive(io::stdin().lock(), &mut out, FormConfig::default()),
    }
}

fn convert_once(out: &mut impl Write, value: &str, from: Unit, to: Unit) -> Result<()> {
    let measurement = Measurement::from_constrained(validate(value)?, from);
    let request = ConversionRequest::from_measurement(measurement, to);
    let Ok(conversion) = LengthConverter.call(&request);
    writeln!(out, "{conversion}")?;
    Ok(())
}

fn print_units(out: &mut impl Write) -> Result<()> {
    for unit in Unit::ALL {
        writeln!(
            out,
            "{:<10}  {:<2}  1 metre = {} {}",
            unit.label(),
            unit.symbol(),
            unit.per_metre(),
            unit.symbol()
        )?;
    }
    Ok(())
}

/// A single line of input to the interactive form.
#[derive(Debug, PartialEq)]
enum FormCommand {
    Value(String),
    From(Unit),
    To(Unit),
    Convert,
    Show,
    Units,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  value <text>   set the input text
  from <unit>    select the source unit
  to <unit>      select the target unit
  convert        validate the input and convert it
  show           print the form
  units          list the supported units
  help           print this message
  quit           leave the form";

fn parse_command(line: &str) -> Result<FormCommand> {
    let line = line.trim_start();
    let (keyword, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    let command = match keyword.to_ascii_lowercase().as_str() {
        // The value text is kept verbatim so validation sees exactly what was typed.
        "value" => FormCommand::Value(rest.to_owned()),
        "from" => FormCommand::From(rest.parse()?),
        "to" => FormCommand::To(rest.parse()?),
        "convert" => FormCommand::Convert,
        "show" => FormCommand::Show,
        "units" => FormCommand::Units,
        "help" => FormCommand::Help,
        "quit" | "exit" => FormCommand::Quit,
        other => bail!("unknown command `{other}` (type `help` for a list)"),
    };
    Ok(command)
}

fn print_form(out: &mut impl Write, form: &Form) -> io::Result<()> {
    writeln!(out, "input: {:?}", form.input())?;
    writeln!(out, "from:  {}", form.from())?;
    writeln!(out, "to:    {}", form.to())?;
    if let Some(err) = form.error() {
        writeln!(out, "error: {err}")?;
    }
    writeln!(out, "{}", form.result())
}

fn run_interactive(input: impl BufRead, out: &mut impl Write, config: FormConfig) -> Result<()> {
    info!(from = %config.from, to = %config.to, "starting length converter form");

    let mut form = Form::new(config);
    writeln!(out, "Length Unit Converter")?;
    writeln!(out, "{HELP}")?;
    print_form(out, &form)?;

    for line in input.lines() {
        let line = line.context("failed to read form input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "form command");

        match command {
            FormCommand::Value(text) => form.set_input(text),
            FormCommand::From(unit) => form.select_from(unit),
            FormCommand::To(unit) => form.select_to(unit),
            FormCommand::Convert => {
                // A rejected submission is recorded on the form and shown below.
                let _ = form.submit();
            }
            FormCommand::Show => {}
            FormCommand::Units => {
                print_units(out)?;
                continue;
            }
            FormCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            FormCommand::Quit => break,
        }
        print_form(out, &form)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(script.as_bytes(), &mut out, FormConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("value 12.5").unwrap(),
            FormCommand::Value("12.5".into())
        );
        assert_eq!(parse_command("value").unwrap(), FormCommand::Value(String::new()));
        assert_eq!(parse_command("from ft").unwrap(), FormCommand::From(Unit::Foot));
        assert_eq!(parse_command("TO Miles").unwrap(), FormCommand::To(Unit::Mile));
        assert_eq!(parse_command("convert").unwrap(), FormCommand::Convert);
        assert_eq!(parse_command("exit").unwrap(), FormCommand::Quit);
        assert!(parse_command("from yard").is_err());
        assert!(parse_command("launch").is_err());
    }

    #[test]
    fn converts_through_the_form() {
        let output = run("value 1\nfrom mile\nto foot\nconvert\nquit\n");
        assert!(output.contains("1.0 Mile = 5280.00"));
    }

    #[test]
    fn reports_validation_errors() {
        let output = run("convert\nvalue -5\nconvert\nvalue abc\nconvert\n");
        assert!(output.contains("error: Please enter a value"));
        assert!(output.contains("error: Please enter a valid positive number"));
        assert!(output.ends_with("Result will be shown here\n"));
    }

    #[test]
    fn stops_at_quit() {
        let output = run("quit\nvalue 3\nconvert\n");
        assert!(!output.contains("3.0 Metre"));
    }

    #[test]
    fn one_shot_conversion() {
        let mut out = Vec::new();
        convert_once(&mut out, "1000", Unit::Millimetre, Unit::Metre).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1000.0 Millimetre = 1.0 Metre\n");

        let err = convert_once(&mut Vec::<u8>::new(), "-5", Unit::Metre, Unit::Foot).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid positive number");
    }
}
