//! Command-line flag parsing
//!
//! The flag surface uses multi-character single-dash short forms (`-nyd`,
//! `-px`) alongside long forms, and silently ignores unknown flags, so it is
//! hand-matched rather than expressed through a derive-style parser. Tuning
//! values are integers; a missing or malformed value is a hard error naming
//! the offending flag, never a silent zero.

use thiserror::Error;

use crate::sim::SimParams;

/// What an invocation asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(SimParams),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("{flag} requires an integer value")]
    MissingValue { flag: String },
    #[error("invalid value {value:?} for {flag}: expected an integer")]
    InvalidValue { flag: String, value: String },
}

pub const USAGE: &str = "\
Usage:
    -nyd: --no-y-damping: removes y damping
    -nxd: --no-x-damping: removes x damping
    -ng: --no-gravity: removes gravity
    -h: --help: shows this message
    -yd <num>: --y-damping <num>: sets custom y axis damping amount
    -xd <num>: --x-damping <num>: sets custom x axis damping amount
    -g <num>: --gravity <num>: sets custom gravity force
    -px <num>: --push-x <num>: sets initial horizontal velocity
    -py <num>: --push-y <num>: sets initial vertical velocity
  * note: it is recommended to use -ng and -nyd together
";

/// Parse an argument list (without the program name).
pub fn parse<I, S>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();

    // Help wins no matter what else is on the line.
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Command::Help);
    }

    let mut params = SimParams::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-nyd" | "--no-y-damping" => params.y_damping = 1.0,
            "-nxd" | "--no-x-damping" => params.x_damping = 1.0,
            "-ng" | "--no-gravity" => params.gravity = 0.0,
            "-yd" | "--y-damping" => params.y_damping = int_value(arg, iter.next())?,
            "-xd" | "--x-damping" => params.x_damping = int_value(arg, iter.next())?,
            "-g" | "--gravity" => params.gravity = int_value(arg, iter.next())?,
            "-px" | "--push-x" => params.push_x = int_value(arg, iter.next())?,
            "-py" | "--push-y" => params.push_y = int_value(arg, iter.next())?,
            // Unknown flags are ignored.
            _ => {}
        }
    }
    Ok(Command::Run(params))
}

fn int_value(flag: &str, value: Option<&String>) -> Result<f32, ArgError> {
    let value = value.ok_or_else(|| ArgError::MissingValue {
        flag: flag.to_owned(),
    })?;
    value
        .parse::<i64>()
        .map(|v| v as f32)
        .map_err(|_| ArgError::InvalidValue {
            flag: flag.to_owned(),
            value: value.clone(),
        })
}
