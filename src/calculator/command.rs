//! Calculator commands: keyword lookup, argument validation and the error messages the
//! calculator reports.

use crate::symbolic::parse_poly::{ParseError, parse_coeff};
use crate::symbolic::poly_engine::PolyCoeff;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Command keywords as they are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy,
    At,
    Print,
    Pop,
    Compose,
}

impl Keyword {
    pub fn takes_argument(&self) -> bool {
        matches!(self, Keyword::DegBy | Keyword::At | Keyword::Compose)
    }

    /// Error reported when the argument of the keyword is missing or malformed.
    fn argument_error(&self) -> CommandError {
        match self {
            Keyword::DegBy => CommandError::DegByWrongVariable,
            Keyword::At => CommandError::AtWrongValue,
            Keyword::Compose => CommandError::ComposeWrongParameter,
            _ => CommandError::WrongCommand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(u64),
    At(PolyCoeff),
    Print,
    Pop,
    Compose(u64),
}

#[derive(Debug)]
pub enum CommandError {
    StackUnderflow,
    WrongCommand,
    DegByWrongVariable,
    AtWrongValue,
    ComposeWrongParameter,
    WrongPoly(ParseError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::StackUnderflow => write!(f, "STACK UNDERFLOW"),
            CommandError::WrongCommand => write!(f, "WRONG COMMAND"),
            CommandError::DegByWrongVariable => write!(f, "DEG BY WRONG VARIABLE"),
            CommandError::AtWrongValue => write!(f, "AT WRONG VALUE"),
            CommandError::ComposeWrongParameter => write!(f, "COMPOSE WRONG PARAMETER"),
            CommandError::WrongPoly(_) => write!(f, "WRONG POLY"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::WrongPoly(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        CommandError::WrongPoly(e)
    }
}

/// Unsigned argument: digits only, no leading zeros, inside the `u64` range.
fn parse_unsigned_argument(arg: &str) -> Option<u64> {
    let well_formed = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_digit())
        && !(arg.len() > 1 && arg.starts_with('0'));
    if well_formed { arg.parse().ok() } else { None }
}

/// Parses a command line. The argument, if any, follows the keyword after a single space.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let (name, arg) = match line.split_once(' ') {
        Some((name, arg)) => (name, Some(arg)),
        None => (line, None),
    };
    let keyword = Keyword::from_str(name).map_err(|_| CommandError::WrongCommand)?;
    let arg = match (keyword.takes_argument(), arg) {
        (false, None) => "",
        (false, Some(_)) => return Err(CommandError::WrongCommand),
        (true, None) => return Err(keyword.argument_error()),
        (true, Some(arg)) => arg,
    };
    let command = match keyword {
        Keyword::Zero => Command::Zero,
        Keyword::IsCoeff => Command::IsCoeff,
        Keyword::IsZero => Command::IsZero,
        Keyword::Clone => Command::Clone,
        Keyword::Add => Command::Add,
        Keyword::Mul => Command::Mul,
        Keyword::Neg => Command::Neg,
        Keyword::Sub => Command::Sub,
        Keyword::IsEq => Command::IsEq,
        Keyword::Deg => Command::Deg,
        Keyword::Print => Command::Print,
        Keyword::Pop => Command::Pop,
        Keyword::DegBy => {
            Command::DegBy(parse_unsigned_argument(arg).ok_or(keyword.argument_error())?)
        }
        Keyword::At => Command::At(parse_coeff(arg).map_err(|_| keyword.argument_error())?),
        Keyword::Compose => {
            Command::Compose(parse_unsigned_argument(arg).ok_or(keyword.argument_error())?)
        }
    };
    Ok(command)
}
