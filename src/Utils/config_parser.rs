//! parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
//! pairs key-vector of values, and turn it into the calculator configuration.
//!
//! ```text
//! calculator
//!  max_depth: 512
//! logging
//!  loglevel: info
//!  log_file: false
//! ```
//! Lines starting with `#` or `//` are comments. Sections and keys that are not listed in the
//! document keep their default values; unknown sections or keys are rejected.
use crate::Utils::logger::parse_level;
use crate::symbolic::parse_poly::DEFAULT_MAX_DEPTH;
use log::LevelFilter;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

pub type SectionMap = HashMap<String, Vec<Value>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Syntax(String),
    UnknownSection(String),
    UnknownKey { section: String, key: String },
    InvalidValue { section: String, key: String, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config file '{}': {}", path, source)
            }
            ConfigError::Syntax(msg) => write!(f, "config syntax error: {}", msg),
            ConfigError::UnknownSection(section) => {
                write!(f, "unknown config section '{}'", section)
            }
            ConfigError::UnknownKey { section, key } => {
                write!(f, "unknown key '{}' in config section '{}'", key, section)
            }
            ConfigError::InvalidValue { section, key, value } => write!(
                f,
                "invalid value '{}' for key '{}' in config section '{}'",
                value, key, section
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses a title (word characters without spaces)
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    let (input, result) = parser.parse(input)?;
    // drop the line break between the title and its first key
    let input = input.trim();
    Ok((input, result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value ends at a comma, whitespace, newline or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = space0(input)?;
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and multiple key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;

    let mut section_map = HashMap::new();
    for (key, values) in pairs {
        section_map.insert(key, values);
    }
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with // or #) and blank lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with('#') && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the sections of the document into a HashMap
pub(crate) fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;

    let mut result: DocumentMap = HashMap::new();
    for (title, section_map) in sections {
        // a repeated section adds to the keys of the first one
        result.entry(title).or_default().extend(section_map);
    }
    Ok((input, result))
}

/// Parses a whole document with comments. The entire input must be consumed.
pub fn parse_document_as(input: &str) -> Result<DocumentMap, ConfigError> {
    let filtered = filter_comments(input);
    if filtered.trim().is_empty() {
        return Ok(HashMap::new());
    }
    match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(ConfigError::Syntax(format!(
                    "failed to parse entire document, remaining: '{}'",
                    remaining
                )));
            }
            Ok(parsed)
        }
        Err(e) => Err(ConfigError::Syntax(format!("{:?}", e))),
    }
}

/// Settings of the calculator binary
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    /// nesting limit of the polynomial parser
    pub max_depth: usize,
    pub loglevel: LevelFilter,
    /// also write the log into a `log_<timestamp>.txt` file
    pub log_file: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            loglevel: LevelFilter::Off,
            log_file: false,
        }
    }
}

fn invalid_value(section: &str, key: &str, values: &[Value]) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "),
    }
}

/// Every key of the configuration takes exactly one value.
fn single_value<'a>(section: &str, key: &str, values: &'a [Value]) -> Result<&'a Value, ConfigError> {
    match values {
        [value] => Ok(value),
        _ => Err(invalid_value(section, key, values)),
    }
}

impl CalcConfig {
    pub fn from_document(input: &str) -> Result<Self, ConfigError> {
        let document = parse_document_as(input)?;
        let mut config = CalcConfig::default();
        for (section, keys) in &document {
            if !matches!(section.as_str(), "calculator" | "logging") {
                return Err(ConfigError::UnknownSection(section.clone()));
            }
            for (key, values) in keys {
                let invalid = || invalid_value(section, key, values);
                match (section.as_str(), key.as_str()) {
                    ("calculator", "max_depth") => {
                        config.max_depth = single_value(section, key, values)?
                            .as_integer()
                            .and_then(|depth| usize::try_from(depth).ok())
                            .filter(|depth| *depth > 0)
                            .ok_or_else(invalid)?;
                    }
                    ("logging", "loglevel") => {
                        config.loglevel = single_value(section, key, values)?
                            .as_string()
                            .and_then(|name| parse_level(name))
                            .ok_or_else(invalid)?;
                    }
                    ("logging", "log_file") => {
                        config.log_file = single_value(section, key, values)?
                            .as_boolean()
                            .ok_or_else(invalid)?;
                    }
                    _ => {
                        return Err(ConfigError::UnknownKey {
                            section: section.clone(),
                            key: key.clone(),
                        });
                    }
                }
            }
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_document(&content)
    }
}
