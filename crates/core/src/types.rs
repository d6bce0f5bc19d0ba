//! Argument values and parameter types
//!
//! Task arguments are dynamic: a parameter may hold a string typed on the
//! command line, a number produced by a suggestion hook, or a boolean coerced
//! from a prompt answer. [`ArgValue`] is the common carrier; an absent
//! (undefined) value is always expressed as `Option::None`, never as `null`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// A dynamic argument value
pub type ArgValue = serde_json::Value;

/// Ordered argument map keyed by parameter name
pub type Arguments = indexmap::IndexMap<String, ArgValue>;

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());
static HASH32_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{64}$").unwrap());

/// Whether a value counts as "provided" when tested for presence.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy; every other
/// value, including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &ArgValue) -> bool {
    match value {
        ArgValue::Null => false,
        ArgValue::Bool(b) => *b,
        ArgValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        ArgValue::String(s) => !s.is_empty(),
        ArgValue::Array(_) | ArgValue::Object(_) => true,
    }
}

/// Like [`is_truthy`] but for an optional value; `None` is falsy
#[must_use]
pub fn is_truthy_opt(value: Option<&ArgValue>) -> bool {
    value.is_some_and(is_truthy)
}

/// Render a value as prompt text: strings verbatim, everything else as JSON
#[must_use]
pub fn display_value(value: &ArgValue) -> String {
    match value {
        ArgValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The declared type of a task parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Int,
    Float,
    Boolean,
    /// 20-byte hex address with `0x` prefix
    Address,
    /// 32-byte hex word with `0x` prefix
    Bytes32,
    /// Transaction hash
    Tx,
}

impl ParamType {
    /// Parse raw command-line or prompt text into a typed value
    pub fn parse(self, parameter: &str, raw: &str) -> Result<ArgValue> {
        let value = match self {
            ParamType::String => ArgValue::String(raw.to_string()),
            ParamType::Int => {
                let n: i64 = raw.trim().parse().map_err(|_| {
                    Error::invalid_argument(parameter, format!("'{raw}' is not an integer"))
                })?;
                ArgValue::from(n)
            }
            ParamType::Float => {
                let f: f64 = raw.trim().parse().map_err(|_| {
                    Error::invalid_argument(parameter, format!("'{raw}' is not a number"))
                })?;
                serde_json::Number::from_f64(f)
                    .map(ArgValue::Number)
                    .ok_or_else(|| {
                        Error::invalid_argument(parameter, format!("'{raw}' is not finite"))
                    })?
            }
            ParamType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => ArgValue::Bool(true),
                "false" | "0" | "no" => ArgValue::Bool(false),
                _ => {
                    return Err(Error::invalid_argument(
                        parameter,
                        format!("'{raw}' is not a boolean"),
                    ))
                }
            },
            ParamType::Address | ParamType::Bytes32 | ParamType::Tx => {
                ArgValue::String(raw.trim().to_string())
            }
        };
        self.validate(parameter, &value)?;
        Ok(value)
    }

    /// Check that an already-typed value conforms to this type
    pub fn validate(self, parameter: &str, value: &ArgValue) -> Result<()> {
        let ok = match (self, value) {
            (ParamType::String, ArgValue::String(_)) => true,
            (ParamType::Int, ArgValue::Number(n)) => n.is_i64() || n.is_u64(),
            (ParamType::Float, ArgValue::Number(_)) => true,
            (ParamType::Boolean, ArgValue::Bool(_)) => true,
            (ParamType::Address, ArgValue::String(s)) => {
                if !ADDRESS_RE.is_match(s) {
                    return Err(Error::invalid_argument(
                        parameter,
                        format!("invalid address {s}. Must be 0x followed by 40 hex characters"),
                    ));
                }
                true
            }
            (ParamType::Bytes32, ArgValue::String(s)) => {
                if !HASH32_RE.is_match(s) {
                    return Err(Error::invalid_argument(
                        parameter,
                        format!("invalid bytes32 {s}. Must be 0x followed by 64 hex characters"),
                    ));
                }
                true
            }
            (ParamType::Tx, ArgValue::String(s)) => {
                if !HASH32_RE.is_match(s) {
                    return Err(Error::invalid_argument(
                        parameter,
                        format!(
                            "invalid transaction hash {s}. Must be a 66-character hexadecimal string starting with 0x"
                        ),
                    ));
                }
                true
            }
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(Error::invalid_argument(
                parameter,
                format!("expected {self}, got {value}"),
            ))
        }
    }

    /// Bring a resolved value to this type.
    ///
    /// Prompt answers arrive as text; they are parsed here. Values that are
    /// already typed are only validated.
    pub fn coerce(self, parameter: &str, value: ArgValue) -> Result<ArgValue> {
        match value {
            ArgValue::String(raw) if self != ParamType::String => self.parse(parameter, &raw),
            other => {
                self.validate(parameter, &other)?;
                Ok(other)
            }
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::String => "string",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Boolean => "boolean",
            ParamType::Address => "address",
            ParamType::Bytes32 => "bytes32",
            ParamType::Tx => "tx",
        };
        f.write_str(name)
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ParamType::String),
            "int" => Ok(ParamType::Int),
            "float" => Ok(ParamType::Float),
            "boolean" | "bool" => Ok(ParamType::Boolean),
            "address" => Ok(ParamType::Address),
            "bytes32" => Ok(ParamType::Bytes32),
            "tx" => Ok(ParamType::Tx),
            other => Err(Error::configuration(format!("unknown parameter type '{other}'"))),
        }
    }
}
