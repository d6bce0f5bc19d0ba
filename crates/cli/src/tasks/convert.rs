//! Wei denomination conversion
//!
//! The `unit` parameter is suggested from the size of `amount`; with no
//! suggestion the user picks a unit from a list.

use argus_core::{ArgValue, Error, ParamType, Result};
use argus_prompt::{Choice, PromptSpec};
use argus_task::{
    CustomPrompt, PromptRequest, Suggest, SuggestRequest, TaskAction, TaskBuilder, TaskContext,
    TaskDefinition,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Supported units and their power of ten relative to wei
pub const UNITS: &[(&str, u32)] = &[("wei", 0), ("gwei", 9), ("ether", 18)];

const GWEI: u128 = 1_000_000_000;
const ETHER: u128 = 1_000_000_000_000_000_000;

pub fn convert_task() -> Result<TaskDefinition> {
    TaskBuilder::new("convert", "Converts a wei amount to another unit")
        .add_positional_param("amount", "The amount in wei, as a whole number", ParamType::String)
        .add_optional_param(
            "unit",
            "The unit to convert to. One of wei, gwei or ether",
            Some(json!("wei")),
            ParamType::String,
        )
        .suggest("unit", Arc::new(UnitSuggest))
        .prompt("unit", Arc::new(UnitPrompt))
        .action(Arc::new(Convert))
        .build()
}

fn decimals(unit: &str) -> Option<u32> {
    UNITS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .map(|(_, decimals)| *decimals)
}

fn parse_wei(value: &ArgValue) -> Result<u128> {
    let invalid = || {
        Error::invalid_argument(
            "amount",
            format!("'{}' is not a whole wei amount", argus_core::display_value(value)),
        )
    };
    match value {
        ArgValue::Number(n) => n.as_u64().map(u128::from).ok_or_else(invalid),
        ArgValue::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Render `wei` in a unit with `decimals` places, without rounding
pub fn format_units(wei: u128, decimals: u32) -> String {
    let digits = wei.to_string();
    let places = decimals as usize;
    if places == 0 {
        return digits;
    }

    let padded = format!("{digits:0>width$}", width = places + 1);
    let (whole, fraction) = padded.split_at(padded.len() - places);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Picks the largest unit the amount fully exceeds
pub struct UnitSuggest;

#[async_trait]
impl Suggest for UnitSuggest {
    async fn suggest(&self, request: &SuggestRequest<'_>) -> Result<Option<ArgValue>> {
        let Some(amount) = request.arg("amount").and_then(|v| parse_wei(v).ok()) else {
            return Ok(None);
        };
        let suggestion = if amount > ETHER {
            Some("ether")
        } else if amount > GWEI {
            Some("gwei")
        } else {
            None
        };
        Ok(suggestion.map(ArgValue::from))
    }
}

/// Offers the supported units as a list, preselecting the declared default
pub struct UnitPrompt;

#[async_trait]
impl CustomPrompt for UnitPrompt {
    async fn prompt(&self, request: &PromptRequest<'_>) -> Result<Option<ArgValue>> {
        let default = request
            .param_default
            .and_then(ArgValue::as_str)
            .and_then(|d| UNITS.iter().position(|(name, _)| *name == d));
        let choices = UNITS.iter().map(|(name, _)| Choice::text(*name)).collect();
        let spec = PromptSpec::select(format!("Select {}", request.param_name), choices)
            .with_default_choice(default);

        request.context.prompt(spec).await.map(Some)
    }
}

struct Convert;

#[async_trait]
impl TaskAction for Convert {
    async fn run(&self, _context: &TaskContext, args: &argus_core::Arguments) -> Result<String> {
        let amount = args
            .get("amount")
            .ok_or_else(|| Error::missing_argument("amount"))
            .and_then(parse_wei)?;
        let unit = args.get("unit").and_then(ArgValue::as_str).unwrap_or("wei");
        let decimals = decimals(unit).ok_or_else(|| {
            Error::invalid_argument("unit", format!("unknown unit '{unit}', expected wei, gwei or ether"))
        })?;

        let result = format_units(amount, decimals);
        Ok(format!("{result} {}", unit.to_ascii_lowercase()))
    }
}
