//! Command-line parsing of task arguments

use argus_core::{ArgValue, Error, Result};
use argus_utils::kebab_to_camel;

use crate::arguments::ProvidedArguments;
use crate::definition::TaskDefinition;

/// Parse the arguments that follow a task name.
///
/// Bare tokens fill positional parameters in order; `--kebab-name value`,
/// `--kebab-name=value` and bare `--flag` set named parameters. After `--`
/// every token is positional. Once parsing is done, every parameter still
/// absent gets its declared default injected without being marked as typed.
pub fn parse_task_args(task: &TaskDefinition, argv: &[String]) -> Result<ProvidedArguments> {
    let mut provided = ProvidedArguments::new();
    let mut positional = task.positional_params().iter();
    let mut tokens = argv.iter();
    let mut options_done = false;

    while let Some(token) = tokens.next() {
        if !options_done && token == "--" {
            options_done = true;
            continue;
        }

        if let Some(option) = token.strip_prefix("--").filter(|_| !options_done) {
            let (key, inline) = match option.split_once('=') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (option, None),
            };
            let name = kebab_to_camel(key);
            let declaration = task
                .named_param(&name)
                .ok_or_else(|| Error::unknown_parameter(task.name(), format!("--{key}")))?;

            let value = match (declaration.is_flag, inline) {
                (true, None) => ArgValue::Bool(true),
                (_, Some(raw)) => declaration.param_type.parse(&name, &raw)?,
                (false, None) => {
                    let raw = tokens.next().ok_or_else(|| {
                        Error::invalid_argument(&name, format!("option --{key} expects a value"))
                    })?;
                    declaration.param_type.parse(&name, raw)?
                }
            };
            provided.insert_parsed(name, value);
            continue;
        }

        let declaration = positional
            .next()
            .ok_or_else(|| Error::unexpected_argument(task.name(), token))?;
        let value = declaration.param_type.parse(&declaration.name, token)?;
        provided.insert_parsed(declaration.name.clone(), value);
    }

    for declaration in task.parameter_declarations() {
        if provided.contains(&declaration.name) {
            continue;
        }
        if let Some(default) = &declaration.default_value {
            provided.inject_default(declaration.name.clone(), default.clone());
        }
    }

    tracing::debug!(task = task.name(), provided = ?provided.values(), "parsed task arguments");
    Ok(provided)
}
