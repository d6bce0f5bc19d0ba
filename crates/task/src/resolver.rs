//! Interactive parameter resolution
//!
//! Each declared parameter is resolved in order through a fixed chain, stopping
//! at the first step that yields a value:
//!
//! 1. a truthy value the user actually supplied is kept as is;
//! 2. the `suggest` hook, if any, computes a candidate. A candidate never
//!    finalises the value on its own, it only pre-fills the raw prompt;
//! 3. without a candidate, the custom `prompt` hook, if any, asks the user;
//! 4. otherwise a raw text prompt asks, pre-filled with the candidate or the
//!    declared default.
//!
//! Later parameters see earlier results through the accumulated arguments,
//! so resolution is strictly sequential. A cancelled prompt aborts the whole
//! run with [`Error::Cancelled`].

use argus_core::{
    display_value, is_truthy, ArgValue, Arguments, Error, Result,
    DESCRIPTION_CLAUSE_SEPARATOR, DESCRIPTION_HINT_MAX_CHARS, NON_INTERACTIVE_PARAM,
    RAW_PROMPT_PREFIX, UI_TARGET,
};
use argus_prompt::PromptSpec;
use tracing::debug;

use crate::arguments::ProvidedArguments;
use crate::context::TaskContext;
use crate::parameter::{ParameterDeclaration, PromptRequest, SuggestRequest};

/// Resolve every declaration to a value.
///
/// Returns only the values this run settled on, including explicit ones
/// passed through from `provided`. Parameters that end up undefined are
/// absent from the result.
pub async fn resolve(
    provided: &ProvidedArguments,
    declarations: &[&ParameterDeclaration],
    context: &TaskContext,
) -> Result<Arguments> {
    debug!(
        target: UI_TARGET,
        task = context.task_name(),
        parameters = declarations.len(),
        "collecting parameters"
    );

    let mut collected = Arguments::new();
    for declaration in declarations {
        if declaration.name == NON_INTERACTIVE_PARAM {
            continue;
        }

        let args_so_far = args_so_far(provided, &collected);
        if let Some(value) = collect_arg(declaration, provided, &args_so_far, context).await? {
            debug!(
                target: UI_TARGET,
                parameter = %declaration.name,
                value = %value,
                "collected value"
            );
            collected.insert(declaration.name.clone(), value);
        }
    }

    Ok(collected)
}

fn args_so_far(provided: &ProvidedArguments, collected: &Arguments) -> Arguments {
    let mut merged = provided.values().clone();
    for (name, value) in collected {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

async fn collect_arg(
    declaration: &ParameterDeclaration,
    provided: &ProvidedArguments,
    args_so_far: &Arguments,
    context: &TaskContext,
) -> Result<Option<ArgValue>> {
    let provided_value = provided.get(&declaration.name);
    debug!(
        target: UI_TARGET,
        parameter = %declaration.name,
        provided = ?provided_value,
        typed = provided.was_parsed(&declaration.name),
        "collecting parameter"
    );

    if let Some(value) = provided_value.filter(|v| is_truthy(v)) {
        if !provided.is_injected_default(declaration) {
            debug!(target: UI_TARGET, parameter = %declaration.name, "value provided by the user");
            return Ok(Some(value.clone()));
        }
    }

    let mut suggested = None;
    if let Some(hook) = &declaration.suggest {
        debug!(target: UI_TARGET, parameter = %declaration.name, "running suggestion");
        let request = SuggestRequest {
            context,
            args: args_so_far,
        };
        suggested = hook
            .suggest(&request)
            .await
            .map_err(|e| wrap_hook_error(&declaration.name, "suggest", e))?;
        debug!(target: UI_TARGET, parameter = %declaration.name, suggestion = ?suggested, "suggested value");
    }
    let suggested = suggested.filter(is_truthy);

    if suggested.is_none() {
        if let Some(hook) = &declaration.prompt {
            debug!(target: UI_TARGET, parameter = %declaration.name, "running custom prompt");
            let request = PromptRequest {
                context,
                param_name: &declaration.name,
                param_default: declaration.default_value.as_ref(),
                description: declaration.description.as_deref(),
                args: args_so_far,
            };
            let answer = hook
                .prompt(&request)
                .await
                .map_err(|e| wrap_hook_error(&declaration.name, "prompt", e))?;
            if answer.is_some() {
                return Ok(answer);
            }
        }
    }

    let initial = suggested.as_ref().or(declaration.default_value.as_ref());
    raw_prompt(declaration, initial, context).await.map(Some)
}

async fn raw_prompt(
    declaration: &ParameterDeclaration,
    initial: Option<&ArgValue>,
    context: &TaskContext,
) -> Result<ArgValue> {
    debug!(target: UI_TARGET, parameter = %declaration.name, "running raw prompt");

    let spec = PromptSpec::input(raw_prompt_message(
        &declaration.name,
        declaration.description.as_deref(),
    ))
    .with_initial_text(initial.map(display_value));

    let answer = context.prompt(spec).await?;
    Ok(coerce_raw_answer(answer))
}

/// `Enter <name>`, followed by the first clause of the description (at most
/// 150 characters) in parentheses when there is a description
pub fn raw_prompt_message(name: &str, description: Option<&str>) -> String {
    match description.filter(|d| !d.is_empty()) {
        Some(description) => {
            let clause = description
                .split(DESCRIPTION_CLAUSE_SEPARATOR)
                .next()
                .unwrap_or_default();
            let hint: String = clause.chars().take(DESCRIPTION_HINT_MAX_CHARS).collect();
            format!("{RAW_PROMPT_PREFIX} {name} ({hint})")
        }
        None => format!("{RAW_PROMPT_PREFIX} {name}"),
    }
}

fn coerce_raw_answer(answer: ArgValue) -> ArgValue {
    match answer.as_str() {
        Some("true") => ArgValue::Bool(true),
        Some("false") => ArgValue::Bool(false),
        _ => answer,
    }
}

// Cancellation stays distinguishable; anything else gets the parameter name.
fn wrap_hook_error(parameter: &str, hook: &'static str, err: Error) -> Error {
    match err {
        Error::Cancelled | Error::Hook { .. } => err,
        other => Error::hook(parameter, hook, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{suggest_fn, CustomPrompt, Suggest};
    use argus_config::Config;
    use argus_core::ParamType;
    use argus_prompt::{Choice, PromptKind, ScriptedRenderer};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn context(renderer: Arc<ScriptedRenderer>) -> TaskContext {
        TaskContext::new("test", Arc::new(Config::default()), renderer)
    }

    /// Counts calls and answers with a fixed value
    struct CountingSuggest {
        calls: AtomicUsize,
        answer: Option<ArgValue>,
    }

    impl CountingSuggest {
        fn new(answer: Option<ArgValue>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                answer,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Suggest for CountingSuggest {
        async fn suggest(&self, _request: &SuggestRequest<'_>) -> Result<Option<ArgValue>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.clone())
        }
    }

    /// Records the request it saw and answers with a fixed value
    struct RecordingPrompt {
        answer: Option<ArgValue>,
        seen: Mutex<Vec<(String, Option<ArgValue>, Option<String>)>>,
    }

    impl RecordingPrompt {
        fn new(answer: Option<ArgValue>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CustomPrompt for RecordingPrompt {
        async fn prompt(&self, request: &PromptRequest<'_>) -> Result<Option<ArgValue>> {
            self.seen.lock().push((
                request.param_name.to_string(),
                request.param_default.cloned(),
                request.description.map(str::to_string),
            ));
            Ok(self.answer.clone())
        }
    }

    /// A custom prompt that renders a selection through the context
    struct SelectPrompt;

    #[async_trait]
    impl CustomPrompt for SelectPrompt {
        async fn prompt(&self, request: &PromptRequest<'_>) -> Result<Option<ArgValue>> {
            let spec = PromptSpec::select(
                format!("Pick {}", request.param_name),
                vec![Choice::text("a"), Choice::text("b")],
            );
            request.context.prompt(spec).await.map(Some)
        }
    }

    struct FailingSuggest;

    #[async_trait]
    impl Suggest for FailingSuggest {
        async fn suggest(&self, _request: &SuggestRequest<'_>) -> Result<Option<ArgValue>> {
            Err(Error::configuration("rpc down"))
        }
    }

    fn named(name: &str) -> ParameterDeclaration {
        ParameterDeclaration::new(name, ParamType::String)
    }

    #[tokio::test]
    async fn user_value_short_circuits() {
        let suggest = CountingSuggest::new(Some(json!("suggested")));
        let prompt = RecordingPrompt::new(Some(json!("prompted")));
        let decl = named("unit")
            .optional(Some(json!("wei")))
            .with_suggest(suggest.clone())
            .with_prompt(prompt.clone());
        let renderer = Arc::new(ScriptedRenderer::new());
        let provided = ProvidedArguments::new().with_parsed("unit", "gwei");

        let resolved = resolve(&provided, &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(resolved.get("unit"), Some(&json!("gwei")));
        assert_eq!(suggest.calls(), 0);
        assert!(prompt.seen.lock().is_empty());
        assert_eq!(renderer.prompt_count(), 0);
    }

    #[tokio::test]
    async fn typed_default_counts_as_user_value() {
        let decl = named("unit").optional(Some(json!("wei")));
        let renderer = Arc::new(ScriptedRenderer::new());
        let provided = ProvidedArguments::new().with_parsed("unit", "wei");

        let resolved = resolve(&provided, &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(resolved.get("unit"), Some(&json!("wei")));
        assert_eq!(renderer.prompt_count(), 0);
    }

    #[tokio::test]
    async fn injected_default_runs_the_chain() {
        let suggest = CountingSuggest::new(None);
        let decl = named("unit")
            .optional(Some(json!("wei")))
            .with_suggest(suggest.clone());
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.accept_initial();
        let provided = ProvidedArguments::new().with_default("unit", "wei");

        let resolved = resolve(&provided, &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(suggest.calls(), 1);
        assert_eq!(renderer.seen()[0].initial_text(), Some("wei"));
        assert_eq!(resolved.get("unit"), Some(&json!("wei")));
    }

    #[tokio::test]
    async fn falsy_provided_value_is_prompted() {
        let decl = named("count");
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("3");
        let provided = ProvidedArguments::new().with_parsed("count", "");

        let resolved = resolve(&provided, &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(resolved.get("count"), Some(&json!("3")));
    }

    #[tokio::test]
    async fn raw_answers_coerce_booleans() {
        let decls = [named("a"), named("b"), named("c"), named("d")];
        let refs: Vec<&ParameterDeclaration> = decls.iter().collect();
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("true").answer("false").answer("True").answer("");

        let resolved = resolve(&ProvidedArguments::new(), &refs, &context(renderer))
            .await
            .unwrap();

        assert_eq!(resolved.get("a"), Some(&json!(true)));
        assert_eq!(resolved.get("b"), Some(&json!(false)));
        assert_eq!(resolved.get("c"), Some(&json!("True")));
        assert_eq!(resolved.get("d"), Some(&json!("")));
    }

    #[tokio::test]
    async fn later_suggest_sees_earlier_result() {
        let seen_amount = Arc::new(Mutex::new(None));
        let recorder = seen_amount.clone();
        let amount = named("amount").positional();
        let unit = named("unit").with_suggest(suggest_fn(move |req| {
            *recorder.lock() = req.arg("amount").cloned();
            Ok(None)
        }));
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("42").accept_initial();

        resolve(
            &ProvidedArguments::new(),
            &[&amount, &unit],
            &context(renderer),
        )
        .await
        .unwrap();

        assert_eq!(*seen_amount.lock(), Some(json!("42")));
    }

    #[tokio::test]
    async fn reserved_flag_is_skipped() {
        let suggest = CountingSuggest::new(Some(json!(true)));
        let flag = ParameterDeclaration::new(NON_INTERACTIVE_PARAM, ParamType::Boolean)
            .flag()
            .with_suggest(suggest.clone());
        let renderer = Arc::new(ScriptedRenderer::new());
        let provided = ProvidedArguments::new().with_default(NON_INTERACTIVE_PARAM, false);

        let resolved = resolve(&provided, &[&flag], &context(renderer.clone()))
            .await
            .unwrap();

        assert!(!resolved.contains_key(NON_INTERACTIVE_PARAM));
        assert_eq!(suggest.calls(), 0);
        assert_eq!(renderer.prompt_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_stops_everything() {
        let decls = [named("first"), named("second"), named("third")];
        let refs: Vec<&ParameterDeclaration> = decls.iter().collect();
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("one").cancel().answer("three");

        let err = resolve(&ProvidedArguments::new(), &refs, &context(renderer.clone()))
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(renderer.prompt_count(), 2);
        assert_eq!(renderer.remaining(), 1);
    }

    #[tokio::test]
    async fn suggestion_prefills_and_skips_custom_prompt() {
        let prompt = RecordingPrompt::new(Some(json!("custom")));
        let decl = named("unit")
            .optional(Some(json!("wei")))
            .with_suggest(suggest_fn(|_| Ok(Some(json!("ether")))))
            .with_prompt(prompt.clone());
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.accept_initial();

        let resolved = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert!(prompt.seen.lock().is_empty());
        assert_eq!(renderer.seen()[0].initial_text(), Some("ether"));
        assert_eq!(resolved.get("unit"), Some(&json!("ether")));
    }

    #[tokio::test]
    async fn falsy_suggestion_is_ignored() {
        let prompt = RecordingPrompt::new(Some(json!("custom")));
        let decl = named("unit")
            .with_suggest(suggest_fn(|_| Ok(Some(json!("")))))
            .with_prompt(prompt.clone());
        let renderer = Arc::new(ScriptedRenderer::new());

        let resolved = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(resolved.get("unit"), Some(&json!("custom")));
        assert_eq!(renderer.prompt_count(), 0);
    }

    #[tokio::test]
    async fn custom_prompt_receives_declaration_details() {
        let prompt = RecordingPrompt::new(Some(json!("picked")));
        let decl = named("unit")
            .optional(Some(json!("wei")))
            .with_description("Target unit. One of wei, gwei, ether")
            .with_prompt(prompt.clone());
        let renderer = Arc::new(ScriptedRenderer::new());

        let resolved = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer))
            .await
            .unwrap();

        assert_eq!(resolved.get("unit"), Some(&json!("picked")));
        let seen = prompt.seen.lock();
        assert_eq!(seen[0].0, "unit");
        assert_eq!(seen[0].1, Some(json!("wei")));
        assert_eq!(seen[0].2.as_deref(), Some("Target unit. One of wei, gwei, ether"));
    }

    #[tokio::test]
    async fn custom_prompt_declining_falls_back_to_raw() {
        let decl = named("unit")
            .optional(Some(json!("wei")))
            .with_prompt(RecordingPrompt::new(None));
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("gwei");

        let resolved = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(renderer.seen()[0].initial_text(), Some("wei"));
        assert_eq!(resolved.get("unit"), Some(&json!("gwei")));
    }

    #[tokio::test]
    async fn custom_prompt_can_render_through_context() {
        let decl = named("letter").with_prompt(Arc::new(SelectPrompt));
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("b");

        let resolved = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(resolved.get("letter"), Some(&json!("b")));
        assert!(matches!(renderer.seen()[0].kind, PromptKind::Select { .. }));
    }

    #[tokio::test]
    async fn cancel_inside_custom_prompt_is_not_wrapped() {
        let decl = named("letter").with_prompt(Arc::new(SelectPrompt));
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.cancel();

        let err = resolve(&ProvidedArguments::new(), &[&decl], &context(renderer))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn hook_failure_propagates() {
        let decls = [named("unit").with_suggest(Arc::new(FailingSuggest)), named("next")];
        let refs: Vec<&ParameterDeclaration> = decls.iter().collect();
        let renderer = Arc::new(ScriptedRenderer::new());

        let err = resolve(&ProvidedArguments::new(), &refs, &context(renderer.clone()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Hook { hook: "suggest", .. }));
        assert!(err.to_string().contains("rpc down"));
        assert_eq!(renderer.prompt_count(), 0);
    }

    #[tokio::test]
    async fn no_description_no_default() {
        let decl = named("value");
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.answer("x");

        resolve(&ProvidedArguments::new(), &[&decl], &context(renderer.clone()))
            .await
            .unwrap();

        let spec = &renderer.seen()[0];
        assert_eq!(spec.message, "Enter value");
        assert_eq!(spec.initial_text(), None);
    }

    #[tokio::test]
    async fn wei_amount_suggests_ether() {
        let amount = ParameterDeclaration::new("amount", ParamType::Float).positional();
        let unit = ParameterDeclaration::new("unit", ParamType::String)
            .optional(Some(json!("wei")))
            .with_suggest(suggest_fn(|req| {
                let big = req
                    .arg("amount")
                    .and_then(ArgValue::as_f64)
                    .is_some_and(|a| a > 1e18);
                Ok(big.then(|| json!("ether")))
            }));
        let renderer = Arc::new(ScriptedRenderer::new());
        renderer.accept_initial();
        let provided = ProvidedArguments::new()
            .with_parsed("amount", 5e18)
            .with_default("unit", "wei");

        let resolved = resolve(&provided, &[&amount, &unit], &context(renderer.clone()))
            .await
            .unwrap();

        assert_eq!(renderer.prompt_count(), 1);
        assert_eq!(renderer.seen()[0].initial_text(), Some("ether"));
        assert_eq!(resolved.get("amount"), Some(&json!(5e18)));
        assert_eq!(resolved.get("unit"), Some(&json!("ether")));
    }

    #[test]
    fn message_uses_first_clause() {
        assert_eq!(
            raw_prompt_message("value", Some("The value to convert. Always a string.")),
            "Enter value (The value to convert)"
        );
        assert_eq!(raw_prompt_message("value", Some("")), "Enter value");
    }

    proptest! {
        #[test]
        fn hint_is_first_clause_capped(description in "[a-z .]{1,400}") {
            let message = raw_prompt_message("p", Some(&description));
            let hint = message
                .strip_prefix("Enter p (")
                .and_then(|m| m.strip_suffix(')'))
                .unwrap();
            let clause = description.split(DESCRIPTION_CLAUSE_SEPARATOR).next().unwrap();
            prop_assert_eq!(
                hint.chars().count(),
                clause.chars().count().min(DESCRIPTION_HINT_MAX_CHARS)
            );
            prop_assert!(clause.starts_with(hint));
        }
    }
}
