//! bytes32 string encoding

use argus_core::{ArgValue, Error, ParamType, Result, ResultExt};
use argus_task::{action_fn, TaskBuilder, TaskDefinition};

const BYTES32_LEN: usize = 32;

pub fn to_bytes_task() -> Result<TaskDefinition> {
    TaskBuilder::new("to-bytes", "Converts strings to bytes32")
        .add_optional_positional_param(
            "value",
            "The value to convert. Will always be treated as a string. Cannot be longer than a bytes32 string.",
            None,
            ParamType::String,
        )
        .action(action_fn(|_, args| {
            let value = args
                .get("value")
                .and_then(ArgValue::as_str)
                .ok_or_else(|| Error::missing_argument("value"))?;
            encode_bytes32_string(value)
        }))
        .build()
}

pub fn from_bytes_task() -> Result<TaskDefinition> {
    TaskBuilder::new("from-bytes", "Converts bytes32 to strings")
        .add_positional_param("value", "The bytes32 value to convert", ParamType::Bytes32)
        .action(action_fn(|context, args| {
            let value = args
                .get("value")
                .and_then(ArgValue::as_str)
                .ok_or_else(|| Error::missing_argument("value"))?;
            String::from_utf8(decode_bytes32(value)?).task_context(context.task_name())
        }))
        .build()
}

/// Encode a UTF-8 string of at most 31 bytes as a zero-padded bytes32 word.
/// The last byte is always zero.
pub fn encode_bytes32_string(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    if bytes.len() > BYTES32_LEN - 1 {
        return Err(Error::invalid_argument(
            "value",
            "bytes32 string must be less than 32 bytes",
        ));
    }

    let mut word = [0u8; BYTES32_LEN];
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(format!("0x{}", hex::encode(word)))
}

/// The string bytes of a word produced by [`encode_bytes32_string`], with the
/// zero padding removed
pub fn decode_bytes32(word: &str) -> Result<Vec<u8>> {
    let digits = word.strip_prefix("0x").unwrap_or(word);
    let bytes = hex::decode(digits).map_err(|e| Error::invalid_argument("value", e.to_string()))?;

    if bytes.len() != BYTES32_LEN {
        return Err(Error::invalid_argument("value", "invalid bytes32 - not 32 bytes long"));
    }
    if bytes[BYTES32_LEN - 1] != 0 {
        return Err(Error::invalid_argument(
            "value",
            "invalid bytes32 string - no null terminator",
        ));
    }

    let length = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    Ok(bytes[..length].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_config::Config;
    use argus_prompt::ScriptedRenderer;
    use argus_task::TaskContext;
    use serde_json::json;
    use std::sync::Arc;

    const HELLO: &str = "0x68656c6c6f000000000000000000000000000000000000000000000000000000";

    async fn run(task: TaskDefinition, value: &str) -> Result<String> {
        let context = TaskContext::new(
            task.name(),
            Arc::new(Config::default()),
            Arc::new(ScriptedRenderer::new()),
        );
        let args: argus_core::Arguments =
            [("value".to_string(), json!(value))].into_iter().collect();
        task.action().run(&context, &args).await
    }

    #[test]
    fn encodes_short_strings() {
        assert_eq!(encode_bytes32_string("hello").unwrap(), HELLO);
        assert_eq!(decode_bytes32(HELLO).unwrap(), b"hello");
    }

    #[test]
    fn rejects_long_strings() {
        assert!(encode_bytes32_string(&"a".repeat(32)).is_err());
        assert!(encode_bytes32_string(&"a".repeat(31)).is_ok());
    }

    #[test]
    fn decode_requires_terminator() {
        let word = format!("0x{}", "61".repeat(32));
        let err = decode_bytes32(&word).unwrap_err();
        assert!(err.to_string().contains("null terminator"));
    }

    #[test]
    fn empty_string_round_trips() {
        let word = encode_bytes32_string("").unwrap();
        assert!(decode_bytes32(&word).unwrap().is_empty());
    }

    #[tokio::test]
    async fn tasks_convert_both_ways() {
        assert_eq!(run(to_bytes_task().unwrap(), "hello").await.unwrap(), HELLO);
        assert_eq!(run(from_bytes_task().unwrap(), HELLO).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn non_utf8_payload_names_the_task() {
        let word = format!("0xff{}", "00".repeat(31));
        let err = run(from_bytes_task().unwrap(), &word).await.unwrap_err();

        assert!(matches!(err, Error::Action { ref task, .. } if task == "from-bytes"));
        assert!(err.to_string().starts_with("task 'from-bytes' failed:"));
    }
}
