//! The greeting task.
//!
//! Prints who is calling and whether `API_KEY` is configured:
//!
//! ```text
//! Hello Ada you are 30 years old
//! --------------------------------
//! Key from Env: secret123
//! --------------------------------
//! ```

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Artifact, Outcome};
use crate::error::ErrandError;
use crate::typed::{Handler, Task, TaskContext};

pub const SEPARATOR: &str = "--------------------------------";

/// Configuration key whose value is echoed back.
pub const API_KEY: &str = "API_KEY";

/// Rendered in place of an unset `API_KEY`.
pub const UNSET_PLACEHOLDER: &str = "None";

/// A parameter as the caller supplied it. Never validated.
///
/// Numbers keep their JSON rendering, text is shown as-is, and `null`
/// renders as the same placeholder an unset `API_KEY` does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verbatim {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbatim::Number(n) => fmt::Display::fmt(n, f),
            Verbatim::Text(s) => f.write_str(s),
            Verbatim::Other(serde_json::Value::Null) => f.write_str(UNSET_PLACEHOLDER),
            Verbatim::Other(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<i32> for Verbatim {
    fn from(n: i32) -> Self {
        Verbatim::Number(n.into())
    }
}

impl From<u32> for Verbatim {
    fn from(n: u32) -> Self {
        Verbatim::Number(n.into())
    }
}

impl From<&str> for Verbatim {
    fn from(s: &str) -> Self {
        Verbatim::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetTask {
    pub name: Verbatim,
    pub age: Verbatim,
}

impl GreetTask {
    pub fn new(name: impl Into<Verbatim>, age: impl Into<Verbatim>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

impl Task for GreetTask {
    const TYPE: &'static str = "my_task";
}

/// The four output lines, without trailing newlines.
pub fn render_greeting(task: &GreetTask, api_key: Option<&str>) -> Vec<String> {
    vec![
        format!("Hello {} you are {} years old", task.name, task.age),
        SEPARATOR.to_string(),
        format!("Key from Env: {}", api_key.unwrap_or(UNSET_PLACEHOLDER)),
        SEPARATOR.to_string(),
    ]
}

pub struct GreetHandler;

#[async_trait]
impl Handler<GreetTask> for GreetHandler {
    async fn handle(&self, task: GreetTask, ctx: &TaskContext) -> Result<Outcome, ErrandError> {
        let api_key = ctx.config().get(API_KEY);
        tracing::debug!(api_key_set = api_key.is_some(), "rendering greeting");

        let mut text = render_greeting(&task, api_key.as_deref()).join("\n");
        text.push('\n');
        Ok(Outcome::success().with_artifact(Artifact::Stdout(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RunId;
    use crate::impls::MapProvider;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;
    use ulid::Ulid;

    #[rstest]
    #[case::number(json!({"name": "Ada", "age": 30}), "Hello Ada you are 30 years old")]
    #[case::text(json!({"name": "Ada", "age": "thirty"}), "Hello Ada you are thirty years old")]
    #[case::numeric_text(json!({"name": "Bob", "age": "42"}), "Hello Bob you are 42 years old")]
    #[case::float(json!({"name": "Cy", "age": 30.5}), "Hello Cy you are 30.5 years old")]
    #[case::negative(json!({"name": "Di", "age": -1}), "Hello Di you are -1 years old")]
    #[case::empty(json!({"name": "", "age": 0}), "Hello  you are 0 years old")]
    #[case::padded(json!({"name": " Ed ", "age": " 7 "}), "Hello  Ed  you are  7  years old")]
    #[case::boolean(json!({"name": "Flo", "age": true}), "Hello Flo you are true years old")]
    #[case::null_age(json!({"name": "Gus", "age": null}), "Hello Gus you are None years old")]
    #[case::numeric_name(json!({"name": 42, "age": 30}), "Hello 42 you are 30 years old")]
    #[case::null_name(json!({"name": null, "age": 30}), "Hello None you are 30 years old")]
    #[case::list_name(json!({"name": ["a", 1], "age": 1}), "Hello [\"a\",1] you are 1 years old")]
    fn first_line_is_greeting(#[case] params: serde_json::Value, #[case] expected: &str) {
        let task: GreetTask = serde_json::from_value(params).unwrap();
        let lines = render_greeting(&task, None);
        assert_eq!(lines[0], expected);
    }

    #[rstest]
    #[case::set(Some("secret123"))]
    #[case::empty_value(Some(""))]
    #[case::unset(None)]
    fn separator_brackets_env_line(#[case] api_key: Option<&str>) {
        let lines = render_greeting(&GreetTask::new("Ada", 30), api_key);
        assert_eq!(lines.len(), 4);
        assert_eq!(SEPARATOR.len(), 32);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
        assert_eq!(lines[1], SEPARATOR);
        assert_eq!(lines[3], SEPARATOR);
        assert_eq!(lines.iter().filter(|l| *l == SEPARATOR).count(), 2);
        assert!(lines[2].starts_with("Key from Env: "));
    }

    #[test]
    fn env_line_shows_value_when_set() {
        let lines = render_greeting(&GreetTask::new("Ada", 30), Some("V"));
        assert_eq!(lines[2], "Key from Env: V");
    }

    #[test]
    fn env_line_shows_placeholder_when_unset() {
        let lines = render_greeting(&GreetTask::new("", 0), None);
        assert_eq!(lines[2], "Key from Env: None");
    }

    fn ctx(config: MapProvider) -> TaskContext {
        TaskContext::new(RunId::from_ulid(Ulid::new()), Arc::new(config))
    }

    #[tokio::test]
    async fn handler_renders_full_output_with_key() {
        let config = MapProvider::new().with(API_KEY, "secret123");
        let outcome = GreetHandler
            .handle(GreetTask::new("Ada", 30), &ctx(config))
            .await
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(
            outcome.stdout(),
            "Hello Ada you are 30 years old\n\
             --------------------------------\n\
             Key from Env: secret123\n\
             --------------------------------\n"
        );
    }

    #[tokio::test]
    async fn handler_tolerates_missing_key() {
        let outcome = GreetHandler
            .handle(GreetTask::new("", 0), &ctx(MapProvider::new()))
            .await
            .unwrap();

        assert!(outcome.is_success());
        let stdout = outcome.stdout();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "Hello  you are 0 years old");
        assert_eq!(lines[2], "Key from Env: None");
    }

    #[rstest]
    #[case::no_name(json!({"age": 30}))]
    #[case::no_age(json!({"name": "Ada"}))]
    #[case::nothing(json!({}))]
    fn missing_params_do_not_decode(#[case] params: serde_json::Value) {
        let result = serde_json::from_value::<GreetTask>(params);
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }
}
