//! Outcome model: what a task hands back to the host.
//!
//! Tasks do not write to the console themselves. They return stdout
//! artifacts and the host decides where those go.

use serde::{Deserialize, Serialize};

/// Serialized as SUCCESS / FAILURE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Something produced during execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Artifact {
    /// Text to be written to standard output, newlines included.
    Stdout(String),

    /// Arbitrary structured output.
    Json(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            kind: OutcomeKind::Success,
            artifacts: Vec::new(),
            reason: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failure,
            artifacts: Vec::new(),
            reason: Some(reason.into()),
        }
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Concatenation of all stdout artifacts, in order.
    pub fn stdout(&self) -> String {
        self.artifacts
            .iter()
            .filter_map(|a| match a {
                Artifact::Stdout(s) => Some(s.as_str()),
                Artifact::Json(_) => None,
            })
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_kind_serializes_as_required_names() {
        let s = serde_json::to_string(&OutcomeKind::Success).unwrap();
        assert_eq!(s, "\"SUCCESS\"");

        let s = serde_json::to_string(&OutcomeKind::Failure).unwrap();
        assert_eq!(s, "\"FAILURE\"");
    }

    #[test]
    fn artifact_is_tagged_enum() {
        let a = Artifact::Stdout("hello".to_string());
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["kind"], "Stdout");
        assert_eq!(v["value"], "hello");
    }

    #[test]
    fn stdout_concatenates_only_text_artifacts() {
        let o = Outcome::success()
            .with_artifact(Artifact::Stdout("a\n".to_string()))
            .with_artifact(Artifact::Json(serde_json::json!({"x": 1})))
            .with_artifact(Artifact::Stdout("b\n".to_string()));
        assert_eq!(o.stdout(), "a\nb\n");
        assert!(o.is_success());
    }

    #[test]
    fn failure_carries_reason() {
        let o = Outcome::failure("oops");
        assert_eq!(o.kind, OutcomeKind::Failure);
        assert_eq!(o.reason.as_deref(), Some("oops"));
        assert!(o.stdout().is_empty());
    }
}
