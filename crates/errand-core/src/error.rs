use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TaskType;

#[derive(Debug, Error)]
pub enum ErrandError {
    #[error("handler not found for task_type={0}")]
    HandlerNotFound(TaskType),

    /// The host handed the task parameters it cannot decode.
    #[error("invalid params for task_type={task_type}: {reason}")]
    InvalidParams { task_type: TaskType, reason: String },

    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
