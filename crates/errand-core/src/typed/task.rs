//! Task trait - binds a task name to its parameter type.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A task's parameters, plus the name the host knows it by.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct GreetTask {
///     name: String,
/// }
///
/// impl Task for GreetTask {
///     const TYPE: &'static str = "greet";
/// }
/// ```
pub trait Task: Serialize + DeserializeOwned + Send + Sync + 'static {
    const TYPE: &'static str;
}
