//! AppBuilder - wiring and startup checks.

use std::sync::Arc;

use super::runtime::Runtime;
use crate::ports::ConfigProvider;
use crate::typed::{Handler, RegistryError, Task, TypedRegistry};

/// Builds an `App` from registered handlers.
///
/// ```ignore
/// let app = AppBuilder::new()
///     .register::<GreetTask, _>(GreetHandler)?
///     .expect_tasks(&["my_task"])
///     .build()?;
/// ```
///
/// `build()` fails if any name given to `expect_tasks()` has no handler.
pub struct AppBuilder {
    registry: TypedRegistry,
    expected_tasks: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing task types: {0:?}. These tasks were expected but not registered.")]
    MissingTaskTypes(Vec<String>),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            registry: TypedRegistry::new(),
            expected_tasks: None,
        }
    }

    pub fn register<T: Task, H: Handler<T> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<T, H>(handler)?;
        Ok(self)
    }

    pub fn expect_tasks(mut self, task_types: &[&str]) -> Self {
        self.expected_tasks = Some(task_types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected_tasks) = &self.expected_tasks {
            let registered_types = self.registry.registered_types();
            let missing_tasks: Vec<String> = expected_tasks
                .iter()
                .filter(|x| !registered_types.contains(x))
                .cloned()
                .collect();
            if !missing_tasks.is_empty() {
                return Err(BuildError::MissingTaskTypes(missing_tasks));
            }
        }
        Ok(App {
            registry: Arc::new(self.registry),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built application: the frozen registry.
pub struct App {
    registry: Arc<TypedRegistry>,
}

impl App {
    pub fn registry(&self) -> &TypedRegistry {
        &self.registry
    }

    pub fn task_types(&self) -> Vec<String> {
        self.registry.registered_types()
    }

    /// Runtime reading task configuration from `config`.
    pub fn runtime(&self, config: Arc<dyn ConfigProvider>) -> Runtime {
        Runtime::new(Arc::clone(&self.registry), config)
    }
}
