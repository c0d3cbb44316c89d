//! Tasks bundled with the host.

pub mod greet;

pub use self::greet::{GreetHandler, GreetTask, Verbatim};

use crate::app::AppBuilder;
use crate::typed::{RegistryError, Task};

/// Names of every bundled task.
pub const BUNDLED: &[&str] = &[GreetTask::TYPE];

/// Register every bundled task on `builder`.
pub fn register_bundled(builder: AppBuilder) -> Result<AppBuilder, RegistryError> {
    builder.register::<GreetTask, _>(GreetHandler)
}
