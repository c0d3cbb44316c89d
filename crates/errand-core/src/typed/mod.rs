//! Typed task API.
//!
//! Task authors work with `Task` and `Handler<T>`. The registry stores
//! handlers behind the object-safe `DynHandler`, keyed by `Task::TYPE`.

pub mod context;
pub mod handler;
pub mod registry;
pub mod task;

pub use self::context::TaskContext;
pub use self::handler::{DynHandler, Handler, TypedHandler};
pub use self::registry::{RegistryError, TypedRegistry};
pub use self::task::Task;
