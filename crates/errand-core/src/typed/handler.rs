//! Handler traits.
//!
//! `Handler<T>` is what task authors implement. `DynHandler` is its
//! object-safe counterpart, so handlers for different task types can share
//! one `HashMap<String, Arc<dyn DynHandler>>`.

use super::context::TaskContext;
use super::task::Task;
use crate::domain::{Outcome, TaskType};
use crate::error::ErrandError;
use async_trait::async_trait;
use std::marker::PhantomData;

#[async_trait]
pub trait Handler<T: Task>: Send + Sync {
    async fn handle(&self, task: T, ctx: &TaskContext) -> Result<Outcome, ErrandError>;
}

#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_dyn(
        &self,
        params: serde_json::Value,
        ctx: &TaskContext,
    ) -> Result<Outcome, ErrandError>;

    fn task_type(&self) -> &str;
}

/// Type-erasing adapter from `Handler<T>` to `DynHandler`.
pub struct TypedHandler<T: Task, H: Handler<T>> {
    handler: H,
    _marker: PhantomData<T>,
}

impl<T: Task, H: Handler<T>> TypedHandler<T, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Task, H: Handler<T>> DynHandler for TypedHandler<T, H> {
    async fn handle_dyn(
        &self,
        params: serde_json::Value,
        ctx: &TaskContext,
    ) -> Result<Outcome, ErrandError> {
        let task: T = serde_json::from_value(params).map_err(|e| ErrandError::InvalidParams {
            task_type: TaskType::new(T::TYPE),
            reason: e.to_string(),
        })?;
        self.handler.handle(task, ctx).await
    }

    fn task_type(&self) -> &str {
        T::TYPE
    }
}
