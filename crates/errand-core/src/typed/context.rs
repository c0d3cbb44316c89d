use std::sync::Arc;

use crate::domain::RunId;
use crate::ports::ConfigProvider;

/// Per-invocation context handed to a handler.
#[derive(Clone)]
pub struct TaskContext {
    run_id: RunId,
    config: Arc<dyn ConfigProvider>,
}

impl TaskContext {
    pub fn new(run_id: RunId, config: Arc<dyn ConfigProvider>) -> Self {
        Self { run_id, config }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }
}
