use std::sync::Arc;

use tracing::Instrument;

use crate::domain::{RunReport, TaskType};
use crate::error::ErrandError;
use crate::ports::{Clock, ConfigProvider, IdGenerator, SystemClock, UlidGenerator};
use crate::typed::{TaskContext, TypedRegistry};

/// Runs one task per call by dispatching to the registered handler.
pub struct Runtime {
    registry: Arc<TypedRegistry>,
    config: Arc<dyn ConfigProvider>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Runtime {
    pub fn new(registry: Arc<TypedRegistry>, config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            registry,
            config,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UlidGenerator::new(SystemClock)),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn registry(&self) -> &TypedRegistry {
        &self.registry
    }

    /// Invoke `task_type` with `params` (a JSON object of task parameters).
    pub async fn run(
        &self,
        task_type: &str,
        params: serde_json::Value,
    ) -> Result<RunReport, ErrandError> {
        let task_type = TaskType::new(task_type);
        let handler = self
            .registry
            .get(task_type.as_str())
            .ok_or_else(|| ErrandError::HandlerNotFound(task_type.clone()))?;

        let run_id = self.ids.generate_run_id();
        let ctx = TaskContext::new(run_id, Arc::clone(&self.config));
        let span = tracing::info_span!("run", run_id = %run_id, task_type = %task_type);

        async move {
            let started_at = self.clock.now();
            tracing::debug!("task started");

            let outcome = match handler.handle_dyn(params, &ctx).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::debug!(error = %e, "task failed");
                    return Err(e);
                }
            };

            let finished_at = self.clock.now();
            let report = RunReport {
                run_id,
                task_type,
                started_at,
                finished_at,
                outcome,
            };
            if report.outcome.is_success() {
                tracing::info!(elapsed_ms = report.elapsed().num_milliseconds(), "task finished");
            } else {
                tracing::debug!(reason = ?report.outcome.reason, "task reported failure");
            }
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
