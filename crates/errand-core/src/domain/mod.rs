//! Domain model: task names, run ids, outcomes and run reports.

pub mod ids;
pub mod outcome;
pub mod run;
pub mod task_type;

pub use ids::{Id, IdMarker, RunId};
pub use outcome::{Artifact, Outcome, OutcomeKind};
pub use run::RunReport;
pub use task_type::TaskType;
