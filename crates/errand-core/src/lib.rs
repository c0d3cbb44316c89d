//! errand-core
//!
//! A small task host: register handlers under a task name, then invoke one
//! task per call with JSON parameters.
//!
//! - **domain**: task names, run ids, outcomes, run reports
//! - **ports**: configuration, clock and id generation seams
//! - **impls**: in-memory and `.env` configuration providers
//! - **typed**: `Task`, `Handler<T>`, `TypedRegistry`
//! - **app**: `AppBuilder` and `Runtime`
//! - **tasks**: the bundled tasks

pub mod app;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod tasks;
pub mod typed;

pub use error::ErrandError;
