//! Application layer: wiring (`AppBuilder`) and execution (`Runtime`).

pub mod builder;
pub mod runtime;

pub use self::builder::{App, AppBuilder, BuildError};
pub use self::runtime::Runtime;
