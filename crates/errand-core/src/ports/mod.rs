//! Ports: the seams the runtime talks through.
//!
//! Each trait hides something outside the process (environment, wall
//! clock, randomness) so it can be replaced in tests.

pub mod clock;
pub mod config;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::config::{ConfigProvider, EnvProvider};
pub use self::id_generator::{IdGenerator, UlidGenerator};
