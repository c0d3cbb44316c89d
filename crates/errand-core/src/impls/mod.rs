//! Concrete implementations of the ports.

pub mod dotenv_config;
pub mod map_config;

pub use self::dotenv_config::DotenvProvider;
pub use self::map_config::MapProvider;
