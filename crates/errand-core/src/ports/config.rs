//! ConfigProvider port - key/value configuration lookup
//!
//! Tasks read configuration through this trait instead of `std::env`, so
//! tests can swap in a `MapProvider` without touching process state.

use std::sync::Arc;

/// Narrow read-only configuration capability.
pub trait ConfigProvider: Send + Sync {
    /// `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads the process environment.
///
/// A set value that is not valid unicode is decoded lossily, never hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}
