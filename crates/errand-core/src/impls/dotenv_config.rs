//! `.env` overlay on top of another provider.

use std::path::Path;

use crate::error::ErrandError;
use crate::impls::MapProvider;
use crate::ports::ConfigProvider;

/// Values from a `.env` file, falling back to `inner` for anything the file
/// does not define. File values win.
pub struct DotenvProvider<P> {
    overlay: MapProvider,
    inner: P,
}

impl<P: ConfigProvider> DotenvProvider<P> {
    /// Parse `path` with dotenvy. The file must exist.
    pub fn load(path: &Path, inner: P) -> Result<Self, ErrandError> {
        let to_err = |source: dotenvy::Error| ErrandError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut pairs = Vec::new();
        for item in dotenvy::from_path_iter(path).map_err(to_err)? {
            pairs.push(item.map_err(to_err)?);
        }
        tracing::debug!(path = %path.display(), keys = pairs.len(), "loaded env file");

        Ok(Self {
            overlay: pairs.into_iter().collect(),
            inner,
        })
    }

    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }
}

impl<P: ConfigProvider> ConfigProvider for DotenvProvider<P> {
    fn get(&self, key: &str) -> Option<String> {
        self.overlay.get(key).or_else(|| self.inner.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn overlay_wins_over_inner() {
        let f = env_file("API_KEY=from_file\n# comment\nQUOTED=\"a b\"\n");
        let inner = MapProvider::new()
            .with("API_KEY", "from_inner")
            .with("ONLY_INNER", "x");

        let p = DotenvProvider::load(f.path(), inner).unwrap();
        assert_eq!(p.overlay_len(), 2);
        assert_eq!(p.get("API_KEY").as_deref(), Some("from_file"));
        assert_eq!(p.get("QUOTED").as_deref(), Some("a b"));
        assert_eq!(p.get("ONLY_INNER").as_deref(), Some("x"));
        assert_eq!(p.get("MISSING"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.env");
        let err = DotenvProvider::load(&path, MapProvider::new())
            .err()
            .expect("missing file must fail");
        assert!(matches!(err, ErrandError::EnvFile { .. }));
        assert!(err.to_string().contains("nope.env"));
    }
}
