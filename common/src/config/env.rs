//! Environment sources.
//!
//! Connection settings are read through [`EnvSource`] rather than
//! `std::env` directly, so callers can resolve against the real process
//! environment, a `.env` snapshot, an in-memory map, or a layering of these.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

/// Read-only mapping from variable name to optional value.
pub trait EnvSource: Send + Sync {
    /// Returns the raw value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, treating an empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// The current process environment.
///
/// Values that are not valid UTF-8 are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher + Send + Sync> EnvSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Snapshot of a `.env` file, parsed without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    path: PathBuf,
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Parses the file at `path`.
    ///
    /// # Errors
    /// Returns `AppError::Io` if the file cannot be opened and
    /// `AppError::Config` if a line cannot be parsed.
    pub fn read(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        tracing::debug!(path = %path.display(), count = vars.len(), "Parsed .env file");
        Ok(Self {
            path: path.to_path_buf(),
            vars,
        })
    }

    /// Path the snapshot was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the file defined no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for DotenvFile {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Two sources consulted in order.
///
/// An empty value in `primary` does not shadow `fallback`.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: EnvSource, B: EnvSource> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        match self.primary.get(key) {
            Some(v) if !v.is_empty() => Some(v),
            primary => self.fallback.get(key).or(primary),
        }
    }
}

/// Loads the nearest `.env` file into the process environment.
///
/// Variables already set in the environment are left untouched. A missing
/// file is not an error; any other failure is logged and ignored.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load .env file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_non_empty_filters_empty() {
        let env = map(&[("A", ""), ("B", "x")]);
        assert_eq!(env.get_non_empty("A"), None);
        assert_eq!(env.get_non_empty("B"), Some("x".to_string()));
        assert_eq!(env.get_non_empty("C"), None);
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let env = map(&[("A", " ")]);
        assert_eq!(env.get_non_empty("A"), Some(" ".to_string()));
    }

    #[test]
    fn test_btreemap_source() {
        let env: BTreeMap<String, String> =
            [("K".to_string(), "v".to_string())].into_iter().collect();
        assert_eq!(EnvSource::get(&env, "K"), Some("v".to_string()));
    }

    #[test]
    fn test_layered_primary_wins() {
        let env = Layered::new(map(&[("A", "1")]), map(&[("A", "2"), ("B", "3")]));
        assert_eq!(env.get("A"), Some("1".to_string()));
        assert_eq!(env.get("B"), Some("3".to_string()));
        assert_eq!(env.get("C"), None);
    }

    #[test]
    fn test_layered_empty_primary_falls_through() {
        let env = Layered::new(map(&[("A", "")]), map(&[("A", "2")]));
        assert_eq!(env.get("A"), Some("2".to_string()));

        let env = Layered::new(map(&[("A", "")]), map(&[]));
        assert_eq!(env.get("A"), Some(String::new()));
        assert_eq!(env.get_non_empty("A"), None);
    }

    #[test]
    fn test_dotenv_file_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "DOTENV_SNAPSHOT_HOST=db.internal").unwrap();
        writeln!(file, "DOTENV_SNAPSHOT_PORT=27020").unwrap();
        file.flush().unwrap();

        let env = DotenvFile::read(file.path()).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env.path(), file.path());
        assert_eq!(env.get("DOTENV_SNAPSHOT_HOST"), Some("db.internal".to_string()));
        assert_eq!(env.get("DOTENV_SNAPSHOT_PORT"), Some("27020".to_string()));
        // Reading a snapshot never exports into the process environment.
        assert!(std::env::var("DOTENV_SNAPSHOT_HOST").is_err());
    }

    #[test]
    fn test_dotenv_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DotenvFile::read(dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, crate::errors::AppError::Io(_)));
    }
}
