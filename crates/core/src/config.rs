//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core
//! services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in
//! multi-threaded runtimes and test harnesses.

use crate::{StockError, StockResult};
use std::path::{Path, PathBuf};

/// Default fixture directory name searched for relative to the working
/// directory and the manifest ancestors.
pub const FIXTURE_DIR: &str = "fixtures";

const HOSPITALS_FILE: &str = "hospitals.json";
const TAGS_FILE: &str = "tags.json";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at `data_dir`.
    ///
    /// The directory does not need to exist: a missing directory degrades to
    /// empty collections at load time, matching the view's "absent data is an
    /// empty list" posture.
    pub fn new(data_dir: PathBuf) -> StockResult<Self> {
        if data_dir.as_os_str().is_empty() {
            return Err(StockError::InvalidInput("data_dir cannot be empty".into()));
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn hospitals_file(&self) -> PathBuf {
        self.data_dir.join(HOSPITALS_FILE)
    }

    pub fn tags_file(&self) -> PathBuf {
        self.data_dir.join(TAGS_FILE)
    }
}

/// Resolve the fixture data directory without reading environment variables.
///
/// If `override_dir` is provided it is used as-is. Otherwise this searches for
/// `fixtures/` relative to the current working directory and then walks up
/// from `CARGO_MANIFEST_DIR`, falling back to the bare `fixtures/` path when
/// nothing is found.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(data_dir) = override_dir {
        return data_dir;
    }

    let cwd_relative = PathBuf::from(FIXTURE_DIR);
    if cwd_relative.is_dir() {
        return cwd_relative;
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(FIXTURE_DIR);
        if candidate.is_dir() {
            return candidate;
        }
    }

    cwd_relative
}
