//! Fixture-backed inventory data owner.

use std::fs;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{StockError, StockResult};
use crate::hospital::Hospital;
use crate::tag::Tag;

/// Owns the canonical hospital and tag collections, loaded from a JSON
/// fixture directory.
///
/// Two postures are offered:
/// - `load_*` propagates read/parse errors, for callers that want to fail
///   loudly (the CLI).
/// - `list_*` degrades to empty collections with a logged warning, matching
///   the view's "absent data is an empty list" contract (the REST server).
#[derive(Clone, Debug)]
pub struct InventoryService {
    config: CoreConfig,
}

impl InventoryService {
    pub fn new(config: CoreConfig) -> Self {
        Self { config }
    }

    /// Load the hospital collection, propagating failures.
    pub fn load_hospitals(&self) -> StockResult<Vec<Hospital>> {
        load_records(&self.config.hospitals_file())
    }

    /// Load the tag collection, propagating failures.
    pub fn load_tags(&self) -> StockResult<Vec<Tag>> {
        load_records(&self.config.tags_file())
    }

    /// The hospital collection, or empty when the fixture is missing or
    /// unreadable.
    pub fn list_hospitals(&self) -> Vec<Hospital> {
        list_records(&self.config.hospitals_file())
    }

    /// The tag collection, or empty when the fixture is missing or
    /// unreadable.
    pub fn list_tags(&self) -> Vec<Tag> {
        list_records(&self.config.tags_file())
    }
}

fn load_records<T: serde::de::DeserializeOwned>(path: &Path) -> StockResult<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(StockError::FixtureRead)?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(StockError::FixtureParse)?;

    // Per-record tolerance: a single malformed entry is skipped with a
    // warning rather than poisoning the whole collection.
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("skipping malformed record in {}: {}", path.display(), e);
            }
        }
    }

    Ok(records)
}

fn list_records<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    match load_records(path) {
        Ok(records) => records,
        Err(StockError::FixtureRead(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("fixture not present: {}", path.display());
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("failed to load {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use stockboard_types::{HospitalId, TagId};

    fn service_for(dir: &Path) -> InventoryService {
        let config = CoreConfig::new(dir.to_path_buf()).expect("valid config");
        InventoryService::new(config)
    }

    fn write_fixture(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
    }

    #[test]
    fn loads_well_formed_fixtures() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(
            dir.path(),
            "tags.json",
            r#"[{ "id": 1, "description": "urgent" }, { "id": 2, "description": "rural" }]"#,
        );
        write_fixture(
            dir.path(),
            "hospitals.json",
            r#"[{ "id": 1, "name": "General", "tags": [{ "id": 1, "description": "urgent" }] }]"#,
        );

        let service = service_for(dir.path());
        let tags = service.load_tags().expect("load tags");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].id, TagId(1));

        let hospitals = service.load_hospitals().expect("load hospitals");
        assert_eq!(hospitals.len(), 1);
        assert_eq!(hospitals[0].id, HospitalId(1));
    }

    #[test]
    fn skips_malformed_records_with_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(
            dir.path(),
            "tags.json",
            r#"[{ "id": 1, "description": "urgent" }, { "id": "not-a-number" }]"#,
        );

        let service = service_for(dir.path());
        let tags = service.load_tags().expect("load tags");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn load_propagates_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_for(dir.path());
        assert!(matches!(
            service.load_hospitals(),
            Err(StockError::FixtureRead(_))
        ));
    }

    #[test]
    fn list_degrades_to_empty_on_missing_file() {
        let service = service_for(&PathBuf::from("/definitely/not/here"));
        assert!(service.list_hospitals().is_empty());
        assert!(service.list_tags().is_empty());
    }

    #[test]
    fn list_degrades_to_empty_on_unparseable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path(), "hospitals.json", "not json at all");

        let service = service_for(dir.path());
        assert!(service.list_hospitals().is_empty());
    }
}
