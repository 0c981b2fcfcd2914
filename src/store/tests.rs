//! State Layer Tests
//!
//! Validates the record store mechanics and the on-disk bundle store.
//!
//! ## Test Scopes
//! - **ScenarioStore**: Uniqueness-constrained insert, ordered/filtered reads,
//!   compensation removal.
//! - **BundleStore**: Directory auto-creation, byte-for-byte round-trips,
//!   idempotent removal.
//! - **Bootstrap**: Idempotent startup migration.

#[cfg(test)]
mod tests {
    use crate::scenario::types::ScenarioRecord;
    use crate::store::bootstrap;
    use crate::store::files::{BundleStore, INFO_FILE_NAME, SCRIPT_FILE_NAME};
    use crate::store::records::{ScenarioStore, StoreError};
    use chrono::{TimeZone, Utc};

    fn record(name: &str, created_secs: u32) -> ScenarioRecord {
        ScenarioRecord {
            name: name.to_string(),
            author: "Author".to_string(),
            time: 1.5,
            uuid: uuid::Uuid::new_v4().to_string(),
            created: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, created_secs)
                .unwrap(),
            created_by: "steve".to_string(),
        }
    }

    // ============================================================
    // SCENARIO STORE - INSERT
    // ============================================================

    #[test]
    fn test_insert_and_find_by_name() {
        let store = ScenarioStore::new();
        let alpha = record("Alpha", 0);

        store.insert(alpha.clone()).unwrap();

        let found = store.find_by_name("Alpha");
        assert_eq!(found, Some(alpha));
    }

    #[test]
    fn test_insert_duplicate_name_is_rejected() {
        let store = ScenarioStore::new();
        store.insert(record("Alpha", 0)).unwrap();

        let result = store.insert(record("Alpha", 1));

        assert!(matches!(result, Err(StoreError::DuplicateName(name)) if name == "Alpha"));
        assert_eq!(store.len(), 1, "Rejected insert must not grow the store");
    }

    #[test]
    fn test_duplicate_check_is_exact_match() {
        // Uniqueness follows the store key exactly; "alpha" and "Alpha" are
        // different names even though search matches both.
        let store = ScenarioStore::new();
        store.insert(record("Alpha", 0)).unwrap();

        assert!(store.insert(record("alpha", 1)).is_ok());
        assert_eq!(store.len(), 2);
    }

    // ============================================================
    // SCENARIO STORE - READS
    // ============================================================

    #[test]
    fn test_find_recent_orders_newest_first() {
        let store = ScenarioStore::new();
        store.insert(record("Oldest", 0)).unwrap();
        store.insert(record("Newest", 2)).unwrap();
        store.insert(record("Middle", 1)).unwrap();

        let names: Vec<String> = store
            .find_recent(50)
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_find_recent_respects_limit() {
        let store = ScenarioStore::new();
        for i in 0..60 {
            store.insert(record(&format!("Scenario {:02}", i), i)).unwrap();
        }

        let results = store.find_recent(50);

        assert_eq!(results.len(), 50);
        assert_eq!(
            results[0].name, "Scenario 59",
            "The newest record should come first"
        );
    }

    #[test]
    fn test_find_name_contains_is_case_insensitive() {
        let store = ScenarioStore::new();
        store.insert(record("Alpha Strike", 0)).unwrap();
        store.insert(record("beta run", 1)).unwrap();
        store.insert(record("ALPHABET", 2)).unwrap();

        let names: Vec<String> = store
            .find_name_contains("alpha", 50)
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["ALPHABET", "Alpha Strike"]);
    }

    #[test]
    fn test_find_name_contains_no_match() {
        let store = ScenarioStore::new();
        store.insert(record("Alpha", 0)).unwrap();

        assert!(store.find_name_contains("omega", 50).is_empty());
    }

    // ============================================================
    // SCENARIO STORE - COMPENSATION
    // ============================================================

    #[test]
    fn test_remove_by_uuid() {
        let store = ScenarioStore::new();
        let alpha = record("Alpha", 0);
        let uuid = alpha.uuid.clone();
        store.insert(alpha).unwrap();

        let removed = store.remove_by_uuid(&uuid);

        assert!(removed.is_some());
        assert!(store.is_empty());
        assert!(store.find_by_name("Alpha").is_none());
    }

    #[test]
    fn test_remove_by_unknown_uuid_is_noop() {
        let store = ScenarioStore::new();
        store.insert(record("Alpha", 0)).unwrap();

        assert!(store.remove_by_uuid("no-such-uuid").is_none());
        assert_eq!(store.len(), 1);
    }

    // ============================================================
    // BUNDLE STORE
    // ============================================================

    #[tokio::test]
    async fn test_write_bundle_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let bundles = BundleStore::new(dir.path());

        let info = b"name = \"Alpha\"\nauthor = \"A\"\ntime = 1.5\n";
        let script = b"print('hello')\n\xff\x00binary tail";

        let stored = bundles.write_bundle("abc-123", info, script).await.unwrap();

        assert_eq!(stored.info_path, "/scenarios/abc-123/info.toml");
        assert_eq!(stored.script_path, "/scenarios/abc-123/script.lua");

        // Read back: bytes must be identical to the upload, including the
        // non-UTF-8 tail of the script.
        let bundle_dir = bundles.bundle_dir("abc-123");
        let info_back = tokio::fs::read(bundle_dir.join(INFO_FILE_NAME)).await.unwrap();
        let script_back = tokio::fs::read(bundle_dir.join(SCRIPT_FILE_NAME)).await.unwrap();
        assert_eq!(info_back, info);
        assert_eq!(script_back, script);
    }

    #[tokio::test]
    async fn test_write_bundle_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        // No scenarios/ directory exists yet under the fresh tempdir.
        let bundles = BundleStore::new(dir.path());

        bundles.write_bundle("fresh-id", b"a", b"b").await.unwrap();

        assert!(bundles.bundle_dir("fresh-id").is_dir());
    }

    #[tokio::test]
    async fn test_remove_bundle_deletes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let bundles = BundleStore::new(dir.path());
        bundles.write_bundle("gone-soon", b"a", b"b").await.unwrap();

        bundles.remove_bundle("gone-soon").await.unwrap();

        assert!(!bundles.bundle_dir("gone-soon").exists());
    }

    #[tokio::test]
    async fn test_remove_missing_bundle_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let bundles = BundleStore::new(dir.path());

        assert!(bundles.remove_bundle("never-written").await.is_ok());
    }

    // ============================================================
    // BOOTSTRAP
    // ============================================================

    #[test]
    fn test_bootstrap_creates_layout() {
        let dir = tempfile::tempdir().unwrap();

        let scenarios_dir = bootstrap(dir.path()).unwrap();

        assert!(scenarios_dir.is_dir());
        assert_eq!(scenarios_dir, dir.path().join("scenarios"));
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        let first = bootstrap(dir.path()).unwrap();
        // Drop a file in, then bootstrap again: nothing may be disturbed.
        std::fs::write(first.join("marker"), b"keep me").unwrap();
        let second = bootstrap(dir.path()).unwrap();

        assert_eq!(first, second);
        let marker = std::fs::read(second.join("marker")).unwrap();
        assert_eq!(marker, b"keep me");
    }
}
