use radio_favorites::{FavoriteListStore, FavoriteStation, MemoryPrefs};
use serde_json::json;
use tempfile::TempDir;

/// Route `tracing` output through the test harness. Set `RUST_LOG=debug`
/// to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh store in a temp dir. Keep the `TempDir` alive for the test.
pub fn memory_store() -> (TempDir, FavoriteListStore<MemoryPrefs>) {
    init_tracing();
    let tmp = TempDir::new().expect("temp dir");
    let store = FavoriteListStore::open(tmp.path().join("favorites"), MemoryPrefs::new())
        .expect("store should open");
    (tmp, store)
}

pub fn sample_stations(n: usize) -> Vec<FavoriteStation> {
    (0..n)
        .map(|i| {
            let mut s = FavoriteStation::new(87_500 + 100 * i as u32, format!("Station {i}"));
            if i % 2 == 0 {
                s.fields_mut().insert("rds".to_string(), json!(format!("RDS{i}")));
            }
            s
        })
        .collect()
}
