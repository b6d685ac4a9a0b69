//! File-backed sqlite databases in a temp dir, removed on drop

use hoop_watcher_lib::shared::Database;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestDb {
    dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn url(&self) -> String {
        self.dir
            .path()
            .join("hoop-watcher-test.db")
            .to_string_lossy()
            .into_owned()
    }

    /// A fresh connection pool with migrations applied. Each call opens the
    /// same file, which is how "restart" is simulated.
    pub fn open(&self) -> Arc<Database> {
        let db = Database::new(&self.url()).expect("open test database");
        db.run_migrations().expect("run migrations");
        Arc::new(db)
    }
}
