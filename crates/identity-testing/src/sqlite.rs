//! Throwaway SQLite database files.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A SQLite database file under the system temp dir, removed on drop.
///
/// The file is not created here; the first connection with `mode=rwc`
/// creates it, which lets tests observe a database being created.
pub struct TempSqlite {
    path: PathBuf,
}

impl TempSqlite {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("identity-{}.sqlite", Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Connection URL without an open mode.
    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    /// Connection URL that creates the file when missing.
    pub fn url_create(&self) -> String {
        format!("{}?mode=rwc", self.url())
    }
}

impl Default for TempSqlite {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempSqlite {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
