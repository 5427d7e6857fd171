//! Legacy dataset fixtures.
//!
//! Loads JSON datasets from `fixtures/legacy/` at the workspace root.

use std::path::{Path, PathBuf};

use identity_domain::legacy::{LegacyDataset, LegacyUser};

/// Dataset with two users, one role, one membership and one claim.
pub const TWO_USERS: &str = "two_users";

/// Dataset exercising every column, including logins and lockout.
pub const FULL: &str = "full";

pub struct Fixture;

impl Fixture {
    /// Load and parse `fixtures/legacy/<name>.json`.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn dataset(name: &str) -> LegacyDataset {
        let path = workspace_root()
            .join("fixtures/legacy")
            .join(format!("{name}.json"));
        let contents = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", path.display(), e))
    }
}

/// Legacy user row with the given id and name and every other column at its
/// default.
pub fn legacy_user(id: &str, user_name: &str) -> LegacyUser {
    LegacyUser {
        id: id.to_owned(),
        user_name: user_name.to_owned(),
        email: None,
        email_confirmed: false,
        password_hash: None,
        security_stamp: None,
        phone_number: None,
        phone_number_confirmed: false,
        two_factor_enabled: false,
        lockout_end_date_utc: None,
        lockout_enabled: false,
        access_failed_count: 0,
    }
}

fn workspace_root() -> PathBuf {
    // crates/identity-testing -> workspace root
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest.clone())
}
