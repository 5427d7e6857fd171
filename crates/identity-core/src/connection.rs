//! Scoped store connections.

use sea_orm::DatabaseConnection;

/// Close a connection at the end of its scope.
///
/// A failure to close is logged, not returned; the caller keeps the outcome
/// of the work done inside the scope.
pub async fn release(conn: DatabaseConnection) {
    match conn.close().await {
        Ok(()) => tracing::debug!("store connection released"),
        Err(e) => tracing::warn!(error = %e, "failed to release store connection"),
    }
}
