use tracing::info;

use identity_domain::graph::{
    GraphSummary, IdentityGraph, Role, User, UserClaim, UserLogin, UserRole,
};
use identity_domain::id::{RoleId, UserId};

use crate::domain::repository::{IdentityStore, LegacyIdentitySource};
use crate::error::InitError;

// ── SeedIdentity ─────────────────────────────────────────────────────────────

/// One-time backfill of a freshly created store from the legacy tables.
pub struct SeedIdentityUseCase<'a, L: LegacyIdentitySource, S: IdentityStore> {
    pub source: &'a L,
    pub store: S,
}

impl<L: LegacyIdentitySource, S: IdentityStore> SeedIdentityUseCase<'_, L, S> {
    /// Build the full graph, then persist it. A dangling reference aborts
    /// before anything is written.
    pub async fn execute(&self) -> Result<GraphSummary, InitError> {
        let graph = build_graph(self.source).await?;
        let summary = graph.summary();
        self.store.save(&graph).await?;
        info!(
            users = summary.users,
            roles = summary.roles,
            memberships = summary.memberships,
            claims = summary.claims,
            logins = summary.logins,
            "persisted seeded identity graph"
        );
        Ok(summary)
    }
}

/// Materialize the legacy rows as a linked graph.
///
/// Users and roles are drained completely before any row that references
/// them, so every lookup runs against the full set.
pub async fn build_graph<L: LegacyIdentitySource>(source: &L) -> Result<IdentityGraph, InitError> {
    let mut graph = IdentityGraph::new();

    let users = source.users().await?;
    info!(rows = users.len(), "materializing legacy users");
    for row in users {
        graph.add_user(User::from(row));
    }

    let roles = source.roles().await?;
    info!(rows = roles.len(), "materializing legacy roles");
    for row in roles {
        graph.add_role(Role::from(row));
    }

    let user_roles = source.user_roles().await?;
    info!(rows = user_roles.len(), "linking legacy user roles");
    for row in user_roles {
        graph.attach_membership(UserRole {
            user_id: UserId(row.user_id),
            role_id: RoleId(row.role_id),
        })?;
    }

    let user_claims = source.user_claims().await?;
    info!(rows = user_claims.len(), "linking legacy user claims");
    for row in user_claims {
        graph.attach_claim(UserClaim {
            id: row.id,
            user_id: UserId(row.user_id),
            claim_type: row.claim_type,
            claim_value: row.claim_value,
        })?;
    }

    // Logins are attached to their user and persisted with it, the same way
    // as claims. The legacy initializer resolved the user but dropped the
    // login; that is treated as a defect, not as intended behavior.
    let user_logins = source.user_logins().await?;
    info!(rows = user_logins.len(), "linking legacy user logins");
    for row in user_logins {
        graph.attach_login(UserLogin {
            login_provider: row.login_provider,
            provider_key: row.provider_key,
            user_id: UserId(row.user_id),
        })?;
    }

    Ok(graph)
}
