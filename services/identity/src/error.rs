use identity_domain::graph::DanglingReference;
use identity_migration::SchemaError;

/// Errors that abort an initialization run. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("invalid identity table definitions: {0}")]
    Schema(#[from] SchemaError),
    #[error("{0}")]
    DanglingReference(#[from] DanglingReference),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl InitError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => "SCHEMA_DEFINITION",
            Self::DanglingReference(_) => "DANGLING_REFERENCE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}
