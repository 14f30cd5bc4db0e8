#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Ill-typed or out-of-contract input at a collaborator boundary
    /// (e.g. a threshold override with no bounds, or a non-finite bound).
    #[error("Validation failed: {0}")]
    Validation(String),
}
