use thiserror::Error;

use crate::domain::rating::UserId;

/// Per-call failures of the recommendation engine. All variants are
/// caller-correctable; nothing here is retried or swallowed internally.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("seed item `{name}` was not found in the catalog")]
    SeedNotFound { name: String },
    #[error("target user `{user_id}` has no ratings in the supplied table")]
    UserNotFound { user_id: UserId },
    #[error("catalog snapshot is empty but the operation requires a seed lookup")]
    EmptyCatalog,
    #[error("ratings snapshot is empty but the operation requires a user lookup")]
    EmptyRatings,
}

/// Result type for recommendation operations.
pub type RecommendResult<T> = Result<T, RecommendError>;
