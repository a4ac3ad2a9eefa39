pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;
pub mod similarity;
pub mod text;

pub use catalog::Catalog;
pub use domain::product::{Product, ProductId, Season, SeasonParseError};
pub use domain::rating::{RatingEvent, UserId};
pub use domain::recommendation::{RatedSummary, Recommendation};
pub use errors::{RecommendError, RecommendResult};
pub use recommend::{
    by_collaborative, by_content, hybrid, narrow_to_season, top_rated, BlendPolicy,
    HybridRequest, Recommender, DEFAULT_CANDIDATE_MULTIPLIER, DEFAULT_TOP_N,
};
pub use similarity::{cosine, SimilarityMatrix};
pub use text::TfIdfVectorizer;
