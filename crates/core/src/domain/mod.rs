pub mod product;
pub mod rating;
pub mod recommendation;

pub use product::{Product, ProductId, Season, SeasonParseError};
pub use rating::{RatingEvent, UserId};
pub use recommendation::{RatedSummary, Recommendation};
