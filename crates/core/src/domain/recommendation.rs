use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId, Season};

/// Output row of the rating aggregator: one product identity with its mean
/// rating across the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatedSummary {
    pub name: String,
    pub rating: f64,
    pub reviews_count: u64,
    pub brand: String,
    pub image_url: String,
}

/// One ranked candidate. Lists of these carry unique product ids, highest
/// relevance first, and only reference products present in the supplied
/// catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub reviews_count: u64,
    pub image_url: String,
    pub rating: f64,
    pub season: Season,
    /// Relevance score from the producing engine: cosine similarity of tag
    /// vectors for the content path, contributing-neighbor similarity for
    /// the collaborative path.
    pub score: f64,
}

impl Recommendation {
    pub fn from_product(product: &Product, score: f64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            reviews_count: product.reviews_count,
            image_url: product.image_url.clone(),
            rating: product.rating,
            season: product.season,
            score,
        }
    }
}
