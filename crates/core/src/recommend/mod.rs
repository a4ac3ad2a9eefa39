//! Seasonal hybrid recommendation engine.
//!
//! Blends three independent signals over in-memory snapshots: aggregate
//! rating, tag-text similarity, and rating-behavior similarity, narrowed to
//! the current calendar season. Every operation recomputes similarity from
//! the supplied snapshots; nothing is cached or retained between calls.

mod collaborative;
mod content;
mod hybrid;
mod rated;
mod seasonal;

pub use collaborative::by_collaborative;
pub use content::by_content;
pub use hybrid::{hybrid, BlendPolicy, BlendPolicyParseError};
pub use rated::top_rated;
pub use seasonal::narrow_to_season;

use crate::catalog::Catalog;
use crate::domain::product::Season;
use crate::domain::rating::{RatingEvent, UserId};
use crate::domain::recommendation::{RatedSummary, Recommendation};
use crate::errors::RecommendResult;

/// Default result size across all operations.
pub const DEFAULT_TOP_N: usize = 10;

/// How many times `n` each sub-engine gathers for the hybrid path, so that
/// deduplication and seasonal narrowing still leave enough candidates.
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;

/// Stateless facade over the four recommendation operations. Holds only
/// policy knobs; concurrent calls share no mutable state.
#[derive(Clone, Copy, Debug)]
pub struct Recommender {
    pub top_n: usize,
    pub blend: BlendPolicy,
    pub candidate_multiplier: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            blend: BlendPolicy::default(),
            candidate_multiplier: DEFAULT_CANDIDATE_MULTIPLIER,
        }
    }
}

impl Recommender {
    pub fn top_rated(&self, catalog: &Catalog) -> Vec<RatedSummary> {
        top_rated(catalog, self.top_n)
    }

    pub fn by_content(
        &self,
        catalog: &Catalog,
        seed_name: &str,
    ) -> RecommendResult<Vec<Recommendation>> {
        by_content(catalog, seed_name, self.top_n)
    }

    pub fn by_collaborative(
        &self,
        ratings: &[RatingEvent],
        catalog: &Catalog,
        target_user: &UserId,
    ) -> RecommendResult<Vec<Recommendation>> {
        by_collaborative(ratings, catalog, target_user, self.top_n)
    }

    pub fn hybrid(
        &self,
        catalog: &Catalog,
        ratings: &[RatingEvent],
        target_user: &UserId,
        seed_name: &str,
        season: Season,
    ) -> RecommendResult<Vec<Recommendation>> {
        hybrid(HybridRequest {
            catalog,
            ratings,
            target_user,
            seed_name,
            season,
            top_n: self.top_n,
            blend: self.blend,
            candidate_multiplier: self.candidate_multiplier,
        })
    }
}

/// Inputs for one hybrid scoring call.
#[derive(Clone, Copy, Debug)]
pub struct HybridRequest<'a> {
    pub catalog: &'a Catalog,
    pub ratings: &'a [RatingEvent],
    pub target_user: &'a UserId,
    pub seed_name: &'a str,
    pub season: Season,
    pub top_n: usize,
    pub blend: BlendPolicy,
    pub candidate_multiplier: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Product, ProductId};

    fn product(id: &str, name: &str, tags: &str, season: Season) -> Product {
        Product {
            id: ProductId(id.to_owned()),
            name: name.to_owned(),
            brand: "brand".to_owned(),
            category: "category".to_owned(),
            tags: tags.to_owned(),
            rating: 4.0,
            reviews_count: 1,
            image_url: "img".to_owned(),
            season,
        }
    }

    #[test]
    fn facade_applies_configured_top_n() {
        let catalog = Catalog::new(vec![
            product("1", "seed", "red shoe", Season::Summer),
            product("2", "a", "red boot", Season::Summer),
            product("3", "b", "red sandal", Season::Summer),
            product("4", "c", "red heel", Season::Summer),
        ]);
        let recommender = Recommender { top_n: 2, ..Recommender::default() };

        assert_eq!(recommender.top_rated(&catalog).len(), 2);
        assert_eq!(recommender.by_content(&catalog, "seed").unwrap().len(), 2);
    }

    #[test]
    fn facade_hybrid_blends_both_sources() {
        let catalog = Catalog::new(vec![
            product("1", "seed", "red shoe", Season::Summer),
            product("2", "a", "red boot", Season::Summer),
            product("3", "b", "plain socks", Season::Summer),
        ]);
        let ratings = vec![
            RatingEvent {
                user_id: UserId("u1".to_owned()),
                product_id: ProductId("1".to_owned()),
                rating: 5.0,
            },
            RatingEvent {
                user_id: UserId("u2".to_owned()),
                product_id: ProductId("1".to_owned()),
                rating: 5.0,
            },
            RatingEvent {
                user_id: UserId("u2".to_owned()),
                product_id: ProductId("3".to_owned()),
                rating: 4.0,
            },
        ];

        let ranked = Recommender::default()
            .hybrid(&catalog, &ratings, &UserId("u1".to_owned()), "seed", Season::Summer)
            .unwrap();

        let ids: Vec<&str> = ranked.iter().map(|rec| rec.product_id.0.as_str()).collect();
        assert!(ids.contains(&"2"));
        assert!(ids.contains(&"3"));
        assert!(!ids.contains(&"1"));
    }
}
