//! Collaborative ranking: user-user cosine over a mean-rating matrix, then
//! harvesting products the target's neighbors rated but the target did not.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::domain::product::ProductId;
use crate::domain::rating::{RatingEvent, UserId};
use crate::domain::recommendation::Recommendation;
use crate::errors::{RecommendError, RecommendResult};
use crate::similarity::SimilarityMatrix;

/// User x product mean-rating matrix with explicit presence.
///
/// A cell exists only if the user actually rated the product; "never rated"
/// is absence, not 0.0, so a genuine zero rating still counts as rated. The
/// dense rows handed to cosine fill absent cells with 0.0, which keeps the
/// similarity numerics identical to the classical fillna(0) construction.
struct RatingMatrix {
    users: Vec<UserId>,
    products: Vec<ProductId>,
    // cells[user_index] maps product_index -> mean rating.
    cells: Vec<HashMap<usize, f64>>,
}

impl RatingMatrix {
    fn build(ratings: &[RatingEvent]) -> Self {
        let mut users: Vec<UserId> = Vec::new();
        let mut user_index: HashMap<UserId, usize> = HashMap::new();
        let mut products: Vec<ProductId> = Vec::new();
        let mut product_index: HashMap<ProductId, usize> = HashMap::new();
        // (sum, count) accumulators so duplicate events average out.
        let mut sums: Vec<HashMap<usize, (f64, usize)>> = Vec::new();

        for event in ratings {
            let u = *user_index.entry(event.user_id.clone()).or_insert_with(|| {
                users.push(event.user_id.clone());
                sums.push(HashMap::new());
                users.len() - 1
            });
            let p = *product_index.entry(event.product_id.clone()).or_insert_with(|| {
                products.push(event.product_id.clone());
                products.len() - 1
            });
            let cell = sums[u].entry(p).or_insert((0.0, 0));
            cell.0 += event.rating;
            cell.1 += 1;
        }

        let cells = sums
            .into_iter()
            .map(|row| row.into_iter().map(|(p, (sum, count))| (p, sum / count as f64)).collect())
            .collect();

        Self { users, products, cells }
    }

    fn user_position(&self, user_id: &UserId) -> Option<usize> {
        self.users.iter().position(|id| id == user_id)
    }

    fn is_rated(&self, user: usize, product: usize) -> bool {
        self.cells[user].contains_key(&product)
    }

    fn dense_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| {
                let mut dense = vec![0.0; self.products.len()];
                for (&product, &rating) in row {
                    dense[product] = rating;
                }
                dense
            })
            .collect()
    }
}

/// Ranks products for `target_user` by what similarly-behaving users rated.
///
/// Neighbors are every other user, ordered descending by cosine similarity
/// (self excluded by index, ties stable by first appearance). Their rated
/// products that the target never rated are gathered in matrix order until
/// `n` unique candidates exist, then joined back to the catalog; candidate
/// ids absent from the catalog are dropped rather than fabricated. No
/// neighbors or no exclusive products is an empty result, not an error.
pub fn by_collaborative(
    ratings: &[RatingEvent],
    catalog: &Catalog,
    target_user: &UserId,
    n: usize,
) -> RecommendResult<Vec<Recommendation>> {
    if ratings.is_empty() {
        return Err(RecommendError::EmptyRatings);
    }

    let matrix = RatingMatrix::build(ratings);
    let target = matrix
        .user_position(target_user)
        .ok_or_else(|| RecommendError::UserNotFound { user_id: target_user.clone() })?;

    let similarity = SimilarityMatrix::from_rows(&matrix.dense_rows());

    let mut neighbors: Vec<(usize, f64)> = (0..matrix.users.len())
        .filter(|&user| user != target)
        .map(|user| (user, similarity.score(target, user)))
        .collect();
    neighbors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut candidates: Vec<(ProductId, f64)> = Vec::new();
    'users: for (neighbor, score) in neighbors {
        for product in 0..matrix.products.len() {
            if !matrix.is_rated(neighbor, product) || matrix.is_rated(target, product) {
                continue;
            }
            let product_id = &matrix.products[product];
            if candidates.iter().any(|(id, _)| id == product_id) {
                continue;
            }
            candidates.push((product_id.clone(), score));
            if candidates.len() >= n {
                break 'users;
            }
        }
    }

    Ok(candidates
        .into_iter()
        .filter_map(|(product_id, score)| {
            catalog.find(&product_id).map(|product| Recommendation::from_product(product, score))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Product, Season};

    fn event(user: &str, product: &str, rating: f64) -> RatingEvent {
        RatingEvent {
            user_id: UserId(user.to_owned()),
            product_id: ProductId(product.to_owned()),
            rating,
        }
    }

    fn catalog_with(ids: &[&str]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|id| Product {
                    id: ProductId((*id).to_owned()),
                    name: format!("product {id}"),
                    brand: "brand".to_owned(),
                    category: "category".to_owned(),
                    tags: String::new(),
                    rating: 4.0,
                    reviews_count: 1,
                    image_url: "img".to_owned(),
                    season: Season::AllSeasons,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_ratings_is_an_error() {
        let result = by_collaborative(&[], &catalog_with(&[]), &UserId("u1".to_owned()), 5);
        assert_eq!(result, Err(RecommendError::EmptyRatings));
    }

    #[test]
    fn unknown_user_is_an_error() {
        let ratings = vec![event("u1", "p1", 4.0)];
        let result =
            by_collaborative(&ratings, &catalog_with(&["p1"]), &UserId("ghost".to_owned()), 5);
        assert_eq!(result, Err(RecommendError::UserNotFound { user_id: UserId("ghost".into()) }));
    }

    #[test]
    fn recommends_neighbor_exclusive_products() {
        // u1 and u2 agree on p1/p2; u2 also rated p3, which u1 never saw.
        let ratings = vec![
            event("u1", "p1", 5.0),
            event("u1", "p2", 4.0),
            event("u2", "p1", 5.0),
            event("u2", "p2", 4.0),
            event("u2", "p3", 3.0),
        ];
        let ranked =
            by_collaborative(&ratings, &catalog_with(&["p1", "p2", "p3"]), &UserId("u1".into()), 5)
                .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].product_id, ProductId("p3".to_owned()));
        assert!(ranked[0].score > 0.9);
    }

    #[test]
    fn never_returns_products_the_target_rated() {
        let ratings = vec![
            event("u1", "p1", 0.0),
            event("u1", "p2", 4.0),
            event("u2", "p1", 5.0),
            event("u2", "p2", 4.0),
            event("u2", "p3", 3.0),
        ];
        let ranked =
            by_collaborative(&ratings, &catalog_with(&["p1", "p2", "p3"]), &UserId("u1".into()), 5)
                .unwrap();

        // p1 was rated 0.0 by the target: explicitly rated, so not a
        // candidate even though the dense cell is numerically zero.
        assert!(ranked.iter().all(|rec| rec.product_id != ProductId("p1".to_owned())));
        assert!(ranked.iter().all(|rec| rec.product_id != ProductId("p2".to_owned())));
    }

    #[test]
    fn duplicate_events_average_before_similarity() {
        let ratings = vec![
            event("u1", "p1", 2.0),
            event("u1", "p1", 4.0),
            event("u2", "p1", 3.0),
            event("u2", "p2", 5.0),
        ];
        let matrix = RatingMatrix::build(&ratings);
        let rows = matrix.dense_rows();
        assert_eq!(rows[0][0], 3.0);
    }

    #[test]
    fn sole_user_yields_empty_result() {
        let ratings = vec![event("u1", "p1", 4.0)];
        let ranked =
            by_collaborative(&ratings, &catalog_with(&["p1"]), &UserId("u1".into()), 5).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn candidates_missing_from_catalog_are_dropped() {
        let ratings = vec![event("u1", "p1", 4.0), event("u2", "p1", 4.0), event("u2", "px", 5.0)];
        let ranked =
            by_collaborative(&ratings, &catalog_with(&["p1"]), &UserId("u1".into()), 5).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn caps_candidates_at_n() {
        let mut ratings = vec![event("u1", "p0", 4.0), event("u2", "p0", 4.0)];
        for i in 1..10 {
            ratings.push(event("u2", &format!("p{i}"), 4.0));
        }
        let ids: Vec<String> = (0..10).map(|i| format!("p{i}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let ranked =
            by_collaborative(&ratings, &catalog_with(&id_refs), &UserId("u1".into()), 3).unwrap();
        assert_eq!(ranked.len(), 3);
    }
}
