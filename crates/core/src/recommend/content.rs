//! Content-based ranking: TF-IDF over product tags, cosine against a seed.

use crate::catalog::Catalog;
use crate::domain::recommendation::Recommendation;
use crate::errors::{RecommendError, RecommendResult};
use crate::similarity::cosine;
use crate::text::TfIdfVectorizer;

/// Ranks catalog products by tag similarity to the seed product.
///
/// The seed is located by exact display name; all rows sharing that name are
/// excluded from the output, so the result never recommends the seed back.
/// Ties are broken by catalog row order (stable sort). A single-product
/// catalog yields an empty list.
pub fn by_content(
    catalog: &Catalog,
    seed_name: &str,
    n: usize,
) -> RecommendResult<Vec<Recommendation>> {
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }
    let seed_index = catalog
        .position_by_name(seed_name)
        .ok_or_else(|| RecommendError::SeedNotFound { name: seed_name.to_owned() })?;

    let documents: Vec<&str> =
        catalog.products().iter().map(|product| product.tags.as_str()).collect();
    let (_, vectors) = TfIdfVectorizer::fit_transform(&documents);
    let seed_vector = &vectors[seed_index];

    let mut ranked: Vec<(usize, f64)> = vectors
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            // Position alone is not enough: duplicate listings of the seed
            // would otherwise dominate the ranking at similarity 1.
            *index != seed_index && catalog.products()[*index].name != seed_name
        })
        .map(|(index, vector)| (index, cosine(seed_vector, vector)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);

    Ok(ranked
        .into_iter()
        .map(|(index, score)| Recommendation::from_product(&catalog.products()[index], score))
        .collect())
}
