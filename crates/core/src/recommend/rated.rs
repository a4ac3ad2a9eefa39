//! Rating aggregation: mean rating per observed product identity.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::domain::recommendation::RatedSummary;

/// Identity key as observed in raw catalog data: the same listing can appear
/// under several rows, so grouping uses the display fields rather than the
/// row id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct IdentityKey {
    name: String,
    reviews_count: u64,
    brand: String,
    image_url: String,
}

struct Group {
    sum: f64,
    count: usize,
}

/// Mean rating per product identity, sorted descending, truncated to `n`.
///
/// Groups form in first-occurrence order and the sort is stable, so rating
/// ties keep the original row order. An empty catalog yields an empty list;
/// this path never fails.
pub fn top_rated(catalog: &Catalog, n: usize) -> Vec<RatedSummary> {
    let mut order: Vec<IdentityKey> = Vec::new();
    let mut groups: HashMap<IdentityKey, Group> = HashMap::new();

    for product in catalog.products() {
        let key = IdentityKey {
            name: product.name.clone(),
            reviews_count: product.reviews_count,
            brand: product.brand.clone(),
            image_url: product.image_url.clone(),
        };
        match groups.get_mut(&key) {
            Some(group) => {
                group.sum += product.rating;
                group.count += 1;
            }
            None => {
                groups.insert(key.clone(), Group { sum: product.rating, count: 1 });
                order.push(key);
            }
        }
    }

    let mut summaries: Vec<RatedSummary> = order
        .into_iter()
        .map(|key| {
            let group = &groups[&key];
            RatedSummary {
                name: key.name,
                rating: group.sum / group.count as f64,
                reviews_count: key.reviews_count,
                brand: key.brand,
                image_url: key.image_url,
            }
        })
        .collect();

    summaries
        .sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
    summaries.truncate(n);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Product, ProductId, Season};

    fn product(id: &str, name: &str, rating: f64) -> Product {
        Product {
            id: ProductId(id.to_owned()),
            name: name.to_owned(),
            brand: "brand".to_owned(),
            category: "category".to_owned(),
            tags: String::new(),
            rating,
            reviews_count: 10,
            image_url: "img".to_owned(),
            season: Season::AllSeasons,
        }
    }

    #[test]
    fn empty_catalog_yields_empty_list() {
        assert!(top_rated(&Catalog::default(), 10).is_empty());
    }

    #[test]
    fn sorts_descending_by_mean_rating() {
        let catalog = Catalog::new(vec![
            product("1", "A", 4.5),
            product("2", "B", 3.0),
            product("3", "B2", 5.0),
        ]);

        let top = top_rated(&catalog, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "B2");
        assert_eq!(top[0].rating, 5.0);
        assert_eq!(top[1].name, "A");
        assert_eq!(top[1].rating, 4.5);
    }

    #[test]
    fn duplicate_identities_are_mean_aggregated() {
        let catalog = Catalog::new(vec![
            product("1", "A", 4.0),
            product("2", "A", 2.0),
            product("3", "B", 3.5),
        ]);

        let top = top_rated(&catalog, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "B");
        assert_eq!(top[1].name, "A");
        assert_eq!(top[1].rating, 3.0);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let catalog = Catalog::new(vec![
            product("1", "first", 4.0),
            product("2", "second", 4.0),
            product("3", "third", 4.0),
        ]);

        let summaries = top_rated(&catalog, 10);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn output_never_exceeds_n() {
        let catalog =
            Catalog::new((0..20).map(|i| product(&i.to_string(), &format!("p{i}"), 3.0)).collect());
        assert_eq!(top_rated(&catalog, 5).len(), 5);
    }
}
