//! Seasonal narrowing: season-matched candidates outrank season-agnostic
//! ones, everything else is dropped.

use crate::domain::product::Season;
use crate::domain::recommendation::Recommendation;

/// Partitions candidates into exact season matches followed by `AllSeasons`
/// items, preserving relative order within each group, truncated to `n`.
///
/// The ordering is a deliberate relevance bias: a Winter coat must outrank a
/// season-agnostic item in January. Idempotent for a fixed season.
pub fn narrow_to_season(
    candidates: Vec<Recommendation>,
    season: Season,
    n: usize,
) -> Vec<Recommendation> {
    let mut matched: Vec<Recommendation> = Vec::new();
    let mut agnostic: Vec<Recommendation> = Vec::new();

    for candidate in candidates {
        if candidate.season == season {
            matched.push(candidate);
        } else if candidate.season == Season::AllSeasons {
            agnostic.push(candidate);
        }
    }

    matched.extend(agnostic);
    matched.truncate(n);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    fn candidate(id: &str, season: Season) -> Recommendation {
        Recommendation {
            product_id: ProductId(id.to_owned()),
            name: format!("product {id}"),
            brand: "brand".to_owned(),
            reviews_count: 1,
            image_url: "img".to_owned(),
            rating: 4.0,
            season,
            score: 0.5,
        }
    }

    #[test]
    fn season_matches_come_before_all_seasons() {
        let narrowed = narrow_to_season(
            vec![
                candidate("1", Season::AllSeasons),
                candidate("2", Season::Winter),
                candidate("3", Season::Summer),
                candidate("4", Season::Winter),
            ],
            Season::Winter,
            10,
        );

        let ids: Vec<&str> = narrowed.iter().map(|c| c.product_id.0.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1"]);
    }

    #[test]
    fn off_season_candidates_are_dropped() {
        let narrowed =
            narrow_to_season(vec![candidate("1", Season::Summer)], Season::Winter, 10);
        assert!(narrowed.is_empty());
    }

    #[test]
    fn narrowing_is_idempotent() {
        let input = vec![
            candidate("1", Season::Winter),
            candidate("2", Season::AllSeasons),
            candidate("3", Season::Summer),
        ];
        let once = narrow_to_season(input, Season::Winter, 10);
        let twice = narrow_to_season(once.clone(), Season::Winter, 10);
        assert_eq!(once, twice);
    }

    #[test]
    fn truncates_to_n() {
        let input = (0..6).map(|i| candidate(&i.to_string(), Season::Spring)).collect();
        assert_eq!(narrow_to_season(input, Season::Spring, 4).len(), 4);
    }
}
