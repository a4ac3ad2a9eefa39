//! CSV snapshot loading: the thin data-access glue between stored catalog
//! and ratings files and the core's in-memory contracts.

use std::path::Path;

use aisle_core::{Catalog, Product, ProductId, RatingEvent, Season, UserId};
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    product_id: String,
    name: String,
    brand: String,
    category: String,
    tags: String,
    rating: f64,
    reviews_count: u64,
    image_url: String,
    season: String,
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    user_id: String,
    product_id: String,
    rating: f64,
}

/// Reads a catalog snapshot. Malformed rows and unknown season labels fail
/// the whole load: a partially-read snapshot is not a stable snapshot.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog snapshot {}", path.display()))?;

    let mut products = Vec::new();
    for (record, row) in reader.deserialize::<CatalogRow>().enumerate() {
        // Records count from 1; the header makes that file line `record + 2`.
        let line = record + 2;
        let row = row.with_context(|| {
            format!("malformed catalog row at line {} of {}", line, path.display())
        })?;
        let season: Season = row
            .season
            .parse()
            .with_context(|| format!("catalog row at line {} of {}", line, path.display()))?;

        products.push(Product {
            id: ProductId(row.product_id),
            name: row.name,
            brand: row.brand,
            category: row.category,
            tags: row.tags,
            rating: row.rating,
            reviews_count: row.reviews_count,
            image_url: row.image_url,
            season,
        });
    }

    Ok(Catalog::new(products))
}

/// Reads a ratings snapshot as an append-only event list.
pub fn load_ratings(path: &Path) -> Result<Vec<RatingEvent>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open ratings snapshot {}", path.display()))?;

    let mut events = Vec::new();
    for (record, row) in reader.deserialize::<RatingRow>().enumerate() {
        let row = row.with_context(|| {
            format!("malformed ratings row at line {} of {}", record + 2, path.display())
        })?;
        events.push(RatingEvent {
            user_id: UserId(row.user_id),
            product_id: ProductId(row.product_id),
            rating: row.rating,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(contents.as_bytes()).expect("write");
        (dir, path)
    }

    const CATALOG_HEADER: &str =
        "product_id,name,brand,category,tags,rating,reviews_count,image_url,season\n";

    #[test]
    fn loads_catalog_rows_and_trims_season() {
        let (_dir, path) = write_file(
            "catalog.csv",
            &format!(
                "{CATALOG_HEADER}1,Wool Scarf,Acme,apparel,wool warm scarf,4.5,120,http://img/1, Winter \n"
            ),
        );

        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.len(), 1);
        let product = catalog.get(0).unwrap();
        assert_eq!(product.name, "Wool Scarf");
        assert_eq!(product.season, Season::Winter);
    }

    #[test]
    fn unknown_season_label_fails_the_load() {
        let (_dir, path) = write_file(
            "catalog.csv",
            &format!(
                "{CATALOG_HEADER}\
                 1,Hat,Acme,apparel,hat,4.0,3,http://img/1,Winter\n\
                 2,Cap,Acme,apparel,cap,4.0,3,http://img/2,Monsoon\n"
            ),
        );
        let error = load_catalog(&path).expect_err("unknown season should fail");
        // The bad record is the second data row, which is file line 3.
        assert!(format!("{error:#}").contains("line 3"), "got: {error:#}");
    }

    #[test]
    fn malformed_rating_fails_the_load() {
        let (_dir, path) =
            write_file("ratings.csv", "user_id,product_id,rating\nu1,p1,not-a-number\n");
        let error = load_ratings(&path).expect_err("malformed rating should fail");
        assert!(format!("{error:#}").contains("line 2"), "got: {error:#}");
    }

    #[test]
    fn loads_rating_events_in_order() {
        let (_dir, path) =
            write_file("ratings.csv", "user_id,product_id,rating\nu1,p1,4.5\nu2,p1,3.0\n");
        let events = load_ratings(&path).expect("load");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].user_id, UserId("u1".to_owned()));
        assert_eq!(events[1].rating, 3.0);
    }
}
