use std::path::Path;

use aisle_core::config::AppConfig;
use aisle_core::{by_collaborative, UserId};

use crate::commands::CommandResult;
use crate::data;

pub fn run(
    config: &AppConfig,
    catalog_path: &Path,
    ratings_path: &Path,
    user: &str,
    top: Option<usize>,
) -> CommandResult {
    let catalog = match data::load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("collaborative", "data_load", format!("{error:#}"), 3);
        }
    };
    let ratings = match data::load_ratings(ratings_path) {
        Ok(ratings) => ratings,
        Err(error) => {
            return CommandResult::failure("collaborative", "data_load", format!("{error:#}"), 3);
        }
    };

    let n = top.unwrap_or(config.engine.top_n);
    let target = UserId(user.to_owned());
    match by_collaborative(&ratings, &catalog, &target, n) {
        Ok(ranked) => {
            tracing::info!(
                event_name = "recommend.collaborative.completed",
                target_user = user,
                rating_events = ratings.len(),
                results = ranked.len(),
                "ranked products from similar users"
            );
            CommandResult::success(
                "collaborative",
                format!("{} candidates", ranked.len()),
                ranked,
            )
        }
        Err(error) => CommandResult::from_engine_error("collaborative", &error),
    }
}
