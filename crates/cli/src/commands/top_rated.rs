use std::path::Path;

use aisle_core::config::AppConfig;
use aisle_core::top_rated;

use crate::commands::CommandResult;
use crate::data;

pub fn run(config: &AppConfig, catalog_path: &Path, top: Option<usize>) -> CommandResult {
    let catalog = match data::load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("top-rated", "data_load", format!("{error:#}"), 3);
        }
    };

    let n = top.unwrap_or(config.engine.top_n);
    let summaries = top_rated(&catalog, n);
    tracing::info!(
        event_name = "recommend.top_rated.completed",
        catalog_rows = catalog.len(),
        results = summaries.len(),
        "ranked catalog by mean rating"
    );

    CommandResult::success("top-rated", format!("{} products ranked", summaries.len()), summaries)
}
