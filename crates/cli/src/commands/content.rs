use std::path::Path;

use aisle_core::by_content;
use aisle_core::config::AppConfig;

use crate::commands::CommandResult;
use crate::data;

pub fn run(
    config: &AppConfig,
    catalog_path: &Path,
    item: &str,
    top: Option<usize>,
) -> CommandResult {
    let catalog = match data::load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("content", "data_load", format!("{error:#}"), 3);
        }
    };

    let n = top.unwrap_or(config.engine.top_n);
    match by_content(&catalog, item, n) {
        Ok(ranked) => {
            tracing::info!(
                event_name = "recommend.content.completed",
                seed_item = item,
                results = ranked.len(),
                "ranked catalog by tag similarity"
            );
            CommandResult::success("content", format!("{} candidates", ranked.len()), ranked)
        }
        Err(error) => CommandResult::from_engine_error("content", &error),
    }
}
