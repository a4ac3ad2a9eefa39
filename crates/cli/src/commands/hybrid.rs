use std::path::Path;

use aisle_core::config::AppConfig;
use aisle_core::{hybrid, BlendPolicy, HybridRequest, Season, UserId};
use chrono::Utc;

use crate::commands::CommandResult;
use crate::data;

pub struct HybridArgs<'a> {
    pub config: &'a AppConfig,
    pub catalog: &'a Path,
    pub ratings: &'a Path,
    pub user: &'a str,
    pub item: &'a str,
    pub month: Option<u32>,
    pub top: Option<usize>,
    pub prefer: Option<BlendPolicy>,
}

pub fn run(args: HybridArgs<'_>) -> CommandResult {
    // The clock is read here, at the boundary; the core only ever sees a
    // resolved season.
    let season = match args.month {
        Some(month) => match Season::from_month(month) {
            Some(season) => season,
            None => {
                return CommandResult::failure(
                    "hybrid",
                    "invalid_month",
                    format!("month must be 1-12, got {month}"),
                    2,
                );
            }
        },
        None => Season::from_datetime(Utc::now()),
    };

    let catalog = match data::load_catalog(args.catalog) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("hybrid", "data_load", format!("{error:#}"), 3);
        }
    };
    let ratings = match data::load_ratings(args.ratings) {
        Ok(ratings) => ratings,
        Err(error) => {
            return CommandResult::failure("hybrid", "data_load", format!("{error:#}"), 3);
        }
    };

    let target = UserId(args.user.to_owned());
    let request = HybridRequest {
        catalog: &catalog,
        ratings: &ratings,
        target_user: &target,
        seed_name: args.item,
        season,
        top_n: args.top.unwrap_or(args.config.engine.top_n),
        blend: args.prefer.unwrap_or(args.config.engine.blend),
        candidate_multiplier: args.config.engine.candidate_multiplier,
    };

    match hybrid(request) {
        Ok(ranked) => {
            tracing::info!(
                event_name = "recommend.hybrid.completed",
                target_user = args.user,
                seed_item = args.item,
                season = %season,
                results = ranked.len(),
                "blended recommendations"
            );
            CommandResult::success(
                "hybrid",
                format!("{} candidates for {season}", ranked.len()),
                ranked,
            )
        }
        Err(error) => CommandResult::from_engine_error("hybrid", &error),
    }
}
