use aisle_core::config::{AppConfig, LogFormat};
use aisle_core::BlendPolicy;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    engine_top_n: usize,
    engine_blend: &'static str,
    engine_candidate_multiplier: usize,
    logging_level: String,
    logging_format: &'static str,
}

pub fn run(config: &AppConfig) -> CommandResult {
    let effective = EffectiveConfig {
        engine_top_n: config.engine.top_n,
        engine_blend: match config.engine.blend {
            BlendPolicy::ContentFirst => "content_first",
            BlendPolicy::CollaborativeFirst => "collaborative_first",
        },
        engine_candidate_multiplier: config.engine.candidate_multiplier,
        logging_level: config.logging.level.clone(),
        logging_format: match config.logging.format {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        },
    };

    CommandResult::success("config", "effective configuration", effective)
}
