//! Hybrid composition: blend the content and collaborative rankings,
//! deduplicate, and narrow to the caller's season.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{by_collaborative, by_content, narrow_to_season, HybridRequest};
use crate::domain::recommendation::Recommendation;
use crate::errors::RecommendResult;

/// Which signal source wins deduplication priority. The classical pipeline
/// concatenates content results first; that choice is undocumented in the
/// data it came from, so it is a policy knob here rather than a constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendPolicy {
    #[default]
    ContentFirst,
    CollaborativeFirst,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported blend policy `{0}` (expected content_first|collaborative_first)")]
pub struct BlendPolicyParseError(pub String);

impl std::str::FromStr for BlendPolicy {
    type Err = BlendPolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "content_first" | "content" => Ok(Self::ContentFirst),
            "collaborative_first" | "collaborative" => Ok(Self::CollaborativeFirst),
            other => Err(BlendPolicyParseError(other.to_owned())),
        }
    }
}

/// Runs both sub-engines, blends per policy, and narrows to the season.
///
/// Each sub-engine is asked for `top_n * candidate_multiplier` candidates so
/// deduplication and seasonal narrowing still leave enough rows. A failure
/// in either sub-engine is returned unchanged, preferred source first:
/// degrading to a single signal is a materially different recommendation and
/// must be the caller's explicit choice, never an implicit fallback.
pub fn hybrid(request: HybridRequest<'_>) -> RecommendResult<Vec<Recommendation>> {
    let gather = request.top_n.max(1) * request.candidate_multiplier.max(1);

    let (first, second) = match request.blend {
        BlendPolicy::ContentFirst => (
            by_content(request.catalog, request.seed_name, gather)?,
            by_collaborative(request.ratings, request.catalog, request.target_user, gather)?,
        ),
        BlendPolicy::CollaborativeFirst => (
            by_collaborative(request.ratings, request.catalog, request.target_user, gather)?,
            by_content(request.catalog, request.seed_name, gather)?,
        ),
    };

    let mut seen: HashSet<_> = HashSet::new();
    let mut blended: Vec<Recommendation> = Vec::with_capacity(first.len() + second.len());
    for candidate in first.into_iter().chain(second) {
        if seen.insert(candidate.product_id.clone()) {
            blended.push(candidate);
        }
    }

    Ok(narrow_to_season(blended, request.season, request.top_n))
}
