use std::fmt;

use serde::{Deserialize, Serialize};

use super::product::ProductId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One observed rating. Multiple events per (user, product) pair are
/// permitted; they are mean-aggregated before matrix construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingEvent {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: f64,
}
