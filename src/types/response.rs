use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::user::Role;

#[derive(Debug, Deserialize)]
pub(crate) struct Login {
    pub(crate) token: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Stats {
    pub(crate) total_users: u64,
    pub(crate) total_stores: u64,
    pub(crate) total_ratings: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) address: String,
    pub(crate) role: Role,
}

/// A store row in the admin listing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdminStore {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) address: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub(crate) average_rating: Option<f64>,
}

/// A store as a normal user sees it, with that user's own rating if any.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Store {
    pub(crate) id: i64,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) address: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub(crate) overall_rating: Option<f64>,
    #[serde(default)]
    pub(crate) user_rating: Option<u8>,
    #[serde(default)]
    pub(crate) user_rating_id: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct StoreInfo {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) address: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Rater {
    pub(crate) name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecentRating {
    pub(crate) id: i64,
    pub(crate) rating: u8,
    #[serde(rename = "User", default)]
    pub(crate) user: Option<Rater>,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnerDashboard {
    #[serde(default)]
    pub(crate) store: Option<StoreInfo>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub(crate) average_rating: Option<f64>,
    #[serde(default)]
    pub(crate) total_ratings: u64,
    #[serde(default)]
    pub(crate) recent_ratings: Vec<RecentRating>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Created {
    pub(crate) id: i64,
}

/// Averages come back as numbers from some endpoints and as decimal strings from others.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Score {
        Number(f64),
        Text(String),
    }

    match Option::<Score>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Score::Number(n)) => Ok(Some(n)),
        Some(Score::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Score::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
