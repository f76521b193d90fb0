use chrono::{DateTime, Utc};
use serde::Deserialize;

use self::date::PostedAt;

pub mod date;

pub const PUBLISHED_STATUS: &str = "Published";

/// Read-only projection of a post as the collection resource serves it.
///
/// The wire payload uses `_id` and `createdAt`; deserializing into this
/// struct is the only validation the admin console does on the payload.
/// A response that doesn't match this shape fails the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub author: String,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED_STATUS
    }
}

impl PostedAt for Post {
    fn posted_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
