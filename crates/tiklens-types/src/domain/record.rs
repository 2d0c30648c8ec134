use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{RecordId, RelationshipKind};

/// An account that follows the export owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub id: RecordId,
    /// May be empty; never absent
    pub username: String,
    /// When this account started following the owner
    pub date_followed: DateTime<Utc>,
    /// When the record was imported
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_mutual: bool,
}

impl FollowerRecord {
    pub fn new(
        username: impl Into<String>,
        date_followed: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let username = username.into();
        Self {
            id: RecordId::derive(RelationshipKind::Follower, &username),
            username,
            date_followed,
            created_at,
            is_mutual: false,
        }
    }

    pub fn with_mutual(mut self, is_mutual: bool) -> Self {
        self.is_mutual = is_mutual;
        self
    }
}

/// An account the export owner follows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowingRecord {
    pub id: RecordId,
    pub username: String,
    /// When the owner followed this account
    pub date_followed: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_mutual: bool,
}

impl FollowingRecord {
    pub fn new(
        username: impl Into<String>,
        date_followed: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let username = username.into();
        Self {
            id: RecordId::derive(RelationshipKind::Following, &username),
            username,
            date_followed,
            created_at,
            is_mutual: false,
        }
    }

    pub fn with_mutual(mut self, is_mutual: bool) -> Self {
        self.is_mutual = is_mutual;
        self
    }
}

/// One username seen from both sides of the relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub username: String,
    /// When they followed the owner, if they do
    pub date_followed: Option<DateTime<Utc>>,
    /// When the owner followed them, if the owner does
    pub date_following: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_mutual: bool,
}

impl ComparisonRecord {
    /// Most recent of the two relationship dates
    pub fn latest_date(&self) -> Option<DateTime<Utc>> {
        match (self.date_followed, self.date_following) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Common view over follower and following records used by list queries
pub trait Relationship {
    fn username(&self) -> &str;
    fn relationship_date(&self) -> DateTime<Utc>;
}

impl Relationship for FollowerRecord {
    fn username(&self) -> &str {
        &self.username
    }

    fn relationship_date(&self) -> DateTime<Utc> {
        self.date_followed
    }
}

impl Relationship for FollowingRecord {
    fn username(&self) -> &str {
        &self.username
    }

    fn relationship_date(&self) -> DateTime<Utc> {
        self.date_followed
    }
}
