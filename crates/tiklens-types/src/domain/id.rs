use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which side of the relationship a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// The other account follows the export owner
    Follower,
    /// The export owner follows the other account
    Following,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Follower => "follower",
            RelationshipKind::Following => "following",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable record identifier.
///
/// Derived with UUID v5 from the relationship kind and username, so re-reading
/// the same export always produces the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn derive(kind: RelationshipKind, username: &str) -> Self {
        let key = format!("{}:{}", kind.as_str(), username);
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
