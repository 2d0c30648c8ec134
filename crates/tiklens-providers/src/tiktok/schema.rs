use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top level of a TikTok account data download (JSON flavour).
///
/// Only the relationship lists are modelled; every other section is ignored.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub(crate) struct TikTokExport {
    #[serde(rename = "Profile And Settings", default)]
    pub profile: ProfileSection,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub(crate) struct ProfileSection {
    #[serde(rename = "Follower", default)]
    pub follower: Option<FollowerSection>,

    #[serde(rename = "Following", default)]
    pub following: Option<FollowingSection>,
}

/// List entries stay as raw JSON so one malformed entry is reported on its
/// own instead of failing the whole export. `null` lists read as empty.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub(crate) struct FollowerSection {
    #[serde(rename = "FansList", default)]
    pub fans_list: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub(crate) struct FollowingSection {
    #[serde(rename = "Following", default)]
    pub following: Option<Vec<Value>>,
}

impl TikTokExport {
    pub fn fans(&self) -> &[Value] {
        self.profile
            .follower
            .as_ref()
            .and_then(|s| s.fans_list.as_deref())
            .unwrap_or_default()
    }

    pub fn followings(&self) -> &[Value] {
        self.profile
            .following
            .as_ref()
            .and_then(|s| s.following.as_deref())
            .unwrap_or_default()
    }
}
