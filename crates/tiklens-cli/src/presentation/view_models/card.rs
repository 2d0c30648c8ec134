use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeIcon {
    People,
}

impl BadgeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeIcon::People => "👥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardBadge {
    pub label: String,
    pub icon: BadgeIcon,
}

impl CardBadge {
    pub fn mutual() -> Self {
        Self {
            label: "Mutual".to_string(),
            icon: BadgeIcon::People,
        }
    }
}

/// Display fields for one follower, following or comparison card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipCardViewModel {
    pub username: String,
    /// Upper-cased first character of the username, `?` when empty
    pub avatar_glyph: String,
    /// `@username`; a bare `@` for an empty username
    pub handle_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutual_badge: Option<CardBadge>,
    /// Zero, one or two formatted date lines
    pub date_lines: Vec<String>,
}

impl RelationshipCardViewModel {
    pub fn is_mutual(&self) -> bool {
        self.mutual_badge.is_some()
    }
}

/// Caller-supplied activation hook
pub type CardAction<'a> = Box<dyn Fn() + 'a>;

/// A rendered card plus the action to run when the user activates it
pub struct RelationshipCard<'a> {
    pub view: RelationshipCardViewModel,
    on_activate: Option<CardAction<'a>>,
}

impl<'a> RelationshipCard<'a> {
    pub fn new(view: RelationshipCardViewModel) -> Self {
        Self {
            view,
            on_activate: None,
        }
    }

    pub fn with_action(mut self, action: impl Fn() + 'a) -> Self {
        self.on_activate = Some(Box::new(action));
        self
    }

    pub fn has_action(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Run the action once. Cards without one ignore activation.
    pub fn activate(&self) {
        if let Some(action) = &self.on_activate {
            action();
        }
    }
}

impl fmt::Debug for RelationshipCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipCard")
            .field("view", &self.view)
            .field("has_action", &self.has_action())
            .finish()
    }
}

impl From<RelationshipCardViewModel> for RelationshipCard<'_> {
    fn from(view: RelationshipCardViewModel) -> Self {
        Self::new(view)
    }
}
