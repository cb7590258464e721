//! Achievement badge document
//!
//! The full editable badge: icon configuration plus the descriptive
//! metadata shown on the badge card (title, reward, category, tags) and
//! its publishing state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::icon::AchievementIconConfig;
use crate::error::DomainError;
use crate::ids::AchievementId;

/// Publishing state of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStatus {
    #[default]
    Draft,
    Published,
}

/// Profile-frame sync settings carried on the badge document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileFrameSync {
    pub enabled: bool,
    /// How long an earned frame stays active; `None` = permanent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

/// One achievement badge as edited in the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementBadge {
    pub id: AchievementId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub reward_coins: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BadgeStatus,
    /// Bumped by the surrounding application on publish
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub icon: AchievementIconConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_frame_sync: Option<ProfileFrameSync>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_version() -> u32 {
    1
}

impl AchievementBadge {
    /// Fresh unsaved draft with a default icon.
    pub fn new_draft(title: impl Into<String>) -> Self {
        Self {
            id: AchievementId::new(),
            title: title.into(),
            subtitle: None,
            description: None,
            reward_coins: 0,
            category: None,
            tags: Vec::new(),
            status: BadgeStatus::Draft,
            version: 1,
            icon: AchievementIconConfig::default(),
            profile_frame_sync: None,
            created_at: Some(Utc::now()),
        }
    }

    /// A badge needs a visible title before it can be published.
    pub fn validate_for_publish(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("badge title must not be empty"));
        }
        Ok(())
    }

    /// Card description with the original's fallback: description when
    /// present, otherwise the subtitle, otherwise empty.
    pub fn effective_description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.subtitle.as_deref())
            .unwrap_or("")
    }
}
