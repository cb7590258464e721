//! Badge builder store
//!
//! Holds one achievement badge draft for the lifetime of one edit
//! session. Single-writer, in-memory, no persistence: the only way out
//! is an explicit export snapshot. Built fresh when an editor opens,
//! dropped when it closes.
//!
//! Decoration stacks are replaced wholesale; the add/remove helpers are
//! conveniences that read-modify-write the full list, so callers doing
//! their own list surgery behave identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use playdeck_domain::error::DomainError;
use playdeck_domain::ids::UserId;
use playdeck_domain::value_objects::badge::{AchievementBadge, BadgeStatus};
use playdeck_domain::value_objects::icon::{
    BaseLayer, Decoration, DecorationKind, DecorationPosition, ProfileFrame, SymbolLayer,
};
use playdeck_domain::value_objects::theme::ThemeId;

/// Version stamp of builder export snapshots.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Caller-supplied context recorded on an export snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub exported_at: DateTime<Utc>,
    pub exported_by: UserId,
    pub tool: String,
}

/// A versioned snapshot of the builder state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementExport {
    pub version: String,
    pub state: AchievementBadge,
    pub metadata: ExportMetadata,
}

/// One edit session's badge state.
#[derive(Debug, Clone)]
pub struct BadgeBuilder {
    badge: AchievementBadge,
}

impl BadgeBuilder {
    /// Start an edit session over an existing badge.
    pub fn new(badge: AchievementBadge) -> Self {
        Self { badge }
    }

    /// Start an edit session over a fresh draft.
    pub fn new_draft(title: impl Into<String>) -> Self {
        Self::new(AchievementBadge::new_draft(title))
    }

    /// Current draft.
    pub fn badge(&self) -> &AchievementBadge {
        &self.badge
    }

    // ==========================================================================
    // Icon setters
    // ==========================================================================

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.badge.icon.theme = theme;
    }

    pub fn set_base(&mut self, base: BaseLayer) {
        self.badge.icon.base = base;
    }

    pub fn set_symbol(&mut self, symbol: SymbolLayer) {
        self.badge.icon.symbol = symbol;
    }

    /// Replace the back decoration stack wholesale.
    pub fn set_back_decorations(&mut self, decorations: Vec<Decoration>) {
        self.badge.icon.back_decorations = decorations;
    }

    /// Replace the front decoration stack wholesale.
    pub fn set_front_decorations(&mut self, decorations: Vec<Decoration>) {
        self.badge.icon.front_decorations = decorations;
    }

    /// Append a back decoration with the default gold-token color.
    pub fn add_back_decoration(&mut self, kind: DecorationKind, position: DecorationPosition) {
        let mut decorations = self.badge.icon.back_decorations.clone();
        decorations.push(Decoration {
            position,
            ..Decoration::new(kind)
        });
        self.set_back_decorations(decorations);
    }

    /// Append a front decoration with the default gold-token color.
    pub fn add_front_decoration(&mut self, kind: DecorationKind, position: DecorationPosition) {
        let mut decorations = self.badge.icon.front_decorations.clone();
        decorations.push(Decoration {
            position,
            ..Decoration::new(kind)
        });
        self.set_front_decorations(decorations);
    }

    /// Remove a back decoration by index; later entries shift down.
    /// Out-of-range indexes are ignored.
    pub fn remove_back_decoration(&mut self, index: usize) {
        if index < self.badge.icon.back_decorations.len() {
            let mut decorations = self.badge.icon.back_decorations.clone();
            decorations.remove(index);
            self.set_back_decorations(decorations);
        }
    }

    /// Remove a front decoration by index; later entries shift down.
    /// Out-of-range indexes are ignored.
    pub fn remove_front_decoration(&mut self, index: usize) {
        if index < self.badge.icon.front_decorations.len() {
            let mut decorations = self.badge.icon.front_decorations.clone();
            decorations.remove(index);
            self.set_front_decorations(decorations);
        }
    }

    pub fn set_profile_frame_enabled(&mut self, enabled: bool) {
        self.badge.icon.profile_frame = Some(ProfileFrame { enabled });
    }

    // ==========================================================================
    // Metadata setters
    // ==========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.badge.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.badge.subtitle = subtitle;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.badge.description = description;
    }

    pub fn set_reward_coins(&mut self, coins: u32) {
        self.badge.reward_coins = coins;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.badge.category = category;
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.badge.tags = tags;
    }

    pub fn set_status(&mut self, status: BadgeStatus) {
        self.badge.status = status;
    }

    /// Validate the draft and mark it published.
    pub fn publish(&mut self) -> Result<(), DomainError> {
        self.badge.validate_for_publish()?;
        self.badge.status = BadgeStatus::Published;
        Ok(())
    }

    /// Versioned snapshot of the current state.
    ///
    /// Pure read: the builder keeps its state and the edit session
    /// continues after exporting.
    pub fn export(&self, metadata: ExportMetadata) -> AchievementExport {
        tracing::debug!(badge_id = %self.badge.id, tool = %metadata.tool, "exported badge snapshot");
        AchievementExport {
            version: EXPORT_VERSION.to_owned(),
            state: self.badge.clone(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playdeck_domain::value_objects::color::{ColorSpec, ColorToken};

    fn metadata() -> ExportMetadata {
        ExportMetadata {
            exported_at: Utc::now(),
            exported_by: UserId::new(),
            tool: "badge-editor".into(),
        }
    }

    #[test]
    fn test_add_appends_gold_token_decoration_at_end() {
        let mut builder = BadgeBuilder::new_draft("Test");
        builder.add_back_decoration(DecorationKind::Wings, DecorationPosition::Top);
        builder.add_back_decoration(DecorationKind::Stars, DecorationPosition::Center);

        let decorations = &builder.badge().icon.back_decorations;
        assert_eq!(decorations.len(), 2);
        assert_eq!(decorations[1].kind, DecorationKind::Stars);
        assert_eq!(decorations[0].color, ColorSpec::token(ColorToken::Gold));
        assert_eq!(decorations[1].color, ColorSpec::token(ColorToken::Gold));
    }

    #[test]
    fn test_remove_by_index_shifts_later_entries_down() {
        let mut builder = BadgeBuilder::new_draft("Test");
        builder.add_front_decoration(DecorationKind::Wings, DecorationPosition::Center);
        builder.add_front_decoration(DecorationKind::Ribbon, DecorationPosition::Center);
        builder.add_front_decoration(DecorationKind::Crown, DecorationPosition::Top);

        builder.remove_front_decoration(1);

        let decorations = &builder.badge().icon.front_decorations;
        assert_eq!(decorations.len(), 2);
        assert_eq!(decorations[0].kind, DecorationKind::Wings);
        assert_eq!(decorations[1].kind, DecorationKind::Crown);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut builder = BadgeBuilder::new_draft("Test");
        builder.add_back_decoration(DecorationKind::Laurels, DecorationPosition::Center);
        builder.remove_back_decoration(5);
        assert_eq!(builder.badge().icon.back_decorations.len(), 1);
    }

    #[test]
    fn test_whole_list_replace() {
        let mut builder = BadgeBuilder::new_draft("Test");
        builder.set_back_decorations(vec![
            Decoration::new(DecorationKind::Flames),
            Decoration::new(DecorationKind::Wings),
        ]);
        assert_eq!(builder.badge().icon.back_decorations.len(), 2);
        builder.set_back_decorations(vec![]);
        assert!(builder.badge().icon.back_decorations.is_empty());
    }

    #[test]
    fn test_export_snapshots_without_resetting_state() {
        let mut builder = BadgeBuilder::new_draft("Keeper");
        builder.set_theme(ThemeId::Royal);
        builder.set_reward_coins(150);

        let export = builder.export(metadata());

        assert_eq!(export.version, EXPORT_VERSION);
        assert_eq!(export.state.title, "Keeper");
        assert_eq!(export.state.icon.theme, ThemeId::Royal);
        // Builder state survives the export
        assert_eq!(builder.badge().reward_coins, 150);

        // Further edits do not touch the snapshot
        builder.set_reward_coins(999);
        assert_eq!(export.state.reward_coins, 150);
    }

    #[test]
    fn test_publish_requires_title() {
        let mut builder = BadgeBuilder::new_draft("");
        assert!(builder.publish().is_err());
        assert_eq!(builder.badge().status, BadgeStatus::Draft);

        builder.set_title("Night Owl");
        builder.publish().expect("titled badge publishes");
        assert_eq!(builder.badge().status, BadgeStatus::Published);
    }

    #[test]
    fn test_profile_frame_toggle() {
        let mut builder = BadgeBuilder::new_draft("Test");
        assert!(builder.badge().icon.profile_frame.is_none());
        builder.set_profile_frame_enabled(true);
        assert_eq!(
            builder.badge().icon.profile_frame,
            Some(ProfileFrame { enabled: true })
        );
        builder.set_profile_frame_enabled(false);
        assert_eq!(
            builder.badge().icon.profile_frame,
            Some(ProfileFrame { enabled: false })
        );
    }
}
