//! Canonical badge export codec
//!
//! Badges travel between environments as a versioned JSON document. The
//! canonical shape wraps the full badge inside the achievement's unlock
//! criteria (`unlock.unlock_criteria.params.builder.badge`), so importing
//! tools that only understand achievements still see a valid record while
//! the builder round-trips its complete state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use playdeck_domain::ids::{TenantId, UserId};
use playdeck_domain::value_objects::badge::AchievementBadge;

/// Canonical export schema version.
pub const SCHEMA_VERSION: &str = "1.0";

/// Errors raised when reading a canonical export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Document does not match the canonical schema
    #[error("does not match badge export schema {SCHEMA_VERSION}: {0}")]
    Schema(String),

    /// A required element is absent; names the missing JSON path
    #[error("missing {0}")]
    MissingPath(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Who produced an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedBy {
    pub user_id: UserId,
    pub tool: String,
}

/// Where an exported badge is meant to be published.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PublishScope {
    Global,
    Tenant { tenant_id: TenantId },
}

/// Unlock criteria wrapper. The builder payload lives under `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockCriteria {
    #[serde(rename = "type")]
    pub criteria_type: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Unlock block of an exported achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockSpec {
    pub condition_type: String,
    pub unlock_criteria: UnlockCriteria,
}

/// One achievement entry in a canonical export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedAchievement {
    pub achievement_key: String,
    pub name: String,
    pub description: String,
    pub unlock: UnlockSpec,
}

/// The canonical export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub exported_by: ExportedBy,
    pub publish_scope: PublishScope,
    pub achievements: Vec<ExportedAchievement>,
}

/// Inputs to [`build_export`].
#[derive(Debug, Clone)]
pub struct ExportArgs {
    pub scope: PublishScope,
    pub actor: UserId,
    pub tool: String,
    pub exported_at: DateTime<Utc>,
    pub export_key: String,
}

/// Build the canonical export document for one badge.
///
/// The badge's title becomes the achievement name, its description falls
/// back to the subtitle, and the full badge is embedded under
/// `unlock.unlock_criteria.params.builder.badge`.
pub fn build_export(args: &ExportArgs, badge: &AchievementBadge) -> CanonicalExport {
    let params = serde_json::json!({
        "builder": { "badge": badge }
    });

    tracing::debug!(badge_id = %badge.id, key = %args.export_key, "built canonical badge export");

    CanonicalExport {
        schema_version: SCHEMA_VERSION.to_owned(),
        exported_at: args.exported_at,
        exported_by: ExportedBy {
            user_id: args.actor,
            tool: args.tool.clone(),
        },
        publish_scope: args.scope,
        achievements: vec![ExportedAchievement {
            achievement_key: args.export_key.clone(),
            name: badge.title.clone(),
            description: badge.effective_description().to_owned(),
            unlock: UnlockSpec {
                condition_type: "manual".to_owned(),
                unlock_criteria: UnlockCriteria {
                    criteria_type: "manual".to_owned(),
                    params,
                },
            },
        }],
    }
}

/// Parse an untyped JSON value as a canonical export.
pub fn parse_export(value: serde_json::Value) -> Result<CanonicalExport, ExportError> {
    let export: CanonicalExport =
        serde_json::from_value(value).map_err(|e| ExportError::Schema(e.to_string()))?;
    if export.schema_version != SCHEMA_VERSION {
        return Err(ExportError::Schema(format!(
            "unsupported schema_version '{}'",
            export.schema_version
        )));
    }
    Ok(export)
}

/// Extract the embedded badge from a canonical export.
///
/// Falls back to the achievement name when the embedded badge carries no
/// title; status and version fall back to their document defaults (draft,
/// 1) during deserialization.
pub fn extract_badge(export: &CanonicalExport) -> Result<AchievementBadge, ExportError> {
    let achievement = export
        .achievements
        .first()
        .ok_or(ExportError::MissingPath("achievements[0]"))?;

    let payload = achievement
        .unlock
        .unlock_criteria
        .params
        .get("builder")
        .ok_or(ExportError::MissingPath(
            "achievements[0].unlock.unlock_criteria.params.builder",
        ))?;
    let embedded = payload.get("badge").ok_or(ExportError::MissingPath(
        "achievements[0].unlock.unlock_criteria.params.builder.badge",
    ))?;

    let mut badge: AchievementBadge = serde_json::from_value(embedded.clone())?;
    if badge.title.is_empty() {
        badge.title = achievement.name.clone();
    }
    Ok(badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use playdeck_domain::value_objects::badge::BadgeStatus;
    use playdeck_domain::value_objects::color::ColorSpec;
    use playdeck_domain::value_objects::icon::{BaseShape, Decoration, DecorationKind};
    use playdeck_domain::value_objects::theme::ThemeId;

    fn args() -> ExportArgs {
        ExportArgs {
            scope: PublishScope::Tenant {
                tenant_id: TenantId::new(),
            },
            actor: UserId::new(),
            tool: "library-badges".into(),
            exported_at: Utc::now(),
            export_key: "export-123".into(),
        }
    }

    fn sample_badge() -> AchievementBadge {
        let mut badge = AchievementBadge::new_draft("Round Trip");
        badge.subtitle = Some("Testing round trip".into());
        badge.description = Some("Should survive".into());
        badge.reward_coins = 250;
        badge.status = BadgeStatus::Published;
        badge.version = 5;
        badge.tags = vec!["round".into(), "trip".into()];
        badge.icon.theme = ThemeId::Meadow;
        badge.icon.base.shape = BaseShape::Shield;
        badge.icon.base.color = ColorSpec::custom("#ff0000");
        badge.icon.back_decorations = vec![Decoration::new(DecorationKind::Wings)];
        badge
    }

    #[test]
    fn test_build_uses_title_as_achievement_name() {
        let export = build_export(&args(), &sample_badge());
        assert_eq!(export.schema_version, SCHEMA_VERSION);
        assert_eq!(export.achievements[0].name, "Round Trip");
        assert_eq!(export.achievements[0].achievement_key, "export-123");
        assert_eq!(export.achievements[0].unlock.unlock_criteria.criteria_type, "manual");
    }

    #[test]
    fn test_build_description_falls_back_to_subtitle() {
        let mut badge = sample_badge();
        badge.description = None;
        let export = build_export(&args(), &badge);
        assert_eq!(export.achievements[0].description, "Testing round trip");
    }

    #[test]
    fn test_round_trip_preserves_badge() {
        let badge = sample_badge();
        let export = build_export(&args(), &badge);

        // Through untyped JSON, like a file import would see it
        let value = serde_json::to_value(&export).expect("serialize");
        let parsed = parse_export(value).expect("parse");
        let extracted = extract_badge(&parsed).expect("extract");

        assert_eq!(extracted, badge);
    }

    #[test]
    fn test_parse_rejects_unknown_schema_version() {
        let mut export = build_export(&args(), &sample_badge());
        export.schema_version = "2.0".into();
        let value = serde_json::to_value(&export).expect("serialize");
        let err = parse_export(value).expect_err("should reject");
        assert!(matches!(err, ExportError::Schema(_)));
    }

    #[test]
    fn test_extract_without_builder_payload_names_the_path() {
        let mut export = build_export(&args(), &sample_badge());
        export.achievements[0].unlock.unlock_criteria.params = serde_json::json!({});
        let err = extract_badge(&export).expect_err("should fail");
        assert!(
            err.to_string()
                .contains("unlock.unlock_criteria.params.builder"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_extract_falls_back_to_achievement_name_for_title() {
        let mut badge = sample_badge();
        badge.title = String::new();
        let mut export = build_export(&args(), &badge);
        export.achievements[0].name = "Fallback Name".into();
        let extracted = extract_badge(&export).expect("extract");
        assert_eq!(extracted.title, "Fallback Name");
    }

    #[test]
    fn test_global_scope_roundtrip() {
        let mut a = args();
        a.scope = PublishScope::Global;
        let export = build_export(&a, &sample_badge());
        let value = serde_json::to_value(&export).expect("serialize");
        let parsed = parse_export(value).expect("parse");
        assert_eq!(parsed.publish_scope, PublishScope::Global);
    }
}
