//! Achievement icon configuration
//!
//! The editable document behind the badge builder: a base shape, a symbol,
//! and two ordered decoration lists. Decoration list order is the render
//! (z) order - back decorations draw beneath the base, front decorations
//! above it, and the symbol sits on top of everything.

use serde::{Deserialize, Serialize};

use super::color::ColorSpec;
use super::theme::ThemeId;

/// Render-time default when a stars decoration has no stored count.
pub const DEFAULT_STAR_COUNT: u8 = 3;
/// Valid star-count range, enforced at render time.
pub const STAR_COUNT_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Shape of the badge base layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BaseShape {
    #[default]
    Circle,
    Shield,
}

impl BaseShape {
    pub fn all() -> &'static [BaseShape] {
        &[BaseShape::Circle, BaseShape::Shield]
    }
}

/// Central badge symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Flame,
    #[default]
    Star,
    Shield,
    Wings,
    Medal,
    Bolt,
}

impl SymbolKind {
    pub fn all() -> &'static [SymbolKind] {
        &[
            SymbolKind::Flame,
            SymbolKind::Star,
            SymbolKind::Shield,
            SymbolKind::Wings,
            SymbolKind::Medal,
            SymbolKind::Bolt,
        ]
    }
}

/// Decoration layer kinds usable in both the back and front stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    Wings,
    Laurels,
    Flames,
    Ribbon,
    Stars,
    Crown,
}

impl DecorationKind {
    pub fn all() -> &'static [DecorationKind] {
        &[
            DecorationKind::Wings,
            DecorationKind::Laurels,
            DecorationKind::Flames,
            DecorationKind::Ribbon,
            DecorationKind::Stars,
            DecorationKind::Crown,
        ]
    }
}

/// Where a decoration anchors relative to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecorationPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// The base layer: shape plus color spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BaseLayer {
    pub shape: BaseShape,
    #[serde(default)]
    pub color: ColorSpec,
}

/// The symbol layer: kind plus color spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SymbolLayer {
    pub kind: SymbolKind,
    #[serde(default)]
    pub color: ColorSpec,
}

/// One decoration entry in a back or front stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    #[serde(default)]
    pub color: ColorSpec,
    #[serde(default)]
    pub position: DecorationPosition,
    /// Star count, meaningful only for `Stars`. Stored as entered;
    /// `star_count` applies the render-time default and clamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
}

impl Decoration {
    /// New decoration of the given kind with the default (gold token)
    /// color, anchored center.
    pub fn new(kind: DecorationKind) -> Self {
        Self {
            kind,
            color: ColorSpec::default(),
            position: DecorationPosition::default(),
            count: None,
        }
    }

    /// Effective star count at render time: default 3, clamped to 1..=5.
    ///
    /// Storage carries whatever the editor wrote; the clamp here keeps a
    /// hand-edited out-of-range value from breaking the render.
    pub fn star_count(&self) -> u8 {
        self.count
            .unwrap_or(DEFAULT_STAR_COUNT)
            .clamp(*STAR_COUNT_RANGE.start(), *STAR_COUNT_RANGE.end())
    }
}

/// Profile-frame sync flag on an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileFrame {
    pub enabled: bool,
}

/// Complete icon configuration for one achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementIconConfig {
    #[serde(default)]
    pub theme: ThemeId,
    #[serde(default)]
    pub base: BaseLayer,
    #[serde(default)]
    pub symbol: SymbolLayer,
    /// Renders beneath the base, list order = z order
    #[serde(default)]
    pub back_decorations: Vec<Decoration>,
    /// Renders above the base, list order = z order
    #[serde(default)]
    pub front_decorations: Vec<Decoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_frame: Option<ProfileFrame>,
}

impl Default for AchievementIconConfig {
    /// Ember theme, gold circle, gold star, no decorations.
    fn default() -> Self {
        Self {
            theme: ThemeId::Ember,
            base: BaseLayer::default(),
            symbol: SymbolLayer::default(),
            back_decorations: Vec::new(),
            front_decorations: Vec::new(),
            profile_frame: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::color::ColorToken;

    #[test]
    fn test_new_decoration_defaults_to_gold_token() {
        let deco = Decoration::new(DecorationKind::Wings);
        assert_eq!(deco.color, ColorSpec::token(ColorToken::Gold));
        assert_eq!(deco.position, DecorationPosition::Center);
        assert!(deco.count.is_none());
    }

    #[test]
    fn test_star_count_defaults_to_three_at_render_time() {
        let deco = Decoration::new(DecorationKind::Stars);
        // Stored value stays unset; only the render default is 3
        assert!(deco.count.is_none());
        assert_eq!(deco.star_count(), 3);
    }

    #[test]
    fn test_star_count_clamps_out_of_range_values() {
        let mut deco = Decoration::new(DecorationKind::Stars);
        deco.count = Some(7);
        assert_eq!(deco.star_count(), 5);
        deco.count = Some(0);
        assert_eq!(deco.star_count(), 1);
        deco.count = Some(4);
        assert_eq!(deco.star_count(), 4);
    }

    #[test]
    fn test_config_json_roundtrip_preserves_decoration_order() {
        let mut config = AchievementIconConfig::default();
        config.back_decorations = vec![
            Decoration::new(DecorationKind::Wings),
            Decoration::new(DecorationKind::Laurels),
        ];
        config.front_decorations = vec![Decoration::new(DecorationKind::Stars)];

        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: AchievementIconConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
        assert_eq!(parsed.back_decorations[0].kind, DecorationKind::Wings);
        assert_eq!(parsed.back_decorations[1].kind, DecorationKind::Laurels);
    }
}
