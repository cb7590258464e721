//! Value objects - immutable domain values and pure derivations

pub mod badge;
pub mod capabilities;
pub mod color;
pub mod icon;
pub mod snapshot;
pub mod theme;

pub use badge::{AchievementBadge, BadgeStatus, ProfileFrameSync};
pub use capabilities::{
    ContentSubTab, ManageSubTab, SessionCapabilities, SessionTab, ViewType,
};
pub use color::{ColorSpec, ColorToken, ThemeSlot, FALLBACK_HEX};
pub use icon::{
    AchievementIconConfig, BaseLayer, BaseShape, Decoration, DecorationKind,
    DecorationPosition, ProfileFrame, SymbolKind, SymbolLayer, DEFAULT_STAR_COUNT,
    STAR_COUNT_RANGE,
};
pub use snapshot::{
    Artifact, ArtifactType, BoardConfig, GameInfo, GameSnapshot, Phase, PlayMode, Role,
    Step, ToolConfig, ToolScope, Trigger,
};
pub use theme::{ThemeId, ThemePalette, ThemePreset};
