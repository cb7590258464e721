//! PlayDeck domain - core types, value objects, and invariants
//!
//! Pure domain layer: no I/O, no async, no ambient RNG. The two
//! derivation cores live here as total functions - session capability
//! resolution (`SessionCapabilities::resolve`) and the achievement icon
//! document with its color/theme resolution rules. Services around them
//! (caching, composition against an asset catalog, edit-session state)
//! live in `playdeck-engine`.

pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::{AchievementId, SessionId, TenantId, UserId};
pub use value_objects::{
    AchievementBadge, AchievementIconConfig, Artifact, ArtifactType, BadgeStatus,
    BaseLayer, BaseShape, BoardConfig, ColorSpec, ColorToken, ContentSubTab, Decoration,
    DecorationKind, DecorationPosition, GameInfo, GameSnapshot, ManageSubTab, Phase,
    PlayMode, ProfileFrame, ProfileFrameSync, Role, SessionCapabilities, SessionTab,
    Step, SymbolKind, SymbolLayer, ThemeId, ThemePalette, ThemePreset, ThemeSlot,
    ToolConfig, ToolScope, Trigger, ViewType,
};
