//! PlayDeck engine - services around the domain cores
//!
//! Session side: a memoizing capability cache over the domain resolver.
//! Gamification side: the icon compositor (against an asset-catalog
//! port), the badge builder edit store with undo/redo history, the
//! canonical export codec, and the editor helpers (randomizer, contrast
//! tip).

pub mod builder;
pub mod capabilities;
pub mod compositor;
pub mod contrast;
pub mod export;
pub mod history;
pub mod ports;
pub mod randomizer;

pub use builder::{AchievementExport, BadgeBuilder, ExportMetadata, EXPORT_VERSION};
pub use capabilities::CapabilityCache;
pub use compositor::{compose, LayerKind, RenderLayer, SYMBOL_SIZE_PX};
pub use contrast::{contrast_ratio, relative_luminance, ContrastLevel};
pub use export::{
    build_export, extract_badge, parse_export, CanonicalExport, ExportArgs, ExportError,
    ExportedAchievement, ExportedBy, PublishScope, UnlockCriteria, UnlockSpec,
    SCHEMA_VERSION,
};
pub use history::{EditHistory, MAX_HISTORY};
pub use ports::{AssetCatalog, StaticAssetCatalog};
pub use randomizer::{random_icon, randomize_colors};
