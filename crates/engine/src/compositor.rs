//! Achievement icon compositor
//!
//! Turns an `AchievementIconConfig` into an ordered list of render
//! instructions: which asset to draw, tinted which color, at what size.
//! Z-order is strict and fixed: back decorations (list order), base,
//! front decorations (list order), symbol on top.
//!
//! Composition is total - any structurally valid config renders, worst
//! case with fallback colors.

use playdeck_domain::value_objects::icon::{
    AchievementIconConfig, BaseShape, DecorationKind, SymbolKind,
};
use playdeck_domain::value_objects::theme::ThemePreset;

use crate::ports::AssetCatalog;

/// Symbol size in pixels; fixed for all symbol kinds.
pub const SYMBOL_SIZE_PX: u32 = 56;

/// Which drawable layer an asset reference is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Base(BaseShape),
    Symbol(SymbolKind),
    /// `back` distinguishes the two decoration stacks, which render at
    /// different sizes
    Decoration { kind: DecorationKind, back: bool },
}

impl LayerKind {
    /// Presentation size for this layer in pixels.
    ///
    /// These are fixed presentation constants; relative proportions must
    /// be preserved for visual parity with existing badges.
    pub fn size_px(&self) -> u32 {
        match self {
            LayerKind::Base(BaseShape::Circle) => 140,
            LayerKind::Base(BaseShape::Shield) => 120,
            LayerKind::Symbol(_) => SYMBOL_SIZE_PX,
            LayerKind::Decoration {
                kind: DecorationKind::Crown,
                back: true,
            } => 120,
            LayerKind::Decoration { back: true, .. } => 180,
            LayerKind::Decoration {
                kind: DecorationKind::Crown,
                back: false,
            } => 100,
            LayerKind::Decoration { back: false, .. } => 160,
        }
    }
}

/// One render instruction: draw `asset` tinted `color` at `size_px`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLayer {
    pub asset: String,
    pub color: String,
    pub size_px: u32,
}

/// Compose a badge icon into its ordered render layers.
pub fn compose(config: &AchievementIconConfig, catalog: &dyn AssetCatalog) -> Vec<RenderLayer> {
    let theme = ThemePreset::get(config.theme);
    let mut layers =
        Vec::with_capacity(config.back_decorations.len() + config.front_decorations.len() + 2);

    for deco in &config.back_decorations {
        let kind = LayerKind::Decoration {
            kind: deco.kind,
            back: true,
        };
        layers.push(RenderLayer {
            asset: catalog.image_for(&kind, kind.size_px()),
            color: deco.color.resolve(theme).to_owned(),
            size_px: kind.size_px(),
        });
    }

    let base = LayerKind::Base(config.base.shape);
    layers.push(RenderLayer {
        asset: catalog.image_for(&base, base.size_px()),
        color: config.base.color.resolve(theme).to_owned(),
        size_px: base.size_px(),
    });

    for deco in &config.front_decorations {
        let kind = LayerKind::Decoration {
            kind: deco.kind,
            back: false,
        };
        layers.push(RenderLayer {
            asset: catalog.image_for(&kind, kind.size_px()),
            color: deco.color.resolve(theme).to_owned(),
            size_px: kind.size_px(),
        });
    }

    // Symbol always sits above the front decorations
    let symbol = LayerKind::Symbol(config.symbol.kind);
    layers.push(RenderLayer {
        asset: catalog.image_for(&symbol, symbol.size_px()),
        color: config.symbol.color.resolve(theme).to_owned(),
        size_px: symbol.size_px(),
    });

    tracing::debug!(
        layer_count = layers.len(),
        theme = ?config.theme,
        "composed badge icon"
    );

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StaticAssetCatalog;
    use playdeck_domain::value_objects::color::{ColorSpec, ColorToken, ThemeSlot};
    use playdeck_domain::value_objects::icon::{BaseLayer, Decoration, SymbolLayer};
    use playdeck_domain::value_objects::theme::ThemeId;

    fn full_config() -> AchievementIconConfig {
        AchievementIconConfig {
            theme: ThemeId::Glacier,
            base: BaseLayer {
                shape: BaseShape::Circle,
                color: ColorSpec::theme(ThemeSlot::Primary),
            },
            symbol: SymbolLayer {
                kind: SymbolKind::Bolt,
                color: ColorSpec::token(ColorToken::Onyx),
            },
            back_decorations: vec![
                Decoration::new(DecorationKind::Wings),
                Decoration::new(DecorationKind::Laurels),
            ],
            front_decorations: vec![
                Decoration::new(DecorationKind::Stars),
                Decoration::new(DecorationKind::Ribbon),
            ],
            profile_frame: None,
        }
    }

    #[test]
    fn test_layer_order_is_back_base_front_symbol() {
        let catalog = StaticAssetCatalog;
        let layers = compose(&full_config(), &catalog);
        assert_eq!(layers.len(), 6);

        let assets: Vec<&str> = layers.iter().map(|l| l.asset.as_str()).collect();
        assert_eq!(
            assets,
            vec![
                "badges/deco/wings_180.svg",
                "badges/deco/laurels_180.svg",
                "badges/base/circle_140.svg",
                "badges/deco/stars_160.svg",
                "badges/deco/ribbon_160.svg",
                "badges/symbol/bolt_56.svg",
            ]
        );
    }

    #[test]
    fn test_size_policy() {
        assert_eq!(LayerKind::Base(BaseShape::Circle).size_px(), 140);
        assert_eq!(LayerKind::Base(BaseShape::Shield).size_px(), 120);
        assert_eq!(LayerKind::Symbol(SymbolKind::Star).size_px(), 56);
        assert_eq!(
            LayerKind::Decoration {
                kind: DecorationKind::Wings,
                back: true
            }
            .size_px(),
            180
        );
        assert_eq!(
            LayerKind::Decoration {
                kind: DecorationKind::Crown,
                back: true
            }
            .size_px(),
            120
        );
        assert_eq!(
            LayerKind::Decoration {
                kind: DecorationKind::Flames,
                back: false
            }
            .size_px(),
            160
        );
        assert_eq!(
            LayerKind::Decoration {
                kind: DecorationKind::Crown,
                back: false
            }
            .size_px(),
            100
        );
    }

    #[test]
    fn test_colors_resolve_per_layer_against_config_theme() {
        let catalog = StaticAssetCatalog;
        let layers = compose(&full_config(), &catalog);
        // Theme-referencing base reads glacier primary
        assert_eq!(layers[2].color, "#2563eb");
        // Token symbol ignores the theme
        assert_eq!(layers[5].color, "#111827");
        // Default decorations are gold tokens
        assert_eq!(layers[0].color, "#f59e0b");
    }

    #[test]
    fn test_catalog_called_once_per_layer() {
        let mut catalog = crate::ports::MockAssetCatalog::new();
        catalog
            .expect_image_for()
            .times(6)
            .returning(|_, size| format!("asset_{size}"));
        let layers = compose(&full_config(), &catalog);
        assert_eq!(layers.len(), 6);
    }

    #[test]
    fn test_minimal_config_renders_base_and_symbol_only() {
        let catalog = StaticAssetCatalog;
        let layers = compose(&AchievementIconConfig::default(), &catalog);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].size_px, 140);
        assert_eq!(layers[1].size_px, 56);
    }
}
