//! Engine ports - seams to collaborators supplied by the surrounding
//! application.
//!
//! The only port here is the asset catalog: the compositor does not know
//! how badge artwork is stored, it just asks for a reference per layer.

use crate::compositor::LayerKind;
use playdeck_domain::value_objects::icon::{BaseShape, SymbolKind};

/// Resolves a drawable layer to an image reference.
///
/// Synchronous by design: composition runs on every editor keystroke and
/// must not suspend. Implementations must be thread-safe (Send + Sync).
pub trait AssetCatalog: Send + Sync {
    /// Image reference for a layer at the given render size.
    ///
    /// Called exactly once per composed layer. Must be total - an
    /// unknown combination should return a placeholder reference, not
    /// fail.
    fn image_for(&self, layer: &LayerKind, size_px: u32) -> String;
}

/// Default catalog mapping layers to stable asset paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAssetCatalog;

impl AssetCatalog for StaticAssetCatalog {
    fn image_for(&self, layer: &LayerKind, size_px: u32) -> String {
        match layer {
            LayerKind::Base(shape) => {
                let name = match shape {
                    BaseShape::Circle => "circle",
                    BaseShape::Shield => "shield",
                };
                format!("badges/base/{name}_{size_px}.svg")
            }
            LayerKind::Symbol(kind) => {
                let name = match kind {
                    SymbolKind::Flame => "flame",
                    SymbolKind::Star => "star",
                    SymbolKind::Shield => "shield",
                    SymbolKind::Wings => "wings",
                    SymbolKind::Medal => "medal",
                    SymbolKind::Bolt => "bolt",
                };
                format!("badges/symbol/{name}_{size_px}.svg")
            }
            LayerKind::Decoration { kind, .. } => {
                use playdeck_domain::value_objects::icon::DecorationKind;
                let name = match kind {
                    DecorationKind::Wings => "wings",
                    DecorationKind::Laurels => "laurels",
                    DecorationKind::Flames => "flames",
                    DecorationKind::Ribbon => "ribbon",
                    DecorationKind::Stars => "stars",
                    DecorationKind::Crown => "crown",
                };
                format!("badges/deco/{name}_{size_px}.svg")
            }
        }
    }
}

#[cfg(test)]
mockall::mock! {
    pub AssetCatalog {}

    impl AssetCatalog for AssetCatalog {
        fn image_for(&self, layer: &LayerKind, size_px: u32) -> String;
    }
}
