//! Static badge theme registry
//!
//! Six predefined presets, loaded once at compile time. Lookup by id is
//! infallible: unknown ids fall back to the first preset (ember).

use serde::{Deserialize, Serialize};

/// Identifier of a predefined theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    Glacier,
    Meadow,
    Royal,
    Rose,
    Slate,
    /// Default theme; unknown ids deserialize here. Declared last
    /// because serde(other) requires it; registry order still puts
    /// ember first.
    #[default]
    #[serde(other)]
    Ember,
}

impl ThemeId {
    /// Get all theme ids in registry order
    pub fn all() -> &'static [ThemeId] {
        &[
            ThemeId::Ember,
            ThemeId::Glacier,
            ThemeId::Meadow,
            ThemeId::Royal,
            ThemeId::Rose,
            ThemeId::Slate,
        ]
    }
}

/// The six fixed palette slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub background: &'static str,
}

/// One predefined theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub id: ThemeId,
    pub name: &'static str,
    pub colors: ThemePalette,
}

static THEME_PRESETS: [ThemePreset; 6] = [
    ThemePreset {
        id: ThemeId::Ember,
        name: "Ember",
        colors: ThemePalette {
            primary: "#f59e0b",
            secondary: "#facc15",
            accent: "#dc2626",
            text: "#1f2937",
            border: "#b45309",
            background: "#fffbeb",
        },
    },
    ThemePreset {
        id: ThemeId::Glacier,
        name: "Glacier",
        colors: ThemePalette {
            primary: "#2563eb",
            secondary: "#38bdf8",
            accent: "#06b6d4",
            text: "#1e293b",
            border: "#1d4ed8",
            background: "#eff6ff",
        },
    },
    ThemePreset {
        id: ThemeId::Meadow,
        name: "Meadow",
        colors: ThemePalette {
            primary: "#10b981",
            secondary: "#84cc16",
            accent: "#f59e0b",
            text: "#14532d",
            border: "#047857",
            background: "#ecfdf5",
        },
    },
    ThemePreset {
        id: ThemeId::Royal,
        name: "Royal",
        colors: ThemePalette {
            primary: "#7c3aed",
            secondary: "#a78bfa",
            accent: "#f59e0b",
            text: "#2e1065",
            border: "#6d28d9",
            background: "#f5f3ff",
        },
    },
    ThemePreset {
        id: ThemeId::Rose,
        name: "Rose",
        colors: ThemePalette {
            primary: "#e11d48",
            secondary: "#fb7185",
            accent: "#f59e0b",
            text: "#4c0519",
            border: "#be123c",
            background: "#fff1f2",
        },
    },
    ThemePreset {
        id: ThemeId::Slate,
        name: "Slate",
        colors: ThemePalette {
            primary: "#475569",
            secondary: "#94a3b8",
            accent: "#0ea5e9",
            text: "#0f172a",
            border: "#334155",
            background: "#f8fafc",
        },
    },
];

impl ThemePreset {
    /// All presets in registry order. The first entry is the default.
    pub fn all() -> &'static [ThemePreset; 6] {
        &THEME_PRESETS
    }

    /// Look up a preset by id. Infallible.
    pub fn get(id: ThemeId) -> &'static ThemePreset {
        THEME_PRESETS
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&THEME_PRESETS[0])
    }
}
