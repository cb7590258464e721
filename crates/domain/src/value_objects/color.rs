//! Badge color specs and the fixed token palette
//!
//! A layer's color is one of three things: a named token from the fixed
//! palette, a reference into the selected theme, or a raw custom hex
//! string. Resolution is a total 3-way dispatch applied independently per
//! layer; nothing here validates hex strings (worst case is a visually
//! wrong but non-crashing render).

use serde::{Deserialize, Serialize};

use super::theme::ThemePreset;

/// Hex used when a token is not recognized.
pub const FALLBACK_HEX: &str = "#94a3b8";

/// Named colors from the fixed badge palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    #[default]
    Gold,
    Silver,
    Bronze,
    Onyx,
    Emerald,
    Sapphire,
    Ruby,
    /// Token strings this build does not recognize resolve to a neutral
    /// gray instead of failing.
    #[serde(other)]
    Unknown,
}

impl ColorToken {
    /// Get all selectable tokens for UI pickers (excludes `Unknown`)
    pub fn all() -> &'static [ColorToken] {
        &[
            ColorToken::Gold,
            ColorToken::Silver,
            ColorToken::Bronze,
            ColorToken::Onyx,
            ColorToken::Emerald,
            ColorToken::Sapphire,
            ColorToken::Ruby,
        ]
    }

    /// The fixed hex value for this token.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Gold => "#f59e0b",
            ColorToken::Silver => "#9ca3af",
            ColorToken::Bronze => "#b45309",
            ColorToken::Onyx => "#111827",
            ColorToken::Emerald => "#10b981",
            ColorToken::Sapphire => "#2563eb",
            ColorToken::Ruby => "#dc2626",
            ColorToken::Unknown => FALLBACK_HEX,
        }
    }
}

/// Which theme palette slot a theme-referencing color reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSlot {
    #[default]
    Primary,
    Secondary,
    Accent,
}

/// How one layer's effective color is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorSpec {
    /// A named token from the fixed palette
    Token { token: ColorToken },
    /// A slot in the currently selected theme
    Theme { from: ThemeSlot },
    /// A raw hex string, passed through verbatim and unvalidated
    Custom { value: String },
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Token {
            token: ColorToken::Gold,
        }
    }
}

impl ColorSpec {
    /// Shorthand for a token spec.
    pub fn token(token: ColorToken) -> Self {
        ColorSpec::Token { token }
    }

    /// Shorthand for a theme-slot spec.
    pub fn theme(from: ThemeSlot) -> Self {
        ColorSpec::Theme { from }
    }

    /// Shorthand for a custom hex spec.
    pub fn custom(value: impl Into<String>) -> Self {
        ColorSpec::Custom {
            value: value.into(),
        }
    }

    /// Resolve the effective hex color against a theme. Total.
    pub fn resolve<'a>(&'a self, theme: &'a ThemePreset) -> &'a str {
        match self {
            ColorSpec::Token { token } => token.hex(),
            ColorSpec::Theme { from } => match from {
                ThemeSlot::Primary => theme.colors.primary,
                ThemeSlot::Secondary => theme.colors.secondary,
                ThemeSlot::Accent => theme.colors.accent,
            },
            ColorSpec::Custom { value } => value,
        }
    }
}
