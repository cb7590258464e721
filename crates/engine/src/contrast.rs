//! WCAG contrast helper
//!
//! Backs the editor's contrast tip when a symbol color sits on a base
//! color. Standard WCAG 2.x relative luminance and contrast ratio;
//! invalid hex strings yield `None` rather than failing the editor.

/// WCAG conformance buckets for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    /// >= 7.0
    Aaa,
    /// >= 4.5
    Aa,
    /// >= 3.0, acceptable for large graphical elements
    Large,
    /// < 3.0
    Fail,
}

impl ContrastLevel {
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ContrastLevel::Aaa
        } else if ratio >= 4.5 {
            ContrastLevel::Aa
        } else if ratio >= 3.0 {
            ContrastLevel::Large
        } else {
            ContrastLevel::Fail
        }
    }
}

/// Parse `#rrggbb` or `#rgb` (case-insensitive, leading `#` optional).
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim().trim_start_matches('#');
    match hex.len() {
        6 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
        }
        3 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            let (r, g, b) = ((value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf);
            Some([(r * 17) as u8, (g * 17) as u8, (b * 17) as u8])
        }
        _ => None,
    }
}

fn channel(value: u8) -> f64 {
    let c = f64::from(value) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a hex color; `None` on unparseable input.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let [r, g, b] = parse_hex(hex)?;
    Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

/// WCAG contrast ratio between two hex colors, in 1.0..=21.0.
pub fn contrast_ratio(foreground: &str, background: &str) -> Option<f64> {
    let fg = relative_luminance(foreground)?;
    let bg = relative_luminance(background)?;
    let (lighter, darker) = if fg >= bg { (fg, bg) } else { (bg, fg) };
    Some((lighter + 0.05) / (darker + 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white_is_maximum_contrast() {
        let ratio = contrast_ratio("#000000", "#ffffff").expect("valid hex");
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(ContrastLevel::classify(ratio), ContrastLevel::Aaa);
    }

    #[test]
    fn test_same_color_is_unity() {
        let ratio = contrast_ratio("#f59e0b", "#f59e0b").expect("valid hex");
        assert!((ratio - 1.0).abs() < 1e-9);
        assert_eq!(ContrastLevel::classify(ratio), ContrastLevel::Fail);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = contrast_ratio("#111827", "#f59e0b").expect("valid hex");
        let b = contrast_ratio("#f59e0b", "#111827").expect("valid hex");
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(
            relative_luminance("#fff"),
            relative_luminance("#ffffff")
        );
        assert_eq!(relative_luminance("abc"), relative_luminance("#aabbcc"));
    }

    #[test]
    fn test_invalid_hex_yields_none() {
        assert!(relative_luminance("not-a-color").is_none());
        assert!(contrast_ratio("#12345", "#ffffff").is_none());
        assert!(contrast_ratio("", "#ffffff").is_none());
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(ContrastLevel::classify(7.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::classify(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::classify(4.49), ContrastLevel::Large);
        assert_eq!(ContrastLevel::classify(3.0), ContrastLevel::Large);
        assert_eq!(ContrastLevel::classify(2.99), ContrastLevel::Fail);
    }
}
