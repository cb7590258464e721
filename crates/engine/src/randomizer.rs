//! Random badge generation
//!
//! Backs the editor's "randomize everything" and "randomize colors"
//! actions. The RNG is injected by the caller so tests stay
//! deterministic with a seeded generator.

use rand::Rng;

use playdeck_domain::value_objects::color::{ColorSpec, ColorToken, ThemeSlot};
use playdeck_domain::value_objects::icon::{
    AchievementIconConfig, BaseLayer, BaseShape, Decoration, DecorationKind,
    DecorationPosition, SymbolKind, SymbolLayer,
};
use playdeck_domain::value_objects::theme::ThemeId;

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> ColorSpec {
    // Two thirds tokens, one third theme references; custom hex is a
    // deliberate user choice and never randomized
    if rng.gen_range(0..3) < 2 {
        ColorSpec::token(pick(rng, ColorToken::all()))
    } else {
        ColorSpec::theme(pick(
            rng,
            &[ThemeSlot::Primary, ThemeSlot::Secondary, ThemeSlot::Accent],
        ))
    }
}

fn random_decoration<R: Rng + ?Sized>(rng: &mut R) -> Decoration {
    let kind = pick(rng, DecorationKind::all());
    Decoration {
        kind,
        color: random_color(rng),
        position: pick(
            rng,
            &[
                DecorationPosition::Center,
                DecorationPosition::Top,
                DecorationPosition::Bottom,
            ],
        ),
        count: (kind == DecorationKind::Stars).then(|| rng.gen_range(1..=5)),
    }
}

/// A fully random icon configuration: random theme, shape, symbol, and
/// zero to two decorations per stack.
pub fn random_icon<R: Rng + ?Sized>(rng: &mut R) -> AchievementIconConfig {
    let mut icon = AchievementIconConfig {
        theme: pick(rng, ThemeId::all()),
        base: BaseLayer {
            shape: pick(rng, BaseShape::all()),
            color: random_color(rng),
        },
        symbol: SymbolLayer {
            kind: pick(rng, SymbolKind::all()),
            color: random_color(rng),
        },
        back_decorations: Vec::new(),
        front_decorations: Vec::new(),
        profile_frame: None,
    };
    for _ in 0..rng.gen_range(0..=2) {
        icon.back_decorations.push(random_decoration(rng));
    }
    for _ in 0..rng.gen_range(0..=2) {
        icon.front_decorations.push(random_decoration(rng));
    }
    icon
}

/// Re-roll every layer color in place, keeping shapes and stacking.
pub fn randomize_colors<R: Rng + ?Sized>(icon: &mut AchievementIconConfig, rng: &mut R) {
    icon.base.color = random_color(rng);
    icon.symbol.color = random_color(rng);
    for deco in icon
        .back_decorations
        .iter_mut()
        .chain(icon.front_decorations.iter_mut())
    {
        deco.color = random_color(rng);
    }
}
