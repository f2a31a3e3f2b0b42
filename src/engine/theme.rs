//! Random green theme colour and its once-per-session cache.

use std::fmt;
use std::ops::Range;

use once_cell::unsync::OnceCell;
use rand::Rng;

/// Channel bounds that keep green visibly dominant.
pub const RED_RANGE: Range<u8> = 0..80;
pub const BLUE_RANGE: Range<u8> = 0..80;
/// Lower bound for green; the upper bound is the channel maximum (255).
pub const GREEN_MIN: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl GreenColor {
    /// Draw one colour: r in [0,80), g in [120,256), b in [0,80).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(RED_RANGE),
            g: rng.random_range(GREEN_MIN..=u8::MAX),
            b: rng.random_range(BLUE_RANGE),
        }
    }

    /// Blend toward white by `amount` (0.0 = unchanged, 1.0 = white).
    pub fn lighten(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 {
            let c = f32::from(c);
            (c + (255.0 - c) * amount).round() as u8
        };
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

/// `#RRGGBB`, uppercase.
impl fmt::Display for GreenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Whether [`ColorCache::get_or_generate_with`] drew a new colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrigin {
    Generated,
    Reused,
}

/// Session colour, unset until the first theme request and never reset.
#[derive(Debug, Default)]
pub struct ColorCache {
    color: OnceCell<GreenColor>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<GreenColor> {
        self.color.get().copied()
    }

    /// Return the cached colour, calling `draw` only when nothing is cached yet.
    pub fn get_or_generate_with<F>(&self, draw: F) -> (GreenColor, ColorOrigin)
    where
        F: FnOnce() -> GreenColor,
    {
        if let Some(color) = self.color.get() {
            return (*color, ColorOrigin::Reused);
        }
        (*self.color.get_or_init(draw), ColorOrigin::Generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    #[test]
    fn draws_stay_green_dominant() {
        let hex = regex::Regex::new(r"^#[0-9A-F]{6}$").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let c = GreenColor::random(&mut rng);
            assert!(c.r < 80, "red out of range: {c}");
            assert!(c.g >= 120, "green out of range: {c}");
            assert!(c.b < 80, "blue out of range: {c}");
            assert!(hex.is_match(&c.to_string()), "bad hex: {c}");
        }
    }

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        let c = GreenColor { r: 0x0a, g: 0xff, b: 0x05 };
        assert_eq!(c.to_string(), "#0AFF05");
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = GreenColor { r: 0, g: 200, b: 40 };
        assert_eq!(c.lighten(0.0), c);
        assert_eq!(c.lighten(1.0), GreenColor { r: 255, g: 255, b: 255 });
        let half = c.lighten(0.5);
        assert!(half.r > c.r && half.g > c.g && half.b > c.b);
    }

    #[test]
    fn cache_draws_once() {
        let cache = ColorCache::new();
        assert_eq!(cache.get(), None);

        let draws = Cell::new(0);
        let draw = || {
            draws.set(draws.get() + 1);
            GreenColor { r: 10, g: 150, b: 20 }
        };

        let (first, origin) = cache.get_or_generate_with(draw);
        assert_eq!(origin, ColorOrigin::Generated);

        for _ in 0..3 {
            let (again, origin) = cache.get_or_generate_with(|| {
                draws.set(draws.get() + 1);
                GreenColor { r: 0, g: 255, b: 0 }
            });
            assert_eq!(origin, ColorOrigin::Reused);
            assert_eq!(again, first);
        }
        assert_eq!(draws.get(), 1);
        assert_eq!(cache.get(), Some(first));
    }
}
