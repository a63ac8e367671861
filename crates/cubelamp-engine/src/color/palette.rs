//! Named colors and the process-lifetime palette tables.

use super::Rgb;

pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
pub const PINK: Rgb = Rgb::new(0xFF, 0x14, 0x93);
pub const ORANGE: Rgb = Rgb::new(0xFF, 0xA5, 0x00);
pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);
pub const MAGENTA: Rgb = Rgb::new(0xFF, 0x00, 0xFF);
pub const CYAN: Rgb = Rgb::new(0x00, 0xFF, 0xFF);

/// An ordered, immutable color table addressed cyclically.
///
/// Lookups wrap via remainder, so any index is valid.
#[derive(Clone, Copy, Debug)]
pub struct Palette(&'static [Rgb]);

impl Palette {
    /// Invariant: the table must hold at least one color.
    pub const fn new(colors: &'static [Rgb]) -> Self {
        assert!(!colors.is_empty());
        Self(colors)
    }

    /// Color at `index`, wrapping past the end of the table.
    pub fn at(&self, index: usize) -> Rgb {
        self.0[index % self.0.len()]
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub const fn colors(&self) -> &'static [Rgb] {
        self.0
    }
}

/// Main color sequence used by the fade, hop and slide routines.
pub const PALETTE: Palette = Palette::new(&[
    RED, GREEN, BLUE, PINK, ORANGE, YELLOW, MAGENTA, CYAN, WHITE,
]);

/// Shorter table used by the rotational routines.
pub const SPIN_PALETTE: Palette = Palette::new(&[RED, GREEN, BLUE]);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn palette_lengths() {
        assert_eq!(PALETTE.len(), 9);
        assert_eq!(SPIN_PALETTE.len(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(9)]
    #[case(10)]
    #[case(9 * 7 + 4)]
    fn lookup_wraps_via_remainder(#[case] n: usize) {
        assert_eq!(PALETTE.at(n), PALETTE.at(n % PALETTE.len()));
        assert_eq!(SPIN_PALETTE.at(n), SPIN_PALETTE.at(n % SPIN_PALETTE.len()));
    }

    #[test]
    fn main_palette_order() {
        assert_eq!(PALETTE.at(0), RED);
        assert_eq!(PALETTE.at(8), WHITE);
        // index 9 wraps back to the first entry
        assert_eq!(PALETTE.at(9), RED);
    }
}
