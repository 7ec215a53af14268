//! Static starfield drawn behind everything else.
//!
//! Generated once per terminal size. The simulation itself never uses
//! randomness; this is purely decoration.

use rand::Rng;

const STAR_DENSITY: f64 = 0.02;
const STAR_GLYPHS: [char; 3] = ['.', '·', '*'];

#[derive(Clone, Debug)]
pub struct Star {
    pub col: u16,
    pub row: u16,
    pub glyph: char,
    /// 0..=255, used as the grey level.
    pub brightness: u8,
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter stars over rows `first_row..first_row + rows`.
    pub fn generate(rng: &mut impl Rng, cols: u16, first_row: u16, rows: u16) -> Self {
        let count = (cols as f64 * rows as f64 * STAR_DENSITY) as usize;
        if cols == 0 || rows == 0 {
            return Starfield::default();
        }
        let stars = (0..count)
            .map(|_| Star {
                col: rng.gen_range(0..cols),
                row: first_row + rng.gen_range(0..rows),
                glyph: STAR_GLYPHS[rng.gen_range(0..STAR_GLYPHS.len())],
                brightness: rng.gen_range(90..=200),
            })
            .collect();
        Starfield { stars }
    }
}
