/// Alpha values strictly above this count as opaque.
pub const ALPHA_THRESHOLD: u8 = 127;

const WORD_BITS: u32 = 64;

/// Per-pixel opaque/transparent bitmap for pixel-accurate collision.
///
/// Rows are packed into `u64` words, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    /// Fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS) as usize;
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Fully opaque mask.
    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Build from an RGBA8 buffer using the alpha channel. Returns `None` if
    /// the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        let w = width as usize;
        Some(Self::from_fn(width, height, |x, y| {
            rgba[(y as usize * w + x as usize) * 4 + 3] > ALPHA_THRESHOLD
        }))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> (usize, u64) {
        let word = y as usize * self.words_per_row + (x / WORD_BITS) as usize;
        (word, 1u64 << (x % WORD_BITS))
    }

    /// Out-of-range coordinates read as transparent.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (word, bit) = self.index(x, y);
        self.bits[word] & bit != 0
    }

    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (word, bit) = self.index(x, y);
        if opaque {
            self.bits[word] |= bit;
        } else {
            self.bits[word] &= !bit;
        }
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Mirror image across the vertical axis.
    pub fn flipped_horizontal(&self) -> Self {
        let w = self.width;
        Self::from_fn(w, self.height, |x, y| self.get(w - 1 - x, y))
    }

    /// Nearest-neighbour 2x upscale.
    pub fn scale2x(&self) -> Self {
        Self::from_fn(self.width * 2, self.height * 2, |x, y| self.get(x / 2, y / 2))
    }

    /// Whether any opaque pixel of `other`, placed at `(offset_x, offset_y)`
    /// relative to this mask's origin, lands on an opaque pixel of this mask.
    pub fn overlaps(&self, other: &Mask, offset_x: i32, offset_y: i32) -> bool {
        let x0 = offset_x.max(0);
        let y0 = offset_y.max(0);
        let x1 = (self.width as i32).min(offset_x + other.width as i32);
        let y1 = (self.height as i32).min(offset_y + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }
        for y in y0..y1 {
            let oy = (y - offset_y) as u32;
            for x in x0..x1 {
                if self.get(x as u32, y as u32) && other.get((x - offset_x) as u32, oy) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_across_word_boundary() {
        let mut m = Mask::new(130, 2);
        m.set(63, 0, true);
        m.set(64, 1, true);
        m.set(129, 1, true);
        assert!(m.get(63, 0));
        assert!(m.get(64, 1));
        assert!(m.get(129, 1));
        assert!(!m.get(64, 0));
        assert_eq!(m.count(), 3);
        assert!(!m.get(500, 0));
    }

    #[test]
    fn from_rgba_uses_alpha_threshold() {
        // 2x1: first pixel alpha 128 (opaque), second 127 (transparent)
        let rgba = [0, 0, 0, 128, 255, 255, 255, 127];
        let m = Mask::from_rgba(2, 1, &rgba).unwrap();
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(Mask::from_rgba(2, 2, &rgba).is_none());
    }

    #[test]
    fn flip_mirrors_columns() {
        let m = Mask::from_fn(4, 1, |x, _| x == 0);
        let f = m.flipped_horizontal();
        assert!(f.get(3, 0));
        assert!(!f.get(0, 0));
    }

    #[test]
    fn scale2x_quadruples_pixels() {
        let m = Mask::from_fn(3, 3, |x, y| x == 1 && y == 1);
        let s = m.scale2x();
        assert_eq!(s.width(), 6);
        assert_eq!(s.count(), 4);
        assert!(s.get(2, 2) && s.get(3, 3));
    }

    #[test]
    fn overlap_respects_transparent_pixels() {
        // Left half opaque only
        let a = Mask::from_fn(10, 10, |x, _| x < 5);
        let b = Mask::filled(4, 4);
        assert!(a.overlaps(&b, 0, 0));
        // Placed entirely over the transparent right half
        assert!(!a.overlaps(&b, 6, 3));
        // Straddling the boundary
        assert!(a.overlaps(&b, 3, 3));
        // Disjoint
        assert!(!a.overlaps(&b, 10, 0));
        assert!(!a.overlaps(&b, -4, 0));
    }

    #[test]
    fn overlap_with_negative_offset() {
        let a = Mask::filled(4, 4);
        let b = Mask::filled(4, 4);
        assert!(a.overlaps(&b, -3, -3));
        assert!(!a.overlaps(&b, -4, 0));
    }
}
