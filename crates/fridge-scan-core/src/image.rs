//! Lightweight image view type.

/// Borrowed view over an interleaved 8-bit RGB buffer.
///
/// Pixels are row-major `r, g, b` triples with no alpha channel, so a
/// well-formed buffer holds `width * height * 3` bytes. The view itself
/// performs no validation; checked construction from user-supplied buffers
/// lives in the `fridge-scan` facade.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    /// Row-major interleaved RGB bytes.
    pub data: &'a [u8],
}

impl<'a> RgbImageView<'a> {
    /// Number of bytes a well-formed buffer carries.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width * self.height * 3
    }

    /// Iterate over whole `[r, g, b]` triples in buffer order.
    ///
    /// Trailing bytes that do not form a whole triple are ignored.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + 'a {
        self.data.chunks_exact(3).map(|px| [px[0], px[1], px[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_yields_whole_triples() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = RgbImageView {
            width: 2,
            height: 1,
            data: &data,
        };
        let px: Vec<[u8; 3]> = view.pixels().collect();
        assert_eq!(px, vec![[1, 2, 3], [4, 5, 6]]);
        assert_eq!(view.expected_len(), 6);
    }

    #[test]
    fn pixels_ignores_trailing_partial_triple() {
        let data = [9u8, 9, 9, 7, 7];
        let view = RgbImageView {
            width: 1,
            height: 1,
            data: &data,
        };
        assert_eq!(view.pixels().count(), 1);
    }
}
