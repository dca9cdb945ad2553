//! Bitmap glyph rasterization onto packed RGB buffers.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use super::color::Rgb;

const GLYPH_CELLS: f64 = 8.0;

/// Look up the 8x8 bitmap for `ch`, substituting `?` for characters the
/// font does not cover.
pub(crate) fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// A run of text positioned in output pixel space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextRun<'a> {
    pub text: &'a str,
    pub left: f64,
    pub top: f64,
    pub advance: f64,
    pub size: f64,
    pub color: Rgb,
}

/// Fill every pixel whose center lands on an inked glyph cell.
///
/// Pixels outside the `width` x `height` buffer are skipped, so text that
/// overhangs any edge is clipped.
pub(crate) fn draw_run(pixels: &mut [u8], width: u32, height: u32, run: &TextRun<'_>) {
    if run.text.is_empty() || run.advance <= 0.0 || run.size <= 0.0 {
        return;
    }
    if pixels.len() < (width as usize) * (height as usize) * 3 {
        return;
    }

    let glyphs: Vec<[u8; 8]> = run.text.chars().map(glyph).collect();
    let total_width = glyphs.len() as f64 * run.advance;

    let x_start = run.left.floor().max(0.0) as i64;
    let x_end = ((run.left + total_width).ceil() as i64).min(width as i64);
    let y_start = run.top.floor().max(0.0) as i64;
    let y_end = ((run.top + run.size).ceil() as i64).min(height as i64);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    let ink = run.color.to_array();
    let stride = width as usize * 3;

    for py in y_start..y_end {
        let local_y = py as f64 + 0.5 - run.top;
        if local_y < 0.0 || local_y >= run.size {
            continue;
        }
        let row = ((local_y / run.size * GLYPH_CELLS) as usize).min(7);
        let row_start = py as usize * stride;

        for px in x_start..x_end {
            let local_x = px as f64 + 0.5 - run.left;
            if local_x < 0.0 || local_x >= total_width {
                continue;
            }
            let index = ((local_x / run.advance) as usize).min(glyphs.len() - 1);
            let within = local_x - index as f64 * run.advance;
            let col = ((within / run.advance * GLYPH_CELLS) as usize).min(7);

            // font8x8 stores the leftmost column in the least significant bit.
            if (glyphs[index][row] >> col) & 1 == 1 {
                let idx = row_start + px as usize * 3;
                pixels[idx..idx + 3].copy_from_slice(&ink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, left: f64, top: f64) -> TextRun<'_> {
        TextRun {
            text,
            left,
            top,
            advance: 8.0,
            size: 8.0,
            color: Rgb::new(255, 0, 0),
        }
    }

    fn inked(pixels: &[u8]) -> usize {
        pixels.chunks_exact(3).filter(|p| *p == [255, 0, 0]).count()
    }

    #[test]
    fn test_glyph_fallbacks() {
        assert_ne!(glyph('A'), [0; 8]);
        assert_ne!(glyph('é'), [0; 8]);
        assert_eq!(glyph(' '), [0; 8]);
        // Outside both tables.
        assert_eq!(glyph('\u{4e2d}'), glyph('?'));
    }

    #[test]
    fn test_unscaled_glyph_matches_bitmap() {
        let mut pixels = vec![0u8; 8 * 8 * 3];
        draw_run(&mut pixels, 8, 8, &run("A", 0.0, 0.0));

        let bitmap = glyph('A');
        let expected: usize = bitmap.iter().map(|row| row.count_ones() as usize).sum();
        assert_eq!(inked(&pixels), expected);

        for (y, row) in bitmap.iter().enumerate() {
            for x in 0..8 {
                let idx = (y * 8 + x) * 3;
                let set = (row >> x) & 1 == 1;
                assert_eq!(pixels[idx] == 255, set, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_clipped_run_draws_partial_glyphs() {
        let mut full = vec![0u8; 16 * 8 * 3];
        draw_run(&mut full, 16, 8, &run("AA", 0.0, 0.0));

        let mut clipped = vec![0u8; 16 * 8 * 3];
        draw_run(&mut clipped, 16, 8, &run("AA", -8.0, 0.0));

        // Only the second glyph remains, shifted into the first cell.
        assert_eq!(inked(&clipped) * 2, inked(&full));
    }

    #[test]
    fn test_fully_offscreen_run_is_noop() {
        let mut pixels = vec![7u8; 8 * 8 * 3];
        draw_run(&mut pixels, 8, 8, &run("Hi", 100.0, 100.0));
        draw_run(&mut pixels, 8, 8, &run("Hi", -100.0, -100.0));
        assert!(pixels.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_short_buffer_is_ignored() {
        let mut pixels = vec![0u8; 10];
        draw_run(&mut pixels, 8, 8, &run("A", 0.0, 0.0));
        assert!(pixels.iter().all(|&v| v == 0));
    }
}
