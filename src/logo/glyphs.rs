use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

/// 5x7 bitmaps for the letters the placeholder logo needs.
fn bitmap(ch: char) -> Option<[&'static str; GLYPH_ROWS as usize]> {
    let rows = match ch {
        'L' => [
            "#....", "#....", "#....", "#....", "#....", "#....", "#####",
        ],
        'O' => [
            ".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###.",
        ],
        'G' => [
            ".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".###.",
        ],
        _ => return None,
    };
    Some(rows)
}

/// Pixel size of one bitmap cell for a target text height.
fn cell_size(height: u32) -> u32 {
    (height / GLYPH_ROWS).max(1)
}

/// Width and height `text` occupies when drawn at `height` pixels.
pub fn measure(text: &str, height: u32) -> (u32, u32) {
    let cell = cell_size(height);
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let columns = count * GLYPH_COLUMNS + (count - 1);
    (columns * cell, GLYPH_ROWS * cell)
}

/// Draws `text` with its top-left corner at `(x, y)`; unknown characters leave a gap.
pub fn draw(canvas: &mut RgbaImage, text: &str, x: i32, y: i32, height: u32, color: Rgba<u8>) {
    let cell = cell_size(height);
    let advance = ((GLYPH_COLUMNS + 1) * cell) as i32;

    for (index, ch) in text.chars().enumerate() {
        let Some(rows) = bitmap(ch) else {
            continue;
        };
        let origin_x = x + index as i32 * advance;
        for (row, pattern) in rows.iter().enumerate() {
            for (column, mark) in pattern.chars().enumerate() {
                if mark != '#' {
                    continue;
                }
                let rect = Rect::at(
                    origin_x + (column as u32 * cell) as i32,
                    y + (row as u32 * cell) as i32,
                )
                .of_size(cell, cell);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}
