//! Stroke font for plot labels.
//!
//! Glyphs live on a 4x6 grid with the baseline at y = 0 and y pointing up.
//! Each glyph is a list of line segments `(x1, y1, x2, y2)`.

pub type Segment = (i8, i8, i8, i8);

pub const GLYPH_WIDTH: i8 = 4;
pub const GLYPH_HEIGHT: i8 = 6;
pub const ADVANCE: i8 = 6;

const BOX: &[Segment] = &[(0, 0, 4, 0), (4, 0, 4, 6), (4, 6, 0, 6), (0, 6, 0, 0)];

pub fn glyph(c: char) -> &'static [Segment] {
    match c {
        ' ' => &[],
        '0' => &[(0, 0, 4, 0), (4, 0, 4, 6), (4, 6, 0, 6), (0, 6, 0, 0), (0, 0, 4, 6)],
        '1' => &[(2, 0, 2, 6), (2, 6, 1, 5), (1, 0, 3, 0)],
        '2' => &[(0, 6, 4, 6), (4, 6, 4, 3), (4, 3, 0, 3), (0, 3, 0, 0), (0, 0, 4, 0)],
        '3' => &[(0, 6, 4, 6), (4, 6, 4, 0), (4, 0, 0, 0), (1, 3, 4, 3)],
        '4' => &[(0, 6, 0, 3), (0, 3, 4, 3), (4, 6, 4, 0)],
        '5' => &[(4, 6, 0, 6), (0, 6, 0, 3), (0, 3, 4, 3), (4, 3, 4, 0), (4, 0, 0, 0)],
        '6' => &[(4, 6, 0, 6), (0, 6, 0, 0), (0, 0, 4, 0), (4, 0, 4, 3), (4, 3, 0, 3)],
        '7' => &[(0, 6, 4, 6), (4, 6, 1, 0)],
        '8' => &[(0, 0, 4, 0), (4, 0, 4, 6), (4, 6, 0, 6), (0, 6, 0, 0), (0, 3, 4, 3)],
        '9' => &[(4, 3, 0, 3), (0, 3, 0, 6), (0, 6, 4, 6), (4, 6, 4, 0), (4, 0, 0, 0)],
        '.' => &[(2, 0, 2, 1)],
        '-' => &[(1, 3, 3, 3)],
        '(' => &[(3, 6, 1, 4), (1, 4, 1, 2), (1, 2, 3, 0)],
        ')' => &[(1, 6, 3, 4), (3, 4, 3, 2), (3, 2, 1, 0)],
        ';' => &[(2, 4, 2, 3), (2, 1, 1, -1)],
        ':' => &[(2, 4, 2, 3), (2, 1, 2, 0)],
        '°' => &[(1, 6, 3, 6), (3, 6, 3, 4), (3, 4, 1, 4), (1, 4, 1, 6)],
        'a' => &[(0, 4, 4, 4), (4, 4, 4, 0), (4, 0, 0, 0), (0, 0, 0, 2), (0, 2, 4, 2)],
        'b' => &[(0, 6, 0, 0), (0, 0, 4, 0), (4, 0, 4, 4), (4, 4, 0, 4)],
        'c' => &[(4, 4, 0, 4), (0, 4, 0, 0), (0, 0, 4, 0)],
        'd' => &[(4, 6, 4, 0), (4, 0, 0, 0), (0, 0, 0, 4), (0, 4, 4, 4)],
        'e' => &[(0, 2, 4, 2), (4, 2, 4, 4), (4, 4, 0, 4), (0, 4, 0, 0), (0, 0, 4, 0)],
        'g' => &[(4, 4, 0, 4), (0, 4, 0, 1), (0, 1, 4, 1), (4, 4, 4, -2), (4, -2, 0, -2)],
        'h' => &[(0, 6, 0, 0), (0, 4, 4, 4), (4, 4, 4, 0)],
        'l' => &[(2, 6, 2, 0)],
        'n' => &[(0, 4, 0, 0), (0, 4, 4, 4), (4, 4, 4, 0)],
        't' => &[(2, 6, 2, 0), (2, 0, 4, 0), (0, 4, 4, 4)],
        'x' => &[(0, 4, 4, 0), (0, 0, 4, 4)],
        'y' => &[(0, 4, 2, 1), (4, 4, 0, -2)],
        _ => BOX,
    }
}

/// Width of a line of text in grid units.
pub fn text_width(text: &str) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        0
    } else {
        count * ADVANCE as i32 - (ADVANCE - GLYPH_WIDTH) as i32
    }
}
