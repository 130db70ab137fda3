/// Braille dot canvas for terminal rendering
/// Each terminal cell holds a 2×4 grid of dots, so a W×H cell area gives
/// a (2W)×(4H) drawing surface

// Bit for each (column, row) inside a cell, following Unicode dot numbering:
// 1 4
// 2 5
// 3 6
// 7 8
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

const BRAILLE_BASE: u32 = 0x2800;

pub struct BrailleCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<u8>, // row-major dot patterns
}

impl BrailleCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![0; cols * rows],
        }
    }

    /// Width in dots (2 per cell)
    pub fn dot_width(&self) -> usize {
        self.cols * 2
    }

    /// Height in dots (4 per cell)
    pub fn dot_height(&self) -> usize {
        self.rows * 4
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Light a single dot; anything off-canvas is dropped
    pub fn set_dot(&mut self, x: usize, y: usize) {
        let (col, row) = (x / 2, y / 4);
        if col >= self.cols || row >= self.rows {
            return;
        }
        self.cells[row * self.cols + col] |= DOT_BITS[x % 2][y % 4];
    }

    /// Light every dot in a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let x_end = (x + width).min(self.dot_width());
        let y_end = (y + height).min(self.dot_height());
        for py in y..y_end {
            for px in x..x_end {
                self.set_dot(px, py);
            }
        }
    }

    pub fn cell_char(&self, col: usize, row: usize) -> char {
        if col >= self.cols || row >= self.rows {
            return ' ';
        }
        let pattern = self.cells[row * self.cols + col] as u32;
        char::from_u32(BRAILLE_BASE + pattern).unwrap_or(' ')
    }

    /// One terminal row of Braille characters
    pub fn row_text(&self, row: usize) -> String {
        (0..self.cols).map(|col| self.cell_char(col, row)).collect()
    }

    #[cfg(test)]
    pub(crate) fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dots() {
        let mut canvas = BrailleCanvas::new(2, 2);

        canvas.set_dot(0, 0);
        assert_eq!(canvas.cell_char(0, 0), '⠁'); // dot 1

        canvas.set_dot(1, 3);
        assert_eq!(canvas.cell_char(0, 0), '⢁'); // dots 1 and 8
        assert_eq!(canvas.cell_char(1, 1), '⠀');
    }

    #[test]
    fn test_fill_full_cell() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.row_text(0), "⣿⠀");
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.fill_rect(1, 2, 50, 50);
        // Right column, bottom two rows: dots 6 and 8
        assert_eq!(canvas.cell_char(0, 0), '⢠');
        assert!(!canvas.is_blank());
    }
}
